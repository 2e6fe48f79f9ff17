use crate::model::expansion::Expansion;
use crate::model::rarity::Rarity;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Pack grade and theme. The set is fixed and small; adding a category is a
/// data change in [`BASE_RARITIES`], not a code change in the samplers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackCategory {
    Basic,
    Rare,
    Epic,
    Legendary,
    DestinyBasic,
    DestinyRare,
    DestinyEpic,
    DestinyLegendary,
    Ghost,
}

/// Base rarity per category for the non-custom-weights model. Categories
/// absent from the table fall back to Common.
pub const BASE_RARITIES: [(PackCategory, Rarity); 8] = [
    (PackCategory::Basic, Rarity::Common),
    (PackCategory::Rare, Rarity::Rare),
    (PackCategory::Epic, Rarity::Epic),
    (PackCategory::Legendary, Rarity::Legendary),
    (PackCategory::DestinyBasic, Rarity::Common),
    (PackCategory::DestinyRare, Rarity::Rare),
    (PackCategory::DestinyEpic, Rarity::Epic),
    (PackCategory::DestinyLegendary, Rarity::Legendary),
];

impl PackCategory {
    pub const ALL: [PackCategory; 9] = [
        PackCategory::Basic,
        PackCategory::Rare,
        PackCategory::Epic,
        PackCategory::Legendary,
        PackCategory::DestinyBasic,
        PackCategory::DestinyRare,
        PackCategory::DestinyEpic,
        PackCategory::DestinyLegendary,
        PackCategory::Ghost,
    ];

    /// Rarity drawn for every slot when custom weights are disabled.
    pub fn base_rarity(self) -> Rarity {
        BASE_RARITIES
            .iter()
            .find(|(category, _)| *category == self)
            .map(|(_, rarity)| *rarity)
            .unwrap_or(Rarity::Common)
    }

    /// Expansion family whose catalogue this category draws from.
    pub const fn expansion(self) -> Expansion {
        match self {
            PackCategory::Basic
            | PackCategory::Rare
            | PackCategory::Epic
            | PackCategory::Legendary => Expansion::Tetramon,
            PackCategory::DestinyBasic
            | PackCategory::DestinyRare
            | PackCategory::DestinyEpic
            | PackCategory::DestinyLegendary => Expansion::Destiny,
            PackCategory::Ghost => Expansion::Ghost,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            PackCategory::Basic => "basic",
            PackCategory::Rare => "rare",
            PackCategory::Epic => "epic",
            PackCategory::Legendary => "legendary",
            PackCategory::DestinyBasic => "destiny_basic",
            PackCategory::DestinyRare => "destiny_rare",
            PackCategory::DestinyEpic => "destiny_epic",
            PackCategory::DestinyLegendary => "destiny_legendary",
            PackCategory::Ghost => "ghost",
        }
    }
}

impl fmt::Display for PackCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PackCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PackCategory::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown pack category '{}'", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

#[cfg(test)]
mod tests {
    use super::{BASE_RARITIES, PackCategory};
    use crate::model::expansion::Expansion;
    use crate::model::rarity::Rarity;

    #[test]
    fn rarity_table_covers_every_graded_category() {
        for category in PackCategory::ALL {
            let mapped = BASE_RARITIES.iter().any(|(c, _)| *c == category);
            // Ghost is the only category intentionally left to the fallback.
            assert_eq!(mapped, category != PackCategory::Ghost);
        }
    }

    #[test]
    fn unmapped_categories_fall_back_to_common() {
        assert_eq!(PackCategory::Ghost.base_rarity(), Rarity::Common);
    }

    #[test]
    fn graded_categories_map_to_their_rarity() {
        assert_eq!(PackCategory::Epic.base_rarity(), Rarity::Epic);
        assert_eq!(PackCategory::DestinyLegendary.base_rarity(), Rarity::Legendary);
    }

    #[test]
    fn expansion_families() {
        assert_eq!(PackCategory::Rare.expansion(), Expansion::Tetramon);
        assert_eq!(PackCategory::DestinyEpic.expansion(), Expansion::Destiny);
        assert_eq!(PackCategory::Ghost.expansion(), Expansion::Ghost);
    }

    #[test]
    fn round_trips_through_strings() {
        for category in PackCategory::ALL {
            assert_eq!(category.as_str().parse::<PackCategory>(), Ok(category));
        }
        assert!("mythic".parse::<PackCategory>().is_err());
    }
}
