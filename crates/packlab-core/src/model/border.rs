use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum BorderTier {
    Base = 0,
    FirstEdition = 1,
    Silver = 2,
    Gold = 3,
    Ex = 4,
    FullArt = 5,
}

impl BorderTier {
    pub const ALL: [BorderTier; 6] = [
        BorderTier::Base,
        BorderTier::FirstEdition,
        BorderTier::Silver,
        BorderTier::Gold,
        BorderTier::Ex,
        BorderTier::FullArt,
    ];

    /// Threshold evaluation order: rarest first. Base is the fallback tier
    /// and is never evaluated against a threshold.
    pub const DESCENDING: [BorderTier; 5] = [
        BorderTier::FullArt,
        BorderTier::Ex,
        BorderTier::Gold,
        BorderTier::Silver,
        BorderTier::FirstEdition,
    ];
}

impl fmt::Display for BorderTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            BorderTier::Base => "Base",
            BorderTier::FirstEdition => "FirstEdition",
            BorderTier::Silver => "Silver",
            BorderTier::Gold => "Gold",
            BorderTier::Ex => "EX",
            BorderTier::FullArt => "FullArt",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::BorderTier;

    #[test]
    fn descending_order_starts_with_rarest() {
        assert_eq!(BorderTier::DESCENDING[0], BorderTier::FullArt);
        assert_eq!(BorderTier::DESCENDING[4], BorderTier::FirstEdition);
    }

    #[test]
    fn base_is_not_in_the_evaluation_order() {
        assert!(!BorderTier::DESCENDING.contains(&BorderTier::Base));
    }

    #[test]
    fn display_matches_names() {
        assert_eq!(BorderTier::Ex.to_string(), "EX");
        assert_eq!(BorderTier::FullArt.to_string(), "FullArt");
    }
}
