use crate::model::border::BorderTier;
use crate::model::expansion::Expansion;
use crate::model::monster::MonsterId;
use crate::model::rarity::Rarity;
use core::fmt;
use serde::{Deserialize, Serialize};

/// One generated card. Owned by the caller once returned; the engine keeps
/// no reference after generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCard {
    pub monster: MonsterId,
    pub rarity: Rarity,
    pub border: BorderTier,
    pub foil: bool,
    pub expansion: Expansion,
    pub destiny: bool,
}

impl fmt::Display for GeneratedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}{}{}",
            self.rarity,
            self.monster,
            self.border,
            if self.foil { " foil" } else { "" },
            if self.destiny { " destiny" } else { "" },
        )
    }
}
