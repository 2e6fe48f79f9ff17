use crate::model::border::BorderTier;
use crate::model::rarity::Rarity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Resolved odds table for one category-and-slot.
///
/// Border odds are independent thresholds evaluated in
/// [`BorderTier::DESCENDING`] order; they are not a normalized distribution
/// and need not sum to 1. Rarity weights feed a cumulative roulette draw
/// when `use_custom_rarity_weights` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OddsConfig {
    pub border_odds: BTreeMap<BorderTier, f32>,
    pub rarity_weights: BTreeMap<Rarity, f32>,
    pub use_custom_rarity_weights: bool,
    pub foil_chance: f32,
}

impl Default for OddsConfig {
    fn default() -> Self {
        let border_odds = BTreeMap::from([
            (BorderTier::Base, 1.0),
            (BorderTier::FirstEdition, 0.20),
            (BorderTier::Silver, 0.08),
            (BorderTier::Gold, 0.04),
            (BorderTier::Ex, 0.01),
            (BorderTier::FullArt, 0.0025),
        ]);
        let rarity_weights = Rarity::ALL.iter().map(|&rarity| (rarity, 0.25)).collect();
        Self {
            border_odds,
            rarity_weights,
            use_custom_rarity_weights: false,
            foil_chance: 0.05,
        }
    }
}

impl OddsConfig {
    /// Threshold for one border tier; unconfigured tiers count as zero.
    pub fn border_odd(&self, tier: BorderTier) -> f32 {
        self.border_odds.get(&tier).copied().unwrap_or(0.0)
    }

    /// Weight for one rarity; unconfigured rarities count as zero.
    pub fn rarity_weight(&self, rarity: Rarity) -> f32 {
        self.rarity_weights.get(&rarity).copied().unwrap_or(0.0)
    }

    pub fn total_rarity_weight(&self) -> f32 {
        Rarity::ALL.iter().map(|&rarity| self.rarity_weight(rarity)).sum()
    }

    /// Structural checks used by configuration loaders. Sampling keeps its
    /// own guard against negative weights so a hand-built config cannot
    /// corrupt a draw.
    pub fn validate(&self) -> Result<(), OddsError> {
        for (&tier, &odd) in &self.border_odds {
            if !(0.0..=1.0).contains(&odd) || odd.is_nan() {
                return Err(OddsError::BorderOddOutOfRange { tier, value: odd });
            }
        }
        for (&rarity, &weight) in &self.rarity_weights {
            if weight < 0.0 || weight.is_nan() {
                return Err(OddsError::NegativeRarityWeight { rarity, weight });
            }
        }
        if !(0.0..=1.0).contains(&self.foil_chance) || self.foil_chance.is_nan() {
            return Err(OddsError::FoilChanceOutOfRange { value: self.foil_chance });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OddsError {
    BorderOddOutOfRange { tier: BorderTier, value: f32 },
    NegativeRarityWeight { rarity: Rarity, weight: f32 },
    FoilChanceOutOfRange { value: f32 },
}

impl fmt::Display for OddsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OddsError::BorderOddOutOfRange { tier, value } => {
                write!(f, "border odd for {tier} must be in [0, 1], got {value}")
            }
            OddsError::NegativeRarityWeight { rarity, weight } => {
                write!(f, "rarity weight for {rarity} must be non-negative, got {weight}")
            }
            OddsError::FoilChanceOutOfRange { value } => {
                write!(f, "foil chance must be in [0, 1], got {value}")
            }
        }
    }
}

impl std::error::Error for OddsError {}
