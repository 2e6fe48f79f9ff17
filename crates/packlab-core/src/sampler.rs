//! Pure selection algorithms over an injected random source.

use crate::model::border::BorderTier;
use crate::model::category::PackCategory;
use crate::model::rarity::Rarity;
use crate::odds::config::OddsConfig;
use rand::Rng;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SampleError {
    NegativeRarityWeight { rarity: Rarity, weight: f32 },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleError::NegativeRarityWeight { rarity, weight } => {
                write!(f, "rarity weight for {rarity} is negative ({weight})")
            }
        }
    }
}

impl std::error::Error for SampleError {}

/// Picks a rarity for one card.
///
/// With custom weights disabled the category's base rarity is returned and
/// no randomness is consumed. With custom weights enabled, a non-positive
/// weight total falls back to Common; otherwise a uniform roll in
/// [0, total) walks [`Rarity::ALL`] and the first rarity whose cumulative
/// weight reaches the roll wins.
pub fn select_rarity<R: Rng + ?Sized>(
    config: &OddsConfig,
    category: PackCategory,
    rng: &mut R,
) -> Result<Rarity, SampleError> {
    if !config.use_custom_rarity_weights {
        return Ok(category.base_rarity());
    }

    let mut total = 0.0_f32;
    for rarity in Rarity::ALL {
        let weight = config.rarity_weight(rarity);
        if weight < 0.0 {
            return Err(SampleError::NegativeRarityWeight { rarity, weight });
        }
        total += weight;
    }

    if total <= 0.0 {
        return Ok(Rarity::Common);
    }

    let roll = rng.gen_range(0.0..total);
    let mut cumulative = 0.0_f32;
    for rarity in Rarity::ALL {
        cumulative += config.rarity_weight(rarity);
        if roll <= cumulative {
            return Ok(rarity);
        }
    }

    // Unreachable unless rounding leaves the roll past the last cumulative
    // step; mirror the total<=0 fallback in that case.
    Ok(Rarity::Common)
}

/// Picks a border tier for one card.
///
/// Tier-exempt cards always take Base without consuming randomness. One
/// roll in [0, 1) is checked against a running cumulative sum over
/// [`BorderTier::DESCENDING`]; the first tier whose cumulative threshold
/// exceeds the roll wins, otherwise Base. The thresholds are independent
/// and order-dependent: they may sum below 1 (remainder maps to Base) or
/// above 1 (later tiers become unreachable).
pub fn select_border<R: Rng + ?Sized>(
    config: &OddsConfig,
    tier_exempt: bool,
    rng: &mut R,
) -> BorderTier {
    if tier_exempt {
        return BorderTier::Base;
    }

    let roll = rng.r#gen::<f32>();
    let mut cumulative = 0.0_f32;
    for tier in BorderTier::DESCENDING {
        cumulative += config.border_odd(tier);
        if roll < cumulative {
            return tier;
        }
    }
    BorderTier::Base
}

/// One Bernoulli draw for the foil finish, independent of rarity and tier.
pub fn select_foil<R: Rng + ?Sized>(foil_chance: f32, rng: &mut R) -> bool {
    rng.r#gen::<f32>() < foil_chance
}
