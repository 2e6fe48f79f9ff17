use core::fmt;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expansion {
    Tetramon,
    Destiny,
    Ghost,
}

impl Expansion {
    pub const ALL: [Expansion; 3] = [Expansion::Tetramon, Expansion::Destiny, Expansion::Ghost];

    /// Ghost cards always carry the base border; no tier roll is performed.
    pub const fn is_tier_exempt(self) -> bool {
        matches!(self, Expansion::Ghost)
    }

    /// Chance that the final card of a pack is replaced by a ghost card.
    pub const fn ghost_chance(self) -> f32 {
        match self {
            Expansion::Tetramon => 1.0 / 20_000.0,
            Expansion::Destiny => 1.0 / 10_000.0,
            Expansion::Ghost => 0.0,
        }
    }

    /// Resolves the destiny flag for a card of this expansion.
    ///
    /// Tetramon cards never carry it, Destiny cards always do. For Ghost
    /// cards the flag picks the white or black variant with an independent
    /// 50/50 draw.
    pub fn destiny_flag<R: Rng + ?Sized>(self, rng: &mut R) -> bool {
        match self {
            Expansion::Tetramon => false,
            Expansion::Destiny => true,
            Expansion::Ghost => rng.r#gen::<f32>() < 0.5,
        }
    }
}

impl fmt::Display for Expansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Expansion::Tetramon => "Tetramon",
            Expansion::Destiny => "Destiny",
            Expansion::Ghost => "Ghost",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::Expansion;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn only_ghost_is_tier_exempt() {
        assert!(Expansion::Ghost.is_tier_exempt());
        assert!(!Expansion::Tetramon.is_tier_exempt());
        assert!(!Expansion::Destiny.is_tier_exempt());
    }

    #[test]
    fn ghost_chance_constants() {
        assert_eq!(Expansion::Tetramon.ghost_chance(), 1.0 / 20_000.0);
        assert_eq!(Expansion::Destiny.ghost_chance(), 1.0 / 10_000.0);
        assert_eq!(Expansion::Ghost.ghost_chance(), 0.0);
    }

    #[test]
    fn destiny_flag_is_fixed_outside_ghost() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..16 {
            assert!(!Expansion::Tetramon.destiny_flag(&mut rng));
            assert!(Expansion::Destiny.destiny_flag(&mut rng));
        }
    }

    #[test]
    fn ghost_variant_draw_hits_both_sides() {
        let mut rng = StdRng::seed_from_u64(11);
        let draws: Vec<bool> = (0..64).map(|_| Expansion::Ghost.destiny_flag(&mut rng)).collect();
        assert!(draws.iter().any(|&d| d));
        assert!(draws.iter().any(|&d| !d));
    }
}
