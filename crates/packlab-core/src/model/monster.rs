use core::fmt;
use serde::{Deserialize, Serialize};

/// Identity of a drawable monster card.
///
/// Identities come from an external catalogue; the engine only moves them
/// between pools and cards. `MonsterId::NONE` is the explicit empty-result
/// sentinel returned when a rarity partition is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonsterId(pub u32);

impl MonsterId {
    pub const NONE: MonsterId = MonsterId(0);

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for MonsterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            f.write_str("none")
        } else {
            write!(f, "#{}", self.0)
        }
    }
}
