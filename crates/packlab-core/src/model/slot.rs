use core::fmt;
use serde::{Deserialize, Serialize};

/// Which odds table a pack position draws from: the first six cards share
/// one table, the single final card uses another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackSlot {
    FirstSix,
    Final,
}

impl PackSlot {
    pub const ALL: [PackSlot; 2] = [PackSlot::FirstSix, PackSlot::Final];
}

impl fmt::Display for PackSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            PackSlot::FirstSix => "first_six",
            PackSlot::Final => "final",
        };
        f.write_str(text)
    }
}
