#![deny(warnings)]
pub mod model;
pub mod odds;
pub mod pack;
pub mod pool;
pub mod sampler;

pub use model::{
    BorderTier, Expansion, GeneratedCard, MonsterId, PackCategory, PackSlot, Rarity,
};
pub use odds::{OddsBook, OddsConfig, OddsError};
pub use pack::{OpenedPack, PackAssembler, PackError, PackRequest, PACK_SIZE};
pub use pool::{Catalog, ItemPool};
pub use sampler::{SampleError, select_border, select_foil, select_rarity};
