pub mod border;
pub mod card;
pub mod category;
pub mod expansion;
pub mod monster;
pub mod rarity;
pub mod slot;

pub use border::BorderTier;
pub use card::GeneratedCard;
pub use category::PackCategory;
pub use expansion::Expansion;
pub use monster::MonsterId;
pub use rarity::Rarity;
pub use slot::PackSlot;
