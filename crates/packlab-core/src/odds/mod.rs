pub mod book;
pub mod config;

pub use book::OddsBook;
pub use config::{OddsConfig, OddsError};
