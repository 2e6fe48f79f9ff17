use packlab_core::{BorderTier, OddsBook, OddsConfig, PackCategory, PackSlot, Rarity};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::Level;

const DEFAULT_PACKS: u64 = 1_000;

/// Root simulator configuration loaded from YAML.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct SimConfig {
    #[serde(default)]
    pub global: GlobalOdds,
    #[serde(default)]
    pub overrides: BTreeMap<PackCategory, SlotOverrides>,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SimConfig {
    /// Load configuration from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let cfg: SimConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.global
            .first_six
            .to_config()
            .validate()
            .map_err(|source| ValidationError::Odds {
                section: "global.first_six".to_string(),
                source,
            })?;
        self.global
            .r#final
            .to_config()
            .validate()
            .map_err(|source| ValidationError::Odds {
                section: "global.final".to_string(),
                source,
            })?;

        for (category, slots) in &self.overrides {
            for (slot, section) in [
                (PackSlot::FirstSix, slots.first_six.as_ref()),
                (PackSlot::Final, slots.r#final.as_ref()),
            ] {
                if let Some(section) = section {
                    section.to_config().validate().map_err(|source| {
                        ValidationError::Odds {
                            section: format!("overrides.{category}.{slot}"),
                            source,
                        }
                    })?;
                }
            }
        }

        self.simulation.validate()?;
        Ok(())
    }

    /// Lower the file schema into the core odds book.
    pub fn build_book(&self) -> OddsBook {
        let mut book = OddsBook::new(
            self.global.first_six.to_config(),
            self.global.r#final.to_config(),
        );
        for (&category, slots) in &self.overrides {
            if let Some(section) = &slots.first_six {
                book = book.with_override(category, PackSlot::FirstSix, section.to_config());
            }
            if let Some(section) = &slots.r#final {
                book = book.with_override(category, PackSlot::Final, section.to_config());
            }
        }
        book
    }
}

/// Global default odds per slot.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct GlobalOdds {
    #[serde(default)]
    pub first_six: OddsSection,
    #[serde(default)]
    pub r#final: OddsSection,
}

/// Optional per-category override sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct SlotOverrides {
    #[serde(default)]
    pub first_six: Option<OddsSection>,
    #[serde(default)]
    pub r#final: Option<OddsSection>,
}

/// One odds table as written in the file. Entries overlay the stock
/// tables, so a section only needs to name the values it changes.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct OddsSection {
    pub border_odds: BTreeMap<BorderTier, f32>,
    pub rarity_weights: BTreeMap<Rarity, f32>,
    pub use_custom_rarity_weights: Option<bool>,
    pub foil_chance: Option<f32>,
}

impl OddsSection {
    pub fn to_config(&self) -> OddsConfig {
        let mut config = OddsConfig::default();
        for (&tier, &odd) in &self.border_odds {
            config.border_odds.insert(tier, odd);
        }
        for (&rarity, &weight) in &self.rarity_weights {
            config.rarity_weights.insert(rarity, weight);
        }
        if let Some(custom) = self.use_custom_rarity_weights {
            config.use_custom_rarity_weights = custom;
        }
        if let Some(foil) = self.foil_chance {
            config.foil_chance = foil;
        }
        config
    }
}

/// Simulation run parameters.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub packs: u64,
    pub seed: Option<u64>,
    pub category: PackCategory,
    pub slot_count: usize,
    pub allow_duplicates: bool,
    /// Roll the rare ghost replacement of the final card.
    pub ghost_upgrades: bool,
    /// Synthetic catalogue size per rarity.
    pub catalog: BTreeMap<Rarity, u32>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            packs: DEFAULT_PACKS,
            seed: None,
            category: PackCategory::Basic,
            slot_count: packlab_core::PACK_SIZE,
            allow_duplicates: false,
            ghost_upgrades: true,
            catalog: BTreeMap::from([
                (Rarity::Common, 40),
                (Rarity::Rare, 30),
                (Rarity::Epic, 20),
                (Rarity::Legendary, 10),
            ]),
        }
    }
}

impl SimulationConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.packs == 0 {
            return Err(ValidationError::InvalidField {
                field: "simulation.packs".to_string(),
                message: "number of packs must be greater than zero".to_string(),
            });
        }
        if self.slot_count == 0 {
            return Err(ValidationError::InvalidField {
                field: "simulation.slot_count".to_string(),
                message: "packs need at least one slot".to_string(),
            });
        }
        if self.catalog.values().all(|&count| count == 0) {
            return Err(ValidationError::InvalidField {
                field: "simulation.catalog".to_string(),
                message: "catalogue must contain at least one monster".to_string(),
            });
        }
        Ok(())
    }
}

/// Logging configuration defaults to plain stderr output.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub enable_structured: bool,
    pub tracing_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_structured: false,
            tracing_level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn level(&self) -> Option<Level> {
        match self.tracing_level.to_ascii_lowercase().as_str() {
            "trace" => Some(Level::TRACE),
            "debug" => Some(Level::DEBUG),
            "info" => Some(Level::INFO),
            "warn" | "warning" => Some(Level::WARN),
            "error" => Some(Level::ERROR),
            _ => None,
        }
    }
}

/// Errors surfaced when loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid configuration in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

/// Validation failures captured with contextual metadata.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
    #[error("{section}: {source}")]
    Odds {
        section: String,
        #[source]
        source: packlab_core::OddsError,
    },
}
