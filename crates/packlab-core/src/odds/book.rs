use crate::model::category::PackCategory;
use crate::model::slot::PackSlot;
use crate::odds::config::OddsConfig;
use std::collections::BTreeMap;

/// Layered odds configuration: one global table per slot plus optional
/// per-category overrides. Built once, then read-only; `resolve` hands out
/// independent copies so callers can never alias or mutate the stored
/// tables.
#[derive(Debug, Clone, PartialEq)]
pub struct OddsBook {
    global_first_six: OddsConfig,
    global_final: OddsConfig,
    overrides: BTreeMap<(PackCategory, PackSlot), OddsConfig>,
}

impl OddsBook {
    pub fn new(global_first_six: OddsConfig, global_final: OddsConfig) -> Self {
        Self {
            global_first_six,
            global_final,
            overrides: BTreeMap::new(),
        }
    }

    pub fn with_override(
        mut self,
        category: PackCategory,
        slot: PackSlot,
        config: OddsConfig,
    ) -> Self {
        self.overrides.insert((category, slot), config);
        self
    }

    pub fn has_override(&self, category: PackCategory, slot: PackSlot) -> bool {
        self.overrides.contains_key(&(category, slot))
    }

    /// Effective config for one category and slot. An absent override is the
    /// normal case and yields a copy of the global table.
    pub fn resolve(&self, category: PackCategory, slot: PackSlot) -> OddsConfig {
        if let Some(config) = self.overrides.get(&(category, slot)) {
            return config.clone();
        }
        match slot {
            PackSlot::FirstSix => self.global_first_six.clone(),
            PackSlot::Final => self.global_final.clone(),
        }
    }
}

impl Default for OddsBook {
    fn default() -> Self {
        Self::new(OddsConfig::default(), OddsConfig::default())
    }
}
