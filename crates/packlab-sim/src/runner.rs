use crate::catalog::SyntheticCatalog;
use crate::config::SimConfig;
use crate::report::FrequencyReport;
use packlab_core::{
    Expansion, ItemPool, PackAssembler, PackCategory, PackError, PackRequest,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum SimError {
    #[error("pack {pack} failed: {source}")]
    Pack {
        pack: u64,
        #[source]
        source: PackError,
    },
}

/// Result of a simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimSummary {
    pub seed: u64,
    pub category: PackCategory,
    pub report: FrequencyReport,
}

/// Opens packs against a synthetic catalogue and tallies the outcomes.
pub struct SimRunner {
    config: SimConfig,
}

impl SimRunner {
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<SimSummary, SimError> {
        let sim = &self.config.simulation;
        let book = self.config.build_book();
        let catalog = SyntheticCatalog::new(sim.catalog.clone());
        let assembler = PackAssembler::new(&book);

        let seed = sim.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        info!(seed, category = %sim.category, packs = sim.packs, "starting simulation");

        let request = PackRequest::new(sim.category)
            .with_slot_count(sim.slot_count)
            .with_duplicates(sim.allow_duplicates);
        let mut report = FrequencyReport::new();

        for pack_index in 0..sim.packs {
            // One fresh pool per request; the assembler mutates it in place.
            let mut pool = ItemPool::from_catalog(&catalog, request.expansion);
            let mut pack = assembler
                .generate(request, &mut pool, &mut rng)
                .map_err(|source| SimError::Pack {
                    pack: pack_index,
                    source,
                })?;

            if sim.ghost_upgrades && PackAssembler::roll_ghost_upgrade(request.expansion, &mut rng)
            {
                let ghost = self
                    .generate_ghost_card(&assembler, &catalog, &mut rng)
                    .map_err(|source| SimError::Pack {
                        pack: pack_index,
                        source,
                    })?;
                debug!(pack = pack_index, card = %ghost, "ghost upgrade");
                pack.replace_final(ghost);
                report.record_ghost_upgrade();
            }

            report.record(&pack);
        }

        info!(packs = report.packs, foil_packs = report.foil_packs, "simulation finished");
        Ok(SimSummary {
            seed,
            category: sim.category,
            report,
        })
    }

    /// Generates a ghost pack and picks one of its cards at random, the
    /// way the final-card replacement draws from a secondary rolled list.
    fn generate_ghost_card<R: Rng + ?Sized>(
        &self,
        assembler: &PackAssembler<'_>,
        catalog: &SyntheticCatalog,
        rng: &mut R,
    ) -> Result<packlab_core::GeneratedCard, PackError> {
        let request = PackRequest::new(PackCategory::Ghost)
            .with_slot_count(self.config.simulation.slot_count)
            .with_duplicates(self.config.simulation.allow_duplicates);
        let mut pool = ItemPool::from_catalog(catalog, Expansion::Ghost);
        let pack = assembler.generate(request, &mut pool, rng)?;
        let pick = rng.gen_range(0..pack.cards().len());
        Ok(pack.cards()[pick])
    }
}

#[cfg(test)]
mod tests {
    use super::SimRunner;
    use crate::config::SimConfig;
    use packlab_core::Rarity;

    fn config(yaml: &str) -> SimConfig {
        let cfg: SimConfig = serde_yaml::from_str(yaml).expect("parse yaml");
        cfg.validate().expect("valid config");
        cfg
    }

    #[test]
    fn fixed_seed_runs_are_reproducible() {
        let cfg = config(
            r#"
simulation:
  packs: 50
  seed: 1234
  category: epic
"#,
        );
        let first = SimRunner::new(cfg.clone()).run().expect("run");
        let second = SimRunner::new(cfg).run().expect("run");
        assert_eq!(first.seed, 1234);
        assert_eq!(first.report, second.report);
    }

    #[test]
    fn fixed_rarity_category_fills_packs_with_that_rarity() {
        let cfg = config(
            r#"
simulation:
  packs: 20
  seed: 9
  category: epic
  ghost_upgrades: false
"#,
        );
        let summary = SimRunner::new(cfg).run().expect("run");
        assert_eq!(summary.report.cards, 140);
        assert_eq!(summary.report.rarity_count(Rarity::Epic), 140);
        assert_eq!(summary.report.sentinel_cards, 0);
    }

    #[test]
    fn small_catalogue_exhausts_into_sentinels() {
        let cfg = config(
            r#"
simulation:
  packs: 1
  seed: 3
  category: legendary
  ghost_upgrades: false
  catalog:
    legendary: 2
"#,
        );
        let summary = SimRunner::new(cfg).run().expect("run");
        assert_eq!(summary.report.sentinel_cards, 5);
    }

    #[test]
    fn custom_weights_spread_rarities() {
        let cfg = config(
            r#"
global:
  first_six:
    use_custom_rarity_weights: true
    rarity_weights:
      common: 1.0
      rare: 1.0
      epic: 0.0
      legendary: 0.0
  final:
    use_custom_rarity_weights: true
    rarity_weights:
      common: 0.0
      rare: 0.0
      epic: 0.0
      legendary: 1.0
simulation:
  packs: 100
  seed: 42
  category: basic
  ghost_upgrades: false
"#,
        );
        let summary = SimRunner::new(cfg).run().expect("run");
        assert_eq!(summary.report.rarity_count(Rarity::Legendary), 100);
        assert_eq!(summary.report.rarity_count(Rarity::Epic), 0);
        assert_eq!(
            summary.report.rarity_count(Rarity::Common) + summary.report.rarity_count(Rarity::Rare),
            600
        );
    }
}
