use packlab_core::{Catalog, Expansion, MonsterId, Rarity};
use std::collections::BTreeMap;

/// Deterministic in-memory catalogue for simulations.
///
/// Identities are synthesized from the expansion and rarity so that no two
/// partitions ever share an id and the sentinel id 0 is never produced.
#[derive(Debug, Clone)]
pub struct SyntheticCatalog {
    sizes: BTreeMap<Rarity, u32>,
}

impl SyntheticCatalog {
    pub fn new(sizes: BTreeMap<Rarity, u32>) -> Self {
        Self { sizes }
    }

    fn base_id(expansion: Expansion, rarity: Rarity) -> u32 {
        let expansion_block = match expansion {
            Expansion::Tetramon => 1,
            Expansion::Destiny => 2,
            Expansion::Ghost => 3,
        };
        expansion_block * 100_000 + (rarity.index() as u32 + 1) * 10_000
    }
}

impl Catalog for SyntheticCatalog {
    fn monsters_by_rarity(&self, expansion: Expansion) -> BTreeMap<Rarity, Vec<MonsterId>> {
        self.sizes
            .iter()
            .map(|(&rarity, &count)| {
                let base = Self::base_id(expansion, rarity);
                let monsters = (0..count).map(|i| MonsterId(base + i)).collect();
                (rarity, monsters)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::SyntheticCatalog;
    use packlab_core::{Catalog, Expansion, Rarity};
    use std::collections::BTreeMap;

    fn catalog() -> SyntheticCatalog {
        SyntheticCatalog::new(BTreeMap::from([
            (Rarity::Common, 4),
            (Rarity::Legendary, 2),
        ]))
    }

    #[test]
    fn partitions_have_the_requested_sizes() {
        let monsters = catalog().monsters_by_rarity(Expansion::Tetramon);
        assert_eq!(monsters[&Rarity::Common].len(), 4);
        assert_eq!(monsters[&Rarity::Legendary].len(), 2);
        assert!(!monsters.contains_key(&Rarity::Epic));
    }

    #[test]
    fn ids_are_unique_across_partitions_and_expansions() {
        let catalog = catalog();
        let mut all = Vec::new();
        for expansion in Expansion::ALL {
            for monsters in catalog.monsters_by_rarity(expansion).values() {
                all.extend(monsters.iter().copied());
            }
        }
        let mut deduped = all.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), all.len());
        assert!(all.iter().all(|id| !id.is_none()));
    }
}
