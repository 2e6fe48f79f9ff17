use crate::model::expansion::Expansion;
use crate::model::monster::MonsterId;
use crate::model::rarity::Rarity;
use rand::Rng;
use std::collections::BTreeMap;

/// Source of drawable identities per expansion, queried once per pool
/// build. Hosts back this with their card database; simulations back it
/// with synthetic data.
pub trait Catalog {
    fn monsters_by_rarity(&self, expansion: Expansion) -> BTreeMap<Rarity, Vec<MonsterId>>;
}

/// Per-request, rarity-partitioned pool of drawable identities.
///
/// Built fresh from catalogue data for every pack generation and discarded
/// afterwards. Without-replacement draws remove the drawn identity, so a
/// pool must never be shared between concurrent generations.
#[derive(Debug, Clone, Default)]
pub struct ItemPool {
    partitions: BTreeMap<Rarity, Vec<MonsterId>>,
}

impl ItemPool {
    /// Builds a pool, dropping duplicate and sentinel identities within
    /// each partition while preserving first-seen order.
    pub fn new(partitions: BTreeMap<Rarity, Vec<MonsterId>>) -> Self {
        let partitions = partitions
            .into_iter()
            .map(|(rarity, monsters)| {
                let mut seen = Vec::with_capacity(monsters.len());
                for monster in monsters {
                    if !monster.is_none() && !seen.contains(&monster) {
                        seen.push(monster);
                    }
                }
                (rarity, seen)
            })
            .collect();
        Self { partitions }
    }

    pub fn from_catalog<C: Catalog + ?Sized>(catalog: &C, expansion: Expansion) -> Self {
        Self::new(catalog.monsters_by_rarity(expansion))
    }

    pub fn available(&self, rarity: Rarity) -> usize {
        self.partitions.get(&rarity).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.partitions.values().all(Vec::is_empty)
    }

    /// Uniform draw from one rarity partition.
    ///
    /// An exhausted partition yields [`MonsterId::NONE`] rather than an
    /// error. With `allow_duplicates` false the drawn identity is removed
    /// and cannot be drawn again from this pool.
    pub fn draw<R: Rng + ?Sized>(
        &mut self,
        rarity: Rarity,
        allow_duplicates: bool,
        rng: &mut R,
    ) -> MonsterId {
        let Some(partition) = self.partitions.get_mut(&rarity) else {
            return MonsterId::NONE;
        };
        if partition.is_empty() {
            return MonsterId::NONE;
        }

        let index = rng.gen_range(0..partition.len());
        if allow_duplicates {
            partition[index]
        } else {
            partition.remove(index)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Catalog, ItemPool};
    use crate::model::expansion::Expansion;
    use crate::model::monster::MonsterId;
    use crate::model::rarity::Rarity;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::BTreeMap;

    fn pool_with(rarity: Rarity, ids: &[u32]) -> ItemPool {
        let monsters = ids.iter().map(|&id| MonsterId(id)).collect();
        ItemPool::new(BTreeMap::from([(rarity, monsters)]))
    }

    #[test]
    fn construction_drops_duplicates_and_sentinels() {
        let pool = pool_with(Rarity::Common, &[1, 2, 2, 0, 3, 1]);
        assert_eq!(pool.available(Rarity::Common), 3);
    }

    #[test]
    fn empty_partition_yields_the_sentinel() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut pool = pool_with(Rarity::Common, &[1]);
        assert_eq!(pool.draw(Rarity::Epic, false, &mut rng), MonsterId::NONE);

        assert_ne!(pool.draw(Rarity::Common, false, &mut rng), MonsterId::NONE);
        assert_eq!(pool.draw(Rarity::Common, false, &mut rng), MonsterId::NONE);
    }

    #[test]
    fn without_replacement_never_repeats() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut pool = pool_with(Rarity::Rare, &[1, 2, 3, 4, 5, 6, 7]);
        let mut drawn = Vec::new();
        for _ in 0..7 {
            let id = pool.draw(Rarity::Rare, false, &mut rng);
            assert!(!drawn.contains(&id));
            drawn.push(id);
        }
        assert_eq!(pool.available(Rarity::Rare), 0);
    }

    #[test]
    fn with_replacement_leaves_the_pool_intact() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut pool = pool_with(Rarity::Rare, &[1, 2, 3]);
        for _ in 0..32 {
            assert_ne!(pool.draw(Rarity::Rare, true, &mut rng), MonsterId::NONE);
        }
        assert_eq!(pool.available(Rarity::Rare), 3);
    }

    struct FixedCatalog;

    impl Catalog for FixedCatalog {
        fn monsters_by_rarity(&self, expansion: Expansion) -> BTreeMap<Rarity, Vec<MonsterId>> {
            let base = match expansion {
                Expansion::Tetramon => 100,
                Expansion::Destiny => 200,
                Expansion::Ghost => 300,
            };
            BTreeMap::from([(Rarity::Common, vec![MonsterId(base), MonsterId(base + 1)])])
        }
    }

    #[test]
    fn from_catalog_partitions_by_expansion() {
        let pool = ItemPool::from_catalog(&FixedCatalog, Expansion::Destiny);
        assert_eq!(pool.available(Rarity::Common), 2);
        assert_eq!(pool.available(Rarity::Legendary), 0);
        assert!(!pool.is_empty());
    }
}
