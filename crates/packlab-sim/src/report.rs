use packlab_core::{BorderTier, OpenedPack, Rarity};
use std::fmt::Write as _;

/// Frequency accumulator over generated packs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyReport {
    pub packs: u64,
    pub cards: u64,
    pub foil_cards: u64,
    pub foil_packs: u64,
    pub sentinel_cards: u64,
    pub ghost_upgrades: u64,
    rarity_counts: [u64; 4],
    border_counts: [u64; 6],
}

impl FrequencyReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, pack: &OpenedPack) {
        self.packs += 1;
        if pack.has_foil() {
            self.foil_packs += 1;
        }
        for card in pack.cards() {
            self.cards += 1;
            self.rarity_counts[card.rarity.index()] += 1;
            self.border_counts[card.border as usize] += 1;
            if card.foil {
                self.foil_cards += 1;
            }
            if card.monster.is_none() {
                self.sentinel_cards += 1;
            }
        }
    }

    pub fn record_ghost_upgrade(&mut self) {
        self.ghost_upgrades += 1;
    }

    pub fn rarity_count(&self, rarity: Rarity) -> u64 {
        self.rarity_counts[rarity.index()]
    }

    pub fn border_count(&self, tier: BorderTier) -> u64 {
        self.border_counts[tier as usize]
    }

    /// Render the counts as a markdown summary table.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# Pack simulation summary");
        let _ = writeln!(out);
        let _ = writeln!(out, "Packs: {} ({} cards)", self.packs, self.cards);
        let _ = writeln!(
            out,
            "Foil: {} cards, {} packs with at least one foil",
            self.foil_cards, self.foil_packs
        );
        let _ = writeln!(out, "Exhausted draws: {}", self.sentinel_cards);
        let _ = writeln!(out, "Ghost upgrades: {}", self.ghost_upgrades);
        let _ = writeln!(out);
        let _ = writeln!(out, "| Rarity | Cards | Share |");
        let _ = writeln!(out, "|---|---|---|");
        for rarity in Rarity::ALL {
            let count = self.rarity_count(rarity);
            let _ = writeln!(out, "| {rarity} | {count} | {} |", self.share(count));
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "| Border | Cards | Share |");
        let _ = writeln!(out, "|---|---|---|");
        for tier in BorderTier::ALL {
            let count = self.border_count(tier);
            let _ = writeln!(out, "| {tier} | {count} | {} |", self.share(count));
        }
        out
    }

    fn share(&self, count: u64) -> String {
        if self.cards == 0 {
            return "-".to_string();
        }
        format!("{:.2}%", 100.0 * count as f64 / self.cards as f64)
    }
}
