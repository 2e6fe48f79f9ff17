use crate::model::card::GeneratedCard;
use crate::model::category::PackCategory;
use crate::model::expansion::Expansion;
use crate::model::slot::PackSlot;
use crate::odds::book::OddsBook;
use crate::pool::ItemPool;
use crate::sampler::{SampleError, select_border, select_foil, select_rarity};
use rand::Rng;
use std::fmt;

/// Stock pack size: six cards on the first-six table plus one final card.
pub const PACK_SIZE: usize = 7;

/// Parameters for one pack generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackRequest {
    pub category: PackCategory,
    pub expansion: Expansion,
    pub slot_count: usize,
    pub allow_duplicates: bool,
}

impl PackRequest {
    pub fn new(category: PackCategory) -> Self {
        Self {
            category,
            expansion: category.expansion(),
            slot_count: PACK_SIZE,
            allow_duplicates: false,
        }
    }

    pub fn with_slot_count(mut self, slot_count: usize) -> Self {
        self.slot_count = slot_count;
        self
    }

    pub fn with_duplicates(mut self, allow_duplicates: bool) -> Self {
        self.allow_duplicates = allow_duplicates;
        self
    }
}

/// A fully generated pack. No partial pack ever escapes the assembler.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenedPack {
    cards: Vec<GeneratedCard>,
    has_foil: bool,
}

impl OpenedPack {
    pub fn cards(&self) -> &[GeneratedCard] {
        &self.cards
    }

    /// Pack-level foil flag; latches true once any card is foil.
    pub fn has_foil(&self) -> bool {
        self.has_foil
    }

    /// Swaps the final card, used by the ghost-upgrade flow. The foil
    /// latch can only tighten: a foil replacement sets it, a plain one
    /// never clears it.
    pub fn replace_final(&mut self, card: GeneratedCard) {
        if let Some(last) = self.cards.last_mut() {
            *last = card;
            self.has_foil |= card.foil;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PackError {
    NoSlots,
    Slot { index: usize, source: SampleError },
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackError::NoSlots => write!(f, "pack generation requires at least one slot"),
            PackError::Slot { index, source } => {
                write!(f, "failed to generate card for slot {index}: {source}")
            }
        }
    }
}

impl std::error::Error for PackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PackError::NoSlots => None,
            PackError::Slot { source, .. } => Some(source),
        }
    }
}

/// Drives one pack generation against a resolved odds book.
#[derive(Debug, Clone, Copy)]
pub struct PackAssembler<'a> {
    book: &'a OddsBook,
}

impl<'a> PackAssembler<'a> {
    pub fn new(book: &'a OddsBook) -> Self {
        Self { book }
    }

    /// Generates one full pack. All slots but the last draw on the
    /// first-six table; the last slot draws on the final table. The pool
    /// is mutated in place and must be owned by this call for its
    /// duration.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        request: PackRequest,
        pool: &mut ItemPool,
        rng: &mut R,
    ) -> Result<OpenedPack, PackError> {
        if request.slot_count == 0 {
            return Err(PackError::NoSlots);
        }

        let first_six = self.book.resolve(request.category, PackSlot::FirstSix);
        let final_card = self.book.resolve(request.category, PackSlot::Final);

        let mut cards = Vec::with_capacity(request.slot_count);
        let mut has_foil = false;

        for index in 0..request.slot_count {
            let is_final = index + 1 == request.slot_count;
            let odds = if is_final { &final_card } else { &first_six };

            let rarity = select_rarity(odds, request.category, rng)
                .map_err(|source| PackError::Slot { index, source })?;
            let monster = pool.draw(rarity, request.allow_duplicates, rng);
            let border = select_border(odds, request.expansion.is_tier_exempt(), rng);
            let foil = select_foil(odds.foil_chance, rng);
            let destiny = request.expansion.destiny_flag(rng);

            has_foil |= foil;
            cards.push(GeneratedCard {
                monster,
                rarity,
                border,
                foil,
                expansion: request.expansion,
                destiny,
            });
        }

        Ok(OpenedPack { cards, has_foil })
    }

    /// Rolls whether the final card of a pack from this expansion gets
    /// replaced by a ghost card. The host generates the ghost pack and
    /// calls [`OpenedPack::replace_final`] on success.
    pub fn roll_ghost_upgrade<R: Rng + ?Sized>(expansion: Expansion, rng: &mut R) -> bool {
        let chance = expansion.ghost_chance();
        chance > 0.0 && rng.r#gen::<f32>() < chance
    }
}
