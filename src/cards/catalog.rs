//! Card catalog: the fixed list of cards a player can obtain.
//!
//! The `Catalog` stores card definitions in a fixed order and stamps new
//! `Card` values from them. Sampling is uniform over entries and goes
//! through `RandomSource`, so it is deterministic under a seeded RNG.

use log::trace;
use rustc_hash::FxHashMap;

use super::card::{Card, CardId, Faction};
use crate::core::error::GameError;
use crate::core::rng::RandomSource;

/// Read-only list of card definitions.
///
/// Never empty, and ids are unique.
///
/// ## Example
///
/// ```
/// use card_battle::cards::Catalog;
/// use card_battle::core::GameRng;
///
/// let catalog = Catalog::standard();
/// let mut rng = GameRng::new(42);
///
/// let card = catalog.sample_random_card(&mut rng);
/// assert_eq!(catalog.get(card.id.as_str()), Some(&card));
/// ```
#[derive(Clone, Debug)]
pub struct Catalog {
    entries: Vec<Card>,
    index: FxHashMap<CardId, usize>,
}

impl Catalog {
    /// Build a catalog from custom entries.
    ///
    /// Fails if `entries` is empty or two entries share an id.
    pub fn new(entries: Vec<Card>) -> Result<Self, GameError> {
        if entries.is_empty() {
            return Err(GameError::EmptyCatalog);
        }

        let mut index = FxHashMap::default();
        for (i, card) in entries.iter().enumerate() {
            if index.insert(card.id.clone(), i).is_some() {
                return Err(GameError::DuplicateCatalogId(card.id.clone()));
            }
        }

        Ok(Self { entries, index })
    }

    /// The five built-in cards.
    #[must_use]
    pub fn standard() -> Self {
        let entries = vec![
            Card::new("C001", "Luminarii Sproutling", Faction::Luminarii, 2, 5),
            Card::new("C002", "Ferrum Ironclad", Faction::Ferrum, 5, 3),
            Card::new("C003", "Chromius Hackblade", Faction::Chromius, 3, 4),
            Card::new("C004", "Oraceli Seer", Faction::Oraceli, 1, 6),
            Card::new("C005", "Junker Scraprider", Faction::Junkers, 4, 2),
        ];
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, card)| (card.id.clone(), i))
            .collect();

        Self { entries, index }
    }

    /// Stamp a new card from a uniformly chosen entry.
    pub fn sample_random_card(&self, rng: &mut impl RandomSource) -> Card {
        let i = rng.gen_index(self.entries.len());
        let card = self.entries[i].clone();
        trace!("catalog: sampled entry {} ({})", i, card.id);
        card
    }

    /// Get a definition by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Card> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    /// Check if an id is defined.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.entries.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
