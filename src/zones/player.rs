//! Player collection: inventory, deck, and hand.
//!
//! Cards are held as `Arc<Card>`. Moving a card into the deck shares the
//! inventory's handle instead of copying it, so "the same card" means
//! `Arc::ptr_eq`. Zones are `im::Vector`s, which makes cloning a `Player`
//! O(1).
//!
//! Adding a card to the deck does not remove it from the inventory: the
//! inventory is the full record of what was obtained, and a deck can be
//! rebuilt from it any number of times.

use std::sync::Arc;

use im::Vector;
use log::debug;
use serde::{Deserialize, Serialize};

use super::Zone;
use crate::cards::Card;
use crate::core::error::GameError;

/// A player's card collection.
///
/// ## Usage
///
/// ```
/// use card_battle::cards::{Card, Faction};
/// use card_battle::zones::Player;
///
/// let mut player = Player::new();
/// player.add_card_to_inventory(Card::new("C002", "Ferrum Ironclad", Faction::Ferrum, 5, 3));
///
/// player.add_card_to_deck("C002").unwrap();
/// assert!(player.get_card_from_deck("C002").is_some());
///
/// let drawn = player.draw_card().unwrap();
/// assert_eq!(drawn.id.as_str(), "C002");
/// assert!(player.draw_card().is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Player {
    inventory: Vector<Arc<Card>>,
    /// Top of the deck is the last element.
    deck: Vector<Arc<Card>>,
    hand: Vector<Arc<Card>>,
}

impl Player {
    /// Create a player with all zones empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card to the inventory.
    ///
    /// Returns the shared handle now stored in the inventory.
    pub fn add_card_to_inventory(&mut self, card: Card) -> Arc<Card> {
        let card = Arc::new(card);
        debug!("player: {} added to inventory", card.id);
        self.inventory.push_back(Arc::clone(&card));
        card
    }

    /// Put the first inventory card with this id on top of the deck.
    ///
    /// The inventory is left untouched. On an unknown id nothing changes and
    /// `GameError::UnknownCard` is returned.
    pub fn add_card_to_deck(&mut self, card_id: &str) -> Result<Arc<Card>, GameError> {
        let Some(card) = self.inventory.iter().find(|c| c.id.as_str() == card_id) else {
            debug!("player: no inventory card {}", card_id);
            return Err(GameError::UnknownCard(card_id.into()));
        };

        let card = Arc::clone(card);
        self.deck.push_back(Arc::clone(&card));
        debug!("player: {} added to deck ({} cards)", card.id, self.deck.len());
        Ok(card)
    }

    /// Find the first deck card with this id, scanning from the bottom.
    #[must_use]
    pub fn get_card_from_deck(&self, card_id: &str) -> Option<&Arc<Card>> {
        self.deck.iter().find(|c| c.id.as_str() == card_id)
    }

    /// Move the top card of the deck to the hand.
    ///
    /// Returns `None` and changes nothing when the deck is empty.
    pub fn draw_card(&mut self) -> Option<Arc<Card>> {
        let card = self.deck.pop_back()?;
        self.hand.push_back(Arc::clone(&card));
        debug!("player: drew {} ({} left in deck)", card.id, self.deck.len());
        Some(card)
    }

    /// Every card ever obtained, in order obtained.
    #[must_use]
    pub fn inventory(&self) -> &Vector<Arc<Card>> {
        &self.inventory
    }

    /// Deck, bottom to top.
    #[must_use]
    pub fn deck(&self) -> &Vector<Arc<Card>> {
        &self.deck
    }

    /// Hand, in order drawn.
    #[must_use]
    pub fn hand(&self) -> &Vector<Arc<Card>> {
        &self.hand
    }

    /// Get the cards in a zone.
    #[must_use]
    pub fn zone(&self, zone: Zone) -> &Vector<Arc<Card>> {
        match zone {
            Zone::Inventory => &self.inventory,
            Zone::Deck => &self.deck,
            Zone::Hand => &self.hand,
        }
    }

    /// Get the number of cards in a zone.
    #[must_use]
    pub fn zone_size(&self, zone: Zone) -> usize {
        self.zone(zone).len()
    }

    /// Capture the collection in a serializable form.
    ///
    /// Deck and hand are recorded as inventory positions so that
    /// `from_snapshot` restores shared identity.
    #[must_use]
    pub fn snapshot(&self) -> PlayerSnapshot {
        // Deck and hand only ever hold handles taken from the inventory.
        let positions = |zone: &Vector<Arc<Card>>| -> Vec<usize> {
            zone.iter()
                .filter_map(|card| self.inventory.iter().position(|c| Arc::ptr_eq(c, card)))
                .collect()
        };

        PlayerSnapshot {
            inventory: self.inventory.iter().map(|c| Card::clone(c)).collect(),
            deck: positions(&self.deck),
            hand: positions(&self.hand),
        }
    }

    /// Rebuild a player from a snapshot.
    ///
    /// Fails if a deck or hand position is outside the inventory.
    pub fn from_snapshot(snapshot: PlayerSnapshot) -> Result<Self, GameError> {
        let inventory: Vector<Arc<Card>> = snapshot.inventory.into_iter().map(Arc::new).collect();

        let resolve = |zone: Zone, positions: Vec<usize>| -> Result<Vector<Arc<Card>>, GameError> {
            positions
                .into_iter()
                .map(|i| {
                    inventory.get(i).cloned().ok_or_else(|| {
                        GameError::CorruptSnapshot(format!(
                            "{} position {} outside inventory of {}",
                            zone,
                            i,
                            inventory.len()
                        ))
                    })
                })
                .collect()
        };

        let deck = resolve(Zone::Deck, snapshot.deck)?;
        let hand = resolve(Zone::Hand, snapshot.hand)?;

        Ok(Self {
            inventory,
            deck,
            hand,
        })
    }
}

/// Serializable form of a `Player`.
///
/// `deck` and `hand` hold positions into `inventory`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub inventory: Vec<Card>,
    pub deck: Vec<usize>,
    pub hand: Vec<usize>,
}
