//! Session implementation.

use std::sync::Arc;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Catalog};
use crate::core::{GameError, GameRng, GameRngState, SessionConfig};
use crate::rules::{score_battle, BattleReport};
use crate::zones::{Player, PlayerSnapshot};

/// A running session.
///
/// ## Example
///
/// ```
/// use card_battle::core::SessionConfig;
/// use card_battle::session::Session;
///
/// let mut session = Session::new(SessionConfig::new(42));
///
/// let card = session.obtain_card();
/// session.add_to_deck(card.id.as_str()).unwrap();
/// session.obtain_card();
///
/// let report = session.battle(card.id.as_str(), card.id.as_str()).unwrap();
/// assert!(report.outcome.is_draw());
///
/// assert_eq!(session.draw().unwrap().id, card.id);
/// assert!(session.draw().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    catalog: Catalog,
    rng: GameRng,
    player: Player,
}

impl Session {
    /// Start a session with an empty player.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        info!("session: starting with seed {}", config.seed);
        let rng = config.rng();
        Self {
            catalog: config.catalog,
            rng,
            player: Player::new(),
        }
    }

    /// Sample a card from the catalog into the inventory.
    pub fn obtain_card(&mut self) -> Arc<Card> {
        let card = self.catalog.sample_random_card(&mut self.rng);
        info!("session: obtained {}", card.id);
        self.player.add_card_to_inventory(card)
    }

    /// Add an inventory card to the deck by id.
    ///
    /// Surrounding whitespace is ignored. Blank input is rejected before the
    /// player is touched.
    pub fn add_to_deck(&mut self, card_id: &str) -> Result<Arc<Card>, GameError> {
        let card_id = card_id.trim();
        if card_id.is_empty() {
            warn!("session: add to deck with blank id");
            return Err(GameError::BlankCardId);
        }

        let card = self.player.add_card_to_deck(card_id).map_err(|e| {
            warn!("session: add to deck rejected: {}", e);
            e
        })?;
        info!("session: {} added to deck", card.id);
        Ok(card)
    }

    /// Draw the top card of the deck into the hand.
    pub fn draw(&mut self) -> Result<Arc<Card>, GameError> {
        let Some(card) = self.player.draw_card() else {
            warn!("session: draw from empty deck");
            return Err(GameError::EmptyDeck);
        };
        info!("session: drew {}", card.id);
        Ok(card)
    }

    /// Battle two deck cards, named by id.
    ///
    /// Both ids must resolve to deck cards; otherwise the battle is not run.
    pub fn battle(&self, first_id: &str, second_id: &str) -> Result<BattleReport, GameError> {
        let first = self.deck_card(first_id)?;
        let second = self.deck_card(second_id)?;

        let report = score_battle(first, second);
        info!(
            "session: {} ({}) vs {} ({}): {}",
            first.id, report.first_score, second.id, report.second_score, report.outcome
        );
        Ok(report)
    }

    fn deck_card(&self, card_id: &str) -> Result<&Arc<Card>, GameError> {
        let card_id = card_id.trim();
        self.player.get_card_from_deck(card_id).ok_or_else(|| {
            warn!("session: battle names {:?}, which is not in the deck", card_id);
            GameError::NotInDeck(card_id.into())
        })
    }

    /// The player's collection.
    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The catalog cards are sampled from.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Encode the RNG position and the player's collection.
    ///
    /// The catalog is not included; `restore` takes it from the config.
    pub fn snapshot(&self) -> Result<Vec<u8>, GameError> {
        let snapshot = SessionSnapshot {
            rng: self.rng.state(),
            player: self.player.snapshot(),
        };
        Ok(bincode::serialize(&snapshot)?)
    }

    /// Rebuild a session from `snapshot` bytes.
    ///
    /// The RNG resumes where the snapshot left off; `config.seed` is ignored.
    pub fn restore(config: SessionConfig, bytes: &[u8]) -> Result<Self, GameError> {
        let snapshot: SessionSnapshot = bincode::deserialize(bytes)?;
        let player = Player::from_snapshot(snapshot.player)?;
        info!(
            "session: restored {} inventory cards (seed {})",
            player.inventory().len(),
            snapshot.rng.seed
        );

        Ok(Self {
            catalog: config.catalog,
            rng: GameRng::from_state(&snapshot.rng),
            player,
        })
    }
}

/// Encoded form of a session, minus its catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub rng: GameRngState,
    pub player: PlayerSnapshot,
}
