//! Error type shared by the catalog, collection, and session layers.
//!
//! Lookups inside `Player` still report absence with `Option`. `GameError`
//! is returned where a caller has to tell a rejected intent apart from a
//! successful one.

use thiserror::Error;

use crate::cards::CardId;

/// Everything that can go wrong while running a session.
#[derive(Error, Debug)]
pub enum GameError {
    /// No inventory card carries this id.
    #[error("no card with ID {0} in the inventory")]
    UnknownCard(CardId),

    /// A battle named a card that is not in the deck.
    #[error("Both cards must be from your deck (no {0} in the deck).")]
    NotInDeck(CardId),

    /// Draw attempted on an empty deck.
    #[error("No more cards in the deck to draw!")]
    EmptyDeck,

    /// The card id was empty after trimming.
    #[error("card ID must not be blank")]
    BlankCardId,

    /// A catalog needs at least one entry.
    #[error("catalog has no entries")]
    EmptyCatalog,

    /// Two catalog entries share an id.
    #[error("catalog ID {0} is defined more than once")]
    DuplicateCatalogId(CardId),

    /// A decoded snapshot references cards that do not exist.
    #[error("corrupt snapshot: {0}")]
    CorruptSnapshot(String),

    /// Snapshot bytes could not be encoded or decoded.
    #[error("snapshot encoding failed")]
    Snapshot(#[from] bincode::Error),
}
