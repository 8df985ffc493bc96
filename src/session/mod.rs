//! Session: one player's game, driven by user intents.
//!
//! A `Session` owns the catalog, the RNG, and the `Player`. Each public
//! method is one intent a front end can forward (obtain a card, add a card
//! to the deck, draw, battle). Rejected intents come back as `GameError`,
//! whose `Display` text is meant to be shown to the user as-is.

mod game;

pub use game::{Session, SessionSnapshot};
