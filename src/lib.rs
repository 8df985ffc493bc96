//! # card-battle
//!
//! Card collection and battle domain model for a small card-game demo.
//!
//! ## Design Principles
//!
//! 1. **UI-Independent**: No rendering or event wiring. A front end calls
//!    into `Session` and displays what comes back.
//!
//! 2. **Deterministic**: All randomness flows through `RandomSource`; a
//!    seeded `GameRng` replays the same cards every time.
//!
//! 3. **Shared, Immutable Cards**: Cards never change after they are
//!    stamped. Zones share them through `Arc`, so moving a card into the
//!    deck keeps its identity.
//!
//! ## Modules
//!
//! - `core`: RNG, errors, configuration
//! - `cards`: Card values and the catalog
//! - `zones`: Player inventory, deck, and hand
//! - `rules`: Battle resolution
//! - `session`: Intent-level facade over one player

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{GameError, GameRng, GameRngState, RandomSource, SessionConfig};

pub use crate::cards::{Card, CardId, Catalog, Faction};

pub use crate::zones::{Player, PlayerSnapshot, Zone};

pub use crate::rules::{resolve_battle, score_battle, BattleReport, Outcome};

pub use crate::session::{Session, SessionSnapshot};
