//! Core types: RNG, errors, configuration.
//!
//! These are shared by every other module and carry no card-game rules.

pub mod config;
pub mod error;
pub mod rng;

pub use config::SessionConfig;
pub use error::GameError;
pub use rng::{GameRng, GameRngState, RandomSource};
