//! Card system: card values and the catalog they are stamped from.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier of a catalog entry
//! - `Faction`: Fixed set of card factions
//! - `Card`: Immutable card value
//! - `Catalog`: Card definitions and uniform sampling

pub mod card;
pub mod catalog;

pub use card::{Card, CardId, Faction};
pub use catalog::Catalog;
