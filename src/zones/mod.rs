//! Player zones: where a player's cards live.
//!
//! Every player has exactly three zones:
//! - **Inventory**: every card ever obtained (append-only)
//! - **Deck**: cards staged for play, drawn last-in first-out
//! - **Hand**: cards drawn from the deck
//!
//! ## Key Types
//!
//! - `Zone`: Names one of the three zones
//! - `Player`: Owns the zones and moves cards between them
//! - `PlayerSnapshot`: Serializable form of a `Player`

pub mod player;

pub use player::{Player, PlayerSnapshot};

use serde::{Deserialize, Serialize};

/// One of a player's three card zones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Inventory,
    Deck,
    Hand,
}

impl Zone {
    /// All zones, in rendering order.
    pub const ALL: [Zone; 3] = [Zone::Inventory, Zone::Deck, Zone::Hand];
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Zone::Inventory => "Inventory",
            Zone::Deck => "Deck",
            Zone::Hand => "Hand",
        };
        f.write_str(name)
    }
}
