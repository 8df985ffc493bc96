//! Card values.
//!
//! A `Card` is an immutable record stamped from a catalog entry. Two cards
//! can carry the same `CardId`: the catalog samples with replacement, so the
//! id names the *kind* of card, not a specific copy.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a catalog entry, e.g. `"C002"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CardId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The fixed set of factions a card can belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Luminarii,
    Ferrum,
    Chromius,
    Oraceli,
    Junkers,
}

impl Faction {
    /// Display name of the faction.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Faction::Luminarii => "Luminarii",
            Faction::Ferrum => "Ferrum",
            Faction::Chromius => "Chromius",
            Faction::Oraceli => "Oraceli",
            Faction::Junkers => "Junkers",
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An immutable card.
///
/// ## Example
///
/// ```
/// use card_battle::cards::{Card, Faction};
///
/// let card = Card::new("C002", "Ferrum Ironclad", Faction::Ferrum, 5, 3);
/// assert_eq!(card.id.as_str(), "C002");
/// assert_eq!(
///     card.to_string(),
///     "Ferrum Ironclad [ID: C002] Faction: Ferrum ATK: 5 | HP: 3"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Catalog entry this card was stamped from.
    pub id: CardId,

    /// Card name.
    pub name: String,

    pub faction: Faction,

    /// Damage dealt in battle.
    pub attack: u32,

    /// Damage absorbed in battle.
    pub health: u32,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub fn new(
        id: impl Into<CardId>,
        name: impl Into<String>,
        faction: Faction,
        attack: u32,
        health: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            faction,
            attack,
            health,
        }
    }
}

// Summary order is fixed: name, id, faction, attack/health.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [ID: {}] Faction: {} ATK: {} | HP: {}",
            self.name, self.id, self.faction, self.attack, self.health
        )
    }
}
