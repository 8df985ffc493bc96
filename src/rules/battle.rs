//! Two-card battle resolution.
//!
//! Each card scores its attack minus the other card's health. The higher
//! score wins; equal scores are a draw. There is no secondary tie-breaker.
//!
//! ```
//! use card_battle::cards::{Card, Faction};
//! use card_battle::rules::{resolve_battle, Outcome};
//!
//! let ironclad = Card::new("C002", "Ferrum Ironclad", Faction::Ferrum, 5, 3);
//! let seer = Card::new("C004", "Oraceli Seer", Faction::Oraceli, 1, 6);
//!
//! // 5 - 6 = -1 beats 1 - 3 = -2
//! assert_eq!(resolve_battle(&ironclad, &seer), Outcome::Winner(ironclad.clone()));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Result of a battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The card with the strictly higher score.
    Winner(Card),
    /// Both scores were equal.
    Draw,
}

impl Outcome {
    /// The winning card, if any.
    #[must_use]
    pub fn winner(&self) -> Option<&Card> {
        match self {
            Outcome::Winner(card) => Some(card),
            Outcome::Draw => None,
        }
    }

    /// Check if the battle was a draw.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(card) => write!(f, "{} (ID: {}) wins!", card.name, card.id),
            Outcome::Draw => f.write_str("It's a draw!"),
        }
    }
}

/// Scores and outcome of one battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleReport {
    /// First card's attack minus second card's health.
    pub first_score: i64,
    /// Second card's attack minus first card's health.
    pub second_score: i64,
    pub outcome: Outcome,
}

impl fmt::Display for BattleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.outcome.fmt(f)
    }
}

/// Score a battle and keep the intermediate scores.
#[must_use]
pub fn score_battle(first: &Card, second: &Card) -> BattleReport {
    let first_score = i64::from(first.attack) - i64::from(second.health);
    let second_score = i64::from(second.attack) - i64::from(first.health);

    let outcome = if first_score > second_score {
        Outcome::Winner(first.clone())
    } else if second_score > first_score {
        Outcome::Winner(second.clone())
    } else {
        Outcome::Draw
    };

    BattleReport {
        first_score,
        second_score,
        outcome,
    }
}

/// Resolve a battle between two cards.
///
/// Total and pure: any two cards produce an outcome, and the same pair
/// always produces the same one.
#[must_use]
pub fn resolve_battle(first: &Card, second: &Card) -> Outcome {
    score_battle(first, second).outcome
}
