//! Battle rules.

pub mod battle;

pub use battle::{resolve_battle, score_battle, BattleReport, Outcome};
