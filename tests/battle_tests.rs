//! Battle resolution tests.
//!
//! These tests verify the scoring rule against the standard catalog and
//! check that resolution is a pure function of the two cards.

use proptest::prelude::*;

use card_battle::cards::{Card, Catalog, Faction};
use card_battle::rules::{resolve_battle, score_battle, Outcome};

fn standard(id: &str) -> Card {
    Catalog::standard().get(id).cloned().expect("standard card")
}

// =============================================================================
// Scenarios
// =============================================================================

/// C002 (5/3) against C004 (1/6): -1 beats -2.
#[test]
fn test_ironclad_vs_seer() {
    let report = score_battle(&standard("C002"), &standard("C004"));

    assert_eq!((report.first_score, report.second_score), (-1, -2));
    assert_eq!(report.outcome, Outcome::Winner(standard("C002")));
    assert_eq!(report.outcome.to_string(), "Ferrum Ironclad (ID: C002) wins!");
}

/// Two 3/4 cards score -1 each and draw.
#[test]
fn test_mirror_match_draws() {
    let a = standard("C003");
    let b = standard("C003");

    assert_eq!(resolve_battle(&a, &b), Outcome::Draw);
    assert_eq!(resolve_battle(&a, &b).to_string(), "It's a draw!");
}

/// Pairings from the standard catalog, including the draws it contains.
#[test]
fn test_standard_pairings() {
    // (first, second, winner); None is a draw
    let expected = [
        ("C001", "C002", Some("C002")), // -1 vs 0
        ("C001", "C003", None),         // -2 vs -2
        ("C001", "C004", None),         // -4 vs -4
        ("C001", "C005", Some("C001")), // 0 vs -1
        ("C002", "C005", Some("C002")), // 3 vs 1
        ("C004", "C005", Some("C004")), // -1 vs -2
    ];

    for (first, second, winner) in expected {
        let outcome = resolve_battle(&standard(first), &standard(second));
        assert_eq!(
            outcome.winner().map(|c| c.id.as_str()),
            winner,
            "{} vs {}",
            first,
            second
        );
    }
}

/// Scores may go negative without affecting the comparison.
#[test]
fn test_negative_scores() {
    let glass = Card::new("G", "Glass", Faction::Luminarii, 0, 0);
    let wall = Card::new("W", "Wall", Faction::Oraceli, 0, 10);

    let report = score_battle(&glass, &wall);
    assert_eq!(report.first_score, -10);
    assert_eq!(report.second_score, 0);
    assert_eq!(report.outcome.winner(), Some(&wall));
}

// =============================================================================
// Properties
// =============================================================================

fn any_card() -> impl Strategy<Value = Card> {
    (0u32..20, 0u32..20).prop_map(|(attack, health)| {
        Card::new("P", "Generated", Faction::Chromius, attack, health)
    })
}

proptest! {
    /// Same inputs, same outcome.
    #[test]
    fn prop_battle_is_deterministic(a in any_card(), b in any_card()) {
        prop_assert_eq!(resolve_battle(&a, &b), resolve_battle(&a, &b));
    }

    /// Swapping the cards swaps the scores and keeps the winner.
    #[test]
    fn prop_battle_is_symmetric(a in any_card(), b in any_card()) {
        let forward = score_battle(&a, &b);
        let backward = score_battle(&b, &a);

        prop_assert_eq!(forward.first_score, backward.second_score);
        prop_assert_eq!(forward.second_score, backward.first_score);
        prop_assert_eq!(forward.outcome.is_draw(), backward.outcome.is_draw());
    }

    /// A winner always has the strictly higher score.
    #[test]
    fn prop_winner_has_higher_score(a in any_card(), b in any_card()) {
        let report = score_battle(&a, &b);
        match report.outcome {
            Outcome::Draw => prop_assert_eq!(report.first_score, report.second_score),
            Outcome::Winner(ref w) if *w == a && report.first_score > report.second_score => {}
            Outcome::Winner(ref w) if *w == b && report.second_score > report.first_score => {}
            Outcome::Winner(_) => prop_assert!(false, "winner without the higher score"),
        }
    }
}
