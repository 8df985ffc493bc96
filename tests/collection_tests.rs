//! Player collection tests.
//!
//! These tests verify how cards move between zones:
//! - Decks are stacks: draws come back in reverse order of adds
//! - Drawing from an empty deck never changes the hand
//! - Deck entries are the inventory's own cards, not copies

use std::sync::Arc;

use proptest::prelude::*;

use card_battle::cards::Catalog;
use card_battle::core::GameRng;
use card_battle::zones::{Player, Zone};
use card_battle::GameError;

/// Fill a player's inventory with one copy of every standard card.
fn stocked_player() -> Player {
    let mut player = Player::new();
    for card in Catalog::standard().iter() {
        player.add_card_to_inventory(card.clone());
    }
    player
}

// =============================================================================
// Deck Stack Tests
// =============================================================================

/// Draws come back in reverse order of deck adds.
#[test]
fn test_draw_order_reverses_add_order() {
    let mut player = stocked_player();
    let added = ["C003", "C001", "C005", "C001"];

    for id in added {
        player.add_card_to_deck(id).unwrap();
    }

    let drawn: Vec<_> = std::iter::from_fn(|| player.draw_card())
        .map(|c| c.id.to_string())
        .collect();

    assert_eq!(drawn, vec!["C001", "C005", "C001", "C003"]);
    assert!(player.deck().is_empty());
    assert_eq!(player.zone_size(Zone::Hand), 4);
}

/// Interleaved adds and draws still pop the most recent add.
#[test]
fn test_interleaved_adds_and_draws() {
    let mut player = stocked_player();

    player.add_card_to_deck("C001").unwrap();
    player.add_card_to_deck("C002").unwrap();
    assert_eq!(player.draw_card().unwrap().id.as_str(), "C002");

    player.add_card_to_deck("C004").unwrap();
    assert_eq!(player.draw_card().unwrap().id.as_str(), "C004");
    assert_eq!(player.draw_card().unwrap().id.as_str(), "C001");
    assert!(player.draw_card().is_none());
}

// =============================================================================
// Empty Deck Tests
// =============================================================================

/// Scenario: empty deck, draw returns nothing and the hand stays empty.
#[test]
fn test_empty_deck_draw() {
    let mut player = Player::new();

    assert!(player.draw_card().is_none());
    assert_eq!(player.hand().len(), 0);
}

/// Emptying the deck then drawing again leaves the hand as it was.
#[test]
fn test_draw_past_end_keeps_hand() {
    let mut player = stocked_player();
    player.add_card_to_deck("C002").unwrap();
    player.draw_card().unwrap();

    let before = player.hand().clone();
    for _ in 0..5 {
        assert!(player.draw_card().is_none());
    }
    assert_eq!(player.hand(), &before);
}

// =============================================================================
// Identity Tests
// =============================================================================

/// A deck card equals, and is, the inventory card with that id.
#[test]
fn test_deck_card_is_inventory_card() {
    let mut player = stocked_player();

    for card in Catalog::standard().iter() {
        let id = card.id.as_str();
        player.add_card_to_deck(id).unwrap();

        let in_deck = player.get_card_from_deck(id).unwrap();
        let in_inventory = player.inventory().iter().find(|c| c.id.as_str() == id).unwrap();

        assert_eq!(in_deck.as_ref(), in_inventory.as_ref());
        assert!(Arc::ptr_eq(in_deck, in_inventory));
    }

    // Nothing was removed from the inventory
    assert_eq!(player.inventory().len(), 5);
}

/// Unknown ids change nothing.
#[test]
fn test_unknown_id_leaves_state() {
    let mut player = stocked_player();
    let before = player.snapshot();

    assert!(matches!(player.add_card_to_deck("C404"), Err(GameError::UnknownCard(_))));
    assert!(player.get_card_from_deck("C404").is_none());
    assert_eq!(player.snapshot(), before);
}

// =============================================================================
// Properties
// =============================================================================

fn catalog_id() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["C001", "C002", "C003", "C004", "C005"])
}

proptest! {
    /// Any sequence of adds followed by draws is returned last-in first-out.
    #[test]
    fn prop_deck_is_lifo(ids in prop::collection::vec(catalog_id(), 0..40)) {
        let mut player = stocked_player();
        for id in &ids {
            player.add_card_to_deck(id).unwrap();
        }

        let drawn: Vec<String> = std::iter::from_fn(|| player.draw_card())
            .map(|c| c.id.to_string())
            .collect();
        let mut expected: Vec<String> = ids.iter().map(|s| s.to_string()).collect();
        expected.reverse();

        prop_assert_eq!(drawn, expected);
    }

    /// Repeated draws on an empty deck never touch the hand.
    #[test]
    fn prop_empty_draw_is_idempotent(attempts in 1usize..50, preloaded in 0usize..5) {
        let mut player = stocked_player();
        for _ in 0..preloaded {
            player.add_card_to_deck("C003").unwrap();
        }
        while player.draw_card().is_some() {}

        let hand = player.hand().clone();
        for _ in 0..attempts {
            prop_assert!(player.draw_card().is_none());
        }
        prop_assert_eq!(player.hand(), &hand);
        prop_assert_eq!(player.hand().len(), preloaded);
    }

    /// After a successful add, the deck lookup matches the first inventory entry.
    #[test]
    fn prop_deck_lookup_matches_inventory(seed in any::<u64>(), count in 1usize..30) {
        let catalog = Catalog::standard();
        let mut rng = GameRng::new(seed);
        let mut player = Player::new();
        for _ in 0..count {
            player.add_card_to_inventory(catalog.sample_random_card(&mut rng));
        }

        let id = player.inventory()[count / 2].id.clone();
        player.add_card_to_deck(id.as_str()).unwrap();

        let first_in_inventory = player.inventory().iter().find(|c| c.id == id).unwrap();
        let in_deck = player.get_card_from_deck(id.as_str()).unwrap();
        prop_assert!(Arc::ptr_eq(first_in_inventory, in_deck));
        prop_assert_eq!(player.inventory().len(), count);
    }
}
