//! Deck construction scenario tests.
//!
//! These tests drive `DeckEditor` through the situations a deck builder
//! meets in practice:
//! - Per-format ban-list quotas and unique cards
//! - Alternate-art substitution and merging
//! - Statistics of the resulting deck
//! - Unknown catalog identifiers

use ccg_deckbuilder::cards::{CardDefinition, CardId, CardRegistry, CardType, Format, Quotas};
use ccg_deckbuilder::core::Rejection;
use ccg_deckbuilder::deck::{AddOutcome, Deck, DeckEditor, ReplaceOutcome};

fn catalog() -> CardRegistry {
    CardRegistry::from_cards(vec![
        CardDefinition::new("X", "War Banner", CardType::Totem).with_quotas(Quotas::new(2, 3, 3)),
        CardDefinition::new("Y", "Sun Queen", CardType::Ally)
            .with_cost(4)
            .with_power(4)
            .with_quotas(Quotas::new(3, 3, 3))
            .unique(),
        CardDefinition::new("BASE-001", "Knight", CardType::Ally)
            .with_cost(2)
            .with_power(2)
            .with_race("Hero")
            .with_edition("Core"),
        CardDefinition::new("BASE-001-ALT", "Knight", CardType::Ally)
            .with_cost(2)
            .with_power(2)
            .with_race("Hero")
            .with_edition("Core")
            .variant_of("BASE-001"),
        CardDefinition::new("GOLD-001", "Gold", CardType::Gold).with_edition("Core"),
    ])
    .expect("catalog is valid")
}

fn id(raw: &str) -> CardId {
    CardId::new(raw)
}

fn entries(deck: &Deck) -> Vec<(&str, u32)> {
    deck.entries().map(|e| (e.card_id.as_str(), e.quantity)).collect()
}

// =============================================================================
// Quotas
// =============================================================================

/// Ban-list value 2 in RE caps the card at two copies.
#[test]
fn test_format_quota_caps_copies() {
    let catalog = catalog();
    let mut editor = DeckEditor::new(&catalog);
    editor.set_format(Format::Re);

    let outcomes: Vec<_> = (0..4).map(|_| editor.add_card(&id("X"))).collect();

    assert_eq!(editor.quantity_of(&id("X")), 2);
    assert!(outcomes[0].is_added());
    assert!(outcomes[1].is_added());
    assert!(matches!(outcomes[2], AddOutcome::Rejected(Rejection::QuotaExceeded { .. })));
    assert!(matches!(outcomes[3], AddOutcome::Rejected(Rejection::QuotaExceeded { .. })));
}

/// Unique cards stop at one copy even with quota 3.
#[test]
fn test_unique_card_single_copy() {
    let catalog = catalog();
    let mut editor = DeckEditor::new(&catalog);
    editor.set_format(Format::Rl);

    editor.add_card(&id("Y"));
    editor.add_card(&id("Y"));

    assert_eq!(editor.quantity_of(&id("Y")), 1);
}

/// Unknown identifiers leave the deck untouched.
#[test]
fn test_unknown_card_leaves_deck_unchanged() {
    let catalog = catalog();
    let mut editor = DeckEditor::new(&catalog);
    editor.add_card(&id("BASE-001"));
    let before = editor.deck().clone();

    let outcome = editor.add_card(&id("MISSING-404"));

    assert_eq!(outcome, AddOutcome::Rejected(Rejection::UnknownCard(id("MISSING-404"))));
    assert_eq!(editor.deck(), &before);
}

/// Removing then re-adding a single copy restores the deck contents.
#[test]
fn test_remove_then_readd_restores_contents() {
    let catalog = catalog();
    let mut editor = DeckEditor::new(&catalog);
    editor.add_card(&id("Y"));
    editor.add_card(&id("BASE-001"));
    let before = editor.deck().clone();

    editor.remove_card(&id("Y"));
    editor.add_card(&id("Y"));

    assert!(editor.deck().same_contents(&before));
    // The re-added card moves to the end.
    assert_eq!(entries(editor.deck()), vec![("BASE-001", 1), ("Y", 1)]);
}

// =============================================================================
// Alternate arts
// =============================================================================

/// Replacing a base card moves its full quantity onto the variant.
#[test]
fn test_replace_with_alternate_art() {
    let catalog = catalog();
    let mut editor = DeckEditor::new(&catalog);
    editor.load(Deck::from_entries("", Format::Re, vec![(id("BASE-001"), 3)]));

    let outcome = editor.replace_card(&id("BASE-001"), &id("BASE-001-ALT"));

    assert_eq!(
        outcome,
        ReplaceOutcome::Replaced {
            card: id("BASE-001-ALT"),
            quantity: 3
        }
    );
    assert_eq!(entries(editor.deck()), vec![("BASE-001-ALT", 3)]);
    assert_eq!(editor.substitutions().get(&id("BASE-001")), Some(&id("BASE-001-ALT")));
}

/// Replacing into an existing entry merges at the earlier position.
#[test]
fn test_replace_merges_existing_variant() {
    let catalog = catalog();
    let mut editor = DeckEditor::new(&catalog);
    editor.load(Deck::from_entries(
        "",
        Format::Re,
        vec![(id("BASE-001"), 2), (id("BASE-001-ALT"), 1)],
    ));

    editor.replace_card(&id("BASE-001"), &id("BASE-001-ALT"));

    assert_eq!(entries(editor.deck()), vec![("BASE-001-ALT", 3)]);
}

/// Swapping back to the canonical printing forgets the variant choice.
#[test]
fn test_replace_back_to_base() {
    let catalog = catalog();
    let mut editor = DeckEditor::new(&catalog);
    editor.add_card(&id("BASE-001"));
    editor.replace_card(&id("BASE-001"), &id("BASE-001-ALT"));
    editor.replace_card(&id("BASE-001-ALT"), &id("BASE-001"));

    assert_eq!(entries(editor.deck()), vec![("BASE-001", 1)]);
    assert_eq!(editor.current_variant(&id("BASE-001")), &id("BASE-001"));
}

/// A replaced card keeps its rules quantity; further adds still obey quota.
#[test]
fn test_variant_shares_base_quota() {
    let catalog = catalog();
    let mut editor = DeckEditor::new(&catalog);
    for _ in 0..3 {
        editor.add_card(&id("BASE-001"));
    }
    editor.replace_card(&id("BASE-001"), &id("BASE-001-ALT"));

    assert!(!editor.add_card(&id("BASE-001")).is_added());
    assert!(!editor.add_card(&id("BASE-001-ALT")).is_added());
    assert_eq!(editor.total_cards(), 3);
}

// =============================================================================
// Statistics
// =============================================================================

/// Gold has no cost; the average divides by every copy.
#[test]
fn test_statistics_of_mixed_deck() {
    let catalog = catalog();
    let mut editor = DeckEditor::new(&catalog);
    editor.add_card(&id("BASE-001"));
    editor.add_card(&id("BASE-001"));
    editor.add_card(&id("GOLD-001"));

    let stats = editor.current_stats();

    assert_eq!(stats.total_cards, 3);
    assert_eq!(stats.total_cost, 4);
    assert!((stats.average_cost - 4.0 / 3.0).abs() < 1e-9);
    assert_eq!(stats.count_of_type(CardType::Ally), 2);
    assert_eq!(stats.count_of_type(CardType::Gold), 1);
    assert_eq!(stats.counts_by_edition.get("Core"), Some(&3));
    assert!(!stats.has_starter_gold);
}

/// Statistics follow alternate arts: a variant counts like its base.
#[test]
fn test_statistics_after_replace() {
    let catalog = catalog();
    let mut editor = DeckEditor::new(&catalog);
    editor.add_card(&id("BASE-001"));
    editor.add_card(&id("BASE-001"));
    let before = editor.current_stats().clone();

    editor.replace_card(&id("BASE-001"), &id("BASE-001-ALT"));

    assert_eq!(editor.current_stats(), &before);
}
