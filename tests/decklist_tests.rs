//! Decklist text and catalog integration tests.
//!
//! Exercises the full pipeline: atomic JSON -> catalog -> parsed deck
//! -> legality -> exported text, plus the bincode catalog cache.

use std::fs;

use deckforge::{
    parse_decklist, Card, CardCatalog, DeckComposition, DecklistStyle, Format, LegalityStatus,
    ManaValue,
};

const SAMPLE_CATALOG: &str = r#"{
    "meta": {"date": "2025-06-01", "version": "5.2.2"},
    "data": {
        "Lightning Bolt": [{
            "name": "Lightning Bolt",
            "manaValue": 1.0,
            "colors": ["R"],
            "legalities": {"modern": "Legal", "legacy": "Legal", "vintage": "Legal"}
        }],
        "Mountain": [{
            "name": "Mountain",
            "manaValue": 0.0,
            "legalities": {"modern": "Legal", "legacy": "Legal", "vintage": "Legal", "commander": "Legal"}
        }],
        "Krenko, Mob Boss": [{
            "name": "Krenko, Mob Boss",
            "manaValue": 4.0,
            "colors": ["R"],
            "legalities": {"commander": "Legal", "legacy": "Legal", "oathbreaker": "Legal"}
        }],
        "Zada, Hedron Grinder": [{
            "name": "Zada, Hedron Grinder",
            "manaValue": 4.0,
            "colors": ["R"],
            "legalities": {"commander": "Legal"}
        }],
        "Smash to Smithereens": [{
            "name": "Smash to Smithereens",
            "manaValue": 2.0,
            "colors": ["R"],
            "legalities": {"modern": "Legal"}
        }]
    }
}"#;

fn sample_catalog() -> CardCatalog {
    let file = serde_json::from_str(SAMPLE_CATALOG).unwrap();
    CardCatalog::from_atomic_file(&file).unwrap()
}

#[test]
fn test_catalog_from_sample_json() {
    let catalog = sample_catalog();
    assert_eq!(catalog.len(), 5);

    let bolt = catalog.get("Lightning Bolt").unwrap();
    assert_eq!(bolt.mana_value(), ManaValue::whole(1));
    assert!(bolt.is_legal_in(Format::Modern));

    // The unmodeled "oathbreaker" key was skipped, not an error.
    let krenko = catalog.get("Krenko, Mob Boss").unwrap();
    assert_eq!(krenko.legalities().len(), 2);
}

#[test]
fn test_parse_check_export_pipeline() {
    let catalog = sample_catalog();
    let text = "4 Lightning Bolt\n20 Mountain\n\nSideboard\n3 Smash to Smithereens\n";

    let mut deck = parse_decklist(text, &catalog).unwrap();
    deck.format = Some(Format::Limited);
    assert_eq!(deck.total_cards(), 27);

    // 24 main cards is under the limited 40-card floor.
    assert!(!deck.is_legal(None));
    deck.main.add(catalog.get("Mountain").unwrap().clone(), 16);
    assert!(deck.is_legal(None));

    assert_eq!(
        deck.export(DecklistStyle::Plain),
        "4 Lightning Bolt\n36 Mountain\n\nSideboard\n3 Smash to Smithereens\n"
    );
}

#[test]
fn test_commander_deck_export_conventions() {
    let catalog = sample_catalog();
    let text = "Commander\n1 Krenko, Mob Boss\n1 Zada, Hedron Grinder\n\nDeck\n98 Mountain\n";
    let deck = parse_decklist(text, &catalog).unwrap();

    assert_eq!(deck.command_zone.total(), 2);
    assert_eq!(deck.main.total(), 98);

    // MTGO convention: commander header present, empty sideboard omitted.
    assert_eq!(
        deck.export(DecklistStyle::Mtgo),
        "Commander\n1 Krenko, Mob Boss\n1 Zada, Hedron Grinder\n\n98 Mountain\n"
    );
    assert_eq!(
        deck.export(DecklistStyle::Arena),
        "Commander\n1 Krenko, Mob Boss\n1 Zada, Hedron Grinder\n\nDeck\n98 Mountain\n"
    );
    assert_eq!(
        deck.export(DecklistStyle::Bare),
        "1 Krenko, Mob Boss\n1 Zada, Hedron Grinder\n\n98 Mountain\n"
    );
}

#[test]
fn test_parsed_deck_carries_catalog_legality() {
    let catalog = sample_catalog();
    let deck = parse_decklist("60 Mountain\n", &catalog).unwrap();

    // The parsed Mountain entries carry the catalog's legality map.
    assert!(deck.is_legal(Some(Format::Modern)));
    assert!(deck.is_legal(Some(Format::Limited)));
}

#[test]
fn test_json_file_and_cache_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("atomic.json");
    let cache_path = dir.path().join("atomic.cache");
    fs::write(&json_path, SAMPLE_CATALOG).unwrap();

    let catalog = CardCatalog::load_json(&json_path).unwrap();
    assert_eq!(catalog.len(), 5);

    catalog.save_cache(&cache_path).unwrap();
    let cached = CardCatalog::load_cache(&cache_path).unwrap();

    assert_eq!(cached.len(), catalog.len());
    let bolt = cached.get("Lightning Bolt").unwrap();
    assert_eq!(bolt.mana_value(), ManaValue::whole(1));
    assert_eq!(bolt.legality_in(Format::Vintage), LegalityStatus::Legal);
}

#[test]
fn test_load_json_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = CardCatalog::load_json(dir.path().join("nope.json"));
    assert!(result.is_err());
}

#[test]
fn test_deck_composition_json_roundtrip() {
    let catalog = sample_catalog();
    let mut deck =
        parse_decklist("4 Lightning Bolt\n20 Mountain\n", &catalog).unwrap();
    deck.archetype = "burn".to_string();
    deck.format = Some(Format::Modern);

    let json = serde_json::to_string(&deck).unwrap();
    let back: DeckComposition = serde_json::from_str(&json).unwrap();

    assert_eq!(back, deck);
    assert_eq!(back.main.quantity(&Card::new("Lightning Bolt")), 4);
}
