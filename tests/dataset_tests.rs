//! End-to-end pipeline tests.
//!
//! These run the whole chain against a small source document on disk:
//! load, exclusion, dedup, sanitization, vocabulary scan, normalization.

use std::fs;

use card_corpus::corpus::ExclusionPolicy;
use card_corpus::{Dataset, Error};
use tempfile::tempdir;

/// A small source document shaped like the real thing: three sets (one
/// denylisted), a reprint, and a denylisted card type.
const SOURCE: &str = r#"{
    "ALP": {
        "name": "Alpha",
        "cards": [
            {
                "name": "Bear",
                "types": ["Creature"],
                "subtypes": ["Bear"],
                "manaCost": "{1}{G}",
                "power": "2",
                "toughness": "2",
                "rarity": "Common",
                "text": "Bear rides a Bear. (Reminder.)"
            },
            {
                "name": "Jace",
                "types": ["Planeswalker"],
                "subtypes": ["Jace"],
                "manaCost": "{2}{U}{U}",
                "rarity": "Mythic"
            },
            {
                "name": "Backup Plan",
                "types": ["Conspiracy"],
                "text": "Draw an additional hand."
            }
        ]
    },
    "BET": {
        "name": "Beta",
        "cards": [
            {
                "name": "Bear",
                "types": ["Creature"],
                "subtypes": ["Bear"],
                "manaCost": "{1}{G}",
                "power": "2",
                "toughness": "2",
                "rarity": "Uncommon",
                "text": "Bear rides a Bear. (Reminder.)"
            },
            {
                "name": "Island",
                "types": ["Land"],
                "subtypes": ["Island"],
                "rarity": "Common"
            }
        ]
    },
    "UGL": {
        "name": "Unglued",
        "cards": [
            {
                "name": "Chicken",
                "types": ["Creature"],
                "subtypes": ["Chicken"]
            }
        ]
    }
}"#;

fn load_fixture() -> Dataset {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("AllSets.json");
    fs::write(&path, SOURCE).expect("write fixture");
    Dataset::load(&path, &ExclusionPolicy::new()).expect("load fixture")
}

/// Every card name appears once; reprints collapse to the first-seen
/// printing under sorted set-code order.
#[test]
fn test_dedup_first_seen_wins() {
    let dataset = load_fixture();

    let bears: Vec<_> = dataset
        .cards()
        .iter()
        .filter(|c| c.name == "Bear")
        .collect();
    assert_eq!(bears.len(), 1);
    // "ALP" sorts before "BET", so the Alpha printing won.
    assert_eq!(bears[0].rarity.as_deref(), Some("Common"));
}

/// No admitted record comes from a denylisted set or carries a
/// denylisted type.
#[test]
fn test_exclusions_applied() {
    let dataset = load_fixture();

    assert!(dataset.cards().iter().all(|c| c.name != "Chicken"));
    assert!(dataset.cards().iter().all(|c| c.name != "Backup Plan"));
    assert_eq!(dataset.len(), 3); // Bear, Jace, Island
}

/// Vocabulary lists are sorted, duplicate-free, and match the union over
/// admitted records - with Planeswalker subtypes excluded.
#[test]
fn test_vocabulary_contents() {
    let dataset = load_fixture();
    let vocab = dataset.vocabulary();

    assert_eq!(vocab.types(), ["Creature", "Land", "Planeswalker"]);
    // "Jace" is a planeswalker subtype and "Chicken" came from Unglued;
    // neither belongs here.
    assert_eq!(vocab.subtypes(), ["Bear", "Island"]);
    assert_eq!(vocab.mana_symbols(), ["{1}", "{2}", "{G}", "{U}"]);
    assert!(vocab.supertypes().is_empty());
}

/// The sanitizer ran before normalization: reminder text stripped,
/// self-references collapsed.
#[test]
fn test_sanitized_text() {
    let dataset = load_fixture();
    let bear = dataset
        .cards()
        .iter()
        .find(|c| c.name == "Bear")
        .expect("Bear admitted");

    assert_eq!(bear.text.as_deref(), Some("@ rides a @. "));
}

/// Loading the same document twice produces the same dataset.
#[test]
fn test_load_is_deterministic() {
    let a = load_fixture();
    let b = load_fixture();

    let names_a: Vec<_> = a.cards().iter().map(|c| &c.name).collect();
    let names_b: Vec<_> = b.cards().iter().map(|c| &c.name).collect();
    assert_eq!(names_a, names_b);
    assert_eq!(a.vocabulary().mana_symbols(), b.vocabulary().mana_symbols());
}

#[test]
fn test_missing_file() {
    let err = Dataset::load("/no/such/AllSets.json", &ExclusionPolicy::new()).unwrap_err();
    assert!(matches!(err, Error::MissingFile { .. }));
}

#[test]
fn test_malformed_document() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("AllSets.json");
    fs::write(&path, "{ not json").expect("write fixture");

    let err = Dataset::load(&path, &ExclusionPolicy::new()).unwrap_err();
    assert!(matches!(err, Error::MalformedDocument { .. }));
}

/// A custom policy admits what the default rejects.
#[test]
fn test_injected_policy_overrides_defaults() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("AllSets.json");
    fs::write(&path, SOURCE).expect("write fixture");

    let admit_all = ExclusionPolicy::new()
        .with_set_filter(|_| false)
        .with_type_filter(|_| false);
    let dataset = Dataset::load(&path, &admit_all).expect("load");

    assert!(dataset.cards().iter().any(|c| c.name == "Chicken"));
    assert!(dataset.cards().iter().any(|c| c.name == "Backup Plan"));
}

/// Batch iteration over a loaded dataset covers every card each epoch.
#[test]
fn test_batches_over_loaded_dataset() {
    let dataset = load_fixture();
    let mut batches = dataset.batches(42);

    let mut names: Vec<String> = Vec::new();
    names.extend(batches.next_batch(2).unwrap().iter().map(|c| c.name.clone()));
    names.extend(batches.next_batch(1).unwrap().iter().map(|c| c.name.clone()));
    names.sort();

    assert_eq!(names, vec!["Bear", "Island", "Jace"]);
    assert_eq!(batches.epochs(), 0);
}
