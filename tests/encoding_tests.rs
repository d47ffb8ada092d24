//! Formatter and batch-store tests over the public API.

use std::fs::File;

use card_corpus::cards::{Card, Vocabulary};
use card_corpus::corpus::RawCard;
use card_corpus::{
    BatchIterator, CardFormatter, DelimitedTextFormatter, EncodedBatch, Error, Field,
    HybridFormatter, ModelInput,
};
use tempfile::tempdir;

fn bear_raw() -> RawCard {
    RawCard {
        name: "Bear".to_string(),
        types: vec!["Creature".to_string()],
        subtypes: vec!["Bear".to_string()],
        power: Some("2".to_string()),
        toughness: Some("2".to_string()),
        mana_cost: Some("{1}{G}".to_string()),
        rarity: Some("Common".to_string()),
        text: Some("@ rides a @. ".to_string()),
        ..RawCard::default()
    }
}

/// The worked delimited-text example: 8 fields, 9 pipes, sequences
/// space-joined.
#[test]
fn test_text_formatter_worked_example() {
    let formatter = DelimitedTextFormatter::from_names(&[
        "name",
        "types",
        "subtypes",
        "manacost",
        "rarity",
        "power",
        "toughness",
        "text",
    ])
    .expect("all names valid");

    let input = formatter.format(&Card::from_raw(bear_raw())).unwrap();
    assert_eq!(input.text, "|Bear|Creature|Bear|{1}{G}|Common|2|2|@ rides a @. |");
    assert_eq!(input.text.matches('|').count(), 9);
}

/// The worked mana-cost vector example: WUBRG identity with G set, then
/// counts over the symbol vocabulary.
#[test]
fn test_hybrid_formatter_worked_example() {
    let raw = bear_raw();
    let vocab = Vocabulary::scan([&raw]);
    assert_eq!(vocab.mana_symbols(), ["{1}", "{G}"]);

    let formatter = HybridFormatter::new(vocab)
        .with_hints(vec![Field::ManaCost])
        .expect("manacost is hintable");

    let input = formatter.format(&Card::from_raw(raw)).unwrap();
    assert_eq!(
        input.features.as_slice(),
        [0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0]
    );
}

/// Misconfigured formatters fail when built, not per card.
#[test]
fn test_construction_time_validation() {
    let err = DelimitedTextFormatter::from_names(&["name", "flavor"]).unwrap_err();
    assert!(matches!(err, Error::UnknownField { name } if name == "flavor"));

    let err = HybridFormatter::new(Vocabulary::default())
        .with_hints(vec![Field::Rarity])
        .unwrap_err();
    assert!(matches!(err, Error::UnhintableField { field: Field::Rarity }));
}

/// Encoding a card against a foreign vocabulary is a hard error.
#[test]
fn test_unknown_token_rejected() {
    let raw = bear_raw();
    let vocab = Vocabulary::scan([&raw]);
    let formatter = HybridFormatter::new(vocab)
        .with_hints(vec![Field::Subtypes])
        .unwrap();

    let mut outsider = Card::from_raw(bear_raw());
    outsider.subtypes = vec!["Dinosaur".to_string()];

    let err = formatter.format(&outsider).unwrap_err();
    assert!(matches!(err, Error::UnknownToken { token, .. } if token == "Dinosaur"));
}

/// A formatted batch survives the store round trip through a real file.
#[test]
fn test_encoded_batch_file_round_trip() {
    let raw = bear_raw();
    let vocab = Vocabulary::scan([&raw]);
    let formatter = HybridFormatter::new(vocab)
        .with_hints(vec![Field::ManaCost])
        .unwrap();

    let cards = vec![Card::from_raw(bear_raw()), Card::from_raw(bear_raw())];
    let mut batches = BatchIterator::new(cards, 42);
    let drawn = batches.next_batch(2).unwrap();

    let inputs: Vec<ModelInput> = drawn
        .iter()
        .map(|c| formatter.format(c).unwrap())
        .collect();
    let feature_len = formatter.feature_len();
    let batch = EncodedBatch::new(inputs, batches.epochs(), feature_len);

    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("batch.bin");
    batch
        .write_to(File::create(&path).expect("create"))
        .expect("write");

    let back = EncodedBatch::read_from(File::open(&path).expect("open")).expect("read");
    assert_eq!(batch, back);
    assert_eq!(back.feature_len, 7);
    assert!(back
        .inputs
        .iter()
        .all(|i| i.features.len() == back.feature_len));
}

/// Hybrid output with no hints matches the pure text formatter.
#[test]
fn test_formatters_agree_without_hints() {
    let raw = bear_raw();
    let vocab = Vocabulary::scan([&raw]);
    let card = Card::from_raw(raw);

    let plain = DelimitedTextFormatter::new().format(&card).unwrap();
    let hybrid = HybridFormatter::new(vocab).format(&card).unwrap();

    assert_eq!(plain.text, hybrid.text);
    assert!(hybrid.features.is_empty());
}
