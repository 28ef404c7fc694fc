mod helpers;

use anyhow::Result;
use cardbox::application::DeckRepository;
use cardbox::domain::CardFields;
use helpers::TestDeck;
use serde_json::Value;

#[test]
fn given_saved_card_when_serializing_then_json_has_all_fields() -> Result<()> {
    // Arrange
    let deck = TestDeck::new()?;
    let mut repo = deck.open()?;
    let card = repo.create_card()?;
    let fields = CardFields::new("2+2?", "4", vec!["study".to_string(), "math".to_string()])
        .expect("Fields should be valid");
    let saved = repo.save_card(&card.name, &fields)?;

    // Act
    let json: Value = serde_json::to_value(&saved)?;

    // Assert
    assert_eq!(json["name"], card.name.as_str());
    assert_eq!(json["created_at"], card.created_at.as_str());
    assert_eq!(json["front"], "2+2?");
    assert_eq!(json["back"], "4");
    assert_eq!(json["labels"], serde_json::json!(["study", "math"]));
    Ok(())
}

#[test]
fn given_empty_card_when_serializing_then_labels_are_empty_array() -> Result<()> {
    // Arrange
    let deck = TestDeck::new()?;
    let mut repo = deck.open()?;
    let card = repo.create_card()?;

    // Act
    let json: Value = serde_json::to_value(&card)?;

    // Assert
    assert_eq!(json["front"], "");
    assert_eq!(json["back"], "");
    assert_eq!(json["labels"], serde_json::json!([]));
    Ok(())
}
