mod helpers;

use anyhow::Result;
use cardbox::application::{CardEditor, DeckRepository};
use cardbox::domain::DomainError;
use helpers::TestDeck;

#[test]
fn given_existing_card_when_editing_front_then_other_fields_survive() -> Result<()> {
    // Arrange
    let deck = TestDeck::new()?;
    let mut repo = deck.open()?;
    let card = repo.create_card()?;
    let name = card.name.clone();
    let mut editor = CardEditor::new(repo);
    editor.edit_card(
        &name,
        Some("2+2?".to_string()),
        Some("4".to_string()),
        Some(vec!["math".to_string()]),
    )?;

    // Act
    let edited = editor.edit_card(&name, Some("3+3?".to_string()), None, None)?;

    // Assert
    assert_eq!(edited.front, "3+3?");
    assert_eq!(edited.back, "4");
    assert_eq!(edited.labels, vec!["math".to_string()]);
    assert_eq!(edited.created_at, card.created_at);
    Ok(())
}

#[test]
fn given_multiline_input_when_editing_then_rejects_and_leaves_file_alone() -> Result<()> {
    // Arrange
    let deck = TestDeck::new()?;
    let mut repo = deck.open()?;
    let card = repo.create_card()?;
    let name = card.name.clone();
    let before = std::fs::read_to_string(deck.card_path(&name))?;
    let mut editor = CardEditor::new(repo);

    // Act
    let result = editor.edit_card(&name, Some("one\ntwo".to_string()), None, None);

    // Assert
    assert!(matches!(
        result,
        Err(DomainError::MultiLineField { field: "front" })
    ));
    let after = std::fs::read_to_string(deck.card_path(&name))?;
    assert_eq!(before, after);
    Ok(())
}

#[test]
fn given_missing_card_when_editing_then_not_found() -> Result<()> {
    // Arrange
    let deck = TestDeck::new()?;
    let repo = deck.open()?;
    let mut editor = CardEditor::new(repo);

    // Act
    let result = editor.edit_card("missing", Some("q".to_string()), None, None);

    // Assert
    assert!(matches!(result, Err(DomainError::CardNotFound(_))));
    Ok(())
}
