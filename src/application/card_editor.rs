// src/application/card_editor.rs
use crate::application::DeckRepository;
use crate::domain::{Card, CardFields, DomainError};

pub struct CardEditor<R: DeckRepository> {
    repository: R,
}

impl<R: DeckRepository> CardEditor<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Full-record rewrite: the card is read, the given fields replace the
    /// current ones (omitted fields keep their value, a given label set
    /// replaces the whole set), and the record is written back in one piece.
    pub fn edit_card(
        &mut self,
        name: &str,
        front: Option<String>,
        back: Option<String>,
        labels: Option<Vec<String>>,
    ) -> Result<Card, DomainError> {
        let current = self.repository.get_card(name)?;
        let fields = CardFields::new(
            front.unwrap_or(current.front),
            back.unwrap_or(current.back),
            labels.unwrap_or(current.labels),
        )?;
        self.repository.save_card(name, &fields)
    }
}
