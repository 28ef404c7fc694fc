// src/application/card_viewer.rs
use crate::domain::{Card, CardFields, DomainError};

/// Deck access as the use cases see it: one flat set of cards addressed by
/// opaque name. File layout and naming live behind this seam.
pub trait DeckRepository {
    /// Create an empty card under a fresh random name.
    fn create_card(&mut self) -> Result<Card, DomainError>;

    /// Create an empty card under an explicit name. Reports `CardExists`
    /// when the name is already taken, leaving the existing card untouched.
    fn create_card_named(&mut self, name: &str) -> Result<Card, DomainError>;

    fn get_card(&mut self, name: &str) -> Result<Card, DomainError>;

    /// Full-record rewrite of an existing card. `created_at` is preserved
    /// from the record on disk; there is no partial-field update.
    fn save_card(&mut self, name: &str, fields: &CardFields) -> Result<Card, DomainError>;

    fn delete_card(&mut self, name: &str) -> Result<(), DomainError>;

    fn list_cards(&mut self) -> Result<Vec<Card>, DomainError>;

    /// Delete every card in the deck and return how many were removed.
    fn clear(&mut self) -> Result<usize, DomainError>;
}

pub struct CardViewer<R: DeckRepository> {
    repository: R,
}

impl<R: DeckRepository> CardViewer<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn view_card(&mut self, name: &str) -> Result<Card, DomainError> {
        self.repository.get_card(name)
    }
}
