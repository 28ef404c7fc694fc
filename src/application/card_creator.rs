// src/application/card_creator.rs
use crate::application::DeckRepository;
use crate::domain::{Card, CardFields, DomainError};

pub struct CardCreator<R: DeckRepository> {
    repository: R,
}

impl<R: DeckRepository> CardCreator<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Create a card under a fresh random name. When initial fields are
    /// given, the new card is saved with them right away; the creation
    /// timestamp comes from the create step either way.
    pub fn create_card(&mut self, fields: Option<CardFields>) -> Result<Card, DomainError> {
        let card = self.repository.create_card()?;
        match fields {
            Some(fields) => self.repository.save_card(&card.name, &fields),
            None => Ok(card),
        }
    }

    /// Create a card under an explicit name. `CardExists` propagates so the
    /// caller can treat it as informational.
    pub fn create_named(
        &mut self,
        name: &str,
        fields: Option<CardFields>,
    ) -> Result<Card, DomainError> {
        let card = self.repository.create_card_named(name)?;
        match fields {
            Some(fields) => self.repository.save_card(&card.name, &fields),
            None => Ok(card),
        }
    }
}
