// src/application/card_lister.rs
use crate::application::DeckRepository;
use crate::domain::{Card, DomainError};

pub struct CardLister<R: DeckRepository> {
    repository: R,
}

impl<R: DeckRepository> CardLister<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// List all cards, or filter by search query
    ///
    /// # Arguments
    /// * `search_query` - Optional search term to filter front text
    ///
    /// # Returns
    /// Vector of cards matching the criteria
    pub fn list_cards(&mut self, search_query: Option<&str>) -> Result<Vec<Card>, DomainError> {
        let cards = self.repository.list_cards()?;
        Ok(match search_query {
            None => cards,
            Some(query) => cards
                .into_iter()
                .filter(|c| c.front.contains(query))
                .collect(),
        })
    }
}
