// src/application/card_deleter.rs
use crate::application::DeckRepository;
use crate::domain::DomainError;

pub struct CardDeleter<R: DeckRepository> {
    repository: R,
}

impl<R: DeckRepository> CardDeleter<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn delete_card(&mut self, name: &str) -> Result<(), DomainError> {
        self.repository.delete_card(name)
    }

    /// Delete every card in the deck and return the number removed
    pub fn clear(&mut self) -> Result<usize, DomainError> {
        self.repository.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::util::testing::MockDeckRepository;

    #[test]
    fn given_existing_card_when_deleting_then_card_is_gone() {
        // Arrange
        let mut mock = MockDeckRepository::builder().build();
        mock.create_card_named("abc").expect("Create should succeed");
        let mut deleter = CardDeleter::new(mock);

        // Act
        let result = deleter.delete_card("abc");

        // Assert
        assert!(result.is_ok());
    }

    #[test]
    fn given_nonexistent_card_when_deleting_then_returns_error() {
        // Arrange
        let mock = MockDeckRepository::builder().build();
        let mut deleter = CardDeleter::new(mock);

        // Act
        let result = deleter.delete_card("missing");

        // Assert
        assert!(result.is_err());
        match result.expect_err("Should return error") {
            DomainError::CardNotFound(path) => {
                assert_eq!(path, std::path::PathBuf::from("missing"))
            }
            _ => panic!("Expected CardNotFound error"),
        }
    }

    #[test]
    fn given_populated_deck_when_clearing_then_returns_count() {
        // Arrange
        let mut mock = MockDeckRepository::builder().build();
        mock.create_card_named("a").expect("Create should succeed");
        mock.create_card_named("b").expect("Create should succeed");
        mock.create_card_named("c").expect("Create should succeed");
        let mut deleter = CardDeleter::new(mock);

        // Act
        let count = deleter.clear().expect("Clear should succeed");

        // Assert
        assert_eq!(count, 3);
    }

    #[test]
    fn given_empty_deck_when_clearing_then_returns_zero() {
        // Arrange
        let mock = MockDeckRepository::builder().build();
        let mut deleter = CardDeleter::new(mock);

        // Act
        let count = deleter.clear().expect("Clear should succeed");

        // Assert
        assert_eq!(count, 0);
    }
}
