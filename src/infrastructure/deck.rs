// src/infrastructure/deck.rs
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::application::DeckRepository;
use crate::domain::{Card, CardFields, DomainError};
use crate::infrastructure::card_file::CardFile;
use crate::util::ids;

/// A deck is one flat directory of card files.
///
/// File names are opaque, randomly generated identifiers; subdirectories are
/// ignored. The deck provides no locking: single process, single writer.
pub struct FileDeck {
    dir: PathBuf,
    name_length: usize,
}

impl FileDeck {
    /// Open a deck directory, creating it if it does not exist yet.
    pub fn open(dir: impl Into<PathBuf>, name_length: usize) -> Result<Self, DomainError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| DomainError::DeckIo {
            dir: dir.clone(),
            source,
        })?;
        debug!(dir = %dir.display(), "opened deck directory");
        Ok(Self { dir, name_length })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn card(&self, name: &str) -> CardFile {
        CardFile::new(self.dir.join(name))
    }

    /// Names of the regular files in the deck directory, sorted.
    fn entries(&self) -> Result<Vec<String>, DomainError> {
        let read_dir = fs::read_dir(&self.dir).map_err(|source| DomainError::DeckIo {
            dir: self.dir.clone(),
            source,
        })?;

        let mut names = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|source| DomainError::DeckIo {
                dir: self.dir.clone(),
                source,
            })?;
            if entry.path().is_file() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}

impl DeckRepository for FileDeck {
    #[instrument(level = "debug", skip(self))]
    fn create_card(&mut self) -> Result<Card, DomainError> {
        let name = ids::random_name(self.name_length);
        self.card(&name).create()
    }

    #[instrument(level = "debug", skip(self))]
    fn create_card_named(&mut self, name: &str) -> Result<Card, DomainError> {
        self.card(name).create()
    }

    #[instrument(level = "debug", skip(self))]
    fn get_card(&mut self, name: &str) -> Result<Card, DomainError> {
        self.card(name).read()
    }

    #[instrument(level = "debug", skip(self, fields))]
    fn save_card(&mut self, name: &str, fields: &CardFields) -> Result<Card, DomainError> {
        let card = self.card(name);
        // created_at is immutable: carry it over from the record on disk.
        let current = card.read()?;
        card.write(&current.created_at, fields)
    }

    #[instrument(level = "debug", skip(self))]
    fn delete_card(&mut self, name: &str) -> Result<(), DomainError> {
        self.card(name).delete()
    }

    #[instrument(level = "debug", skip(self))]
    fn list_cards(&mut self) -> Result<Vec<Card>, DomainError> {
        let mut cards = Vec::new();
        for name in self.entries()? {
            cards.push(self.card(&name).read()?);
        }
        info!(count = cards.len(), "flashcards found");
        Ok(cards)
    }

    /// Deletes by directory entry without parsing, so malformed cards are
    /// still clearable.
    #[instrument(level = "debug", skip(self))]
    fn clear(&mut self) -> Result<usize, DomainError> {
        let names = self.entries()?;
        for name in &names {
            self.card(name).delete()?;
        }
        info!(count = names.len(), "deleted all flashcards");
        Ok(names.len())
    }
}
