// src/infrastructure/card_file.rs
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

use crate::constants::{CARD_LINE_COUNT, CREATED_AT_FORMAT};
use crate::domain::card::{join_labels, split_labels};
use crate::domain::{Card, CardFields, DomainError};
use crate::util::text;

/// One flashcard's backing file.
///
/// The file holds exactly four newline-terminated lines in fixed order:
/// creation timestamp, front, back, labels. Anything else is malformed and
/// is rejected as-is; the store never pads, repairs, or otherwise rewrites
/// a file it failed to parse.
///
/// Operations only exist for the states they are valid in: `read`, `write`
/// and `delete` require the file to exist, `create` requires it not to.
pub struct CardFile {
    path: PathBuf,
}

impl CardFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The card's name within its deck (the backing file's name).
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Create the backing file with a freshly stamped creation timestamp and
    /// empty front, back and labels. The timestamp is written once here and
    /// never rewritten by any later operation.
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    pub fn create(&self) -> Result<Card, DomainError> {
        if self.path.exists() {
            debug!("card already exists, leaving file untouched");
            return Err(DomainError::CardExists(self.path.clone()));
        }

        let created_at = Local::now().format(CREATED_AT_FORMAT).to_string();
        self.write_lines(&created_at, &CardFields::default())?;
        self.read()
    }

    /// Load the record from disk, replacing any previously loaded state.
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    pub fn read(&self) -> Result<Card, DomainError> {
        if !self.path.exists() {
            return Err(DomainError::CardNotFound(self.path.clone()));
        }

        let content = fs::read_to_string(&self.path).map_err(|source| DomainError::CardIo {
            path: self.path.clone(),
            source,
        })?;
        self.parse(&content)
    }

    /// Full-record rewrite followed by a verifying re-read. If the rewrite
    /// somehow produced a non-conformant file, the re-read surfaces it as
    /// `MalformedCard` immediately instead of persisting corruption
    /// silently.
    #[instrument(level = "debug", skip(self, fields), fields(path = %self.path.display()))]
    pub fn write(&self, created_at: &str, fields: &CardFields) -> Result<Card, DomainError> {
        if !self.path.exists() {
            return Err(DomainError::CardNotFound(self.path.clone()));
        }

        self.write_lines(created_at, fields)?;
        self.read()
    }

    /// Remove the backing file. The identity is invalid afterwards until a
    /// new `create`.
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    pub fn delete(&self) -> Result<(), DomainError> {
        if !self.path.exists() {
            return Err(DomainError::CardNotFound(self.path.clone()));
        }

        fs::remove_file(&self.path).map_err(|source| DomainError::CardIo {
            path: self.path.clone(),
            source,
        })
    }

    fn write_lines(&self, created_at: &str, fields: &CardFields) -> Result<(), DomainError> {
        let content = format!(
            "{}\n{}\n{}\n{}\n",
            created_at,
            fields.front(),
            fields.back(),
            join_labels(fields.labels()),
        );
        fs::write(&self.path, content).map_err(|source| DomainError::CardIo {
            path: self.path.clone(),
            source,
        })
    }

    fn parse(&self, content: &str) -> Result<Card, DomainError> {
        let lines: Vec<&str> = content.split_inclusive('\n').collect();
        let well_formed =
            lines.len() == CARD_LINE_COUNT && lines.iter().all(|l| l.ends_with('\n'));
        if !well_formed {
            return Err(DomainError::MalformedCard {
                path: self.path.clone(),
                found: lines.len(),
            });
        }

        let line = |i: usize| lines[i].trim_end_matches('\n').to_string();

        let created_at = line(0);
        if !text::is_created_at(&created_at) {
            warn!(
                path = %self.path.display(),
                %created_at,
                "creation timestamp does not match the DD/MM/YYYY, HH:MM:SS shape"
            );
        }

        Ok(Card {
            name: self.name(),
            created_at,
            front: line(1),
            back: line(2),
            labels: split_labels(&line(3)),
        })
    }
}
