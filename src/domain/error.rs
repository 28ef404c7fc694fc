// src/domain/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::constants::CARD_LINE_COUNT;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("card not found: {}", .0.display())]
    CardNotFound(PathBuf),

    #[error("card already exists: {}", .0.display())]
    CardExists(PathBuf),

    /// The backing file does not hold exactly the fixed number of
    /// newline-terminated lines. Never auto-corrected; the file is left
    /// untouched on disk.
    #[error(
        "malformed card file {}: expected exactly {} newline-terminated lines, found {found}",
        .path.display(),
        CARD_LINE_COUNT
    )]
    MalformedCard { path: PathBuf, found: usize },

    #[error("{field} must be a single line")]
    MultiLineField { field: &'static str },

    #[error("invalid label {0:?}: labels must not contain commas or line breaks")]
    InvalidLabel(String),

    #[error("cannot access card {}: {source}", .path.display())]
    CardIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot access deck directory {}: {source}", .dir.display())]
    DeckIo {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
}
