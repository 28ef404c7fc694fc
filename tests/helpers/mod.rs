use anyhow::{Context, Result};
use cardbox::infrastructure::FileDeck;
use std::path::PathBuf;
use tempfile::TempDir;

/// Short card names keep test output readable.
#[allow(dead_code)]
pub const TEST_NAME_LENGTH: usize = 8;

/// Test fixture owning a temporary deck directory
#[allow(dead_code)]
pub struct TestDeck {
    _temp_dir: TempDir,
    pub dir: PathBuf,
}

#[allow(dead_code)]
impl TestDeck {
    /// Create a fixture with a not-yet-existing deck directory inside a
    /// fresh temporary directory
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let dir = temp_dir.path().join("cards");

        Ok(Self {
            _temp_dir: temp_dir,
            dir,
        })
    }

    /// Open the deck repository for this fixture
    pub fn open(&self) -> Result<FileDeck> {
        Ok(FileDeck::open(&self.dir, TEST_NAME_LENGTH)?)
    }

    /// Path of a card's backing file
    pub fn card_path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}
