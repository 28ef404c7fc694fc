// src/lib.rs
//! File-backed flashcard deck manager.
//!
//! Every flashcard is one small text file: creation timestamp, front, back
//! and labels, each on its own line. A deck is a flat directory of such
//! files. Single process, single writer: decks provide no locking, and
//! concurrent access to the same deck directory is undefined.

pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::application::{CardCreator, CardDeleter, CardEditor, CardLister, CardViewer};
use crate::cli::args::{Args, Command};
use crate::domain::{Card, CardFields, DomainError};
use crate::infrastructure::{Config, FileDeck};
use crate::ports::TextPresenter;

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting cardbox with arguments");

    let config = load_config(args.config.as_deref())?;
    let deck_dir = resolve_deck_dir(args.deck.clone(), &config)?;
    debug!(?deck_dir, "Using deck directory");

    let name_length = config.deck.name_length;
    let deck = FileDeck::open(&deck_dir, name_length)?;
    let presenter = TextPresenter::new();

    match args.command {
        Command::New {
            name,
            front,
            back,
            labels,
            json,
        } => {
            let fields = if front.is_some() || back.is_some() || !labels.is_empty() {
                Some(CardFields::new(
                    front.unwrap_or_default(),
                    back.unwrap_or_default(),
                    labels,
                )?)
            } else {
                None
            };

            let mut creator = CardCreator::new(deck);
            let card = match name {
                Some(name) => match creator.create_named(&name, fields) {
                    Err(DomainError::CardExists(path)) => {
                        // Informational: the existing card wins, untouched.
                        warn!(path = %path.display(), "card already exists, leaving it untouched");
                        let deck = FileDeck::open(&deck_dir, name_length)?;
                        CardViewer::new(deck).view_card(&name)?
                    }
                    other => other?,
                },
                None => creator.create_card(fields)?,
            };

            info!(card = %card.name, "Created card");
            print_card(&presenter, &card, json)?;
        }

        Command::Show { name, json } => {
            let mut viewer = CardViewer::new(deck);
            let card = viewer.view_card(&name)?;
            print_card(&presenter, &card, json)?;
        }

        Command::Edit {
            name,
            front,
            back,
            labels,
            no_labels,
            json,
        } => {
            let labels = if no_labels {
                Some(Vec::new())
            } else if labels.is_empty() {
                None
            } else {
                Some(labels)
            };

            let mut editor = CardEditor::new(deck);
            let card = editor.edit_card(&name, front, back, labels)?;
            info!(card = %card.name, "Saved card");
            print_card(&presenter, &card, json)?;
        }

        Command::List { search } => {
            let mut lister = CardLister::new(deck);
            let cards = lister.list_cards(search.as_deref())?;
            for card in &cards {
                println!("{}", presenter.render_row(card));
            }
            info!(count = cards.len(), "Listed cards");
        }

        Command::Delete { name } => {
            let mut deleter = CardDeleter::new(deck);
            deleter.delete_card(&name)?;
            println!("deleted {name}");
        }

        Command::Clear => {
            let mut deleter = CardDeleter::new(deck);
            let count = deleter.clear()?;
            println!("deleted {count} flashcards");
        }
    }

    Ok(())
}

fn print_card(presenter: &TextPresenter, card: &Card, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(card).context("Failed to serialize card to JSON")?
        );
    } else {
        print!("{}", presenter.render(card));
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => match dirs::config_dir().map(|d| d.join("cardbox").join("config.toml")) {
            Some(path) if path.exists() => {
                debug!(?path, "Loading config from default location");
                Config::load(&path)
            }
            _ => Ok(Config::default()),
        },
    }
}

/// Resolve the deck directory: `--deck` flag, then config file, then the
/// platform data directory.
pub fn resolve_deck_dir(flag: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    if let Some(dir) = flag {
        debug!(?dir, "Using deck directory from flag");
        return Ok(dir);
    }

    if !config.deck.dir.is_empty() {
        debug!(dir = %config.deck.dir, "Using deck directory from config");
        return Ok(PathBuf::from(&config.deck.dir));
    }

    let data_dir = dirs::data_dir().context("Could not find platform data directory")?;
    Ok(data_dir.join("cardbox").join("cards"))
}
