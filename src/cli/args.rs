// src/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Deck directory holding the card files (optional)
    #[arg(short, long, value_name = "DECK_DIR", global = true)]
    pub deck: Option<PathBuf>,

    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create a new flashcard
    New {
        /// Explicit card name instead of a random one
        #[arg(long, value_name = "NAME")]
        name: Option<String>,

        /// Text for the front of the card
        #[arg(long, value_name = "TEXT")]
        front: Option<String>,

        /// Text for the back of the card
        #[arg(long, value_name = "TEXT")]
        back: Option<String>,

        /// Label to attach (repeatable)
        #[arg(long = "label", value_name = "LABEL")]
        labels: Vec<String>,

        /// Output the card as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Show a flashcard
    Show {
        /// Card name to show
        #[arg(value_name = "NAME")]
        name: String,

        /// Output the card as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Edit a flashcard; omitted fields keep their current value
    Edit {
        /// Card name to edit
        #[arg(value_name = "NAME")]
        name: String,

        /// New text for the front of the card
        #[arg(long, value_name = "TEXT")]
        front: Option<String>,

        /// New text for the back of the card
        #[arg(long, value_name = "TEXT")]
        back: Option<String>,

        /// Replacement label (repeatable; replaces the whole label set)
        #[arg(long = "label", value_name = "LABEL")]
        labels: Vec<String>,

        /// Remove all labels from the card
        #[arg(long, conflicts_with = "labels")]
        no_labels: bool,

        /// Output the card as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// List flashcards with name and front text
    List {
        /// Optional search term to filter cards by front text
        #[arg(value_name = "SEARCH")]
        search: Option<String>,
    },

    /// Delete a flashcard from the deck
    Delete {
        /// Card name to delete
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Delete every flashcard in the deck
    Clear,
}
