// src/util/testing.rs

use anyhow::Result;
use std::collections::{HashMap, VecDeque};
use std::env;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::DeckRepository;
use crate::domain::{Card, CardFields, DomainError};

// Common test environment variables
pub const TEST_ENV_VARS: &[&str] = &["RUST_LOG", "NO_CLEANUP"];

/// Creation timestamp used for every card minted by the mock.
pub const MOCK_CREATED_AT: &str = "01/01/2024, 00:00:00";

/// Shared mock repository for testing use cases that depend on DeckRepository
///
/// This mock keeps the deck in memory and mirrors the file-backed contract:
/// create on an existing name reports it, read/save/delete on a missing name
/// fail with not-found, and `created_at` survives saves.
///
/// # Examples
///
/// ```
/// use cardbox::util::testing::{MockDeckRepository, MOCK_CREATED_AT};
/// use cardbox::domain::Card;
///
/// let mock = MockDeckRepository::builder()
///     .with_card(Card {
///         name: "abc".to_string(),
///         created_at: MOCK_CREATED_AT.to_string(),
///         front: "Question".to_string(),
///         back: "Answer".to_string(),
///         labels: vec![],
///     })
///     .build();
/// ```
pub struct MockDeckRepository {
    cards: HashMap<String, Card>,
    next_names: VecDeque<String>,
    minted: usize,
}

impl MockDeckRepository {
    pub fn builder() -> MockDeckRepositoryBuilder {
        MockDeckRepositoryBuilder::new()
    }

    fn empty_card(name: &str) -> Card {
        Card {
            name: name.to_string(),
            created_at: MOCK_CREATED_AT.to_string(),
            front: String::new(),
            back: String::new(),
            labels: vec![],
        }
    }
}

impl DeckRepository for MockDeckRepository {
    fn create_card(&mut self) -> Result<Card, DomainError> {
        let name = self.next_names.pop_front().unwrap_or_else(|| {
            self.minted += 1;
            format!("mockcard{}", self.minted)
        });
        self.create_card_named(&name)
    }

    fn create_card_named(&mut self, name: &str) -> Result<Card, DomainError> {
        if self.cards.contains_key(name) {
            return Err(DomainError::CardExists(PathBuf::from(name)));
        }
        let card = Self::empty_card(name);
        self.cards.insert(name.to_string(), card.clone());
        Ok(card)
    }

    fn get_card(&mut self, name: &str) -> Result<Card, DomainError> {
        self.cards
            .get(name)
            .cloned()
            .ok_or_else(|| DomainError::CardNotFound(PathBuf::from(name)))
    }

    fn save_card(&mut self, name: &str, fields: &CardFields) -> Result<Card, DomainError> {
        let card = self
            .cards
            .get_mut(name)
            .ok_or_else(|| DomainError::CardNotFound(PathBuf::from(name)))?;
        card.front = fields.front().to_string();
        card.back = fields.back().to_string();
        card.labels = fields.labels().to_vec();
        Ok(card.clone())
    }

    fn delete_card(&mut self, name: &str) -> Result<(), DomainError> {
        self.cards
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| DomainError::CardNotFound(PathBuf::from(name)))
    }

    fn list_cards(&mut self) -> Result<Vec<Card>, DomainError> {
        let mut cards: Vec<Card> = self.cards.values().cloned().collect();
        cards.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(cards)
    }

    fn clear(&mut self) -> Result<usize, DomainError> {
        let count = self.cards.len();
        self.cards.clear();
        Ok(count)
    }
}

/// Builder for MockDeckRepository
///
/// Provides a fluent interface for seeding the in-memory deck.
pub struct MockDeckRepositoryBuilder {
    cards: HashMap<String, Card>,
    next_names: VecDeque<String>,
}

impl MockDeckRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            cards: HashMap::new(),
            next_names: VecDeque::new(),
        }
    }

    /// Seed a card that can be retrieved by get_card
    pub fn with_card(mut self, card: Card) -> Self {
        self.cards.insert(card.name.clone(), card);
        self
    }

    /// Queue the name the next create_card call will use
    pub fn with_next_name(mut self, name: impl Into<String>) -> Self {
        self.next_names.push_back(name.into());
        self
    }

    pub fn build(self) -> MockDeckRepository {
        MockDeckRepository {
            cards: self.cards,
            next_names: self.next_names,
            minted: 0,
        }
    }
}

impl Default for MockDeckRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

pub fn print_active_env_vars() {
    for var in TEST_ENV_VARS {
        if let Ok(value) = env::var(var) {
            println!("{var}={value}");
        } else {
            println!("{var} is not set");
        }
    }
}
