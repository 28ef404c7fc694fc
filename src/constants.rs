// src/constants.rs
//
// Application-wide constants extracted from magic numbers throughout the codebase.
// Each constant is documented with its purpose and usage context.

/// Number of newline-terminated lines in a well-formed card file.
///
/// The lines are, in fixed order: creation timestamp, front, back, labels.
/// A file with any other line count is malformed and is rejected as-is.
///
/// Used in: `infrastructure/card_file.rs`
pub const CARD_LINE_COUNT: usize = 4;

/// chrono format string for the creation timestamp, `DD/MM/YYYY, HH:MM:SS`.
///
/// Stamped once from the local clock when a card is created and never
/// rewritten afterwards.
///
/// Used in: `infrastructure/card_file.rs`, `util/text.rs`
pub const CREATED_AT_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Default length of generated card file names.
///
/// Card names are opaque identifiers with no semantic meaning; 64 lowercase
/// letters make collisions within a deck practically impossible without any
/// bookkeeping.
///
/// Used in: `infrastructure/config.rs`, `infrastructure/deck.rs`
pub const DEFAULT_NAME_LENGTH: usize = 64;
