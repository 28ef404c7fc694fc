// src/util/text.rs
use regex::Regex;

/// Check whether a string has the `DD/MM/YYYY, HH:MM:SS` creation timestamp
/// shape.
///
/// The timestamp line of a card file is opaque, immutable data: readers
/// accept whatever is there, but use this check to flag odd-looking
/// timestamps in the logs.
pub fn is_created_at(s: &str) -> bool {
    let re = Regex::new(r"^\d{2}/\d{2}/\d{4}, \d{2}:\d{2}:\d{2}$").unwrap();
    re.is_match(s)
}
