// src/domain/card.rs
use serde::Serialize;

use crate::domain::DomainError;

/// One flashcard record as loaded from its backing file.
///
/// `created_at` is stamped when the card is created and never changes
/// afterwards; all other fields are replaced wholesale on every save.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub name: String,
    pub created_at: String,
    pub front: String,
    pub back: String,
    pub labels: Vec<String>,
}

/// Validated mutable card content, ready to be persisted.
///
/// Construction rejects input the file format cannot represent: line breaks
/// in front/back, and commas or line breaks inside a label token. Labels are
/// trimmed and empty tokens dropped, so the serialized labels line parses
/// back to exactly this set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardFields {
    front: String,
    back: String,
    labels: Vec<String>,
}

impl CardFields {
    pub fn new(
        front: impl Into<String>,
        back: impl Into<String>,
        labels: Vec<String>,
    ) -> Result<Self, DomainError> {
        let front = front.into();
        let back = back.into();

        if front.contains('\n') {
            return Err(DomainError::MultiLineField { field: "front" });
        }
        if back.contains('\n') {
            return Err(DomainError::MultiLineField { field: "back" });
        }

        let mut cleaned = Vec::with_capacity(labels.len());
        for label in labels {
            if label.contains(',') || label.contains('\n') {
                return Err(DomainError::InvalidLabel(label));
            }
            let label = label.trim();
            if !label.is_empty() {
                cleaned.push(label.to_string());
            }
        }

        Ok(Self {
            front,
            back,
            labels: cleaned,
        })
    }

    pub fn front(&self) -> &str {
        &self.front
    }

    pub fn back(&self) -> &str {
        &self.back
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

/// Serialize a label set as the single labels line of a card file.
pub fn join_labels(labels: &[String]) -> String {
    labels.join(",")
}

/// Parse the labels line back into a label set.
pub fn split_labels(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
