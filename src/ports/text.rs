// src/ports/text.rs
use crate::domain::Card;

/// Renders cards for the terminal.
#[derive(Debug)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Multi-line view of a single card.
    pub fn render(&self, card: &Card) -> String {
        format!(
            "card:    {}\ncreated: {}\nfront:   {}\nback:    {}\nlabels:  {}\n",
            card.name,
            card.created_at,
            card.front,
            card.back,
            card.labels.join(", "),
        )
    }

    /// One list row: card name followed by the front text.
    pub fn render_row(&self, card: &Card) -> String {
        format!("{}  {}", card.name, card.front)
    }
}

impl Default for TextPresenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_card() -> Card {
        Card {
            name: "abcdefgh".to_string(),
            created_at: "05/03/2024, 14:03:21".to_string(),
            front: "2+2?".to_string(),
            back: "4".to_string(),
            labels: vec!["study".to_string(), "math".to_string()],
        }
    }

    #[test]
    fn given_card_when_rendering_then_shows_all_fields() {
        let rendered = TextPresenter::new().render(&sample_card());

        assert!(rendered.contains("abcdefgh"));
        assert!(rendered.contains("05/03/2024, 14:03:21"));
        assert!(rendered.contains("2+2?"));
        assert!(rendered.contains("4"));
        assert!(rendered.contains("study, math"));
    }

    #[test]
    fn given_card_when_rendering_row_then_shows_name_and_front() {
        let row = TextPresenter::new().render_row(&sample_card());

        assert_eq!(row, "abcdefgh  2+2?");
    }
}
