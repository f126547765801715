//! Frequently asked questions and the single-open accordion that shows them.
use serde::{Deserialize, Serialize};

/// Shown in place of an answer that has not been written yet.
pub const ANSWER_PLACEHOLDER: &str = "Answer will appear here...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub id: u32,
    pub question: String,
    #[serde(default)]
    pub answer: Option<String>,
}

impl FaqItem {
    #[must_use]
    pub fn answer_text(&self) -> &str {
        self.answer
            .as_deref()
            .filter(|answer| !answer.trim().is_empty())
            .unwrap_or(ANSWER_PLACEHOLDER)
    }
}

/// At most one question is expanded at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FaqAccordion {
    open: Option<u32>,
}

impl FaqAccordion {
    #[must_use]
    pub const fn open_item(&self) -> Option<u32> {
        self.open
    }

    #[must_use]
    pub fn is_open(&self, id: u32) -> bool {
        self.open == Some(id)
    }

    /// Open `id`, or close it if it is already the open one.
    pub fn toggle(&mut self, id: u32) {
        self.open = if self.is_open(id) { None } else { Some(id) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_moves_or_closes_the_open_item() {
        let mut accordion = FaqAccordion::default();
        accordion.toggle(1);
        assert!(accordion.is_open(1));
        accordion.toggle(2);
        assert!(!accordion.is_open(1));
        assert_eq!(accordion.open_item(), Some(2));
        accordion.toggle(2);
        assert_eq!(accordion.open_item(), None);
    }

    #[test]
    fn missing_answer_uses_placeholder() {
        let item: FaqItem = serde_json::from_str(r#"{"id": 4, "question": "Who can enter?"}"#).unwrap();
        assert_eq!(item.answer_text(), ANSWER_PLACEHOLDER);
        let blank = FaqItem {
            answer: Some("  ".into()),
            ..item
        };
        assert_eq!(blank.answer_text(), ANSWER_PLACEHOLDER);
    }
}
