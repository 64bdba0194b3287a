//! Flashcard deck progress tracking and answer toggles.
//!
//! `ReviewDeck` remembers which cards in a toggled deck have been
//! opened; closing a card forgets it again. The state serializes so
//! an embedding application can persist it wherever and however it
//! likes.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Seen-state for one deck of toggled flashcards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewDeck {
    card_count: usize,
    seen: BTreeSet<usize>,
}

impl ReviewDeck {
    pub fn new(card_count: usize) -> Self {
        Self {
            card_count,
            seen: BTreeSet::new(),
        }
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    /// Remember a card as read. Out-of-range indices are ignored.
    pub fn mark_opened(&mut self, index: usize) {
        if index < self.card_count {
            let _ = self.seen.insert(index);
        }
    }

    /// Closing a card forgets it.
    pub fn mark_closed(&mut self, index: usize) {
        let _ = self.seen.remove(&index);
    }

    pub fn is_seen(&self, index: usize) -> bool {
        self.seen.contains(&index)
    }

    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }

    /// Fraction of the deck read, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.card_count == 0 {
            return 0.0;
        }
        self.seen_count() as f64 / self.card_count as f64
    }

    /// Forget everything and collapse the deck.
    pub fn reset(&mut self) {
        self.seen.clear();
    }
}

/// Two-state show/hide toggle for an exercise answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerToggle {
    visible: bool,
}

impl AnswerToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Button label for the current state.
    pub fn label(&self) -> &'static str {
        if self.visible {
            "Hide answer"
        } else {
            "Show answer"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn opening_and_closing_tracks_seen_state() {
        let mut deck = ReviewDeck::new(4);
        deck.mark_opened(0);
        deck.mark_opened(2);
        assert!(deck.is_seen(0));
        assert!(!deck.is_seen(1));
        assert_eq!(deck.seen_count(), 2);
        assert_eq!(deck.progress(), 0.5);

        deck.mark_closed(0);
        assert!(!deck.is_seen(0));
        assert_eq!(deck.seen_count(), 1);
    }

    #[test]
    fn out_of_range_cards_are_ignored() {
        let mut deck = ReviewDeck::new(2);
        deck.mark_opened(5);
        assert_eq!(deck.seen_count(), 0);
    }

    #[test]
    fn reset_forgets_everything() {
        let mut deck = ReviewDeck::new(3);
        deck.mark_opened(0);
        deck.mark_opened(1);
        deck.reset();
        assert_eq!(deck.seen_count(), 0);
        assert_eq!(deck.progress(), 0.0);
    }

    #[test]
    fn empty_deck_reports_zero_progress() {
        let deck = ReviewDeck::new(0);
        assert_eq!(deck.progress(), 0.0);
    }

    #[test]
    fn seen_state_round_trips_through_serde() {
        let mut deck = ReviewDeck::new(3);
        deck.mark_opened(2);
        let json = serde_json::to_string(&deck).unwrap();
        let restored: ReviewDeck = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, deck);
    }

    #[test]
    fn toggle_flips_visibility_and_label() {
        let mut toggle = AnswerToggle::new();
        assert_eq!(toggle.label(), "Show answer");
        toggle.toggle();
        assert!(toggle.is_visible());
        assert_eq!(toggle.label(), "Hide answer");
        toggle.toggle();
        assert_eq!(toggle.label(), "Show answer");
    }
}
