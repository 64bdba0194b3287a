//! Term-matching board state and scoring.
//!
//! Headless model of the click-to-pair board: one column of terms,
//! one shuffled column of definitions. Selecting a term makes it
//! active; selecting a definition while a term is active records the
//! pair. Checking grades every recorded pair once. How the board is
//! drawn, and whether its state is persisted, is up to the caller.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One term/definition pairing authored into a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchPair {
    pub term: String,
    pub definition: String,
}

impl MatchPair {
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }
}

/// Visual state of one card on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardMark {
    Idle,
    Active,
    Paired,
    Correct,
    Wrong,
}

/// Score produced by [`MatchBoard::check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    pub correct: usize,
    pub wrong: usize,
    pub unmatched: usize,
}

/// Click-to-pair matching board.
#[derive(Debug, Clone)]
pub struct MatchBoard {
    pairs: Vec<MatchPair>,
    /// Definition display order: indices into `pairs`, shuffled.
    definition_order: Vec<usize>,
    /// `chosen[t]` is the pairs-index of the definition picked for
    /// term `t`.
    chosen: Vec<Option<usize>>,
    active: Option<usize>,
    score: Option<MatchScore>,
}

impl MatchBoard {
    /// Build a board from authored pairs. Terms must be unique and
    /// at least one pair is required.
    pub fn new(pairs: Vec<MatchPair>) -> Result<Self> {
        if pairs.is_empty() {
            return Err(Error::EmptyBoard);
        }
        let mut seen = HashSet::new();
        for pair in &pairs {
            if !seen.insert(pair.term.as_str()) {
                return Err(Error::DuplicateTerm {
                    term: pair.term.clone(),
                });
            }
        }
        let mut definition_order: Vec<usize> = (0..pairs.len()).collect();
        definition_order.shuffle(&mut rand::rng());
        Ok(Self {
            chosen: vec![None; pairs.len()],
            pairs,
            definition_order,
            active: None,
            score: None,
        })
    }

    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }

    /// Term text at position `index`.
    pub fn term(&self, index: usize) -> Option<&str> {
        self.pairs.get(index).map(|p| p.term.as_str())
    }

    /// Definition text at display position `slot`.
    pub fn definition(&self, slot: usize) -> Option<&str> {
        self.definition_order
            .get(slot)
            .map(|&i| self.pairs[i].definition.as_str())
    }

    /// Currently active (selected, unpaired) term, if any.
    pub fn active_term(&self) -> Option<usize> {
        self.active
    }

    /// Select a term, replacing any previous active selection.
    /// Paired terms and checked boards ignore the click.
    pub fn select_term(&mut self, index: usize) {
        if self.score.is_some() || index >= self.pairs.len() {
            return;
        }
        if self.chosen[index].is_some() {
            return;
        }
        self.active = Some(index);
    }

    /// Select a definition by display position, pairing it with the
    /// active term. Without an active term, or on an already-paired
    /// definition, the click is ignored.
    pub fn select_definition(&mut self, slot: usize) {
        if self.score.is_some() {
            return;
        }
        let Some(term) = self.active else {
            return;
        };
        let Some(&definition) = self.definition_order.get(slot) else {
            return;
        };
        if self.chosen.iter().any(|c| *c == Some(definition)) {
            return;
        }
        self.chosen[term] = Some(definition);
        self.active = None;
    }

    /// Whether checking is currently offered: at least one pair
    /// recorded and no previous check.
    pub fn can_check(&self) -> bool {
        self.score.is_none() && self.chosen.iter().any(Option::is_some)
    }

    /// Grade every recorded pair: correct iff the chosen definition
    /// belongs to the term. A second call returns the same score
    /// without regrading.
    pub fn check(&mut self) -> MatchScore {
        if let Some(score) = self.score {
            return score;
        }
        let mut score = MatchScore {
            correct: 0,
            wrong: 0,
            unmatched: 0,
        };
        for (term, chosen) in self.chosen.iter().enumerate() {
            match chosen {
                None => score.unmatched += 1,
                Some(definition) if *definition == term => score.correct += 1,
                Some(_) => score.wrong += 1,
            }
        }
        self.active = None;
        self.score = Some(score);
        score
    }

    /// Mark for the term card at `index`.
    pub fn term_mark(&self, index: usize) -> CardMark {
        let Some(chosen) = self.chosen.get(index) else {
            return CardMark::Idle;
        };
        if self.score.is_some() {
            return match chosen {
                Some(definition) if *definition == index => CardMark::Correct,
                Some(_) => CardMark::Wrong,
                None => CardMark::Idle,
            };
        }
        if self.active == Some(index) {
            CardMark::Active
        } else if chosen.is_some() {
            CardMark::Paired
        } else {
            CardMark::Idle
        }
    }

    /// Mark for the definition card at display position `slot`.
    pub fn definition_mark(&self, slot: usize) -> CardMark {
        let Some(&definition) = self.definition_order.get(slot) else {
            return CardMark::Idle;
        };
        let picked_by = self
            .chosen
            .iter()
            .position(|c| *c == Some(definition));
        match (picked_by, self.score.is_some()) {
            (None, _) => CardMark::Idle,
            (Some(_), false) => CardMark::Paired,
            (Some(term), true) => {
                if term == definition {
                    CardMark::Correct
                } else {
                    CardMark::Wrong
                }
            }
        }
    }

    /// Return the board to its initial unpaired state with a freshly
    /// shuffled definition order.
    pub fn reset(&mut self) {
        self.chosen = vec![None; self.pairs.len()];
        self.active = None;
        self.score = None;
        self.definition_order.shuffle(&mut rand::rng());
    }
}
