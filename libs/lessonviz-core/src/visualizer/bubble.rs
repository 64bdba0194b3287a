//! Animated bubble sort.
//!
//! The driver is an explicit state machine over the classic nested
//! loops: each inner position emits a `Compare`, followed by a `Swap`
//! at the same position when the pair is out of order. The inner
//! bound shrinks by one each outer pass, so the settled tail is never
//! revisited.

use rand::seq::SliceRandom;

use super::StepVisualizer;
use crate::types::{BubbleConfig, Frame, Step, StepEvent};

/// Bubble-sort driver over a permutation of `1..=N`.
#[derive(Debug, Clone)]
pub struct BubbleSortVisualizer {
    config: BubbleConfig,
    values: Vec<u32>,
    i: usize,
    j: usize,
    /// The last compare found disorder; the swap has not been
    /// emitted yet.
    pending_swap: bool,
    done: bool,
    highlight: Option<(usize, usize)>,
}

impl BubbleSortVisualizer {
    /// Driver over a fresh random permutation of `1..=bar_count`.
    pub fn new(config: BubbleConfig) -> Self {
        let mut values: Vec<u32> = (1..=config.bar_count as u32).collect();
        values.shuffle(&mut rand::rng());
        Self::with_values(values, config)
    }

    /// Driver over caller-supplied values.
    pub fn with_values(values: Vec<u32>, config: BubbleConfig) -> Self {
        let mut driver = Self {
            config,
            values,
            i: 0,
            j: 0,
            pending_swap: false,
            done: false,
            highlight: None,
        };
        driver.skip_empty_passes();
        driver
    }

    /// Current buffer contents.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Advance the cursor past exhausted inner ranges.
    fn skip_empty_passes(&mut self) {
        let n = self.values.len();
        while !self.done && self.j >= n.saturating_sub(1 + self.i) {
            self.j = 0;
            self.i += 1;
            if self.i >= n {
                self.done = true;
            }
        }
    }
}

impl StepVisualizer for BubbleSortVisualizer {
    fn name(&self) -> &'static str {
        "bubble"
    }

    fn next_step(&mut self) -> Option<StepEvent> {
        if self.done {
            return None;
        }
        let (a, b) = (self.j, self.j + 1);
        let step = if self.pending_swap {
            self.values.swap(a, b);
            self.pending_swap = false;
            self.highlight = Some((a, b));
            self.j += 1;
            self.skip_empty_passes();
            Step::Swap { i: a, j: b }
        } else {
            self.highlight = Some((a, b));
            if self.values[a] > self.values[b] {
                self.pending_swap = true;
            } else {
                self.j += 1;
                self.skip_empty_passes();
            }
            Step::Compare { i: a, j: b }
        };
        if self.done {
            self.highlight = None;
        }
        Some(StepEvent {
            step,
            delay: self.config.step_delay(),
        })
    }

    fn frame(&self) -> Frame {
        Frame {
            values: self.values.clone(),
            buckets: None,
            highlights: self
                .highlight
                .map(|(a, b)| vec![a, b])
                .unwrap_or_default(),
        }
    }

    fn is_finished(&self) -> bool {
        self.done
    }

    fn reset(&mut self) {
        self.values = (1..=self.config.bar_count as u32).collect();
        self.values.shuffle(&mut rand::rng());
        self.i = 0;
        self.j = 0;
        self.pending_swap = false;
        self.done = false;
        self.highlight = None;
        self.skip_empty_passes();
    }
}
