//! Animated LSD radix sort, base 10.
//!
//! Each pass scatters the buffer into ten digit buckets in array
//! order, then gathers buckets 0..9 back into the buffer. Elements
//! land in a bucket in arrival order and are gathered in that same
//! order; that per-pass stability is what makes least-significant-
//! digit-first sorting correct.

use rand::Rng;

use super::StepVisualizer;
use crate::types::{Frame, RadixConfig, Step, StepEvent, BUCKET_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Scatter,
    Gather,
}

/// LSD radix-sort driver over values in `[0, max_value]`.
#[derive(Debug, Clone)]
pub struct RadixSortVisualizer {
    config: RadixConfig,
    values: Vec<u32>,
    buckets: Vec<Vec<u32>>,
    /// Place value of the current pass: 1, 10, 100, ...
    exponent: u64,
    /// Place value of the final pass, from the digit count of the
    /// largest element.
    last_exponent: u64,
    cursor: usize,
    phase: Phase,
    done: bool,
    highlight: Option<usize>,
}

impl RadixSortVisualizer {
    /// Driver over fresh random values.
    pub fn new(config: RadixConfig) -> Self {
        let mut rng = rand::rng();
        let values = (0..config.size)
            .map(|_| rng.random_range(0..=config.max_value))
            .collect();
        Self::with_values(values, config)
    }

    /// Driver over caller-supplied values.
    pub fn with_values(values: Vec<u32>, config: RadixConfig) -> Self {
        let last_exponent = leading_exponent(values.iter().copied().max().unwrap_or(0));
        let done = values.is_empty();
        Self {
            config,
            values,
            buckets: vec![Vec::new(); BUCKET_COUNT],
            exponent: 1,
            last_exponent,
            cursor: 0,
            phase: Phase::Scatter,
            done,
            highlight: None,
        }
    }

    /// Current buffer contents.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Current bucket contents.
    pub fn buckets(&self) -> &[Vec<u32>] {
        &self.buckets
    }
}

impl StepVisualizer for RadixSortVisualizer {
    fn name(&self) -> &'static str {
        "radix"
    }

    fn next_step(&mut self) -> Option<StepEvent> {
        if self.done {
            return None;
        }
        match self.phase {
            Phase::Scatter => {
                let value = self.values[self.cursor];
                let digit = ((u64::from(value) / self.exponent) % 10) as usize;
                self.buckets[digit].push(value);
                self.highlight = Some(self.cursor);
                let step = Step::ScatterToBucket {
                    index: self.cursor,
                    digit,
                };
                self.cursor += 1;
                if self.cursor == self.values.len() {
                    self.phase = Phase::Gather;
                }
                Some(StepEvent {
                    step,
                    delay: self.config.scan_delay(),
                })
            }
            Phase::Gather => {
                let mut gathered = Vec::with_capacity(self.values.len());
                for bucket in &mut self.buckets {
                    gathered.append(bucket);
                }
                self.values = gathered;
                self.highlight = None;
                self.cursor = 0;
                self.phase = Phase::Scatter;
                if self.exponent >= self.last_exponent {
                    self.done = true;
                } else {
                    self.exponent *= 10;
                }
                Some(StepEvent {
                    step: Step::GatherFromBuckets,
                    delay: self.config.pass_delay(),
                })
            }
        }
    }

    fn frame(&self) -> Frame {
        Frame {
            values: self.values.clone(),
            buckets: Some(self.buckets.clone()),
            highlights: self.highlight.map(|i| vec![i]).unwrap_or_default(),
        }
    }

    fn is_finished(&self) -> bool {
        self.done
    }

    fn reset(&mut self) {
        let mut rng = rand::rng();
        self.values = (0..self.config.size)
            .map(|_| rng.random_range(0..=self.config.max_value))
            .collect();
        self.last_exponent = leading_exponent(self.values.iter().copied().max().unwrap_or(0));
        self.buckets = vec![Vec::new(); BUCKET_COUNT];
        self.exponent = 1;
        self.cursor = 0;
        self.phase = Phase::Scatter;
        self.done = self.values.is_empty();
        self.highlight = None;
    }
}

/// Place value of the leading decimal digit of `max` (1 for 0..=9,
/// 10 for 10..=99, ...).
fn leading_exponent(max: u32) -> u64 {
    let mut exponent = 1u64;
    let mut rest = u64::from(max) / 10;
    while rest > 0 {
        exponent *= 10;
        rest /= 10;
    }
    exponent
}
