//! Shared types for the step-driven visualizers.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Number of digit buckets in one LSD radix pass.
pub const BUCKET_COUNT: usize = 10;

/// One discrete, observable mutation (or comparison) a driver
/// performs during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Step {
    /// `buffer[i]` was compared with `buffer[j]`.
    Compare { i: usize, j: usize },
    /// `buffer[i]` and `buffer[j]` were exchanged.
    Swap { i: usize, j: usize },
    /// The element at `index` was appended to digit bucket `digit`.
    ScatterToBucket { index: usize, digit: usize },
    /// Buckets 0..9 were concatenated back into the buffer.
    GatherFromBuckets,
}

/// A step plus the nominal delay to suspend for before the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepEvent {
    pub step: Step,
    pub delay: Duration,
}

/// Render snapshot handed to a renderer after each step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Current buffer contents.
    pub values: Vec<u32>,
    /// Digit buckets, present only for bucket-based algorithms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buckets: Option<Vec<Vec<u32>>>,
    /// Indices to highlight; empty once the buffer has settled.
    pub highlights: Vec<usize>,
}

impl Frame {
    /// Frame with no buckets and no highlight.
    pub fn plain(values: Vec<u32>) -> Self {
        Self {
            values,
            buckets: None,
            highlights: Vec::new(),
        }
    }
}

/// Bubble-sort visualizer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BubbleConfig {
    /// Number of bars; values are a permutation of `1..=bar_count`.
    pub bar_count: usize,
    /// Delay after each compare and each swap, in milliseconds.
    pub step_delay_ms: u64,
}

impl Default for BubbleConfig {
    fn default() -> Self {
        Self {
            bar_count: 40,
            step_delay_ms: 30,
        }
    }
}

impl BubbleConfig {
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }
}

/// Radix-sort visualizer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadixConfig {
    /// Number of elements.
    pub size: usize,
    /// Inclusive upper bound on generated values.
    pub max_value: u32,
    /// Delay after each scatter step, in milliseconds.
    pub scan_delay_ms: u64,
    /// Pass-boundary delay after each gather, in milliseconds.
    pub pass_delay_ms: u64,
}

impl Default for RadixConfig {
    fn default() -> Self {
        Self {
            size: 20,
            max_value: 999,
            scan_delay_ms: 140,
            pass_delay_ms: 500,
        }
    }
}

impl RadixConfig {
    pub fn scan_delay(&self) -> Duration {
        Duration::from_millis(self.scan_delay_ms)
    }

    pub fn pass_delay(&self) -> Duration {
        Duration::from_millis(self.pass_delay_ms)
    }
}
