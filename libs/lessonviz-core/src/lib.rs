//! Core library for the lesson widget set.
//!
//! Provides:
//! - A controllable animation clock (pause, speed, sliced suspension)
//! - The step-visualizer run protocol with single-run locking
//! - Bubble sort and LSD radix sort animation drivers
//! - Headless state for the matching board and flashcard deck widgets

pub mod clock;
pub mod controls;
pub mod deck;
pub mod error;
pub mod matchboard;
pub mod types;
pub mod visualizer;

pub use clock::AnimationClock;
pub use controls::ControlSurface;
pub use deck::{AnswerToggle, ReviewDeck};
pub use error::{Error, Result};
pub use matchboard::{CardMark, MatchBoard, MatchPair, MatchScore};
pub use types::{BubbleConfig, Frame, RadixConfig, Step, StepEvent};
pub use visualizer::bubble::BubbleSortVisualizer;
pub use visualizer::radix::RadixSortVisualizer;
pub use visualizer::{
    run_visualizer, visualizer_by_name, FrameRenderer, RunLock, RunOutcome, StepVisualizer,
};
