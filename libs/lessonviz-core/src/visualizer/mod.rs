//! Step-visualizer run protocol.
//!
//! An algorithm driver is a pure step producer over its own buffer;
//! the protocol runs it against an [`AnimationClock`] and a renderer
//! while a [`RunLock`] keeps competing runs out. Suspension points
//! are the only places control returns to the caller, so a driver's
//! mutate-and-render sequence is atomic with respect to user input.

pub mod bubble;
pub mod radix;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clock::AnimationClock;
use crate::controls::ControlSurface;
use crate::error::{Error, Result};
use crate::types::{BubbleConfig, Frame, RadixConfig, StepEvent};

/// Trait implemented by every algorithm driver.
pub trait StepVisualizer {
    /// Driver identifier.
    fn name(&self) -> &'static str;

    /// Apply the next step to the buffer and return it, or `None`
    /// once the buffer has settled.
    fn next_step(&mut self) -> Option<StepEvent>;

    /// Snapshot of the current buffer/bucket state for rendering.
    fn frame(&self) -> Frame;

    /// True once every step has been produced.
    fn is_finished(&self) -> bool;

    /// Reinitialize the buffer with fresh values. Never resumes a
    /// prior run's progress.
    fn reset(&mut self);
}

/// Consumes frames after each step. Must be synchronous and must not
/// feed anything back into algorithm state.
pub trait FrameRenderer {
    fn render(&mut self, frame: &Frame);
}

/// Outcome of a run request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    /// The run executed to completion.
    Completed,
    /// Another run already held the lock; nothing happened.
    Busy,
}

/// Mutual-exclusion flag ensuring a single driver mutates shared
/// visual state at a time, independent of any UI representation.
///
/// Clones share the flag; at most one guard exists at a time.
#[derive(Debug, Clone, Default)]
pub struct RunLock {
    held: Arc<AtomicBool>,
}

impl RunLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the lock, or `None` if a run is already in progress.
    /// Contention is never queued.
    pub fn try_acquire(&self) -> Option<RunGuard> {
        self.held
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| RunGuard {
                held: Arc::clone(&self.held),
            })
    }

    pub fn is_held(&self) -> bool {
        self.held.load(Ordering::Relaxed)
    }
}

/// Releases the [`RunLock`] on drop.
#[derive(Debug)]
pub struct RunGuard {
    held: Arc<AtomicBool>,
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        self.held.store(false, Ordering::Release);
    }
}

/// Run `driver` to completion.
///
/// Lifecycle: acquire the run lock (a held lock makes the whole call
/// an observable no-op returning [`RunOutcome::Busy`]), engage the
/// control-surface lock, then apply, render, and suspend for each
/// step. The terminal step is followed by no suspension; the settled
/// frame is rendered last, after which both locks are released.
/// There is no abort path: a run always runs to completion.
pub async fn run_visualizer<V, R>(
    driver: &mut V,
    clock: &AnimationClock,
    controls: &ControlSurface,
    lock: &RunLock,
    renderer: &mut R,
) -> RunOutcome
where
    V: StepVisualizer + ?Sized,
    R: FrameRenderer + ?Sized,
{
    let Some(_guard) = lock.try_acquire() else {
        return RunOutcome::Busy;
    };
    controls.lock(true);

    while let Some(event) = driver.next_step() {
        renderer.render(&driver.frame());
        if !driver.is_finished() {
            clock.suspend(event.delay).await;
        }
    }
    renderer.render(&driver.frame());

    controls.lock(false);
    RunOutcome::Completed
}

/// Build a visualizer by identifier with its default configuration.
pub fn visualizer_by_name(name: &str) -> Result<Box<dyn StepVisualizer>> {
    match name {
        "bubble" => Ok(Box::new(bubble::BubbleSortVisualizer::new(
            BubbleConfig::default(),
        ))),
        "radix" => Ok(Box::new(radix::RadixSortVisualizer::new(
            RadixConfig::default(),
        ))),
        other => Err(Error::UnknownAlgorithm {
            name: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_admits_one_holder() {
        let lock = RunLock::new();
        let guard = lock.try_acquire();
        assert!(guard.is_some());
        assert!(lock.is_held());
        assert!(lock.try_acquire().is_none());

        drop(guard);
        assert!(!lock.is_held());
        assert!(lock.try_acquire().is_some());
    }

    #[test]
    fn lock_clones_share_the_flag() {
        let lock = RunLock::new();
        let other = lock.clone();
        let _guard = lock.try_acquire().unwrap();
        assert!(other.try_acquire().is_none());
    }

    #[test]
    fn factory_knows_both_drivers() {
        assert_eq!(visualizer_by_name("bubble").unwrap().name(), "bubble");
        assert_eq!(visualizer_by_name("radix").unwrap().name(), "radix");
        assert!(matches!(
            visualizer_by_name("quick"),
            Err(Error::UnknownAlgorithm { .. })
        ));
    }
}
