//! Pause/speed control surface.
//!
//! Mirrors the two affordances a page exposes for a running
//! animation: a two-state pause toggle and a quarter-step speed
//! input. Locking the surface makes both inert for the duration of a
//! run without touching the clock's own state, so a paused clock
//! stays paused through a lock/unlock cycle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::clock::AnimationClock;

/// Lowest speed the input accepts.
pub const MIN_SPEED: f64 = 0.25;
/// Highest speed the input accepts.
pub const MAX_SPEED: f64 = 4.0;
/// Input granularity.
pub const SPEED_STEP: f64 = 0.25;
/// Initial multiplier.
pub const DEFAULT_SPEED: f64 = 1.0;

/// Control affordances bound to one [`AnimationClock`].
///
/// Clones share the same lock flag and clock.
#[derive(Debug, Clone)]
pub struct ControlSurface {
    clock: AnimationClock,
    locked: Arc<AtomicBool>,
}

impl ControlSurface {
    pub fn new(clock: AnimationClock) -> Self {
        Self {
            clock,
            locked: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The clock this surface controls.
    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Flip the clock's paused flag. No-op while locked.
    pub fn toggle_pause(&self) {
        if self.is_locked() {
            return;
        }
        self.clock.set_paused(!self.clock.is_paused());
    }

    /// Label for the pause toggle.
    pub fn pause_label(&self) -> &'static str {
        if self.clock.is_paused() {
            "Resume"
        } else {
            "Pause"
        }
    }

    /// Forward a user-chosen multiplier to the clock, snapped to
    /// quarter steps and clamped to `[0.25, 4]`. No-op while locked
    /// or for non-finite input.
    pub fn set_speed_from_input(&self, value: f64) {
        if self.is_locked() || !value.is_finite() {
            return;
        }
        let snapped = (value / SPEED_STEP).round() * SPEED_STEP;
        self.clock.set_speed(snapped.clamp(MIN_SPEED, MAX_SPEED));
    }

    /// Live label for the speed input, e.g. `1×` or `0.25×`.
    pub fn speed_label(&self) -> String {
        format!("{}×", self.clock.speed())
    }

    /// Engage or release the lock. Interactions are inert while
    /// locked; the clock's own state is untouched.
    pub fn lock(&self, flag: bool) {
        self.locked.store(flag, Ordering::Relaxed);
    }

    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn surface() -> ControlSurface {
        ControlSurface::new(AnimationClock::new())
    }

    #[test]
    fn toggle_flips_pause_and_label() {
        let surface = surface();
        assert_eq!(surface.pause_label(), "Pause");
        surface.toggle_pause();
        assert!(surface.clock().is_paused());
        assert_eq!(surface.pause_label(), "Resume");
        surface.toggle_pause();
        assert!(!surface.clock().is_paused());
    }

    #[test]
    fn speed_input_snaps_and_clamps() {
        let surface = surface();
        surface.set_speed_from_input(0.3);
        assert_eq!(surface.clock().speed(), 0.25);
        surface.set_speed_from_input(9.0);
        assert_eq!(surface.clock().speed(), 4.0);
        surface.set_speed_from_input(0.0);
        assert_eq!(surface.clock().speed(), 0.25);
        surface.set_speed_from_input(1.5);
        assert_eq!(surface.clock().speed(), 1.5);
    }

    #[test]
    fn speed_label_matches_range_input() {
        let surface = surface();
        assert_eq!(surface.speed_label(), "1×");
        surface.set_speed_from_input(0.25);
        assert_eq!(surface.speed_label(), "0.25×");
        surface.set_speed_from_input(1.5);
        assert_eq!(surface.speed_label(), "1.5×");
    }

    #[test]
    fn locked_surface_is_inert_but_clock_keeps_state() {
        let surface = surface();
        surface.toggle_pause();
        surface.lock(true);

        surface.toggle_pause();
        surface.set_speed_from_input(2.0);

        // Interactions ignored, prior state intact.
        assert!(surface.clock().is_paused());
        assert_eq!(surface.clock().speed(), 1.0);

        surface.lock(false);
        surface.toggle_pause();
        assert!(!surface.clock().is_paused());
    }

    #[test]
    fn clones_share_lock_flag() {
        let surface = surface();
        let other = surface.clone();
        surface.lock(true);
        assert!(other.is_locked());
    }
}
