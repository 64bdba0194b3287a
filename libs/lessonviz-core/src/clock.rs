//! Controllable animation clock shared by every visualizer.
//!
//! The clock is the single seam where user control input (pause,
//! speed) meets algorithm timing: drivers request nominal delays
//! between steps, and the clock stretches, shrinks, or freezes them
//! as the controls change mid-flight.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Upper bound on one scheduling slice. Pause and speed changes take
/// effect within this latency.
pub const SLICE: Duration = Duration::from_millis(16);

/// Floor applied to speed input so a suspension always makes progress.
const MIN_SPEED: f64 = 0.01;

/// Pause/speed-aware timer.
///
/// Cloning is cheap and every clone controls the same underlying
/// state, so a single instance can be handed to the control surface
/// and injected into every running visualizer.
#[derive(Debug, Clone)]
pub struct AnimationClock {
    shared: Arc<ClockShared>,
}

#[derive(Debug)]
struct ClockShared {
    paused: AtomicBool,
    /// Speed multiplier stored as `f64` bits.
    speed_bits: AtomicU64,
}

impl AnimationClock {
    /// Create a clock running unpaused at 1x.
    pub fn new() -> Self {
        Self {
            shared: Arc::new(ClockShared {
                paused: AtomicBool::new(false),
                speed_bits: AtomicU64::new(1.0f64.to_bits()),
            }),
        }
    }

    /// Whether suspensions are currently frozen.
    pub fn is_paused(&self) -> bool {
        self.shared.paused.load(Ordering::Relaxed)
    }

    /// Freeze or unfreeze all outstanding and future suspensions.
    /// Elapsed progress of in-flight suspensions is preserved.
    pub fn set_paused(&self, paused: bool) {
        self.shared.paused.store(paused, Ordering::Relaxed);
    }

    /// Current speed multiplier.
    pub fn speed(&self) -> f64 {
        f64::from_bits(self.shared.speed_bits.load(Ordering::Relaxed))
    }

    /// Set the speed multiplier, affecting the remaining portion of
    /// every in-flight suspension from this call onward.
    ///
    /// Any positive finite value is accepted as-is; non-positive or
    /// non-finite input is clamped to a small positive floor, never
    /// rejected.
    pub fn set_speed(&self, multiplier: f64) {
        let clamped = if multiplier.is_finite() && multiplier > 0.0 {
            multiplier
        } else {
            MIN_SPEED
        };
        self.shared
            .speed_bits
            .store(clamped.to_bits(), Ordering::Relaxed);
    }

    /// Suspend the caller for `requested` nominal time.
    ///
    /// Wall-clock time spent here is the requested duration divided
    /// by the instantaneous speed, accounted slice by slice; while
    /// the clock is paused no progress accrues. A zero duration
    /// completes on the next scheduling opportunity. Never errors.
    pub async fn suspend(&self, requested: Duration) {
        let slice_ceiling_ms = SLICE.as_secs_f64() * 1000.0;
        let mut remaining_ms = requested.as_secs_f64() * 1000.0;
        loop {
            if self.is_paused() {
                tokio::time::sleep(SLICE).await;
                continue;
            }
            if remaining_ms <= 1e-6 {
                tokio::time::sleep(Duration::ZERO).await;
                return;
            }
            let speed = self.speed();
            let wall_ms = (remaining_ms / speed).min(slice_ceiling_ms);
            tokio::time::sleep(Duration::from_secs_f64(wall_ms / 1000.0)).await;
            remaining_ms -= wall_ms * speed;
        }
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn suspension_scales_with_speed() {
        let clock = AnimationClock::new();
        clock.set_speed(2.0);

        let start = Instant::now();
        clock.suspend(Duration::from_millis(400)).await;
        let elapsed = start.elapsed();

        let off_ideal = elapsed.as_millis() as i64 - 200;
        assert!(off_ideal.abs() <= 16, "elapsed {elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn zero_duration_completes_immediately() {
        let clock = AnimationClock::new();
        let start = Instant::now();
        clock.suspend(Duration::ZERO).await;
        assert!(start.elapsed() <= SLICE);
    }

    #[tokio::test(start_paused = true)]
    async fn pause_freezes_remaining_time() {
        let clock = AnimationClock::new();
        let handle = {
            let clock = clock.clone();
            tokio::spawn(async move {
                let start = Instant::now();
                clock.suspend(Duration::from_millis(100)).await;
                start.elapsed()
            })
        };

        tokio::time::sleep(Duration::from_millis(30)).await;
        clock.set_paused(true);
        tokio::time::sleep(Duration::from_millis(500)).await;
        clock.set_paused(false);

        let elapsed = handle.await.unwrap();
        // 100ms of effective time plus the 500ms frozen window,
        // within a few slices of latency.
        assert!(elapsed >= Duration::from_millis(590), "elapsed {elapsed:?}");
        assert!(elapsed <= Duration::from_millis(660), "elapsed {elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn speed_change_applies_to_remaining_portion() {
        let clock = AnimationClock::new();
        let handle = {
            let clock = clock.clone();
            tokio::spawn(async move {
                let start = Instant::now();
                clock.suspend(Duration::from_millis(400)).await;
                start.elapsed()
            })
        };

        tokio::time::sleep(Duration::from_millis(100)).await;
        clock.set_speed(4.0);

        let elapsed = handle.await.unwrap();
        // ~100ms at 1x plus ~300ms remaining at 4x.
        assert!(elapsed >= Duration::from_millis(160), "elapsed {elapsed:?}");
        assert!(elapsed <= Duration::from_millis(220), "elapsed {elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn nonpositive_speed_is_clamped() {
        let clock = AnimationClock::new();
        clock.set_speed(-3.0);
        assert!(clock.speed() > 0.0);
        clock.set_speed(0.0);
        assert!(clock.speed() > 0.0);
        clock.set_speed(f64::NAN);
        assert!(clock.speed() > 0.0);

        // A suspension still terminates at the clamped floor.
        clock.set_speed(0.0);
        clock.suspend(Duration::from_millis(1)).await;
    }

    #[test]
    fn clones_share_state() {
        let clock = AnimationClock::new();
        let other = clock.clone();
        other.set_paused(true);
        other.set_speed(2.5);
        assert!(clock.is_paused());
        assert_eq!(clock.speed(), 2.5);
    }
}
