use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::animation::Easing;
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationState {
    Idle,
    Running,
    Finished,
}

/// Entry animation advanced by host frame ticks.
///
/// There is no internal timer: the host calls [`Animation::tick`] from its
/// frame callback with the time elapsed since the previous frame. Stopping
/// the ticks leaves the animation frozen where it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    duration: Duration,
    easing: Easing,
    elapsed: Duration,
    state: AnimationState,
}

impl Animation {
    pub fn new(duration: Duration, easing: Easing) -> ChartResult<Self> {
        if duration.is_zero() {
            return Err(ChartError::InvalidConfig(
                "animation duration must be > 0".to_owned(),
            ));
        }

        Ok(Self {
            duration,
            easing,
            elapsed: Duration::ZERO,
            state: AnimationState::Idle,
        })
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    #[must_use]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == AnimationState::Running
    }

    /// Rewinds to the first frame and starts running.
    pub fn start(&mut self) {
        self.elapsed = Duration::ZERO;
        self.state = AnimationState::Running;
    }

    /// Advances the clock by `delta` and returns the new progress.
    ///
    /// Ticks outside the running state are ignored.
    pub fn tick(&mut self, delta: Duration) -> f64 {
        if self.state == AnimationState::Running {
            self.elapsed = self.elapsed.saturating_add(delta).min(self.duration);
            if self.elapsed >= self.duration {
                self.state = AnimationState::Finished;
            }
            trace!(
                elapsed_ms = self.elapsed.as_millis() as u64,
                finished = self.state == AnimationState::Finished,
                "animation tick"
            );
        }
        self.progress()
    }

    /// Jumps straight to the final frame.
    pub fn cancel(&mut self) {
        self.elapsed = self.duration;
        self.state = AnimationState::Finished;
    }

    /// Elapsed share of the duration, clamped to `[0, 1]`.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Eased progress for the current frame.
    #[must_use]
    pub fn progress(&self) -> f64 {
        match self.state {
            AnimationState::Idle => 0.0,
            AnimationState::Running => self.easing.next(self.fraction()),
            AnimationState::Finished => 1.0,
        }
    }
}

/// Linear interpolation between `start` and `end`.
#[must_use]
pub fn interpolate(start: f64, end: f64, progress: f64) -> f64 {
    start + (end - start) * progress
}
