use std::time::Duration;

use crate::dynamics::World;

/// Runs whole ticks out of measured wall-clock time.
///
/// The plain cadence is one `World::tick` per frame, which makes simulation
/// speed follow the frame rate. This keeps the tick rate fixed instead.
#[derive(Copy, Clone, Debug)]
pub struct FixedStepper {
    pub step: Duration,
    /// Lag beyond this (or beyond one `step`, if larger) is dropped rather than caught up.
    pub max_lag: Duration,
    lag: Duration,
}

impl Default for FixedStepper {
    fn default() -> Self {
        Self::new(Duration::from_micros(16_667), Duration::from_secs(1))
    }
}

impl FixedStepper {
    pub fn new(step: Duration, max_lag: Duration) -> Self {
        Self {
            step,
            max_lag,
            lag: Duration::ZERO,
        }
    }

    /// Time carried over to the next call.
    #[inline]
    pub fn lag(&self) -> Duration {
        self.lag
    }

    /// Returns how many ticks were run.
    pub fn advance(&mut self, world: &mut World, elapsed: Duration) -> usize {
        if self.step.is_zero() {
            return 0;
        }

        self.lag += elapsed;
        // Always keep at least one step so a small `max_lag` cannot stall the world.
        let kept = self.max_lag.max(self.step);
        if self.lag > kept {
            log::warn!(
                "simulation far behind, dropping {}ms",
                (self.lag - kept).as_millis()
            );
            self.lag = kept;
        }

        let mut ticks = 0;
        while self.lag >= self.step {
            world.tick();
            self.lag -= self.step;
            ticks += 1;
        }
        ticks
    }
}
