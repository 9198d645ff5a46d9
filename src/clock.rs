/// Fixed-step accumulator scheduler.
///
/// Elapsed real time is fed in every external frame; once the accumulator
/// reaches the step interval, exactly one step is due and the accumulator
/// resets to zero. Surplus time beyond the threshold is discarded rather than
/// carried over, so the step rate can never exceed the driving frame rate no
/// matter how high the configured speed is.
#[derive(Clone, Debug)]
pub struct StepClock {
    interval: f64,
    accumulator: f64,
}

impl StepClock {
    /// Make a clock stepping at `speed` steps per second.
    ///
    /// `speed` comes from a validated `Config`, so it is positive and finite.
    pub fn new(speed: f64) -> Self {
        Self {
            interval: 1.0 / speed,
            accumulator: 0.0,
        }
    }

    /// Feed in elapsed seconds; true when a step is due.
    pub fn tick(&mut self, delta: f64) -> bool {
        self.accumulator += delta;
        if self.accumulator < self.interval {
            false
        } else {
            self.accumulator = 0.0;
            true
        }
    }

    /// Change the step rate, keeping time accumulated so far.
    pub fn set_speed(&mut self, speed: f64) {
        self.interval = 1.0 / speed;
    }

    /// Discard any accumulated time.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
