//! Clock - repeating, cancellable timers

use gloo_timers::callback::Interval;

pub trait Clock {
    /// Handle keeping a repeating timer alive
    type Timer;

    /// Runs `callback` every `period_millis` until the timer is cancelled
    fn repeat(&self, period_millis: u32, callback: Box<dyn FnMut()>) -> Self::Timer;

    fn cancel(&self, timer: Self::Timer);
}

/// `setInterval` via gloo-timers
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalClock;

impl Clock for IntervalClock {
    type Timer = Interval;

    fn repeat(&self, period_millis: u32, callback: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_millis, callback)
    }

    fn cancel(&self, timer: Interval) {
        // Dropping an Interval clears it
        drop(timer);
    }
}
