//! Cycle - the angle state behind a rotator
//!
//! Advancing adds the signed step. When that leaves `[start, end]` the angle
//! snaps to the opposite boundary and is advanced again. Since validated
//! configs have `step <= full cycle`, one snap always lands the re-advanced
//! angle back in range: the loop runs at most twice.

use super::config::RotatorConfig;
use crate::primitives::Angle;

/// Outcome of one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Advance {
    /// Boundary the angle snapped to before re-advancing, if it wrapped
    pub reset: Option<Angle>,
    /// Angle to animate to
    pub angle: Angle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cycle {
    start: Angle,
    end: Angle,
    step: f32,
    current: Angle,
}

impl Cycle {
    pub fn new(config: &RotatorConfig) -> Self {
        let start = config.start_angle();
        Self {
            start,
            end: config.end_angle(),
            step: config.signed_step(),
            current: start,
        }
    }

    pub const fn current(&self) -> Angle {
        self.current
    }

    pub const fn start(&self) -> Angle {
        self.start
    }

    pub fn contains(&self, angle: Angle) -> bool {
        angle >= self.start && angle <= self.end
    }

    pub fn reset(&mut self) {
        self.current = self.start;
    }

    pub fn advance(&mut self) -> Advance {
        let mut reset = None;
        let mut next = self.current + self.step;
        while !self.contains(next) {
            debug_assert!(reset.is_none(), "step larger than the full cycle");
            let boundary = if next > self.end { self.start } else { self.end };
            reset = Some(boundary);
            next = boundary + self.step;
        }
        self.current = next;
        Advance { reset, angle: next }
    }
}
