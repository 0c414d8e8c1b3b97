//! RotatorConfig - static per-axis configuration

use crate::error::RotatorError;
use crate::primitives::{Angle, Axis, Direction, Transition};

/// Everything a rotator needs to know before it starts
#[derive(Debug, Clone, PartialEq)]
pub struct RotatorConfig {
    pub axis: Axis,
    /// Class marker selecting the target elements
    pub class_name: &'static str,
    /// Angular span of one cycle; the legal range is centered on zero
    pub full_cycle_degrees: f32,
    pub direction: Direction,
    /// Increment per tick
    pub step_degrees: f32,
    /// Timer period and transition duration
    pub speed_millis: u32,
}

impl RotatorConfig {
    pub const Y_AXIS: Self = Self::new(Axis::Y, "rotating-y", 180.0).with_speed(1000);

    pub const X_AXIS: Self = Self::new(Axis::X, "rotating-x", 360.0)
        .with_direction(Direction::Reverse)
        .with_speed(2000);

    /// One-tick-per-cycle config; the step defaults to the full cycle
    pub const fn new(axis: Axis, class_name: &'static str, full_cycle_degrees: f32) -> Self {
        Self {
            axis,
            class_name,
            full_cycle_degrees,
            direction: Direction::Forward,
            step_degrees: full_cycle_degrees,
            speed_millis: 1000,
        }
    }

    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    #[cfg(test)]
    pub const fn with_step(mut self, step_degrees: f32) -> Self {
        self.step_degrees = step_degrees;
        self
    }

    pub const fn with_speed(mut self, speed_millis: u32) -> Self {
        self.speed_millis = speed_millis;
        self
    }

    pub fn start_angle(&self) -> Angle {
        Angle::new(-self.full_cycle_degrees / 2.0)
    }

    pub fn end_angle(&self) -> Angle {
        Angle::new(self.full_cycle_degrees / 2.0)
    }

    /// Signed increment applied on every tick
    pub fn signed_step(&self) -> f32 {
        self.direction.sign() * self.step_degrees
    }

    pub fn transition(&self) -> Transition {
        Transition::new(self.class_name, self.speed_millis)
    }

    /// Rejects configs that would leave the wrap loop unbounded or the
    /// rotator without a timer period.
    pub fn validate(&self) -> Result<(), RotatorError> {
        let reason = if self.class_name.is_empty() {
            Some("class name must not be empty")
        } else if !self.full_cycle_degrees.is_finite() || self.full_cycle_degrees <= 0.0 {
            Some("full cycle must be a positive number of degrees")
        } else if !self.step_degrees.is_finite() || self.step_degrees <= 0.0 {
            Some("step must be a positive number of degrees")
        } else if self.step_degrees > self.full_cycle_degrees {
            Some("step must not exceed the full cycle")
        } else if self.speed_millis == 0 {
            Some("speed must be at least one millisecond")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(RotatorError::InvalidConfig {
                class_name: self.class_name.to_string(),
                reason,
            }),
            None => Ok(()),
        }
    }
}
