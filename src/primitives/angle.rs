//! Angle - rotation about a single axis with CSS transform output

use std::fmt;
use std::ops::{Add, Sub};

/// Axis a rotator turns its elements around
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// CSS transform function for this axis
    pub const fn css_function(&self) -> &'static str {
        match self {
            Self::X => "rotateX",
            Self::Y => "rotateY",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::X => "x-axis",
            Self::Y => "y-axis",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// Rotation sense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    pub const fn sign(&self) -> f32 {
        match self {
            Self::Forward => 1.0,
            Self::Reverse => -1.0,
        }
    }
}

/// Angle in degrees. Not normalized: the owning cycle keeps it in range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle(f32);

impl Angle {
    pub const fn new(degrees: f32) -> Self {
        Self(degrees)
    }

    pub const fn degrees(&self) -> f32 {
        self.0
    }

    /// `rotateX(..deg)` / `rotateY(..deg)`
    pub fn to_css(&self, axis: Axis) -> String {
        format!("{}({}deg)", axis.css_function(), self.0)
    }
}

impl Add<f32> for Angle {
    type Output = Self;
    fn add(self, rhs: f32) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl Sub<f32> for Angle {
    type Output = Self;
    fn sub(self, rhs: f32) -> Self::Output {
        Self(self.0 - rhs)
    }
}

impl Sub for Angle {
    type Output = f32;
    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}
