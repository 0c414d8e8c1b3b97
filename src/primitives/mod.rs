//! Rotation primitives - value types with CSS output
//!
//! Each primitive renders itself with `to_css()` (or a close variant)
//! so the rotator never assembles CSS strings by hand.

pub mod angle;
pub mod transition;

pub use angle::{Angle, Axis, Direction};
pub use transition::Transition;
