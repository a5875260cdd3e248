//! # Laserbox Core
//!
//! Core types and utilities shared by the Laserbox crates.
//! Provides the screen-space geometry primitives the panel engine draws with
//! and the millimeter formatting used when writing drawings.

pub mod geometry;
pub mod units;

pub use geometry::{Axis, Heading, Point, Winding};
pub use units::{format_length, Millimeters, UNIT_LABEL};
