//! Screen-space geometry primitives
//!
//! Drawings use SVG screen coordinates: x grows to the right, y grows down.
//! Every outline the engine produces is built from axis-aligned moves, so the
//! primitives here only know about the two axes and the four headings along
//! them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the drawing, in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Move `distance` along `heading`.
    pub fn step(self, heading: Heading, distance: f64) -> Self {
        let (dx, dy) = heading.unit();
        Self::new(self.x + dx * distance, self.y + dy * distance)
    }
}

/// Drawing axis of a straight move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// SVG relative path command for a move along this axis
    pub fn command(self) -> char {
        match self {
            Self::Horizontal => 'h',
            Self::Vertical => 'v',
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// Rotational sense in which an outline is traced on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

/// Direction of travel along an axis, in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    Right,
    Down,
    Left,
    Up,
}

impl Heading {
    pub fn axis(self) -> Axis {
        match self {
            Self::Right | Self::Left => Axis::Horizontal,
            Self::Down | Self::Up => Axis::Vertical,
        }
    }

    /// +1.0 when travelling towards growing coordinates, -1.0 otherwise
    pub fn sign(self) -> f64 {
        match self {
            Self::Right | Self::Down => 1.0,
            Self::Left | Self::Up => -1.0,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Up => Self::Down,
        }
    }

    /// Quarter turn in the given winding (as seen on screen)
    pub fn turn(self, winding: Winding) -> Self {
        match (winding, self) {
            (Winding::Clockwise, Self::Right) => Self::Down,
            (Winding::Clockwise, Self::Down) => Self::Left,
            (Winding::Clockwise, Self::Left) => Self::Up,
            (Winding::Clockwise, Self::Up) => Self::Right,
            (Winding::CounterClockwise, Self::Right) => Self::Up,
            (Winding::CounterClockwise, Self::Up) => Self::Left,
            (Winding::CounterClockwise, Self::Left) => Self::Down,
            (Winding::CounterClockwise, Self::Down) => Self::Right,
        }
    }

    /// Unit vector `(dx, dy)`
    pub fn unit(self) -> (f64, f64) {
        match self.axis() {
            Axis::Horizontal => (self.sign(), 0.0),
            Axis::Vertical => (0.0, self.sign()),
        }
    }
}
