//! Type definitions for the finger-jointed box generator

use laserbox_core::{Axis, Heading, Point, Winding};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which level of a toothed edge the pen currently sits on.
///
/// `ToothLeads` means the pen is on the outer (tooth) level, so the next
/// perpendicular offset steps inward. `NotchLeads` means it is on the inner
/// (notch) level and the next offset steps outward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    ToothLeads,
    NotchLeads,
}

impl Phase {
    pub fn flipped(self) -> Self {
        match self {
            Self::ToothLeads => Self::NotchLeads,
            Self::NotchLeads => Self::ToothLeads,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ToothLeads => write!(f, "tooth-leads"),
            Self::NotchLeads => write!(f, "notch-leads"),
        }
    }
}

/// One relative straight move
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub axis: Axis,
    /// Signed length in mm (screen coordinates)
    pub length: f64,
}

impl Segment {
    pub fn new(axis: Axis, length: f64) -> Self {
        Self { axis, length }
    }

    /// Move of `distance` along `heading`
    pub fn along(heading: Heading, distance: f64) -> Self {
        Self::new(heading.axis(), heading.sign() * distance)
    }

    /// Same move travelled backwards
    pub fn reversed(self) -> Self {
        Self::new(self.axis, -self.length)
    }

    /// `(dx, dy)` of this move
    pub fn displacement(self) -> (f64, f64) {
        match self.axis {
            Axis::Horizontal => (self.length, 0.0),
            Axis::Vertical => (0.0, self.length),
        }
    }
}

/// Everything needed to draw one straight toothed edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeSpec {
    /// Direction of travel along the edge
    pub heading: Heading,
    /// Winding of the outline the edge belongs to; decides the inward side
    pub winding: Winding,
    pub length: f64,
    pub material: f64,
    pub tooth_length: f64,
    pub phase: Phase,
    /// Start one material thickness in, leaving room for a perpendicular joint
    pub cut: bool,
}

impl EdgeSpec {
    pub fn new(
        heading: Heading,
        winding: Winding,
        length: f64,
        material: f64,
        tooth_length: f64,
    ) -> Self {
        Self {
            heading,
            winding,
            length,
            material,
            tooth_length,
            phase: Phase::ToothLeads,
            cut: false,
        }
    }

    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phase = phase;
        self
    }

    pub fn with_cut(mut self, cut: bool) -> Self {
        self.cut = cut;
        self
    }

    /// Side of the edge on which the panel lies
    pub fn inward(&self) -> Heading {
        self.heading.turn(self.winding)
    }
}

/// Generated moves for one edge plus the phase the pen ends in
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRun {
    pub segments: Vec<Segment>,
    pub end_phase: Phase,
}

impl EdgeRun {
    /// Number of perpendicular offsets in the run
    pub fn offsets(&self, along: Axis) -> usize {
        self.segments.iter().filter(|s| s.axis != along).count()
    }
}

/// Which set of panels a footprint belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Assembly {
    Box,
    Lid,
}

impl fmt::Display for Assembly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Box => write!(f, "box"),
            Self::Lid => write!(f, "lid"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelRole {
    Base,
    Top,
    Right,
    Bottom,
    Left,
}

impl PanelRole {
    pub const WALLS: [PanelRole; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];
}

impl fmt::Display for PanelRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Base => "base",
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        };
        write!(f, "{}", name)
    }
}

/// Outer dimensions of one box or lid, as laid out on the sheet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub assembly: Assembly,
    /// Top-left corner of the base panel
    pub origin: Point,
    /// Base width including both wall thicknesses
    pub width: f64,
    /// Base height including both wall thicknesses
    pub height: f64,
    /// Wall height including the base thickness
    pub depth: f64,
    pub material: f64,
}

impl Footprint {
    /// Outer dimensions for a box with the given inner dimensions
    pub fn for_box(width: f64, height: f64, depth: f64, material: f64) -> Self {
        let width = width + 2.0 * material;
        let height = height + 2.0 * material;
        let depth = depth + material;
        Self {
            assembly: Assembly::Box,
            origin: Point::new(depth + material, depth + material),
            width,
            height,
            depth,
            material,
        }
    }

    /// Lid that slips over this box, placed below it
    pub fn lid(&self) -> Self {
        let m = self.material;
        let width = self.width + 2.0 * m;
        let height = self.height + 2.0 * m;
        let depth = self.depth + m;
        Self {
            assembly: Assembly::Lid,
            origin: Point::new(depth + m, 3.0 * depth + height),
            width,
            height,
            depth,
            material: m,
        }
    }

    /// Horizontal room the panel set needs, walls folded out
    pub fn span_width(&self) -> f64 {
        self.width + 2.0 * self.depth + 2.0 * self.material
    }

    /// Vertical room the panel set needs, walls folded out
    pub fn span_height(&self) -> f64 {
        self.height + 2.0 * self.depth + 2.0 * self.material
    }
}

/// One flat piece of the box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub assembly: Assembly,
    pub role: PanelRole,
    /// Corner the panel's local frame is anchored at
    pub origin: Point,
    /// Length along the joint with the base (the base's own width for the base)
    pub width: f64,
    /// Wall height, or the base's own height for the base
    pub height: f64,
    pub depth: f64,
    pub material: f64,
    pub tooth_length: f64,
}
