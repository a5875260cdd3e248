//! Drawing document
//!
//! Collects finished contours and the footprints they were laid out in, and
//! writes them as a single SVG drawing.

use super::path::Contour;
use super::types::{Assembly, Footprint};
use laserbox_core::Millimeters;
use std::fmt;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Red hairline, no fill: a laser cut line
pub const STYLE: &str = "opacity:1;fill:none;fill-opacity:1;stroke:#ff0000;stroke-width:0.282;stroke-linecap:butt;stroke-miterlimit:10;stroke-dasharray:none;stroke-opacity:1";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    contours: Vec<Contour>,
    footprints: Vec<Footprint>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, contour: Contour) {
        self.contours.push(contour);
    }

    /// Register the area one panel set occupies
    pub fn add_footprint(&mut self, footprint: Footprint) {
        self.footprints.push(footprint);
    }

    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    pub fn footprints(&self) -> &[Footprint] {
        &self.footprints
    }

    pub fn len(&self) -> usize {
        self.contours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// Canvas size in whole millimeters.
    ///
    /// Panel sets are stacked vertically. The box gets its span plus one
    /// millimeter; a lid below it gets its span plus another two material
    /// thicknesses of spacing.
    pub fn compute_extent(&self) -> (Millimeters, Millimeters) {
        let mut width = 0u32;
        let mut height = 0u32;

        for fp in &self.footprints {
            width = width.max(whole_mm(fp.span_width()).saturating_add(1));
            height = height.saturating_add(match fp.assembly {
                Assembly::Box => whole_mm(fp.span_height()).saturating_add(1),
                Assembly::Lid => whole_mm(fp.span_height() + 2.0 * fp.material),
            });
        }

        (Millimeters(width), Millimeters(height))
    }

    pub fn to_svg(&self) -> String {
        self.to_string()
    }
}

/// Floor to whole millimeters; out-of-range spans clamp to the `u32` range
fn whole_mm(span: f64) -> u32 {
    span.floor() as u32
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.compute_extent();
        write!(
            f,
            "<svg xmlns=\"{}\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\" version=\"1.1\">",
            SVG_NAMESPACE,
            width,
            height,
            width.value(),
            height.value()
        )?;

        for contour in &self.contours {
            write!(
                f,
                "\n\t<path d=\"{}\" style=\"{}\"></path>",
                contour, STYLE
            )?;
        }
        if !self.contours.is_empty() {
            writeln!(f)?;
        }

        write!(f, "</svg>")
    }
}
