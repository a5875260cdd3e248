//! Outline assembly
//!
//! A [`PathBuilder`] collects relative moves into runs. The first run is the
//! forward part of the outline; runs opened later are drawn from the start
//! point as well and are retraced backwards when the outline is closed.

use super::types::{EdgeRun, Segment};
use laserbox_core::{format_length, Axis, Point};
use std::fmt;

/// Residual components smaller than this are treated as closed
const CLOSE_TOLERANCE: f64 = 1e-9;

/// A closed outline of axis-aligned moves
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    pub start: Point,
    pub segments: Vec<Segment>,
}

impl Contour {
    /// Sum of all moves; zero for every contour a builder produces
    pub fn displacement(&self) -> (f64, f64) {
        sum(&self.segments)
    }

    /// Absolute corner points, starting and ending at `start`
    pub fn vertices(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity(self.segments.len() + 1);
        let mut cursor = self.start;
        points.push(cursor);
        for seg in &self.segments {
            let (dx, dy) = seg.displacement();
            cursor = Point::new(cursor.x + dx, cursor.y + dy);
            points.push(cursor);
        }
        points
    }

    /// Relative SVG path data (`m x,y h .. v .. z`)
    pub fn path_data(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Contour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "m {},{}",
            format_length(self.start.x),
            format_length(self.start.y)
        )?;
        for seg in &self.segments {
            write!(f, " {} {}", seg.axis.command(), format_length(seg.length))?;
        }
        write!(f, " z")
    }
}

/// Reverse a run: last move first, every length negated
pub fn reversed(segments: &[Segment]) -> Vec<Segment> {
    segments.iter().rev().map(|seg| seg.reversed()).collect()
}

fn sum(segments: &[Segment]) -> (f64, f64) {
    segments.iter().fold((0.0, 0.0), |(x, y), seg| {
        let (dx, dy) = seg.displacement();
        (x + dx, y + dy)
    })
}

#[derive(Debug, Clone)]
pub struct PathBuilder {
    start: Point,
    runs: Vec<Vec<Segment>>,
}

impl PathBuilder {
    pub fn start(point: Point) -> Self {
        Self {
            start: point,
            runs: vec![Vec::new()],
        }
    }

    /// Append a move to the open run; zero-length moves are dropped
    pub fn draw(&mut self, axis: Axis, length: f64) {
        if length == 0.0 {
            return;
        }
        if let Some(run) = self.runs.last_mut() {
            run.push(Segment::new(axis, length));
        }
    }

    pub fn draw_run(&mut self, run: &EdgeRun) {
        for seg in &run.segments {
            self.draw(seg.axis, seg.length);
        }
    }

    /// Continue in a new run drawn from the start point
    pub fn open_subpath(&mut self) {
        self.runs.push(Vec::new());
    }

    /// Finish the outline.
    ///
    /// Emits the forward run, then the straight free edge joining its end to
    /// the end of the last opened run, then every opened run retraced in
    /// reverse creation order.
    pub fn close(self) -> Contour {
        let mut runs = self.runs.into_iter();
        let mut segments = runs.next().unwrap_or_default();
        let deferred: Vec<Vec<Segment>> = runs.collect();

        let (mut x, mut y) = sum(&segments);
        for run in &deferred {
            let (dx, dy) = sum(run);
            x -= dx;
            y -= dy;
        }

        if x.abs() >= CLOSE_TOLERANCE {
            segments.push(Segment::new(Axis::Horizontal, -x));
        }
        if y.abs() >= CLOSE_TOLERANCE {
            segments.push(Segment::new(Axis::Vertical, -y));
        }

        for run in deferred.iter().rev() {
            segments.extend(reversed(run));
        }

        Contour {
            start: self.start,
            segments,
        }
    }
}
