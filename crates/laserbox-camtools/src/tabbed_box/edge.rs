//! Toothed edge generation
//!
//! An edge is tiled with alternating teeth and notches of `tooth_length`,
//! separated by perpendicular offsets of one material thickness. The last
//! tooth is shortened whenever a full one would leave a sliver thinner than
//! the material, and whatever is left after the last offset is drawn flush.

use super::types::{EdgeRun, EdgeSpec, Phase, Segment};
use crate::error::{CamToolResult, ParameterError};

/// Most teeth a single edge may be tiled with
pub const MAX_TEETH_PER_EDGE: f64 = 10_000.0;

/// One step of the tiling along an edge
#[derive(Debug, Clone, Copy, PartialEq)]
enum Step {
    /// Run along the edge followed by a perpendicular offset
    Tooth(f64),
    /// Final run with no offset after it
    Flush(f64),
}

/// Walks an edge tooth by tooth, from its uncut start.
///
/// Shared by drawing and counting so that parity predictions use exactly the
/// arithmetic that later draws the edge.
struct ToothStepper {
    remaining: f64,
    tooth: f64,
    material: f64,
    ended: bool,
}

impl ToothStepper {
    fn new(length: f64, material: f64, tooth_length: f64) -> Self {
        Self {
            remaining: length,
            tooth: tooth_length,
            material,
            ended: false,
        }
    }
}

impl Iterator for ToothStepper {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if !self.ended && self.remaining > self.tooth {
            if self.remaining - self.tooth < self.material {
                // Short last tooth; exactly one material thickness stays flush.
                let run = self.remaining - self.material;
                self.remaining = self.material;
                self.ended = true;
                return Some(Step::Tooth(run));
            }
            self.remaining -= self.tooth;
            return Some(Step::Tooth(self.tooth));
        }

        self.ended = true;
        if self.remaining > 0.0 {
            let run = self.remaining;
            self.remaining = 0.0;
            return Some(Step::Flush(run));
        }

        None
    }
}

fn validate(length: f64, material: f64, tooth_length: f64) -> Result<(), ParameterError> {
    if !tooth_length.is_finite() || tooth_length <= 0.0 {
        return Err(ParameterError::invalid(
            "tooth_length",
            format!("must be a positive number, got {}", tooth_length),
        ));
    }
    if !material.is_finite() || material < 0.0 {
        return Err(ParameterError::invalid(
            "material",
            format!("must be a non-negative number, got {}", material),
        ));
    }
    if !length.is_finite() || length < 0.0 {
        return Err(ParameterError::invalid(
            "length",
            format!("must be a non-negative number, got {}", length),
        ));
    }
    // Also keeps `remaining - tooth` distinguishable from `remaining`
    if length / tooth_length > MAX_TEETH_PER_EDGE {
        return Err(ParameterError::Incompatible(format!(
            "a {} mm edge needs more than {} teeth of {} mm",
            length, MAX_TEETH_PER_EDGE, tooth_length
        )));
    }
    Ok(())
}

/// Draw one toothed edge.
///
/// Runs follow `edge.heading`; offsets step towards the panel while the pen
/// is on the tooth level and away from it while on the notch level. Each
/// offset flips the phase, and the returned `end_phase` tells the caller on
/// which level the edge finished.
///
/// A cut edge keeps the tooth boundaries of the uncut edge but starts one
/// material thickness in, so its first tooth is shorter by that much.
pub fn emit(edge: &EdgeSpec) -> CamToolResult<EdgeRun> {
    validate(edge.length, edge.material, edge.tooth_length)?;

    let inward = edge.inward();
    let mut phase = edge.phase;
    let mut skip = if edge.cut { edge.material } else { 0.0 };
    let mut segments = Vec::new();

    for step in ToothStepper::new(edge.length, edge.material, edge.tooth_length) {
        let (run, offset) = match step {
            Step::Tooth(run) => (run, true),
            Step::Flush(run) => (run, false),
        };

        let drawn = (run - skip).max(0.0);
        skip = (skip - run).max(0.0);
        if drawn != 0.0 {
            segments.push(Segment::along(edge.heading, drawn));
        }

        if offset {
            let towards = match phase {
                Phase::ToothLeads => inward,
                Phase::NotchLeads => inward.opposite(),
            };
            segments.push(Segment::along(towards, edge.material));
            phase = phase.flipped();
        }
    }

    Ok(EdgeRun {
        segments,
        end_phase: phase,
    })
}

/// Number of perpendicular offsets `emit` produces for an edge, cut or not
pub fn tooth_count(length: f64, material: f64, tooth_length: f64) -> CamToolResult<usize> {
    validate(length, material, tooth_length)?;

    Ok(ToothStepper::new(length, material, tooth_length)
        .filter(|step| matches!(step, Step::Tooth(_)))
        .count())
}

/// Phase an edge ends in when it starts in `phase`
pub fn end_phase(phase: Phase, teeth: usize) -> Phase {
    if teeth % 2 == 0 {
        phase
    } else {
        phase.flipped()
    }
}
