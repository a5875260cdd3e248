//! Panel layout for one box (or one lid)
//!
//! The base is traced clockwise with every edge starting on its tooth level.
//! The four walls are unfolded around it, one material thickness away, each
//! in its own local frame: `u` runs along the joint with the base and `z`
//! points away from the base. Walls are traced counter-clockwise in screen
//! space, so in local terms they all look the same.

use super::edge::{emit, end_phase, tooth_count};
use super::path::{Contour, PathBuilder};
use super::types::{EdgeSpec, Footprint, Panel, PanelRole, Phase};
use crate::error::{CamToolError, CamToolResult};
use laserbox_core::{Heading, Point, Winding};
use tracing::debug;

/// Local frame of a wall panel
#[derive(Debug, Clone, Copy)]
struct Frame {
    origin: Point,
    u: Heading,
    z: Heading,
}

impl Frame {
    fn for_panel(panel: &Panel) -> CamToolResult<Self> {
        let (u, z) = match panel.role {
            PanelRole::Top => (Heading::Right, Heading::Up),
            PanelRole::Right => (Heading::Down, Heading::Right),
            PanelRole::Bottom => (Heading::Left, Heading::Down),
            PanelRole::Left => (Heading::Up, Heading::Left),
            PanelRole::Base => {
                return Err(CamToolError::GeometryError(
                    "the base panel has no wall frame".to_string(),
                ))
            }
        };
        Ok(Self {
            origin: panel.origin,
            u,
            z,
        })
    }

    fn point(&self, u: f64, z: f64) -> Point {
        self.origin.step(self.u, u).step(self.z, z)
    }
}

pub struct PanelLayouter {
    footprint: Footprint,
    tooth_length: f64,
}

impl PanelLayouter {
    pub fn new(footprint: Footprint, tooth_length: f64) -> Self {
        Self {
            footprint,
            tooth_length,
        }
    }

    /// Base followed by the four walls, in drawing order
    pub fn panels(&self) -> Vec<Panel> {
        let fp = &self.footprint;
        let (ox, oy) = (fp.origin.x, fp.origin.y);
        let (w, h, m) = (fp.width, fp.height, fp.material);

        let panel = |role: PanelRole, origin: Point, width: f64, height: f64| Panel {
            assembly: fp.assembly,
            role,
            origin,
            width,
            height,
            depth: fp.depth,
            material: m,
            tooth_length: self.tooth_length,
        };

        let mut panels = vec![panel(PanelRole::Base, fp.origin, w, h)];
        for role in PanelRole::WALLS {
            let (origin, length) = match role {
                PanelRole::Top => (Point::new(ox, oy - m), w),
                PanelRole::Right => (Point::new(ox + w + m, oy), h),
                PanelRole::Bottom => (Point::new(ox + w, oy + h + m), w),
                _ => (Point::new(ox - m, oy + h), h),
            };
            panels.push(panel(role, origin, length, fp.depth));
        }
        panels
    }

    /// Closed outlines of all five panels
    pub fn layout(&self) -> CamToolResult<Vec<Contour>> {
        self.panels()
            .iter()
            .map(|panel| -> CamToolResult<Contour> {
                let contour = match panel.role {
                    PanelRole::Base => self.base(panel)?,
                    _ => self.wall(panel)?,
                };
                debug!(
                    "Laid out {} {} panel: {:.3} x {:.3} at ({:.3}, {:.3}), {} moves",
                    panel.assembly,
                    panel.role,
                    panel.width,
                    panel.height,
                    panel.origin.x,
                    panel.origin.y,
                    contour.segments.len()
                );
                Ok(contour)
            })
            .collect()
    }

    fn base_edges(&self, panel: &Panel) -> [EdgeSpec; 4] {
        let edge = |heading: Heading, length: f64| {
            EdgeSpec::new(
                heading,
                Winding::Clockwise,
                length,
                panel.material,
                panel.tooth_length,
            )
        };
        [
            edge(Heading::Right, panel.width),
            edge(Heading::Down, panel.height),
            edge(Heading::Left, panel.width),
            edge(Heading::Up, panel.height),
        ]
    }

    /// Clearance cut for each base edge.
    ///
    /// Every base edge starts on its tooth level, so an edge with an odd
    /// number of teeth ends on its notch level and the next edge has to start
    /// one material thickness in. The first edge follows the fourth.
    fn edge_cuts(&self, edges: &[EdgeSpec; 4]) -> CamToolResult<[bool; 4]> {
        let mut ends_notched = [false; 4];
        for (ends, edge) in ends_notched.iter_mut().zip(edges) {
            let teeth = tooth_count(edge.length, edge.material, edge.tooth_length)?;
            *ends = end_phase(edge.phase, teeth) == Phase::NotchLeads;
        }

        let cuts = [
            ends_notched[3],
            ends_notched[0],
            ends_notched[1],
            ends_notched[2],
        ];
        debug!(
            "{} base edge cuts: {:?}",
            self.footprint.assembly, cuts
        );
        Ok(cuts)
    }

    fn base(&self, panel: &Panel) -> CamToolResult<Contour> {
        let edges = self.base_edges(panel);
        let cuts = self.edge_cuts(&edges)?;

        let start = if cuts[0] {
            panel.origin.step(Heading::Right, panel.material)
        } else {
            panel.origin
        };

        let mut path = PathBuilder::start(start);
        for (edge, cut) in edges.iter().zip(cuts) {
            path.draw_run(&emit(&edge.with_cut(cut))?);
        }

        Ok(path.close())
    }

    /// Wall outline: joint edge, far side, rim, near side back to the start.
    fn wall(&self, panel: &Panel) -> CamToolResult<Contour> {
        let frame = Frame::for_panel(panel)?;
        let m = panel.material;

        let mut path = PathBuilder::start(frame.point(m, m));

        // Same tooth boundaries as the base edge, opposite levels
        let joint = EdgeSpec::new(
            frame.u,
            Winding::CounterClockwise,
            panel.width,
            m,
            panel.tooth_length,
        )
        .with_phase(Phase::NotchLeads)
        .with_cut(true);
        let joint_run = emit(&joint)?;
        path.draw_run(&joint_run);

        let side = EdgeSpec::new(
            frame.z,
            Winding::CounterClockwise,
            panel.height,
            m,
            panel.tooth_length,
        );
        let far = emit(&side.with_cut(joint_run.end_phase == Phase::NotchLeads))?;
        path.draw_run(&far);

        // Near side mirrors the neighbouring wall's far side; it never owns
        // the bottom corner.
        path.open_subpath();
        path.draw_run(&emit(&side.with_cut(true))?);

        Ok(path.close())
    }
}
