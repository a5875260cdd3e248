//! Checks that the unfolded panels actually fit together.
//!
//! Panels are sampled with point-in-polygon tests halfway into the joint
//! strips: along every joint exactly one of the two mating panels must have
//! material, and every bottom corner cube must belong to exactly one panel.

use laserbox_camtools::tabbed_box::Contour;
use laserbox_camtools::{BoxParameters, LaserBoxMaker};
use laserbox_core::Point;

struct Unfolded {
    panels: Vec<Vec<Point>>,
    ox: f64,
    oy: f64,
    w: f64,
    h: f64,
    d: f64,
    m: f64,
}

const BASE: usize = 0;
const TOP: usize = 1;
const RIGHT: usize = 2;
const BOTTOM: usize = 3;
const LEFT: usize = 4;

impl Unfolded {
    fn new(width: f64, height: f64, depth: f64, material: f64, teeth: f64) -> Self {
        let params = BoxParameters {
            width,
            height,
            depth,
            material,
            tooth_length: teeth,
            lid: false,
        };
        let doc = LaserBoxMaker::new(params)
            .expect("valid parameters")
            .generate()
            .expect("layout succeeds");
        let fp = params.box_footprint();

        Self {
            panels: doc.contours().iter().map(Contour::vertices).collect(),
            ox: fp.origin.x,
            oy: fp.origin.y,
            w: fp.width,
            h: fp.height,
            d: fp.depth,
            m: fp.material,
        }
    }

    fn owns(&self, panel: usize, x: f64, y: f64) -> bool {
        inside(&self.panels[panel], Point::new(x, y))
    }
}

/// Even-odd ray casting
fn inside(polygon: &[Point], p: Point) -> bool {
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (a, b) = (polygon[i], polygon[j]);
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Sample offsets strictly between `from` and `to`, away from whole and half millimeters
fn samples(from: f64, to: f64) -> Vec<f64> {
    (0..)
        .map(|k| from + 0.37 + 0.5 * k as f64)
        .take_while(|s| *s < to)
        .collect()
}

fn check_base_joints(b: &Unfolded) {
    let (ox, oy, w, h, m) = (b.ox, b.oy, b.w, b.h, b.m);

    for x in samples(ox + m, ox + w - m) {
        assert_ne!(
            b.owns(BASE, x, oy + m / 2.0),
            b.owns(TOP, x, oy - 1.5 * m),
            "top joint at x={}",
            x
        );
        assert_ne!(
            b.owns(BASE, x, oy + h - m / 2.0),
            b.owns(BOTTOM, x, oy + h + 1.5 * m),
            "bottom joint at x={}",
            x
        );
    }
    for y in samples(oy + m, oy + h - m) {
        assert_ne!(
            b.owns(BASE, ox + w - m / 2.0, y),
            b.owns(RIGHT, ox + w + 1.5 * m, y),
            "right joint at y={}",
            y
        );
        assert_ne!(
            b.owns(BASE, ox + m / 2.0, y),
            b.owns(LEFT, ox - 1.5 * m, y),
            "left joint at y={}",
            y
        );
    }
}

fn check_wall_joints(b: &Unfolded) {
    let (ox, oy, w, h, d, m) = (b.ox, b.oy, b.w, b.h, b.d, b.m);

    for z in samples(m, d - 0.1) {
        assert_ne!(
            b.owns(TOP, ox + w - m / 2.0, oy - m - z),
            b.owns(RIGHT, ox + w + m + z, oy + m / 2.0),
            "top/right at z={}",
            z
        );
        assert_ne!(
            b.owns(RIGHT, ox + w + m + z, oy + h - m / 2.0),
            b.owns(BOTTOM, ox + w - m / 2.0, oy + h + m + z),
            "right/bottom at z={}",
            z
        );
        assert_ne!(
            b.owns(BOTTOM, ox + m / 2.0, oy + h + m + z),
            b.owns(LEFT, ox - m - z, oy + h - m / 2.0),
            "bottom/left at z={}",
            z
        );
        assert_ne!(
            b.owns(LEFT, ox - m - z, oy + m / 2.0),
            b.owns(TOP, ox + m / 2.0, oy - m - z),
            "left/top at z={}",
            z
        );
    }
}

fn check_corners(b: &Unfolded) {
    let (ox, oy, w, h, m) = (b.ox, b.oy, b.w, b.h, b.m);
    let half = m / 2.0;
    let out = 1.5 * m;

    // Base square, wall ending at the corner, wall starting at it
    let corners = [
        [
            (BASE, ox + w - half, oy + half),
            (TOP, ox + w - half, oy - out),
            (RIGHT, ox + w + out, oy + half),
        ],
        [
            (BASE, ox + w - half, oy + h - half),
            (RIGHT, ox + w + out, oy + h - half),
            (BOTTOM, ox + w - half, oy + h + out),
        ],
        [
            (BASE, ox + half, oy + h - half),
            (BOTTOM, ox + half, oy + h + out),
            (LEFT, ox - out, oy + h - half),
        ],
        [
            (BASE, ox + half, oy + half),
            (LEFT, ox - out, oy + half),
            (TOP, ox + half, oy - out),
        ],
    ];

    for (i, points) in corners.iter().enumerate() {
        let owners = points
            .iter()
            .filter(|&&(panel, x, y)| b.owns(panel, x, y))
            .count();
        assert_eq!(owners, 1, "corner {} has {} owners", i, owners);
    }
}

#[test]
fn test_even_tooth_counts_interlock() {
    // 67 x 102 x 37 outer: 6, 10 and 3 teeth
    let b = Unfolded::new(60.0, 95.0, 33.5, 3.5, 10.0);
    check_base_joints(&b);
    check_wall_joints(&b);
    check_corners(&b);
    // Base owns every corner
    assert!(b.owns(BASE, b.ox + b.m / 2.0, b.oy + b.m / 2.0));
}

#[test]
fn test_odd_tooth_counts_interlock() {
    // 56 x 80 x 33 outer: 5, 7 and 3 teeth
    let b = Unfolded::new(50.0, 74.0, 30.0, 3.0, 10.0);
    check_base_joints(&b);
    check_wall_joints(&b);
    check_corners(&b);
    // Odd edges hand every corner to the wall that ends there
    assert!(!b.owns(BASE, b.ox + b.m / 2.0, b.oy + b.m / 2.0));
    assert!(b.owns(TOP, b.ox + b.w - b.m / 2.0, b.oy - 1.5 * b.m));
}

#[test]
fn test_mixed_parity_interlocks() {
    // 56 x 67 outer: 5 teeth one way, 6 the other
    let b = Unfolded::new(50.0, 61.0, 20.0, 3.0, 10.0);
    check_base_joints(&b);
    check_wall_joints(&b);
    check_corners(&b);
}

#[test]
fn test_short_last_tooth_interlocks() {
    let b = Unfolded::new(95.0, 60.0, 40.0, 3.5, 10.0);
    check_base_joints(&b);
    check_wall_joints(&b);
    check_corners(&b);
}
