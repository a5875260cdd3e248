//! Property-based tests for the box generator.
//!
//! Run with: cargo test -p laserbox-camtools -- proptest

use laserbox_camtools::tabbed_box::{emit, tooth_count, EdgeSpec, Phase};
use laserbox_camtools::tabbed_box::MAX_DIMENSION;
use laserbox_camtools::{generate, BoxParameters, CamToolError, LaserBoxMaker};
use laserbox_core::{Axis, Heading, Winding};
use proptest::prelude::*;

/// Inner dimensions, material and a tooth length no shorter than the material
fn arb_box() -> impl Strategy<Value = BoxParameters> {
    (
        0.0..250.0f64,
        0.0..250.0f64,
        0.0..120.0f64,
        0.5..8.0f64,
        0.0..30.0f64,
        any::<bool>(),
    )
        .prop_map(|(width, height, depth, material, extra, lid)| BoxParameters {
            width,
            height,
            depth,
            material,
            tooth_length: material + extra,
            lid,
        })
}

fn arb_heading() -> impl Strategy<Value = Heading> {
    prop_oneof![
        Just(Heading::Right),
        Just(Heading::Down),
        Just(Heading::Left),
        Just(Heading::Up),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn proptest_every_contour_closes(params in arb_box()) {
        let doc = LaserBoxMaker::new(params).unwrap().generate().unwrap();
        prop_assert_eq!(doc.len(), if params.lid { 10 } else { 5 });

        for contour in doc.contours() {
            let (dx, dy) = contour.displacement();
            prop_assert!(dx.abs() < 1e-6, "horizontal residual {}", dx);
            prop_assert!(dy.abs() < 1e-6, "vertical residual {}", dy);
        }
    }

    #[test]
    fn proptest_sign_is_ignored(params in arb_box()) {
        let positive = generate(
            params.width,
            params.height,
            params.depth,
            params.material,
            params.tooth_length,
            params.lid,
        );
        let negative = generate(
            -params.width,
            -params.height,
            -params.depth,
            -params.material,
            -params.tooth_length,
            params.lid,
        );
        prop_assert_eq!(positive, negative);
    }

    #[test]
    fn proptest_edge_covers_its_length(
        heading in arb_heading(),
        length in 0.0..300.0f64,
        material in 0.5..8.0f64,
        extra in 0.0..30.0f64,
        cut in any::<bool>(),
    ) {
        let tooth = material + extra;
        let edge = EdgeSpec::new(heading, Winding::Clockwise, length, material, tooth).with_cut(cut);
        let run = emit(&edge).unwrap();

        let along: f64 = run
            .segments
            .iter()
            .filter(|s| s.axis == heading.axis())
            .map(|s| s.length * heading.sign())
            .sum();
        let expected = if cut { (length - material).max(0.0) } else { length };
        prop_assert!((along - expected).abs() < 1e-6, "drew {} of {}", along, expected);

        let offsets = run.segments.iter().filter(|s| s.axis != heading.axis()).count();
        prop_assert_eq!(offsets, tooth_count(length, material, tooth).unwrap());
        prop_assert_eq!(
            run.end_phase == Phase::NotchLeads,
            offsets % 2 == 1
        );

        // Offsets alternate in and out, so the edge never drifts sideways
        let sideways: f64 = run
            .segments
            .iter()
            .filter(|s| s.axis != heading.axis())
            .map(|s| s.length)
            .sum();
        prop_assert!(sideways.abs() <= material + 1e-9);
    }

    #[test]
    fn proptest_cut_keeps_end_phase(
        length in 0.0..300.0f64,
        material in 0.5..8.0f64,
        extra in 0.0..30.0f64,
    ) {
        let edge = EdgeSpec::new(Heading::Right, Winding::Clockwise, length, material, material + extra);
        let uncut = emit(&edge).unwrap();
        let cut = emit(&edge.with_cut(true)).unwrap();
        prop_assert_eq!(uncut.end_phase, cut.end_phase);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn proptest_large_boxes_draw_or_refuse(
        width in 0.0..2.0 * MAX_DIMENSION,
        depth in 0.0..2.0 * MAX_DIMENSION,
        material in 0.5..8.0f64,
        tooth_length in 8.0..1000.0f64,
    ) {
        match generate(width, 50.0, depth, material, tooth_length, false) {
            Ok(svg) => prop_assert!(svg.ends_with("</svg>")),
            Err(err) => prop_assert!(matches!(err, CamToolError::Parameter(_)), "{}", err),
        }
    }
}

#[test]
fn test_axis_of_offsets() {
    let edge = EdgeSpec::new(Heading::Left, Winding::CounterClockwise, 40.0, 3.0, 10.0);
    let run = emit(&edge).unwrap();
    assert!(run.segments.iter().any(|s| s.axis == Axis::Vertical));
}
