use approx::assert_relative_eq;
use nalgebra::{Point2, Vector3};
use proptest::prelude::*;
use vimlogo::bevel::{
    bevel_quads, bevel_right_angle_turns, offset_points, offset_polygon_per_edge, offset_polygon_uniform,
    surface_normal_of_bevel,
};
use vimlogo::errors::LogoError;
use vimlogo::float_types::{PI, Real};
use vimlogo::vector::{cross2, outward_distance};

mod support;

use crate::support::{approx_eq, polygon, regular_polygon, square};

#[test]
fn diamond_corners_are_cut_along_both_edges() {
    let diamond = polygon(&[[50.0, 0.0], [0.0, 50.0], [-50.0, 0.0], [0.0, -50.0]]);
    let beveled = bevel_right_angle_turns(&diamond, 3.0).unwrap();
    assert_eq!(beveled.len(), 8);

    let n = diamond.len();
    for (i, tip) in diamond.iter().enumerate() {
        let before = beveled[2 * i];
        let after = beveled[2 * i + 1];
        assert!(approx_eq((before - tip).norm(), 3.0, 1e-9));
        assert!(approx_eq((after - tip).norm(), 3.0, 1e-9));
        // each cut point stays on its own edge
        let prev = diamond[(i + n - 1) % n];
        let next = diamond[(i + 1) % n];
        assert!(approx_eq(cross2(&(before - tip), &(prev - tip)), 0.0, 1e-9));
        assert!(approx_eq(cross2(&(after - tip), &(next - tip)), 0.0, 1e-9));
    }
}

#[test]
fn second_bevel_pass_changes_nothing() {
    let once = bevel_right_angle_turns(&square(0.0, 0.0, 10.0), 1.0).unwrap();
    let twice = bevel_right_angle_turns(&once, 1.0).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn left_turns_are_not_beveled() {
    // an L shape: one concave corner
    let l_shape = polygon(&[[0.0, 0.0], [2.0, 0.0], [2.0, 1.0], [1.0, 1.0], [1.0, 2.0], [0.0, 2.0]]);
    let beveled = bevel_right_angle_turns(&l_shape, 0.25).unwrap();
    assert_eq!(beveled.len(), 11);
    assert!(beveled.contains(&Point2::new(1.0, 1.0)));
}

#[test]
fn uniform_offset_of_a_square() {
    let outer = offset_points(&offset_polygon_uniform(&square(0.0, 0.0, 4.0), 1.0).unwrap());
    assert_eq!(outer, square(-1.0, -1.0, 6.0));
    let inner = offset_points(&offset_polygon_uniform(&square(0.0, 0.0, 4.0), -1.0).unwrap());
    assert_eq!(inner, square(1.0, 1.0, 2.0));
}

#[test]
fn per_edge_offset_moves_each_edge_by_its_own_distance() {
    let rect = square(0.0, 0.0, 4.0);
    let distances = [1.0, 2.0, 3.0, 4.0];
    let vertices = offset_polygon_per_edge(&rect, &distances).unwrap();
    assert_eq!(offset_points(&vertices), polygon(&[[-4.0, -1.0], [6.0, -1.0], [6.0, 7.0], [-4.0, 7.0]]));

    // the segments carried by each vertex are the shifted source edges
    assert_eq!(vertices[1].left_segment, [Point2::new(0.0, -1.0), Point2::new(4.0, -1.0)]);
    assert_eq!(vertices[1].right_segment, [Point2::new(6.0, 0.0), Point2::new(6.0, 4.0)]);
}

#[test]
fn offset_input_errors() {
    assert!(matches!(
        offset_polygon_uniform(&polygon(&[[0.0, 0.0], [1.0, 0.0]]), 1.0),
        Err(LogoError::DegenerateInput(_))
    ));
    assert!(matches!(
        offset_polygon_per_edge(&square(0.0, 0.0, 1.0), &[1.0, 1.0]),
        Err(LogoError::DegenerateInput(_))
    ));
    // collinear neighbours have no corner
    let with_midpoint = polygon(&[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]]);
    assert!(matches!(
        offset_polygon_uniform(&with_midpoint, 1.0),
        Err(LogoError::GeometryConstruction { .. })
    ));
}

#[test]
fn quads_pair_inner_and_outer_edges() {
    let inner = square(1.0, 1.0, 2.0);
    let outer = square(0.0, 0.0, 4.0);
    let quads = bevel_quads(&inner, &outer).unwrap();
    assert_eq!(quads.len(), 4);
    assert_eq!(quads[3], vec![inner[3], inner[0], outer[0], outer[3]]);
    assert!(bevel_quads(&inner, &outer[..3]).is_err());
}

#[test]
fn bevel_normal_leans_away_from_the_face() {
    // top edge of a clockwise outline: the bevel is above it
    let normal = surface_normal_of_bevel(&Point2::new(0.0, 0.0), &Point2::new(1.0, 0.0), 1.5).unwrap();
    assert_relative_eq!(normal, Vector3::new(0.0, -1.5, 1.0).normalize(), epsilon = 1e-12);

    let flat = surface_normal_of_bevel(&Point2::new(0.0, 0.0), &Point2::new(0.0, 1.0), 0.0).unwrap();
    assert_relative_eq!(flat, Vector3::z(), epsilon = 1e-12);

    assert!(surface_normal_of_bevel(&Point2::new(1.0, 1.0), &Point2::new(1.0, 1.0), 1.0).is_err());
}

proptest! {
    #[test]
    fn uniform_offset_edges_are_parallel_at_distance(
        sides in 3usize..12,
        radius in 5.0..100.0,
        phase in 0.0..PI,
        fraction in -0.3..1.0,
    ) {
        let source = regular_polygon(sides, radius, phase);
        let distance: Real = fraction * radius;
        let moved = offset_points(&offset_polygon_uniform(&source, distance).unwrap());
        prop_assert_eq!(moved.len(), sides);

        for i in 0..sides {
            let j = (i + 1) % sides;
            let edge = source[j] - source[i];
            let shifted = moved[j] - moved[i];
            prop_assert!(cross2(&edge, &shifted).abs() < 1e-6 * edge.norm() * shifted.norm().max(1.0));
            prop_assert!(approx_eq(outward_distance(&source[i], &source[j], &moved[i]).unwrap(), distance, 1e-6));
            prop_assert!(approx_eq(outward_distance(&source[i], &source[j], &moved[j]).unwrap(), distance, 1e-6));
        }
    }
}
