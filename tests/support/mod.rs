//! Test support library
//! Provides small polygon builders and comparisons shared by the integration tests.
#![allow(dead_code)]

use nalgebra::Point2;
use vimlogo::float_types::{Real, TAU};
use vimlogo::vector::Polygon2;

/// Polygon from `[x, y]` pairs.
pub fn polygon(points: &[[Real; 2]]) -> Polygon2 {
    points.iter().map(|&[x, y]| Point2::new(x, y)).collect()
}

/// Axis-aligned square with its top-left corner at `(x, y)`, clockwise on screen.
pub fn square(x: Real, y: Real, side: Real) -> Polygon2 {
    polygon(&[[x, y], [x + side, y], [x + side, y + side], [x, y + side]])
}

/// Regular `n`-gon around the origin, clockwise on screen, first vertex at `phase`.
pub fn regular_polygon(n: usize, radius: Real, phase: Real) -> Polygon2 {
    (0..n)
        .map(|i| {
            let theta = phase + TAU * i as Real / n as Real;
            Point2::new(radius * theta.cos(), radius * theta.sin())
        })
        .collect()
}

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// `true` when `polygon` contains a point within `eps` of `point`.
pub fn has_point(polygon: &[Point2<Real>], point: Point2<Real>, eps: Real) -> bool {
    polygon.iter().any(|p| (p - point).norm() < eps)
}
