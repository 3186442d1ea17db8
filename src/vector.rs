//! 2D vector helpers and standard-form lines.
//!
//! Points and vectors are plain `nalgebra` types. A polygon is an ordered
//! `Vec<Point2<Real>>`, implicitly closed.

use crate::errors::{LogoError, Result};
use crate::float_types::{Real, tolerance};
use nalgebra::{Point2, Vector2};

/// An implicitly closed polygon (last point connects back to the first).
pub type Polygon2 = Vec<Point2<Real>>;

/// A segment (or a line through two points) in the xy plane.
pub type Segment2 = [Point2<Real>; 2];

/// z component of the cross product of two xy vectors.
#[inline]
pub fn cross2(u: &Vector2<Real>, v: &Vector2<Real>) -> Real {
    u.x * v.y - u.y * v.x
}

/// Rotate `v` by `quarters` quarter turns (counterclockwise in a y-up frame).
pub fn qrotate(v: &Vector2<Real>, quarters: i32) -> Vector2<Real> {
    match quarters.rem_euclid(4) {
        0 => *v,
        1 => Vector2::new(-v.y, v.x),
        2 => Vector2::new(-v.x, -v.y),
        _ => Vector2::new(v.y, -v.x),
    }
}

/// Scale `v` to length `norm`. Zero vectors have no direction and are rejected.
pub fn set_norm(v: &Vector2<Real>, norm: Real) -> Result<Vector2<Real>> {
    let len = v.norm();
    if len <= tolerance() {
        return Err(LogoError::degenerate(format!(
            "cannot set the length of zero vector ({}, {})",
            v.x, v.y
        )));
    }
    Ok(v * (norm / len))
}

/// Signed angle from `u` to `v` in (-π, π].
#[inline]
pub fn signed_angle(u: &Vector2<Real>, v: &Vector2<Real>) -> Real {
    cross2(u, v).atan2(u.dot(v))
}

/// A 2D line in standard form `a·x + b·y + c = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2 {
    pub a: Real,
    pub b: Real,
    pub c: Real,
}

impl Line2 {
    pub const fn new(a: Real, b: Real, c: Real) -> Self {
        Self { a, b, c }
    }

    /// The line through `p` and `q`. Identical points give a degenerate line
    /// (a = b = 0), which fails every intersection.
    pub fn through(p: &Point2<Real>, q: &Point2<Real>) -> Self {
        Self {
            a: p.y - q.y,
            b: q.x - p.x,
            c: p.x * q.y - q.x * p.y,
        }
    }

    pub fn from_segment(seg: &Segment2) -> Self {
        Self::through(&seg[0], &seg[1])
    }

    /// The same line moved by `offset`.
    pub fn translate(&self, offset: &Vector2<Real>) -> Self {
        Self {
            a: self.a,
            b: self.b,
            c: self.c - self.a * offset.x - self.b * offset.y,
        }
    }

    /// The point on this line at `x`, or `None` for vertical lines.
    pub fn point_at_x(&self, x: Real) -> Option<Point2<Real>> {
        if self.b.abs() <= tolerance() {
            return None;
        }
        Some(Point2::new(x, (-self.a * x - self.c) / self.b))
    }

    /// Unsigned distance from `point` to this line.
    pub fn distance_to(&self, point: &Point2<Real>) -> Real {
        (self.a * point.x + self.b * point.y + self.c).abs() / self.a.hypot(self.b)
    }

    /// Intersection with `other`, or `None` when the lines are parallel,
    /// coincident, or degenerate.
    pub fn intersection(&self, other: &Line2) -> Option<Point2<Real>> {
        let det = self.a * other.b - other.a * self.b;
        let scale = self.a.hypot(self.b) * other.a.hypot(other.b);
        if scale <= Real::EPSILON || det.abs() <= tolerance() * scale {
            return None;
        }
        Some(Point2::new(
            (self.b * other.c - other.b * self.c) / det,
            (other.a * self.c - self.a * other.c) / det,
        ))
    }
}

/// Intersection of the line through `seg_ab` with the line through `seg_cd`.
///
/// Parallel or coincident lines cannot be resolved and are reported with both
/// inputs.
pub fn line_intersection(seg_ab: &Segment2, seg_cd: &Segment2) -> Result<Point2<Real>> {
    Line2::from_segment(seg_ab)
        .intersection(&Line2::from_segment(seg_cd))
        .ok_or(LogoError::GeometryConstruction {
            first: *seg_ab,
            second: *seg_cd,
        })
}

/// Unit outward normal of edge `a → b` for a polygon with positive shoelace
/// area (clockwise on a +y-down screen).
pub fn outward_normal(a: &Point2<Real>, b: &Point2<Real>) -> Result<Vector2<Real>> {
    let d = b - a;
    set_norm(&Vector2::new(d.y, -d.x), 1.0)
}

/// Signed distance of `point` beyond edge `a → b`, positive on the outward side.
pub fn outward_distance(a: &Point2<Real>, b: &Point2<Real>, point: &Point2<Real>) -> Result<Real> {
    Ok((point - a).dot(&outward_normal(a, b)?))
}

/// Shoelace area. Positive for polygons that run clockwise on a +y-down screen.
pub fn signed_area(points: &[Point2<Real>]) -> Real {
    let n = points.len();
    (0..n)
        .map(|i| {
            let p = &points[i];
            let q = &points[(i + 1) % n];
            p.x * q.y - q.x * p.y
        })
        .sum::<Real>()
        / 2.0
}

/// `(min, max)` corners of the axis-aligned box around `points`.
pub fn bounds(points: &[Point2<Real>]) -> Result<(Point2<Real>, Point2<Real>)> {
    let first = points
        .first()
        .ok_or_else(|| LogoError::too_few_points("bounds", 1, 0))?;
    Ok(points.iter().skip(1).fold((*first, *first), |(lo, hi), p| {
        (
            Point2::new(lo.x.min(p.x), lo.y.min(p.y)),
            Point2::new(hi.x.max(p.x), hi.y.max(p.y)),
        )
    }))
}

/// `(width, height)` of the axis-aligned box around `points`.
pub fn bounding_dimensions(points: &[Point2<Real>]) -> Result<(Real, Real)> {
    let (lo, hi) = bounds(points)?;
    Ok((hi.x - lo.x, hi.y - lo.y))
}

/// Move every point by `offset`.
pub fn translate(points: &[Point2<Real>], offset: &Vector2<Real>) -> Polygon2 {
    points.iter().map(|p| p + offset).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_turns_cycle() {
        let v = Vector2::new(3.0, 1.0);
        assert_eq!(qrotate(&v, 1), Vector2::new(-1.0, 3.0));
        assert_eq!(qrotate(&v, 3), Vector2::new(1.0, -3.0));
        assert_eq!(qrotate(&v, 4), v);
        assert_eq!(qrotate(&v, -1), qrotate(&v, 3));
    }

    #[test]
    fn translated_line_keeps_direction() {
        let line = Line2::through(&Point2::new(0.0, 0.0), &Point2::new(1.0, 1.0));
        let moved = line.translate(&Vector2::new(0.0, 2.0));
        let p = moved.point_at_x(3.0).unwrap();
        assert!((p.y - 5.0).abs() < 1e-12);
        assert!((moved.distance_to(&Point2::new(0.0, 0.0)) - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn parallel_lines_do_not_meet() {
        let err = line_intersection(
            &[Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)],
            &[Point2::new(0.0, 1.0), Point2::new(5.0, 1.0)],
        )
        .unwrap_err();
        assert!(matches!(err, LogoError::GeometryConstruction { .. }));
    }
}
