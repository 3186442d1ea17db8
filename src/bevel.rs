//! **Bevel geometry: corner cuts, per-edge offsets and facet normals.**
//!
//! Every outline here runs clockwise on a +y-down screen, i.e. it has positive
//! shoelace area. For an edge `a → b` the outward normal is then
//! `unit((b − a).y, −(b − a).x)`.
//!
//! A bevel band is described by an *outline pair*: the inner polygon and an outer
//! polygon whose edge `i` is the inner edge `i` pushed outward by its own
//! distance. Consecutive quads between the two outlines are the facets that get
//! lit individually.

use crate::errors::{LogoError, Result};
use crate::float_types::{FRAC_PI_2, Real, is_close};
use crate::vector::{Polygon2, Segment2, line_intersection, outward_normal, set_norm, signed_angle};
use nalgebra::{Point2, Vector2, Vector3};
use tracing::debug;

/// One vertex of an offset polygon.
///
/// `left_segment` is the offset copy of the edge arriving at this vertex,
/// `right_segment` the offset copy of the edge leaving it, and `intersection`
/// the point where their lines meet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetVertex {
    pub intersection: Point2<Real>,
    pub left_segment: Segment2,
    pub right_segment: Segment2,
}

/// Replace every clockwise right-angle turn with a 45° cut.
///
/// For a vertex `b` between `a` and `c`, the turn is the signed angle from
/// `a − b` to `b − c`. When that is (approximately) +π/2, `b` becomes two points:
/// `b + unit(a − b)·bevel_size` and `b + unit(c − b)·bevel_size`. Other vertices
/// pass through.
pub fn bevel_right_angle_turns(polygon: &[Point2<Real>], bevel_size: Real) -> Result<Polygon2> {
    let n = polygon.len();
    if n < 3 {
        return Err(LogoError::too_few_points("bevel_right_angle_turns", 3, n));
    }

    let mut beveled = Vec::with_capacity(n * 2);
    for i in 0..n {
        let a = polygon[(i + n - 1) % n];
        let b = polygon[i];
        let c = polygon[(i + 1) % n];
        let vec_ba = a - b;
        let vec_cb = b - c;
        if is_close(signed_angle(&vec_ba, &vec_cb), FRAC_PI_2) {
            beveled.push(b + set_norm(&vec_ba, bevel_size)?);
            beveled.push(b - set_norm(&vec_cb, bevel_size)?);
        } else {
            beveled.push(b);
        }
    }
    debug!(before = n, after = beveled.len(), bevel_size, "beveled right-angle turns");
    Ok(beveled)
}

/// Offset every edge by the same distance (positive = outward).
pub fn offset_polygon_uniform(polygon: &[Point2<Real>], distance: Real) -> Result<Vec<OffsetVertex>> {
    offset_polygon_per_edge(polygon, &vec![distance; polygon.len()])
}

/// **Per-edge polygon offsetting.**
///
/// Edge `i` runs from `polygon[i]` to `polygon[i + 1]` (cyclic) and is moved by
/// `distances[i]` along its outward normal:
/// ```text
/// e'ᵢ(t) = eᵢ(t) + dᵢ · n̂ᵢ
/// ```
/// Vertex `i` of the result is the intersection of the lines through `e'ᵢ₋₁` and
/// `e'ᵢ`. Mildly concave corners resolve the same way as convex ones. Collinear
/// neighbours have no intersection and fail with
/// [`LogoError::GeometryConstruction`].
pub fn offset_polygon_per_edge(polygon: &[Point2<Real>], distances: &[Real]) -> Result<Vec<OffsetVertex>> {
    let n = polygon.len();
    if n < 3 {
        return Err(LogoError::too_few_points("offset_polygon_per_edge", 3, n));
    }
    if distances.len() != n {
        return Err(LogoError::degenerate(format!(
            "offset_polygon_per_edge needs one distance per edge: {n} edges, {} distances",
            distances.len()
        )));
    }

    let offset_edges = (0..n)
        .map(|i| {
            let a = polygon[i];
            let b = polygon[(i + 1) % n];
            let shift: Vector2<Real> = outward_normal(&a, &b)? * distances[i];
            Ok([a + shift, b + shift])
        })
        .collect::<Result<Vec<Segment2>>>()?;

    (0..n)
        .map(|i| {
            let left_segment = offset_edges[(i + n - 1) % n];
            let right_segment = offset_edges[i];
            Ok(OffsetVertex {
                intersection: line_intersection(&left_segment, &right_segment)?,
                left_segment,
                right_segment,
            })
        })
        .collect()
}

/// Just the intersection points of an offset.
pub fn offset_points(vertices: &[OffsetVertex]) -> Polygon2 {
    vertices.iter().map(|v| v.intersection).collect()
}

/// One quad per edge: `[inner[i], inner[i+1], outer[i+1], outer[i]]`.
pub fn bevel_quads(inner: &[Point2<Real>], outer: &[Point2<Real>]) -> Result<Vec<Polygon2>> {
    let n = inner.len();
    if n != outer.len() {
        return Err(LogoError::degenerate(format!(
            "outline pair must have equal lengths: inner {n}, outer {}",
            outer.len()
        )));
    }
    if n < 2 {
        return Err(LogoError::too_few_points("bevel_quads", 2, n));
    }
    Ok((0..n)
        .map(|i| {
            let j = (i + 1) % n;
            vec![inner[i], inner[j], outer[j], outer[i]]
        })
        .collect())
}

/// **Surface normal of a planar bevel ramp.**
///
/// `pnt_a` and `pnt_b` are consecutive (clockwise) points on the inner edge of
/// the bevel. With `ab = a − b`, the in-plane direction away from the bevel is
/// `ac = unit(ab.y, −ab.x)`. Lifting `a` to `z = 0` and `a + ac` to `z = slope`
/// gives a second direction in the face plane:
/// ```text
/// N = unit( unit((ac, slope)) × (ab, 0) )
/// ```
/// A positive slope means the bevel falls away from its inner edge, so `N`
/// leans outward from the shape while still facing the viewer.
pub fn surface_normal_of_bevel(pnt_a: &Point2<Real>, pnt_b: &Point2<Real>, slope: Real) -> Result<Vector3<Real>> {
    let vec_ab = pnt_a - pnt_b;
    let vec_ac = set_norm(&Vector2::new(vec_ab.y, -vec_ab.x), 1.0)?;

    let vec_ac3 = Vector3::new(vec_ac.x, vec_ac.y, slope).normalize();
    let vec_ab3 = Vector3::new(vec_ab.x, vec_ab.y, 0.0);
    let normal = vec_ac3.cross(&vec_ab3);
    let len = normal.norm();
    if len <= Real::EPSILON {
        return Err(LogoError::degenerate("bevel edge has no surface normal"));
    }
    Ok(normal / len)
}

/// Intersection of the line through `seg_ab` with the line through `seg_cd`.
///
/// Shape builders use this to pin two neighbouring offset points to a single
/// hand-picked junction. It is never applied automatically.
pub fn intersect_segments(seg_ab: &Segment2, seg_cd: &Segment2) -> Result<Point2<Real>> {
    line_intersection(seg_ab, seg_cd)
}
