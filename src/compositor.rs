//! Polygon composition on top of `geo`'s boolean operations.
//!
//! Everything that leaves this module is an exterior ring in the crate's
//! winding (positive shoelace area), without a duplicated closing point and
//! without repeated or collinear vertices. Holes are dropped.

use crate::errors::{LogoError, Result};
use crate::float_types::{Real, tolerance};
use crate::vector::{Polygon2, cross2, signed_area};
use geo::algorithm::line_intersection::{LineIntersection, line_intersection};
use geo::{BooleanOps, Coord, Line, LineString, MultiPolygon, Orient, Polygon, orient::Direction};
use geo_buf::buffer_polygon;
use nalgebra::Point2;
use std::collections::BTreeSet;
use tracing::debug;

fn to_geo(points: &[Point2<Real>]) -> Polygon<Real> {
    let coords: Vec<Coord<Real>> = points.iter().map(|p| Coord { x: p.x, y: p.y }).collect();
    Polygon::new(LineString::from(coords), vec![])
}

fn edges(points: &[Point2<Real>]) -> Vec<Line<Real>> {
    let n = points.len();
    (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            Line::new(Coord { x: a.x, y: a.y }, Coord { x: b.x, y: b.y })
        })
        .collect()
}

/// Exterior rings of `mp`, reoriented and cleaned.
fn exterior_rings(mp: MultiPolygon<Real>) -> Vec<Polygon2> {
    mp.orient(Direction::Default)
        .0
        .into_iter()
        .map(|poly| {
            let (exterior, _holes) = poly.into_inner();
            let mut ring: Polygon2 = exterior.0.iter().map(|c| Point2::new(c.x, c.y)).collect();
            if ring.len() > 1 && ring.first() == ring.last() {
                ring.pop();
            }
            remove_collinear(&remove_identical_adjacent(&ring))
        })
        .filter(|ring| ring.len() >= 3)
        .collect()
}

/// Drop points identical to their (cyclic) predecessor.
pub fn remove_identical_adjacent(points: &[Point2<Real>]) -> Polygon2 {
    let mut out: Polygon2 = Vec::with_capacity(points.len());
    for p in points {
        if out.last() != Some(p) {
            out.push(*p);
        }
    }
    while out.len() > 1 && out.first() == out.last() {
        out.pop();
    }
    out
}

fn remove_collinear(points: &[Point2<Real>]) -> Polygon2 {
    let mut ring = points.to_vec();
    let mut i = 0;
    while ring.len() > 3 && i < ring.len() {
        let n = ring.len();
        let a = ring[(i + n - 1) % n];
        let b = ring[i];
        let c = ring[(i + 1) % n];
        let (ab, bc) = (b - a, c - b);
        let scale = ab.norm() * bc.norm();
        if cross2(&ab, &bc).abs() <= tolerance() * scale.max(1.0) && ab.dot(&bc) >= 0.0 {
            ring.remove(i);
            i = i.saturating_sub(1);
        } else {
            i += 1;
        }
    }
    ring
}

/// `true` when no two edges cross or touch, except neighbours meeting at their
/// shared vertex. Overlapping neighbours count as touching.
pub fn is_simple(polygon: &[Point2<Real>]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let lines = edges(polygon);
    for i in 0..n {
        for j in (i + 1)..n {
            let adjacent = j == i + 1 || (i == 0 && j == n - 1);
            match line_intersection(lines[i], lines[j]) {
                None => {},
                Some(LineIntersection::Collinear { .. }) => return false,
                Some(LineIntersection::SinglePoint { .. }) if !adjacent => return false,
                Some(LineIntersection::SinglePoint { intersection, .. }) => {
                    // Neighbours may only meet where they are joined.
                    let shared = if j == i + 1 { lines[i].end } else { lines[i].start };
                    let d = intersection - shared;
                    if d.x.hypot(d.y) > tolerance() {
                        return false;
                    }
                },
            }
        }
    }
    true
}

/// Resolve a self-intersecting outline into simple exterior rings.
///
/// A simple polygon comes back unchanged as the only element. Anything else is
/// unioned with itself through `geo::BooleanOps`, which splits it at every
/// crossing.
pub fn repair_self_intersections(polygon: &[Point2<Real>]) -> Result<Vec<Polygon2>> {
    if polygon.len() < 3 {
        return Err(LogoError::too_few_points("repair_self_intersections", 3, polygon.len()));
    }
    if is_simple(polygon) {
        return Ok(vec![polygon.to_vec()]);
    }
    let poly = to_geo(polygon);
    let repaired = exterior_rings(poly.union(&poly));
    debug!(input = polygon.len(), rings = repaired.len(), "repaired self-intersecting outline");
    Ok(repaired)
}

/// Union every polygon whose index is not in `subtract`, then cut away each
/// flagged polygon in input order.
pub fn union(polygons: &[Polygon2], subtract: &BTreeSet<usize>) -> Result<Vec<Polygon2>> {
    if let Some(bad) = subtract.iter().find(|&&i| i >= polygons.len()) {
        return Err(LogoError::degenerate(format!(
            "subtract index {bad} is out of range for {} polygons",
            polygons.len()
        )));
    }
    if let Some(short) = polygons.iter().find(|p| p.len() < 3) {
        return Err(LogoError::too_few_points("union", 3, short.len()));
    }

    let mut acc = MultiPolygon::<Real>::new(vec![]);
    for (_, polygon) in polygons.iter().enumerate().filter(|(i, _)| !subtract.contains(i)) {
        acc = acc.union(&MultiPolygon::new(vec![to_geo(polygon)]));
    }
    for &i in subtract {
        acc = acc.difference(&MultiPolygon::new(vec![to_geo(&polygons[i])]));
    }
    let rings = exterior_rings(acc);
    debug!(inputs = polygons.len(), subtracted = subtract.len(), rings = rings.len(), "union");
    Ok(rings)
}

/// Move every edge inward by `distance` (negative pads outward).
///
/// Built on the straight-skeleton buffer of `geo-buf`, so an inset past the
/// polygon's inradius collapses to nothing instead of turning inside out.
/// Pieces that split off come back as separate rings.
pub fn inset(polygon: &[Point2<Real>], distance: Real) -> Result<Vec<Polygon2>> {
    if polygon.len() < 3 {
        return Err(LogoError::too_few_points("inset", 3, polygon.len()));
    }
    let cleaned = remove_identical_adjacent(polygon);
    if cleaned.len() < 3 || signed_area(&cleaned).abs() <= tolerance() {
        return Err(LogoError::degenerate("inset of a polygon without area"));
    }
    let rings = exterior_rings(buffer_polygon(&to_geo(&cleaned), -distance));
    debug!(input = polygon.len(), distance, rings = rings.len(), "inset");
    Ok(rings)
}
