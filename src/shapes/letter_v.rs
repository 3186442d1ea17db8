//! The giant letter V.
//!
//! Ignoring the small corner cuts, the face of the V is this outline:
//! ```text
//! a----------b     i----------j
//! |          |     |          |
//! o--n    d--c     h--g       k
//!    |    |           |      /
//!    |    |           f     /
//!    |    |          /     /
//!    |    |         /     /
//!    |    |        /     /
//!    |    |       /     /
//!    |    |      /     /
//!    |    | /   /     /
//!    |    e    /     /
//!    |        /     /
//!    |       /     /
//!    m------l-----'
//! ```
//! Every clockwise right turn (a, b, c, h, i, j, m, o) gets a 45° cut, which
//! gives the 23 points of the face. The outer bevel outline is that face pushed
//! out edge by edge. Most edges use the large bevel, four are tuned to the
//! artwork, and the bevels meeting at f and g are merged by
//! [`merge_fg_junction`].

use crate::bevel::{
    bevel_quads, bevel_right_angle_turns, intersect_segments, offset_points, offset_polygon_per_edge,
    surface_normal_of_bevel,
};
use crate::color::rgb_to_intensity;
use crate::compositor::{remove_identical_adjacent, repair_self_intersections};
use crate::errors::{LogoError, Result};
use crate::float_types::{FRAC_PI_2, Real};
use crate::illumination::{LightSource, Material, calibrate_material_color, illuminate_rgb};
use crate::shapes::params::*;
use crate::shapes::{Layer, Paint, Shape};
use crate::vector::{Polygon2, outward_distance, translate};
use nalgebra::{Point2, Vector3};
use tracing::{debug, instrument};

/// The built V with the outlines the background needs.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterV {
    pub shape: Shape,
    /// The gray face, 23 points.
    pub inner: Polygon2,
    /// Outside of the bevels, 23 points with the f/g junction doubled.
    pub outer: Polygon2,
    /// The black outline polygons.
    pub outline: Vec<Polygon2>,
}

/// Points a through o.
pub const V_ROUGH_POINTS: usize = 15;
/// Points of the face once the right-angle turns are beveled.
pub const V_FACE_POINTS: usize = 23;

/// Points a through o, top-left of the face at the origin.
pub fn rough_outline() -> Polygon2 {
    let a = Point2::new(0.0, 0.0);
    let b = Point2::new(V_INNER_AB, 0.0);
    let c = Point2::new(V_INNER_AB, V_INNER_BC);
    let d = Point2::new(c.x - V_INNER_CD, V_INNER_BC);

    let fx = V_INNER_HX + V_INNER_BC;
    let e = Point2::new(d.x, d.y + fx - d.x + 2.0 * V_LARGE_BEVEL);
    let f = Point2::new(fx, V_OUTER_BC);
    let g = Point2::new(fx, V_INNER_BC);
    let h = Point2::new(V_INNER_HX, V_INNER_BC);
    let i = Point2::new(V_INNER_HX, 0.0);
    let j = Point2::new(V_INNER_JX, 0.0);
    let k = Point2::new(V_INNER_JX, V_INNER_FG);

    // l sits on the grid, a little off the 45° line through k
    let l = Point2::new(V_INNER_LX, V_INNER_LY);
    let m = Point2::new(V_INNER_BC, l.y);
    let n = Point2::new(V_INNER_BC, V_INNER_BC);
    let o = Point2::new(0.0, V_INNER_BC);

    vec![a, b, c, d, e, f, g, h, i, j, k, l, m, n, o]
}

/// Per-edge outward bevel widths for the 23-point face.
///
/// Edge 6 (d→e) and edge 19 (m→n) are measured. Edge 7 (e→f) matches the f/g
/// serif. Edge 16 (k→l) is wide enough to reach the outer corner beside j.
pub fn face_bevel_widths(face: &[Point2<Real>], rough: &[Point2<Real>]) -> Result<Vec<Real>> {
    if face.len() < V_FACE_POINTS {
        return Err(LogoError::too_few_points("face_bevel_widths (face)", V_FACE_POINTS, face.len()));
    }
    if rough.len() < V_ROUGH_POINTS {
        return Err(LogoError::too_few_points("face_bevel_widths (rough)", V_ROUGH_POINTS, rough.len()));
    }
    let mut widths = vec![V_LARGE_BEVEL; face.len()];
    widths[6] = V_BEVEL_DE;
    widths[7] = V_INNER_FG * (FRAC_PI_2 / 2.0).sin();
    let outer_k = rough[9] + nalgebra::Vector2::new(V_LARGE_BEVEL, V_INNER_BC);
    widths[16] = outward_distance(&rough[10], &rough[11], &outer_k)?;
    widths[19] = V_BEVEL_MN;
    Ok(widths)
}

/// Force outer points 8 and 9 to one point.
///
/// The bevels on either side of f and g cannot both keep their widths, so both
/// points move to where the e→f bevel edge meets the g→h bevel edge.
pub fn merge_fg_junction(inner: &[Point2<Real>], outer: &mut [Point2<Real>]) -> Result<()> {
    if inner.len() < V_FACE_POINTS || outer.len() < V_FACE_POINTS {
        return Err(LogoError::too_few_points(
            "merge_fg_junction",
            V_FACE_POINTS,
            inner.len().min(outer.len()),
        ));
    }
    let merged = intersect_segments(&[outer[7], inner[9]], &[outer[10], outer[9]])?;
    outer[8] = merged;
    outer[9] = merged;
    Ok(())
}

/// Face and outer bevel outline, before translation.
pub fn bevel_outlines() -> Result<(Polygon2, Polygon2)> {
    let rough = rough_outline();
    let inner = bevel_right_angle_turns(&rough, v_small_bevel())?;
    let widths = face_bevel_widths(&inner, &rough)?;
    let mut outer = offset_points(&offset_polygon_per_edge(&inner, &widths)?);
    merge_fg_junction(&inner, &mut outer)?;
    Ok((inner, outer))
}

/// The black outline: the outer bevel outline pushed out once more, thicker
/// along m→n.
pub fn outline(outer: &[Point2<Real>]) -> Result<Vec<Polygon2>> {
    let distinct = remove_identical_adjacent(outer);
    if distinct.len() < V_FACE_POINTS - 1 {
        return Err(LogoError::too_few_points("outline", V_FACE_POINTS - 1, distinct.len()));
    }
    let mut widths = vec![V_LARGE_BEVEL; distinct.len()];
    widths[18] = V_BEVEL_MN;
    let pushed = offset_points(&offset_polygon_per_edge(&distinct, &widths)?);
    repair_self_intersections(&pushed)
}

/// The gray material and its key light.
pub fn v_lighting(params: &LetterVParams) -> Result<(Material, LightSource)> {
    let light = LightSource::new(rgb_to_intensity(&params.light_color), params.light_direction)?;
    let w = params.weights;
    let material = Material::new(rgb_to_intensity(&params.bevel_goal), w.ambient, w.diffuse, w.specular)?;
    let material =
        calibrate_material_color(&Vector3::z(), &material, std::slice::from_ref(&light), params.bevel_goal)?;
    Ok((material, light))
}

#[instrument(skip_all)]
pub fn build_letter_v(params: &LogoParams) -> Result<LetterV> {
    let vp = &params.letter_v;
    let (inner, outer) = bevel_outlines()?;
    let inner = translate(&inner, &vp.translation);
    let outer = translate(&outer, &vp.translation);
    let outline = outline(&outer)?;
    let quads = bevel_quads(&inner, &outer)?;
    let (material, light) = v_lighting(vp)?;
    let lights = [light];

    let mut shape = Shape::new("letter_v");
    shape.push(Layer::new(outline.clone(), Paint::fill(params.fat_stroke.color)).with_id("v_outline"));
    for (i, quad) in quads.iter().enumerate() {
        let normal = surface_normal_of_bevel(&quad[0], &quad[1], vp.bevel_slope)?;
        let fill = illuminate_rgb(&normal, &material, &lights)?;
        shape.push(Layer::new(vec![quad.clone()], Paint::fill(fill)).with_id(format!("v_bevel_{i}")));
    }
    shape.push(Layer::new(quads, Paint::stroke(params.pin_stroke)).with_id("v_pinstripes"));
    shape.push(
        Layer::new(vec![inner.clone()], Paint::fill(params.face_gray).with_stroke(params.pin_stroke))
            .with_id("v_face"),
    );
    debug!(face = inner.len(), outline = outline.len(), "built letter V");

    Ok(LetterV { shape, inner, outer, outline })
}
