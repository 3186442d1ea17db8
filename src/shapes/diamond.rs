//! The green diamond behind the letters.

use crate::bevel::{bevel_quads, offset_points, offset_polygon_uniform, surface_normal_of_bevel};
use crate::color::rgb_to_intensity;
use crate::errors::Result;
use crate::float_types::Real;
use crate::illumination::{LightSource, Material, calibrate_material_color, illuminate_rgb, light_ring};
use crate::shapes::params::{DiamondParams, LogoParams};
use crate::shapes::{Layer, Paint, Shape};
use crate::vector::Polygon2;
use nalgebra::{Point2, Vector2, Vector3};
use tracing::{debug, instrument};

/// The built diamond with the outlines the background needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Diamond {
    pub shape: Shape,
    /// Outside of the bevels.
    pub outer: Polygon2,
    /// The flat green face.
    pub inner: Polygon2,
}

/// Four tips clockwise (on screen) from +x, centered on `center`.
pub fn diamond_points(radius: Real, center: &Vector2<Real>) -> Polygon2 {
    [(radius, 0.0), (0.0, radius), (-radius, 0.0), (0.0, -radius)]
        .iter()
        .map(|&(x, y)| Point2::new(x, y) + center)
        .collect()
}

/// The light ring and the green material calibrated under it.
///
/// Ambient is divided among the lights so the ring as a whole adds it once.
pub fn diamond_lighting(params: &DiamondParams) -> Result<(Material, Vec<LightSource>)> {
    let ring = &params.lights;
    let lights = light_ring(&rgb_to_intensity(&ring.color), &ring.dominant, ring.elevation, ring.count)?;
    let w = params.weights;
    let material = Material::new(rgb_to_intensity(&params.color), w.ambient, w.diffuse, w.specular)?
        .with_ambient_scaled(1.0 / lights.len() as Real);
    let material = calibrate_material_color(&Vector3::z(), &material, &lights, params.color)?;
    Ok((material, lights))
}

#[instrument(skip_all)]
pub fn build_diamond(params: &LogoParams) -> Result<Diamond> {
    let dp = &params.diamond;
    let outer = diamond_points(dp.radius, &params.view_center());
    let inner = offset_points(&offset_polygon_uniform(&outer, -dp.bevel_width)?);
    let quads = bevel_quads(&inner, &outer)?;
    let (material, lights) = diamond_lighting(dp)?;

    let mut shape = Shape::new("diamond");
    shape.push(Layer::new(vec![outer.clone()], Paint::stroke(params.fat_stroke)).with_id("diamond_outline"));
    shape.push(Layer::new(vec![inner.clone()], Paint::fill(dp.color)).with_id("diamond_face"));
    for (i, quad) in quads.iter().enumerate() {
        let normal = surface_normal_of_bevel(&quad[0], &quad[1], dp.bevel_slope)?;
        let fill = illuminate_rgb(&normal, &material, &lights)?;
        debug!(bevel = i, %fill, "diamond bevel");
        shape.push(Layer::new(vec![quad.clone()], Paint::fill(fill)).with_id(format!("diamond_bevel_{i}")));
    }
    shape.push(Layer::new(quads, Paint::stroke(params.pin_stroke)).with_id("diamond_pinstripes"));

    Ok(Diamond { shape, outer, inner })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::signed_area;

    #[test]
    fn tips_run_clockwise_on_screen() {
        let pts = diamond_points(2.0, &Vector2::new(10.0, 10.0));
        assert_eq!(pts[0], Point2::new(12.0, 10.0));
        assert_eq!(pts[1], Point2::new(10.0, 12.0));
        assert!(signed_area(&pts) > 0.0);
    }
}
