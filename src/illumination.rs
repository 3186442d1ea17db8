//! **Uniform Shading Model for flat bevel facets**
//!
//! Each facet is planar, so its color is evaluated once from its surface normal:
//! ```text
//! I = kₐ·Cₘ + k_d·(Cₘ ⊙ Cₗ)·max(0, L·N) + kₛ·Cₗ·max(0, R·V)^shine
//! R = 2(L·N)N − L,  V = (0, 0, 1)
//! ```
//! where `Cₘ` is the material color, `Cₗ` the light color and `L` the unit
//! direction *toward* the light. Lights are infinitely far away.
//!
//! The per-light result is unbounded so several lights can be summed before the
//! final clamp in [`illuminate`].

use crate::color::{HasColor, Rgb8, clamp_intensity, intensity_to_rgb, rgb_to_intensity};
use crate::errors::{LogoError, Result};
use crate::float_types::{Real, TAU, tolerance};
use nalgebra::{Vector2, Vector3};
use tracing::debug;

/// The viewer sits on the +z axis, looking down at the xy plane.
pub const VIEWER: Vector3<Real> = Vector3::new(0.0, 0.0, 1.0);

/// Shininess is meaningless for planar bevels. Kept so the model also works for
/// curved surfaces.
pub const BEVEL_SHININESS: Real = 1.0;

fn normalize3(v: &Vector3<Real>, what: &str) -> Result<Vector3<Real>> {
    let len = v.norm();
    if len <= tolerance() {
        return Err(LogoError::degenerate(format!(
            "cannot normalize zero-length {what} ({}, {}, {})",
            v.x, v.y, v.z
        )));
    }
    Ok(v / len)
}

/// A directional light: a color and the unit direction toward the light.
#[derive(Debug, Clone, PartialEq)]
pub struct LightSource {
    color: Vector3<Real>,
    direction: Vector3<Real>,
}

impl LightSource {
    /// `direction` points from the scene toward the light and is normalized here.
    pub fn new(color: Vector3<Real>, direction: Vector3<Real>) -> Result<Self> {
        Ok(Self {
            color,
            direction: normalize3(&direction, "light direction")?,
        })
    }

    pub fn from_hex(hex: &str, direction: Vector3<Real>) -> Result<Self> {
        Self::new(crate::color::hex_to_intensity(hex)?, direction)
    }

    pub const fn direction(&self) -> &Vector3<Real> {
        &self.direction
    }
}

impl HasColor for LightSource {
    fn color(&self) -> Vector3<Real> {
        self.color
    }

    fn set_color(&mut self, color: Vector3<Real>) {
        self.color = color;
    }
}

/// A surface material with ambient / diffuse / specular weights summing to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    color: Vector3<Real>,
    ambient: Real,
    diffuse: Real,
    specular: Real,
    shine: Real,
}

impl Material {
    /// Weights are re-normalized so `ambient + diffuse + specular == 1`.
    pub fn new(color: Vector3<Real>, ambient: Real, diffuse: Real, specular: Real) -> Result<Self> {
        if ambient < 0.0 || diffuse < 0.0 || specular < 0.0 {
            return Err(LogoError::degenerate(format!(
                "material weights must be non-negative, got ({ambient}, {diffuse}, {specular})"
            )));
        }
        let sum = ambient + diffuse + specular;
        if sum <= Real::EPSILON {
            return Err(LogoError::degenerate("material weights sum to zero"));
        }
        Ok(Self {
            color,
            ambient: ambient / sum,
            diffuse: diffuse / sum,
            specular: specular / sum,
            shine: BEVEL_SHININESS,
        })
    }

    pub fn from_hex(hex: &str, ambient: Real, diffuse: Real, specular: Real) -> Result<Self> {
        Self::new(crate::color::hex_to_intensity(hex)?, ambient, diffuse, specular)
    }

    pub const fn ambient(&self) -> Real {
        self.ambient
    }

    pub const fn diffuse(&self) -> Real {
        self.diffuse
    }

    pub const fn specular(&self) -> Real {
        self.specular
    }

    pub const fn shine(&self) -> Real {
        self.shine
    }

    /// A copy with a different base color.
    pub fn with_color(&self, color: Vector3<Real>) -> Self {
        Self {
            color,
            ..self.clone()
        }
    }

    /// A copy whose ambient weight is multiplied by `factor`, e.g. `1/n` to keep
    /// ambient energy constant across `n` lights. The other weights are untouched.
    pub fn with_ambient_scaled(&self, factor: Real) -> Self {
        Self {
            ambient: self.ambient * factor,
            ..self.clone()
        }
    }
}

impl HasColor for Material {
    fn color(&self) -> Vector3<Real> {
        self.color
    }

    fn set_color(&mut self, color: Vector3<Real>) {
        self.color = color;
    }
}

/// **Uniform Shading Model for a single light.**
///
/// `normal` does not need to be unit length. The material color is clamped to
/// `[0, 1]` before use; the result is *not* clamped.
pub fn shade(normal: &Vector3<Real>, material: &Material, light: &LightSource) -> Result<Vector3<Real>> {
    let n = normalize3(normal, "surface normal")?;
    Ok(shade_unit(&n, material, &material.color, light))
}

/// [`shade`] for a material value lit as if its color were `candidate`.
/// The material itself is left alone.
pub fn shade_with(
    normal: &Vector3<Real>,
    material: &Material,
    candidate: &Vector3<Real>,
    light: &LightSource,
) -> Result<Vector3<Real>> {
    let n = normalize3(normal, "surface normal")?;
    Ok(shade_unit(&n, material, candidate, light))
}

fn shade_unit(
    n: &Vector3<Real>,
    material: &Material,
    color: &Vector3<Real>,
    light: &LightSource,
) -> Vector3<Real> {
    let color = clamp_intensity(color);
    let l = light.direction;
    let l_dot_n = l.dot(n);
    let r = n * (2.0 * l_dot_n) - l;
    let r_dot_v = r.dot(&VIEWER);

    let a_term = color * material.ambient;
    let d_term = color.component_mul(&light.color) * (material.diffuse * l_dot_n.max(0.0));
    let s_term = light.color * (material.specular * r_dot_v.max(0.0).powf(material.shine));
    a_term + d_term + s_term
}

fn summed_intensity(
    n: &Vector3<Real>,
    material: &Material,
    color: &Vector3<Real>,
    lights: &[LightSource],
) -> Result<Vector3<Real>> {
    if lights.is_empty() {
        return Err(LogoError::degenerate("at least one light source is required"));
    }
    let sum = lights
        .iter()
        .map(|light| shade_unit(n, material, color, light))
        .fold(Vector3::zeros(), |acc, c| acc + c);
    Ok(clamp_intensity(&sum))
}

/// Sum [`shade`] over `lights`, clamp once, and return 8-bit RGB.
///
/// Ambient is *not* divided by the number of lights. Use
/// [`Material::with_ambient_scaled`] when that matters.
pub fn illuminate_rgb(normal: &Vector3<Real>, material: &Material, lights: &[LightSource]) -> Result<Rgb8> {
    let n = normalize3(normal, "surface normal")?;
    Ok(intensity_to_rgb(&summed_intensity(&n, material, &material.color, lights)?))
}

/// Sum [`shade`] over `lights`, clamp once, and return `#rrggbb`.
pub fn illuminate(normal: &Vector3<Real>, material: &Material, lights: &[LightSource]) -> Result<String> {
    Ok(illuminate_rgb(normal, material, lights)?.to_hex())
}

/// **Material calibration by monotonic per-channel search.**
///
/// Find the material color that, lit by `lights` at `normal`, reproduces `goal`.
///
/// Under this model raising a channel of the material color never lowers the
/// same output channel. The search therefore starts from black and raises, in
/// 8-bit steps, every channel whose output is still below `goal`. It stops at
/// the first candidate that meets or exceeds `goal` on all channels. That takes
/// at most 255 steps per channel.
///
/// The goal must lie between the output for a black material and the output
/// for a white material; otherwise [`LogoError::IlluminationRange`] reports
/// both bounds. The input material is never modified.
pub fn calibrate_material_color(
    normal: &Vector3<Real>,
    material: &Material,
    lights: &[LightSource],
    goal: Rgb8,
) -> Result<Material> {
    let n = normalize3(normal, "surface normal")?;
    let lit = |candidate: &Rgb8| -> Result<Rgb8> {
        Ok(intensity_to_rgb(&summed_intensity(
            &n,
            material,
            &rgb_to_intensity(candidate),
            lights,
        )?))
    };

    let high = lit(&Rgb8::WHITE)?;
    let low = lit(&Rgb8::BLACK)?;
    if !high.meets(&goal) || !goal.meets(&low) {
        return Err(LogoError::IlluminationRange { low, high, goal });
    }

    let mut candidate = [0u8; 3];
    loop {
        let attempt = lit(&Rgb8::from_channels(candidate))?;
        if attempt.meets(&goal) {
            break;
        }
        let mut moved = false;
        for ((channel, got), want) in candidate
            .iter_mut()
            .zip(attempt.channels())
            .zip(goal.channels())
        {
            if got < want && *channel < u8::MAX {
                *channel += 1;
                moved = true;
            }
        }
        if !moved {
            return Err(LogoError::IlluminationRange { low, high, goal });
        }
    }

    let found = Rgb8::from_channels(candidate);
    debug!(%goal, %found, "calibrated material color");
    Ok(material.with_color(rgb_to_intensity(&found)))
}

/// **Light ring: a soft, extended light as many weak directional lights.**
///
/// `count` lights are spaced evenly around the z axis, each direction being
/// `(cos θ, sin θ, elevation)`. A light's weight falls off with its angle Δθ from
/// `dominant` (an xy direction):
/// ```text
/// w(Δθ) = ((1 + cos Δθ) / 2)³
/// ```
/// Weights are normalized to sum to 1 and scale `color`.
pub fn light_ring(
    color: &Vector3<Real>,
    dominant: &Vector2<Real>,
    elevation: Real,
    count: usize,
) -> Result<Vec<LightSource>> {
    if count == 0 {
        return Err(LogoError::degenerate("a light ring needs at least one light"));
    }
    if dominant.norm() <= tolerance() {
        return Err(LogoError::degenerate("a light ring needs a non-zero dominant direction"));
    }
    let dominant_angle = dominant.y.atan2(dominant.x);

    let angles: Vec<Real> = (0..count)
        .map(|i| dominant_angle + TAU * i as Real / count as Real)
        .collect();
    let weights: Vec<Real> = angles
        .iter()
        .map(|theta| ((1.0 + (theta - dominant_angle).cos()) / 2.0).powi(3))
        .collect();
    let total: Real = weights.iter().sum();

    angles
        .iter()
        .zip(weights.iter())
        .map(|(theta, weight)| {
            LightSource::new(
                color * (weight / total),
                Vector3::new(theta.cos(), theta.sin(), elevation),
            )
        })
        .collect()
}
