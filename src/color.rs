//! Color conversions between hex strings, 8-bit RGB, float intensities and HSL.
//!
//! Intensities are `Vector3<Real>` with each channel nominally in `[0, 1]`.
//! HSL uses hue in degrees `[0, 360)` and saturation / lightness in `[0, 100]`.

use crate::errors::{LogoError, Result};
use crate::float_types::Real;
use nalgebra::Vector3;
use std::fmt::Display;
use std::str::FromStr;

/// An 8-bit RGB triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);
    pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub const fn from_channels(c: [u8; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }

    /// Parse `#rrggbb`, `rrggbb`, or the short `#rgb` form.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(LogoError::degenerate(format!("invalid hex color '{hex}'")));
        }
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => return Err(LogoError::degenerate(format!("invalid hex color '{hex}'"))),
        };
        let channel = |i: usize| {
            u8::from_str_radix(&expanded[i..i + 2], 16)
                .map_err(|_| LogoError::degenerate(format!("invalid hex color '{hex}'")))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `true` when every channel of `self` is at least the matching channel of `other`.
    pub fn meets(&self, other: &Rgb8) -> bool {
        self.channels()
            .iter()
            .zip(other.channels().iter())
            .all(|(a, b)| a >= b)
    }
}

impl Display for Rgb8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb8 {
    type Err = LogoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

/// Clamp every channel to `[0, 1]`.
pub fn clamp_intensity(color: &Vector3<Real>) -> Vector3<Real> {
    color.map(|c| c.clamp(0.0, 1.0))
}

/// Float intensity in `[0, 1]` to 8-bit RGB, rounding to nearest.
pub fn intensity_to_rgb(color: &Vector3<Real>) -> Rgb8 {
    let to_u8 = |c: Real| (c * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb8::new(to_u8(color.x), to_u8(color.y), to_u8(color.z))
}

pub fn rgb_to_intensity(rgb: &Rgb8) -> Vector3<Real> {
    Vector3::new(rgb.r as Real, rgb.g as Real, rgb.b as Real) / 255.0
}

pub fn intensity_to_hex(color: &Vector3<Real>) -> String {
    intensity_to_rgb(color).to_hex()
}

pub fn hex_to_intensity(hex: &str) -> Result<Vector3<Real>> {
    Ok(rgb_to_intensity(&Rgb8::from_hex(hex)?))
}

/// 8-bit RGB to `(hue°, saturation%, lightness%)`.
pub fn rgb_to_hsl(rgb: &Rgb8) -> Vector3<Real> {
    let c = rgb_to_intensity(rgb);
    let max = c.max();
    let min = c.min();
    let lightness = (max + min) / 2.0;
    let delta = max - min;
    if delta <= Real::EPSILON {
        return Vector3::new(0.0, 0.0, lightness * 100.0);
    }
    let saturation = if lightness > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };
    let hue = if max == c.x {
        ((c.y - c.z) / delta).rem_euclid(6.0)
    } else if max == c.y {
        (c.z - c.x) / delta + 2.0
    } else {
        (c.x - c.y) / delta + 4.0
    };
    Vector3::new(hue * 60.0, saturation * 100.0, lightness * 100.0)
}

/// `(hue°, saturation%, lightness%)` to 8-bit RGB.
pub fn hsl_to_rgb(hsl: &Vector3<Real>) -> Rgb8 {
    let hue = hsl.x.rem_euclid(360.0) / 60.0;
    let saturation = (hsl.y / 100.0).clamp(0.0, 1.0);
    let lightness = (hsl.z / 100.0).clamp(0.0, 1.0);

    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = chroma * (1.0 - (hue.rem_euclid(2.0) - 1.0).abs());
    let (r, g, b) = match hue as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    intensity_to_rgb(&Vector3::new(r + m, g + m, b + m))
}

pub fn intensity_to_hsl(color: &Vector3<Real>) -> Vector3<Real> {
    rgb_to_hsl(&intensity_to_rgb(color))
}

pub fn hsl_to_intensity(hsl: &Vector3<Real>) -> Vector3<Real> {
    rgb_to_intensity(&hsl_to_rgb(hsl))
}

/// Shared color accessors for anything that stores a float intensity.
pub trait HasColor {
    fn color(&self) -> Vector3<Real>;
    fn set_color(&mut self, color: Vector3<Real>);

    fn hex_color(&self) -> String {
        intensity_to_hex(&self.color())
    }

    fn set_hex_color(&mut self, hex: &str) -> Result<()> {
        self.set_color(hex_to_intensity(hex)?);
        Ok(())
    }

    fn rgb_color(&self) -> Rgb8 {
        intensity_to_rgb(&self.color())
    }

    fn set_rgb_color(&mut self, rgb: Rgb8) {
        self.set_color(rgb_to_intensity(&rgb));
    }

    fn hsl_color(&self) -> Vector3<Real> {
        intensity_to_hsl(&self.color())
    }

    fn set_hsl_color(&mut self, hsl: &Vector3<Real>) {
        self.set_color(hsl_to_intensity(hsl));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let green = Rgb8::from_hex("#009933").unwrap();
        assert_eq!(green, Rgb8::new(0, 0x99, 0x33));
        assert_eq!(green.to_hex(), "#009933");
        assert_eq!(Rgb8::from_hex("ccc").unwrap(), Rgb8::new(204, 204, 204));
        assert!(Rgb8::from_hex("#12345").is_err());
        assert!(Rgb8::from_hex("#gg0000").is_err());
    }

    #[test]
    fn hsl_of_primaries() {
        let red = rgb_to_hsl(&Rgb8::new(255, 0, 0));
        assert!((red.x - 0.0).abs() < 1e-9);
        assert!((red.y - 100.0).abs() < 1e-9);
        assert!((red.z - 50.0).abs() < 1e-9);
        assert_eq!(hsl_to_rgb(&Vector3::new(120.0, 100.0, 50.0)), Rgb8::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(&Vector3::new(0.0, 0.0, 80.0)), Rgb8::new(204, 204, 204));
    }

    #[test]
    fn hsl_round_trip_on_vim_green() {
        let green = Rgb8::new(0, 0x99, 0x33);
        assert_eq!(hsl_to_rgb(&rgb_to_hsl(&green)), green);
    }
}
