//! Measurements and tuning for every shape.
//!
//! The raw measurements were taken from the reference artwork. Many of them are
//! whole numbers of 96ths (the artwork's pixels per inch), so they are written
//! that way. Everything a caller may want to tweak lives in [`LogoParams`].

use crate::color::Rgb8;
use crate::float_types::{PI, PPI, Real};
use crate::shapes::Stroke;
use nalgebra::{Vector2, Vector3};

// ===========================================================================
//   Letter V, measured
// ===========================================================================

/// Outer width of the top-left serif.
pub const V_OUTER_AB: Real = 9615.0 / PPI;
/// Outer height of the top-left serif.
pub const V_OUTER_BC: Real = 2730.0 / PPI;
/// Inner height of the top-left serif.
pub const V_INNER_BC: Real = 1638.0 / PPI;
/// Inner horizontal run at the bottom right of the top-left serif.
pub const V_INNER_CD: Real = 1818.0 / PPI;
/// Bevel along the right side of the vertical stroke.
pub const V_BEVEL_DE: Real = 1002.0 / PPI;
/// Bevel (and outline) along the left side of the vertical stroke.
pub const V_BEVEL_MN: Real = 636.0 / PPI;

pub const V_INNER_HX: Real = 14149.0 / PPI;
pub const V_INNER_JX: Real = 22588.0 / PPI;
pub const V_INNER_LX: Real = 3539.0 / PPI;
pub const V_INNER_LY: Real = 20957.0 / PPI;

// ===========================================================================
//   Letter V, derived
// ===========================================================================

/// Width of the outer bevels.
pub const V_LARGE_BEVEL: Real = (V_OUTER_BC - V_INNER_BC) / 2.0;
pub const V_INNER_AB: Real = V_OUTER_AB - 2.0 * V_LARGE_BEVEL;
pub const V_INNER_FG: Real = V_OUTER_BC - V_INNER_BC;

/// Width of the 45° cuts at right turns on the face of the V.
///
/// Only at exactly this ratio to [`V_LARGE_BEVEL`] do the cut corners line up
/// with the outer bevel seams.
pub fn v_small_bevel() -> Real {
    V_LARGE_BEVEL * (PI / 8.0).sin() / (3.0 * PI / 8.0).sin()
}

// ===========================================================================
//   Letters i and m, on a 60-unit x-height grid
// ===========================================================================

/// Bevels on the i dot.
pub const I_DOT_BEVEL: Real = 1.0;
/// Bevels and serif size on the i stem and m legs.
pub const IM_BEVEL: Real = 3.0;
/// Bottom width of an i stem or m leg, serif included.
pub const IM_STROKE_BOT: Real = 12.0;
/// Top width of the voids between m legs.
pub const M_VOID: Real = 10.5;

/// Horizontal guide lines, top to bottom.
pub const IM_H_LINES: [Real; 7] = [
    -(M_VOID - IM_BEVEL) - (IM_STROKE_BOT - IM_BEVEL), // top of i dot
    -(M_VOID - IM_BEVEL),                              // bottom of i dot
    0.0,                                               // x-height
    IM_BEVEL,                                          // bottom of divots on top of m
    9.0,                                               // top of voids between m legs
    27.0,                                              // top of lower serifs
    30.0,                                              // baseline
];

// ===========================================================================
//   Tunable parameters
// ===========================================================================

/// Light ring setup: `count` lights around the z axis weighted toward `dominant`.
#[derive(Debug, Clone, PartialEq)]
pub struct LightRingParams {
    pub color: Rgb8,
    pub dominant: Vector2<Real>,
    pub elevation: Real,
    pub count: usize,
}

/// Ambient / diffuse / specular weights (re-normalized by the material).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub ambient: Real,
    pub diffuse: Real,
    pub specular: Real,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiamondParams {
    /// Center to tip, outside the bevels.
    pub radius: Real,
    pub bevel_width: Real,
    pub bevel_slope: Real,
    pub color: Rgb8,
    pub weights: Weights,
    pub lights: LightRingParams,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LetterVParams {
    /// Where the top-left corner of the V face lands.
    pub translation: Vector2<Real>,
    pub bevel_slope: Real,
    /// A flat bevel under the key light comes out this color.
    pub bevel_goal: Rgb8,
    pub weights: Weights,
    pub light_color: Rgb8,
    pub light_direction: Vector3<Real>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LettersImParams {
    pub scale: Real,
    /// Where the top-left corner of the m lands.
    pub origin: Vector2<Real>,
    /// Width of the black outline around i and m.
    pub stroke_width: Real,
}

/// Everything the composition root needs. [`Default`] reproduces the logo.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoParams {
    /// `[min_x, min_y, width, height]`
    pub view_box: [Real; 4],
    /// Fat black outline around the V and diamond.
    pub fat_stroke: Stroke,
    /// Hairlines on bevel seams.
    pub pin_stroke: Stroke,
    /// White band behind everything.
    pub full_outline_width: Real,
    pub full_outline_color: Rgb8,
    /// Face color of the V, i and m.
    pub face_gray: Rgb8,
    pub diamond: DiamondParams,
    pub letter_v: LetterVParams,
    pub letters_im: LettersImParams,
}

impl LogoParams {
    pub fn view_center(&self) -> Vector2<Real> {
        let [x, y, w, h] = self.view_box;
        Vector2::new(x + w / 2.0, y + h / 2.0)
    }
}

impl Default for LogoParams {
    fn default() -> Self {
        let black = Rgb8::BLACK;
        Self {
            view_box: [0.0, 0.0, 293.57495, 293.80619],
            fat_stroke: Stroke::new(black, 11.5),
            pin_stroke: Stroke::new(black, 0.216),
            full_outline_width: 2.0,
            full_outline_color: Rgb8::WHITE,
            face_gray: Rgb8::new(0xcc, 0xcc, 0xcc),
            diamond: DiamondParams {
                radius: 71.0 * 1.9,
                bevel_width: 3.0 * 1.8,
                bevel_slope: 1.5,
                color: Rgb8::new(0x00, 0x99, 0x33),
                weights: Weights { ambient: 3.0, diffuse: 7.0, specular: 0.0 },
                lights: LightRingParams {
                    color: Rgb8::WHITE,
                    dominant: Vector2::new(-1.0, -1.0),
                    elevation: 1.0,
                    count: 8,
                },
            },
            letter_v: LetterVParams {
                translation: Vector2::new(35.647, 29.097107),
                bevel_slope: 1.0,
                bevel_goal: Rgb8::new(0xaa, 0xaa, 0xaa),
                weights: Weights { ambient: 0.1, diffuse: 0.9, specular: 0.0 },
                light_color: Rgb8::WHITE,
                light_direction: Vector3::new(-9.0, -12.0, 15.0),
            },
            letters_im: LettersImParams {
                scale: 5.6785 / 3.0,
                origin: Vector2::new(183.60404, 185.12055),
                stroke_width: 3.0,
            },
        }
    }
}
