//! Composition root: build every shape and the white background behind them.

use crate::color::Rgb8;
use crate::compositor::{inset, remove_identical_adjacent, union};
use crate::errors::Result;
use crate::float_types::Real;
use crate::shapes::diamond::{Diamond, build_diamond};
use crate::shapes::letter_v::{LetterV, build_letter_v};
use crate::shapes::letters_im::{LettersIm, build_letters_im};
use crate::shapes::params::V_LARGE_BEVEL;
use crate::shapes::Shape;
use crate::vector::Polygon2;
use std::collections::BTreeSet;
use tracing::{debug, instrument};

pub use crate::shapes::LogoParams;

/// The finished logo, ready to be written out.
#[derive(Debug, Clone, PartialEq)]
pub struct Logo {
    /// `[min_x, min_y, width, height]`
    pub view_box: [Real; 4],
    pub background: Vec<Polygon2>,
    pub background_color: Rgb8,
    /// Diamond, V, then i and m, in paint order.
    pub shapes: Vec<Shape>,
}

impl Logo {
    pub fn shape(&self, id: &str) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }
}

#[cfg(feature = "parallel")]
fn build_shapes(params: &LogoParams) -> Result<(Diamond, LetterV, LettersIm)> {
    let (diamond, (letter_v, letters_im)) = rayon::join(
        || build_diamond(params),
        || rayon::join(|| build_letter_v(params), || build_letters_im(params)),
    );
    Ok((diamond?, letter_v?, letters_im?))
}

#[cfg(not(feature = "parallel"))]
fn build_shapes(params: &LogoParams) -> Result<(Diamond, LetterV, LettersIm)> {
    Ok((build_diamond(params)?, build_letter_v(params)?, build_letters_im(params)?))
}

/// The white band behind everything.
///
/// The V and diamond are padded and unioned, the body of the m is cut out of
/// them, then the padded m is added back on top.
pub fn background(
    params: &LogoParams,
    diamond: &Diamond,
    letter_v: &LetterV,
    letters_im: &LettersIm,
) -> Result<Vec<Polygon2>> {
    let full = params.full_outline_width;
    let im_stroke = params.letters_im.stroke_width;

    let mut padded = inset(&remove_identical_adjacent(&letter_v.outer), -(full + V_LARGE_BEVEL))?;
    padded.extend(inset(&diamond.outer, -(full + params.fat_stroke.width / 2.0))?);
    padded.push(letters_im.m_mask.clone());
    let mask = BTreeSet::from([padded.len() - 1]);
    let mut regions = union(&padded, &mask)?;

    // a wide band would swallow the voids between the m legs
    let m_source = if full > im_stroke / 2.0 { &letters_im.m_mask } else { &letters_im.m };
    regions.extend(inset(m_source, -(full + im_stroke))?);
    let regions = union(&regions, &BTreeSet::new())?;
    debug!(regions = regions.len(), "background");
    Ok(regions)
}

#[instrument(skip_all)]
pub fn build_logo(params: &LogoParams) -> Result<Logo> {
    let (diamond, letter_v, letters_im) = build_shapes(params)?;
    let background = background(params, &diamond, &letter_v, &letters_im)?;

    Ok(Logo {
        view_box: params.view_box,
        background,
        background_color: params.full_outline_color,
        shapes: vec![diamond.shape, letter_v.shape, letters_im.shape],
    })
}
