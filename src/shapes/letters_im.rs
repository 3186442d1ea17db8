//! The lowercase letters i and m.
//!
//! Both letters are drawn on a 60-unit x-height grid with the top-left corner
//! of the m at the origin. Only y values are absolute while drawing; x values
//! are offsets from the previous point so the repeated m legs and curved tops
//! can be reused. The finished letters are skewed (one unit left per three
//! down), scaled and moved into place.

use crate::compositor::{inset, union};
use crate::errors::{LogoError, Result};
use crate::float_types::Real;
use crate::shapes::params::*;
use crate::shapes::{Layer, Paint, Shape};
use crate::vector::Polygon2;
use nalgebra::Point2;
use std::collections::BTreeSet;
use tracing::instrument;

/// The built letters and the m outlines the background needs.
#[derive(Debug, Clone, PartialEq)]
pub struct LettersIm {
    pub shape: Shape,
    pub m: Polygon2,
    /// The m without its legs: the part the background must not cover.
    pub m_mask: Polygon2,
    pub i_stem: Polygon2,
    pub i_dot: Polygon2,
}

const H: [Real; 7] = IM_H_LINES;

/// Points in [`letter_m_points`].
pub const M_POINT_COUNT: usize = 29;

/// Turn relative x offsets into absolute points.
fn relative_x_to_absolute(steps: &[(Real, Real)]) -> Polygon2 {
    let mut x = 0.0;
    steps
        .iter()
        .enumerate()
        .map(|(i, &(dx, y))| {
            x = if i == 0 { dx } else { x + dx };
            Point2::new(x, y)
        })
        .collect()
}

/// From the top of one m curve to the start of the next.
fn curved_top() -> [(Real, Real); 4] {
    [
        (IM_STROKE_BOT - IM_BEVEL, H[2]),
        (IM_BEVEL, H[3]),
        (M_VOID - IM_BEVEL * 2.0, H[3]),
        (IM_BEVEL, H[2]),
    ]
}

/// From above the bottom serif of one leg to above the serif of the next leg
/// to the left.
fn bottom_leg() -> [(Real, Real); 6] {
    [
        (IM_BEVEL, H[5]),
        (0.0, H[6]),
        (-IM_STROKE_BOT, H[6]),
        (0.0, H[4]),
        (-M_VOID, H[4]),
        (0.0, H[5]),
    ]
}

/// The [`M_POINT_COUNT`] points of the m on the letter grid.
pub fn letter_m_points() -> Polygon2 {
    let top = curved_top();
    let leg = bottom_leg();
    let mut steps = vec![(0.0, H[2])];
    steps.extend_from_slice(&top);
    steps.extend_from_slice(&top);
    steps.extend_from_slice(&top[..2]);
    steps.push((0.0, H[5]));
    steps.extend_from_slice(&leg);
    steps.extend_from_slice(&leg);
    steps.extend_from_slice(&leg[..3]);
    steps.push((0.0, H[3]));
    steps.push((-IM_BEVEL, H[3]));
    relative_x_to_absolute(&steps)
}

/// The outer envelope of the m: the top bar and the leftmost leg, voids
/// filled.
pub fn letter_m_mask(m: &[Point2<Real>]) -> Result<Polygon2> {
    if m.len() < M_POINT_COUNT {
        return Err(LogoError::too_few_points("letter_m_mask", M_POINT_COUNT, m.len()));
    }
    Ok(m[..14].iter().chain(&m[26..]).copied().collect())
}

/// The i stem, built as if it were a fourth m leg on the left.
pub fn letter_i_stem(m: &[Point2<Real>]) -> Result<Polygon2> {
    if m.len() < M_POINT_COUNT {
        return Err(LogoError::too_few_points("letter_i_stem", M_POINT_COUNT, m.len()));
    }
    let leg = bottom_leg();
    let mut from_leg = vec![(m[m.len() - 6].x, m[m.len() - 6].y)];
    from_leg.extend_from_slice(&leg);
    let start = relative_x_to_absolute(&from_leg)
        .last()
        .map_or(Point2::new(0.0, H[5]), |p| *p);

    let mut steps = vec![(start.x, start.y)];
    steps.extend_from_slice(&leg[..3]);
    steps.push((0.0, H[3]));
    steps.push((-IM_BEVEL, H[3]));
    steps.push((0.0, H[2]));
    steps.push((IM_STROKE_BOT, H[2]));
    Ok(relative_x_to_absolute(&steps))
}

/// A square dot with small corner cuts, over the right edge of the stem.
pub fn letter_i_dot(stem: &[Point2<Real>]) -> Polygon2 {
    let right = stem.last().map_or(0.0, |p| p.x);
    let side = (H[1] - H[0]) - I_DOT_BEVEL * 2.0;
    relative_x_to_absolute(&[
        (right, H[1] - I_DOT_BEVEL),
        (-I_DOT_BEVEL, H[1]),
        (-side, H[1]),
        (-I_DOT_BEVEL, H[1] - I_DOT_BEVEL),
        (0.0, H[0] + I_DOT_BEVEL),
        (I_DOT_BEVEL, H[0]),
        (side, H[0]),
        (I_DOT_BEVEL, H[0] + I_DOT_BEVEL),
    ])
}

/// Skew, scale and move letter-grid points into the view box.
pub fn place(points: &[Point2<Real>], params: &LettersImParams) -> Polygon2 {
    points
        .iter()
        .map(|p| Point2::new(p.x - p.y / 3.0, p.y) * params.scale + params.origin)
        .collect()
}

#[instrument(skip_all)]
pub fn build_letters_im(params: &LogoParams) -> Result<LettersIm> {
    let ip = &params.letters_im;
    let m_grid = letter_m_points();
    let stem_grid = letter_i_stem(&m_grid)?;
    let dot_grid = letter_i_dot(&stem_grid);

    let m = place(&m_grid, ip);
    let m_mask = place(&letter_m_mask(&m_grid)?, ip);
    let i_stem = place(&stem_grid, ip);
    let i_dot = place(&dot_grid, ip);

    let letters = vec![i_stem.clone(), i_dot.clone(), m.clone()];
    let mut pads = Vec::with_capacity(letters.len());
    for letter in &letters {
        pads.extend(inset(letter, -ip.stroke_width)?);
    }
    let outline = union(&pads, &BTreeSet::new())?;

    let mut shape = Shape::new("letters_im");
    shape.push(Layer::new(outline, Paint::fill(params.fat_stroke.color)).with_id("im_outline"));
    shape.push(Layer::new(letters, Paint::fill(params.face_gray)).with_id("im_face"));

    Ok(LettersIm { shape, m, m_mask, i_stem, i_dot })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::signed_area;

    #[test]
    fn m_has_twenty_nine_points() {
        let m = letter_m_points();
        assert_eq!(m.len(), 29);
        assert_eq!(m[13], Point2::new(54.0, 30.0));
        assert_eq!(m.len(), M_POINT_COUNT);
        assert_eq!(letter_m_mask(&m).unwrap().len(), 17);
        assert!(signed_area(&m) > 0.0);
    }

    #[test]
    fn stem_sits_one_leg_left_of_the_m() {
        let stem = letter_i_stem(&letter_m_points()).unwrap();
        assert_eq!(stem.len(), 8);
        assert_eq!(stem[0], Point2::new(-7.5, 27.0));
        assert_eq!(stem[7], Point2::new(-7.5, 0.0));
        assert!(signed_area(&stem) > 0.0);
    }

    #[test]
    fn short_outlines_are_rejected() {
        let m = letter_m_points();
        assert!(matches!(letter_m_mask(&m[..20]), Err(LogoError::DegenerateInput(_))));
        assert!(matches!(letter_i_stem(&m[..3]), Err(LogoError::DegenerateInput(_))));
        assert!(letter_i_stem(&[]).is_err());
    }

    #[test]
    fn dot_is_beveled_square() {
        let dot = letter_i_dot(&letter_i_stem(&letter_m_points()).unwrap());
        assert_eq!(dot.len(), 8);
        assert!((signed_area(&dot) - 79.0).abs() < 1e-9);
    }
}
