//! Construction errors

use crate::color::Rgb8;
use crate::float_types::Real;
use nalgebra::Point2;
use std::fmt::Display;

/// A line through two points, kept for error reporting.
pub type LineSpec = [Point2<Real>; 2];

/// All the possible failures while building a shape
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LogoError {
    /// (GeometryConstruction) Two lines that must intersect are parallel or coincident
    GeometryConstruction { first: LineSpec, second: LineSpec },
    /// (IlluminationRange) The goal color is outside what the lights can produce
    IlluminationRange { low: Rgb8, high: Rgb8, goal: Rgb8 },
    /// (DegenerateInput) Too few points, a zero-length vector, an empty list, ...
    DegenerateInput(String),
}

impl Display for LogoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogoError::GeometryConstruction { first, second } => write!(
                f,
                "(GeometryConstruction) Lines through ({}, {})-({}, {}) and ({}, {})-({}, {}) are parallel or coincident",
                first[0].x, first[0].y, first[1].x, first[1].y,
                second[0].x, second[0].y, second[1].x, second[1].y,
            ),
            LogoError::IlluminationRange { low, high, goal } => write!(
                f,
                "(IlluminationRange) Material and light parameters can only create colors in the range {} to {} at this normal. The goal color is {}",
                low, high, goal
            ),
            LogoError::DegenerateInput(msg) => write!(f, "(DegenerateInput) {}", msg),
        }
    }
}

impl LogoError {
    pub(crate) fn degenerate(msg: impl Into<String>) -> Self {
        LogoError::DegenerateInput(msg.into())
    }

    pub(crate) fn too_few_points(what: &str, needed: usize, got: usize) -> Self {
        LogoError::DegenerateInput(format!(
            "{what} requires at least {needed} points, got {got}"
        ))
    }
}

pub type Result<T> = std::result::Result<T, LogoError>;
