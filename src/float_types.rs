// Our Real scalar type:
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Lazily-initialized tolerance used across the crate.
/// Defaults to `1e-6`, but can be overridden:
///  1) **Build-time**: set env var `VIMLOGO_TOLERANCE` (e.g. `VIMLOGO_TOLERANCE=1e-9 cargo build`)
///  2) **Runtime**: call [`set_tolerance`] once before building any shape
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

#[inline]
const fn default_tolerance() -> Real {
    1e-6
}

/// Returns the current tolerance.
/// If not set yet, it tries `VIMLOGO_TOLERANCE` (parsed as `Real`) and
/// falls back to a sensible default.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        // Compile-time env if provided
        if let Some(environment_variable) = option_env!("VIMLOGO_TOLERANCE") {
            if let Ok(value) = Real::from_str(environment_variable) {
                return value.max(Real::EPSILON);
            }
        }
        default_tolerance()
    })
}

/// Set the tolerance programmatically once (subsequent calls are ignored).
/// Call near program start: `vimlogo::float_types::set_tolerance(1e-9);`
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}

/// `true` when `a` and `b` differ by no more than the crate tolerance,
/// either absolutely or relative to the larger magnitude.
#[inline]
pub fn is_close(a: Real, b: Real) -> bool {
    let tol = tolerance();
    let diff = (a - b).abs();
    diff <= tol || diff <= tol * a.abs().max(b.abs())
}

// Pi
/// Archimedes' constant (π)
pub const PI: Real = core::f64::consts::PI;

// Frac Pi 2
/// π/2
pub const FRAC_PI_2: Real = core::f64::consts::FRAC_PI_2;

// Tau
/// The full circle constant (τ)
pub const TAU: Real = core::f64::consts::TAU;

/// Pixels per inch of the reference artwork. Many of its measurements are whole
/// numbers of 96ths.
pub const PPI: Real = 96.0;
