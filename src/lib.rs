//! A procedurally built, **beveled and illuminated Vim logo**.
//!
//! Every shape of the logo (a green diamond, a giant V, the letters i and m) is
//! drawn as flat 2D polygons. Bevels are produced by offsetting an outline edge
//! by edge, each bevel facet is given a surface normal and shaded with a small
//! multi-light model, and the pieces are combined with boolean polygon
//! operations into the fill regions of an SVG.
//!
//! ```no_run
//! use vimlogo::{LogoParams, build_logo};
//!
//! let logo = build_logo(&LogoParams::default())?;
//! # #[cfg(feature = "svg-io")]
//! vimlogo::io::svg::write_logo("output/vimlogo.svg", &logo)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Features
//! #### Default
//! - **svg-io**: read reference artwork and write the finished document with
//!   [`svg`](https://crates.io/crates/svg), path data and style parsing with `nom`
//! - **cli**: the `vimlogo` binary (clap, anyhow, tracing-subscriber)
//!
//! #### Optional
//! - **parallel**: build the shapes concurrently with rayon, and let `geo` use it too
//!
//! The comparison tolerance defaults to `1e-6` and can be overridden at build
//! time with the `VIMLOGO_TOLERANCE` environment variable.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod bevel;
pub mod color;
pub mod compositor;
pub mod errors;
pub mod float_types;
pub mod illumination;
pub mod io;
pub mod logo;
pub mod shapes;
pub mod vector;

pub use color::Rgb8;
pub use errors::LogoError;
pub use logo::{Logo, LogoParams, build_logo};
