//! Shapes of the logo as painted polygon layers.
//!
//! Each builder returns a [`Shape`]: an id plus layers drawn in order, each layer
//! one set of polygons sharing a [`Paint`]. Nothing here knows about SVG; the
//! document writer in [`crate::io`] turns every layer into one `<path>`.

pub mod diamond;
pub mod letter_v;
pub mod letters_im;
pub mod params;

use crate::color::Rgb8;
use crate::float_types::Real;
use crate::vector::Polygon2;

pub use params::LogoParams;

/// A solid stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgb8,
    pub width: Real,
}

impl Stroke {
    pub const fn new(color: Rgb8, width: Real) -> Self {
        Self { color, width }
    }
}

/// Fill and stroke of a layer. `None` means "none".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Paint {
    pub fill: Option<Rgb8>,
    pub stroke: Option<Stroke>,
}

impl Paint {
    pub const fn fill(color: Rgb8) -> Self {
        Self { fill: Some(color), stroke: None }
    }

    pub const fn stroke(stroke: Stroke) -> Self {
        Self { fill: None, stroke: Some(stroke) }
    }

    pub const fn with_stroke(self, stroke: Stroke) -> Self {
        Self { stroke: Some(stroke), ..self }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub id: Option<String>,
    pub polygons: Vec<Polygon2>,
    pub paint: Paint,
}

impl Layer {
    pub fn new(polygons: Vec<Polygon2>, paint: Paint) -> Self {
        Self { id: None, polygons, paint }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// A named group of layers, painted first to last.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub id: String,
    pub layers: Vec<Layer>,
}

impl Shape {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), layers: Vec::new() }
    }

    pub fn push(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// The layer with the given id, if any.
    pub fn layer(&self, id: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id.as_deref() == Some(id))
    }
}
