//! Writing the finished logo as an SVG document.
//!
//! Every [`Shape`] becomes a `<g>` and every layer a single `<path>` whose data
//! string holds all of the layer's polygons.

use crate::io::IoError;
use crate::io::path_data::{data_string_multi, format_number};
use crate::logo::Logo;
use crate::shapes::{Layer, Paint, Shape};
use std::path::Path;
use svg::Document;
use svg::node::Text;
use svg::node::element::{Description, Group, Path as PathElement};
use tracing::info;

const DESCRIPTION: &str = concat!(
    env!("CARGO_PKG_NAME"),
    " ",
    env!("CARGO_PKG_VERSION"),
    ": ",
    env!("CARGO_PKG_DESCRIPTION")
);

fn paint_path(d: String, paint: &Paint) -> PathElement {
    let mut path = PathElement::new().set("d", d);
    path = match paint.fill {
        Some(color) => path.set("fill", color.to_hex()),
        None => path.set("fill", "none"),
    };
    if let Some(stroke) = paint.stroke {
        path = path
            .set("stroke", stroke.color.to_hex())
            .set("stroke-width", format_number(stroke.width));
    }
    path
}

fn layer_path(layer: &Layer) -> PathElement {
    let path = paint_path(data_string_multi(&layer.polygons), &layer.paint);
    match &layer.id {
        Some(id) => path.set("id", id.as_str()),
        None => path,
    }
}

fn shape_group(shape: &Shape) -> Group {
    shape
        .layers
        .iter()
        .filter(|layer| !layer.polygons.is_empty())
        .fold(Group::new().set("id", shape.id.as_str()), |group, layer| group.add(layer_path(layer)))
}

/// Assemble the document: metadata, background, then each shape in paint order.
pub fn to_document(logo: &Logo) -> Document {
    let [x, y, width, height] = logo.view_box;
    let view_box = [x, y, width, height].map(format_number).join(" ");

    let background = paint_path(data_string_multi(&logo.background), &Paint::fill(logo.background_color))
        .set("id", "background");

    let document = Document::new()
        .set("viewBox", view_box)
        .set("width", format_number(width))
        .set("height", format_number(height))
        .add(Description::new().add(Text::new(DESCRIPTION)))
        .add(background);

    logo.shapes.iter().fold(document, |document, shape| document.add(shape_group(shape)))
}

/// The document as text.
pub fn to_string(logo: &Logo) -> String {
    to_document(logo).to_string()
}

/// Write the document to `path`, creating parent directories as needed.
pub fn write_logo(path: impl AsRef<Path>, logo: &Logo) -> Result<(), IoError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    svg::save(path, &to_document(logo))?;
    info!(path = %path.display(), "wrote logo");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb8;
    use crate::shapes::Stroke;
    use nalgebra::Point2;

    fn square() -> Vec<Point2<f64>> {
        vec![Point2::new(0.0, 0.0), Point2::new(2.0, 0.0), Point2::new(2.0, 2.0), Point2::new(0.0, 2.0)]
    }

    #[test]
    fn missing_fill_is_written_as_none() {
        let paint = Paint::stroke(Stroke::new(Rgb8::BLACK, 0.5));
        let text = paint_path("M0,0Z".into(), &paint).to_string();
        assert!(text.contains(r#"fill="none""#));
        assert!(text.contains(r##"stroke="#000000""##));
        assert!(text.contains(r#"stroke-width="0.5""#));
    }

    #[test]
    fn empty_layers_are_skipped() {
        let mut shape = Shape::new("box");
        shape.push(Layer::new(vec![square()], Paint::fill(Rgb8::WHITE)).with_id("filled"));
        shape.push(Layer::new(vec![], Paint::fill(Rgb8::BLACK)).with_id("empty"));
        let text = shape_group(&shape).to_string();
        assert!(text.contains(r#"id="filled""#));
        assert!(!text.contains(r#"id="empty""#));
        assert!(text.contains("M0,0 H2 V2 H0Z"));
    }
}
