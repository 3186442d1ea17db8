//! Measurements from a reference rendering of the logo.
//!
//! The builders in [`crate::shapes`] carry their numbers as constants, so none
//! of this is needed to draw the logo. It exists to re-derive or check those
//! numbers against an existing SVG: it reads the `<path>` elements and the root
//! `viewBox`, and answers point and attribute queries by element id or by one of
//! the nicknames in [`NICKNAMES`].

use crate::float_types::Real;
use crate::io::IoError;
use crate::io::path_data::parse_data_string;
use crate::vector::Polygon2;
use nalgebra::Point2;
use nom::{
    IResult,
    bytes::complete::{take_till, take_till1, take_while},
    character::complete::char,
    combinator::{all_consuming, map, opt},
    multi::{count, many0},
    number::complete::double,
    sequence::{preceded, separated_pair, terminated},
};
use std::collections::BTreeMap;
use std::path::Path;
use svg::node::element::tag::{self, Type};
use svg::parser::Event;
use tracing::debug;

/// Hand-picked elements of the reference artwork, by nickname.
pub const NICKNAMES: &[(&str, &str)] = &[
    ("background", "path493"),
    ("diamond_bevel_ne", "path18"),
    ("diamond_bevel_nw", "path14"),
    ("diamond_bevel_se", "path6"),
    ("diamond_bevel_sw", "path10"),
    ("diamond_face", "path22"),
    ("diamond_outline", "path2"),
    ("i_face_dot", "path86"),
    ("i_face_stem", "path82"),
    ("m_face", "path74"),
    ("m_outline", "path70"),
    ("v_face", "path62"),
    ("v_bevel_dim_0", "path42"),
    ("v_bevel_dim_1", "path46"),
    ("v_bevel_dim_2", "path54"),
    ("v_bevel_dim_3", "path58"),
    ("v_bevel_lit_0", "path30"),
    ("v_bevel_lit_1", "path34"),
    ("v_bevel_lit_2", "path38"),
    ("v_bevel_lit_3", "path50"),
    ("v_outline", "path26"),
];

fn resolve(name: &str) -> &str {
    NICKNAMES
        .iter()
        .find(|(nick, _)| *nick == name)
        .map_or(name, |(_, id)| *id)
}

/// `<path>` attributes by element id, plus the root `viewBox`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceImage {
    paths: BTreeMap<String, BTreeMap<String, String>>,
    view_box: Option<[Real; 4]>,
}

impl ReferenceImage {
    pub fn parse(svg_text: &str) -> Result<Self, IoError> {
        let mut image = Self::default();
        for event in svg::read(svg_text)? {
            match event {
                Event::Tag(tag::SVG, Type::Start | Type::Empty, attributes) => {
                    if let Some(view_box) = attributes.get("viewBox") {
                        image.view_box = Some(parse_view_box(&view_box.to_string())?);
                    }
                },
                Event::Tag(tag::Path, Type::Start | Type::Empty, attributes) => {
                    let Some(id) = attributes.get("id").map(|v| v.to_string()) else {
                        continue;
                    };
                    let attributes = attributes
                        .iter()
                        .filter(|(name, _)| name.as_str() != "id")
                        .map(|(name, value)| (name.clone(), value.to_string()))
                        .collect();
                    image.paths.insert(id, attributes);
                },
                Event::Error(error) => return Err(IoError::SvgParsing(error)),
                _ => {},
            }
        }
        debug!(paths = image.paths.len(), "read reference image");
        Ok(image)
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self, IoError> {
        Self::parse(&std::fs::read_to_string(path)?)
    }

    /// Ids of every `<path>` that has one, in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.paths.keys().map(String::as_str)
    }

    fn element(&self, name: &str) -> Result<&BTreeMap<String, String>, IoError> {
        self.paths
            .get(resolve(name))
            .ok_or_else(|| IoError::MissingElement(name.to_string()))
    }

    /// An attribute of the element, read directly or from its `style` list.
    pub fn attribute(&self, name: &str, attribute: &str) -> Result<String, IoError> {
        let element = self.element(name)?;
        if let Some(value) = element.get(attribute) {
            return Ok(value.clone());
        }
        element
            .get("style")
            .map(|style| parse_style(style))
            .transpose()?
            .and_then(|declarations| {
                declarations
                    .into_iter()
                    .find(|(key, _)| key == attribute)
                    .map(|(_, value)| value)
            })
            .ok_or_else(|| IoError::MissingAttribute {
                element: name.to_string(),
                attribute: attribute.to_string(),
            })
    }

    /// Points of the first subpath of the element's `d`.
    pub fn points_of(&self, name: &str) -> Result<Polygon2, IoError> {
        let d = self.attribute(name, "d")?;
        parse_data_string(&d)?
            .into_iter()
            .next()
            .ok_or_else(|| IoError::MalformedPath(format!("element '{name}' has an empty path")))
    }

    /// Every point of every nicknamed element whose nickname starts with
    /// `prefix`, in one list. Only useful for dimensions.
    pub fn points_of_many(&self, prefix: &str) -> Result<Vec<Point2<Real>>, IoError> {
        let mut points = Vec::new();
        for (nick, _) in NICKNAMES.iter().filter(|(nick, _)| nick.starts_with(prefix)) {
            points.extend(self.points_of(nick)?);
        }
        Ok(points)
    }

    /// `[min_x, min_y, width, height]`
    pub fn view_box(&self) -> Result<[Real; 4], IoError> {
        self.view_box
            .ok_or_else(|| IoError::MissingAttribute {
                element: "svg".to_string(),
                attribute: "viewBox".to_string(),
            })
    }

    pub fn view_center(&self) -> Result<Point2<Real>, IoError> {
        let [x, y, w, h] = self.view_box()?;
        Ok(Point2::new(x + w / 2.0, y + h / 2.0))
    }
}

/// Rotate the polygon to start at its lexicographically smallest point
/// (smallest x, then smallest y).
pub fn start_from_first_lexicographic_point(points: &[Point2<Real>]) -> Polygon2 {
    let first = points
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)))
        .map_or(0, |(i, _)| i);
    points[first..].iter().chain(&points[..first]).copied().collect()
}

/// Keep the first point and reverse the rest, flipping the winding.
pub fn reverse_winding(points: &[Point2<Real>]) -> Polygon2 {
    points.iter().take(1).chain(points.iter().skip(1).rev()).copied().collect()
}

fn number_list(input: &str) -> IResult<&str, Vec<Real>> {
    let separator = || take_while(|c: char| c.is_whitespace() || c == ',');
    all_consuming(terminated(count(preceded(separator(), double), 4), separator()))(input)
}

fn parse_view_box(text: &str) -> Result<[Real; 4], IoError> {
    let (_, values) = number_list(text)
        .map_err(|e| IoError::MalformedInput(format!("viewBox '{text}': {e}")))?;
    Ok([values[0], values[1], values[2], values[3]])
}

fn declaration(input: &str) -> IResult<&str, (String, String)> {
    map(
        separated_pair(
            take_till1(|c: char| c == ':' || c == ';'),
            char(':'),
            take_till(|c: char| c == ';'),
        ),
        |(key, value): (&str, &str)| (key.trim().to_string(), value.trim().to_string()),
    )(input)
}

fn declarations(input: &str) -> IResult<&str, Vec<(String, String)>> {
    all_consuming(many0(terminated(
        preceded(take_while(|c: char| c.is_whitespace()), declaration),
        opt(char(';')),
    )))(input)
}

/// `key: value;` pairs of a `style` attribute.
fn parse_style(style: &str) -> Result<Vec<(String, String)>, IoError> {
    let trimmed = style.trim();
    let (_, pairs) = declarations(trimmed)
        .map_err(|e| IoError::MalformedInput(format!("style '{style}': {e}")))?;
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_fallback() {
        let pairs = parse_style("fill:#ffffff; stroke-width:7.3;stroke:none").unwrap();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[1], ("stroke-width".to_string(), "7.3".to_string()));
    }

    #[test]
    fn view_box_accepts_commas() {
        assert_eq!(parse_view_box("0, 0 10 20").unwrap(), [0.0, 0.0, 10.0, 20.0]);
        assert!(parse_view_box("0 0 10").is_err());
    }

    #[test]
    fn rotation_to_smallest_point() {
        let pts = [Point2::new(3.0, 0.0), Point2::new(1.0, 2.0), Point2::new(1.0, 1.0)];
        let rotated = start_from_first_lexicographic_point(&pts);
        assert_eq!(rotated[0], Point2::new(1.0, 1.0));
        assert_eq!(rotated[1], Point2::new(3.0, 0.0));
    }
}
