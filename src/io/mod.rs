pub mod path_data;

#[cfg(feature = "svg-io")]
pub mod reference;

#[cfg(feature = "svg-io")]
pub mod svg;

use crate::errors::LogoError;

/// Reading reference artwork and writing the finished document.
///
/// The `svg` parsing variant only exists with the `svg-io` feature.
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),
    ParseFloat(std::num::ParseFloatError),

    MalformedInput(String),
    MalformedPath(String),
    MissingElement(String),
    MissingAttribute { element: String, attribute: String },

    /// Geometry or shading failed while building what was being written.
    Logo(LogoError),

    #[cfg(feature = "svg-io")]
    /// Error bubbled up from the `svg` crate during parsing.
    SvgParsing(::svg::parser::Error),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),
            ParseFloat(error) => write!(f, "Could not parse float: {error}"),

            MalformedInput(msg) => write!(f, "Input is malformed: {msg}"),
            MalformedPath(msg) => write!(f, "The path is malformed: {msg}"),
            MissingElement(id) => write!(f, "No element with id '{id}'"),
            MissingAttribute { element, attribute } => {
                write!(f, "Element '{element}' has no attribute '{attribute}'")
            },

            Logo(error) => write!(f, "{error}"),

            #[cfg(feature = "svg-io")]
            SvgParsing(error) => write!(f, "SVG Parsing error: {error}"),
        }
    }
}

impl std::error::Error for IoError {}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}

impl From<std::num::ParseFloatError> for IoError {
    fn from(value: std::num::ParseFloatError) -> Self {
        Self::ParseFloat(value)
    }
}

impl From<LogoError> for IoError {
    fn from(value: LogoError) -> Self {
        Self::Logo(value)
    }
}

#[cfg(feature = "svg-io")]
impl From<::svg::parser::Error> for IoError {
    fn from(value: ::svg::parser::Error) -> Self {
        Self::SvgParsing(value)
    }
}
