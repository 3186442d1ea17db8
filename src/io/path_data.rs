//! Linear SVG path data: `M`, `L`, `H`, `V` and `Z` only.
//!
//! Output is compact and deterministic. Coordinates are written with at most six
//! decimals, runs of `H` or `V` collapse into one command, and consecutive line
//! pairs share a single `M`/`L` command:
//! ```text
//! [(0,0), (4,0), (4,3), (1,5)]  →  "M0,0 H4 V3 L1,5Z"
//! ```

use crate::float_types::Real;
use nalgebra::Point2;

/// Six fixed decimals with trailing zeros (and a trailing dot) stripped.
/// Negative zero prints as `0`.
pub fn format_number(value: Real) -> String {
    let fixed = format!("{value:.6}");
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Path data for one closed polygon. An empty polygon gives an empty string.
///
/// Points are compared *after* formatting, so neighbours that only differ past
/// the sixth decimal collapse into one.
pub fn data_string(points: &[Point2<Real>]) -> String {
    let formatted: Vec<(String, String)> = points
        .iter()
        .map(|p| (format_number(p.x), format_number(p.y)))
        .collect();
    let pairs = dedupe_cyclic(formatted);
    let Some((x0, y0)) = pairs.first() else {
        return String::new();
    };

    let mut commands = vec![format!("M{x0},{y0}")];
    for window in pairs.windows(2) {
        let ((x1, y1), (x2, y2)) = (&window[0], &window[1]);
        let last = commands.len() - 1;
        let head = commands[last].chars().next();
        if x1 == x2 {
            if head == Some('V') {
                commands[last] = format!("V{y2}");
            } else {
                commands.push(format!("V{y2}"));
            }
        } else if y1 == y2 {
            if head == Some('H') {
                commands[last] = format!("H{x2}");
            } else {
                commands.push(format!("H{x2}"));
            }
        } else if matches!(head, Some('M') | Some('L')) {
            commands[last].push_str(&format!(" {x2},{y2}"));
        } else {
            commands.push(format!("L{x2},{y2}"));
        }
    }
    commands.join(" ") + "Z"
}

/// Several closed polygons in one `d` attribute.
pub fn data_string_multi<P: AsRef<[Point2<Real>]>>(polygons: &[P]) -> String {
    polygons
        .iter()
        .map(|p| data_string(p.as_ref()))
        .filter(|d| !d.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn dedupe_cyclic<T: PartialEq + Clone>(values: Vec<T>) -> Vec<T> {
    if values.len() < 2 {
        return values;
    }
    let n = values.len();
    let kept: Vec<T> = (0..n)
        .filter(|&i| values[i] != values[(i + 1) % n])
        .map(|i| values[i].clone())
        .collect();
    if kept.is_empty() {
        vec![values[0].clone()]
    } else {
        kept
    }
}

#[cfg(feature = "svg-io")]
pub use parse::parse_data_string;

#[cfg(feature = "svg-io")]
mod parse {
    use super::{Point2, Real};
    use crate::io::IoError;
    use crate::vector::Polygon2;
    use nom::{
        IResult,
        branch::alt,
        bytes::complete::take_while,
        character::complete::satisfy,
        combinator::{all_consuming, map},
        multi::many0,
        number::complete::double,
        sequence::{delimited, preceded},
    };

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Token {
        Command(char),
        Number(Real),
    }

    fn separator(input: &str) -> IResult<&str, &str> {
        take_while(|c: char| c.is_whitespace() || c == ',')(input)
    }

    fn token(input: &str) -> IResult<&str, Token> {
        preceded(
            separator,
            alt((
                map(satisfy(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E')), Token::Command),
                map(double, Token::Number),
            )),
        )(input)
    }

    fn tokens(input: &str) -> IResult<&str, Vec<Token>> {
        all_consuming(delimited(separator, many0(token), separator))(input)
    }

    /// Commands with their numeric arguments, in order.
    fn commands(d: &str) -> Result<Vec<(char, Vec<Real>)>, IoError> {
        let (_, tokens) =
            tokens(d).map_err(|e| IoError::MalformedPath(format!("cannot tokenize '{d}': {e}")))?;
        let mut grouped: Vec<(char, Vec<Real>)> = Vec::new();
        for token in tokens {
            match (token, grouped.last_mut()) {
                (Token::Command(c), _) => grouped.push((c, Vec::new())),
                (Token::Number(x), Some((_, args))) => args.push(x),
                (Token::Number(x), None) => {
                    return Err(IoError::MalformedPath(format!(
                        "number {x} before the first command in '{d}'"
                    )));
                },
            }
        }
        Ok(grouped)
    }

    fn close(current: &mut Polygon2, polygons: &mut Vec<Polygon2>) {
        if current.len() > 1 && current.first() == current.last() {
            current.pop();
        }
        if !current.is_empty() {
            polygons.push(std::mem::take(current));
        }
    }

    /// The point the next command draws from. After `Z` a new subpath resumes
    /// at the start of the one just closed.
    fn current_point(
        current: &mut Polygon2,
        start: Option<Point2<Real>>,
        command: char,
        d: &str,
    ) -> Result<Point2<Real>, IoError> {
        if let Some(last) = current.last() {
            return Ok(*last);
        }
        let resumed = start.ok_or_else(|| {
            IoError::MalformedPath(format!("'{command}' without a current point in '{d}'"))
        })?;
        current.push(resumed);
        Ok(resumed)
    }

    /// Parse linear path data into polygons, one per subpath.
    ///
    /// Only absolute `M L H V Z` are accepted. A closing point that repeats the
    /// first point of its subpath is dropped.
    pub fn parse_data_string(d: &str) -> Result<Vec<Polygon2>, IoError> {
        let mut polygons = Vec::new();
        let mut current: Polygon2 = Vec::new();
        let mut start: Option<Point2<Real>> = None;

        for (command, args) in commands(d)? {
            match command {
                'M' | 'L' => {
                    if args.is_empty() || args.len() % 2 != 0 {
                        return Err(IoError::MalformedPath(format!(
                            "'{command}' needs coordinate pairs, got {} numbers",
                            args.len()
                        )));
                    }
                    if command == 'M' {
                        close(&mut current, &mut polygons);
                        start = Some(Point2::new(args[0], args[1]));
                    } else {
                        current_point(&mut current, start, command, d)?;
                    }
                    current.extend(args.chunks_exact(2).map(|xy| Point2::new(xy[0], xy[1])));
                },
                'H' | 'V' => {
                    if args.is_empty() {
                        return Err(IoError::MalformedPath(format!("'{command}' needs a value")));
                    }
                    let mut at = current_point(&mut current, start, command, d)?;
                    for value in args {
                        if command == 'H' {
                            at.x = value;
                        } else {
                            at.y = value;
                        }
                        current.push(at);
                    }
                },
                'Z' => {
                    if !args.is_empty() {
                        return Err(IoError::MalformedPath("'Z' takes no arguments".to_string()));
                    }
                    close(&mut current, &mut polygons);
                },
                other => {
                    return Err(IoError::MalformedPath(format!(
                        "unsupported path command '{other}' (only absolute M, L, H, V, Z)"
                    )));
                },
            }
        }
        close(&mut current, &mut polygons);
        Ok(polygons)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn implicit_pairs_and_separators() {
            let polys = parse_data_string("M 0 0, 2 0 V2 H0 Z M5,5 L6,5 6,6 5,5Z").unwrap();
            assert_eq!(polys.len(), 2);
            assert_eq!(polys[0].len(), 4);
            assert_eq!(polys[1].len(), 3);
            assert_eq!(polys[0][2], Point2::new(2.0, 2.0));
        }

        #[test]
        fn curves_are_rejected() {
            assert!(matches!(
                parse_data_string("M0,0 C1,1 2,2 3,3Z"),
                Err(IoError::MalformedPath(_))
            ));
            assert!(parse_data_string("M0,0 l1,1Z").is_err());
        }

        #[test]
        fn drawing_resumes_after_close() {
            let polys = parse_data_string("M0,0 L1,0 1,1Z L2,2 3,3Z").unwrap();
            assert_eq!(polys.len(), 2);
            assert_eq!(polys[1], vec![Point2::new(0.0, 0.0), Point2::new(2.0, 2.0), Point2::new(3.0, 3.0)]);

            let polys = parse_data_string("M4,4 H6 V6Z V8 H2Z").unwrap();
            assert_eq!(polys[1], vec![Point2::new(4.0, 4.0), Point2::new(4.0, 8.0), Point2::new(2.0, 8.0)]);

            assert!(parse_data_string("L1,1 2,2Z").is_err());
        }

        #[test]
        fn exponents_are_numbers() {
            let polys = parse_data_string("M1e1,0 H2E1 V1e1Z").unwrap();
            assert_eq!(polys[0][1], Point2::new(20.0, 0.0));
        }
    }
}
