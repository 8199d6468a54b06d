//! GraphicEQ text parser.
//!
//! The accepted format is a single line of `;`-separated points:
//!
//! ```text
//! # optional comments and blank lines
//! GraphicEQ: 20 -0.7; 21 -0.8; 22 -0.9;
//! ```
//!
//! Only the first line starting with `GraphicEQ:` is read. Malformed points
//! are skipped with a warning; the parse only fails when the marker is absent
//! or no point survives.

use thiserror::Error;

use crate::curve::{Curve, MAX_FREQUENCY_HZ, MIN_FREQUENCY_HZ};
use crate::diagnostics::{Diagnostics, Warning};

/// Literal prefix of the curve line.
pub const GRAPHIC_EQ_MARKER: &str = "GraphicEQ:";

/// Line prefixes treated as comments.
const COMMENT_PREFIXES: [&str; 2] = ["#", "//"];

/// Hard parse failures. No curve is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No line starts with `GraphicEQ:`.
    #[error("'GraphicEQ:' line not found (check the file format)")]
    MissingMarker,

    /// The `GraphicEQ:` line held no usable point.
    #[error("line {line}: no valid points found on the GraphicEQ line")]
    NoValidPoints {
        /// 1-based line number of the marker line.
        line: usize,
    },
}

/// Parse GraphicEQ text into a curve, recording skipped points in `diagnostics`.
///
/// # Example
///
/// ```rust
/// use retarget_core::{Diagnostics, parse_graphic_eq};
///
/// let mut diagnostics = Diagnostics::new();
/// let curve = parse_graphic_eq("GraphicEQ: 100 abc; 200 1.0", &mut diagnostics).unwrap();
/// assert_eq!(curve.get(200), Some(1.0));
/// assert_eq!(diagnostics.len(), 1);
/// ```
pub fn parse_graphic_eq(text: &str, diagnostics: &mut Diagnostics) -> Result<Curve, ParseError> {
    let text = text.replace("\r\n", "\n");

    for (index, raw) in text.split('\n').enumerate() {
        let line = raw.trim();
        if line.is_empty() || COMMENT_PREFIXES.iter().any(|p| line.starts_with(p)) {
            continue;
        }
        if let Some(points) = line.strip_prefix(GRAPHIC_EQ_MARKER) {
            return parse_points(points.trim(), index + 1, diagnostics);
        }
    }

    Err(ParseError::MissingMarker)
}

/// Parse GraphicEQ text, returning the warnings alongside the curve.
pub fn parse(text: &str) -> Result<(Curve, Diagnostics), ParseError> {
    let mut diagnostics = Diagnostics::new();
    let curve = parse_graphic_eq(text, &mut diagnostics)?;
    Ok((curve, diagnostics))
}

fn parse_points(
    points: &str,
    line: usize,
    diagnostics: &mut Diagnostics,
) -> Result<Curve, ParseError> {
    let tokens: Vec<&str> = points.split(';').collect();
    let last = tokens.len() - 1;
    let mut curve = Curve::new();

    for (index, token) in tokens.iter().enumerate() {
        let token = token.trim();
        if token.is_empty() {
            // A dangling trailing separator is normal output from AutoEQ.
            if index != last {
                diagnostics.push(Warning::EmptyToken { line, index });
            }
            continue;
        }

        match parse_point(token, line) {
            Ok((freq, gain)) => {
                if curve.insert(freq, gain).is_some() {
                    tracing::debug!(freq, "duplicate frequency, keeping the later gain");
                }
            }
            Err(warning) => diagnostics.push(warning),
        }
    }

    if curve.is_empty() {
        return Err(ParseError::NoValidPoints { line });
    }

    tracing::debug!(points = curve.len(), line, "parsed GraphicEQ line");
    Ok(curve)
}

fn parse_point(token: &str, line: usize) -> Result<(u32, f64), Warning> {
    let fields: Vec<&str> = token.split_whitespace().collect();
    let [freq, gain] = fields.as_slice() else {
        return Err(Warning::MalformedToken {
            line,
            token: token.to_string(),
            fields: fields.len(),
        });
    };

    let (Ok(freq), Ok(gain)) = (freq.parse::<i64>(), gain.parse::<f64>()) else {
        return Err(Warning::InvalidNumber {
            line,
            token: token.to_string(),
        });
    };

    if !gain.is_finite() {
        return Err(Warning::NonFiniteGain { line, freq });
    }

    match u32::try_from(freq) {
        Ok(f) if (MIN_FREQUENCY_HZ..=MAX_FREQUENCY_HZ).contains(&f) => Ok((f, gain)),
        _ => Err(Warning::FrequencyOutOfRange { line, freq }),
    }
}
