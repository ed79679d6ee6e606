use std::num::IntErrorKind;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::foundation::{
    core::{Point, PointSet},
    error::{PlotError, PlotResult},
};

/// Structural punctuation of the dump grammar: `(`, `)`, `,`, `|` and the literal `nil`.
///
/// Every match is replaced with a single space, which throws away all nesting. A dump
/// holding several image layers therefore decodes to the union of their points.
static PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[(),|]|nil").expect("punctuation pattern is valid"));

/// Extract the integer tokens of a dump, in order.
///
/// Values are held as `i128`, wide enough for any coordinate the interpreter prints.
/// Blank input is an error. Input made only of punctuation and `nil` is a well-formed
/// empty value and yields no tokens.
pub fn tokenize(raw: &str) -> PlotResult<Vec<i128>> {
    if raw.trim().is_empty() {
        return Err(PlotError::decode("no integer tokens in blank input"));
    }

    let flat = PUNCTUATION.replace_all(raw, " ");
    flat.split_whitespace()
        .enumerate()
        .map(|(i, tok)| {
            tok.parse::<i128>().map_err(|e| {
                let n = i + 1;
                match e.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => PlotError::decode(
                        format!("token #{n} '{tok}' is out of range for a 128-bit coordinate"),
                    ),
                    _ => PlotError::decode(format!("token #{n} '{tok}' is not an integer: {e}")),
                }
            })
        })
        .collect()
}

/// Decode a dump into coordinate pairs.
///
/// Tokens are consumed two at a time; the first of each pair becomes `x`, the second
/// `y`. An odd token count cannot be paired and is rejected rather than truncated.
#[tracing::instrument(level = "debug", skip(raw), fields(len = raw.len()))]
pub fn decode(raw: &str) -> PlotResult<PointSet> {
    let tokens = tokenize(raw)?;
    if tokens.len() % 2 != 0 {
        return Err(PlotError::decode(format!(
            "odd number of integer tokens ({}); coordinates come in pairs",
            tokens.len()
        )));
    }

    let points: PointSet = tokens
        .chunks_exact(2)
        .map(|pair| Point::new(pair[0], pair[1]))
        .collect();
    tracing::debug!(tokens = tokens.len(), points = points.len(), "decoded dump");
    Ok(points)
}

#[cfg(test)]
#[path = "../tests/unit/decode.rs"]
mod tests;
