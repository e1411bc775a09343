// SPDX-License-Identifier: MPL-2.0
//! Parsing of free-text numeric ranges.
//!
//! Upstream data mixes several shapes in the same field:
//! `"10 - 13 years"`, `"12 years"`, `"58 - 66"`, `"61"`, and the odd
//! `"10-12"` without spaces. Trailing unit text is stripped before the
//! range delimiter is looked for.

/// Characters accepted as range delimiters (hyphen and en dash).
const DELIMITERS: [char; 2] = ['-', '–'];

/// Parses `text` as a single number or a `low - high` range.
///
/// Returns `(low, high)`; a single number is both bounds. Returns `None` when
/// the text contains no parseable number.
#[must_use]
pub fn parse_bounds(text: &str) -> Option<(f64, f64)> {
    let numeric = text
        .trim()
        .trim_end_matches(|c: char| !c.is_ascii_digit())
        .trim();
    if numeric.is_empty() {
        return None;
    }

    let mut parts = numeric.split(DELIMITERS).map(str::trim);
    let low = parts.next()?.parse::<f64>().ok()?;
    let high = match parts.next() {
        Some(part) => part.parse::<f64>().ok()?,
        None => low,
    };
    if parts.next().is_some() || !low.is_finite() || !high.is_finite() {
        return None;
    }
    Some((low, high))
}

/// Average of the bounds parsed by [`parse_bounds`].
#[must_use]
pub fn parse_average(text: &str) -> Option<f64> {
    parse_bounds(text).map(|(low, high)| (low + high) / 2.0)
}
