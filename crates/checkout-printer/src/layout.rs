//! # Tape Layout
//!
//! A tape line is a left-aligned label and a right-aligned value separated
//! by plain spaces:
//!
//! ```text
//! |<──────────────────── columns ────────────────────>|
//! |Toothpaste                                     1.50|
//! |label     ·········· padding ···········      value|
//! ```
//!
//! Widths are counted in Unicode scalar values. When label and value
//! together are wider than the tape the padding is zero and the line
//! overflows; [`OverflowPolicy`] decides whether that is acceptable.

use serde::{Deserialize, Serialize};

use crate::error::{PrinterError, PrinterResult};

/// Line terminator for every tape line.
pub const LINE_END: char = '\n';

// =============================================================================
// Overflow Policy
// =============================================================================

/// What to do with a label/value pair wider than the tape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Print label and value back to back; the line is wider than the tape.
    #[default]
    Overflow,

    /// Fail the whole receipt with [`PrinterError::LineTooWide`].
    Reject,
}

impl std::fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverflowPolicy::Overflow => write!(f, "overflow"),
            OverflowPolicy::Reject => write!(f, "reject"),
        }
    }
}

impl std::str::FromStr for OverflowPolicy {
    type Err = PrinterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "overflow" | "allow" | "unpadded" => Ok(OverflowPolicy::Overflow),
            "reject" | "strict" | "error" => Ok(OverflowPolicy::Reject),
            other => Err(PrinterError::UnknownOverflowPolicy(other.to_string())),
        }
    }
}

// =============================================================================
// Line Pair
// =============================================================================

/// Number of characters the text occupies on the tape.
#[inline]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Spaces between label and value; zero when they do not fit.
pub fn padding(label: &str, value: &str, columns: usize) -> usize {
    columns.saturating_sub(display_width(label) + display_width(value))
}

/// Returns true when label and value fit on one tape line.
pub fn fits(label: &str, value: &str, columns: usize) -> bool {
    display_width(label) + display_width(value) <= columns
}

/// Builds `label`, padding spaces, `value` and the line terminator.
///
/// ## Example
/// ```rust
/// use checkout_printer::layout::line_pair;
///
/// assert_eq!(line_pair("Total: ", "1.50", 12), "Total:  1.50\n");
/// // Too wide: no padding, line overflows.
/// assert_eq!(line_pair("Toothpaste", "1.50", 8), "Toothpaste1.50\n");
/// ```
pub fn line_pair(label: &str, value: &str, columns: usize) -> String {
    let pad = padding(label, value, columns);
    let mut line = String::with_capacity(label.len() + pad + value.len() + 1);
    line.push_str(label);
    line.extend(std::iter::repeat(' ').take(pad));
    line.push_str(value);
    line.push(LINE_END);
    line
}

/// Like [`line_pair`], but applies the overflow policy first.
pub fn checked_line_pair(
    label: &str,
    value: &str,
    columns: usize,
    policy: OverflowPolicy,
) -> PrinterResult<String> {
    if policy == OverflowPolicy::Reject && !fits(label, value, columns) {
        return Err(PrinterError::LineTooWide {
            label: label.to_string(),
            required: display_width(label) + display_width(value),
            columns,
        });
    }

    Ok(line_pair(label, value, columns))
}

// =============================================================================
// Unit Tests
// =============================================================================
