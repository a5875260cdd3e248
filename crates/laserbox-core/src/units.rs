//! Unit formatting utilities
//!
//! All drawings are laid out in millimeters. Lengths inside path data are
//! written without a unit; canvas dimensions carry an explicit suffix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit suffix for dimension strings
pub const UNIT_LABEL: &str = "mm";

/// Decimal places kept when writing a length
const LENGTH_PRECISION: usize = 6;

/// Format length value for path data
///
/// Keeps up to six decimals and trims trailing zeros, so `10.0` becomes `10`
/// and `3.25` stays `3.25`. Negative zero is written as `0`.
pub fn format_length(value_mm: f64) -> String {
    let text = format!("{:.*}", LENGTH_PRECISION, value_mm);
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text.as_str()
    };

    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

/// A whole number of millimeters, displayed with its unit (`"149mm"`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Millimeters(pub u32);

impl Millimeters {
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Millimeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, UNIT_LABEL)
    }
}
