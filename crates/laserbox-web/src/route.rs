//! Request path parsing
//!
//! `/svg/{width}/{height}/{depth}/{material}/{teeth}/{lid}` asks for a
//! drawing; every other path gets the index page.

use laserbox_camtools::BoxParameters;
use percent_encoding::percent_decode_str;
use thiserror::Error;

pub const SVG_PREFIX: &str = "/svg/";

/// Reply for a drawing request with the wrong number of segments
pub const USAGE: &str = "width/height/depth/material/teeth/lid";

const FIELDS: [&str; 5] = ["width", "height", "depth", "material", "teeth"];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    #[error("invalid {field} {value:?}: not a number")]
    InvalidNumber { field: &'static str, value: String },

    #[error("invalid lid {0:?}: not a boolean")]
    InvalidFlag(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    /// Drawing request with all six parameters parsed
    Svg(BoxParameters),
    /// Drawing request with the wrong number of segments
    Usage,
    Index,
}

/// Boolean spellings accepted in the lid segment
pub fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Map a request target (path plus optional query) to a route.
///
/// The path is percent-decoded before it is split into segments.
pub fn parse_route(target: &str) -> Result<Route, RouteError> {
    let raw = target.split(['?', '#']).next().unwrap_or_default();
    let path = percent_decode_str(raw)
        .decode_utf8()
        .unwrap_or_else(|_| raw.into());

    let Some(rest) = path.strip_prefix(SVG_PREFIX) else {
        return Ok(Route::Index);
    };

    let segments: Vec<&str> = rest.split('/').collect();
    if segments.len() != FIELDS.len() + 1 {
        return Ok(Route::Usage);
    }

    let mut values = [0.0f64; 5];
    for ((value, field), text) in values.iter_mut().zip(FIELDS).zip(&segments) {
        *value = text.parse().map_err(|_| RouteError::InvalidNumber {
            field,
            value: text.to_string(),
        })?;
    }

    let lid_text = segments[FIELDS.len()];
    let lid = parse_flag(lid_text).ok_or_else(|| RouteError::InvalidFlag(lid_text.to_string()))?;

    let [width, height, depth, material, tooth_length] = values;
    Ok(Route::Svg(BoxParameters {
        width,
        height,
        depth,
        material,
        tooth_length,
        lid,
    }))
}
