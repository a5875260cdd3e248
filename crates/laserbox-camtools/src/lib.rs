//! # Laserbox CAM Tools
//!
//! Panel geometry for finger-jointed boxes cut from flat sheet material.
//!
//! ## Pipeline
//!
//! - **Edges**: [`tabbed_box::emit`] tiles one straight edge with teeth and notches
//! - **Outlines**: [`tabbed_box::PathBuilder`] turns edge runs into closed contours
//! - **Panels**: [`tabbed_box::PanelLayouter`] lays out a base and four walls so
//!   that every joint interlocks
//! - **Document**: [`tabbed_box::Document`] collects contours and writes SVG
//!
//! [`generate`] runs the whole pipeline for one box (and optional lid).

pub mod error;
pub mod tabbed_box;

pub use error::{CamToolError, CamToolResult, ParameterError, ParameterResult};
pub use tabbed_box::{generate, BoxParameters, Document, LaserBoxMaker};
