//! Command line front end

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use laserbox_camtools::{BoxParameters, LaserBoxMaker};
use laserbox_settings::{Config, DefaultsSettings};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug, Clone)]
#[command(name = "laserbox")]
#[command(version, about = "Create SVG cutting layouts for finger-jointed boxes", long_about = None)]
#[command(disable_help_flag = true, allow_negative_numbers = true)]
pub struct Cli {
    /// inner width of the base area in mm
    #[arg(short, long, default_value_t = 0.0)]
    pub width: f64,

    /// inner height of the base area in mm
    #[arg(short = 'h', long, default_value_t = 0.0)]
    pub height: f64,

    /// inner depth of the box/height of the walls in mm
    #[arg(short, long, default_value_t = 0.0)]
    pub depth: f64,

    /// thickness of material in mm [default: 3]
    #[arg(short, long)]
    pub material: Option<f64>,

    /// length of teeth in mm [default: 10]
    #[arg(short, long)]
    pub teeth: Option<f64>,

    /// also lay out a lid
    #[arg(short, long, overrides_with = "no_lid")]
    pub lid: bool,

    /// leave out the lid even if the configuration asks for one
    #[arg(long, overrides_with = "lid")]
    pub no_lid: bool,

    /// the output file [default: laserbox.svg]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// configuration file (JSON or TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

impl Cli {
    /// Box parameters, filling unset flags from `defaults`.
    pub fn parameters(&self, defaults: &DefaultsSettings) -> BoxParameters {
        BoxParameters {
            width: self.width,
            height: self.height,
            depth: self.depth,
            material: self.material.unwrap_or(defaults.material),
            tooth_length: self.teeth.unwrap_or(defaults.teeth),
            lid: self.lid || (defaults.lid && !self.no_lid),
        }
    }

    pub fn output_path(&self, defaults: &DefaultsSettings) -> PathBuf {
        self.output.clone().unwrap_or_else(|| defaults.output.clone())
    }
}

/// Generate the drawing and write it to the output file.
///
/// Returns the path written.
pub fn run(cli: &Cli) -> Result<PathBuf> {
    let config =
        Config::load_or_default(cli.config.as_deref()).context("failed to load configuration")?;

    let params = cli.parameters(&config.defaults);
    let document = LaserBoxMaker::new(params)?.generate()?;

    let output = cli.output_path(&config.defaults);
    std::fs::write(&output, document.to_svg())
        .with_context(|| format!("failed to write {}", output.display()))?;

    let (width, height) = document.compute_extent();
    info!(
        "Wrote {} panels ({} x {}) to {}",
        document.len(),
        width,
        height,
        output.display()
    );
    Ok(output)
}
