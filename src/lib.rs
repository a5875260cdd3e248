//! # Laserbox
//!
//! Generates laser-cutting layouts for finger-jointed boxes made from flat
//! sheet material, written as SVG.
//!
//! ## Architecture
//!
//! Laserbox is organized as a workspace with multiple crates:
//!
//! 1. **laserbox-core** - Points, headings and length formatting
//! 2. **laserbox-camtools** - Edge tiling, panel layout and the SVG document
//! 3. **laserbox-settings** - Configuration files
//! 4. **laserbox-web** - HTTP front end
//! 5. **laserbox** - The `laserbox` and `laserbox-web` binaries

pub mod cli;

pub use laserbox_camtools::{generate, BoxParameters, CamToolError, Document, LaserBoxMaker};
pub use laserbox_settings::Config;

/// Crate version, shown by `--version`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// UTC time the binaries were built
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Install the global tracing subscriber.
///
/// Events go to stderr so they never mix with generated output. `RUST_LOG`
/// adds directives on top of the `info` default. Fails if a subscriber is
/// already installed.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
