//! Tabbed Box Maker
//!
//! Generates the cutting layout of an open finger-jointed box (base plus four
//! walls) and, optionally, a lid that slips over it. Every edge is tiled with
//! teeth of a fixed length; the last tooth shrinks instead of leaving a sliver
//! thinner than the material.

mod document;
mod edge;
mod layout;
mod path;
mod types;

pub use document::{Document, STYLE, SVG_NAMESPACE};
pub use edge::{emit, end_phase, tooth_count, MAX_TEETH_PER_EDGE};
pub use layout::PanelLayouter;
pub use path::{reversed, Contour, PathBuilder};
pub use types::{Assembly, EdgeRun, EdgeSpec, Footprint, Panel, PanelRole, Phase, Segment};

use crate::error::{CamToolResult, ParameterError, ParameterResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Largest accepted value for any box dimension, material or tooth length, in mm
pub const MAX_DIMENSION: f64 = 100_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxParameters {
    /// Inner width in mm
    pub width: f64,
    /// Inner height in mm
    pub height: f64,
    /// Inner depth in mm
    pub depth: f64,
    /// Sheet thickness in mm
    pub material: f64,
    /// Nominal tooth length in mm
    pub tooth_length: f64,
    /// Also lay out a lid
    pub lid: bool,
}

impl Default for BoxParameters {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            depth: 0.0,
            material: 3.0,
            tooth_length: 10.0,
            lid: false,
        }
    }
}

impl BoxParameters {
    pub fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
            ..Self::default()
        }
    }

    /// Negative values describe the same box; keep magnitudes only.
    pub fn normalized(&self) -> Self {
        Self {
            width: self.width.abs(),
            height: self.height.abs(),
            depth: self.depth.abs(),
            material: self.material.abs(),
            tooth_length: self.tooth_length.abs(),
            lid: self.lid,
        }
    }

    pub fn validate(&self) -> ParameterResult<()> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("depth", self.depth),
            ("material", self.material),
            ("tooth_length", self.tooth_length),
        ] {
            if !value.is_finite() {
                return Err(ParameterError::invalid(name, "must be a finite number"));
            }
            if value > MAX_DIMENSION {
                return Err(ParameterError::invalid(
                    name,
                    format!("must not exceed {} mm", MAX_DIMENSION),
                ));
            }
        }

        if self.material <= 0.0 {
            return Err(ParameterError::invalid(
                "material",
                "must be greater than zero",
            ));
        }

        if self.tooth_length <= 0.0 {
            return Err(ParameterError::invalid(
                "tooth_length",
                "must be greater than zero",
            ));
        }

        if self.tooth_length < self.material {
            return Err(ParameterError::Incompatible(format!(
                "tooth length {} is shorter than material thickness {}",
                self.tooth_length, self.material
            )));
        }

        Ok(())
    }

    /// Outer dimensions of the box itself
    pub fn box_footprint(&self) -> Footprint {
        Footprint::for_box(self.width, self.height, self.depth, self.material)
    }

    /// Box footprint, followed by the lid's when one is requested
    pub fn footprints(&self) -> Vec<Footprint> {
        let outer = self.box_footprint();
        if self.lid {
            vec![outer, outer.lid()]
        } else {
            vec![outer]
        }
    }
}

pub struct LaserBoxMaker {
    params: BoxParameters,
}

impl LaserBoxMaker {
    /// Normalizes signs and checks the parameters.
    pub fn new(params: BoxParameters) -> CamToolResult<Self> {
        let params = params.normalized();
        params.validate()?;
        Ok(Self { params })
    }

    /// Lay out all panels into a fresh document.
    pub fn generate(&self) -> CamToolResult<Document> {
        let mut document = Document::new();

        for footprint in self.params.footprints() {
            let layouter = PanelLayouter::new(footprint, self.params.tooth_length);
            for contour in layouter.layout()? {
                document.add(contour);
            }
            document.add_footprint(footprint);
        }

        let (width, height) = document.compute_extent();
        debug!(
            "Generated {} panels for {}x{}x{} box (material {}, teeth {}, lid {}) on {} x {} canvas",
            document.len(),
            self.params.width,
            self.params.height,
            self.params.depth,
            self.params.material,
            self.params.tooth_length,
            self.params.lid,
            width,
            height
        );

        Ok(document)
    }
}

/// Generate the SVG layout for a box.
///
/// Negative values are treated as their magnitude. Each call builds its own
/// document, so calls may run concurrently.
pub fn generate(
    width: f64,
    height: f64,
    depth: f64,
    material: f64,
    tooth_length: f64,
    lid: bool,
) -> CamToolResult<String> {
    let params = BoxParameters {
        width,
        height,
        depth,
        material,
        tooth_length,
        lid,
    };
    Ok(LaserBoxMaker::new(params)?.generate()?.to_svg())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CamToolError;

    #[test]
    fn test_defaults() {
        let params = BoxParameters::new(60.0, 95.0, 33.5);
        assert_eq!(params.material, 3.0);
        assert_eq!(params.tooth_length, 10.0);
        assert!(!params.lid);
    }

    #[test]
    fn test_normalized() {
        let params = BoxParameters {
            width: -60.0,
            height: 95.0,
            depth: -33.5,
            material: -3.5,
            tooth_length: -10.0,
            lid: true,
        }
        .normalized();
        assert_eq!(params.width, 60.0);
        assert_eq!(params.depth, 33.5);
        assert_eq!(params.material, 3.5);
        assert_eq!(params.tooth_length, 10.0);
        assert!(params.lid);
    }

    #[test]
    fn test_validation() {
        let mut params = BoxParameters::new(10.0, 10.0, 10.0);
        assert!(params.validate().is_ok());

        params.material = 0.0;
        assert!(matches!(
            params.validate(),
            Err(ParameterError::InvalidValue { .. })
        ));

        params.material = 3.0;
        params.tooth_length = 0.0;
        assert!(params.validate().is_err());

        params.tooth_length = 2.0;
        assert!(matches!(
            params.validate(),
            Err(ParameterError::Incompatible(_))
        ));

        params.tooth_length = 10.0;
        params.depth = f64::NAN;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_maker_rejects_zero_teeth() {
        let params = BoxParameters {
            tooth_length: -0.0,
            ..BoxParameters::new(10.0, 10.0, 10.0)
        };
        assert!(matches!(
            LaserBoxMaker::new(params),
            Err(CamToolError::Parameter(_))
        ));
    }

    #[test]
    fn test_generate_document() {
        let maker = LaserBoxMaker::new(BoxParameters::new(60.0, 95.0, 33.5)).unwrap();
        let doc = maker.generate().unwrap();
        assert_eq!(doc.len(), 5);
        assert_eq!(doc.footprints().len(), 1);
    }

    #[test]
    fn test_footprints_with_lid() {
        let params = BoxParameters {
            lid: true,
            ..BoxParameters::new(60.0, 95.0, 33.5)
        };
        let footprints = params.footprints();
        assert_eq!(footprints.len(), 2);
        assert_eq!(footprints[1].assembly, Assembly::Lid);
    }
}
