use serde::{Deserialize, Serialize};

use gravegrid::io::ext_repr::ExtGraveSpec;
use gravegrid::io::svg::svg_util::SvgDrawOptions;
use gravegrid::supply::SyntheticConfig;

/// Configuration of a gravegrid run
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct GraveGridConfig {
    /// Dimensions, spacing and (clockwise) rotation of the graves
    pub grave: ExtGraveSpec,
    /// Clockwise rotation of the compass indicator in the SVG, in degrees
    pub indicator_angle: f64,
    /// Settings of the synthetic yard, used when no input file is provided
    #[serde(default)]
    pub synthetic: SyntheticConfig,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for GraveGridConfig {
    fn default() -> Self {
        Self {
            grave: ExtGraveSpec {
                width: 1.0,
                height: 2.0,
                spacing: 0.5,
                rotation: -60.0,
            },
            indicator_angle: 30.0,
            synthetic: SyntheticConfig::default(),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
