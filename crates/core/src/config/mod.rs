use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::Result;

/// Top-level configuration structure for the application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub diagram: DiagramConfig,
    pub banner: BannerConfig,
    /// Dataset to load instead of the built-in catalog.
    pub dataset: Option<PathBuf>,
}

impl AppConfig {
    /// Reads a JSON configuration file. Missing fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

/// Dimensions of the circular diagram, in SVG user units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    /// Rendered width and height of the document.
    pub size: f32,
    /// Half the side of the square view box, centred on the origin.
    pub view_extent: f32,
    pub radius: f32,
    /// Radius of the hole in the ring.
    pub inner_radius: f32,
    /// Distance of foot labels beyond `radius`.
    pub label_gap: f32,
    pub marker_radius: f32,
    pub unit_font_size: f32,
    pub label_font_size: f32,
    /// Fill opacity of unit segments.
    pub segment_opacity: f32,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            size: 450.0,
            view_extent: 300.0,
            radius: 160.0,
            inner_radius: 80.0,
            label_gap: 40.0,
            marker_radius: 240.0,
            unit_font_size: 20.0,
            label_font_size: 18.0,
            segment_opacity: 0.3,
        }
    }
}

/// Layout and timing of the linear banner transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    /// Width of one atomic unit.
    pub unit_width: u32,
    /// Groupings fade out before the strip slides.
    pub disintegrate_ms: u64,
    /// Start of the reformation, once the slide has finished.
    pub reform_at_ms: u64,
    /// Delay between successive foot boxes appearing.
    pub reveal_step_ms: u64,
    /// End of the transition before the per-box delays are added.
    pub settle_at_ms: u64,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            unit_width: 90,
            disintegrate_ms: 300,
            reform_at_ms: 1100,
            reveal_step_ms: 150,
            settle_at_ms: 1600,
        }
    }
}
