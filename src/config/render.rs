use crate::render::DensityWindow;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct RenderToolConfig {
    /// Segmentation snapshot (JSON) to render.
    pub input: PathBuf,
    #[serde(default)]
    pub colors: ColorConfig,
    #[serde(default)]
    pub density: DensityWindow,
    pub output: RenderOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub background: [u8; 3],
    /// Superpixel outline color.
    pub border: [u8; 3],
    /// Fill for pixels without a superpixel.
    pub invalid: [u8; 3],
    /// Adjacency edge color in the graph view.
    pub graph_edge: [u8; 3],
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: [0, 0, 0],
            border: [0, 0, 0],
            invalid: [255, 0, 255],
            graph_edge: [255, 255, 255],
        }
    }
}

/// Output paths; a view is rendered only when its path is set.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RenderOutputConfig {
    pub density_image: Option<PathBuf>,
    pub color_image: Option<PathBuf>,
    pub normals_image: Option<PathBuf>,
    pub graph_image: Option<PathBuf>,
    pub report_json: Option<PathBuf>,
}

impl RenderOutputConfig {
    pub fn is_empty(&self) -> bool {
        self.density_image.is_none()
            && self.color_image.is_none()
            && self.normals_image.is_none()
            && self.graph_image.is_none()
            && self.report_json.is_none()
    }
}

pub fn load_config(path: &Path) -> Result<RenderToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(data: &str) -> Result<RenderToolConfig, String> {
    serde_json::from_str(data).map_err(|e| e.to_string())
}
