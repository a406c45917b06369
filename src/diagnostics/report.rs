use super::timing::TimingBreakdown;
use serde::Serialize;
use std::path::PathBuf;

/// Shape of the segmentation that was rendered.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentationSummary {
    pub width: usize,
    pub height: usize,
    pub superpixels: usize,
    pub assigned_pixels: usize,
    pub adjacencies: usize,
}

/// One rendered view and where it was written.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewReport {
    pub view: String,
    pub output: PathBuf,
    pub timing: TimingBreakdown,
}

/// Everything the render tool produced in one run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderReport {
    pub segmentation: SegmentationSummary,
    pub views: Vec<ViewReport>,
}
