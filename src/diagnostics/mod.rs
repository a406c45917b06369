//! Serializable reports emitted by the render tool.
//!
//! `TimingBreakdown` is filled by `RenderPipeline::render_traced`;
//! `RenderReport` bundles the timings of every view with a short description
//! of the input segmentation.

pub mod report;
pub mod timing;

pub use report::{RenderReport, SegmentationSummary, ViewReport};
pub use timing::{StageTiming, TimingBreakdown};
