//! Staged rendering of a segmentation into an RGB canvas.
//!
//! A render is a fold over an ordered stage list: the canvas starts as a
//! solid background of the segmentation's size and every stage paints into
//! it in turn. Stage order is the caller's insertion order and is never
//! changed; borders and graph overlays go after the fill they decorate.
//!
//! Stages
//! - `DenseStage`: per-pixel color from any same-sized grid (e.g. density).
//! - `SuperpixelStage`: flat fill per superpixel, placeholder for unassigned.
//! - `BorderStage`: outlines pixels whose 4-neighbors carry another index,
//!   clamping neighbors at the last valid row/column.
//! - `GraphStage`: adjacency edges, then one square marker per superpixel.
//!
//! Quantization truncates: `[0, 1] → 255·x`, `[-1, 1] → 255·(x + 1)/2`.

mod pipeline;
pub mod quantize;
mod recipes;
pub mod stages;

pub use pipeline::RenderPipeline;
pub use quantize::{
    gray, signed_rgb, signed_to_byte, unit_rgb, unit_to_byte, DensityWindow, BLACK, MAGENTA,
    WHITE,
};
pub use recipes::{plot_color, plot_density, plot_density_with, plot_graph, plot_normals};
pub use stages::{BorderStage, DenseStage, GraphStage, Stage, SuperpixelStage};
