#![doc = include_str!("../README.md")]

// Public modules
pub mod config;
pub mod diagnostics;
pub mod graph;
pub mod image;
pub mod render;
pub mod segmentation;

// --- High-level re-exports -------------------------------------------------

// Data model.
pub use crate::segmentation::{
    density_to_radius, Payload, PixelData, SegmentAccumulator, Segmentation, Superpixel,
    WeightedAttribute,
};

// Rendering entry points.
pub use crate::graph::SuperpixelGraph;
pub use crate::render::{
    plot_color, plot_density, plot_density_with, plot_graph, plot_normals, RenderPipeline,
};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use superpixel_viz::prelude::*;
///
/// # fn main() {
/// let labels = IndexImage::from_fn(64, 48, |x, y| ((y / 16) * 4 + x / 16) as i32);
/// let samples: Vec<_> = (0..64 * 48)
///     .map(|i| {
///         let (x, y) = ((i % 64) as f32, (i / 64) as f32);
///         let color = Vector3::new(x / 64.0, y / 48.0, 0.5);
///         WeightedAttribute::sample(Vector2::new(x, y), 0.01, PixelData::new(color, Vector3::z()))
///     })
///     .collect();
/// let seg = Segmentation::from_labels(&labels, &samples).unwrap();
///
/// let canvas = plot_color(&seg);
/// println!("rendered {}x{}", canvas.width(), canvas.height());
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{Canvas, Color, ImageF32, IndexImage};
    pub use crate::render::{unit_rgb, DensityWindow, BLACK, MAGENTA, WHITE};
    pub use crate::{
        plot_color, plot_density, plot_graph, plot_normals, PixelData, RenderPipeline,
        Segmentation, SuperpixelGraph, WeightedAttribute,
    };
    pub use nalgebra::{Vector2, Vector3};
}
