//! Canonical end-to-end views built from the pipeline stages.
use super::pipeline::RenderPipeline;
use super::quantize::{gray, signed_rgb, unit_rgb, DensityWindow, BLACK, WHITE};
use crate::graph::SuperpixelGraph;
use crate::image::Canvas;
use crate::segmentation::{ColorPayload, NormalPayload, Segmentation};

/// Per-pixel density heatmap over `seg.weights`, default window, no borders.
pub fn plot_density<T>(seg: &Segmentation<T>) -> Canvas {
    plot_density_with(seg, DensityWindow::default())
}

pub fn plot_density_with<T>(seg: &Segmentation<T>, window: DensityWindow) -> Canvas {
    RenderPipeline::new(seg)
        .with_dense_color(&seg.weights, move |d: f32| gray(window.to_byte(d)))
        .render()
}

/// Superpixels filled with their mean color, outlined in black.
pub fn plot_color<T: ColorPayload + Sync>(seg: &Segmentation<T>) -> Canvas {
    RenderPipeline::new(seg)
        .with_superpixel_color(|sp| unit_rgb(sp.payload.color()))
        .with_border(BLACK)
        .render()
}

/// Superpixels filled with their mean normal mapped from `[-1, 1]`, outlined
/// in black.
pub fn plot_normals<T: NormalPayload + Sync>(seg: &Segmentation<T>) -> Canvas {
    RenderPipeline::new(seg)
        .with_superpixel_color(|sp| signed_rgb(sp.payload.normal()))
        .with_border(BLACK)
        .render()
}

/// Adjacency graph over a black background: white edges, colored markers.
pub fn plot_graph<T: ColorPayload>(seg: &Segmentation<T>, graph: &SuperpixelGraph) -> Canvas {
    RenderPipeline::new(seg).with_graph(graph, WHITE).render()
}
