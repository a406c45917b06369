use super::quantize::{BLACK, MAGENTA};
use super::stages::{BorderStage, DenseStage, GraphStage, Stage, SuperpixelStage};
use crate::diagnostics::TimingBreakdown;
use crate::graph::SuperpixelGraph;
use crate::image::{Canvas, Color, Grid};
use crate::segmentation::{ColorPayload, Segmentation, Superpixel};
use log::debug;
use std::time::Instant;

/// Ordered list of paint stages over one segmentation.
///
/// `render` allocates a canvas of the segmentation's size filled with the
/// background color and applies the stages strictly in insertion order.
/// The segmentation is never modified.
///
/// ```no_run
/// use superpixel_viz::prelude::*;
///
/// # fn demo(seg: &Segmentation<PixelData>) {
/// let canvas = RenderPipeline::new(seg)
///     .with_superpixel_color(|sp| unit_rgb(sp.payload.color))
///     .with_border(BLACK)
///     .render();
/// # let _ = canvas;
/// # }
/// ```
pub struct RenderPipeline<'a, T> {
    seg: &'a Segmentation<T>,
    background: Color,
    stages: Vec<Box<dyn Stage<T> + 'a>>,
}

impl<'a, T> RenderPipeline<'a, T> {
    pub fn new(seg: &'a Segmentation<T>) -> Self {
        Self {
            seg,
            background: BLACK,
            stages: Vec::new(),
        }
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Append an arbitrary stage.
    pub fn with_stage(mut self, stage: impl Stage<T> + 'a) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Color every pixel from `source`, which must match the segmentation size.
    pub fn with_dense_color<S, F>(self, source: &'a Grid<S>, color: F) -> Self
    where
        S: Copy + Sync + 'a,
        F: Fn(S) -> Color + Sync + 'a,
    {
        self.with_stage(DenseStage { source, color })
    }

    /// Outline superpixel boundaries.
    pub fn with_border(self, color: Color) -> Self {
        self.with_stage(BorderStage { color })
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    pub fn render(self) -> Canvas {
        self.render_traced().0
    }

    /// Render and report per-stage wall time.
    pub fn render_traced(self) -> (Canvas, TimingBreakdown) {
        let total_start = Instant::now();
        let mut canvas = Canvas::from_pixel(
            self.seg.width() as u32,
            self.seg.height() as u32,
            self.background,
        );
        let mut timing = TimingBreakdown::default();
        for stage in &self.stages {
            let start = Instant::now();
            stage.paint(&mut canvas, self.seg);
            let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
            debug!(
                "RenderPipeline stage={} {}x{} elapsed_ms={:.3}",
                stage.name(),
                canvas.width(),
                canvas.height(),
                elapsed_ms
            );
            timing.push(stage.name(), elapsed_ms);
        }
        timing.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        (canvas, timing)
    }
}

impl<'a, T: Sync + 'a> RenderPipeline<'a, T> {
    /// Flat-fill superpixels; unassigned pixels become magenta.
    pub fn with_superpixel_color<F>(self, color: F) -> Self
    where
        F: Fn(&Superpixel<T>) -> Color + Sync + 'a,
    {
        self.with_superpixel_color_or(color, MAGENTA)
    }

    pub fn with_superpixel_color_or<F>(self, color: F, invalid: Color) -> Self
    where
        F: Fn(&Superpixel<T>) -> Color + Sync + 'a,
    {
        self.with_stage(SuperpixelStage { color, invalid })
    }
}

impl<'a, T: ColorPayload + 'a> RenderPipeline<'a, T> {
    /// Overlay the adjacency graph with edges in `color`.
    pub fn with_graph(self, graph: &'a SuperpixelGraph, color: Color) -> Self {
        self.with_stage(GraphStage { graph, color })
    }
}
