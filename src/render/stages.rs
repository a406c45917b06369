//! Paint stages composed by `RenderPipeline`.
//!
//! Every stage reads the segmentation and writes the canvas in place; none of
//! them reads canvas colors back. Per-pixel stages split the canvas by rows
//! and paint them in parallel.
use super::quantize::unit_rgb;
use crate::graph::SuperpixelGraph;
use crate::image::{Canvas, Color, Grid, ImageView};
use crate::segmentation::{ColorPayload, Segmentation, Superpixel};
use imageproc::drawing::{draw_filled_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;
use log::debug;
use rayon::prelude::*;

/// One step of the render fold: `canvas = stage(canvas, segmentation)`.
pub trait Stage<T> {
    fn name(&self) -> &'static str;
    fn paint(&self, canvas: &mut Canvas, seg: &Segmentation<T>);
}

/// Run `f(y, row_bytes)` for every canvas row in parallel.
fn par_rows(canvas: &mut Canvas, f: impl Fn(usize, &mut [u8]) + Sync) {
    let row_len = canvas.width() as usize * 3;
    if row_len == 0 {
        return;
    }
    canvas
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| f(y, row));
}

#[inline]
fn put(row: &mut [u8], x: usize, color: Color) {
    row[3 * x..3 * x + 3].copy_from_slice(&color.0);
}

/// Colors every pixel from a per-pixel source grid, ignoring superpixels.
pub struct DenseStage<'a, S, F> {
    pub source: &'a Grid<S>,
    pub color: F,
}

impl<'a, T, S, F> Stage<T> for DenseStage<'a, S, F>
where
    S: Copy + Sync,
    F: Fn(S) -> Color + Sync,
{
    fn name(&self) -> &'static str {
        "dense"
    }

    fn paint(&self, canvas: &mut Canvas, _seg: &Segmentation<T>) {
        assert!(
            self.source.w == canvas.width() as usize && self.source.h == canvas.height() as usize,
            "dense source is {}x{} but canvas is {}x{}",
            self.source.w,
            self.source.h,
            canvas.width(),
            canvas.height()
        );
        par_rows(canvas, |y, row| {
            for (x, &v) in self.source.row(y).iter().enumerate() {
                put(row, x, (self.color)(v));
            }
        });
    }
}

/// Flat-fills each superpixel region with `color(superpixel)`.
///
/// Unassigned pixels get `invalid`. An index outside `superpixels` panics.
pub struct SuperpixelStage<F> {
    pub color: F,
    pub invalid: Color,
}

impl<T, F> Stage<T> for SuperpixelStage<F>
where
    T: Sync,
    F: Fn(&Superpixel<T>) -> Color + Sync,
{
    fn name(&self) -> &'static str {
        "superpixel"
    }

    fn paint(&self, canvas: &mut Canvas, seg: &Segmentation<T>) {
        par_rows(canvas, |y, row| {
            for (x, &sid) in seg.indices.row(y).iter().enumerate() {
                let color = if sid >= 0 {
                    (self.color)(&seg.superpixels[sid as usize])
                } else {
                    self.invalid
                };
                put(row, x, color);
            }
        });
    }
}

/// Strokes pixels whose index differs from any 4-neighbor.
///
/// Neighbors outside the image are clamped to the last valid row/column, so
/// edge pixels compare against themselves on that side.
pub struct BorderStage {
    pub color: Color,
}

impl<T> Stage<T> for BorderStage {
    fn name(&self) -> &'static str {
        "border"
    }

    fn paint(&self, canvas: &mut Canvas, seg: &Segmentation<T>) {
        let indices = &seg.indices;
        let (w, h) = (indices.width(), indices.height());
        if w == 0 || h == 0 {
            return;
        }
        par_rows(canvas, |y, row| {
            let up = indices.row(y.saturating_sub(1));
            let mid = indices.row(y);
            let down = indices.row((y + 1).min(h - 1));
            for x in 0..w {
                let xm = x.saturating_sub(1);
                let xp = (x + 1).min(w - 1);
                let i = mid[x];
                if i != mid[xm] || i != mid[xp] || i != up[x] || i != down[x] {
                    put(row, x, self.color);
                }
            }
        });
    }
}

/// Draws adjacency edges between superpixel centers, then a square marker
/// of side `radius` per superpixel in its payload color.
///
/// Centers must be finite and lie within one canvas extent of the canvas;
/// edges touching any other center are skipped. Superpixels without a finite
/// positive radius get no marker.
pub struct GraphStage<'a> {
    pub graph: &'a SuperpixelGraph,
    pub color: Color,
}

impl<'a, T: ColorPayload> Stage<T> for GraphStage<'a> {
    fn name(&self) -> &'static str {
        "graph"
    }

    fn paint(&self, canvas: &mut Canvas, seg: &Segmentation<T>) {
        let extent = 2 * canvas.width().max(canvas.height()).max(1);
        let reach = extent as f32;
        let drawable = |sp: &Superpixel<T>| {
            sp.position
                .iter()
                .all(|v| v.is_finite() && v.abs() <= reach)
        };

        for (a, b) in self.graph.edges() {
            let (pa, pb) = (&seg.superpixels[a], &seg.superpixels[b]);
            if !drawable(pa) || !drawable(pb) {
                continue;
            }
            draw_line_segment_mut(
                canvas,
                (pa.position.x, pa.position.y),
                (pb.position.x, pb.position.y),
                self.color,
            );
        }

        let mut skipped = 0usize;
        for sp in &seg.superpixels {
            let Some(radius) = sp.drawable_radius().filter(|_| drawable(sp)) else {
                skipped += 1;
                continue;
            };
            let side = (radius.round() as u32).clamp(1, extent);
            let x0 = (sp.position.x - 0.5 * side as f32).round() as i32;
            let y0 = (sp.position.y - 0.5 * side as f32).round() as i32;
            draw_filled_rect_mut(
                canvas,
                Rect::at(x0, y0).of_size(side, side),
                unit_rgb(sp.payload.color()),
            );
        }
        if skipped > 0 {
            debug!("GraphStage: skipped {skipped} superpixels without a drawable marker");
        }
    }
}
