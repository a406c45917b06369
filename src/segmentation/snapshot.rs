use super::accumulator::SegmentAccumulator;
use super::attribute::WeightedAttribute;
use super::payload::Payload;
use super::superpixel::Superpixel;
use crate::image::{ImageF32, IndexImage};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Index value of a pixel that belongs to no superpixel.
pub const UNASSIGNED: i32 = -1;

/// Result of a superpixel segmentation.
///
/// `indices` maps every pixel to a position in `superpixels` or to a negative
/// sentinel; `weights` holds the per-pixel assignment weight. Both planes share
/// the source image dimensions. Rendering treats the snapshot as read-only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segmentation<T> {
    pub superpixels: Vec<Superpixel<T>>,
    pub indices: IndexImage,
    pub weights: ImageF32,
}

impl<T> Segmentation<T> {
    #[inline]
    pub fn width(&self) -> usize {
        self.indices.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.indices.h
    }

    /// Superpixel owning pixel `(x, y)`, or `None` for unassigned pixels.
    ///
    /// Panics if the stored index lies outside `superpixels`.
    pub fn superpixel_at(&self, x: usize, y: usize) -> Option<&Superpixel<T>> {
        let sid = self.indices.get(x, y);
        (sid >= 0).then(|| &self.superpixels[sid as usize])
    }

    /// Number of pixels carrying a superpixel index.
    pub fn assigned_pixel_count(&self) -> usize {
        self.indices.data.iter().filter(|&&sid| sid >= 0).count()
    }

    /// Check the snapshot invariants: equal plane dimensions and every
    /// non-sentinel index addressing an existing superpixel.
    pub fn validate(&self) -> Result<(), String> {
        if !self.indices.same_dims(&self.weights) {
            return Err(format!(
                "Index plane is {}x{} but weight plane is {}x{}",
                self.indices.w, self.indices.h, self.weights.w, self.weights.h
            ));
        }
        if self.indices.data.len() != self.indices.len()
            || self.weights.data.len() != self.weights.len()
        {
            return Err("Pixel plane storage does not match its dimensions".to_string());
        }
        let n = self.superpixels.len();
        if let Some((i, &sid)) = self
            .indices
            .data
            .iter()
            .enumerate()
            .find(|(_, &sid)| sid >= 0 && sid as usize >= n)
        {
            return Err(format!(
                "Pixel ({}, {}) references superpixel {sid} but only {n} exist",
                i % self.indices.w.max(1),
                i / self.indices.w.max(1)
            ));
        }
        Ok(())
    }
}

impl<T: Payload> Segmentation<T> {
    /// Summarize labelled pixel samples into a segmentation snapshot.
    ///
    /// Every distinct non-negative label is accumulated into one superpixel
    /// (weighted mean, raw count kept); superpixels are numbered by first
    /// appearance in row-major order. `weights` receives each sample's count.
    pub fn from_labels(
        labels: &IndexImage,
        samples: &[WeightedAttribute<T>],
    ) -> Result<Self, String> {
        if samples.len() != labels.len() {
            return Err(format!(
                "Got {} samples for a {}x{} label plane",
                samples.len(),
                labels.w,
                labels.h
            ));
        }

        let mut remap: HashMap<i32, usize> = HashMap::new();
        let mut accumulators: Vec<SegmentAccumulator<T>> = Vec::new();
        let mut indices = IndexImage::filled(labels.w, labels.h, UNASSIGNED);
        let mut weights = ImageF32::new(labels.w, labels.h);

        for (i, (&label, sample)) in labels.data.iter().zip(samples).enumerate() {
            weights[i] = sample.count;
            if label < 0 {
                continue;
            }
            let sid = *remap.entry(label).or_insert_with(|| {
                accumulators.push(SegmentAccumulator::new());
                accumulators.len() - 1
            });
            accumulators[sid].add(sample);
            indices[i] = sid as i32;
        }

        let superpixels = accumulators
            .iter()
            .map(|acc| Superpixel::from_attribute(acc.mean()))
            .collect();

        Ok(Self {
            superpixels,
            indices,
            weights,
        })
    }
}
