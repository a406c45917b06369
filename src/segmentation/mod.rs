//! Superpixel segmentation data model and its accumulation algebra.
//!
//! - `WeightedAttribute<T>`: count, position, density and a generic payload,
//!   stored as count-weighted sums. `+=` merges a bundle weighted by its
//!   count; scalar multiplication scales every field including the count.
//! - `SegmentAccumulator<T>`: folds samples into a running sum and reports a
//!   weighted mean that keeps the raw accumulated count.
//! - `Superpixel<T>`: a mean-form bundle plus a radius derived from density
//!   (`r = sqrt(1 / (density * π))`).
//! - `Segmentation<T>`: superpixels plus per-pixel index and weight planes.
//!
//! Notes
//! - Sum form vs mean form matters: `+=` takes mean-form bundles (a unit
//!   pixel or an accumulator's `mean()`, which keeps the raw count) and
//!   weights them by `count`. Merging superpixel means this way equals
//!   accumulating all their pixels at once; feeding back `sum()` does not.
//! - The clustering that produces superpixels lives outside this crate;
//!   `Segmentation::from_labels` only summarizes an existing labelling.

mod accumulator;
mod attribute;
mod payload;
mod snapshot;
mod superpixel;

pub use accumulator::SegmentAccumulator;
pub use attribute::{Pixel, WeightedAttribute};
pub use payload::{ColorPayload, NormalPayload, Payload, PixelData};
pub use snapshot::{Segmentation, UNASSIGNED};
pub use superpixel::{density_to_radius, Superpixel};

#[cfg(test)]
mod tests;
