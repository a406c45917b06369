use super::payload::Payload;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::ops::{AddAssign, Mul};

/// Accumulable attribute bundle shared by pixels, superpixels and segments.
///
/// Inside an accumulator `position`, `density` and `payload` are
/// count-weighted sums. `+=` multiplies the incoming fields by the incoming
/// `count`, so the incoming bundle must hold per-sample (mean) values: a
/// single pixel with unit count, or the `mean()` of a lower-level
/// accumulator, whose raw count turns the mean back into its sum. A sum-form
/// bundle (e.g. `SegmentAccumulator::sum()`) must never be fed back in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightedAttribute<T> {
    pub count: f32,
    pub position: Vector2<f32>,
    pub density: f32,
    pub payload: T,
}

/// A single image sample is a bundle with unit count.
pub type Pixel<T> = WeightedAttribute<T>;

impl<T: Payload> WeightedAttribute<T> {
    /// Additive identity: zero count, position, density and payload.
    pub fn zero() -> Self {
        Self {
            count: 0.0,
            position: Vector2::zeros(),
            density: 0.0,
            payload: T::zero(),
        }
    }

    /// Single sample with unit count.
    pub fn sample(position: Vector2<f32>, density: f32, payload: T) -> Self {
        Self {
            count: 1.0,
            position,
            density,
            payload,
        }
    }

    /// Scale every field, `count` included.
    pub fn scale(&self, s: f32) -> Self {
        Self {
            count: s * self.count,
            position: self.position * s,
            density: s * self.density,
            payload: self.payload.clone() * s,
        }
    }
}

impl<T: Payload> AddAssign<&WeightedAttribute<T>> for WeightedAttribute<T> {
    fn add_assign(&mut self, x: &WeightedAttribute<T>) {
        self.count += x.count;
        self.position += x.position * x.count;
        self.density += x.count * x.density;
        self.payload += x.payload.clone() * x.count;
    }
}

impl<T: Payload> AddAssign for WeightedAttribute<T> {
    fn add_assign(&mut self, x: WeightedAttribute<T>) {
        *self += &x;
    }
}

impl<T: Payload> Mul<&WeightedAttribute<T>> for f32 {
    type Output = WeightedAttribute<T>;

    fn mul(self, x: &WeightedAttribute<T>) -> WeightedAttribute<T> {
        x.scale(self)
    }
}

impl<T: Payload> Mul<WeightedAttribute<T>> for f32 {
    type Output = WeightedAttribute<T>;

    fn mul(self, x: WeightedAttribute<T>) -> WeightedAttribute<T> {
        x.scale(self)
    }
}
