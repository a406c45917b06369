use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};
use std::ops::{AddAssign, Mul};

/// Per-sample data carried through accumulation.
///
/// A payload needs an additive identity, in-place addition and scaling by a
/// scalar weight; nothing else is assumed about it.
pub trait Payload: Clone + AddAssign + Mul<f32, Output = Self> {
    fn zero() -> Self;
}

/// Payloads carrying an RGB color with components in `[0, 1]`.
pub trait ColorPayload {
    fn color(&self) -> Vector3<f32>;
}

/// Payloads carrying a surface normal with components in `[-1, 1]`.
pub trait NormalPayload {
    fn normal(&self) -> Vector3<f32>;
}

impl Payload for f32 {
    #[inline]
    fn zero() -> Self {
        0.0
    }
}

impl Payload for Vector2<f32> {
    #[inline]
    fn zero() -> Self {
        Vector2::zeros()
    }
}

impl Payload for Vector3<f32> {
    #[inline]
    fn zero() -> Self {
        Vector3::zeros()
    }
}

impl ColorPayload for Vector3<f32> {
    #[inline]
    fn color(&self) -> Vector3<f32> {
        *self
    }
}

/// Color plus surface normal, the payload produced for RGB-D input.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PixelData {
    pub color: Vector3<f32>,
    pub normal: Vector3<f32>,
}

impl PixelData {
    pub fn new(color: Vector3<f32>, normal: Vector3<f32>) -> Self {
        Self { color, normal }
    }
}

impl Default for PixelData {
    fn default() -> Self {
        <Self as Payload>::zero()
    }
}

impl AddAssign for PixelData {
    fn add_assign(&mut self, rhs: Self) {
        self.color += rhs.color;
        self.normal += rhs.normal;
    }
}

impl Mul<f32> for PixelData {
    type Output = PixelData;

    fn mul(self, s: f32) -> PixelData {
        PixelData {
            color: self.color * s,
            normal: self.normal * s,
        }
    }
}

impl Payload for PixelData {
    fn zero() -> Self {
        Self {
            color: Vector3::zeros(),
            normal: Vector3::zeros(),
        }
    }
}

impl ColorPayload for PixelData {
    #[inline]
    fn color(&self) -> Vector3<f32> {
        self.color
    }
}

impl NormalPayload for PixelData {
    #[inline]
    fn normal(&self) -> Vector3<f32> {
        self.normal
    }
}
