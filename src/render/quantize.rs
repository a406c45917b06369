//! Float → byte quantization shared by the color recipes.
//!
//! Both mappings truncate (`as u8`), they never round. Out-of-range inputs
//! saturate at 0 or 255 and NaN maps to 0.
use crate::image::Color;
use image::Rgb;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

pub const BLACK: Color = Rgb([0, 0, 0]);
pub const WHITE: Color = Rgb([255, 255, 255]);
/// Placeholder for pixels without a superpixel.
pub const MAGENTA: Color = Rgb([255, 0, 255]);

/// Component in `[0, 1]` → `255 * x`, truncated.
#[inline]
pub fn unit_to_byte(x: f32) -> u8 {
    (255.0 * x) as u8
}

/// Component in `[-1, 1]` → `255 * 0.5 * (x + 1)`, truncated.
#[inline]
pub fn signed_to_byte(x: f32) -> u8 {
    (255.0 * 0.5 * (x + 1.0)) as u8
}

#[inline]
pub fn unit_rgb(v: Vector3<f32>) -> Color {
    Rgb([unit_to_byte(v.x), unit_to_byte(v.y), unit_to_byte(v.z)])
}

#[inline]
pub fn signed_rgb(v: Vector3<f32>) -> Color {
    Rgb([signed_to_byte(v.x), signed_to_byte(v.y), signed_to_byte(v.z)])
}

#[inline]
pub fn gray(v: u8) -> Color {
    Rgb([v, v, v])
}

/// Density range mapped linearly onto black..white.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DensityWindow {
    pub min: f32,
    pub max: f32,
}

impl Default for DensityWindow {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 0.025,
        }
    }
}

impl DensityWindow {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Clamp `density` into the window and map it to a gray level.
    pub fn to_byte(&self, density: f32) -> u8 {
        if self.max <= self.min {
            return if density > self.min { 255 } else { 0 };
        }
        let t = ((density - self.min) / (self.max - self.min)).clamp(0.0, 1.0);
        unit_to_byte(t)
    }
}
