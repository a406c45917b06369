use super::attribute::WeightedAttribute;
use super::payload::Payload;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::ops::Deref;

/// Radius of a disk whose area is `1 / density`.
///
/// Density counts samples per pixel area, so `density = 1 / (r² π)`.
/// Zero density yields an infinite radius and negative density NaN; callers
/// drawing markers must check `is_finite()`.
#[inline]
pub fn density_to_radius(density: f32) -> f32 {
    (1.0 / (density * PI)).sqrt()
}

/// Superpixel summary: a normalized attribute bundle plus its marker radius.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Superpixel<T> {
    #[serde(flatten)]
    pub attribute: WeightedAttribute<T>,
    pub radius: f32,
}

impl<T: Payload> Superpixel<T> {
    /// Wrap a mean-form bundle and derive the radius from its density.
    pub fn from_attribute(attribute: WeightedAttribute<T>) -> Self {
        let radius = density_to_radius(attribute.density);
        Self { attribute, radius }
    }
}

impl<T> Superpixel<T> {
    /// Radius when it can be drawn: finite and positive.
    pub fn drawable_radius(&self) -> Option<f32> {
        (self.radius.is_finite() && self.radius > 0.0).then_some(self.radius)
    }
}

impl<T> Deref for Superpixel<T> {
    type Target = WeightedAttribute<T>;

    fn deref(&self) -> &WeightedAttribute<T> {
        &self.attribute
    }
}
