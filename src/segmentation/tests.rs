use super::*;
use crate::image::IndexImage;
use approx::assert_relative_eq;
use nalgebra::{Vector2, Vector3};

fn sample(x: f32, y: f32, density: f32, c: f32) -> WeightedAttribute<Vector3<f32>> {
    WeightedAttribute::sample(Vector2::new(x, y), density, Vector3::new(c, 0.5 * c, 1.0 - c))
}

fn assert_bundle_eq(a: &WeightedAttribute<Vector3<f32>>, b: &WeightedAttribute<Vector3<f32>>) {
    assert_relative_eq!(a.count, b.count, epsilon = 1e-5);
    assert_relative_eq!(a.position, b.position, epsilon = 1e-5);
    assert_relative_eq!(a.density, b.density, epsilon = 1e-5);
    assert_relative_eq!(a.payload, b.payload, epsilon = 1e-5);
}

#[test]
fn zero_is_identity_for_merge() {
    let s = sample(3.0, 4.0, 0.02, 0.25);
    let mut acc = WeightedAttribute::zero();
    acc += &s;
    assert_bundle_eq(&acc, &s);
}

#[test]
fn scaling_zero_stays_zero() {
    let z = WeightedAttribute::<Vector3<f32>>::zero();
    assert_eq!(3.5f32 * &z, z);
    assert_eq!(z.scale(-2.0), z);
}

#[test]
fn scaling_includes_count() {
    let s = sample(2.0, -1.0, 0.1, 0.5);
    let scaled = 2.0f32 * s.clone();
    assert_relative_eq!(scaled.count, 2.0);
    assert_relative_eq!(scaled.position, Vector2::new(4.0, -2.0));
    assert_relative_eq!(scaled.density, 0.2);
    assert_relative_eq!(scaled.payload, s.payload * 2.0);
}

#[test]
fn merge_weights_incoming_fields_by_count() {
    let mut acc = WeightedAttribute::<f32>::zero();
    let heavy: WeightedAttribute<f32> = WeightedAttribute {
        count: 3.0,
        position: Vector2::new(1.0, 2.0),
        density: 0.5,
        payload: 2.0,
    };
    acc += &heavy;
    assert_relative_eq!(acc.count, 3.0);
    assert_relative_eq!(acc.position, Vector2::new(3.0, 6.0));
    assert_relative_eq!(acc.density, 1.5);
    assert_relative_eq!(acc.payload, 6.0);
}

#[test]
fn unit_sample_fold_is_order_independent() {
    let a = sample(0.0, 1.0, 0.01, 0.1);
    let b = sample(5.0, 2.0, 0.02, 0.7);
    let c = sample(1.0, 9.0, 0.03, 0.4);

    let mut left = WeightedAttribute::zero();
    left += &a;
    left += &b;
    left += &c;

    let mut right = WeightedAttribute::zero();
    right += &c;
    right += &a;
    right += &b;

    assert_bundle_eq(&left, &right);
}

#[test]
fn single_sample_mean_is_the_sample() {
    let s = sample(7.0, 3.0, 0.04, 0.9);
    let mut acc = SegmentAccumulator::new();
    acc.add(&s);
    assert_bundle_eq(&acc.mean(), &s);
}

#[test]
fn mean_keeps_raw_count_and_averages_the_rest() {
    let acc: SegmentAccumulator<Vector3<f32>> = [
        sample(0.0, 0.0, 0.01, 0.0),
        sample(2.0, 4.0, 0.03, 1.0),
    ]
    .into_iter()
    .collect();
    let mean = acc.mean();
    assert_relative_eq!(mean.count, 2.0);
    assert_relative_eq!(mean.position, Vector2::new(1.0, 2.0));
    assert_relative_eq!(mean.density, 0.02, epsilon = 1e-6);
    assert_relative_eq!(mean.payload, Vector3::new(0.5, 0.25, 0.5), epsilon = 1e-6);
    // Still in sum form internally.
    assert_relative_eq!(acc.sum().position, Vector2::new(2.0, 4.0));
}

#[test]
fn mean_is_idempotent() {
    let mut acc = SegmentAccumulator::new();
    acc.add(&sample(1.0, 1.0, 0.02, 0.3));
    acc.add(&sample(3.0, 5.0, 0.04, 0.6));
    let first = acc.mean();
    let second = acc.mean();
    assert_eq!(first, second);
    assert_relative_eq!(acc.sum().count, 2.0);
}

#[test]
fn empty_until_nonzero_count_added() {
    let mut acc = SegmentAccumulator::<Vector3<f32>>::new();
    assert!(acc.empty());
    assert_eq!(acc.mean(), WeightedAttribute::zero());

    acc.add(&WeightedAttribute::zero());
    assert!(acc.empty());

    acc.add(&sample(1.0, 1.0, 0.1, 0.1));
    assert!(!acc.empty());
}

#[test]
fn radius_matches_disk_area() {
    assert_relative_eq!(density_to_radius(0.1), 1.7841, epsilon = 1e-3);
    let r = density_to_radius(0.02);
    assert_relative_eq!(r * r * std::f32::consts::PI, 50.0, epsilon = 1e-3);
}

#[test]
fn radius_decreases_with_density() {
    let densities = [0.001f32, 0.01, 0.025, 0.1, 1.0, 10.0];
    for pair in densities.windows(2) {
        assert!(
            density_to_radius(pair[1]) < density_to_radius(pair[0]),
            "radius should shrink from density {} to {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn zero_density_is_not_drawable() {
    assert!(density_to_radius(0.0).is_infinite());
    let sp = Superpixel::from_attribute(WeightedAttribute::<f32>::zero());
    assert_eq!(sp.drawable_radius(), None);
    let sp = Superpixel::from_attribute(WeightedAttribute::sample(Vector2::zeros(), -1.0, 0.0f32));
    assert_eq!(sp.drawable_radius(), None);
}

#[test]
fn superpixel_derefs_to_attribute() {
    let sp = Superpixel::from_attribute(sample(4.0, 2.0, 0.1, 0.5));
    assert_relative_eq!(sp.position, Vector2::new(4.0, 2.0));
    assert_relative_eq!(sp.radius, density_to_radius(0.1));
}

#[test]
fn pixel_data_scales_both_channels() {
    let p = PixelData::new(Vector3::new(1.0, 0.5, 0.0), Vector3::new(0.0, 0.0, -1.0));
    let mut sum = PixelData::zero();
    sum += p * 2.0;
    assert_relative_eq!(sum.color(), Vector3::new(2.0, 1.0, 0.0));
    assert_relative_eq!(sum.normal(), Vector3::new(0.0, 0.0, -2.0));
}

fn half_split_labels() -> IndexImage {
    IndexImage::from_fn(4, 2, |x, _| if x < 2 { 10 } else { 20 })
}

#[test]
fn from_labels_accumulates_per_label() {
    let labels = half_split_labels();
    let samples: Vec<_> = (0..8)
        .map(|i| sample((i % 4) as f32, (i / 4) as f32, 0.1, if i % 4 < 2 { 0.0 } else { 1.0 }))
        .collect();
    let seg = Segmentation::from_labels(&labels, &samples).unwrap();
    seg.validate().unwrap();

    assert_eq!(seg.superpixels.len(), 2);
    assert_eq!(seg.indices.data, vec![0, 0, 1, 1, 0, 0, 1, 1]);
    assert_relative_eq!(seg.superpixels[0].count, 4.0);
    assert_relative_eq!(seg.superpixels[0].position, Vector2::new(0.5, 0.5), epsilon = 1e-6);
    assert_relative_eq!(seg.superpixels[1].position, Vector2::new(2.5, 0.5), epsilon = 1e-6);
    assert_relative_eq!(seg.superpixels[1].payload, Vector3::new(1.0, 0.5, 0.0), epsilon = 1e-6);
    assert_relative_eq!(seg.superpixels[1].radius, density_to_radius(0.1), epsilon = 1e-4);
    assert!(seg.weights.data.iter().all(|&w| w == 1.0));
}

#[test]
fn from_labels_skips_negative_labels() {
    let mut labels = half_split_labels();
    labels.set(0, 0, UNASSIGNED);
    let samples = vec![sample(0.0, 0.0, 0.1, 0.5); 8];
    let seg = Segmentation::from_labels(&labels, &samples).unwrap();
    assert_eq!(seg.indices.get(0, 0), UNASSIGNED);
    assert!(seg.superpixel_at(0, 0).is_none());
    assert_eq!(seg.assigned_pixel_count(), 7);
    assert_relative_eq!(seg.superpixels[0].count, 3.0);
}

#[test]
fn from_labels_rejects_sample_count_mismatch() {
    let labels = half_split_labels();
    let err = Segmentation::from_labels(&labels, &[sample(0.0, 0.0, 0.1, 0.5)]).unwrap_err();
    assert!(err.contains("Got 1 samples"), "unexpected message: {err}");
}

#[test]
fn validate_reports_dangling_index() {
    let labels = half_split_labels();
    let samples = vec![sample(0.0, 0.0, 0.1, 0.5); 8];
    let mut seg = Segmentation::from_labels(&labels, &samples).unwrap();
    seg.indices.set(3, 1, 5);
    let err = seg.validate().unwrap_err();
    assert!(err.contains("(3, 1)"), "unexpected message: {err}");
}

#[test]
fn validate_reports_dimension_mismatch() {
    let labels = half_split_labels();
    let samples = vec![sample(0.0, 0.0, 0.1, 0.5); 8];
    let mut seg = Segmentation::from_labels(&labels, &samples).unwrap();
    seg.weights = crate::image::ImageF32::new(2, 2);
    assert!(seg.validate().is_err());
}

#[test]
#[should_panic]
fn dangling_index_fails_fast_on_lookup() {
    let labels = half_split_labels();
    let samples = vec![sample(0.0, 0.0, 0.1, 0.5); 8];
    let mut seg = Segmentation::from_labels(&labels, &samples).unwrap();
    seg.indices.set(0, 0, 9);
    let _ = seg.superpixel_at(0, 0);
}

#[test]
fn snapshot_survives_json() {
    let labels = half_split_labels();
    let samples = vec![sample(1.0, 1.0, 0.05, 0.5); 8];
    let seg = Segmentation::from_labels(&labels, &samples).unwrap();
    let json = serde_json::to_string(&seg).unwrap();
    let back: Segmentation<Vector3<f32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.indices, seg.indices);
    assert_eq!(back.weights, seg.weights);
    assert_eq!(back.superpixels.len(), 2);
    assert_relative_eq!(back.superpixels[1].radius, seg.superpixels[1].radius);
    assert_bundle_eq(&back.superpixels[0].attribute, &seg.superpixels[0].attribute);
}

#[test]
fn hierarchical_merge_of_means_matches_flat_accumulation() {
    let pixels = [
        sample(0.0, 1.0, 0.01, 0.2),
        sample(2.0, 3.0, 0.02, 0.4),
        sample(10.0, 5.0, 0.06, 0.9),
    ];

    let flat: SegmentAccumulator<_> = pixels.iter().collect();

    let left: SegmentAccumulator<_> = pixels[..2].iter().collect();
    let right: SegmentAccumulator<_> = pixels[2..].iter().collect();
    let mut merged = SegmentAccumulator::new();
    merged.add(&left.mean());
    merged.add(&right.mean());

    assert_bundle_eq(&merged.mean(), &flat.mean());
    assert_relative_eq!(merged.mean().position.x, 4.0, epsilon = 1e-5);

    // Feeding sums back in weights them twice.
    let mut doubled = SegmentAccumulator::new();
    doubled.add(left.sum());
    doubled.add(right.sum());
    assert!((doubled.mean().position.x - 4.0).abs() > 0.5);
}
