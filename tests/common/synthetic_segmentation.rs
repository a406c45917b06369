use nalgebra::{Vector2, Vector3};
use superpixel_viz::image::IndexImage;
use superpixel_viz::{PixelData, Segmentation, WeightedAttribute};

/// Block label for pixel `(x, y)` on a grid of `cell × cell` squares.
pub fn block_label(width: usize, x: usize, y: usize, cell: usize) -> i32 {
    let cols = width.div_ceil(cell);
    ((y / cell) * cols + x / cell) as i32
}

/// Segmentation of square blocks; each pixel's color encodes its block and
/// every block faces the camera (`normal = +z`). Density is `1 / cell²`.
pub fn block_segmentation(width: usize, height: usize, cell: usize) -> Segmentation<PixelData> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    let labels = IndexImage::from_fn(width, height, |x, y| block_label(width, x, y, cell));
    let density = 1.0 / (cell * cell) as f32;
    let mut samples = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let bx = (x / cell) as f32;
            let by = (y / cell) as f32;
            let color = Vector3::new(
                (bx + 1.0) / (width / cell + 1) as f32,
                (by + 1.0) / (height / cell + 1) as f32,
                0.5,
            );
            samples.push(WeightedAttribute::sample(
                Vector2::new(x as f32, y as f32),
                density,
                PixelData::new(color, Vector3::z()),
            ));
        }
    }
    Segmentation::from_labels(&labels, &samples).expect("labels and samples agree")
}
