//! Owned single-channel grid in row-major layout (stride == width).
//!
//! Backs the per-pixel planes of a segmentation: the superpixel index plane
//! (`IndexImage`) and the weight/density plane (`ImageF32`). Linear indexing
//! (`grid[i]`) and `(x, y)` access address the same storage.
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid<P> {
    /// Grid width in pixels
    pub w: usize,
    /// Grid height in pixels
    pub h: usize,
    /// Number of elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<P>,
}

/// Per-pixel float plane (weights, densities).
pub type ImageF32 = Grid<f32>;
/// Per-pixel superpixel index plane; negative values mark unassigned pixels.
pub type IndexImage = Grid<i32>;

impl<P: Copy + Default> Grid<P> {
    /// Construct a default-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, P::default())
    }
}

impl<P: Copy> Grid<P> {
    /// Construct a buffer of size `w × h` with every cell set to `value`.
    pub fn filled(w: usize, h: usize, value: P) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![value; w * h],
        }
    }

    /// Wrap row-major data; fails when `data.len() != w * h`.
    pub fn from_vec(w: usize, h: usize, data: Vec<P>) -> Result<Self, String> {
        if data.len() != w * h {
            return Err(format!(
                "Grid data has {} elements, expected {}x{} = {}",
                data.len(),
                w,
                h,
                w * h
            ));
        }
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    /// Build a grid by evaluating `f(x, y)` for every cell.
    pub fn from_fn(w: usize, h: usize, mut f: impl FnMut(usize, usize) -> P) -> Self {
        let mut data = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                data.push(f(x, y));
            }
        }
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }
    #[inline]
    /// Get the value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> P {
        self.data[self.idx(x, y)]
    }
    #[inline]
    /// Set the value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: P) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.w * self.h
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when both grids cover the same `w × h` extent.
    pub fn same_dims<Q>(&self, other: &Grid<Q>) -> bool {
        self.w == other.w && self.h == other.h
    }
}

impl<P> Index<usize> for Grid<P> {
    type Output = P;

    #[inline]
    fn index(&self, i: usize) -> &P {
        &self.data[i]
    }
}

impl<P> IndexMut<usize> for Grid<P> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut P {
        &mut self.data[i]
    }
}

impl<P: Copy> crate::image::traits::ImageView for Grid<P> {
    type Pixel = P;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[P] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[P]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}
