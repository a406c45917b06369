pub mod grid;
pub mod io;
pub mod traits;

pub use self::grid::{Grid, ImageF32, IndexImage};
pub use self::traits::{ImageView, Rows};

/// 8-bit RGB canvas every render stage paints onto.
pub type Canvas = ::image::RgbImage;
/// Canvas pixel color.
pub type Color = ::image::Rgb<u8>;
