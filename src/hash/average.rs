//! Average hash.
//!
//! The algorithm:
//! 1. Resize the image to 8x8
//! 2. Take the red channel of every cell as its intensity
//! 3. Average the 64 intensities (integer division)
//! 4. Set bit `i` when cell `i` (row-major) is strictly above the average
//!
//! It holds up to minor colour changes, brightness and contrast shifts, and is
//! indifferent to aspect ratio and image size. Gamma correction or histogram
//! edits move values along a non-linear scale and can flip bits near the
//! average, so expect false misses there.
//!
//! Only the red channel is read. No luminance weighting is applied before the
//! mean, and hashes stored by earlier versions rely on that, so changing the
//! channel policy breaks comparisons against them.

use super::PerceptualHash;
use crate::config::Config;
use crate::raster::Image;
use crate::resize::{FilterResize, Resize};
use image::{ImageBuffer, Luma};
use tracing::debug;

/// Edge length of the reduced grid; the hash carries `HASH_SIZE * HASH_SIZE` bits.
pub const HASH_SIZE: u32 = 8;

/// Single-channel 16-bit grid the hash is computed from.
pub type ReducedImage = ImageBuffer<Luma<u16>, Vec<u16>>;

#[derive(Debug, Clone, Default)]
pub struct Average<R = FilterResize> {
    resizer: R,
}

impl Average {
    pub fn new() -> Self {
        Self::with_resizer(FilterResize::default())
    }

    /// Average hash pinned to the resize filter named in `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::with_resizer(FilterResize::new(config.hash.resize_filter.into()))
    }
}

impl<R: Resize> Average<R> {
    pub fn with_resizer(resizer: R) -> Self {
        Self { resizer }
    }

    /// Downsample to the 8x8 grid and keep one intensity per cell.
    pub fn reduce<I: Image + ?Sized>(&self, image: &I) -> ReducedImage {
        let resized = self.resizer.resize(image, HASH_SIZE, HASH_SIZE);
        ImageBuffer::from_fn(resized.width(), resized.height(), |x, y| {
            Luma([resized.get_pixel(x, y)[0]])
        })
    }
}

impl<R: Resize> PerceptualHash for Average<R> {
    fn compute<I: Image + ?Sized>(&self, image: &I) -> u64 {
        let reduced = self.reduce(image);
        let mean = mean(&reduced);
        let value = hash(&reduced, mean);
        debug!(
            "Average hash {:016x} (mean {}) from {}x{} image",
            value,
            mean,
            image.bounds().width(),
            image.bounds().height()
        );
        value
    }
}

/// Mean intensity of all cells, truncated. An empty grid has mean 0.
pub fn mean(reduced: &ReducedImage) -> u32 {
    let (width, height) = reduced.dimensions();
    let count = width as u64 * height as u64;
    if count == 0 {
        return 0;
    }

    let mut sum = 0u64;
    for y in 0..height {
        for x in 0..width {
            sum += reduced.get_pixel(x, y)[0] as u64;
        }
    }
    (sum / count) as u32
}

/// Pack one bit per cell in row-major order, bit 0 being the top-left cell.
///
/// A cell sets its bit only when strictly above `mean`; ties stay unset.
/// Cells past the 64th have no bit to land in and are ignored.
pub fn hash(reduced: &ReducedImage, mean: u32) -> u64 {
    let (width, height) = reduced.dimensions();

    let mut value = 0u64;
    let mut bit = 0u32;
    for y in 0..height {
        for x in 0..width {
            let intensity = reduced.get_pixel(x, y)[0] as u32;
            if intensity > mean && bit < u64::BITS {
                value |= 1 << bit;
            }
            bit += 1;
        }
    }
    value
}
