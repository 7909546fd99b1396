pub mod average;
pub mod utils;

use crate::raster::Image;

/// A perceptual hash producing a 64-bit fingerprint per image.
pub trait PerceptualHash {
    fn compute<I: Image + ?Sized>(&self, image: &I) -> u64;
}
