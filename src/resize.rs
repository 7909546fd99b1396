//! Resampling collaborator used by the hash to reach its fixed grid.

use crate::raster::{Bounds, Image, Rgba16Image};
use image::GenericImageView;
use image::Rgba;
use image::imageops::{self, FilterType};
use tracing::trace;

/// Produces a `width` x `height` copy of an image.
///
/// Implementations must be deterministic: the same input has to resample to
/// the same output, otherwise hashes of one image drift between calls.
pub trait Resize {
    fn resize<I: Image + ?Sized>(&self, image: &I, width: u32, height: u32) -> Rgba16Image;
}

/// Resampling through `image::imageops::resize` with a pinned filter.
///
/// The filter changes which way borderline cells fall, so hashes are only
/// comparable when they were produced with the same filter.
#[derive(Debug, Clone, Copy)]
pub struct FilterResize {
    filter: FilterType,
}

impl FilterResize {
    pub fn new(filter: FilterType) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> FilterType {
        self.filter
    }
}

impl Default for FilterResize {
    fn default() -> Self {
        Self::new(FilterType::Nearest)
    }
}

impl Resize for FilterResize {
    fn resize<I: Image + ?Sized>(&self, image: &I, width: u32, height: u32) -> Rgba16Image {
        let bounds = image.bounds();
        if bounds.is_empty() {
            // Nothing to sample; hand back an empty image and let the
            // caller's zero-area handling take over.
            trace!("Skipping resize of empty {:?}", bounds);
            return Rgba16Image::new(0, 0);
        }

        trace!(
            "Resizing {}x{} -> {}x{} with {:?}",
            bounds.width(),
            bounds.height(),
            width,
            height,
            self.filter
        );
        imageops::resize(&View { image, bounds }, width, height, self.filter)
    }
}

/// Origin-anchored view of an [`Image`] that `imageops` can sample from
/// without copying the source.
struct View<'a, I: ?Sized> {
    image: &'a I,
    bounds: Bounds,
}

impl<I: Image + ?Sized> GenericImageView for View<'_, I> {
    type Pixel = Rgba<u16>;

    fn dimensions(&self) -> (u32, u32) {
        (self.bounds.width(), self.bounds.height())
    }

    fn get_pixel(&self, x: u32, y: u32) -> Rgba<u16> {
        let Bounds { min_x, min_y, .. } = self.bounds;
        self.image.at(min_x + x as i32, min_y + y as i32)
    }
}
