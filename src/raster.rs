//! Read-only view of a decoded image.
//!
//! Every channel is reported on a 16-bit scale (`0..=65535`) regardless of
//! the storage depth, so the mean computed by the hash is always on the same
//! numeric scale.

use image::{DynamicImage, ImageBuffer, Pixel, Rgba};

/// Owned RGBA image with 16 bits per channel.
pub type Rgba16Image = ImageBuffer<Rgba<u16>, Vec<u16>>;

/// Pixel rectangle of an image. `max_x` and `max_y` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Bounds {
    pub fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Bounds anchored at the origin.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, clamp_i32(width), clamp_i32(height))
    }

    pub fn width(&self) -> u32 {
        span(self.min_x, self.max_x)
    }

    pub fn height(&self) -> u32 {
        span(self.min_y, self.max_y)
    }

    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }
}

fn span(min: i32, max: i32) -> u32 {
    if max <= min {
        0
    } else {
        (max as i64 - min as i64) as u32
    }
}

fn clamp_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

/// A decoded image the hasher can read.
///
/// `at` is only called with coordinates inside `bounds()`.
pub trait Image {
    fn bounds(&self) -> Bounds;

    /// Red, green, blue and alpha of the pixel at `(x, y)`, each in `0..=65535`.
    fn at(&self, x: i32, y: i32) -> Rgba<u16>;
}

impl Image for Rgba16Image {
    fn bounds(&self) -> Bounds {
        Bounds::from_size(self.width(), self.height())
    }

    fn at(&self, x: i32, y: i32) -> Rgba<u16> {
        *self.get_pixel(x as u32, y as u32)
    }
}

impl Image for DynamicImage {
    fn bounds(&self) -> Bounds {
        Bounds::from_size(self.width(), self.height())
    }

    fn at(&self, x: i32, y: i32) -> Rgba<u16> {
        let (x, y) = (x as u32, y as u32);
        match self {
            DynamicImage::ImageLuma16(buf) => buf.get_pixel(x, y).to_rgba(),
            DynamicImage::ImageLumaA16(buf) => buf.get_pixel(x, y).to_rgba(),
            DynamicImage::ImageRgb16(buf) => buf.get_pixel(x, y).to_rgba(),
            DynamicImage::ImageRgba16(buf) => *buf.get_pixel(x, y),
            DynamicImage::ImageRgb32F(buf) => widen_f32(buf.get_pixel(x, y).to_rgba()),
            DynamicImage::ImageRgba32F(buf) => widen_f32(*buf.get_pixel(x, y)),
            // 8-bit layouts all go through the generic RGBA8 view.
            _ => widen_u8(image::GenericImageView::get_pixel(self, x, y)),
        }
    }
}

/// 0xAB becomes 0xABAB, so 0xFF maps to 0xFFFF.
fn widen_u8(px: Rgba<u8>) -> Rgba<u16> {
    Rgba(px.0.map(|c| u16::from(c) * 257))
}

fn widen_f32(px: Rgba<f32>) -> Rgba<u16> {
    Rgba(px.0.map(|c| (c.clamp(0.0, 1.0) * 65535.0).round() as u16))
}
