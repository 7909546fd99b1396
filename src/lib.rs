//! Average perceptual hash ("aHash") for decoded raster images.
//!
//! An image is reduced to an 8x8 grid, the mean intensity of that grid is
//! computed, and every cell brighter than the mean sets one bit of a `u64`.
//! Visually similar images (rescaled, re-encoded, small brightness or
//! contrast shifts) land on identical or nearby hashes; compare them with
//! [`hamming_distance`].
//!
//! Decoding is left to the caller. Anything implementing [`Image`] can be
//! hashed, and [`image::DynamicImage`] works out of the box:
//!
//! ```rust,no_run
//! use imghash::{Average, PerceptualHash, hamming_distance};
//!
//! let a = image::open("a.png")?;
//! let b = image::open("b.png")?;
//!
//! let hasher = Average::new();
//! let distance = hamming_distance(hasher.compute(&a), hasher.compute(&b));
//! println!("distance: {distance}");
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! This is a coarse similarity signal. Cropping, rotation and edited content
//! are not expected to hash close together.

pub mod config;
pub mod hash;
pub mod raster;
pub mod resize;

pub use crate::config::{Config, HashConfig, ResizeFilter};
pub use crate::hash::PerceptualHash;
pub use crate::hash::average::{Average, HASH_SIZE, ReducedImage, hash, mean};
pub use crate::hash::utils::{hamming_distance, is_similar};
pub use crate::raster::{Bounds, Image, Rgba16Image};
pub use crate::resize::{FilterResize, Resize};
