//! Square RGBA pixel buffers produced by the rasterizer
//!
//! A [`Canvas`] is written once by a rasterization pass and read afterwards,
//! either by a texture backend or by tests. Pixels are 4 bytes each, row-major,
//! origin top-left.

use std::path::Path;

use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Value of every pixel the rasterizer leaves untouched
pub const BACKGROUND: [u8; 4] = [0, 0, 0, 0];

/// Bytes per canvas pixel
pub const BYTES_PER_PIXEL: usize = 4;

/// Rasterization errors
#[derive(Error, Debug)]
pub enum RasterError {
    /// A zero-sized canvas was requested
    #[error("Canvas length must be positive")]
    InvalidLength,

    /// The pixel buffer could not be allocated
    #[error("Out of memory allocating a {length}x{length} canvas")]
    ResourceExhaustion {
        /// Requested side length
        length: u32,
    },

    /// Writing the canvas out as an image failed
    #[error("Failed to encode canvas: {0}")]
    Encode(#[from] image::ImageError),
}

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Pure white
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Pure black
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Opaque RGBA bytes for this color
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// Square, zero-initialized RGBA8 pixel buffer
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Allocate a `length` x `length` canvas filled with [`BACKGROUND`]
    ///
    /// Allocation failure is reported instead of aborting.
    pub fn try_new(length: u32) -> Result<Self, RasterError> {
        if length == 0 {
            return Err(RasterError::InvalidLength);
        }

        let side = length as usize;
        let byte_len = side
            .checked_mul(side)
            .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
            .ok_or(RasterError::ResourceExhaustion { length })?;

        let mut data = Vec::new();
        data.try_reserve_exact(byte_len)
            .map_err(|_| RasterError::ResourceExhaustion { length })?;
        data.resize(byte_len, 0);

        let image = RgbaImage::from_raw(length, length, data)
            .ok_or(RasterError::ResourceExhaustion { length })?;

        Ok(Self { image })
    }

    /// Side length in pixels
    pub fn length(&self) -> u32 {
        self.image.width()
    }

    /// Disc radius this canvas is sized for (`length / 2`)
    pub fn radius(&self) -> u32 {
        self.length() / 2
    }

    /// RGBA bytes of the pixel at column `x`, row `y`
    ///
    /// # Panics
    /// Panics if the coordinates are outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.image.get_pixel(x, y).0
    }

    /// Whether the pixel at (`x`, `y`) holds `color`
    pub fn is_color(&self, x: u32, y: u32, color: Rgb) -> bool {
        self.pixel(x, y) == color.to_rgba()
    }

    /// Whether the pixel at (`x`, `y`) was never written
    pub fn is_background(&self, x: u32, y: u32) -> bool {
        self.pixel(x, y) == BACKGROUND
    }

    /// Raw pixel bytes, row-major, 4 bytes per pixel
    pub fn as_bytes(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Borrow the underlying image
    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Save the canvas as a PNG file
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), RasterError> {
        let path = path.as_ref();
        self.image.save_with_format(path, image::ImageFormat::Png)?;
        log::info!("Saved {}x{} canvas to {}", self.length(), self.length(), path.display());
        Ok(())
    }

    pub(crate) fn put(&mut self, x: u32, y: u32, color: Rgb) {
        self.image.put_pixel(x, y, Rgba(color.to_rgba()));
    }

    /// Paint columns `x_start..=x_end` of row `y`; an empty range paints nothing
    pub(crate) fn fill_row(&mut self, y: u32, x_start: u32, x_end: u32, color: Rgb) {
        for x in x_start..=x_end {
            self.put(x, y, color);
        }
    }
}
