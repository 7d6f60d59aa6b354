//! CPU-side thumb images.
//!
//! [`ThumbImage`] wraps an `image::RgbaImage` behind an `Arc` so it can be
//! cloned into configuration structs and draw commands without copying pixels.
//!
//! # Example
//!
//! ```
//! use colorslider_render::{Color, ThumbImage};
//!
//! // A 2x1 image: one magenta pixel, one red pixel
//! let pixels = [255, 0, 255, 255, 255, 0, 0, 255];
//! let image = ThumbImage::from_rgba(&pixels, 2, 1)
//!     .unwrap()
//!     .with_color_key(Color::MAGENTA);
//!
//! assert_eq!(image.pixel(0, 0), Some(Color::TRANSPARENT));
//! assert_eq!(image.pixel(1, 0), Some(Color::RED));
//! ```

use std::sync::Arc;

use image::{DynamicImage, Rgba, RgbaImage};

use crate::error::{RenderError, RenderResult};
use crate::types::{Color, Size};

/// An immutable RGBA8 image used in place of the drawn thumb.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbImage {
    inner: Arc<RgbaImage>,
}

impl ThumbImage {
    // ========================================================================
    // CONSTRUCTION
    // ========================================================================

    /// Decode an image from encoded bytes in memory (PNG).
    pub fn from_bytes(bytes: &[u8]) -> RenderResult<Self> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| RenderError::ImageLoad(format!("Failed to decode image: {}", e)))?;
        Self::from_dynamic_image(img)
    }

    /// Create an image from raw RGBA pixel data.
    ///
    /// The data must be exactly `width * height * 4` bytes, with pixels in
    /// row-major order, 4 bytes per pixel (R, G, B, A).
    pub fn from_rgba(data: &[u8], width: u32, height: u32) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(RenderError::ImageLoad(format!(
                "Invalid data size: expected {} bytes, got {}",
                expected,
                data.len()
            )));
        }
        let rgba = RgbaImage::from_raw(width, height, data.to_vec()).ok_or_else(|| {
            RenderError::ImageLoad("Failed to create image from raw data".to_string())
        })?;
        Ok(Self {
            inner: Arc::new(rgba),
        })
    }

    /// Create from an existing `DynamicImage`, converting it to RGBA8.
    pub fn from_dynamic_image(img: DynamicImage) -> RenderResult<Self> {
        let rgba = img.into_rgba8();
        if rgba.width() == 0 || rgba.height() == 0 {
            return Err(RenderError::InvalidDimensions {
                width: rgba.width(),
                height: rgba.height(),
            });
        }
        Ok(Self {
            inner: Arc::new(rgba),
        })
    }

    // ========================================================================
    // PROPERTIES
    // ========================================================================

    /// Get the width of the image in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Get the height of the image in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Get the image size as floating-point dimensions.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width() as f32, self.height() as f32)
    }

    /// Read one pixel, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.inner
            .get_pixel_checked(x, y)
            .map(|Rgba([r, g, b, a])| Color::from_rgba8(*r, *g, *b, *a))
    }

    /// Borrow the underlying pixel buffer.
    #[inline]
    pub fn as_rgba(&self) -> &RgbaImage {
        &self.inner
    }

    // ========================================================================
    // COLOR KEY
    // ========================================================================

    /// Return a copy where every pixel whose RGB equals `key` is fully
    /// transparent. Alpha of the source pixel is ignored when matching.
    pub fn with_color_key(&self, key: Color) -> Self {
        let mut keyed = (*self.inner).clone();
        for Rgba(px) in keyed.pixels_mut() {
            if px[0] == key.r && px[1] == key.g && px[2] == key.b {
                *px = [0, 0, 0, 0];
            }
        }
        Self {
            inner: Arc::new(keyed),
        }
    }
}
