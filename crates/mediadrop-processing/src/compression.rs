use anyhow::{anyhow, Result};
use image::{DynamicImage, GenericImageView};

/// Lossy WebP quality applied to every transcoded upload.
pub const DEFAULT_WEBP_QUALITY: f32 = 80.0;

/// Largest width or height libwebp accepts.
pub const WEBP_MAX_DIMENSION: u32 = 16383;

/// Image compression service
pub struct ImageCompressor;

impl ImageCompressor {
    /// Encode to lossy WebP at the given quality (0-100).
    pub fn compress_webp(img: &DynamicImage, quality: f32) -> Result<Vec<u8>> {
        let (width, height) = img.dimensions();
        if width > WEBP_MAX_DIMENSION || height > WEBP_MAX_DIMENSION {
            return Err(anyhow!(
                "Image {}x{} exceeds WebP limit of {} pixels per side",
                width,
                height,
                WEBP_MAX_DIMENSION
            ));
        }

        // Convert to RGBA for WebP encoding
        let rgba_img = img.to_rgba8();

        let encoder = webp::Encoder::from_rgba(&rgba_img, width, height);
        let webp_data = encoder
            .encode_simple(false, quality.clamp(0.0, 100.0))
            .map_err(|e| anyhow!("WebP encoding failed: {:?}", e))?;

        Ok(webp_data.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_compress_webp_produces_riff_container() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(64, 32, Rgb([200, 10, 10])));
        let data = ImageCompressor::compress_webp(&img, DEFAULT_WEBP_QUALITY).unwrap();

        assert_eq!(&data[0..4], b"RIFF");
        assert_eq!(&data[8..12], b"WEBP");
    }

    #[test]
    fn test_compress_webp_rejects_oversized_canvas() {
        let img = DynamicImage::new_luma8(WEBP_MAX_DIMENSION + 1, 1);
        assert!(ImageCompressor::compress_webp(&img, DEFAULT_WEBP_QUALITY).is_err());
    }
}
