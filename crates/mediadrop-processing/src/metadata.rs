//! Image metadata types

use serde::{Deserialize, Serialize};

/// Intrinsic dimensions of an encoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMetadata {
    pub width: u32,
    pub height: u32,
}

#[cfg(feature = "image")]
impl ImageMetadata {
    /// Read dimensions from the image header without decoding pixel data.
    pub fn read(data: &[u8]) -> Result<Self, anyhow::Error> {
        let reader = image::ImageReader::new(std::io::Cursor::new(data)).with_guessed_format()?;
        let (width, height) = reader.into_dimensions()?;
        Ok(ImageMetadata { width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_metadata_serialization() {
        let metadata = ImageMetadata {
            width: 1280,
            height: 640,
        };

        let json = serde_json::to_string(&metadata).unwrap();
        let deserialized: ImageMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(metadata, deserialized);
    }

    #[cfg(feature = "image")]
    #[test]
    fn test_read_png_dimensions() {
        use image::{ImageFormat, Rgba, RgbaImage};
        use std::io::Cursor;

        let img = RgbaImage::from_pixel(120, 45, Rgba([0, 128, 255, 255]));
        let mut buffer = Vec::new();
        img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .unwrap();

        let metadata = ImageMetadata::read(&buffer).unwrap();
        assert_eq!(metadata.width, 120);
        assert_eq!(metadata.height, 45);
    }

    #[cfg(feature = "image")]
    #[test]
    fn test_read_garbage_fails() {
        assert!(ImageMetadata::read(b"definitely not an image").is_err());
    }
}
