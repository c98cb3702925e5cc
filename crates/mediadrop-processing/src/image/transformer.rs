//! Image transformer - decode, bounded downscale, WebP transcode
//!
//! The transformer never fails outward: anything the codecs reject is
//! reported as [`TransformOutcome::Passthrough`] carrying the caller's bytes
//! unchanged, so a corrupt or unsupported image can still be stored.

use std::io::Cursor;

use crate::compression::{ImageCompressor, DEFAULT_WEBP_QUALITY};
use crate::image::resize::{downscale_to_fit, DEFAULT_MAX_DIMENSION};
use crate::metadata::ImageMetadata;

/// Knobs for the upload transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageTransformOptions {
    /// Images wider than this are downscaled to fit a `max_dimension` square.
    pub max_dimension: u32,
    /// Lossy WebP quality (0-100).
    pub quality: f32,
}

impl Default for ImageTransformOptions {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
            quality: DEFAULT_WEBP_QUALITY,
        }
    }
}

/// A successfully transcoded image with the dimensions read back from the
/// encoded output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscodedImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Result of running an upload through the image pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformOutcome {
    Transcoded(TranscodedImage),
    /// The pipeline failed; `data` is the original input.
    Passthrough { data: Vec<u8>, reason: String },
}

impl TransformOutcome {
    /// Build the fallback outcome, logging why it was taken.
    pub fn passthrough(data: Vec<u8>, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::warn!(
            size_bytes = data.len(),
            error = %reason,
            "Image transform failed, storing original bytes"
        );
        TransformOutcome::Passthrough { data, reason }
    }

    pub fn data(&self) -> &[u8] {
        match self {
            TransformOutcome::Transcoded(image) => &image.data,
            TransformOutcome::Passthrough { data, .. } => data,
        }
    }

    pub fn into_data(self) -> Vec<u8> {
        match self {
            TransformOutcome::Transcoded(image) => image.data,
            TransformOutcome::Passthrough { data, .. } => data,
        }
    }

    pub fn width(&self) -> Option<u32> {
        match self {
            TransformOutcome::Transcoded(image) => Some(image.width),
            TransformOutcome::Passthrough { .. } => None,
        }
    }

    pub fn height(&self) -> Option<u32> {
        match self {
            TransformOutcome::Transcoded(image) => Some(image.height),
            TransformOutcome::Passthrough { .. } => None,
        }
    }

    pub fn is_passthrough(&self) -> bool {
        matches!(self, TransformOutcome::Passthrough { .. })
    }
}

/// Main image transformer
pub struct ImageTransformer;

impl ImageTransformer {
    /// Decode, downscale if too wide, and encode to WebP.
    ///
    /// Dimensions are read from the encoded bytes rather than the resized
    /// bitmap so the metadata always describes what gets stored.
    pub fn encode(
        data: &[u8],
        options: &ImageTransformOptions,
    ) -> Result<TranscodedImage, anyhow::Error> {
        let img = image::ImageReader::new(Cursor::new(data))
            .with_guessed_format()?
            .decode()?;

        let img = downscale_to_fit(img, options.max_dimension);
        let encoded = ImageCompressor::compress_webp(&img, options.quality)?;
        let ImageMetadata { width, height } = ImageMetadata::read(&encoded)?;

        Ok(TranscodedImage {
            data: encoded,
            width,
            height,
        })
    }

    /// Run [`ImageTransformer::encode`], falling back to the input on any error.
    pub fn transform(data: Vec<u8>, options: &ImageTransformOptions) -> TransformOutcome {
        match Self::encode(&data, options) {
            Ok(image) => TransformOutcome::Transcoded(image),
            Err(e) => TransformOutcome::passthrough(data, format!("{:#}", e)),
        }
    }
}
