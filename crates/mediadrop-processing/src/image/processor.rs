//! Image upload processor: async entry point for the transform pipeline.

use std::sync::Arc;

use super::transformer::{ImageTransformOptions, ImageTransformer, TransformOutcome};

/// Runs uploads through [`ImageTransformer`] on the blocking pool.
#[derive(Debug, Clone, Default)]
pub struct ImageUploadProcessor {
    options: ImageTransformOptions,
}

impl ImageUploadProcessor {
    pub fn new(options: ImageTransformOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ImageTransformOptions {
        &self.options
    }

    /// Transcode `data`, or hand it back untouched if anything goes wrong,
    /// including a panic inside the codec.
    pub async fn process(&self, data: Vec<u8>) -> TransformOutcome {
        let shared = Arc::new(data);
        let worker_data = Arc::clone(&shared);
        let options = self.options;

        // Image decode is CPU-bound; run off the async pool to avoid blocking other tasks.
        let joined = tokio::task::spawn_blocking(move || {
            ImageTransformer::encode(&worker_data, &options)
        })
        .await;

        let original = || Arc::try_unwrap(shared).unwrap_or_else(|arc| arc.as_ref().clone());
        match joined {
            Ok(Ok(image)) => {
                tracing::debug!(
                    width = image.width,
                    height = image.height,
                    size_bytes = image.data.len(),
                    "Image transcoded to WebP"
                );
                TransformOutcome::Transcoded(image)
            }
            Ok(Err(e)) => TransformOutcome::passthrough(original(), format!("{:#}", e)),
            Err(e) => TransformOutcome::passthrough(
                original(),
                format!("Image transform task failed: {}", e),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn create_test_image(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255]));
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);
        img.write_to(&mut cursor, ImageFormat::Png).unwrap();
        buffer
    }

    #[tokio::test]
    async fn test_process_valid_image() {
        let processor = ImageUploadProcessor::default();
        let outcome = processor.process(create_test_image(1600, 400)).await;

        assert!(!outcome.is_passthrough());
        assert_eq!(outcome.width(), Some(1280));
        assert_eq!(outcome.height(), Some(320));
    }

    #[tokio::test]
    async fn test_custom_options_bound_output() {
        let options = ImageTransformOptions {
            max_dimension: 200,
            quality: 60.0,
        };
        let processor = ImageUploadProcessor::new(options);
        assert_eq!(processor.options(), &options);

        let outcome = processor.process(create_test_image(800, 100)).await;
        assert_eq!(outcome.width(), Some(200));
        assert_eq!(outcome.height(), Some(25));
    }

    #[tokio::test]
    async fn test_process_invalid_image_returns_original() {
        let processor = ImageUploadProcessor::default();
        let invalid_data = b"not an image".to_vec();

        let outcome = processor.process(invalid_data.clone()).await;
        assert!(outcome.is_passthrough());
        assert_eq!(outcome.width(), None);
        assert_eq!(outcome.into_data(), invalid_data);
    }

    #[tokio::test]
    async fn test_concurrent_processing() {
        let processor = Arc::new(ImageUploadProcessor::default());
        let mut handles = Vec::new();
        for i in 0..4u32 {
            let processor = Arc::clone(&processor);
            handles.push(tokio::spawn(async move {
                processor.process(create_test_image(50 + i, 20)).await
            }));
        }

        for (i, handle) in handles.into_iter().enumerate() {
            let outcome = handle.await.unwrap();
            assert_eq!(outcome.width(), Some(50 + i as u32));
        }
    }
}
