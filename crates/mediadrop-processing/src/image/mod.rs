//! Image processing module
//!
//! - Bounded downscale (resize)
//! - Decode, resize, transcode with pass-through fallback (transformer)
//! - Async entry point for upload paths (processor)

pub mod processor;
pub mod resize;
pub mod transformer;

pub use processor::ImageUploadProcessor;
pub use transformer::{ImageTransformOptions, ImageTransformer, TranscodedImage, TransformOutcome};
