//! Mediadrop Processing Library
//!
//! Content transformations applied before bytes reach a storage provider.
//! Today that is the image pipeline: bounded downscale and WebP transcode.

#[cfg(feature = "image")]
pub mod compression;
#[cfg(feature = "image")]
pub mod image;
pub mod metadata;

#[cfg(feature = "image")]
pub use crate::image::{
    ImageTransformOptions, ImageTransformer, ImageUploadProcessor, TranscodedImage,
    TransformOutcome,
};
pub use metadata::ImageMetadata;
