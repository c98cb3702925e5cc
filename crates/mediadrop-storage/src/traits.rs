//! Upload provider abstraction trait
//!
//! This module defines the UploadProvider trait that all storage backends must implement.

use async_trait::async_trait;
use mediadrop_core::{DeleteOutcome, ResourceType, UploadOptions, UploadResult, UrlOptions};
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Upload provider abstraction trait
///
/// Every backend (local filesystem today, remote object stores later) implements
/// this trait, so callers hold an `Arc<dyn UploadProvider>` and never depend on
/// where bytes end up.
#[async_trait]
pub trait UploadProvider: Send + Sync {
    /// Store `data` and describe the stored artifact.
    ///
    /// Providers may transform the payload (images are transcoded), so
    /// `UploadResult::bytes` reports the stored length, not the input length.
    async fn upload(&self, data: Vec<u8>, options: &UploadOptions) -> StorageResult<UploadResult>;

    /// Remove the file behind `public_id`.
    ///
    /// Deleting something that does not exist is a success. Callers without a
    /// resource type pass `ResourceType::default()` (image).
    async fn delete(
        &self,
        public_id: &str,
        resource_type: ResourceType,
    ) -> StorageResult<DeleteOutcome>;

    /// Derive the public URL of `public_id` without touching storage.
    fn get_url(&self, public_id: &str, options: &UrlOptions) -> StorageResult<String>;

    /// Tag written into `UploadResult::provider`.
    fn provider_name(&self) -> &'static str;
}
