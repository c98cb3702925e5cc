#[cfg(feature = "storage-local")]
use crate::LocalProvider;
use crate::{StorageBackend, StorageResult, UploadProvider};
use mediadrop_core::StorageConfig;
use std::sync::Arc;

/// Create an upload provider based on configuration
pub async fn create_provider(config: &StorageConfig) -> StorageResult<Arc<dyn UploadProvider>> {
    match config.backend {
        #[cfg(feature = "storage-local")]
        StorageBackend::Local => {
            let provider = LocalProvider::new(config.local.clone()).await?;
            Ok(Arc::new(provider))
        }

        #[cfg(not(feature = "storage-local"))]
        StorageBackend::Local => Err(crate::StorageError::ConfigError(
            "Local storage backend not available (storage-local feature not enabled)".to_string(),
        )),
    }
}
