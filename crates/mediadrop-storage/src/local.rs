use std::path::{Path, PathBuf};
use std::time::Instant;

use async_trait::async_trait;
use mediadrop_core::{
    classify, DeleteOutcome, LocalStorageConfig, ResourceType, StorageBackend, UploadOptions,
    UploadResult, UrlOptions,
};
use mediadrop_processing::{ImageTransformOptions, ImageUploadProcessor};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::fs_util::ensure_dir;
use crate::keys::{normalize_folder, public_id, validate_key};
use crate::naming::generate_filename;
use crate::traits::{StorageError, StorageResult, UploadProvider};

/// Local filesystem upload provider
///
/// Files land in `<base_path>/<upload_dir>/<folder>/<filename>` and are served
/// from `<base_url>/<upload_dir>/<folder>/<filename>` by whatever static file
/// server fronts the upload root.
#[derive(Clone, Debug)]
pub struct LocalProvider {
    root: PathBuf,
    upload_dir: String,
    base_url: String,
    images: ImageUploadProcessor,
}

impl LocalProvider {
    /// Create a new LocalProvider, creating the upload root if needed.
    pub async fn new(config: LocalStorageConfig) -> StorageResult<Self> {
        config
            .validate()
            .map_err(|e| StorageError::ConfigError(format!("{:#}", e)))?;

        let root = config.root();
        ensure_dir(&root).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create upload directory {}: {}",
                root.display(),
                e
            ))
        })?;

        let root = fs::canonicalize(&root).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to resolve upload directory {}: {}",
                root.display(),
                e
            ))
        })?;

        tracing::info!(
            root = %root.display(),
            base_url = %config.base_url,
            "Local upload provider ready"
        );

        Ok(LocalProvider {
            root,
            upload_dir: config.upload_dir,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            images: ImageUploadProcessor::default(),
        })
    }

    /// Override the image pipeline settings (bound and WebP quality).
    pub fn with_image_options(mut self, options: ImageTransformOptions) -> Self {
        self.images = ImageUploadProcessor::new(options);
        self
    }

    /// Resolved `<base_path>/<upload_dir>`.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem path of a public id.
    pub fn path_for(&self, public_id: &str) -> StorageResult<PathBuf> {
        validate_key(public_id)?;
        Ok(self.root.join(public_id))
    }

    fn url_for(&self, public_id: &str) -> String {
        format!("{}/{}/{}", self.base_url, self.upload_dir, public_id)
    }

    async fn write_new_file(path: &Path, data: &[u8]) -> StorageResult<()> {
        // create_new: a name collision must never overwrite an earlier upload
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .await
            .map_err(|e| {
                StorageError::UploadFailed(format!(
                    "Failed to create file {}: {}",
                    path.display(),
                    e
                ))
            })?;

        file.write_all(data).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        Ok(())
    }
}

#[async_trait]
impl UploadProvider for LocalProvider {
    async fn upload(&self, data: Vec<u8>, options: &UploadOptions) -> StorageResult<UploadResult> {
        if options.mimetype.trim().is_empty() {
            return Err(StorageError::InvalidInput("mimetype is required".to_string()));
        }
        let folder = normalize_folder(&options.folder)?;

        let start = Instant::now();
        let class = classify(&options.mimetype);
        let disposition = class.disposition(&options.mimetype);

        let folder_path = self.root.join(folder);
        ensure_dir(&folder_path).await?;

        let (data, width, height) = if disposition.transcode {
            let outcome = self.images.process(data).await;
            let (width, height) = (outcome.width(), outcome.height());
            (outcome.into_data(), width, height)
        } else {
            (data, None, None)
        };

        let filename = generate_filename(options.filename.as_deref(), disposition.extension);
        let path = folder_path.join(&filename);
        Self::write_new_file(&path, &data).await?;

        let public_id = public_id(folder, &filename);
        let url = self.url_for(&public_id);
        let size = data.len();

        tracing::info!(
            path = %path.display(),
            public_id = %public_id,
            mimetype = %options.mimetype,
            class = ?class,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local upload successful"
        );

        Ok(UploadResult {
            url,
            public_id,
            resource_type: disposition.resource_type,
            format: disposition.format.to_string(),
            width,
            height,
            bytes: size as u64,
            provider: self.provider_name().to_string(),
        })
    }

    async fn delete(
        &self,
        public_id: &str,
        _resource_type: ResourceType,
    ) -> StorageResult<DeleteOutcome> {
        let path = match self.path_for(public_id) {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!(public_id = %public_id, error = %e, "Local delete ignored");
                return Ok(DeleteOutcome::Recovered {
                    reason: e.to_string(),
                });
            }
        };
        let start = Instant::now();

        match fs::remove_file(&path).await {
            Ok(()) => {
                tracing::info!(
                    path = %path.display(),
                    public_id = %public_id,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "Local delete successful"
                );
                Ok(DeleteOutcome::Removed)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(public_id = %public_id, "Local delete target already absent");
                Ok(DeleteOutcome::Missing)
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    public_id = %public_id,
                    error = %e,
                    "Local delete failed, reporting success"
                );
                Ok(DeleteOutcome::Recovered {
                    reason: e.to_string(),
                })
            }
        }
    }

    fn get_url(&self, public_id: &str, _options: &UrlOptions) -> StorageResult<String> {
        validate_key(public_id)?;
        Ok(self.url_for(public_id))
    }

    fn provider_name(&self) -> &'static str {
        StorageBackend::Local.as_str()
    }
}
