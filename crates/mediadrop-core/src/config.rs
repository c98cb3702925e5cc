//! Configuration module
//!
//! Explicit configuration structs handed to provider constructors, plus an
//! environment loader for binaries.
//!
//! Recognized variables:
//!
//! - `STORAGE_PROVIDER`: backend name, default `local`
//! - `LOCAL_UPLOAD_BASE_PATH`: directory the upload root lives in, default the working directory
//! - `LOCAL_UPLOAD_PATH`: upload root directory name, default `uploads`
//! - `STORAGE_SERVER_URL`: base URL for public links, default `http://localhost:<STORAGE_PORT>`
//! - `STORAGE_PORT`: port used by the default base URL, default `5001`

use std::env;
use std::path::{Component, Path, PathBuf};

use anyhow::Context;

use crate::storage_types::StorageBackend;

const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_STORAGE_PORT: u16 = 5001;

fn default_base_url(port: u16) -> String {
    format!("http://localhost:{}", port)
}

/// Local filesystem provider configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalStorageConfig {
    /// Resolved directory that contains the upload root.
    pub base_path: PathBuf,
    /// Upload root, relative to `base_path`; also the first URL path segment.
    pub upload_dir: String,
    /// Origin that serves `<base_path>/<upload_dir>` statically.
    pub base_url: String,
}

impl Default for LocalStorageConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("."),
            upload_dir: DEFAULT_UPLOAD_DIR.to_string(),
            base_url: default_base_url(DEFAULT_STORAGE_PORT),
        }
    }
}

impl LocalStorageConfig {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            ..Self::default()
        }
    }

    pub fn with_upload_dir(mut self, upload_dir: impl Into<String>) -> Self {
        self.upload_dir = upload_dir.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Absolute-or-relative path of the upload root.
    pub fn root(&self) -> PathBuf {
        self.base_path.join(&self.upload_dir)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.upload_dir.trim().is_empty() {
            return Err(anyhow::anyhow!("LOCAL_UPLOAD_PATH must not be empty"));
        }

        let escapes = Path::new(&self.upload_dir)
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(anyhow::anyhow!(
                "LOCAL_UPLOAD_PATH must be a relative path inside the base path: {}",
                self.upload_dir
            ));
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(anyhow::anyhow!(
                "STORAGE_SERVER_URL must start with http:// or https://: {}",
                self.base_url
            ));
        }

        Ok(())
    }
}

/// Application storage configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub local: LocalStorageConfig,
}

impl StorageConfig {
    /// Load from the process environment, reading a `.env` file first if present.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let mut config = Self::from_lookup(|key| env::var(key).ok())?;
        if env::var_os("LOCAL_UPLOAD_BASE_PATH").is_none() {
            config.local.base_path =
                env::current_dir().context("Failed to resolve working directory")?;
        }

        Ok(config)
    }

    /// Build from an arbitrary key lookup. Missing keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = match lookup("STORAGE_PROVIDER") {
            Some(value) => value.parse::<StorageBackend>()?,
            None => StorageBackend::default(),
        };

        let port = match lookup("STORAGE_PORT") {
            Some(value) => value
                .parse::<u16>()
                .with_context(|| format!("STORAGE_PORT must be a valid port number: {}", value))?,
            None => DEFAULT_STORAGE_PORT,
        };

        let local = LocalStorageConfig {
            base_path: lookup("LOCAL_UPLOAD_BASE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            upload_dir: lookup("LOCAL_UPLOAD_PATH")
                .unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string()),
            base_url: lookup("STORAGE_SERVER_URL").unwrap_or_else(|| default_base_url(port)),
        };

        Ok(StorageConfig { backend, local })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        match self.backend {
            StorageBackend::Local => self.local.validate(),
        }
    }
}
