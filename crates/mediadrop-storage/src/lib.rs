//! Mediadrop Storage Library
//!
//! This crate provides the upload provider contract and its local filesystem
//! implementation.
//!
//! # Public id format
//!
//! A public id is the provider-relative locator of a stored file. The local
//! backend uses `{folder}/{filename}`, where the filename is generated by the
//! `naming` module: `{name}-{unix_millis}-{16 hex}{ext}`.
//!
//! Ids and folders must not contain a `..` segment or start with `/`. Validation is
//! centralized in the `keys` module so every operation applies the same rule.

pub mod factory;
pub mod fs_util;
pub(crate) mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
pub mod naming;
pub mod traits;

// Re-export commonly used types
pub use factory::create_provider;
#[cfg(feature = "storage-local")]
pub use local::LocalProvider;
pub use mediadrop_core::{
    DeleteOutcome, ResourceType, StorageBackend, UploadOptions, UploadResult, UrlOptions,
};
pub use traits::{StorageError, StorageResult, UploadProvider};
