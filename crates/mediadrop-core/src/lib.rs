//! Mediadrop Core Library
//!
//! This crate provides the domain types, MIME classification and configuration
//! shared by the storage providers, the image pipeline and the CLI.

pub mod classify;
pub mod config;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use classify::{classify, extension_for_mimetype, is_pdf, resource_type_of, MediaClass};
pub use config::{LocalStorageConfig, StorageConfig};
pub use models::{
    DeleteOutcome, Disposition, ResourceType, UploadOptions, UploadResult, UrlOptions,
};
pub use storage_types::StorageBackend;
