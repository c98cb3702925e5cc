//! Shared validation for folders and public ids.

use std::path::{Component, Path};

use crate::traits::{StorageError, StorageResult};

/// Reject keys that are empty, absolute, or could walk out of the upload root.
pub fn validate_key(key: &str) -> StorageResult<()> {
    if key.is_empty() {
        return Err(StorageError::InvalidKey(
            "Storage key must not be empty".to_string(),
        ));
    }

    if key.starts_with('/') || key.starts_with('\\') || key.contains('\0') {
        return Err(StorageError::InvalidKey(
            "Storage key contains invalid characters".to_string(),
        ));
    }

    let all_normal = Path::new(key)
        .components()
        .all(|c| matches!(c, Component::Normal(_)));
    if !all_normal {
        return Err(StorageError::InvalidKey(format!(
            "Storage key is not a plain relative path: {}",
            key
        )));
    }

    Ok(())
}

/// Normalize and validate a caller-supplied folder.
pub fn normalize_folder(folder: &str) -> StorageResult<&str> {
    let folder = folder.trim_end_matches('/');
    validate_key(folder)?;
    Ok(folder)
}

pub fn public_id(folder: &str, filename: &str) -> String {
    format!("{}/{}", folder, filename)
}
