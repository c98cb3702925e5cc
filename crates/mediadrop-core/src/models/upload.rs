use serde::{Deserialize, Serialize};

use super::resource::ResourceType;

pub const DEFAULT_FOLDER: &str = "general";

fn default_folder() -> String {
    DEFAULT_FOLDER.to_string()
}

/// Per-call upload input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadOptions {
    /// Logical namespace, stored as a subdirectory by the local backend.
    #[serde(default = "default_folder")]
    pub folder: String,
    pub mimetype: String,
    /// Caller's original filename; only a sanitized fragment survives.
    #[serde(default)]
    pub filename: Option<String>,
}

impl UploadOptions {
    pub fn new(mimetype: impl Into<String>) -> Self {
        Self {
            folder: default_folder(),
            mimetype: mimetype.into(),
            filename: None,
        }
    }

    pub fn with_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = folder.into();
        self
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }
}

/// Descriptive record returned by a successful upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    pub url: String,
    /// Backend-resolvable locator, `<folder>/<filename>` for the local backend.
    pub public_id: String,
    pub resource_type: ResourceType,
    /// Lowercase extension without the dot.
    pub format: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Length of the stored payload, which differs from the input for transcoded images.
    pub bytes: u64,
    pub provider: String,
}

/// Options for deriving a URL without uploading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlOptions {
    /// Hint for backends that route by resource type; the local backend ignores it.
    #[serde(default)]
    pub resource_type: Option<ResourceType>,
}
