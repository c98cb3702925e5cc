//! MIME type classification
//!
//! Pure functions that decide how an upload is stored from its declared
//! mimetype alone. Matching is exact and case-sensitive.

use crate::models::{Disposition, ResourceType};

/// MIME strings clients use for PDF documents.
pub const PDF_MIMETYPES: [&str; 5] = [
    "application/pdf",
    "application/x-pdf",
    "application/acrobat",
    "application/vnd.pdf",
    "text/pdf",
];

/// Extension used when the mimetype is not in the lookup table.
pub const DEFAULT_EXTENSION: &str = ".bin";

/// Map a mimetype to its resource type.
///
/// `audio/*` is grouped with video as streamable media.
pub fn resource_type_of(mimetype: &str) -> ResourceType {
    if mimetype.starts_with("image/") {
        ResourceType::Image
    } else if mimetype.starts_with("video/") || mimetype.starts_with("audio/") {
        ResourceType::Video
    } else {
        ResourceType::Raw
    }
}

pub fn is_pdf(mimetype: &str) -> bool {
    PDF_MIMETYPES.contains(&mimetype)
}

/// Look up the stored file extension (with leading dot) for a mimetype.
pub fn extension_for_mimetype(mimetype: &str) -> &'static str {
    match mimetype {
        "image/jpeg" => ".jpg",
        "image/png" => ".png",
        "image/gif" => ".gif",
        "image/webp" => ".webp",
        "video/mp4" => ".mp4",
        "video/webm" => ".webm",
        "audio/mpeg" => ".mp3",
        "application/pdf" => ".pdf",
        _ => DEFAULT_EXTENSION,
    }
}

/// Upload routing class derived from a mimetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaClass {
    /// Transcoded to WebP.
    Image,
    /// Video or audio, stored as-is.
    Video,
    /// Any PDF mimetype, stored as `.pdf`.
    Pdf,
    Raw,
}

/// Classify a mimetype. PDF membership is checked before the prefix rule.
pub fn classify(mimetype: &str) -> MediaClass {
    if is_pdf(mimetype) {
        return MediaClass::Pdf;
    }
    match resource_type_of(mimetype) {
        ResourceType::Image => MediaClass::Image,
        ResourceType::Video => MediaClass::Video,
        ResourceType::Raw => MediaClass::Raw,
    }
}

impl MediaClass {
    /// Storage decision for this class. `mimetype` feeds the extension table
    /// for the classes that keep their original encoding.
    pub fn disposition(self, mimetype: &str) -> Disposition {
        match self {
            MediaClass::Image => Disposition {
                extension: ".webp",
                format: "webp",
                resource_type: ResourceType::Image,
                transcode: true,
            },
            MediaClass::Pdf => Disposition {
                extension: ".pdf",
                format: "pdf",
                resource_type: ResourceType::Raw,
                transcode: false,
            },
            MediaClass::Video | MediaClass::Raw => {
                let extension = extension_for_mimetype(mimetype);
                Disposition {
                    extension,
                    format: extension.trim_start_matches('.'),
                    resource_type: if self == MediaClass::Video {
                        ResourceType::Video
                    } else {
                        ResourceType::Raw
                    },
                    transcode: false,
                }
            }
        }
    }
}
