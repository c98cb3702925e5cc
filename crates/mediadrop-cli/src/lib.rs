use std::path::Path;

/// Mimetype sent when the file extension is not recognized.
pub const FALLBACK_MIMETYPE: &str = "application/octet-stream";

/// Guess a mimetype from a file extension, covering the types the upload
/// provider maps to dedicated extensions.
pub fn guess_mimetype(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mp3") => "audio/mpeg",
        Some("pdf") => "application/pdf",
        _ => FALLBACK_MIMETYPE,
    }
}

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_known_extensions() {
        assert_eq!(guess_mimetype(Path::new("a/photo.JPG")), "image/jpeg");
        assert_eq!(guess_mimetype(Path::new("photo.jpeg")), "image/jpeg");
        assert_eq!(guess_mimetype(Path::new("clip.webm")), "video/webm");
        assert_eq!(guess_mimetype(Path::new("song.mp3")), "audio/mpeg");
        assert_eq!(guess_mimetype(Path::new("doc.pdf")), "application/pdf");
    }

    #[test]
    fn guess_unknown_extension() {
        assert_eq!(guess_mimetype(Path::new("archive.tar.gz")), FALLBACK_MIMETYPE);
        assert_eq!(guess_mimetype(Path::new("README")), FALLBACK_MIMETYPE);
    }
}
