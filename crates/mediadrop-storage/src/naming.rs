//! Collision-resistant stored filenames.
//!
//! Format: `{name}-{unix_millis}-{16 hex}{ext}` where `name` is the caller's
//! original filename reduced to ASCII alphanumerics and capped at 20 chars.
//! Eight random bytes per name make same-millisecond collisions negligible,
//! which matters because uploads are not serialized.

use chrono::Utc;
use rand::Rng;

/// Longest name fragment kept from the original filename.
pub const MAX_NAME_LEN: usize = 20;

/// Name fragment used when the original is absent or has nothing usable.
pub const FALLBACK_NAME: &str = "file";

const RANDOM_BYTES: usize = 8;

/// Reduce an original filename to at most 20 ASCII alphanumeric characters.
pub fn sanitize_name(original: Option<&str>) -> String {
    let name: String = original
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(MAX_NAME_LEN)
        .collect();

    if name.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        name
    }
}

/// Generate a stored filename. `extension` includes its leading dot.
pub fn generate_filename(original: Option<&str>, extension: &str) -> String {
    generate_filename_at(original, extension, Utc::now().timestamp_millis())
}

fn generate_filename_at(original: Option<&str>, extension: &str, unix_millis: i64) -> String {
    // ThreadRng is a CSPRNG reseeded from the OS
    let mut random = [0u8; RANDOM_BYTES];
    rand::rng().fill(&mut random);

    format!(
        "{}-{}-{}{}",
        sanitize_name(original),
        unix_millis,
        hex::encode(random),
        extension
    )
}
