//! Content-type to extension mapping
//!
//! A fixed map from detected content-type identifiers to the canonical
//! extension for that format. Anything outside the map is unknown and is
//! never guessed at; the corrector warns and leaves the file alone.

/// Canonical extension for a detected content type, if the type is one
/// the corrector is allowed to act on.
pub fn extension_for(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/gif" => Some("gif"),
        "image/webp" => Some("webp"),
        "image/heic" => Some("heic"),
        "image/heif" => Some("heif"),
        "image/tiff" => Some("tif"),
        "image/bmp" => Some("bmp"),
        "video/mp4" => Some("mp4"),
        "video/quicktime" => Some("mov"),
        "video/x-msvideo" => Some("avi"),
        "video/mpeg" => Some("mpg"),
        "video/webm" => Some("webm"),
        "video/3gpp" => Some("3gp"),
        "video/x-matroska" => Some("mkv"),
        "video/x-m4v" => Some("m4v"),
        _ => None,
    }
}
