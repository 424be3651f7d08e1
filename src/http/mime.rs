//! Content types for static files, keyed by extension.

use std::path::Path;

/// Content type used when the extension is missing or unknown.
pub const DEFAULT: &str = "text/plain";

/// Returns the content type for a file extension (without the dot).
pub fn from_extension(ext: &str) -> &'static str {
    match ext.to_ascii_lowercase().as_str() {
        "js" => "application/javascript",
        "json" => "application/json",
        "css" => "text/css",
        "html" => "text/html",
        "txt" => "text/plain",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "gif" => "image/gif",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "ico" => "image/x-icon",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "mp4" => "video/mp4",
        "mpeg" => "video/mpeg",
        "ttf" => "font/ttf",
        _ => DEFAULT,
    }
}

/// Returns the content type for a path based on its extension.
pub fn from_path(path: impl AsRef<Path>) -> &'static str {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(from_extension)
        .unwrap_or(DEFAULT)
}

/// Image, audio and video content is served as raw bytes.
pub fn is_binary(content_type: &str) -> bool {
    content_type.starts_with("image/")
        || content_type.starts_with("audio/")
        || content_type.starts_with("video/")
}
