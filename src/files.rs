//! Static file lookup used by file-serving handlers.

use std::path::{Path, PathBuf};

use crate::http::mime;
use crate::http::response::Body;

/// A file read from disk together with its inferred content type.
#[derive(Debug, Clone)]
pub struct StaticFile {
    pub contents: Body,
    pub content_type: &'static str,
}

/// Maps a normalized request path onto `root`.
pub fn resolve(root: &Path, request_path: &str) -> PathBuf {
    root.join(request_path.trim_start_matches('/'))
}

/// Reads the file a request path refers to.
///
/// Every failure (missing file, permissions, a directory) yields `None`.
pub fn read_file(root: &Path, request_path: &str) -> Option<StaticFile> {
    let path = resolve(root, request_path);

    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Static file unavailable");
            return None;
        }
    };

    let content_type = mime::from_path(&path);
    let contents = if mime::is_binary(content_type) {
        Body::Bytes(bytes)
    } else {
        match String::from_utf8(bytes) {
            Ok(text) => Body::Text(text),
            Err(e) => Body::Bytes(e.into_bytes()),
        }
    };

    Some(StaticFile {
        contents,
        content_type,
    })
}
