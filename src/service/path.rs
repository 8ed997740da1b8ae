//! Image path sanitization.
//!
//! Two encodings exist. Plain file paths keep their `/` separators and a few
//! sub-delimiters. Proxy paths (a full source URL such as
//! `http://example.com/a.png` used as the path) are encoded as one opaque
//! segment so the CDN can recover the original URL.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes left unescaped in file paths.
const FILE_PATH: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/')
    .remove(b'&')
    .remove(b'$')
    .remove(b';')
    .remove(b'=')
    .remove(b'@')
    .remove(b',');

/// Bytes left unescaped in proxy paths.
const PROXY_PATH: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'!')
    .remove(b'\'');

/// Whether the path (without its leading `/`) is a full source URL.
#[must_use]
pub fn is_proxy_path(path: &str) -> bool {
    path.starts_with("http")
}

/// Encode `path` and prefix it with a single `/`.
#[must_use]
pub fn sanitize_path(path: &str) -> String {
    let path = path.strip_prefix('/').unwrap_or(path);

    if is_proxy_path(path) {
        format!("/{}", utf8_percent_encode(path, PROXY_PATH))
    } else {
        format!("/{}", utf8_percent_encode(path, FILE_PATH))
    }
}

/// Prefix `path` with `/` when missing, without encoding anything.
#[must_use]
pub fn raw_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}
