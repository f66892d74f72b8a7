use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use percent_encoding::percent_decode_str;
use url::{ParseError, Url};

// Maximum file size for entries.json files: 10MB
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Extracts the filesystem path from a tracked file's resource URI
///
/// Any scheme is accepted and only the path component is kept, exactly as written
/// apart from percent-decoding: dot segments are not collapsed. A resource that is
/// not an absolute URI is taken as a plain path.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use local_history_parser::resource_to_path;
///
/// let path = resource_to_path("file:///home/user/my%20project/app.py").unwrap();
/// assert_eq!(path, PathBuf::from("/home/user/my project/app.py"));
/// ```
///
/// # Errors
///
/// Returns an error if the URI is malformed or has an empty path.
pub fn resource_to_path(resource: &str) -> Result<PathBuf> {
    let resource = resource.trim();
    let raw_path = match Url::parse(resource) {
        Ok(url) => raw_path_component(resource, url.scheme()),
        Err(ParseError::RelativeUrlWithoutBase) => resource,
        Err(e) => {
            return Err(e).with_context(|| format!("Invalid resource URI: {}", resource));
        }
    };

    if raw_path.is_empty() {
        bail!("Resource URI has no path: {}", resource);
    }

    Ok(decode_path(raw_path))
}

/// The path text of `resource` as written, without scheme, authority, query or fragment
///
/// `url::Url::path` is already normalized, so the component is sliced out of the
/// original text instead. Schemes are ASCII, so the parsed scheme has the same length
/// as the written one.
fn raw_path_component<'a>(resource: &'a str, scheme: &str) -> &'a str {
    let after_scheme = resource.get(scheme.len() + 1..).unwrap_or_default();

    let path_and_rest = match after_scheme.strip_prefix("//") {
        Some(authority_and_path) => authority_and_path
            .find(['/', '?', '#'])
            .map_or("", |start| &authority_and_path[start..]),
        None => after_scheme,
    };

    path_and_rest
        .find(['?', '#'])
        .map_or(path_and_rest, |end| &path_and_rest[..end])
}

/// Percent-decode a path to raw bytes so that invalid UTF-8 escapes stay distinct
#[cfg(unix)]
fn decode_path(raw_path: &str) -> PathBuf {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    PathBuf::from(OsString::from_vec(percent_decode_str(raw_path).collect()))
}

#[cfg(not(unix))]
fn decode_path(raw_path: &str) -> PathBuf {
    PathBuf::from(percent_decode_str(raw_path).decode_utf8_lossy().as_ref())
}

/// Validates that a file's size is within acceptable limits (10MB)
///
/// Takes an open file handle to avoid TOCTOU (time-of-check-time-of-use)
/// race conditions where the file could be modified between the size check
/// and subsequent file operations.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than 10MB
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}
