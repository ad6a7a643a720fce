use crate::error::GongError;

use base64::{engine, Engine};
use reqwest::Url;
use serde::Serialize;

// Only used to borrow `Url`'s path-segment encoder.
const SEGMENT_ENCODER_ORIGIN: &str = "http://localhost";

/// Build the `Authorization` header value for a Gong access key pair.
pub fn basic_auth_header(access_key: &str, access_key_secret: &str) -> String {
    let credentials = format!("{access_key}:{access_key_secret}");
    let encoded = engine::general_purpose::STANDARD.encode(credentials);
    format!("Basic {encoded}")
}

/// Append `params` to `path` as a query string.  Fields the caller left unset must be skipped by
/// the params' `Serialize` impl; if nothing remains, `path` is returned untouched.
pub fn with_query<P: Serialize + ?Sized>(path: &str, params: &P) -> Result<String, GongError> {
    let query = serde_urlencoded::to_string(params)?;
    if query.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{path}?{query}"))
    }
}

/// Append `segment` to `path` as exactly one percent-encoded path segment, so ids containing
/// `/`, `?` or `#` cannot address another resource.  `.` and `..` are rejected outright since URL
/// parsers collapse them even when escaped.
pub fn with_path_segment(path: &str, segment: &str) -> Result<String, GongError> {
    let invalid = || GongError::InvalidPathSegment(segment.to_string());
    if segment.is_empty() || segment == "." || segment == ".." {
        return Err(invalid());
    }
    let mut url = Url::parse(SEGMENT_ENCODER_ORIGIN).map_err(|_| invalid())?;
    url.set_path(path);
    url.path_segments_mut()
        .map_err(|_| invalid())?
        .pop_if_empty()
        .push(segment);
    Ok(url.path().to_string())
}
