//! `Authorization: ApiKey <key>` header parsing - core logic.
//!
//! Pure and synchronous: no Axum extractors, no logging, no key store lookup.
//! Middleware calls `get_api_key` and decides what a failure means for the
//! response.

use axum::http::{HeaderMap, header};

/// Scheme token expected as the first field of the header value.
pub const API_KEY_SCHEME: &str = "ApiKey";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("no authorization header included")]
    NoAuthHeaderIncluded,
    #[error("malformed authorization header")]
    MalformedHeader,
}

impl AuthError {
    /// Short machine-readable label, used as a log field.
    pub fn reason(&self) -> &'static str {
        match self {
            AuthError::NoAuthHeaderIncluded => "missing",
            AuthError::MalformedHeader => "malformed",
        }
    }
}

/// Extracts the API key from `Authorization: ApiKey <key>`.
///
/// - absent or empty header -> `NoAuthHeaderIncluded`
/// - fewer than two whitespace-separated fields, or a scheme other than
///   exactly `ApiKey` -> `MalformedHeader`
///
/// Fields after the key are ignored. Runs of whitespace collapse, so the
/// returned key is never empty.
pub fn get_api_key(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = match headers.get(header::AUTHORIZATION) {
        Some(v) if !v.is_empty() => v,
        _ => return Err(AuthError::NoAuthHeaderIncluded),
    };

    // Non visible-ASCII bytes can't carry a well-formed scheme.
    let value = value.to_str().map_err(|_| AuthError::MalformedHeader)?;

    let mut fields = value.split_whitespace();
    match (fields.next(), fields.next()) {
        (Some(API_KEY_SCHEME), Some(key)) => Ok(key),
        _ => Err(AuthError::MalformedHeader),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn returns_key_for_api_key_scheme() {
        let headers = headers_with("ApiKey abc123");
        assert_eq!(get_api_key(&headers), Ok("abc123"));
    }

    #[test]
    fn missing_header_is_no_auth_header() {
        let headers = HeaderMap::new();
        assert_eq!(get_api_key(&headers), Err(AuthError::NoAuthHeaderIncluded));
    }

    #[test]
    fn empty_header_is_no_auth_header() {
        let headers = headers_with("");
        assert_eq!(get_api_key(&headers), Err(AuthError::NoAuthHeaderIncluded));
    }

    #[test]
    fn malformed_headers() {
        let cases = [
            ("wrong scheme", "Bearer token"),
            ("no token", "ApiKey"),
            ("lowercase scheme", "apikey abc123"),
            ("uppercase scheme", "APIKEY abc123"),
            ("only whitespace", "   "),
            ("trailing spaces only", "ApiKey   "),
            ("scheme glued to key", "ApiKeyabc123"),
        ];

        for (name, value) in cases {
            let headers = headers_with(value);
            let err = get_api_key(&headers).expect_err(name);
            assert_eq!(err, AuthError::MalformedHeader, "{name}");
            assert_eq!(err.to_string(), "malformed authorization header", "{name}");
        }
    }

    #[test]
    fn non_ascii_value_is_malformed() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"ApiKey \xfftoken").unwrap(),
        );
        assert_eq!(get_api_key(&headers), Err(AuthError::MalformedHeader));
    }

    #[test]
    fn extra_whitespace_between_fields_is_accepted() {
        assert_eq!(get_api_key(&headers_with("ApiKey    abc123")), Ok("abc123"));
        assert_eq!(get_api_key(&headers_with("ApiKey\tabc123")), Ok("abc123"));
        assert_eq!(get_api_key(&headers_with("  ApiKey abc123  ")), Ok("abc123"));
    }

    #[test]
    fn fields_after_key_are_ignored() {
        let headers = headers_with("ApiKey abc123 extra stuff");
        assert_eq!(get_api_key(&headers), Ok("abc123"));
    }

    #[test]
    fn first_authorization_value_wins() {
        let mut headers = HeaderMap::new();
        headers.append(header::AUTHORIZATION, HeaderValue::from_static("ApiKey first"));
        headers.append(header::AUTHORIZATION, HeaderValue::from_static("ApiKey second"));
        assert_eq!(get_api_key(&headers), Ok("first"));
    }

    #[test]
    fn repeated_calls_agree() {
        let ok = headers_with("ApiKey abc123");
        assert_eq!(get_api_key(&ok), get_api_key(&ok));

        let bad = headers_with("Bearer token");
        assert_eq!(get_api_key(&bad), get_api_key(&bad));
    }

    #[test]
    fn error_messages_are_stable() {
        assert_eq!(
            AuthError::NoAuthHeaderIncluded.to_string(),
            "no authorization header included"
        );
        assert_eq!(AuthError::NoAuthHeaderIncluded.reason(), "missing");
        assert_eq!(AuthError::MalformedHeader.reason(), "malformed");
    }
}
