//! Playback URL validation.
//!
//! The resolver's output is handed straight to a media player, so it must
//! be a well-formed http(s) URL with a host. Anything else is treated as a
//! remote failure and never published into panel state.

use thiserror::Error;
use url::Url;

/// Errors that can occur while validating a resolved playback URL.
#[derive(Debug, Error)]
pub enum PlaybackUrlError {
    #[error("invalid playback URL: {0}")]
    InvalidFormat(#[from] url::ParseError),

    #[error("playback URL scheme must be http or https, got: {0}")]
    UnsupportedScheme(String),

    #[error("playback URL must have a host")]
    MissingHost,
}

/// Validate a resolved playback URL.
pub fn validate_playback_url(raw: &str) -> Result<Url, PlaybackUrlError> {
    let url = Url::parse(raw)?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(PlaybackUrlError::UnsupportedScheme(other.to_string())),
    }

    if url.host_str().is_none() {
        return Err(PlaybackUrlError::MissingHost);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_https_url() {
        let url = validate_playback_url("https://cdn.example.com/abc123.mp3").unwrap();
        assert_eq!(url.host_str(), Some("cdn.example.com"));
    }

    #[test]
    fn test_http_allowed() {
        assert!(validate_playback_url("http://cdn/abc123.mp3").is_ok());
    }

    #[test]
    fn test_rejects_other_schemes() {
        let result = validate_playback_url("ftp://cdn/abc123.mp3");
        assert!(matches!(result, Err(PlaybackUrlError::UnsupportedScheme(_))));

        let result = validate_playback_url("file:///etc/passwd");
        assert!(matches!(
            result,
            Err(PlaybackUrlError::UnsupportedScheme(_) | PlaybackUrlError::MissingHost)
        ));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(validate_playback_url("not a url").is_err());
        assert!(validate_playback_url("").is_err());
    }
}
