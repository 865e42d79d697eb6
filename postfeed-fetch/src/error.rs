//! Fetch error types.

use std::fmt;
use thiserror::Error;

// ============================================================================
// Fetch Error
// ============================================================================

/// Error type for fetch operations.
///
/// Every failure of a fetch ends up in exactly one of these four variants;
/// callers never see a raw transport error.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The endpoint URL could not be constructed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Transport-level failure (connect, DNS, timeout, HTTP error status).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request succeeded but the body was empty.
    #[error("No data received")]
    NoData,

    /// The body did not match the expected JSON shape.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FetchError {
    /// Returns the discriminant of this error.
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            Self::InvalidUrl(_) => FetchErrorKind::InvalidUrl,
            Self::Network(_) => FetchErrorKind::Network,
            Self::NoData => FetchErrorKind::NoData,
            Self::Serialization(_) => FetchErrorKind::Serialization,
        }
    }

    /// Returns the message shown to the user for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidUrl(url) => format!("The request address is invalid ({url})."),
            Self::Network(e) if e.is_timeout() => {
                "The request timed out. Check your connection and try again.".to_string()
            }
            Self::Network(e) if e.is_connect() => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            Self::Network(e) => match e.status() {
                Some(status) => format!("The server responded with an error ({status})."),
                None => "A network error occurred. Please try again.".to_string(),
            },
            Self::NoData => "The server returned no data.".to_string(),
            Self::Serialization(_) => "The server returned data in an unexpected format.".to_string(),
        }
    }
}

// ============================================================================
// Fetch Error Kind
// ============================================================================

/// The four classes of fetch failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchErrorKind {
    /// See [`FetchError::InvalidUrl`].
    InvalidUrl,
    /// See [`FetchError::Network`].
    Network,
    /// See [`FetchError::NoData`].
    NoData,
    /// See [`FetchError::Serialization`].
    Serialization,
}

impl FetchErrorKind {
    /// Returns the display name for this kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::InvalidUrl => "invalid URL",
            Self::Network => "network error",
            Self::NoData => "no data",
            Self::Serialization => "serialization error",
        }
    }
}

impl fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(FetchError::NoData.kind(), FetchErrorKind::NoData);
        assert_eq!(
            FetchError::InvalidUrl("x".into()).kind(),
            FetchErrorKind::InvalidUrl
        );

        let json_err = serde_json::from_str::<u8>("nope").unwrap_err();
        assert_eq!(
            FetchError::from(json_err).kind(),
            FetchErrorKind::Serialization
        );
    }

    #[test]
    fn test_user_messages_are_not_empty() {
        let json_err = serde_json::from_str::<u8>("nope").unwrap_err();
        for err in [
            FetchError::InvalidUrl("::".into()),
            FetchError::NoData,
            FetchError::Serialization(json_err),
        ] {
            assert!(!err.user_message().is_empty(), "{err:?}");
        }
    }
}
