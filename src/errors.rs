use serde::Serialize;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Result type alias for route operations
pub type Result<T> = std::result::Result<T, RouteError>;

/// Error category reported to callers
///
/// Every failure of the route client collapses into [`ErrorKind::Internal`].
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Internal,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Internal => write!(f, "internal"),
        }
    }
}

/// Errors that can occur when managing routes through Alertmanager
#[derive(Debug, Error)]
pub enum RouteError {
    /// Failed to build HTTP client
    #[error("Failed to build HTTP client: {0}")]
    BuildHttpClient(#[source] reqwest::Error),

    /// Configured prefix and channel path do not form a valid URL
    #[error("Invalid channel API URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Failed to serialize the request body
    #[error("Failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest_middleware::Error),

    /// Alertmanager answered with a status outside 2xx
    #[error("Alertmanager API error: HTTP {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body returned by Alertmanager
        message: String,
    },
}

impl RouteError {
    /// Category of the error. Always [`ErrorKind::Internal`].
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Internal
    }

    /// HTTP status of the upstream response, if one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn test_every_variant_is_internal() {
        let api = RouteError::Api {
            status: 404,
            message: "not found".to_string(),
        };
        assert_eq!(api.kind(), ErrorKind::Internal);

        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        assert_eq!(RouteError::Serialize(json_err).kind(), ErrorKind::Internal);

        let parse_err = url::Url::parse("not a url").unwrap_err();
        let invalid = RouteError::InvalidUrl {
            url: "not a url".to_string(),
            source: parse_err,
        };
        assert_eq!(invalid.kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_error_display() {
        let error = RouteError::Api {
            status: 500,
            message: "Internal server error".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Alertmanager API error: HTTP 500 - Internal server error"
        );
    }

    #[test]
    fn test_status_getter() {
        let error = RouteError::Api {
            status: 409,
            message: String::new(),
        };
        assert_eq!(error.status(), Some(409));

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(RouteError::Serialize(json_err).status(), None);
    }

    #[test]
    fn test_invalid_url_keeps_source() {
        let parse_err = url::Url::parse("relative/path").unwrap_err();
        let error = RouteError::InvalidUrl {
            url: "relative/path".to_string(),
            source: parse_err,
        };
        assert!(error.source().is_some());
    }

    #[test]
    fn test_kind_display_and_serialize() {
        assert_eq!(ErrorKind::Internal.to_string(), "internal");
        assert_eq!(
            serde_json::to_string(&ErrorKind::Internal).unwrap(),
            "\"internal\""
        );
    }
}
