use thiserror::Error;

/// Result type alias for ipwho operations
pub type Result<T> = std::result::Result<T, IpwhoError>;

/// Errors that can occur while looking up an IP address
#[derive(Error, Debug)]
pub enum IpwhoError {
    /// The request could not be built, sent, or its body read
    #[error("request failed: {0}")]
    Transport(String),

    /// API answered with a non-success status
    #[error("API error: {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body, verbatim
        body: String,
    },

    /// Response body is not a valid geolocation record
    #[error("invalid response: {0}")]
    Decode(serde_json::Error),

    /// Command was invoked with the wrong arguments
    #[error("{0}")]
    Usage(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

// No `#[from]`: the JSON error is part of the message, not a separate source.
impl From<serde_json::Error> for IpwhoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err)
    }
}

impl IpwhoError {
    /// Returns true if the error comes from a bad invocation
    #[must_use]
    pub const fn is_usage_error(&self) -> bool {
        matches!(self, Self::Usage(_))
    }

    /// Returns the HTTP status code if this is an API error
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_carries_body_verbatim() {
        let err = IpwhoError::Api {
            status: 429,
            body: r#"{"error":"quota exceeded"}"#.into(),
        };
        assert_eq!(err.to_string(), r#"API error: {"error":"quota exceeded"}"#);
        assert_eq!(err.status_code(), Some(429));
        assert!(!err.is_usage_error());
    }

    #[test]
    fn test_decode_error_from_serde() {
        let err: IpwhoError = serde_json::from_str::<serde_json::Value>("not json")
            .unwrap_err()
            .into();
        assert_eq!(err.to_string(), "invalid response: expected ident at line 1 column 2");
        assert!(std::error::Error::source(&err).is_none());
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_usage_error() {
        let err = IpwhoError::Usage("requires exactly one IP address".into());
        assert!(err.is_usage_error());
        assert_eq!(err.to_string(), "requires exactly one IP address");
    }
}
