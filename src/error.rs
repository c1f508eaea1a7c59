// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Config(String),
    Fetch(FetchError),
}

/// Specific error types for catalog retrieval failures.
/// Keeps the transport path distinct from the malformed-payload path, since
/// both end up as a `Failed` state but with different user-facing text.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// The endpoint could not be reached, timed out, or answered with a
    /// non-success status.
    Transport(String),

    /// A response arrived but its body is not a JSON array.
    Format(String),
}

impl FetchError {
    /// Returns the fixed message shown to the user for this error type.
    /// Diagnostic detail stays in the `Display` output and the logs.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "Failed to load services. Please try again later.",
            FetchError::Format(_) => "Invalid data format.",
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(detail) => write!(f, "Transport Error: {}", detail),
            FetchError::Format(detail) => write!(f, "Format Error: {}", detail),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Fetch(e) => write!(f, "{}", e),
        }
    }
}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Error::Fetch(err)
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_config_error() {
        let err = Error::Config("bad field".to_string());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn display_formats_transport_error() {
        let err = FetchError::Transport("connection refused".to_string());
        assert_eq!(format!("{}", err), "Transport Error: connection refused");
    }

    #[test]
    fn display_formats_format_error() {
        let err = FetchError::Format("{\"error\":\"bad\"}".to_string());
        assert!(format!("{}", err).starts_with("Format Error:"));
    }

    #[test]
    fn transport_user_message_is_retry_later() {
        let err = FetchError::Transport("boom".to_string());
        assert_eq!(
            err.user_message(),
            "Failed to load services. Please try again later."
        );
    }

    #[test]
    fn format_user_message_is_invalid_data() {
        let err = FetchError::Format("null".to_string());
        assert_eq!(err.user_message(), "Invalid data format.");
    }

    #[test]
    fn from_io_error_produces_config_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Config(message) => assert!(message.contains("boom")),
            _ => panic!("expected Config variant"),
        }
    }

    #[test]
    fn from_fetch_error_wraps_variant() {
        let err: Error = FetchError::Format("scalar".to_string()).into();
        assert!(matches!(err, Error::Fetch(FetchError::Format(_))));
    }
}
