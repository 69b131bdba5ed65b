//! Error types for awx-client.
//!
//! The same taxonomy is re-exported by awx-auth and awx-rest so callers
//! match on a single `ErrorKind` regardless of which layer failed.

/// Result type alias for AWX client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for AWX client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication(_))
    }

    /// Returns true if the server answered with a non-success status.
    pub fn is_server_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Server { .. })
    }

    /// Returns true if the connection or client was misconfigured.
    pub fn is_config_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Config(_))
    }

    /// Returns the HTTP status code if this is a server error.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Invalid configuration: bad URL or proxy, conflicting auth or TLS options.
    #[error("Configuration error: {0}")]
    Config(String),

    /// CA material without any parsable PEM certificate.
    #[error("Certificate error: {0}")]
    Certificate(String),

    /// No usable token could be obtained, or the server rejected the credentials.
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// The server answered outside the 200..=202 success range.
    #[error("Status code '{status}' returned from server: '{message}'")]
    Server { status: u16, message: String },

    /// Malformed JSON response body.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Request body could not be serialized.
    #[error("Encode error: {0}")]
    Encode(String),

    /// Transport-level failure.
    #[error("Network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_builder() {
            ErrorKind::Config(err.to_string())
        } else if err.is_decode() {
            ErrorKind::Decode(err.to_string())
        } else {
            ErrorKind::Network(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Decode(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::Config(format!("Invalid URL: {}", err)), err)
    }
}
