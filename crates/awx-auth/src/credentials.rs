//! Credential modes.
//!
//! Credentials implement a custom Debug to redact passwords and tokens.

use awx_api_client::{Authorization, Error, ErrorKind, Result};

/// The single credential a connection authenticates with.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Username and password, exchanged for a token on first use.
    Basic { username: String, password: String },
    /// A token previously issued by the legacy `authtoken` endpoint.
    Token(String),
    /// An OAuth2 personal access token.
    Bearer(String),
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"[REDACTED]")
                .finish(),
            Credentials::Token(_) => f.debug_tuple("Token").field(&"[REDACTED]").finish(),
            Credentials::Bearer(_) => f.debug_tuple("Bearer").field(&"[REDACTED]").finish(),
        }
    }
}

impl Credentials {
    /// Username and password credentials.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Legacy token credentials.
    pub fn token(token: impl Into<String>) -> Self {
        Credentials::Token(token.into())
    }

    /// Personal access token credentials.
    pub fn bearer(token: impl Into<String>) -> Self {
        Credentials::Bearer(token.into())
    }

    /// Pick the credential mode from optional parts.
    ///
    /// Exactly one of `username`, `token` and `bearer` must be non-empty.
    /// Empty strings count as absent. The password is only used with a
    /// username and may be empty.
    pub fn from_parts(
        username: Option<&str>,
        password: Option<&str>,
        token: Option<&str>,
        bearer: Option<&str>,
    ) -> Result<Self> {
        fn present(value: Option<&str>) -> Option<&str> {
            value.filter(|v| !v.is_empty())
        }

        match (present(username), present(token), present(bearer)) {
            (Some(username), None, None) => {
                Ok(Self::basic(username, password.unwrap_or_default()))
            }
            (None, Some(token), None) => Ok(Self::token(token)),
            (None, None, Some(bearer)) => Ok(Self::bearer(bearer)),
            (None, None, None) => Err(Error::new(ErrorKind::Config(
                "One of user name, token or bearer token must be provided".to_string(),
            ))),
            _ => Err(Error::new(ErrorKind::Config(
                "Only one of user name, token or bearer token can be provided".to_string(),
            ))),
        }
    }

    /// Load credentials from environment variables.
    ///
    /// Reads `AWX_USERNAME`, `AWX_PASSWORD`, `AWX_TOKEN` and `AWX_BEARER_TOKEN`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let username = lookup("AWX_USERNAME");
        let password = lookup("AWX_PASSWORD");
        let token = lookup("AWX_TOKEN");
        let bearer = lookup("AWX_BEARER_TOKEN");

        Self::from_parts(
            username.as_deref(),
            password.as_deref(),
            token.as_deref(),
            bearer.as_deref(),
        )
    }

    /// The username, if these are basic credentials.
    pub fn username(&self) -> Option<&str> {
        match self {
            Credentials::Basic { username, .. } => Some(username),
            _ => None,
        }
    }

    /// The authorization these credentials send before any token is acquired.
    pub fn authorization(&self) -> Authorization {
        match self {
            Credentials::Basic { username, password } => {
                Authorization::basic(username.clone(), password.clone())
            }
            Credentials::Token(token) => Authorization::token(token.clone()),
            Credentials::Bearer(token) => Authorization::bearer(token.clone()),
        }
    }
}
