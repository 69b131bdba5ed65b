//! Token acquisition with legacy `authtoken` → personal access token fallback.

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use awx_api_client::{Authorization, Error, ErrorKind, HttpClient, Result};

use crate::credentials::Credentials;

/// Description attached to personal access tokens created by this client.
pub const TOKEN_DESCRIPTION: &str = "AWX Rust Client";

/// Scope requested for personal access tokens.
pub const TOKEN_SCOPE: &str = "write";

/// Which kind of token is currently in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveToken {
    /// A token from the legacy `authtoken` endpoint.
    Legacy,
    /// An OAuth2 personal access token.
    Bearer,
}

#[derive(Default)]
struct TokenState {
    legacy: Option<String>,
    bearer: Option<String>,
}

impl TokenState {
    fn has_token(&self) -> bool {
        self.legacy.is_some() || self.bearer.is_some()
    }
}

#[derive(Serialize)]
struct AuthTokenRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct AuthTokenResponse {
    #[serde(default)]
    token: String,
}

#[derive(Serialize)]
struct PersonalTokenRequest<'a> {
    description: &'a str,
    scope: &'a str,
}

#[derive(Deserialize)]
struct PersonalTokenResponse {
    #[serde(default)]
    token: String,
}

/// Holds the credentials and the tokens acquired with them.
///
/// Acquisition is serialized: concurrent callers of
/// [`ensure_token`](Self::ensure_token) wait for the first one and reuse its
/// token.
pub struct Authenticator {
    credentials: Credentials,
    state: Mutex<TokenState>,
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("credentials", &self.credentials)
            .field("tokens", &"[REDACTED]")
            .finish()
    }
}

impl Authenticator {
    /// Create an authenticator. Token credentials populate their slot at once.
    pub fn new(credentials: Credentials) -> Self {
        let state = match &credentials {
            Credentials::Basic { .. } => TokenState::default(),
            Credentials::Token(token) => TokenState {
                legacy: Some(token.clone()),
                bearer: None,
            },
            Credentials::Bearer(token) => TokenState {
                legacy: None,
                bearer: Some(token.clone()),
            },
        };

        Self {
            credentials,
            state: Mutex::new(state),
        }
    }

    /// The configured credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Make sure a legacy or bearer token is available, acquiring one if not.
    ///
    /// The legacy endpoint is tried first. Any failure there, including an
    /// empty token, falls back to creating a personal access token. When
    /// both fail the error carries the second failure as its source.
    #[instrument(skip(self, http))]
    pub async fn ensure_token(&self, http: &HttpClient) -> Result<()> {
        let mut state = self.state.lock().await;
        if state.has_token() {
            return Ok(());
        }

        let (username, password) = match &self.credentials {
            Credentials::Basic { username, password } => (username.as_str(), password.as_str()),
            _ => {
                return Err(Error::new(ErrorKind::Authentication(
                    "No token is available and there is no user name to request one with"
                        .to_string(),
                )))
            }
        };

        match request_legacy_token(http, username, password).await {
            Ok(token) => {
                debug!("Acquired legacy auth token");
                state.legacy = Some(token);
                return Ok(());
            }
            Err(err) => {
                http.debug_log(format_args!(
                    "Failed to acquire authtoken '{}', attempting personal access token",
                    err
                ));
            }
        }

        let token = request_personal_token(http, username, password)
            .await
            .map_err(|e| {
                Error::with_source(
                    ErrorKind::Authentication(format!(
                        "Can't acquire a token for user '{}'",
                        username
                    )),
                    e,
                )
            })?;

        debug!("Acquired personal access token");
        state.bearer = Some(token);
        Ok(())
    }

    /// The authorization to send: legacy token, then bearer token, then
    /// basic credentials.
    pub async fn authorization(&self) -> Option<Authorization> {
        let state = self.state.lock().await;

        if let Some(ref token) = state.legacy {
            return Some(Authorization::token(token.clone()));
        }
        if let Some(ref token) = state.bearer {
            return Some(Authorization::bearer(token.clone()));
        }
        match self.credentials {
            Credentials::Basic { .. } => Some(self.credentials.authorization()),
            _ => None,
        }
    }

    /// Which token kind is in use, if any.
    pub async fn active_token(&self) -> Option<ActiveToken> {
        let state = self.state.lock().await;

        if state.legacy.is_some() {
            Some(ActiveToken::Legacy)
        } else if state.bearer.is_some() {
            Some(ActiveToken::Bearer)
        } else {
            None
        }
    }

    /// Forget the legacy token. Bearer tokens and credentials are kept.
    pub async fn close(&self) {
        self.state.lock().await.legacy = None;
    }
}

async fn request_legacy_token(http: &HttpClient, username: &str, password: &str) -> Result<String> {
    let request = http
        .post("authtoken")
        .auth(Authorization::basic(username, password))
        .json(&AuthTokenRequest { username, password })?;

    let response: AuthTokenResponse = http.send_json(request).await?;
    if response.token.is_empty() {
        return Err(Error::new(ErrorKind::Authentication(
            "The server returned an empty auth token".to_string(),
        )));
    }

    Ok(response.token)
}

async fn request_personal_token(
    http: &HttpClient,
    username: &str,
    password: &str,
) -> Result<String> {
    let path = format!("users/{}/personal_tokens", urlencoding::encode(username));
    let request = http
        .post(path)
        .auth(Authorization::basic(username, password))
        .json(&PersonalTokenRequest {
            description: TOKEN_DESCRIPTION,
            scope: TOKEN_SCOPE,
        })?;

    let response: PersonalTokenResponse = http.send_json(request).await?;
    if response.token.is_empty() {
        return Err(Error::new(ErrorKind::Authentication(
            "The server returned an empty personal access token".to_string(),
        )));
    }

    Ok(response.token)
}
