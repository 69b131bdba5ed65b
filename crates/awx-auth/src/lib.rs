//! # awx-auth
//!
//! Authentication for the AWX / Ansible Tower REST API.
//!
//! ## Security
//!
//! - Passwords and tokens are redacted in Debug output
//! - Tracing spans skip the HTTP client and credential parameters
//! - Authorization headers are redacted in debug output
//!
//! ## Credential modes
//!
//! - **Basic** - username and password, exchanged for a token on first use
//! - **Token** - a token from the legacy `authtoken` endpoint (Tower < 3.3)
//! - **Bearer** - an OAuth2 personal access token
//!
//! With basic credentials the [`Authenticator`] first asks `authtoken` for a
//! legacy token and, if that fails for any reason, creates a personal access
//! token under `users/{username}/personal_tokens`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use awx_api_auth::{Authenticator, Credentials};
//! use awx_api_client::{ClientConfig, HttpClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), awx_api_auth::Error> {
//!     let http = HttpClient::new("https://awx.example.com/api", ClientConfig::default())?;
//!     let auth = Authenticator::new(Credentials::from_env()?);
//!
//!     auth.ensure_token(&http).await?;
//!     println!("{:?}", auth.active_token().await);
//!
//!     Ok(())
//! }
//! ```

mod authenticator;
mod credentials;

pub use authenticator::{ActiveToken, Authenticator, TOKEN_DESCRIPTION, TOKEN_SCOPE};
pub use awx_api_client::{Error, ErrorKind, Result};
pub use credentials::Credentials;
