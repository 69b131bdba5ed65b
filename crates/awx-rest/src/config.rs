//! Connection configuration.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use awx_api_client::{ClientConfig, DebugSink, Error, ErrorKind, Result};

/// Everything needed to open a [`Connection`](crate::Connection).
///
/// Nothing is validated here; [`Connection::new`](crate::Connection::new)
/// checks the combination. Secrets are redacted in Debug output.
#[derive(Clone, Default)]
pub struct ConnectionConfig {
    /// API root, e.g. `https://awx.example.com/api`.
    pub url: String,
    /// User name for basic credentials.
    pub username: Option<String>,
    /// Password for basic credentials.
    pub password: Option<String>,
    /// Token from the legacy `authtoken` endpoint.
    pub token: Option<String>,
    /// OAuth2 personal access token.
    pub bearer_token: Option<String>,
    /// Transport settings.
    pub client: ClientConfig,
}

impl std::fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redacted = |value: &Option<String>| value.as_ref().map(|_| "[REDACTED]");

        f.debug_struct("ConnectionConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &redacted(&self.password))
            .field("token", &redacted(&self.token))
            .field("bearer_token", &redacted(&self.bearer_token))
            .field("client", &self.client)
            .finish()
    }
}

impl ConnectionConfig {
    /// Create a new connection config builder.
    pub fn builder() -> ConnectionConfigBuilder {
        ConnectionConfigBuilder::default()
    }

    /// Load configuration from environment variables.
    ///
    /// `AWX_URL` is required. Credentials come from `AWX_USERNAME`,
    /// `AWX_PASSWORD`, `AWX_TOKEN` or `AWX_BEARER_TOKEN`; transport settings
    /// from `AWX_PROXY`, `AWX_CA_FILE`, `AWX_INSECURE` and `AWX_DEBUG`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let url = lookup("AWX_URL")
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                Error::new(ErrorKind::Config(
                    "Environment variable 'AWX_URL' is not set".to_string(),
                ))
            })?;

        let flag = |name: &str| {
            lookup(name)
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false)
        };

        let mut builder = Self::builder()
            .with_url(url)
            .with_insecure(flag("AWX_INSECURE"))
            .with_debug(flag("AWX_DEBUG"));

        if let Some(username) = lookup("AWX_USERNAME") {
            builder = builder.with_username(username);
        }
        if let Some(password) = lookup("AWX_PASSWORD") {
            builder = builder.with_password(password);
        }
        if let Some(token) = lookup("AWX_TOKEN") {
            builder = builder.with_token(token);
        }
        if let Some(bearer) = lookup("AWX_BEARER_TOKEN") {
            builder = builder.with_bearer_token(bearer);
        }
        if let Some(proxy) = lookup("AWX_PROXY") {
            builder = builder.with_proxy(proxy);
        }
        if let Some(ca_file) = lookup("AWX_CA_FILE") {
            builder = builder.with_ca_file(ca_file);
        }

        Ok(builder.build())
    }
}

/// Builder for ConnectionConfig.
#[derive(Debug, Default)]
pub struct ConnectionConfigBuilder {
    config: ConnectionConfig,
    client: awx_api_client::ClientConfigBuilder,
}

impl ConnectionConfigBuilder {
    /// Set the API root URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.config.url = url.into();
        self
    }

    /// Set the user name.
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.config.username = Some(username.into());
        self
    }

    /// Set the password.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.config.password = Some(password.into());
        self
    }

    /// Authenticate with a legacy `authtoken` token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.config.token = Some(token.into());
        self
    }

    /// Authenticate with an OAuth2 personal access token.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.config.bearer_token = Some(token.into());
        self
    }

    /// Set custom User-Agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.client = self.client.with_user_agent(user_agent);
        self
    }

    /// Route requests through the given proxy.
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.client = self.client.with_proxy(proxy);
        self
    }

    /// Disable server certificate verification.
    pub fn with_insecure(mut self, insecure: bool) -> Self {
        self.client = self.client.with_insecure(insecure);
        self
    }

    /// Trust the PEM encoded CA certificates in `certs`. Repeatable.
    pub fn with_ca_certificates(mut self, certs: impl Into<Vec<u8>>) -> Self {
        self.client = self.client.with_ca_certificates(certs);
        self
    }

    /// Trust the PEM encoded CA certificates stored in `file`. Repeatable.
    pub fn with_ca_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.client = self.client.with_ca_file(file);
        self
    }

    /// Enable or disable redacted request/response dumps.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.client = self.client.with_debug(debug);
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = self.client.with_timeout(timeout);
        self
    }

    /// Send debug output to `sink`.
    pub fn with_debug_sink(mut self, sink: Arc<dyn DebugSink>) -> Self {
        self.client = self.client.with_debug_sink(sink);
        self
    }

    /// Replace all transport settings at once.
    pub fn with_client_config(mut self, client: ClientConfig) -> Self {
        self.client = awx_api_client::ClientConfigBuilder::from(client);
        self
    }

    /// Build the connection configuration.
    pub fn build(mut self) -> ConnectionConfig {
        self.config.client = self.client.build();
        self.config
    }
}
