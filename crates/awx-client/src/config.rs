//! Client configuration.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::client::{DebugSink, TracingSink};

/// Transport configuration for the HTTP client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// User-Agent header value.
    pub user_agent: String,
    /// Proxy URL every request is routed through.
    pub proxy: Option<String>,
    /// Skip verification of the server certificate.
    pub insecure: bool,
    /// Inline PEM bundles to trust, in the order they were added.
    pub ca_certs: Vec<Vec<u8>>,
    /// Files holding PEM bundles to trust.
    pub ca_files: Vec<PathBuf>,
    /// Dump redacted requests and responses to the debug sink.
    pub debug: bool,
    /// Overall request timeout. None leaves cancellation to the caller.
    pub timeout: Option<Duration>,
    /// Receiver of debug output.
    pub debug_sink: Arc<dyn DebugSink>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: crate::USER_AGENT.to_string(),
            proxy: None,
            insecure: false,
            ca_certs: Vec::new(),
            ca_files: Vec::new(),
            debug: false,
            timeout: None,
            debug_sink: Arc::new(TracingSink),
        }
    }
}

impl ClientConfig {
    /// Create a new client config builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Returns true if any custom CA material was supplied.
    pub fn has_ca_material(&self) -> bool {
        !self.ca_certs.is_empty() || !self.ca_files.is_empty()
    }
}

/// Builder for ClientConfig.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl From<ClientConfig> for ClientConfigBuilder {
    fn from(config: ClientConfig) -> Self {
        Self { config }
    }
}

impl ClientConfigBuilder {
    /// Set custom User-Agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Route requests through the given proxy. An empty string clears it.
    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        let proxy = proxy.into();
        self.config.proxy = if proxy.is_empty() { None } else { Some(proxy) };
        self
    }

    /// Disable server certificate verification.
    pub fn with_insecure(mut self, insecure: bool) -> Self {
        self.config.insecure = insecure;
        self
    }

    /// Trust the PEM encoded CA certificates in `certs`.
    ///
    /// Can be called repeatedly; empty input is ignored.
    pub fn with_ca_certificates(mut self, certs: impl Into<Vec<u8>>) -> Self {
        let certs = certs.into();
        if !certs.is_empty() {
            self.config.ca_certs.push(certs);
        }
        self
    }

    /// Trust the PEM encoded CA certificates stored in `file`.
    ///
    /// Can be called repeatedly; an empty path is ignored.
    pub fn with_ca_file(mut self, file: impl Into<PathBuf>) -> Self {
        let file = file.into();
        if !file.as_os_str().is_empty() {
            self.config.ca_files.push(file);
        }
        self
    }

    /// Enable or disable redacted request/response dumps.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Send debug output somewhere other than `tracing`.
    pub fn with_debug_sink(mut self, sink: Arc<dyn DebugSink>) -> Self {
        self.config.debug_sink = sink;
        self
    }

    /// Build the client configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
