//! # awx-client
//!
//! Core HTTP transport for the AWX / Ansible Tower REST API.
//!
//! This crate provides the foundational pieces every higher layer builds on:
//! - URL composition against the versioned API root (always slash-terminated)
//! - GET/POST dispatch with the standard AWX headers
//! - Custom CA trust stores, proxies and insecure mode
//! - Credential-redacted debug logging of requests and responses
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (awx-rest resources: organizations, projects, jobs, ...)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Authenticator                           │
//! │  (awx-auth: legacy token → personal access token fallback)  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      HttpClient                             │
//! │  - UrlComposer (base + v2 + path + "/" + ?query)            │
//! │  - Headers, status check (200..=202), JSON decode           │
//! │  - Redacted debug output through a DebugSink                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use awx_api_client::{Authorization, ClientConfig, HttpClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), awx_api_client::Error> {
//!     let http = HttpClient::new("https://awx.example.com/api", ClientConfig::default())?;
//!
//!     let ping: serde_json::Value = http
//!         .send_json(http.get("ping").auth(Authorization::bearer("...")))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod endpoint;
mod error;
pub mod redact;
mod request;
mod tls;

pub use client::{DebugSink, HttpClient, TracingSink};
pub use config::{ClientConfig, ClientConfigBuilder};
pub use endpoint::UrlComposer;
pub use error::{Error, ErrorKind, Result};
pub use request::{Authorization, RequestBuilder, RequestMethod};

/// Version segment of the AWX API every path is resolved against.
pub const DEFAULT_API_VERSION: &str = "v2";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("awx-api/", env!("CARGO_PKG_VERSION"));
