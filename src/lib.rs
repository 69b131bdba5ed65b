//! # awx-api
//!
//! A typed AWX / Ansible Tower API client library for Rust.
//!
//! This library provides typed access to organizations, users, projects,
//! job templates and jobs, with token acquisition and redacted debug output
//! built in.
//!
//! ## Security
//!
//! - Passwords and tokens are redacted in Debug output
//! - Debug dumps redact `password` fields and credential headers
//! - Tracing spans skip credential parameters
//!
//! ## Crates
//!
//! - **awx-api-client** - HTTP transport, URL composition, TLS trust, redaction
//! - **awx-api-auth** - Credential modes, legacy token and personal access token acquisition
//! - **awx-api-rest** - Connections and typed resources
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use awx_api::{Connection, ConnectionConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // AWX_URL, AWX_USERNAME, AWX_PASSWORD, ...
//!     let connection = Connection::new(ConnectionConfig::from_env()?)?;
//!
//!     let projects = connection.projects().get().send().await?;
//!     for project in projects.results() {
//!         println!("{} ({})", project.name(), project.scm_url());
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "auth")]
pub use awx_api_auth as auth;
#[cfg(feature = "client")]
pub use awx_api_client as client;
#[cfg(feature = "rest")]
pub use awx_api_rest as rest;

// Re-export commonly used types at the top level
#[cfg(feature = "auth")]
pub use awx_api_auth::{ActiveToken, Credentials};
#[cfg(feature = "client")]
pub use awx_api_client::{ClientConfig, Error, ErrorKind, Result};
#[cfg(feature = "rest")]
pub use awx_api_rest::{Connection, ConnectionConfig, Job, JobStatus, JobTemplate};
