//! # awx-rest
//!
//! Typed access to the AWX / Ansible Tower REST API.
//!
//! ## Features
//!
//! - **Connection** - validated configuration, lazy token acquisition
//! - **Resources** - organizations, users, projects, job templates and jobs
//! - **Filters** - repeatable `name=value` query filters on list requests
//! - **Launch** - start a job from a template with a host limit and extra vars
//!
//! Every resource follows the same shape: a collection's `get()` lists it,
//! `id(n)` addresses one object, and the object's `get()` fetches it. Each
//! request is sent with `send()`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use awx_api_rest::{Connection, ConnectionConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), awx_api_rest::Error> {
//!     let connection = Connection::new(
//!         ConnectionConfig::builder()
//!             .with_url("https://awx.example.com/api")
//!             .with_username("admin")
//!             .with_password("password")
//!             .build(),
//!     )?;
//!
//!     // List
//!     let organizations = connection.organizations().get().send().await?;
//!     for organization in organizations.results() {
//!         println!("{} {}", organization.id(), organization.name());
//!     }
//!
//!     // Filter
//!     let templates = connection
//!         .job_templates()
//!         .get()
//!         .filter("project__name", "Demo Project")
//!         .filter("name", "Demo Job Template")
//!         .send()
//!         .await?;
//!
//!     // Launch
//!     for template in templates.results() {
//!         let launched = connection
//!             .job_templates()
//!             .id(template.id())
//!             .launch()
//!             .post()
//!             .limit("web01")
//!             .extra_var("release", "1.2.3")
//!             .send()
//!             .await?;
//!
//!         let job = connection.jobs().id(launched.job()).get().send().await?;
//!         println!("job {} is {}", job.result().id(), job.result().status());
//!     }
//!
//!     connection.close().await;
//!     Ok(())
//! }
//! ```

mod config;
mod connection;
mod job;
mod job_template;
mod organization;
mod project;
mod resource;
mod user;

pub use config::{ConnectionConfig, ConnectionConfigBuilder};
pub use connection::Connection;
pub use resource::{
    CollectionResource, Entity, GetRequest, GetResponse, InstanceResource, ListRequest,
    ListResponse,
};

// Entities
pub use job::{Job, JobStatus};
pub use job_template::{JobTemplate, LaunchRequestBuilder, LaunchResource, LaunchResponse};
pub use organization::Organization;
pub use project::Project;
pub use user::User;

pub use awx_api_auth::ActiveToken;
pub use awx_api_client::{Error, ErrorKind, Result};
