//! Job templates and launching them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::instrument;

use awx_api_client::{Error, ErrorKind, Result};

use crate::connection::Connection;
use crate::resource::{Entity, InstanceResource};

/// A reusable job definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobTemplate {
    id: u64,
    name: String,
    ask_limit_on_launch: bool,
    ask_vars_on_launch: bool,
}

impl JobTemplate {
    /// Server-assigned template id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Template name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a host limit passed at launch is honoured.
    pub fn ask_limit_on_launch(&self) -> bool {
        self.ask_limit_on_launch
    }

    /// Whether extra variables passed at launch are honoured.
    pub fn ask_vars_on_launch(&self) -> bool {
        self.ask_vars_on_launch
    }
}

#[derive(Debug, Deserialize)]
pub struct JobTemplateWire {
    id: u64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    ask_limit_on_launch: bool,
    #[serde(default)]
    ask_variables_on_launch: bool,
}

impl Entity for JobTemplate {
    type Wire = JobTemplateWire;

    fn from_wire(wire: JobTemplateWire) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            ask_limit_on_launch: wire.ask_limit_on_launch,
            ask_vars_on_launch: wire.ask_variables_on_launch,
        }
    }
}

impl<'c> InstanceResource<'c, JobTemplate> {
    /// The template's `launch` endpoint.
    pub fn launch(&self) -> LaunchResource<'c> {
        LaunchResource {
            connection: self.connection,
            path: format!("{}/launch", self.path),
        }
    }
}

/// The `job_templates/{id}/launch` endpoint.
#[derive(Debug)]
pub struct LaunchResource<'c> {
    connection: &'c Connection,
    path: String,
}

impl<'c> LaunchResource<'c> {
    /// The path relative to the API root.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Start building a launch request.
    pub fn post(&self) -> LaunchRequestBuilder<'c> {
        LaunchRequestBuilder {
            connection: self.connection,
            path: self.path.clone(),
            limit: None,
            extra_vars: Map::new(),
        }
    }
}

/// Builder for a POST that launches a job.
#[derive(Debug)]
pub struct LaunchRequestBuilder<'c> {
    connection: &'c Connection,
    path: String,
    limit: Option<String>,
    extra_vars: Map<String, Value>,
}

#[derive(Serialize)]
struct LaunchBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<&'a str>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    extra_vars: &'a Map<String, Value>,
}

#[derive(Deserialize)]
struct LaunchWire {
    #[serde(default)]
    job: Option<u64>,
    #[serde(default)]
    id: Option<u64>,
}

impl<'c> LaunchRequestBuilder<'c> {
    /// Restrict the run to hosts matching `limit`. An empty limit is not sent.
    pub fn limit(mut self, limit: impl Into<String>) -> Self {
        let limit = limit.into();
        self.limit = if limit.is_empty() { None } else { Some(limit) };
        self
    }

    /// Add extra variables, replacing any with the same name.
    pub fn extra_vars<K, V>(mut self, vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        for (name, value) in vars {
            self.extra_vars.insert(name.into(), value.into());
        }
        self
    }

    /// Add a single extra variable.
    pub fn extra_var(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra_vars.insert(name.into(), value.into());
        self
    }

    /// Launch the job.
    #[instrument(skip(self), fields(path = %self.path))]
    pub async fn send(&self) -> Result<LaunchResponse> {
        let body = LaunchBody {
            limit: self.limit.as_deref(),
            extra_vars: &self.extra_vars,
        };

        let wire: LaunchWire = self.connection.authenticated_post(&self.path, &body).await?;
        let job = wire.job.or(wire.id).ok_or_else(|| {
            Error::new(ErrorKind::Decode(
                "The launch response doesn't contain a job identifier".to_string(),
            ))
        })?;

        Ok(LaunchResponse { job })
    }
}

/// Result of launching a job template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchResponse {
    job: u64,
}

impl LaunchResponse {
    /// Id of the job that was started.
    pub fn job(&self) -> u64 {
        self.job
    }
}
