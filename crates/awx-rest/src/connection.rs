//! AWX connection: transport plus authenticator.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::instrument;

use awx_api_auth::{ActiveToken, Authenticator, Credentials};
use awx_api_client::{HttpClient, Result};

use crate::config::ConnectionConfig;
use crate::job::Job;
use crate::job_template::JobTemplate;
use crate::organization::Organization;
use crate::project::Project;
use crate::resource::CollectionResource;
use crate::user::User;

/// A validated connection to an AWX server.
///
/// Resources borrow the connection, so one connection serves any number of
/// resources and requests. Token acquisition happens lazily on the first
/// authenticated request.
///
/// # Example
///
/// ```rust,ignore
/// use awx_api_rest::{Connection, ConnectionConfig};
///
/// let connection = Connection::new(
///     ConnectionConfig::builder()
///         .with_url("https://awx.example.com/api")
///         .with_username("admin")
///         .with_password("password")
///         .build(),
/// )?;
///
/// let templates = connection
///     .job_templates()
///     .get()
///     .filter("project__name", "Demo Project")
///     .send()
///     .await?;
/// ```
#[derive(Debug)]
pub struct Connection {
    http: HttpClient,
    auth: Authenticator,
}

impl Connection {
    /// Open a connection, validating the whole configuration.
    ///
    /// Fails with a configuration error for a missing or malformed URL or
    /// proxy, for anything but exactly one credential, and for CA material
    /// combined with insecure mode. CA material without parsable PEM
    /// certificates is a certificate error.
    pub fn new(config: ConnectionConfig) -> Result<Self> {
        let credentials = Credentials::from_parts(
            config.username.as_deref(),
            config.password.as_deref(),
            config.token.as_deref(),
            config.bearer_token.as_deref(),
        )?;
        let http = HttpClient::new(&config.url, config.client)?;

        Ok(Self {
            http,
            auth: Authenticator::new(credentials),
        })
    }

    /// Open a connection configured from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(ConnectionConfig::from_env()?)
    }

    /// The underlying HTTP client.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// The authenticator holding credentials and tokens.
    pub fn authenticator(&self) -> &Authenticator {
        &self.auth
    }

    /// Which token kind is in use, if any.
    pub async fn active_token(&self) -> Option<ActiveToken> {
        self.auth.active_token().await
    }

    /// Forget the legacy token.
    pub async fn close(&self) {
        self.auth.close().await;
    }

    /// GET `path` after making sure a token is available.
    #[instrument(skip(self, query))]
    pub async fn authenticated_get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T> {
        self.auth.ensure_token(&self.http).await?;

        let request = self
            .http
            .get(path)
            .maybe_auth(self.auth.authorization().await)
            .query_pairs(query.iter().cloned());

        self.http.send_json(request).await
    }

    /// POST `body` to `path` after making sure a token is available.
    #[instrument(skip(self, body))]
    pub async fn authenticated_post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.auth.ensure_token(&self.http).await?;

        let request = self
            .http
            .post(path)
            .maybe_auth(self.auth.authorization().await)
            .json(body)?;

        self.http.send_json(request).await
    }

    /// The organizations collection.
    pub fn organizations(&self) -> CollectionResource<'_, Organization> {
        CollectionResource::new(self, "organizations")
    }

    /// The users collection.
    pub fn users(&self) -> CollectionResource<'_, User> {
        CollectionResource::new(self, "users")
    }

    /// The projects collection.
    pub fn projects(&self) -> CollectionResource<'_, Project> {
        CollectionResource::new(self, "projects")
    }

    /// The job templates collection.
    pub fn job_templates(&self) -> CollectionResource<'_, JobTemplate> {
        CollectionResource::new(self, "job_templates")
    }

    /// The jobs collection.
    pub fn jobs(&self) -> CollectionResource<'_, Job> {
        CollectionResource::new(self, "jobs")
    }
}
