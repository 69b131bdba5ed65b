//! HTTP request building with AWX authorization schemes.

use serde::Serialize;

use crate::error::{Error, ErrorKind, Result};

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
}

impl RequestMethod {
    /// Convert to reqwest::Method.
    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
        }
    }

    /// Upper-case method name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
        }
    }
}

/// Value of the `Authorization` header.
///
/// Secrets are redacted in Debug output.
#[derive(Clone, PartialEq, Eq)]
pub enum Authorization {
    /// `Token <t>`, issued by the legacy `authtoken` endpoint.
    Token(String),
    /// `Bearer <t>`, an OAuth2 personal access token.
    Bearer(String),
    /// HTTP Basic with username and password.
    Basic { username: String, password: String },
}

impl std::fmt::Debug for Authorization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Authorization::Token(_) => f.debug_tuple("Token").field(&"[REDACTED]").finish(),
            Authorization::Bearer(_) => f.debug_tuple("Bearer").field(&"[REDACTED]").finish(),
            Authorization::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"[REDACTED]")
                .finish(),
        }
    }
}

impl Authorization {
    /// Legacy token authorization.
    pub fn token(token: impl Into<String>) -> Self {
        Authorization::Token(token.into())
    }

    /// OAuth2 bearer authorization.
    pub fn bearer(token: impl Into<String>) -> Self {
        Authorization::Bearer(token.into())
    }

    /// HTTP Basic authorization.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Authorization::Basic {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Builder for a single GET or POST against a path relative to the API root.
#[derive(Debug)]
pub struct RequestBuilder {
    pub(crate) method: RequestMethod,
    pub(crate) path: String,
    pub(crate) query_params: Vec<(String, String)>,
    pub(crate) body: Option<Vec<u8>>,
    pub(crate) authorization: Option<Authorization>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: RequestMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query_params: Vec::new(),
            body: None,
            authorization: None,
        }
    }

    /// Set the authorization sent with the request.
    pub fn auth(mut self, authorization: Authorization) -> Self {
        self.authorization = Some(authorization);
        self
    }

    /// Set the authorization if one is available.
    pub fn maybe_auth(mut self, authorization: Option<Authorization>) -> Self {
        self.authorization = authorization;
        self
    }

    /// Add a query parameter. Repeated names are all sent, in order.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((name.into(), value.into()));
        self
    }

    /// Append several query parameters.
    pub fn query_pairs(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query_params.extend(pairs);
        self
    }

    /// Set JSON body.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        let bytes = serde_json::to_vec(body)
            .map_err(|e| Error::with_source(ErrorKind::Encode(e.to_string()), e))?;
        self.body = Some(bytes);
        Ok(self)
    }

    /// The request method.
    pub fn method(&self) -> RequestMethod {
        self.method
    }

    /// The path relative to the API root.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The query parameters in insertion order.
    pub fn query_params(&self) -> &[(String, String)] {
        &self.query_params
    }
}
