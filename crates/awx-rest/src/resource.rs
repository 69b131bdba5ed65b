//! Generic resources, requests and responses over typed entities.
//!
//! A resource is a path bound to a connection. Requests add query filters
//! and are sent with `send()`, which decodes the server JSON into the
//! entity's wire shape and projects it into the public type.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::instrument;

use awx_api_client::Result;

use crate::connection::Connection;

/// A typed AWX object with a server-side JSON shape.
pub trait Entity: Sized {
    /// The JSON shape the server sends. Unknown fields are ignored.
    type Wire: DeserializeOwned;

    /// Project the wire shape into the public type.
    fn from_wire(wire: Self::Wire) -> Self;
}

/// A collection such as `organizations` or `job_templates`.
pub struct CollectionResource<'c, T> {
    connection: &'c Connection,
    path: String,
    _entity: PhantomData<T>,
}

impl<'c, T: Entity> CollectionResource<'c, T> {
    /// Bind `path` on `connection`.
    pub fn new(connection: &'c Connection, path: impl Into<String>) -> Self {
        Self {
            connection,
            path: path.into(),
            _entity: PhantomData,
        }
    }

    /// The path relative to the API root.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// A request listing the collection.
    pub fn get(&self) -> ListRequest<'c, T> {
        ListRequest {
            connection: self.connection,
            path: self.path.clone(),
            query: Vec::new(),
            _entity: PhantomData,
        }
    }

    /// The instance with the given id.
    pub fn id(&self, id: u64) -> InstanceResource<'c, T> {
        InstanceResource::new(self.connection, format!("{}/{}", self.path, id))
    }
}

/// A single object such as `jobs/42`.
pub struct InstanceResource<'c, T> {
    pub(crate) connection: &'c Connection,
    pub(crate) path: String,
    _entity: PhantomData<T>,
}

impl<'c, T: Entity> InstanceResource<'c, T> {
    /// Bind `path` on `connection`.
    pub fn new(connection: &'c Connection, path: impl Into<String>) -> Self {
        Self {
            connection,
            path: path.into(),
            _entity: PhantomData,
        }
    }

    /// The path relative to the API root.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// A request fetching the object.
    pub fn get(&self) -> GetRequest<'c, T> {
        GetRequest {
            connection: self.connection,
            path: self.path.clone(),
            _entity: PhantomData,
        }
    }
}

/// A GET on a collection, narrowed by filters.
pub struct ListRequest<'c, T> {
    connection: &'c Connection,
    path: String,
    query: Vec<(String, String)>,
    _entity: PhantomData<T>,
}

impl<'c, T: Entity> ListRequest<'c, T> {
    /// Add a `name=value` query filter.
    ///
    /// Filters are sent in the order added. Repeating a name sends it again
    /// rather than replacing the earlier value.
    pub fn filter(mut self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// The filters added so far.
    pub fn filters(&self) -> &[(String, String)] {
        &self.query
    }

    /// Send the request.
    #[instrument(skip(self), fields(path = %self.path))]
    pub async fn send(&self) -> Result<ListResponse<T>> {
        let page: Page<T::Wire> = self
            .connection
            .authenticated_get(&self.path, &self.query)
            .await?;

        Ok(ListResponse {
            count: page.count,
            next: page.next,
            previous: page.previous,
            results: page.results.into_iter().map(T::from_wire).collect(),
        })
    }
}

/// A GET on a single object.
pub struct GetRequest<'c, T> {
    connection: &'c Connection,
    path: String,
    _entity: PhantomData<T>,
}

impl<'c, T: Entity> GetRequest<'c, T> {
    /// Send the request.
    #[instrument(skip(self), fields(path = %self.path))]
    pub async fn send(&self) -> Result<GetResponse<T>> {
        let wire: T::Wire = self.connection.authenticated_get(&self.path, &[]).await?;

        Ok(GetResponse {
            result: T::from_wire(wire),
        })
    }
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "W: DeserializeOwned"))]
struct Page<W> {
    #[serde(default)]
    count: u64,
    #[serde(default)]
    next: Option<String>,
    #[serde(default)]
    previous: Option<String>,
    #[serde(default)]
    results: Vec<W>,
}

/// One page of a collection listing.
///
/// `next` and `previous` are passed through as the server sent them and are
/// not followed.
#[derive(Debug, Clone, PartialEq)]
pub struct ListResponse<T> {
    count: u64,
    next: Option<String>,
    previous: Option<String>,
    results: Vec<T>,
}

impl<T> ListResponse<T> {
    /// Total number of matching objects across all pages.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Link to the next page.
    pub fn next(&self) -> Option<&str> {
        self.next.as_deref()
    }

    /// Link to the previous page.
    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// The objects on this page, in server order.
    pub fn results(&self) -> &[T] {
        &self.results
    }

    /// Take the objects on this page.
    pub fn into_results(self) -> Vec<T> {
        self.results
    }
}

/// A single fetched object.
#[derive(Debug, Clone, PartialEq)]
pub struct GetResponse<T> {
    result: T,
}

impl<T> GetResponse<T> {
    /// The fetched object.
    pub fn result(&self) -> &T {
        &self.result
    }

    /// Take the fetched object.
    pub fn into_result(self) -> T {
        self.result
    }
}
