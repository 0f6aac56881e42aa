//! HTTP connection to the content API with typed not-found handling.
//!
//! The store signals "no objects matched" with a 404 status. That outcome is
//! returned as [`Fetched::NotFound`] rather than as an error; every other
//! non-success status, transport failure or malformed body is an `Err`.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::config::StoreConfig;
use crate::error::{Result, StorefrontError};
use crate::object_query::ObjectQuery;

// ---------------------------------------------------------------------------
// Fetched
// ---------------------------------------------------------------------------

/// Outcome of a content request that reached the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    Found(T),
    NotFound,
}

impl<T> Fetched<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Fetched::Found(_))
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Fetched::Found(v) => Some(v),
            Fetched::NotFound => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Fetched<U> {
        match self {
            Fetched::Found(v) => Fetched::Found(f(v)),
            Fetched::NotFound => Fetched::NotFound,
        }
    }
}

impl<T> Fetched<Vec<T>> {
    /// Collapse a list outcome, treating not-found as an empty list.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Fetched::Found(v) => v,
            Fetched::NotFound => Vec::new(),
        }
    }
}

/// Response body of the `objects` endpoint.
#[derive(Debug, Deserialize)]
struct ObjectsEnvelope<T> {
    #[serde(default = "Vec::new")]
    objects: Vec<T>,
}

/// Error body the store sends with non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

// ---------------------------------------------------------------------------
// Connection
// ---------------------------------------------------------------------------

/// Wraps a pooled HTTP client bound to one bucket.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Connection {
    client: Client,
    config: StoreConfig,
}

impl Connection {
    /// Create a connection for the given bucket configuration.
    pub fn new(config: StoreConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// The configuration this connection was built from.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Request timeout applied to every call.
    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    /// Run a query and deserialize every returned object into `T`.
    ///
    /// An empty `objects` array in a successful response is `Found(vec![])`;
    /// a 404 is `NotFound`.
    pub async fn find<T: DeserializeOwned>(&self, query: &ObjectQuery) -> Result<Fetched<Vec<T>>> {
        let mut params = query.build();
        params.push(("read_key".to_string(), self.config.read_key.clone()));

        let resp = self
            .client
            .get(self.config.objects_url())
            .query(&params)
            .send()
            .await?;

        let status = resp.status();
        debug!(
            object_type = query.object_type(),
            filter = %query.filter(),
            status = status.as_u16(),
            "content request"
        );

        if status == StatusCode::NOT_FOUND {
            return Ok(Fetched::NotFound);
        }

        let bytes = resp.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&bytes)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| String::from_utf8_lossy(&bytes).trim().to_string());
            return Err(StorefrontError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: ObjectsEnvelope<T> = serde_json::from_slice(&bytes)?;
        Ok(Fetched::Found(envelope.objects))
    }

    /// Run a query limited to one object and return it.
    ///
    /// Both a 404 and an empty result set map to `NotFound`.
    pub async fn find_one<T: DeserializeOwned>(&self, query: &ObjectQuery) -> Result<Fetched<T>> {
        let mut single = query.clone();
        single.limit(1);

        match self.find::<T>(&single).await? {
            Fetched::Found(objects) => Ok(objects
                .into_iter()
                .next()
                .map_or(Fetched::NotFound, Fetched::Found)),
            Fetched::NotFound => Ok(Fetched::NotFound),
        }
    }
}
