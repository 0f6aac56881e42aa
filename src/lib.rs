//! Cosmic storefront SDK for Rust.
//!
//! Reads catalog content (categories, products, reviews) from a Cosmic
//! headless content bucket, derives presentation fields, and assembles and
//! renders the storefront's pages as HTML.
//!
//! # Quick start
//!
//! ```no_run
//! use cosmic_storefront::{pages, render, StorefrontSdk};
//!
//! # async fn example() -> cosmic_storefront::Result<()> {
//! let sdk = StorefrontSdk::builder().from_env().build()?;
//!
//! // Query content
//! let products = sdk.products().list().await?;
//!
//! // Assemble and render a page
//! let home = pages::home(&sdk).await?;
//! let html = render::render_home(&home);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod connection;
pub mod error;
pub mod models;
pub mod object_query;
pub mod pages;
pub mod queries;
pub mod render;
pub mod view;

pub use config::{ApiEnvironment, StoreConfig};
pub use connection::{Connection, Fetched};
pub use error::{Operation, Result, StorefrontError};
pub use object_query::ObjectQuery;

use std::fmt;
use std::time::Duration;

use config::{ENV_API_ENVIRONMENT, ENV_API_URL, ENV_BUCKET_SLUG, ENV_READ_KEY, ENV_WRITE_KEY};

// ---------------------------------------------------------------------------
// StorefrontSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`StorefrontSdk`] instance.
///
/// Use [`StorefrontSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](StorefrontSdkBuilder::build) to create the SDK.
#[derive(Debug, Clone)]
pub struct StorefrontSdkBuilder {
    bucket_slug: Option<String>,
    read_key: Option<String>,
    write_key: Option<String>,
    /// Raw environment name; parsed in `build()`.
    environment: Option<String>,
    api_url: Option<String>,
    timeout: Duration,
}

impl Default for StorefrontSdkBuilder {
    fn default() -> Self {
        Self {
            bucket_slug: None,
            read_key: None,
            write_key: None,
            environment: None,
            api_url: None,
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl StorefrontSdkBuilder {
    /// Set the bucket slug that selects the dataset.
    pub fn bucket_slug(mut self, slug: impl Into<String>) -> Self {
        self.bucket_slug = Some(slug.into());
        self
    }

    /// Set the bucket read key.
    pub fn read_key(mut self, key: impl Into<String>) -> Self {
        self.read_key = Some(key.into());
        self
    }

    /// Set the bucket write key.
    ///
    /// Required alongside the read key, but never sent by read queries.
    pub fn write_key(mut self, key: impl Into<String>) -> Self {
        self.write_key = Some(key.into());
        self
    }

    /// Choose the hosted API environment. Defaults to staging.
    pub fn environment(mut self, environment: ApiEnvironment) -> Self {
        self.environment = Some(environment.to_string());
        self
    }

    /// Override the API base URL (e.g. a local mirror of the content API).
    ///
    /// Takes precedence over [`environment`](Self::environment).
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Set the HTTP request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fill every unset option from the `COSMIC_*` environment variables.
    ///
    /// `COSMIC_API_ENVIRONMENT` is validated by [`build()`](Self::build).
    pub fn from_env(mut self) -> Self {
        let var = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());
        if self.bucket_slug.is_none() {
            self.bucket_slug = var(ENV_BUCKET_SLUG);
        }
        if self.read_key.is_none() {
            self.read_key = var(ENV_READ_KEY);
        }
        if self.write_key.is_none() {
            self.write_key = var(ENV_WRITE_KEY);
        }
        if self.api_url.is_none() {
            self.api_url = var(ENV_API_URL);
        }
        if self.environment.is_none() {
            self.environment = var(ENV_API_ENVIRONMENT);
        }
        self
    }

    /// Validate the configuration and build the SDK.
    ///
    /// Fails with [`StorefrontError::Config`] naming every missing credential,
    /// so no data operation can run without them, and with
    /// [`StorefrontError::InvalidArgument`] for an unknown environment name.
    pub fn build(self) -> Result<StorefrontSdk> {
        let mut config = StoreConfig::from_lookup(|key| match key {
            ENV_BUCKET_SLUG => self.bucket_slug.clone(),
            ENV_READ_KEY => self.read_key.clone(),
            ENV_WRITE_KEY => self.write_key.clone(),
            ENV_API_URL => self.api_url.clone(),
            ENV_API_ENVIRONMENT => self.environment.clone(),
            _ => None,
        })?;
        config.timeout = self.timeout;

        let conn = Connection::new(config)?;
        Ok(StorefrontSdk { conn })
    }
}

// ---------------------------------------------------------------------------
// StorefrontSdk
// ---------------------------------------------------------------------------

/// The main entry point for the storefront SDK.
///
/// Wraps a [`Connection`] and exposes per-type query interfaces as
/// lightweight borrowing wrappers. Cheap to clone; clones share one HTTP
/// connection pool.
#[derive(Debug, Clone)]
pub struct StorefrontSdk {
    conn: Connection,
}

impl StorefrontSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> StorefrontSdkBuilder {
        StorefrontSdkBuilder::default()
    }

    /// Build an SDK entirely from the `COSMIC_*` environment variables.
    pub fn from_env() -> Result<Self> {
        let conn = Connection::new(StoreConfig::from_env()?)?;
        Ok(Self { conn })
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the category query interface.
    pub fn categories(&self) -> queries::CategoryQuery<'_> {
        queries::CategoryQuery::new(&self.conn)
    }

    /// Access the product query interface.
    ///
    /// Products carry their category resolved one level deep.
    pub fn products(&self) -> queries::ProductQuery<'_> {
        queries::ProductQuery::new(&self.conn)
    }

    /// Access the review query interface.
    ///
    /// Reviews carry their product resolved one level deep.
    pub fn reviews(&self) -> queries::ReviewQuery<'_> {
        queries::ReviewQuery::new(&self.conn)
    }

    /// Return a reference to the underlying [`Connection`] for advanced usage.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for StorefrontSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.conn.config();
        write!(
            f,
            "StorefrontSdk(bucket={}, api_url={}, timeout={}s)",
            config.bucket_slug,
            config.api_url,
            config.timeout.as_secs()
        )
    }
}
