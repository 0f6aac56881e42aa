use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{Result, StorefrontError};

pub const API_URL_PRODUCTION: &str = "https://api.cosmicjs.com/v3";
pub const API_URL_STAGING: &str = "https://api.cosmic-staging.com/v3";

pub const ENV_BUCKET_SLUG: &str = "COSMIC_BUCKET_SLUG";
pub const ENV_READ_KEY: &str = "COSMIC_READ_KEY";
pub const ENV_WRITE_KEY: &str = "COSMIC_WRITE_KEY";
pub const ENV_API_ENVIRONMENT: &str = "COSMIC_API_ENVIRONMENT";
pub const ENV_API_URL: &str = "COSMIC_API_URL";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Relations are resolved exactly one level deep.
pub const RELATION_DEPTH: u8 = 1;

pub const SITE_NAME: &str = "ShopCosmic";

/// Object types stored in the bucket.
pub const TYPE_CATEGORIES: &str = "categories";
pub const TYPE_PRODUCTS: &str = "products";
pub const TYPE_REVIEWS: &str = "reviews";

/// Properties requested for categories and products.
pub const CATALOG_PROPS: &[&str] = &["id", "title", "slug", "metadata", "thumbnail"];

/// Properties requested for reviews (reviews carry no thumbnail).
pub const REVIEW_PROPS: &[&str] = &["id", "title", "slug", "metadata"];

// ---------------------------------------------------------------------------
// ApiEnvironment
// ---------------------------------------------------------------------------

/// Which hosted Cosmic API the bucket lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiEnvironment {
    Production,
    #[default]
    Staging,
}

impl ApiEnvironment {
    pub fn api_url(self) -> &'static str {
        match self {
            ApiEnvironment::Production => API_URL_PRODUCTION,
            ApiEnvironment::Staging => API_URL_STAGING,
        }
    }
}

impl FromStr for ApiEnvironment {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" => Ok(ApiEnvironment::Production),
            "staging" => Ok(ApiEnvironment::Staging),
            other => Err(StorefrontError::InvalidArgument(format!(
                "Unknown API environment '{}' (expected 'staging' or 'production')",
                other
            ))),
        }
    }
}

impl fmt::Display for ApiEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiEnvironment::Production => f.write_str("production"),
            ApiEnvironment::Staging => f.write_str("staging"),
        }
    }
}

// ---------------------------------------------------------------------------
// StoreConfig
// ---------------------------------------------------------------------------

/// Resolved bucket namespace, credentials and endpoint for the content API.
#[derive(Clone)]
pub struct StoreConfig {
    pub bucket_slug: String,
    pub read_key: String,
    /// Carried for parity with the bucket credentials; reads never send it.
    pub write_key: String,
    pub api_url: String,
    pub timeout: Duration,
}

impl StoreConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    ///
    /// Blank values count as missing. The error names every missing variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bucket_slug = get(ENV_BUCKET_SLUG);
        let read_key = get(ENV_READ_KEY);
        let write_key = get(ENV_WRITE_KEY);

        let missing: Vec<&str> = [
            (ENV_BUCKET_SLUG, bucket_slug.is_none()),
            (ENV_READ_KEY, read_key.is_none()),
            (ENV_WRITE_KEY, write_key.is_none()),
        ]
        .iter()
        .filter(|(_, absent)| *absent)
        .map(|(name, _)| *name)
        .collect();

        if !missing.is_empty() {
            return Err(StorefrontError::Config(missing.join(", ")));
        }

        let environment = match get(ENV_API_ENVIRONMENT) {
            Some(raw) => raw.parse()?,
            None => ApiEnvironment::default(),
        };
        let api_url = get(ENV_API_URL).unwrap_or_else(|| environment.api_url().to_string());

        Ok(Self {
            bucket_slug: bucket_slug.unwrap_or_default(),
            read_key: read_key.unwrap_or_default(),
            write_key: write_key.unwrap_or_default(),
            api_url,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// URL of the bucket's object collection endpoint.
    pub fn objects_url(&self) -> String {
        format!(
            "{}/buckets/{}/objects",
            self.api_url.trim_end_matches('/'),
            self.bucket_slug
        )
    }
}

// Keys stay out of logs.
impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("bucket_slug", &self.bucket_slug)
            .field("read_key", &"<redacted>")
            .field("write_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
