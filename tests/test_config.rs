//! Configuration tests: credential lookup, endpoint selection, builder.

use std::collections::HashMap;
use std::time::Duration;

use cosmic_storefront::config::{API_URL_PRODUCTION, API_URL_STAGING, DEFAULT_TIMEOUT};
use cosmic_storefront::{ApiEnvironment, StoreConfig, StorefrontError, StorefrontSdk};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

fn full() -> Vec<(&'static str, &'static str)> {
    vec![
        ("COSMIC_BUCKET_SLUG", "shop"),
        ("COSMIC_READ_KEY", "read"),
        ("COSMIC_WRITE_KEY", "write"),
    ]
}

// ---------------------------------------------------------------------------
// StoreConfig::from_lookup
// ---------------------------------------------------------------------------

#[test]
fn from_lookup_reads_credentials() {
    let config = StoreConfig::from_lookup(lookup(&full())).unwrap();
    assert_eq!(config.bucket_slug, "shop");
    assert_eq!(config.read_key, "read");
    assert_eq!(config.write_key, "write");
    assert_eq!(config.timeout, DEFAULT_TIMEOUT);
}

#[test]
fn from_lookup_defaults_to_staging() {
    let config = StoreConfig::from_lookup(lookup(&full())).unwrap();
    assert_eq!(config.api_url, API_URL_STAGING);
}

#[test]
fn from_lookup_selects_production() {
    let mut pairs = full();
    pairs.push(("COSMIC_API_ENVIRONMENT", "Production"));
    let config = StoreConfig::from_lookup(lookup(&pairs)).unwrap();
    assert_eq!(config.api_url, API_URL_PRODUCTION);
}

#[test]
fn from_lookup_explicit_url_wins() {
    let mut pairs = full();
    pairs.push(("COSMIC_API_ENVIRONMENT", "production"));
    pairs.push(("COSMIC_API_URL", "http://localhost:9000/v3"));
    let config = StoreConfig::from_lookup(lookup(&pairs)).unwrap();
    assert_eq!(config.api_url, "http://localhost:9000/v3");
}

#[test]
fn from_lookup_names_every_missing_key() {
    let err = StoreConfig::from_lookup(lookup(&[])).unwrap_err();
    match err {
        StorefrontError::Config(msg) => {
            assert_eq!(msg, "COSMIC_BUCKET_SLUG, COSMIC_READ_KEY, COSMIC_WRITE_KEY")
        }
        other => panic!("expected Config error, got {:?}", other),
    }
}

#[test]
fn from_lookup_blank_counts_as_missing() {
    let err = StoreConfig::from_lookup(lookup(&[
        ("COSMIC_BUCKET_SLUG", "shop"),
        ("COSMIC_READ_KEY", "   "),
        ("COSMIC_WRITE_KEY", "write"),
    ]))
    .unwrap_err();
    assert!(matches!(err, StorefrontError::Config(ref m) if m == "COSMIC_READ_KEY"));
    assert_eq!(err.to_string(), "Missing configuration: COSMIC_READ_KEY");
}

#[test]
fn from_lookup_rejects_unknown_environment() {
    let mut pairs = full();
    pairs.push(("COSMIC_API_ENVIRONMENT", "qa"));
    let err = StoreConfig::from_lookup(lookup(&pairs)).unwrap_err();
    assert!(matches!(err, StorefrontError::InvalidArgument(_)));
}

#[test]
fn objects_url_joins_bucket() {
    let mut pairs = full();
    pairs.push(("COSMIC_API_URL", "http://localhost:9000/v3/"));
    let config = StoreConfig::from_lookup(lookup(&pairs)).unwrap();
    assert_eq!(
        config.objects_url(),
        "http://localhost:9000/v3/buckets/shop/objects"
    );
}

#[test]
fn debug_redacts_keys() {
    let config = StoreConfig::from_lookup(lookup(&[
        ("COSMIC_BUCKET_SLUG", "shop"),
        ("COSMIC_READ_KEY", "secret-read"),
        ("COSMIC_WRITE_KEY", "secret-write"),
    ]))
    .unwrap();
    let dbg = format!("{:?}", config);
    assert!(dbg.contains("shop"));
    assert!(!dbg.contains("secret-read"));
    assert!(!dbg.contains("secret-write"));
}

// ---------------------------------------------------------------------------
// ApiEnvironment
// ---------------------------------------------------------------------------

#[test]
fn api_environment_parses_case_insensitively() {
    assert_eq!(
        "STAGING".parse::<ApiEnvironment>().unwrap(),
        ApiEnvironment::Staging
    );
    assert_eq!(
        " production ".parse::<ApiEnvironment>().unwrap(),
        ApiEnvironment::Production
    );
    assert_eq!(ApiEnvironment::default(), ApiEnvironment::Staging);
    assert_eq!(ApiEnvironment::Production.to_string(), "production");
}

// ---------------------------------------------------------------------------
// StorefrontSdkBuilder
// ---------------------------------------------------------------------------

#[test]
fn builder_requires_write_key() {
    let err = StorefrontSdk::builder()
        .bucket_slug("shop")
        .read_key("read")
        .build()
        .unwrap_err();
    assert!(matches!(err, StorefrontError::Config(ref m) if m == "COSMIC_WRITE_KEY"));
}

#[test]
fn builder_applies_options() {
    let sdk = StorefrontSdk::builder()
        .bucket_slug("shop")
        .read_key("read")
        .write_key("write")
        .environment(ApiEnvironment::Production)
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    let config = sdk.connection().config();
    assert_eq!(config.api_url, API_URL_PRODUCTION);
    assert_eq!(sdk.connection().timeout(), Duration::from_secs(5));
    assert_eq!(
        sdk.to_string(),
        "StorefrontSdk(bucket=shop, api_url=https://api.cosmicjs.com/v3, timeout=5s)"
    );
}

#[test]
fn builder_api_url_overrides_environment() {
    let sdk = StorefrontSdk::builder()
        .bucket_slug("shop")
        .read_key("read")
        .write_key("write")
        .environment(ApiEnvironment::Production)
        .api_url("http://127.0.0.1:8080/v3")
        .build()
        .unwrap();
    assert_eq!(sdk.connection().config().api_url, "http://127.0.0.1:8080/v3");
}

#[test]
fn builder_from_env_rejects_unknown_environment() {
    std::env::set_var("COSMIC_API_ENVIRONMENT", "prodution");
    let result = StorefrontSdk::builder()
        .bucket_slug("shop")
        .read_key("read")
        .write_key("write")
        .from_env()
        .build();
    std::env::remove_var("COSMIC_API_ENVIRONMENT");

    assert!(matches!(result, Err(StorefrontError::InvalidArgument(_))));
}

#[test]
fn builder_environment_setter_wins_over_env() {
    let sdk = StorefrontSdk::builder()
        .bucket_slug("shop")
        .read_key("read")
        .write_key("write")
        .environment(ApiEnvironment::Production)
        .from_env()
        .build()
        .unwrap();
    assert_eq!(sdk.connection().config().api_url, API_URL_PRODUCTION);
}
