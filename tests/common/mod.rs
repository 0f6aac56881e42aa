//! Shared test fixtures for the storefront integration tests.
//!
//! Provides `start()` which serves a small in-memory catalog over a local
//! stand-in for the content API's `objects` endpoint and returns an SDK
//! pointed at it. Special bucket slugs inject failures.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use cosmic_storefront::StorefrontSdk;
use serde_json::{json, Map, Value};

pub const BUCKET: &str = "test-store";
/// Every request fails with a 500.
pub const BROKEN_BUCKET: &str = "broken-store";
/// Every request finds nothing.
pub const EMPTY_BUCKET: &str = "empty-store";
/// Review requests fail with a 503; everything else is served.
pub const FLAKY_REVIEWS_BUCKET: &str = "flaky-reviews";
/// Every request succeeds with a body that is not JSON.
pub const GARBAGE_BUCKET: &str = "garbage-store";

pub const READ_KEY: &str = "test-read-key";
pub const WRITE_KEY: &str = "test-write-key";

pub type RequestLog = Arc<Mutex<Vec<HashMap<String, String>>>>;

/// A running fixture server and an SDK bound to one of its buckets.
pub struct Fixture {
    pub sdk: StorefrontSdk,
    pub base_url: String,
    requests: RequestLog,
}

impl Fixture {
    /// Query-string parameters of every request received so far, in order.
    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.requests.lock().unwrap().clone()
    }

    /// The most recent request's parameters.
    pub fn last_request(&self) -> HashMap<String, String> {
        self.requests().pop().expect("no requests recorded")
    }

    /// The decoded JSON filter of the most recent request.
    pub fn last_filter(&self) -> Value {
        serde_json::from_str(&self.last_request()["query"]).unwrap()
    }
}

/// Serve the sample catalog and return an SDK for the default bucket.
pub async fn start() -> Fixture {
    start_with_bucket(BUCKET).await
}

/// Serve the sample catalog and return an SDK for `bucket`.
pub async fn start_with_bucket(bucket: &str) -> Fixture {
    let requests = RequestLog::default();
    let app = Router::new()
        .route("/v3/buckets/{bucket}/objects", get(objects))
        .with_state(requests.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let base_url = format!("http://{}/v3", addr);
    let sdk = sdk_for(&base_url, bucket, READ_KEY);

    Fixture {
        sdk,
        base_url,
        requests,
    }
}

/// Build an SDK against an already running fixture.
pub fn sdk_for(base_url: &str, bucket: &str, read_key: &str) -> StorefrontSdk {
    StorefrontSdk::builder()
        .bucket_slug(bucket)
        .read_key(read_key)
        .write_key(WRITE_KEY)
        .api_url(base_url)
        .build()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Endpoint
// ---------------------------------------------------------------------------

async fn objects(
    State(log): State<RequestLog>,
    Path(bucket): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    log.lock().unwrap().push(params.clone());

    if params.get("read_key").map(String::as_str) != Some(READ_KEY) {
        return error(StatusCode::UNAUTHORIZED, "Invalid read key");
    }

    let filter: Map<String, Value> = match params
        .get("query")
        .and_then(|q| serde_json::from_str(q).ok())
    {
        Some(f) => f,
        None => return error(StatusCode::BAD_REQUEST, "Missing or invalid query"),
    };
    let object_type = filter
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    match bucket.as_str() {
        BROKEN_BUCKET => return error(StatusCode::INTERNAL_SERVER_ERROR, "Internal failure"),
        FLAKY_REVIEWS_BUCKET if object_type == "reviews" => {
            return error(StatusCode::SERVICE_UNAVAILABLE, "Reviews unavailable")
        }
        GARBAGE_BUCKET => return (StatusCode::OK, "<html>not json</html>").into_response(),
        _ => {}
    }

    let pool = if bucket == EMPTY_BUCKET {
        Vec::new()
    } else {
        match object_type.as_str() {
            "categories" => categories(),
            "products" => products(),
            "reviews" => reviews(),
            _ => Vec::new(),
        }
    };

    let mut matched: Vec<Value> = pool
        .into_iter()
        .filter(|obj| matches_filter(obj, &filter))
        .collect();
    if let Some(n) = params.get("limit").and_then(|l| l.parse::<usize>().ok()) {
        matched.truncate(n);
    }

    if matched.is_empty() {
        return error(StatusCode::NOT_FOUND, "No objects found");
    }
    let total = matched.len();
    Json(json!({ "objects": matched, "total": total })).into_response()
}

fn error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({ "status": status.as_u16(), "message": message })),
    )
        .into_response()
}

/// Equality on dotted paths; a related object matches by its id.
fn matches_filter(obj: &Value, filter: &Map<String, Value>) -> bool {
    filter.iter().all(|(key, expected)| {
        if key == "type" {
            return true;
        }
        let actual = key
            .split('.')
            .fold(Some(obj), |v: Option<&Value>, part| v.and_then(|v| v.get(part)));
        match actual {
            Some(Value::Object(related)) => related.get("id") == Some(expected),
            Some(v) => v == expected,
            None => false,
        }
    })
}

// ---------------------------------------------------------------------------
// Sample catalog
// ---------------------------------------------------------------------------

fn electronics() -> Value {
    json!({
        "id": "cat-electronics",
        "slug": "electronics",
        "title": "Electronics",
        "metadata": {
            "name": "Electronics",
            "description": "Gadgets and gear",
            "icon": "💻"
        },
        "thumbnail": "https://imgix.cosmicjs.com/electronics.jpg"
    })
}

fn clothing() -> Value {
    json!({
        "id": "cat-clothing",
        "slug": "clothing",
        "title": "Clothing",
        "metadata": {
            "name": "Clothing",
            "description": null,
            "icon": "👕"
        }
    })
}

fn home_goods() -> Value {
    json!({
        "id": "cat-home",
        "slug": "home-goods",
        "title": "Home Goods",
        "metadata": {
            "name": "Home Goods",
            "description": "",
            "icon": ""
        },
        "thumbnail": ""
    })
}

pub fn categories() -> Vec<Value> {
    vec![electronics(), clothing(), home_goods()]
}

/// A product with its category set to `category` as given (object or id).
fn headphones(category: Value) -> Value {
    json!({
        "id": "prod-headphones",
        "slug": "wireless-headphones",
        "title": "Wireless Headphones",
        "metadata": {
            "name": "Wireless Headphones",
            "description": "## Features\n- **Noise** cancelling\n- 30 hour battery",
            "price": 199.99,
            "sale_price": 149.99,
            "sku": "WH-001",
            "in_stock": true,
            "product_image": {
                "url": "https://cdn.cosmicjs.com/headphones.jpg",
                "imgix_url": "https://imgix.cosmicjs.com/headphones.jpg"
            },
            "gallery": [
                {
                    "url": "https://cdn.cosmicjs.com/headphones-side.jpg",
                    "imgix_url": "https://imgix.cosmicjs.com/headphones-side.jpg"
                },
                {
                    "url": "https://cdn.cosmicjs.com/headphones-case.jpg",
                    "imgix_url": "https://imgix.cosmicjs.com/headphones-case.jpg"
                }
            ],
            "category": category
        },
        "thumbnail": "https://imgix.cosmicjs.com/headphones-thumb.jpg"
    })
}

fn tshirt(category: Value) -> Value {
    json!({
        "id": "prod-tshirt",
        "slug": "cotton-tshirt",
        "title": "Cotton T-Shirt",
        "metadata": {
            "name": "Cotton T-Shirt",
            "description": "Soft organic cotton.",
            "price": 25.0,
            "sale_price": null,
            "sku": "TS-002",
            "in_stock": false,
            "product_image": null,
            "gallery": null,
            "category": category
        },
        "thumbnail": "https://imgix.cosmicjs.com/tshirt.jpg"
    })
}

fn speaker(category: Value) -> Value {
    json!({
        "id": "prod-speaker",
        "slug": "smart-speaker",
        "title": "Smart Speaker",
        "metadata": {
            "name": "Smart Speaker",
            "price": 89.0,
            "sale_price": 99.0,
            "in_stock": true,
            "category": category
        }
    })
}

pub fn products() -> Vec<Value> {
    vec![
        headphones(electronics()),
        tshirt(clothing()),
        speaker(electronics()),
    ]
}

fn review(id: &str, product: Value, reviewer: &str, rating: &str, text: &str, verified: bool) -> Value {
    json!({
        "id": id,
        "slug": id,
        "title": format!("Review by {}", reviewer),
        "metadata": {
            "reviewer_name": reviewer,
            "rating": { "key": rating, "value": format!("{} Stars", rating) },
            "review_text": text,
            "product": product,
            "verified_purchase": verified
        }
    })
}

/// Reviews resolve their product one level deep, so the embedded product's
/// category is only an id.
pub fn reviews() -> Vec<Value> {
    vec![
        review(
            "rev-1",
            headphones(json!("cat-electronics")),
            "Alice",
            "5",
            "Best headphones I have owned.",
            true,
        ),
        review(
            "rev-2",
            headphones(json!("cat-electronics")),
            "Bob",
            "4",
            "Great sound, tight fit.",
            false,
        ),
        review(
            "rev-3",
            speaker(json!("cat-electronics")),
            "Carol",
            "3",
            "Sounds fine & looks <sleek>",
            true,
        ),
        review(
            "rev-4",
            speaker(json!("cat-electronics")),
            "Dan",
            "2",
            "Stopped pairing after a week.",
            false,
        ),
    ]
}
