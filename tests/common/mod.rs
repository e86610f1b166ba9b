//! Shared test fixtures for the dashboard SDK integration tests.
//!
//! Provides `spawn_backend()` which starts an in-process axum server that
//! mimics the dashboard REST API on a random local port, and records every
//! request it receives.

#![allow(dead_code)]

use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use purchase_dashboard_sdk::DashboardClient;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Customer id whose purchase lookup fails with a JSON error body.
pub const MISSING_CUSTOMER: i64 = 404;
/// Customer id whose purchase lookup fails with a plain-text body.
pub const BROKEN_CUSTOMER: i64 = 500;
/// Customer id whose purchase lookup fails with a JSON body lacking `error`.
pub const BARE_ERROR_CUSTOMER: i64 = 400;
/// Customer id whose purchase lookup always fails with 503.
pub const UNAVAILABLE_CUSTOMER: i64 = 503;
/// Customer id whose first purchase lookup fails and later ones succeed.
pub const FLAKY_CUSTOMER: i64 = 42;

/// Every request URI (path and query) received by the fake backend.
#[derive(Default)]
pub struct RequestLog {
    requests: Mutex<Vec<String>>,
}

impl RequestLog {
    fn record(&self, uri: &Uri) -> usize {
        let mut requests = self.requests.lock().unwrap();
        requests.push(uri.to_string());
        requests
            .iter()
            .filter(|r| r.as_str() == uri.to_string())
            .count()
    }

    /// All recorded request URIs in arrival order.
    pub fn all(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// The most recent request URI.
    pub fn last(&self) -> Option<String> {
        self.requests.lock().unwrap().last().cloned()
    }

    /// Number of requests whose path (ignoring the query) is `path`.
    pub fn count_path(&self, path: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.split('?').next() == Some(path))
            .count()
    }

    pub fn len(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

pub struct FakeBackend {
    pub base_url: String,
    pub log: Arc<RequestLog>,
}

impl FakeBackend {
    /// A client pointed at this backend with the default cache policy.
    pub fn client(&self) -> DashboardClient {
        DashboardClient::builder()
            .base_url(&self.base_url)
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap()
    }

    /// A client with a custom stale time and retry count.
    pub fn client_with(&self, stale_time: Duration, retries: u32) -> DashboardClient {
        DashboardClient::builder()
            .base_url(&self.base_url)
            .timeout(Duration::from_secs(5))
            .stale_time(stale_time)
            .retries(retries)
            .build()
            .unwrap()
    }
}

/// Start the fake backend on a background thread with its own runtime.
pub fn spawn_backend() -> FakeBackend {
    let log = Arc::new(RequestLog::default());

    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let addr = listener.local_addr().unwrap();

    let app = Router::new()
        .route("/api/purchase-frequency", get(purchase_frequency))
        .route("/api/customers", get(customers))
        .route("/api/customers/{id}/purchases", get(customer_purchases))
        .with_state(log.clone());

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });

    FakeBackend {
        base_url: format!("http://{}", addr),
        log,
    }
}

// ---------------------------------------------------------------------------
// Fixture data
// ---------------------------------------------------------------------------

pub fn buckets() -> Value {
    json!([
        {"range": "0 - 20000", "count": 12, "revenue": 180000},
        {"range": "20001 - 30000", "count": 7, "revenue": 175000},
        {"range": "100001 - 200000", "count": 2, "revenue": 150000000}
    ])
}

/// Customers in deliberately non-id order.
pub fn customer_fixtures() -> Vec<Value> {
    vec![
        json!({"id": 3, "name": "박지민", "count": 2, "totalAmount": 45000}),
        json!({"id": 1, "name": "김민수", "count": 5, "totalAmount": 120000}),
        json!({"id": 2, "name": "이영희", "count": 1, "totalAmount": 9900}),
        json!({"id": 4, "name": "김서연", "count": 3, "totalAmount": 78000}),
    ]
}

pub fn purchases() -> Value {
    json!([
        {
            "date": "2024-07-15T09:30:00.000Z",
            "quantity": 2,
            "product": "무선 이어폰",
            "price": 89000,
            "imgSrc": "https://example.com/img/earbuds.png"
        },
        {
            "date": "2024-07-20",
            "quantity": 1,
            "product": "보조 배터리",
            "price": 25000,
            "imgSrc": "https://example.com/img/battery.png"
        }
    ])
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

fn api_error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

async fn purchase_frequency(
    State(log): State<Arc<RequestLog>>,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    log.record(&uri);
    if params.contains_key("from") != params.contains_key("to") {
        return api_error(StatusCode::BAD_REQUEST, "from and to must be provided together");
    }
    Json(buckets()).into_response()
}

async fn customers(
    State(log): State<Arc<RequestLog>>,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    log.record(&uri);

    let mut rows = customer_fixtures();
    if let Some(name) = params.get("name") {
        rows.retain(|c| c["name"].as_str().unwrap().contains(name.as_str()));
    }

    let amount = |c: &Value| c["totalAmount"].as_f64().unwrap();
    match params.get("sortBy").map(|s| s.as_str()) {
        Some("asc") => rows.sort_by(|a, b| amount(a).partial_cmp(&amount(b)).unwrap()),
        Some("desc") => rows.sort_by(|a, b| amount(b).partial_cmp(&amount(a)).unwrap()),
        Some(_) => return api_error(StatusCode::BAD_REQUEST, "sortBy must be asc or desc"),
        None => {}
    }

    Json(Value::Array(rows)).into_response()
}

async fn customer_purchases(
    State(log): State<Arc<RequestLog>>,
    uri: Uri,
    Path(id): Path<i64>,
) -> Response {
    let attempt = log.record(&uri);

    match id {
        1 => Json(purchases()).into_response(),
        2 => Json(json!([])).into_response(),
        MISSING_CUSTOMER => api_error(StatusCode::NOT_FOUND, "Customer not found"),
        BROKEN_CUSTOMER => (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response(),
        BARE_ERROR_CUSTOMER => (StatusCode::BAD_REQUEST, Json(json!({}))).into_response(),
        UNAVAILABLE_CUSTOMER => api_error(StatusCode::SERVICE_UNAVAILABLE, "Service unavailable"),
        FLAKY_CUSTOMER if attempt == 1 => {
            api_error(StatusCode::SERVICE_UNAVAILABLE, "Service unavailable")
        }
        FLAKY_CUSTOMER => Json(purchases()).into_response(),
        _ => api_error(StatusCode::NOT_FOUND, "Customer not found"),
    }
}
