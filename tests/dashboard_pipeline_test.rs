//! End-to-end tests for the dashboard pipeline.
//!
//! Each test starts a mock platform API and the dashboard service on random
//! local ports and drives them over HTTP.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::http::{HeaderMap, StatusCode as AxumStatus};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use dealdash::config::AppConfig;
use dealdash::models::user::UserRole;
use dealdash::services::auth::issue_access_token;
use dealdash::AppState;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use uuid::Uuid;

const JWT_SECRET: &str = "test-jwt-secret-for-integration-tests-only";

/// Canned upstream behaviour for one test.
#[derive(Clone)]
struct Upstream {
    analytics: (u16, String),
    vendors: (u16, String),
    deals: (u16, String),
    analytics_hits: Arc<AtomicUsize>,
}

impl Upstream {
    fn healthy() -> Self {
        Self {
            analytics: (
                200,
                json!({
                    "totalUsers": 1234567,
                    "totalVendors": 85,
                    "totalDeals": 4200,
                    "revenueEstimate": 92000,
                    "cityStats": [
                        {"city": "Jaipur", "dealCount": 14, "userCount": 90},
                        {"city": "Surat", "dealCount": 9, "userCount": 61}
                    ],
                    "categoryStats": []
                })
                .to_string(),
            ),
            vendors: (200, vendors_json(5)),
            deals: (200, "[]".to_string()),
            analytics_hits: Arc::new(AtomicUsize::new(0)),
        }
    }
}

fn vendors_json(n: usize) -> String {
    let vendors: Vec<Value> = (1..=n)
        .map(|i| {
            json!({
                "id": i,
                "businessName": format!("Vendor {i}"),
                "city": "Mumbai",
                "state": "Maharashtra",
                "phone": "9999999999"
            })
        })
        .collect();
    Value::Array(vendors).to_string()
}

fn canned(headers: &HeaderMap, (status, body): (u16, String)) -> axum::response::Response {
    let authorized = headers
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("Bearer "));
    if !authorized {
        return AxumStatus::UNAUTHORIZED.into_response();
    }
    let status = AxumStatus::from_u16(status).unwrap();
    (status, [("content-type", "application/json")], body).into_response()
}

async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });
    format!("http://{addr}")
}

async fn start_upstream(upstream: Upstream) -> String {
    let analytics = upstream.clone();
    let vendors = upstream.clone();
    let deals = upstream;

    let app = Router::new()
        .route(
            "/api/admin/analytics",
            get(move |headers: HeaderMap| {
                let u = analytics.clone();
                async move {
                    u.analytics_hits.fetch_add(1, Ordering::SeqCst);
                    canned(&headers, u.analytics)
                }
            }),
        )
        .route(
            "/api/admin/vendors/pending",
            get(move |headers: HeaderMap| {
                let u = vendors.clone();
                async move { canned(&headers, u.vendors) }
            }),
        )
        .route(
            "/api/admin/deals/pending",
            get(move |headers: HeaderMap| {
                let u = deals.clone();
                async move { canned(&headers, u.deals) }
            }),
        );

    spawn(app).await
}

async fn start_dashboard(upstream_url: &str, cache_ttl_secs: u64) -> String {
    let config = AppConfig {
        upstream_api_url: upstream_url.to_string(),
        upstream_timeout_secs: 2,
        upstream_cache_ttl_secs: cache_ttl_secs,
        host: "127.0.0.1".to_string(),
        port: 0,
        jwt_secret: JWT_SECRET.to_string(),
        frontend_url: "http://localhost:5173".to_string(),
    };
    let state = AppState::new(config).expect("state");
    spawn(dealdash::routes::router(state)).await
}

fn token(role: UserRole) -> String {
    issue_access_token(Uuid::new_v4(), "ops-admin", role, JWT_SECRET, 300).unwrap()
}

/// Helper: extract `data` from the API envelope, panic with message on error.
fn extract_data(body: &Value) -> &Value {
    if let Some(err) = body.get("error").filter(|e| !e.is_null()) {
        panic!(
            "API error: {} - {}",
            err["code"].as_str().unwrap_or("?"),
            err["message"].as_str().unwrap_or("?"),
        );
    }
    body.get("data").expect("missing 'data' field")
}

#[tokio::test]
async fn health_probes_respond() {
    let upstream = start_upstream(Upstream::healthy()).await;
    let base = start_dashboard(&upstream, 0).await;
    let client = Client::new();

    let resp = client.get(format!("{base}/health/live")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "OK");

    let ready: Value = client
        .get(format!("{base}/health/ready"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(extract_data(&ready)["upstream"], "reachable");
}

#[tokio::test]
async fn dashboard_requires_admin_session() {
    let upstream = start_upstream(Upstream::healthy()).await;
    let base = start_dashboard(&upstream, 0).await;
    let client = Client::new();

    let resp = client
        .get(format!("{base}/api/v1/admin/dashboard"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");

    let resp = client
        .get(format!("{base}/admin"))
        .bearer_auth(token(UserRole::Vendor))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = client
        .get(format!("{base}/admin"))
        .bearer_auth("not-a-token")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn json_view_model_reflects_upstream_data() {
    let upstream = start_upstream(Upstream::healthy()).await;
    let base = start_dashboard(&upstream, 0).await;

    let body: Value = Client::new()
        .get(format!("{base}/api/v1/admin/dashboard"))
        .bearer_auth(token(UserRole::Admin))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let view = extract_data(&body);

    assert_eq!(view["viewer"]["username"], "ops-admin");
    assert_eq!(view["stats"][0]["value"], "1,234,567");
    assert_eq!(view["stats"][3]["value"], "₹92,000");

    assert_eq!(view["city_performance"]["source"], "live");
    assert_eq!(view["city_performance"]["points"][0]["name"], "Jaipur");
    assert_eq!(view["category_performance"]["source"], "sample");
    assert_eq!(view["category_performance"]["points"][0]["name"], "Fashion");
    assert_eq!(view["monthly_trend"]["source"], "sample");

    let vendors = &view["pending_vendors"];
    assert_eq!(vendors["total"], 5);
    assert_eq!(vendors["rows"].as_array().unwrap().len(), 3);
    assert_eq!(vendors["overflow_label"], "+2 more pending approvals");
    assert_eq!(vendors["rows"][0]["detail"], "Mumbai, Maharashtra");

    let deals = &view["pending_deals"];
    assert_eq!(deals["total"], 0);
    assert!(deals["rows"].as_array().unwrap().is_empty());
    assert_eq!(deals["empty_message"], "No pending deal approvals");
}

#[tokio::test]
async fn html_page_renders_with_session_cookie() {
    let upstream = start_upstream(Upstream::healthy()).await;
    let base = start_dashboard(&upstream, 0).await;

    let resp = Client::new()
        .get(format!("{base}/admin"))
        .header("Cookie", format!("access_token={}", token(UserRole::Admin)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let html = resp.text().await.unwrap();

    assert!(html.contains("Admin Dashboard"));
    assert!(html.contains("1,234,567"));
    assert!(html.contains("₹92,000"));
    assert!(html.contains("Vendor 3"));
    assert!(!html.contains("Vendor 4"));
    assert!(html.contains("+2 more pending approvals"));
    assert!(html.contains("No pending deal approvals"));
    // Trend and category charts fall back; the city chart is live.
    assert_eq!(html.matches("Sample data").count(), 2);
}

#[tokio::test]
async fn malformed_and_failing_reads_degrade_to_defaults() {
    let upstream = start_upstream(Upstream {
        analytics: (200, r#"{"totalUsers": "lots"}"#.to_string()),
        vendors: (500, "oops".to_string()),
        ..Upstream::healthy()
    })
    .await;
    let base = start_dashboard(&upstream, 0).await;

    let body: Value = Client::new()
        .get(format!("{base}/api/v1/admin/dashboard"))
        .bearer_auth(token(UserRole::Admin))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let view = extract_data(&body);

    let notice = view["analytics_notice"].as_str().unwrap();
    assert!(notice.contains("/api/admin/analytics"));
    for i in 0..3 {
        assert_eq!(view["stats"][i]["value"], "0");
    }
    assert_eq!(view["stats"][3]["value"], "₹0");
    assert_eq!(view["city_performance"]["source"], "sample");
    assert_eq!(view["city_performance"]["points"][0]["name"], "Mumbai");

    assert_eq!(view["pending_vendors"]["empty_message"], "No pending vendor approvals");
    assert_eq!(view["pending_vendors"]["total"], 0);
    assert!(view["pending_vendors"]["notice"].is_null());
}

#[tokio::test]
async fn unreachable_upstream_still_renders() {
    // Bind then drop a listener to get a port nothing listens on.
    let dead = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };
    let base = start_dashboard(&dead, 0).await;

    let resp = Client::new()
        .get(format!("{base}/admin"))
        .bearer_auth(token(UserRole::Admin))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let html = resp.text().await.unwrap();
    assert!(html.contains("No pending vendor approvals"));
    assert!(html.contains("₹0"));
    assert_eq!(html.matches("Sample data").count(), 3);
}

#[tokio::test]
async fn upstream_responses_are_cached_per_endpoint() {
    let upstream = Upstream::healthy();
    let hits = Arc::clone(&upstream.analytics_hits);
    let upstream_url = start_upstream(upstream).await;
    let base = start_dashboard(&upstream_url, 30).await;
    let client = Client::new();
    let admin = token(UserRole::Admin);

    for _ in 0..3 {
        let resp = client
            .get(format!("{base}/api/v1/admin/dashboard"))
            .bearer_auth(&admin)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn malformed_responses_are_not_cached() {
    let upstream = Upstream {
        analytics: (200, r#"{"totalUsers": "lots"}"#.to_string()),
        ..Upstream::healthy()
    };
    let hits = Arc::clone(&upstream.analytics_hits);
    let upstream_url = start_upstream(upstream).await;
    let base = start_dashboard(&upstream_url, 30).await;
    let client = Client::new();
    let admin = token(UserRole::Admin);

    for _ in 0..2 {
        let body: Value = client
            .get(format!("{base}/api/v1/admin/dashboard"))
            .bearer_auth(&admin)
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert!(extract_data(&body)["analytics_notice"].is_string());
    }

    assert_eq!(hits.load(Ordering::SeqCst), 2);
}
