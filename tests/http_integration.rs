//! Integration tests for the HTTP surface.
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot`; the
//! HTTP relay client is exercised against real loopback servers.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use ticket_copilot::adapters::ai::{MockAIProvider, MockError};
use ticket_copilot::adapters::http::{api_router, RecordsAppState, TriageAppState};
use ticket_copilot::adapters::relay::{HttpDraftRelay, ProviderDraftRelay, UnconfiguredRelay};
use ticket_copilot::adapters::storage::InMemoryRecordStore;
use ticket_copilot::config::ServerConfig;
use ticket_copilot::domain::triage::{analyze, TicketAnalyzer};
use ticket_copilot::ports::{DraftRelay, RelayError};

const DISPUTE_NOTE: &str = "Guest Name: JANE DOE\nItinerary # H7654321\nGuest is requesting a refund, says chargeback was filed with bank.";

// =============================================================================
// Test Infrastructure
// =============================================================================

fn app_with_relay(relay: Arc<dyn DraftRelay>) -> Router {
    let analyzer = Arc::new(TicketAnalyzer::default());
    let triage = TriageAppState {
        analyzer: analyzer.clone(),
        relay,
        relay_timeout: Duration::from_secs(5),
    };
    let records = RecordsAppState {
        analyzer,
        store: Arc::new(InMemoryRecordStore::new()),
        raw_text_limit: 2000,
    };
    api_router(triage, records, &ServerConfig::default())
}

fn app() -> Router {
    app_with_relay(Arc::new(UnconfiguredRelay))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Serves `router` on an ephemeral loopback port and returns its base URL.
async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn spawn_relay_stub<H, T>(handler: H) -> String
where
    H: axum::handler::Handler<T, ()>,
    T: 'static,
{
    spawn_server(Router::new().route("/api/draft", post(handler))).await
}

// =============================================================================
// Triage endpoints
// =============================================================================

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send(&app(), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"ok": true}));
}

#[tokio::test]
async fn analyze_returns_fields_flags_issue_and_draft() {
    let (status, body) = send(&app(), "POST", "/api/analyze", Some(json!({"notes": DISPUTE_NOTE}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fields"]["itinerary"], "H7654321");
    assert_eq!(body["fields"]["guestName"], "JANE DOE");
    assert_eq!(body["fields"]["hotelName"], "-");
    assert_eq!(body["issue"], "Chargeback / Dispute");
    assert_eq!(body["draft"]["macroKey"], "dispute_locked_charge_review");
    assert!(body["draft"]["body"].as_str().unwrap().contains("locked out of the refund process"));

    let keys: Vec<&str> = body["flags"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["key"].as_str().unwrap())
        .collect();
    assert!(keys.contains(&"chargeback"));
    assert!(keys.contains(&"refund"));
}

#[tokio::test]
async fn analyze_accepts_empty_notes() {
    let (status, body) = send(&app(), "POST", "/api/analyze", Some(json!({"notes": ""}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["issue"], Value::Null);
    assert_eq!(body["flags"], json!([]));
    assert_eq!(body["draft"]["macroKey"], "general_in_review");
}

#[tokio::test]
async fn analyze_rejects_non_string_notes() {
    let (status, body) = send(&app(), "POST", "/api/analyze", Some(json!({"notes": 42}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errorCode"], "INVALID_REQUEST");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn draft_requires_notes() {
    let (status, body) = send(&app(), "POST", "/api/draft", Some(json!({"notes": "  "}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing notes");
}

#[tokio::test]
async fn draft_without_relay_is_unavailable() {
    let (status, body) = send(&app(), "POST", "/api/draft", Some(json!({"notes": DISPUTE_NOTE}))).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "drafting is not configured");
}

#[tokio::test]
async fn draft_uses_provider_relay() {
    let provider = Arc::new(MockAIProvider::new().with_response("Dear JANE DOE,\n\nGenerated."));
    let app = app_with_relay(Arc::new(ProviderDraftRelay::new(provider.clone())));

    let fields = analyze(DISPUTE_NOTE).fields;
    let (status, body) = send(
        &app,
        "POST",
        "/api/draft",
        Some(json!({"notes": DISPUTE_NOTE, "extractedFields": fields})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["draft"], "Dear JANE DOE,\n\nGenerated.");
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn draft_provider_failure_is_bad_gateway() {
    let provider = Arc::new(MockAIProvider::new().with_error(MockError::AuthenticationFailed));
    let app = app_with_relay(Arc::new(ProviderDraftRelay::new(provider)));

    let (status, body) = send(&app, "POST", "/api/draft", Some(json!({"notes": DISPUTE_NOTE}))).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["errorCode"], "RELAY_FAILED");
}

#[tokio::test]
async fn assist_falls_back_to_local_draft() {
    let (status, body) =
        send(&app(), "POST", "/api/draft/assist", Some(json!({"notes": DISPUTE_NOTE}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "local");
    assert_eq!(body["status"]["state"], "unavailable");
    assert_eq!(body["draft"], body["analysis"]["draft"]["body"]);
    assert_eq!(
        body["statusMessage"],
        "Draft unavailable (drafting is not configured); using local draft"
    );
}

// =============================================================================
// Records endpoints
// =============================================================================

#[tokio::test]
async fn records_lifecycle() {
    let app = app();

    let (status, saved) = send(
        &app,
        "POST",
        "/api/records",
        Some(json!({"notes": DISPUTE_NOTE, "draftReply": "Final reply"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(saved["itinerary"], "H7654321");
    assert_eq!(saved["tags"], "refund, chargeback");
    assert_eq!(saved["draftReply"], "Final reply");

    send(&app, "POST", "/api/records", Some(json!({"notes": "Guest asked about parking"}))).await;

    let (status, list) = send(&app, "GET", "/api/records", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list["count"], 2);
    assert_eq!(list["records"][1]["id"], saved["id"]);

    let id = saved["id"].as_str().unwrap();
    let (status, _) = send(&app, "DELETE", &format!("/api/records/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, "DELETE", &format!("/api/records/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errorCode"], "RECORD_NOT_FOUND");

    let (status, _) = send(&app, "DELETE", "/api/records", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, list) = send(&app, "GET", "/api/records", None).await;
    assert_eq!(list["count"], 0);
}

#[tokio::test]
async fn malformed_record_id_is_bad_request() {
    let (status, body) = send(&app(), "DELETE", "/api/records/not-a-uuid", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errorCode"], "INVALID_REQUEST");
}

#[tokio::test]
async fn saving_blank_notes_is_rejected() {
    let (status, body) = send(&app(), "POST", "/api/records", Some(json!({"notes": ""}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing notes");
}

// =============================================================================
// HTTP relay client against loopback servers
// =============================================================================

#[tokio::test]
async fn http_relay_returns_remote_draft() {
    let base = spawn_relay_stub(|Json(body): Json<Value>| async move {
        let guest = body["extractedFields"]["guestName"].as_str().unwrap_or("?").to_string();
        Json(json!({"draft": format!("  Dear {guest},  ")}))
    })
    .await;
    let relay = HttpDraftRelay::new(&base, Duration::from_secs(5));

    let draft = relay
        .generate_draft(DISPUTE_NOTE, &analyze(DISPUTE_NOTE).fields)
        .await
        .unwrap();

    assert_eq!(draft, "Dear JANE DOE,");
}

#[tokio::test]
async fn http_relay_reports_error_status() {
    let base = spawn_relay_stub(|| async {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Missing OPENAI_API_KEY"})),
        )
            .into_response()
    })
    .await;
    let relay = HttpDraftRelay::new(&base, Duration::from_secs(5));

    let err = relay
        .generate_draft(DISPUTE_NOTE, &analyze(DISPUTE_NOTE).fields)
        .await
        .unwrap_err();

    assert_eq!(err, RelayError::status(500, "Missing OPENAI_API_KEY"));
}

#[tokio::test]
async fn http_relay_rejects_non_json_body() {
    let base = spawn_relay_stub(|| async { "upstream exploded" }).await;
    let relay = HttpDraftRelay::new(&base, Duration::from_secs(5));

    let err = relay
        .generate_draft(DISPUTE_NOTE, &analyze(DISPUTE_NOTE).fields)
        .await
        .unwrap_err();

    assert!(matches!(err, RelayError::Malformed(_)));
}

#[tokio::test]
async fn http_relay_keeps_status_of_html_error_page() {
    let base = spawn_relay_stub(|| async {
        (StatusCode::BAD_GATEWAY, "<html><body>502 Bad Gateway</body></html>").into_response()
    })
    .await;
    let relay = HttpDraftRelay::new(&base, Duration::from_secs(5));

    let err = relay
        .generate_draft(DISPUTE_NOTE, &analyze(DISPUTE_NOTE).fields)
        .await
        .unwrap_err();

    assert_eq!(err, RelayError::status(502, "HTTP 502"));
}

#[tokio::test]
async fn http_relay_times_out() {
    let base = spawn_relay_stub(|| async {
        tokio::time::sleep(Duration::from_secs(3)).await;
        Json(json!({"draft": "late"}))
    })
    .await;
    let relay = HttpDraftRelay::new(&base, Duration::from_millis(200));

    let err = relay
        .generate_draft(DISPUTE_NOTE, &analyze(DISPUTE_NOTE).fields)
        .await
        .unwrap_err();

    assert!(matches!(err, RelayError::Timeout { .. }));
}

#[tokio::test]
async fn assist_chains_through_a_remote_relay_server() {
    // Upstream instance drafts with a mock provider; the front instance relays to it.
    let provider = Arc::new(MockAIProvider::new().with_response("Relayed draft"));
    let upstream = app_with_relay(Arc::new(ProviderDraftRelay::new(provider)));
    let base = spawn_server(upstream).await;

    let front = app_with_relay(Arc::new(HttpDraftRelay::new(&base, Duration::from_secs(5))));
    let (status, body) =
        send(&front, "POST", "/api/draft/assist", Some(json!({"notes": DISPUTE_NOTE}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["draft"], "Relayed draft");
    assert_eq!(body["source"], "relay");
    assert_eq!(body["statusMessage"], "Draft generated");
}

#[tokio::test]
async fn assist_falls_back_when_remote_relay_errors() {
    let base = spawn_relay_stub(|| async {
        (StatusCode::BAD_GATEWAY, Json(json!({"error": "upstream down"}))).into_response()
    })
    .await;
    let front = app_with_relay(Arc::new(HttpDraftRelay::new(&base, Duration::from_secs(5))));

    let (status, body) =
        send(&front, "POST", "/api/draft/assist", Some(json!({"notes": DISPUTE_NOTE}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "local");
    assert_eq!(
        body["statusMessage"],
        "Draft unavailable (relay returned status 502: upstream down); using local draft"
    );
}
