// 🌐 REST API - axum router shared by the server binary and its tests

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::analytics::{AnalyticsEvent, AnalyticsSink, SoulCardAction};
use crate::checkout::{create_checkout, CheckoutConfig, CheckoutRequest, CheckoutSession};
use crate::elements::{classify_element, element_profile, ElementCategory, ElementProfile};
use crate::error::SoulError;
use crate::fortunes::{fortune_by_name, get_redacted_preview, FortuneRecord, RedactedPreview};
use crate::report::{ReportAccess, SoulReport, DEFAULT_NAME};
use crate::soul_card::SoulCard;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub checkout: Option<CheckoutConfig>,
    pub analytics: Arc<dyn AnalyticsSink>,
}

impl AppState {
    pub fn new(checkout: Option<CheckoutConfig>, analytics: Arc<dyn AnalyticsSink>) -> Self {
        AppState { checkout, analytics }
    }
}

/// API Response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }
}

impl ApiResponse<()> {
    fn err(message: String) -> Self {
        Self {
            success: false,
            data: (),
            error: Some(message),
        }
    }
}

/// Core error carried out of a handler
#[derive(Debug)]
pub struct ApiError(SoulError);

impl From<SoulError> for ApiError {
    fn from(err: SoulError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            SoulError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            SoulError::UnknownCategory(_) => StatusCode::NOT_FOUND,
            SoulError::CheckoutNotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::warn!(error = %self.0, status = status.as_u16(), "rejected request");
        }

        (status, Json(ApiResponse::err(self.0.to_string()))).into_response()
    }
}

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;

/// Page path recorded when a report is served
const REPORT_PAGE_PATH: &str = "/report";

// ============================================================================
// Request bodies / query strings
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ElementRequest {
    #[serde(default)]
    birth_date: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportQuery {
    #[serde(default)]
    name: String,
    #[serde(default)]
    birth_date: String,
    #[serde(default)]
    unlocked: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UnlockRequest {
    #[serde(default)]
    name: String,
    #[serde(default)]
    birth_date: String,
}

#[derive(Debug, Deserialize)]
struct CardActionRequest {
    element: String,
}

#[derive(Debug, Deserialize)]
struct EventRequest {
    name: String,
    #[serde(default)]
    params: Map<String, Value>,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// POST /api/element - Classify a birth date
async fn classify(Json(req): Json<ElementRequest>) -> ApiResult<&'static ElementProfile> {
    let profile = classify_element(&req.birth_date)?;
    Ok(Json(ApiResponse::ok(profile)))
}

/// GET /api/elements - All five profiles
async fn list_elements() -> impl IntoResponse {
    let profiles: Vec<&'static ElementProfile> =
        ElementCategory::ALL.iter().map(|c| element_profile(*c)).collect();
    Json(ApiResponse::ok(profiles))
}

/// GET /api/fortune/:element - Full fortune record
async fn fortune(Path(element): Path<String>) -> ApiResult<&'static FortuneRecord> {
    Ok(Json(ApiResponse::ok(fortune_by_name(&element)?)))
}

/// GET /api/preview/:element - Redacted danger teaser
async fn preview(Path(element): Path<String>) -> ApiResult<RedactedPreview> {
    let fortune = fortune_by_name(&element)?;
    Ok(Json(ApiResponse::ok(get_redacted_preview(fortune))))
}

/// GET /api/report?name=&birthDate=&unlocked= - Assembled report
async fn report(State(state): State<AppState>, Query(q): Query<ReportQuery>) -> ApiResult<SoulReport> {
    let report = SoulReport::build(&q.name, &q.birth_date, ReportAccess::from_flag(q.unlocked))?;
    state.analytics.record(AnalyticsEvent::page_view(REPORT_PAGE_PATH));
    Ok(Json(ApiResponse::ok(report)))
}

/// POST /api/unlock - Simulated payment: record intent, return the full report
async fn unlock(State(state): State<AppState>, Json(req): Json<UnlockRequest>) -> ApiResult<SoulReport> {
    let mut report = SoulReport::build(&req.name, &req.birth_date, ReportAccess::Locked)?;

    state.analytics.record(AnalyticsEvent::unlock_click(
        report.profile.category.as_str(),
        &req.birth_date,
    ));
    report.unlock();

    Ok(Json(ApiResponse::ok(report)))
}

/// GET /api/card?name=&birthDate= - Soul card metadata
async fn card(Query(q): Query<ReportQuery>) -> ApiResult<SoulCard> {
    let name = if q.name.trim().is_empty() { DEFAULT_NAME } else { q.name.trim() };
    Ok(Json(ApiResponse::ok(SoulCard::new(name, &q.birth_date)?)))
}

/// POST /api/card/:action - Card downloaded or shared
async fn card_action(
    State(state): State<AppState>,
    Path(action): Path<SoulCardAction>,
    Json(req): Json<CardActionRequest>,
) -> ApiResult<&'static str> {
    let element: ElementCategory = req.element.parse()?;
    state
        .analytics
        .record(AnalyticsEvent::soul_card_action(action, element.as_str()));
    Ok(Json(ApiResponse::ok("recorded")))
}

/// POST /api/checkout - Create a (demo) checkout session
async fn checkout(State(state): State<AppState>, Json(req): Json<CheckoutRequest>) -> ApiResult<CheckoutSession> {
    let session = create_checkout(state.checkout.as_ref(), &req)?;
    tracing::info!(element = %session.element, "checkout session created");
    Ok(Json(ApiResponse::ok(session)))
}

/// POST /api/events - Record an analytics event
async fn record_event(State(state): State<AppState>, Json(req): Json<EventRequest>) -> impl IntoResponse {
    state.analytics.record(AnalyticsEvent::custom(&req.name, req.params));
    (StatusCode::ACCEPTED, Json(ApiResponse::ok("recorded")))
}

// ============================================================================
// Router
// ============================================================================

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/element", post(classify))
        .route("/elements", get(list_elements))
        .route("/fortune/:element", get(fortune))
        .route("/preview/:element", get(preview))
        .route("/report", get(report))
        .route("/unlock", post(unlock))
        .route("/card", get(card))
        .route("/card/:action", post(card_action))
        .route("/checkout", post(checkout))
        .route("/events", post(record_event))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::MemorySink;
    use axum::body::Body;
    use axum::http::{header, Request};
    use tower::ServiceExt;

    fn test_state(checkout: Option<CheckoutConfig>) -> (AppState, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        (AppState::new(checkout, sink.clone()), sink)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (state, _) = test_state(None);
        let (status, json) = send(router(state), get_req("/api/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"], "OK");
    }

    #[tokio::test]
    async fn test_classify_endpoint() {
        let (state, _) = test_state(None);
        let (status, json) = send(
            router(state),
            post_json("/api/element", serde_json::json!({ "birthDate": "1987-11-02" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["category"], "fire");
        assert_eq!(json["data"]["emoji"], "🔥");
    }

    #[tokio::test]
    async fn test_classify_bad_date() {
        let (state, _) = test_state(None);
        let (status, json) = send(
            router(state),
            post_json("/api/element", serde_json::json!({ "birthDate": "not-a-date" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert!(json["error"].as_str().unwrap().contains("not-a-date"));
    }

    #[tokio::test]
    async fn test_unknown_element_is_404() {
        let (state, _) = test_state(None);
        let (status, json) = send(router(state), get_req("/api/fortune/plasma")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn test_preview_endpoint() {
        let (state, _) = test_state(None);
        let (status, json) = send(router(state), get_req("/api/preview/water")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["data"]["redactedDanger"]
            .as_str()
            .unwrap()
            .starts_with("CRITICAL WARNING:"));
    }

    #[tokio::test]
    async fn test_locked_report() {
        let (state, sink) = test_state(None);
        let (status, json) = send(
            router(state),
            get_req("/api/report?name=Jane%20Doe&birthDate=1975-07-19"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["name"], "Jane Doe");
        assert_eq!(json["data"]["profile"]["category"], "wood");
        assert_eq!(json["data"]["body"]["access"], "locked");

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "page_view");
        assert_eq!(events[0].param("page_path"), Some("/report"));
    }

    #[tokio::test]
    async fn test_unlock_records_event() {
        let (state, sink) = test_state(None);
        let (status, json) = send(
            router(state),
            post_json(
                "/api/unlock",
                serde_json::json!({ "name": "Jane", "birthDate": "1968-03-08" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["body"]["access"], "unlocked");

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "click_unlock_payment");
        assert_eq!(events[0].param("element"), Some("earth"));
    }

    #[tokio::test]
    async fn test_checkout_not_configured() {
        let (state, _) = test_state(None);
        let (status, json) = send(
            router(state),
            post_json(
                "/api/checkout",
                serde_json::json!({ "name": "Jane", "birthDate": "1990-01-01", "element": "metal" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(json["error"].as_str().unwrap().contains("not configured"));
    }

    #[tokio::test]
    async fn test_checkout_demo_url() {
        let config = CheckoutConfig {
            store_id: "1".into(),
            variant_id: "2".into(),
            api_key: "k".into(),
        };
        let (state, _) = test_state(Some(config));
        let (status, json) = send(
            router(state),
            post_json(
                "/api/checkout",
                serde_json::json!({ "name": "Jane", "birthDate": "1990-01-01", "element": "metal" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json["data"]["checkoutUrl"],
            "https://example.lemonsqueezy.com/checkout?name=Jane&element=metal"
        );
    }

    #[tokio::test]
    async fn test_events_endpoint() {
        let (state, sink) = test_state(None);
        let (status, _) = send(
            router(state),
            post_json(
                "/api/events",
                serde_json::json!({ "name": "soul_card_action", "params": { "action": "download" } }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(sink.events()[0].param("action"), Some("download"));
    }

    #[tokio::test]
    async fn test_card_download_recorded() {
        let (state, sink) = test_state(None);
        let (status, _) = send(
            router(state),
            post_json("/api/card/download", serde_json::json!({ "element": "Water" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let events = sink.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "soul_card_action");
        assert_eq!(events[0].param("action"), Some("download"));
        assert_eq!(events[0].param("element"), Some("water"));
    }

    #[tokio::test]
    async fn test_card_action_unknown_element() {
        let (state, sink) = test_state(None);
        let (status, _) = send(
            router(state),
            post_json("/api/card/share", serde_json::json!({ "element": "plasma" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_card_endpoint() {
        let (state, _) = test_state(None);
        let (status, json) = send(router(state), get_req("/api/card?name=A&birthDate=1990-01-01")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["cardNumber"], "0560 3920 7280 9520");
    }
}
