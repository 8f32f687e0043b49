//! TFDN REST API
//!
//! HTTP API layer for the TFDN site, built with Axum.
//!
//! # Endpoints
//!
//! ## Content
//! - `GET /api/v1/pillars` - All pillars
//! - `GET /api/v1/pillars/:id` - One pillar
//! - `GET /api/v1/timeline` - Strategic timeline
//! - `GET /api/v1/opportunities` - Job opportunities
//! - `GET /api/v1/stats` - Headline numbers
//! - `GET /api/v1/chart` - Impact chart series
//! - `GET /api/v1/partners` - Partners
//! - `GET /api/v1/stories?limit=n` - Impact stories
//! - `GET /api/v1/research/reports` - Research reports
//! - `GET /api/v1/volunteer/roles` - Volunteer roles
//!
//! ## Career
//! - `GET /api/v1/career/questions` - Quiz questions
//! - `POST /api/v1/career/assess` - Score answers
//!
//! ## Forms
//! - `POST /api/v1/contact`
//! - `POST /api/v1/volunteer`
//! - `POST /api/v1/newsletter`
//!
//! ## Session
//! - `GET /api/v1/session` - `{ "authenticated": bool }`
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! Anything else falls through to the built UI when `api.static_dir` is set.
//!
//! # Example
//!
//! ```rust,no_run
//! use tfdn::api::{serve, AppState};
//! use tfdn::config::ApiConfig;
//! use tfdn::content::{ContentStore, Fixture};
//! use tfdn::submissions::{Submissions, Validator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let content = ContentStore::new(Fixture::embedded()?);
//!     let submissions = Submissions::new(Validator::new()?);
//!
//!     let state = AppState::new(content, submissions, ApiConfig::default());
//!     serve(state).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Content routes
        .route("/pillars", get(routes::content::list_pillars))
        .route("/pillars/:id", get(routes::content::get_pillar))
        .route("/timeline", get(routes::content::timeline))
        .route("/opportunities", get(routes::content::opportunities))
        .route("/stats", get(routes::content::stats))
        .route("/chart", get(routes::content::chart))
        .route("/partners", get(routes::content::partners))
        .route("/stories", get(routes::content::stories))
        .route("/research/reports", get(routes::content::research_reports))
        .route("/volunteer/roles", get(routes::content::volunteer_roles))
        // Career routes
        .route("/career/questions", get(routes::career::questions))
        .route("/career/assess", post(routes::career::assess))
        // Form routes
        .route("/contact", post(routes::forms::contact))
        .route("/volunteer", post(routes::forms::volunteer))
        .route("/newsletter", post(routes::forms::newsletter))
        // Session route
        .route("/session", get(routes::session::session));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let config = Arc::clone(&state.config);
    let shared_state = Arc::new(state);

    let mut router = Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes);

    // Client-side routes resolve to index.html
    if let Some(dir) = &config.static_dir {
        let index = ServeFile::new(dir.join("index.html"));
        router = router.fallback_service(ServeDir::new(dir).fallback(index));
    }

    router
        .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config))
        .with_state(shared_state)
}

fn cors_layer(config: &ApiConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Start the API server
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let addr = state.config.addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("TFDN server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("TFDN server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentStore, Fixture};
    use crate::submissions::{Submissions, Validator};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn state_with(fixture: Fixture, config: ApiConfig) -> AppState {
        let content = ContentStore::new(fixture).with_latency(false);
        let submissions = Submissions::new(Validator::new().unwrap()).with_latency(false);
        AppState::new(content, submissions, config)
    }

    fn create_test_app() -> Router {
        build_router(state_with(Fixture::embedded().unwrap(), ApiConfig::default()))
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_json(app: Router, uri: &str, body: &str) -> Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let response = get(create_test_app(), "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let response = get(create_test_app(), "/health/ready").await;
        assert_eq!(response.status(), StatusCode::OK);

        let empty = build_router(state_with(Fixture::default(), ApiConfig::default()));
        let response = get(empty, "/health/ready").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_health_full() {
        let response = get(create_test_app(), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["auth"], "disabled");
        assert_eq!(body["simulated_latency"], false);
    }

    #[tokio::test]
    async fn test_list_pillars() {
        let response = get(create_test_app(), "/api/v1/pillars").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body.as_array().unwrap().len(), 4);
        assert_eq!(body[0]["id"], "education");
    }

    #[tokio::test]
    async fn test_get_pillar() {
        let response = get(create_test_app(), "/api/v1/pillars/career").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["color"], "#dc2626");

        let response = get(create_test_app(), "/api/v1/pillars/unknown").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert!(body["request_id"].is_string());
    }

    #[tokio::test]
    async fn test_stories_limit() {
        let response = get(create_test_app(), "/api/v1/stories?limit=3").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_reports_newest_first() {
        let response = get(create_test_app(), "/api/v1/research/reports").await;
        let body = json_body(response).await;
        assert_eq!(body[0]["title"], "African Digital Economy Report 2024");
    }

    #[tokio::test]
    async fn test_assess() {
        let response = post_json(
            create_test_app(),
            "/api/v1/career/assess",
            r#"{"answers": [
                {"questionId": "q1", "optionId": "q1a"},
                {"questionId": "q2", "optionId": "q2a"},
                {"questionId": "q3", "optionId": "q3a"},
                {"questionId": "q4", "optionId": "q4a"}
            ]}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        let recs = body.as_array().unwrap();
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0]["role"], "Virtual Assistant");
        assert_eq!(recs[0]["score"], 92);
    }

    #[tokio::test]
    async fn test_assess_requires_answers() {
        let response =
            post_json(create_test_app(), "/api/v1/career/assess", r#"{"answers": []}"#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_contact_validation() {
        let response = post_json(
            create_test_app(),
            "/api/v1/contact",
            r#"{"name": "A", "email": "bad", "message": "Hello TFDN"}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        let fields: Vec<&str> = body["error"]["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["field"].as_str().unwrap())
            .collect();
        assert_eq!(fields, vec!["name", "email"]);
    }

    #[tokio::test]
    async fn test_newsletter() {
        let response = post_json(
            create_test_app(),
            "/api/v1/newsletter",
            r#"{"email": "reader@example.com"}"#,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Successfully subscribed!");
    }

    #[tokio::test]
    async fn test_session_without_provider() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/session")
                    .header("Authorization", "Bearer some-token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["authenticated"], false);
    }

    #[tokio::test]
    async fn test_static_fallback() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>tfdn</html>").unwrap();

        let config = ApiConfig {
            static_dir: Some(dir.path().to_path_buf()),
            ..ApiConfig::default()
        };
        let app = build_router(state_with(Fixture::embedded().unwrap(), config));

        let response = get(app.clone(), "/ai-career").await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"<html>tfdn</html>");

        // API routes still win over the fallback
        let response = get(app, "/api/v1/partners").await;
        assert_eq!(json_body(response).await.as_array().unwrap().len(), 5);
    }
}
