use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::config::Args;
use crate::error::ServerError;
use crate::models::{LogoutResponse, SessionState};
use crate::session_store::SessionStore;

pub const SERVICE_NAME: &str = "ops-dashboard-server";

pub struct AppState {
    pub store: SessionStore,
}

pub fn router(state: Arc<AppState>, allowed_origins: &[String]) -> Router {
    let mut app = Router::new()
        .route("/api/auth/logout", post(handle_logout))
        .route("/api/auth/session", get(handle_session))
        .route("/health", get(handle_health))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if let Some(cors) = cors_layer(allowed_origins) {
        app = app.layer(cors);
    }
    app
}

/// CORS con credenciales solo para orígenes explícitos
fn cors_layer(allowed_origins: &[String]) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin.trim()) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("⚠️ [CORS] Origen ignorado {}: {}", origin, e);
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_credentials(true),
    )
}

pub async fn start_server(args: Args) -> anyhow::Result<()> {
    let state = Arc::new(AppState {
        store: SessionStore::new(args.cookie_policy()),
    });
    let app = router(state, &args.allowed_origins);

    let addr = args.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🚀 [SERVER] Escuchando en {} (producción: {})", addr, args.production);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("⚠️ [SERVER] No se pudo escuchar Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("👋 [SERVER] Apagando");
}

/// Expira las tres cookies de sesión; el cliente navega a `/` después
async fn handle_logout(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServerError> {
    let mut headers = HeaderMap::new();
    for cookie in state.store.clear_all()? {
        headers.append(header::SET_COOKIE, cookie);
    }

    info!("👋 [AUTH] Sesión cerrada");
    Ok((
        StatusCode::OK,
        headers,
        Json(LogoutResponse {
            success: true,
            message: "Logged out successfully".to_string(),
        }),
    ))
}

async fn handle_session(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Json<SessionState> {
    Json(state.store.session(&headers))
}

async fn handle_health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "timestamp": chrono::Utc::now(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session_store::CookiePolicy;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn create_test_app(production: bool) -> Router {
        let state = Arc::new(AppState {
            store: SessionStore::new(CookiePolicy::for_environment(production)),
        });
        router(state, &[])
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn set_cookies(response: &axum::response::Response) -> Vec<String> {
        response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_logout_clears_session_cookies() {
        let app = create_test_app(false);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/auth/logout")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let cookies = set_cookies(&response);
        assert_eq!(cookies.len(), 3);
        for (cookie, name) in cookies.iter().zip(["auth-token", "user-role", "user-info"]) {
            assert!(cookie.starts_with(&format!("{}=;", name)), "{}", cookie);
            assert!(cookie.contains("Max-Age=0"));
            assert!(cookie.contains("Path=/"));
            assert!(cookie.contains("SameSite=Lax"));
            assert!(!cookie.contains("Secure"));
        }
        assert!(cookies[0].contains("HttpOnly"));
        assert!(cookies[1].contains("HttpOnly"));
        assert!(!cookies[2].contains("HttpOnly"));

        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_logout_secure_in_production() {
        let app = create_test_app(true);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/auth/logout")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(set_cookies(&response).iter().all(|c| c.contains("Secure")));
    }

    #[tokio::test]
    async fn test_logout_requires_post() {
        let app = create_test_app(false);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/auth/logout")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_session_reads_cookies() {
        let app = create_test_app(false);
        let info = urlencoding::encode(r#"{"name":"Ana"}"#);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/auth/session")
                    .header(header::COOKIE, format!("auth-token=x; user-role=operator; user-info={}", info))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["is_authenticated"], true);
        assert_eq!(body["role"], "operator");
        assert_eq!(body["user_info"]["name"], "Ana");
    }

    #[tokio::test]
    async fn test_session_anonymous() {
        let app = create_test_app(false);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/auth/session")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = body_json(response).await;
        assert_eq!(body["is_authenticated"], false);
        assert!(body["role"].is_null());
        assert!(body["user_info"].is_null());
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_test_app(false);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], SERVICE_NAME);
    }

    #[test]
    fn test_cors_only_with_origins() {
        assert!(cors_layer(&[]).is_none());
        assert!(cors_layer(&["https://ops.example.com".to_string()]).is_some());
    }

    #[tokio::test]
    async fn test_server_error_is_json_500() {
        let invalid = HeaderValue::from_str("user-info=\n").unwrap_err();
        let response = ServerError::from(invalid).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().starts_with("Invalid cookie header"));
    }
}
