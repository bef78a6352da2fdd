//! Authentication API Endpoints
//! Mission: Expose login, verify, resources, and refresh over HTTP

use crate::auth::{
    errors::AuthError,
    models::{ErrorBody, LoginRequest, LoginResponse, RefreshResponse, VerifyResponse},
    service::AuthService,
};
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{debug, error, info};

/// Shared auth state
#[derive(Clone)]
pub struct AuthState {
    pub service: Arc<AuthService>,
}

/// Build the full application router.
pub fn router(state: AuthState) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/verify", post(verify))
        .route("/resources", get(resources))
        .route("/refresh", post(refresh))
        .route("/health", get(health))
        .layer(axum::middleware::from_fn(
            crate::middleware::logging::request_logging,
        ))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Pull the token out of an `Authorization: Bearer <token>` header.
/// A missing or malformed header is treated identically to an invalid token.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Login endpoint - POST /login
async fn login(State(state): State<AuthState>, Json(payload): Json<LoginRequest>) -> Response {
    info!("🔐 Login attempt: {}", payload.username);

    match state.service.login(&payload.username, &payload.password) {
        Ok(session) => Json(LoginResponse::granted(session)).into_response(),
        Err(AuthError::Internal(e)) => {
            error!("Login failed on store/codec error: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(LoginResponse::denied("Internal server error")),
            )
                .into_response()
        }
        Err(_) => (
            StatusCode::UNAUTHORIZED,
            Json(LoginResponse::denied("Invalid credentials")),
        )
            .into_response(),
    }
}

/// Token verification endpoint - POST /verify
async fn verify(State(state): State<AuthState>, headers: HeaderMap) -> Response {
    let denied = || {
        (
            StatusCode::UNAUTHORIZED,
            Json(VerifyResponse {
                valid: false,
                user: None,
            }),
        )
            .into_response()
    };

    let Some(token) = bearer_token(&headers) else {
        return denied();
    };

    match state.service.verify_token(token) {
        Ok(claims) => Json(VerifyResponse {
            valid: true,
            user: Some(claims),
        })
        .into_response(),
        Err(e) => {
            debug!(error = %e, "Token verification denied");
            denied()
        }
    }
}

/// Role-scoped resource list - GET /resources
async fn resources(State(state): State<AuthState>, headers: HeaderMap) -> Response {
    let Some(token) = bearer_token(&headers) else {
        return unauthorized("Token required");
    };

    match state.service.resources(token) {
        Ok(grant) => Json(grant).into_response(),
        Err(AuthError::Internal(e)) => internal_error(e),
        Err(e) => {
            debug!(error = %e, "Resource request denied");
            unauthorized("Invalid token")
        }
    }
}

/// Token refresh endpoint - POST /refresh
async fn refresh(State(state): State<AuthState>, headers: HeaderMap) -> Response {
    let Some(token) = bearer_token(&headers) else {
        return unauthorized("Token required");
    };

    match state.service.refresh(token) {
        Ok(token) => Json(RefreshResponse { token }).into_response(),
        Err(AuthError::Internal(e)) => internal_error(e),
        Err(e) => {
            debug!(error = %e, "Refresh denied");
            unauthorized("Invalid token")
        }
    }
}

/// Health check - GET /health
async fn health() -> Response {
    Json(serde_json::json!({ "status": "ok" })).into_response()
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}

fn internal_error(e: anyhow::Error) -> Response {
    error!("Request failed on store/codec error: {:#}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: "Internal server error".to_string(),
        }),
    )
        .into_response()
}
