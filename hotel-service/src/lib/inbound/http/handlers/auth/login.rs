use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::TokenResponseData;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::LoginCommand;
use crate::domain::auth::models::Username;
use crate::domain::auth::ports::AuthServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<TokenResponseData>, ApiError> {
    // A username that fails validation cannot have been registered.
    let username = Username::new(body.username.clone())
        .map_err(|_| ApiError::from(AuthError::NotFound(body.username)))?;

    state
        .auth_service
        .login(LoginCommand::new(username, body.password))
        .await
        .map_err(|e| {
            tracing::debug!(error = %e, "Login rejected");
            ApiError::from(e)
        })
        .map(|token| ApiSuccess::new(StatusCode::OK, TokenResponseData { token }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    username: String,
    password: String,
}
