use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ClientData;
use super::ClientFields;
use crate::domain::client::ports::ClientServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn add_client(
    State(state): State<AppState>,
    Json(body): Json<ClientFields>,
) -> Result<ApiSuccess<ClientData>, ApiError> {
    state
        .client_service
        .add_client(body.try_into_details()?)
        .await
        .map_err(ApiError::from)
        .map(|ref client| ApiSuccess::new(StatusCode::CREATED, client.into()))
}
