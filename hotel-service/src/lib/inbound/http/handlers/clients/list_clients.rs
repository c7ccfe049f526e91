use axum::extract::State;
use axum::http::StatusCode;

use super::ClientData;
use crate::domain::client::ports::ClientServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_clients(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<ClientData>>, ApiError> {
    state
        .client_service
        .list_clients()
        .await
        .map_err(ApiError::from)
        .map(|clients| {
            ApiSuccess::new(
                StatusCode::OK,
                clients.iter().map(ClientData::from).collect(),
            )
        })
}
