use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use super::ClientData;
use super::ClientFields;
use crate::domain::client::models::ClientId;
use crate::domain::client::ports::ClientServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn edit_client(
    State(state): State<AppState>,
    Json(body): Json<EditClientRequest>,
) -> Result<ApiSuccess<ClientData>, ApiError> {
    let details = body.fields.try_into_details()?;

    state
        .client_service
        .edit_client(ClientId(body.id), details)
        .await
        .map_err(ApiError::from)
        .map(|ref client| ApiSuccess::new(StatusCode::OK, client.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EditClientRequest {
    id: i64,
    #[serde(flatten)]
    fields: ClientFields,
}
