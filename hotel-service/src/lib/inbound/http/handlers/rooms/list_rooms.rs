use axum::extract::State;
use axum::http::StatusCode;

use super::RoomData;
use crate::domain::room::ports::RoomServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_rooms(State(state): State<AppState>) -> Result<ApiSuccess<Vec<RoomData>>, ApiError> {
    state
        .room_service
        .list_rooms()
        .await
        .map_err(ApiError::from)
        .map(|rooms| ApiSuccess::new(StatusCode::OK, rooms.iter().map(RoomData::from).collect()))
}
