use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::RoomData;
use crate::domain::room::models::RoomId;
use crate::domain::room::ports::RoomServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn get_room(
    State(state): State<AppState>,
    Path(room_id): Path<i64>,
) -> Result<ApiSuccess<RoomData>, ApiError> {
    state
        .room_service
        .get_room(RoomId(room_id))
        .await
        .map_err(ApiError::from)
        .map(|ref room| ApiSuccess::new(StatusCode::OK, room.into()))
}
