use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::RoomData;
use crate::domain::auth::models::AuthenticatedStaff;
use crate::domain::room::errors::RoomStatusError;
use crate::domain::room::models::EditRoomStatusCommand;
use crate::domain::room::models::RoomNumber;
use crate::domain::room::models::RoomStatus;
use crate::domain::room::ports::RoomServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn edit_room_status(
    State(state): State<AppState>,
    Extension(staff): Extension<AuthenticatedStaff>,
    Json(body): Json<EditRoomStatusRequest>,
) -> Result<ApiSuccess<RoomData>, ApiError> {
    let command = body.try_into_command()?;

    tracing::debug!(
        staff_id = %staff.id,
        role = %staff.role,
        room_number = %command.room_number,
        "Room status change requested"
    );

    state
        .room_service
        .edit_room_status(command)
        .await
        .map_err(ApiError::from)
        .map(|ref room| ApiSuccess::new(StatusCode::OK, room.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EditRoomStatusRequest {
    room_number: i32,
    status: String,
}

impl EditRoomStatusRequest {
    fn try_into_command(self) -> Result<EditRoomStatusCommand, RoomStatusError> {
        let status = self.status.parse::<RoomStatus>()?;
        Ok(EditRoomStatusCommand::new(
            RoomNumber(self.room_number),
            status,
        ))
    }
}

impl From<RoomStatusError> for ApiError {
    fn from(err: RoomStatusError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
