use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::room::errors::RoomError;
use crate::domain::room::models::EditRoomStatusCommand;
use crate::domain::room::models::Room;
use crate::domain::room::models::RoomId;
use crate::domain::room::ports::RoomRepository;
use crate::domain::room::ports::RoomServicePort;

/// Domain service implementation for room operations.
pub struct RoomService<RR>
where
    RR: RoomRepository,
{
    repository: Arc<RR>,
}

impl<RR> RoomService<RR>
where
    RR: RoomRepository,
{
    pub fn new(repository: Arc<RR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<RR> RoomServicePort for RoomService<RR>
where
    RR: RoomRepository,
{
    async fn edit_room_status(&self, command: EditRoomStatusCommand) -> Result<Room, RoomError> {
        let room = self
            .repository
            .update_status(command.room_number, command.status)
            .await?
            .ok_or_else(|| RoomError::NotFound(format!("room number {}", command.room_number)))?;

        tracing::info!(
            room_number = %room.room_number,
            status = %room.status,
            "Room status changed"
        );

        Ok(room)
    }

    async fn list_rooms(&self) -> Result<Vec<Room>, RoomError> {
        self.repository.list_all().await
    }

    async fn get_room(&self, id: RoomId) -> Result<Room, RoomError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(RoomError::NotFound(id.to_string()))
    }
}
