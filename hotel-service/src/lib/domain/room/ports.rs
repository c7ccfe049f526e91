use async_trait::async_trait;

use crate::domain::room::errors::RoomError;
use crate::domain::room::models::EditRoomStatusCommand;
use crate::domain::room::models::Room;
use crate::domain::room::models::RoomId;
use crate::domain::room::models::RoomNumber;
use crate::domain::room::models::RoomStatus;

/// Port for room domain service operations.
#[async_trait]
pub trait RoomServicePort: Send + Sync + 'static {
    /// Change the status of a room identified by its number.
    ///
    /// # Returns
    /// Room with the new status
    ///
    /// # Errors
    /// * `NotFound` - No room has this number
    /// * `DatabaseError` - Database operation failed
    async fn edit_room_status(&self, command: EditRoomStatusCommand) -> Result<Room, RoomError>;

    /// List all rooms.
    async fn list_rooms(&self) -> Result<Vec<Room>, RoomError>;

    /// Retrieve a room by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Room does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_room(&self, id: RoomId) -> Result<Room, RoomError>;
}

/// Persistence operations for rooms.
#[async_trait]
pub trait RoomRepository: Send + Sync + 'static {
    /// Set the status of the room with the given number.
    ///
    /// # Returns
    /// Optional updated room (None if no room has this number)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn update_status(
        &self,
        room_number: RoomNumber,
        status: RoomStatus,
    ) -> Result<Option<Room>, RoomError>;

    /// Retrieve all rooms ordered by room number.
    async fn list_all(&self) -> Result<Vec<Room>, RoomError>;

    /// Retrieve a room by identifier.
    ///
    /// # Returns
    /// Optional room (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: RoomId) -> Result<Option<Room>, RoomError>;
}
