use serde::Serialize;

use crate::domain::room::models::Room;

pub mod edit_room_status;
pub mod get_room;
pub mod list_rooms;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomData {
    pub id: i64,
    pub room_number: i32,
    pub room_type: String,
    pub price_per_night: f64,
    pub bedrooms_count: i32,
    pub comment: String,
    pub status: String,
}

impl From<&Room> for RoomData {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.0,
            room_number: room.room_number.0,
            room_type: room.room_type.clone(),
            price_per_night: room.price_per_night,
            bedrooms_count: room.bedrooms_count,
            comment: room.comment.clone(),
            status: room.status.as_str().to_string(),
        }
    }
}
