use std::fmt;
use std::str::FromStr;

use crate::domain::room::errors::RoomStatusError;

/// Hotel room.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: RoomId,
    pub room_number: RoomNumber,
    pub room_type: String,
    pub price_per_night: f64,
    pub bedrooms_count: i32,
    pub comment: String,
    pub status: RoomStatus,
}

/// Room unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(pub i64);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Number shown on the room door; unique per hotel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomNumber(pub i32);

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Housekeeping state of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomStatus {
    Available,
    Occupied,
    Cleaning,
    Maintenance,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Available => "available",
            RoomStatus::Occupied => "occupied",
            RoomStatus::Cleaning => "cleaning",
            RoomStatus::Maintenance => "maintenance",
        }
    }
}

impl FromStr for RoomStatus {
    type Err = RoomStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(RoomStatus::Available),
            "occupied" => Ok(RoomStatus::Occupied),
            "cleaning" => Ok(RoomStatus::Cleaning),
            "maintenance" => Ok(RoomStatus::Maintenance),
            other => Err(RoomStatusError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Command to change the status of the room with the given number
#[derive(Debug, Clone)]
pub struct EditRoomStatusCommand {
    pub room_number: RoomNumber,
    pub status: RoomStatus,
}

impl EditRoomStatusCommand {
    pub fn new(room_number: RoomNumber, status: RoomStatus) -> Self {
        Self {
            room_number,
            status,
        }
    }
}
