use thiserror::Error;

/// Error for RoomStatus parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoomStatusError {
    #[error("Unknown room status: {0}")]
    Unknown(String),
}

/// Top-level error for all room-related operations
#[derive(Debug, Clone, Error)]
pub enum RoomError {
    #[error("Invalid room status: {0}")]
    InvalidStatus(#[from] RoomStatusError),

    #[error("Room not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
