use chrono::NaiveDate;
use thiserror::Error;

/// Error for BookingPeriod validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PeriodError {
    #[error("Check-out {check_out} must be after check-in {check_in}")]
    CheckOutNotAfterCheckIn {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
}

/// Error for TotalPrice validation failures
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PriceError {
    #[error("Total price must not be negative, got {0}")]
    Negative(f64),

    #[error("Total price must be a finite number")]
    NotFinite,
}

/// Top-level error for all booking-related operations
#[derive(Debug, Clone, Error)]
pub enum BookingError {
    #[error("Invalid booking period: {0}")]
    InvalidPeriod(#[from] PeriodError),

    #[error("Invalid total price: {0}")]
    InvalidPrice(#[from] PriceError),

    #[error("Client not found: {0}")]
    ClientNotFound(String),

    #[error("Room not found: {0}")]
    RoomNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
