use async_trait::async_trait;

use crate::domain::booking::errors::BookingError;
use crate::domain::booking::models::Booking;
use crate::domain::booking::models::CreateBookingCommand;

/// Port for booking domain service operations.
#[async_trait]
pub trait BookingServicePort: Send + Sync + 'static {
    /// Create a booking for an existing client and room.
    ///
    /// # Errors
    /// * `ClientNotFound` - Referenced client does not exist
    /// * `RoomNotFound` - Referenced room does not exist
    /// * `DatabaseError` - Database operation failed
    async fn create_booking(&self, command: CreateBookingCommand) -> Result<Booking, BookingError>;

    /// List all bookings ordered by check-in date.
    async fn list_bookings(&self) -> Result<Vec<Booking>, BookingError>;
}

/// Persistence operations for bookings.
#[async_trait]
pub trait BookingRepository: Send + Sync + 'static {
    /// Persist a new booking.
    ///
    /// # Errors
    /// * `ClientNotFound` / `RoomNotFound` - Foreign key violated
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, command: CreateBookingCommand) -> Result<Booking, BookingError>;

    /// Retrieve all bookings ordered by check-in date.
    async fn list_all(&self) -> Result<Vec<Booking>, BookingError>;
}
