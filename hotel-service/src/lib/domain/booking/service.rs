use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::booking::errors::BookingError;
use crate::domain::booking::models::Booking;
use crate::domain::booking::models::CreateBookingCommand;
use crate::domain::booking::ports::BookingRepository;
use crate::domain::booking::ports::BookingServicePort;

/// Domain service implementation for booking operations.
pub struct BookingService<BR>
where
    BR: BookingRepository,
{
    repository: Arc<BR>,
}

impl<BR> BookingService<BR>
where
    BR: BookingRepository,
{
    pub fn new(repository: Arc<BR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<BR> BookingServicePort for BookingService<BR>
where
    BR: BookingRepository,
{
    async fn create_booking(&self, command: CreateBookingCommand) -> Result<Booking, BookingError> {
        let booking = self.repository.create(command).await?;

        tracing::info!(
            booking_id = %booking.id,
            client_id = %booking.client_id,
            room_id = %booking.room_id,
            nights = booking.period.nights(),
            "Booking created"
        );

        Ok(booking)
    }

    async fn list_bookings(&self) -> Result<Vec<Booking>, BookingError> {
        self.repository.list_all().await
    }
}
