use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Serialize;

use crate::domain::booking::models::Booking;

pub mod create_booking;
pub mod list_bookings;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingData {
    pub id: i64,
    pub client_id: i64,
    pub room_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub total_price: f64,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Booking> for BookingData {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id.0,
            client_id: booking.client_id.0,
            room_id: booking.room_id.0,
            check_in_date: booking.period.check_in(),
            check_out_date: booking.period.check_out(),
            total_price: booking.total_price.amount(),
            notes: booking.notes.clone(),
            created_at: booking.created_at,
        }
    }
}
