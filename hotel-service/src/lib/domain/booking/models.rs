use std::fmt;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;

use crate::domain::booking::errors::PeriodError;
use crate::domain::booking::errors::PriceError;
use crate::domain::client::models::ClientId;
use crate::domain::room::models::RoomId;

/// Reservation of a room by a client.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: BookingId,
    pub client_id: ClientId,
    pub room_id: RoomId,
    pub period: BookingPeriod,
    pub total_price: TotalPrice,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

/// Booking unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookingId(pub i64);

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Stay dates; check-out is strictly after check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingPeriod {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl BookingPeriod {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, PeriodError> {
        if check_out <= check_in {
            return Err(PeriodError::CheckOutNotAfterCheckIn {
                check_in,
                check_out,
            });
        }

        Ok(Self {
            check_in,
            check_out,
        })
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// Total price of a stay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TotalPrice(f64);

impl TotalPrice {
    pub fn new(amount: f64) -> Result<Self, PriceError> {
        if !amount.is_finite() {
            Err(PriceError::NotFinite)
        } else if amount < 0.0 {
            Err(PriceError::Negative(amount))
        } else {
            Ok(Self(amount))
        }
    }

    pub fn amount(&self) -> f64 {
        self.0
    }
}

/// Command to create a booking
#[derive(Debug, Clone)]
pub struct CreateBookingCommand {
    pub client_id: ClientId,
    pub room_id: RoomId,
    pub period: BookingPeriod,
    pub total_price: TotalPrice,
    pub notes: String,
}

impl CreateBookingCommand {
    pub fn new(
        client_id: ClientId,
        room_id: RoomId,
        period: BookingPeriod,
        total_price: TotalPrice,
        notes: String,
    ) -> Self {
        Self {
            client_id,
            room_id,
            period,
            total_price,
            notes,
        }
    }
}
