use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use super::BookingData;
use crate::domain::auth::models::AuthenticatedStaff;
use crate::domain::booking::errors::PeriodError;
use crate::domain::booking::errors::PriceError;
use crate::domain::booking::models::BookingPeriod;
use crate::domain::booking::models::CreateBookingCommand;
use crate::domain::booking::models::TotalPrice;
use crate::domain::booking::ports::BookingServicePort;
use crate::domain::client::models::ClientId;
use crate::domain::room::models::RoomId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn create_booking(
    State(state): State<AppState>,
    Extension(staff): Extension<AuthenticatedStaff>,
    Json(body): Json<CreateBookingRequest>,
) -> Result<ApiSuccess<BookingData>, ApiError> {
    tracing::debug!(staff_id = %staff.id, "Booking requested");

    state
        .booking_service
        .create_booking(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref booking| ApiSuccess::new(StatusCode::CREATED, booking.into()))
}

/// HTTP request body for creating a booking (raw JSON)
///
/// The front end historically sent `check_in_data` / `check_out_data`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateBookingRequest {
    client_id: i64,
    room_id: i64,
    #[serde(alias = "check_in_data")]
    check_in_date: NaiveDate,
    #[serde(alias = "check_out_data")]
    check_out_date: NaiveDate,
    total_price: f64,
    #[serde(default)]
    notes: String,
}

#[derive(Debug, Clone, Error)]
enum ParseCreateBookingRequestError {
    #[error("Invalid booking period: {0}")]
    Period(#[from] PeriodError),

    #[error("Invalid total price: {0}")]
    Price(#[from] PriceError),
}

impl CreateBookingRequest {
    fn try_into_command(self) -> Result<CreateBookingCommand, ParseCreateBookingRequestError> {
        let period = BookingPeriod::new(self.check_in_date, self.check_out_date)?;
        let total_price = TotalPrice::new(self.total_price)?;
        Ok(CreateBookingCommand::new(
            ClientId(self.client_id),
            RoomId(self.room_id),
            period,
            total_price,
            self.notes,
        ))
    }
}

impl From<ParseCreateBookingRequestError> for ApiError {
    fn from(err: ParseCreateBookingRequestError) -> Self {
        ApiError::UnprocessableEntity(err.to_string())
    }
}
