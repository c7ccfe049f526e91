use axum::extract::State;
use axum::http::StatusCode;

use super::BookingData;
use crate::domain::booking::ports::BookingServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_bookings(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<BookingData>>, ApiError> {
    state
        .booking_service
        .list_bookings()
        .await
        .map_err(ApiError::from)
        .map(|bookings| {
            ApiSuccess::new(
                StatusCode::OK,
                bookings.iter().map(BookingData::from).collect(),
            )
        })
}
