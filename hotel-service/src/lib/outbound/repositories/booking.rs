use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::booking::errors::BookingError;
use crate::domain::booking::models::Booking;
use crate::domain::booking::models::BookingId;
use crate::domain::booking::models::BookingPeriod;
use crate::domain::booking::models::CreateBookingCommand;
use crate::domain::booking::models::TotalPrice;
use crate::domain::booking::ports::BookingRepository;
use crate::domain::client::models::ClientId;
use crate::domain::room::models::RoomId;

pub struct PostgresBookingRepository {
    pool: PgPool,
}

impl PostgresBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_booking(row: PgRow) -> Result<Booking, BookingError> {
        Ok(Booking {
            id: BookingId(row.get("id")),
            client_id: ClientId(row.get("client_id")),
            room_id: RoomId(row.get("room_id")),
            period: BookingPeriod::new(row.get("check_in_date"), row.get("check_out_date"))?,
            total_price: TotalPrice::new(row.get("total_price"))?,
            notes: row.get("notes"),
            created_at: row.get("created_at"),
        })
    }
}

#[async_trait]
impl BookingRepository for PostgresBookingRepository {
    async fn create(&self, command: CreateBookingCommand) -> Result<Booking, BookingError> {
        let row = sqlx::query(
            r#"
            INSERT INTO bookings (client_id, room_id, check_in_date, check_out_date, total_price, notes)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, client_id, room_id, check_in_date, check_out_date, total_price, notes, created_at
            "#,
        )
        .bind(command.client_id.0)
        .bind(command.room_id.0)
        .bind(command.period.check_in())
        .bind(command.period.check_out())
        .bind(command.total_price.amount())
        .bind(&command.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    match db_err.constraint() {
                        Some("bookings_client_id_fkey") => {
                            return BookingError::ClientNotFound(command.client_id.to_string());
                        }
                        Some("bookings_room_id_fkey") => {
                            return BookingError::RoomNotFound(command.room_id.to_string());
                        }
                        _ => {}
                    }
                }
            }
            BookingError::DatabaseError(e.to_string())
        })?;

        Self::row_to_booking(row)
    }

    async fn list_all(&self) -> Result<Vec<Booking>, BookingError> {
        let rows = sqlx::query(
            r#"
            SELECT id, client_id, room_id, check_in_date, check_out_date, total_price, notes, created_at
            FROM bookings
            ORDER BY check_in_date, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| BookingError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::row_to_booking).collect()
    }
}
