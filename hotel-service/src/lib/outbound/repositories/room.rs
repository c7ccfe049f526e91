use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::room::errors::RoomError;
use crate::domain::room::models::Room;
use crate::domain::room::models::RoomId;
use crate::domain::room::models::RoomNumber;
use crate::domain::room::models::RoomStatus;
use crate::domain::room::ports::RoomRepository;

pub struct PostgresRoomRepository {
    pool: PgPool,
}

impl PostgresRoomRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_room(row: PgRow) -> Result<Room, RoomError> {
        Ok(Room {
            id: RoomId(row.get("id")),
            room_number: RoomNumber(row.get("room_number")),
            room_type: row.get("room_type"),
            price_per_night: row.get("price_per_night"),
            bedrooms_count: row.get("bedrooms_count"),
            comment: row.get("comment"),
            status: row.get::<String, _>("status").parse::<RoomStatus>()?,
        })
    }
}

#[async_trait]
impl RoomRepository for PostgresRoomRepository {
    async fn update_status(
        &self,
        room_number: RoomNumber,
        status: RoomStatus,
    ) -> Result<Option<Room>, RoomError> {
        let row = sqlx::query(
            r#"
            UPDATE rooms
            SET status = $2
            WHERE room_number = $1
            RETURNING id, room_number, room_type, price_per_night, bedrooms_count, comment, status
            "#,
        )
        .bind(room_number.0)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RoomError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_room).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Room>, RoomError> {
        let rows = sqlx::query(
            r#"
            SELECT id, room_number, room_type, price_per_night, bedrooms_count, comment, status
            FROM rooms
            ORDER BY room_number
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RoomError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::row_to_room).collect()
    }

    async fn find_by_id(&self, id: RoomId) -> Result<Option<Room>, RoomError> {
        let row = sqlx::query(
            r#"
            SELECT id, room_number, room_type, price_per_night, bedrooms_count, comment, status
            FROM rooms
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RoomError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_room).transpose()
    }
}
