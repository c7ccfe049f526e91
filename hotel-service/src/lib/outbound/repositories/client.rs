use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::client::errors::ClientError;
use crate::domain::client::models::Client;
use crate::domain::client::models::ClientDetails;
use crate::domain::client::models::ClientId;
use crate::domain::client::models::EmailAddress;
use crate::domain::client::models::FullName;
use crate::domain::client::ports::ClientRepository;

pub struct PostgresClientRepository {
    pool: PgPool,
}

impl PostgresClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_client(row: PgRow) -> Result<Client, ClientError> {
        Ok(Client {
            id: ClientId(row.get("id")),
            full_name: FullName::new(row.get("full_name"))?,
            email: EmailAddress::new(row.get("email"))?,
            phone: row.get("phone"),
            notes: row.get("notes"),
            created_at: row.get("created_at"),
        })
    }
}

#[async_trait]
impl ClientRepository for PostgresClientRepository {
    async fn create(&self, details: ClientDetails) -> Result<Client, ClientError> {
        let row = sqlx::query(
            r#"
            INSERT INTO clients (full_name, email, phone, notes)
            VALUES ($1, $2, $3, $4)
            RETURNING id, full_name, email, phone, notes, created_at
            "#,
        )
        .bind(details.full_name.as_str())
        .bind(details.email.as_str())
        .bind(&details.phone)
        .bind(&details.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ClientError::DatabaseError(e.to_string()))?;

        Self::row_to_client(row)
    }

    async fn update(
        &self,
        id: ClientId,
        details: ClientDetails,
    ) -> Result<Option<Client>, ClientError> {
        let row = sqlx::query(
            r#"
            UPDATE clients
            SET full_name = $2, email = $3, phone = $4, notes = $5
            WHERE id = $1
            RETURNING id, full_name, email, phone, notes, created_at
            "#,
        )
        .bind(id.0)
        .bind(details.full_name.as_str())
        .bind(details.email.as_str())
        .bind(&details.phone)
        .bind(&details.notes)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ClientError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_client).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Client>, ClientError> {
        let rows = sqlx::query(
            r#"
            SELECT id, full_name, email, phone, notes, created_at
            FROM clients
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ClientError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::row_to_client).collect()
    }
}
