use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::Credential;
use crate::domain::auth::models::CredentialId;
use crate::domain::auth::models::NewCredential;
use crate::domain::auth::models::Role;
use crate::domain::auth::models::Username;
use crate::domain::auth::ports::CredentialRepository;

pub struct PostgresCredentialRepository {
    pool: PgPool,
}

impl PostgresCredentialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_credential(row: PgRow) -> Result<Credential, AuthError> {
        Ok(Credential {
            id: CredentialId(row.get("id")),
            username: Username::new(row.get("username"))?,
            password_hash: row.get("password_hash"),
            role: row.get::<String, _>("user_role").parse::<Role>()?,
            created_at: row.get("created_at"),
        })
    }
}

#[async_trait]
impl CredentialRepository for PostgresCredentialRepository {
    async fn exists_by_username(&self, username: &Username) -> Result<bool, AuthError> {
        let row = sqlx::query(
            r#"
            SELECT EXISTS (SELECT 1 FROM users WHERE username = $1) AS taken
            "#,
        )
        .bind(username.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AuthError::InternalFailure(e.to_string()))?;

        Ok(row.get("taken"))
    }

    async fn insert(&self, credential: NewCredential) -> Result<Credential, AuthError> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (username, password_hash, user_role)
            VALUES ($1, $2, $3)
            RETURNING id, username, password_hash, user_role, created_at
            "#,
        )
        .bind(credential.username.as_str())
        .bind(&credential.password_hash)
        .bind(credential.role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("users_username_key")
                {
                    return AuthError::AlreadyExists(credential.username.to_string());
                }
            }
            AuthError::InternalFailure(e.to_string())
        })?;

        Self::row_to_credential(row)
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Credential>, AuthError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, password_hash, user_role, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::InternalFailure(e.to_string()))?;

        row.map(Self::row_to_credential).transpose()
    }
}
