//! PostgreSQL implementation of the CredentialStore trait.
//!
//! One row per user in `refresh_sessions`. Issuance upserts the row, rotation
//! swaps the hash with a conditional `UPDATE` so two rotations racing on the
//! same refresh secret cannot both succeed.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use tk_core::domain::entities::session::SessionRecord;
use tk_core::errors::DomainError;
use tk_core::repositories::CredentialStore;

/// PostgreSQL implementation of CredentialStore
#[derive(Clone)]
pub struct PostgresCredentialStore {
    /// Database connection pool
    pool: PgPool,
}

impl PostgresCredentialStore {
    /// Create a new PostgreSQL credential store
    ///
    /// # Arguments
    /// * `pool` - PostgreSQL connection pool from SQLx
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_session(row: &PgRow) -> Result<SessionRecord, DomainError> {
        Ok(SessionRecord {
            user_id: row.try_get("user_id").map_err(DomainError::store)?,
            refresh_token_hash: row.try_get("refresh_token_hash").map_err(DomainError::store)?,
            last_ip_address: row.try_get("last_ip_address").map_err(DomainError::store)?,
        })
    }
}

#[async_trait]
impl CredentialStore for PostgresCredentialStore {
    async fn save(&self, user_id: &str, refresh_hash: &str, ip: &str) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO refresh_sessions (user_id, refresh_token_hash, last_ip_address, updated_at)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (user_id) DO UPDATE
            SET refresh_token_hash = EXCLUDED.refresh_token_hash,
                last_ip_address = EXCLUDED.last_ip_address,
                updated_at = NOW()
            "#,
        )
        .bind(user_id)
        .bind(refresh_hash)
        .bind(ip)
        .execute(&self.pool)
        .await
        .map_err(DomainError::store)?;

        Ok(())
    }

    async fn get_hash(&self, user_id: &str) -> Result<Option<String>, DomainError> {
        let row = sqlx::query("SELECT refresh_token_hash FROM refresh_sessions WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(DomainError::store)?;

        match row {
            Some(row) => Ok(Some(
                row.try_get("refresh_token_hash").map_err(DomainError::store)?,
            )),
            None => Ok(None),
        }
    }

    async fn update(&self, user_id: &str, new_refresh_hash: &str) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE refresh_sessions
            SET refresh_token_hash = $2, updated_at = NOW()
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .bind(new_refresh_hash)
        .execute(&self.pool)
        .await
        .map_err(DomainError::store)?;

        Ok(result.rows_affected() > 0)
    }

    async fn swap_hash(
        &self,
        user_id: &str,
        expected_hash: &str,
        new_refresh_hash: &str,
        ip: &str,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE refresh_sessions
            SET refresh_token_hash = $3, last_ip_address = $4, updated_at = NOW()
            WHERE user_id = $1 AND refresh_token_hash = $2
            "#,
        )
        .bind(user_id)
        .bind(expected_hash)
        .bind(new_refresh_hash)
        .bind(ip)
        .execute(&self.pool)
        .await
        .map_err(DomainError::store)?;

        Ok(result.rows_affected() == 1)
    }

    async fn find_session(&self, user_id: &str) -> Result<Option<SessionRecord>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT user_id, refresh_token_hash, last_ip_address
            FROM refresh_sessions
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DomainError::store)?;

        row.as_ref().map(Self::row_to_session).transpose()
    }
}
