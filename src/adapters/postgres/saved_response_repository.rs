//! PostgreSQL implementation of SavedResponseRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, SavedResponseId, Timestamp, UserId};
use crate::domain::saved_response::SavedResponse;
use crate::ports::SavedResponseRepository;

/// PostgreSQL implementation of SavedResponseRepository.
#[derive(Clone)]
pub struct PostgresSavedResponseRepository {
    pool: PgPool,
}

impl PostgresSavedResponseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SavedResponseRepository for PostgresSavedResponseRepository {
    async fn insert(&self, response: &SavedResponse) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO saved_responses (id, text, user_id, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(response.id().as_uuid())
        .bind(response.text())
        .bind(response.user_id().as_str())
        .bind(response.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert saved response: {}", e)))?;

        Ok(())
    }

    async fn find_by_id(&self, id: &SavedResponseId) -> Result<Option<SavedResponse>, DomainError> {
        let row = sqlx::query(
            "SELECT id, text, user_id, created_at FROM saved_responses WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch saved response: {}", e)))?;

        row.map(row_to_saved_response).transpose()
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<SavedResponse>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, text, user_id, created_at
            FROM saved_responses
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list saved responses: {}", e)))?;

        rows.into_iter().map(row_to_saved_response).collect()
    }

    async fn delete(&self, id: &SavedResponseId, user_id: &UserId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM saved_responses WHERE id = $1 AND user_id = $2")
            .bind(id.as_uuid())
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete saved response: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_by_user(&self, user_id: &UserId) -> Result<u64, DomainError> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM saved_responses WHERE user_id = $1")
                .bind(user_id.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::database(format!("Failed to count saved responses: {}", e))
                })?;

        Ok(count.max(0) as u64)
    }
}

fn row_to_saved_response(row: PgRow) -> Result<SavedResponse, DomainError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| DomainError::database(format!("Failed to get id: {}", e)))?;
    let text: String = row
        .try_get("text")
        .map_err(|e| DomainError::database(format!("Failed to get text: {}", e)))?;
    let user_id: String = row
        .try_get("user_id")
        .map_err(|e| DomainError::database(format!("Failed to get user_id: {}", e)))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| DomainError::database(format!("Failed to get created_at: {}", e)))?;

    Ok(SavedResponse::reconstitute(
        SavedResponseId::from_uuid(id),
        UserId::new(user_id)
            .map_err(|e| DomainError::database(format!("Invalid user_id: {}", e)))?,
        text,
        Timestamp::from_datetime(created_at),
    ))
}
