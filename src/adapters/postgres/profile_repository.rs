//! PostgreSQL implementation of ProfileRepository.
//!
//! Persists profiles to the `saved_profiles` table. Answers are stored as a
//! JSON object in a `jsonb` column.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, ProfileId, Timestamp, UserId};
use crate::domain::profile::Profile;
use crate::domain::questions::AnswerSet;
use crate::ports::ProfileRepository;

/// PostgreSQL implementation of ProfileRepository.
#[derive(Clone)]
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn insert(&self, profile: &Profile) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO saved_profiles (id, name, answers, user_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(profile.id().as_uuid())
        .bind(profile.name())
        .bind(Json(profile.answers()))
        .bind(profile.user_id().as_str())
        .bind(profile.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert profile: {}", e)))?;

        Ok(())
    }

    async fn update(&self, profile: &Profile) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE saved_profiles SET
                name = $3,
                answers = $4
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(profile.id().as_uuid())
        .bind(profile.user_id().as_str())
        .bind(profile.name())
        .bind(Json(profile.answers()))
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to update profile: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ProfileNotFound,
                format!("Profile not found: {}", profile.id()),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &ProfileId) -> Result<Option<Profile>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, answers, user_id, created_at
            FROM saved_profiles
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch profile: {}", e)))?;

        row.map(row_to_profile).transpose()
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Profile>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, answers, user_id, created_at
            FROM saved_profiles
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list profiles: {}", e)))?;

        rows.into_iter().map(row_to_profile).collect()
    }

    async fn delete(&self, id: &ProfileId, user_id: &UserId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM saved_profiles WHERE id = $1 AND user_id = $2")
            .bind(id.as_uuid())
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to delete profile: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_profile(row: PgRow) -> Result<Profile, DomainError> {
    let column = |name: &str, e: sqlx::Error| {
        DomainError::database(format!("Failed to get {}: {}", name, e))
    };

    let id: uuid::Uuid = row.try_get("id").map_err(|e| column("id", e))?;
    let name: String = row.try_get("name").map_err(|e| column("name", e))?;
    let Json(answers): Json<AnswerSet> = row.try_get("answers").map_err(|e| column("answers", e))?;
    let user_id: String = row.try_get("user_id").map_err(|e| column("user_id", e))?;
    let created_at: chrono::DateTime<chrono::Utc> =
        row.try_get("created_at").map_err(|e| column("created_at", e))?;

    Ok(Profile::reconstitute(
        ProfileId::from_uuid(id),
        UserId::new(user_id)
            .map_err(|e| DomainError::database(format!("Invalid user_id: {}", e)))?,
        name,
        answers,
        Timestamp::from_datetime(created_at),
    ))
}
