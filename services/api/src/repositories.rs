//! PostgreSQL-backed reminder service

use async_trait::async_trait;
use common::error::DatabaseError;
use sqlx::PgPool;
use tracing::info;

use crate::{
    identity::Identity,
    models::Reminder,
    service::{ReminderService, ServiceError},
};

const REMINDER_COLUMNS: &str = "id, owner_id, title, description, remind_at";

/// Reminder repository for database operations
///
/// Callers see and change only the reminders they own, except admins who
/// may read, update and delete any of them.
#[derive(Clone)]
pub struct ReminderRepository {
    pool: PgPool,
}

impl ReminderRepository {
    /// Create a new reminder repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the `reminders` table if it does not exist yet
    pub async fn init(&self) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS reminders (
                id          BIGSERIAL PRIMARY KEY,
                owner_id    UUID NOT NULL,
                title       TEXT NOT NULL,
                description TEXT,
                remind_at   TIMESTAMPTZ,
                created_at  TIMESTAMPTZ NOT NULL DEFAULT now(),
                updated_at  TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        sqlx::query("CREATE INDEX IF NOT EXISTS reminders_owner_id_idx ON reminders (owner_id)")
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::Query)?;

        info!("Reminder schema ready");
        Ok(())
    }
}

#[async_trait]
impl ReminderService for ReminderRepository {
    async fn create(&self, reminder: Reminder, identity: &Identity) -> Result<bool, ServiceError> {
        if reminder.title.trim().is_empty() {
            return Ok(false);
        }

        let result = sqlx::query(
            r#"
            INSERT INTO reminders (owner_id, title, description, remind_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(identity.user_id())
        .bind(&reminder.title)
        .bind(&reminder.description)
        .bind(reminder.remind_at)
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(result.rows_affected() == 1)
    }

    async fn read_all(&self) -> Result<Option<Vec<Reminder>>, ServiceError> {
        let reminders = sqlx::query_as::<_, Reminder>(&format!(
            "SELECT {REMINDER_COLUMNS} FROM reminders ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(Some(reminders))
    }

    async fn read_all_user_locations(
        &self,
        identity: &Identity,
    ) -> Result<Option<Vec<Reminder>>, ServiceError> {
        let reminders = sqlx::query_as::<_, Reminder>(&format!(
            "SELECT {REMINDER_COLUMNS} FROM reminders WHERE owner_id = $1 ORDER BY id"
        ))
        .bind(identity.user_id())
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(Some(reminders))
    }

    async fn read(&self, id: i64, identity: &Identity) -> Result<Option<Reminder>, ServiceError> {
        let reminder = sqlx::query_as::<_, Reminder>(&format!(
            "SELECT {REMINDER_COLUMNS} FROM reminders WHERE id = $1 AND (owner_id = $2 OR $3)"
        ))
        .bind(id)
        .bind(identity.user_id())
        .bind(identity.is_admin())
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(reminder)
    }

    async fn search(
        &self,
        title: Option<&str>,
        identity: &Identity,
    ) -> Result<Option<Reminder>, ServiceError> {
        let Some(title) = title else {
            return Ok(None);
        };

        let reminder = sqlx::query_as::<_, Reminder>(&format!(
            r#"
            SELECT {REMINDER_COLUMNS} FROM reminders
            WHERE lower(title) = lower($1) AND owner_id = $2
            ORDER BY id
            LIMIT 1
            "#
        ))
        .bind(title)
        .bind(identity.user_id())
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(reminder)
    }

    async fn update(
        &self,
        reminder: Reminder,
        id: i64,
        identity: &Identity,
    ) -> Result<bool, ServiceError> {
        if reminder.title.trim().is_empty() {
            return Ok(false);
        }

        let result = sqlx::query(
            r#"
            UPDATE reminders
            SET title = $1, description = $2, remind_at = $3, updated_at = now()
            WHERE id = $4 AND (owner_id = $5 OR $6)
            "#,
        )
        .bind(&reminder.title)
        .bind(&reminder.description)
        .bind(reminder.remind_at)
        .bind(id)
        .bind(identity.user_id())
        .bind(identity.is_admin())
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::Query)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64, identity: &Identity) -> Result<bool, ServiceError> {
        let result = sqlx::query("DELETE FROM reminders WHERE id = $1 AND (owner_id = $2 OR $3)")
            .bind(id)
            .bind(identity.user_id())
            .bind(identity.is_admin())
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::Query)?;

        Ok(result.rows_affected() > 0)
    }
}
