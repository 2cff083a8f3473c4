use chrono::Utc;
use uuid::Uuid;

use crate::config::DbPool;
use crate::error::ApiError;
use crate::modules::auth::model::UserType;
use crate::services::identity::CurrentUser;

use super::model::{Event, EventWithOwner};
use super::schema::EventPayload;

pub struct EventCrud {
    pool: DbPool,
}

impl EventCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Create a new event owned by the caller. Only NGO accounts may create
    /// events.
    pub async fn create(
        &self,
        payload: &EventPayload,
        caller: &CurrentUser,
    ) -> Result<String, ApiError> {
        if caller.user_type != UserType::Ngo {
            return Err(ApiError::NgoOnly);
        }

        let event = Event {
            id: Uuid::new_v4().to_string(),
            title: payload.title.clone(),
            description: payload.description.clone(),
            location: payload.location.clone(),
            ngo_id: caller.user_id.clone(),
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO events (id, title, description, location, ngo_id, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&event.id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.location)
        .bind(&event.ngo_id)
        .bind(event.created_at)
        .execute(&self.pool)
        .await?;

        Ok(event.id)
    }

    /// Every event on the platform, newest first, with the owner's email
    /// joined in.
    pub async fn list_all(&self) -> Result<Vec<EventWithOwner>, ApiError> {
        let events = sqlx::query_as::<_, EventWithOwner>(
            r#"
            SELECT events.id, events.title, events.description, events.location,
                   events.ngo_id, users.email, events.created_at
            FROM events
            JOIN users ON events.ngo_id = users.id
            ORDER BY events.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Events owned by one NGO, newest first.
    pub async fn list_owned(&self, caller_id: &str) -> Result<Vec<EventWithOwner>, ApiError> {
        let events = sqlx::query_as::<_, EventWithOwner>(
            r#"
            SELECT events.id, events.title, events.description, events.location,
                   events.ngo_id, users.email, events.created_at
            FROM events
            JOIN users ON events.ngo_id = users.id
            WHERE events.ngo_id = ?
            ORDER BY events.created_at DESC
            "#,
        )
        .bind(caller_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    pub async fn edit(
        &self,
        event_id: &str,
        payload: &EventPayload,
        caller: &CurrentUser,
    ) -> Result<(), ApiError> {
        if caller.user_type != UserType::Ngo {
            return Err(ApiError::NgoOnly);
        }

        self.check_owner(event_id, &caller.user_id).await?;

        let updated = sqlx::query(
            r#"
            UPDATE events
            SET title = ?, description = ?, location = ?
            WHERE id = ? AND ngo_id = ?
            "#,
        )
        .bind(&payload.title)
        .bind(&payload.description)
        .bind(&payload.location)
        .bind(event_id)
        .bind(&caller.user_id)
        .execute(&self.pool)
        .await?;

        // Row vanished between the ownership check and the guarded write.
        if updated.rows_affected() == 0 {
            return Err(ApiError::EventNotFound);
        }

        Ok(())
    }

    pub async fn delete(&self, event_id: &str, caller: &CurrentUser) -> Result<(), ApiError> {
        self.check_owner(event_id, &caller.user_id).await?;

        let deleted = sqlx::query("DELETE FROM events WHERE id = ? AND ngo_id = ?")
            .bind(event_id)
            .bind(&caller.user_id)
            .execute(&self.pool)
            .await?;

        if deleted.rows_affected() == 0 {
            return Err(ApiError::EventNotFound);
        }

        Ok(())
    }

    /// Not-found when the event is absent, forbidden when it belongs to
    /// someone else.
    async fn check_owner(&self, event_id: &str, caller_id: &str) -> Result<(), ApiError> {
        let owner: Option<(String,)> = sqlx::query_as("SELECT ngo_id FROM events WHERE id = ?")
            .bind(event_id)
            .fetch_optional(&self.pool)
            .await?;

        let (owner_id,) = owner.ok_or(ApiError::EventNotFound)?;

        if owner_id != caller_id {
            return Err(ApiError::NotEventOwner);
        }

        Ok(())
    }
}
