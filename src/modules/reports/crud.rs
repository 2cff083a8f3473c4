use chrono::Utc;
use uuid::Uuid;

use crate::config::DbPool;
use crate::error::ApiError;
use crate::services::identity::CurrentUser;

use super::model::{Report, ReportWithOwner};
use super::schema::ReportPayload;

pub struct ReportCrud {
    pool: DbPool,
}

impl ReportCrud {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// File a new report owned by the caller. Any authenticated user may
    /// report an incident.
    pub async fn create(
        &self,
        payload: &ReportPayload,
        caller: &CurrentUser,
    ) -> Result<String, ApiError> {
        let report = Report {
            id: Uuid::new_v4().to_string(),
            title: payload.title.clone(),
            description: payload.description.clone(),
            location: payload.location.clone(),
            status: payload.status.clone(),
            user_id: caller.user_id.clone(),
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO reports (id, title, description, location, status, user_id, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&report.id)
        .bind(&report.title)
        .bind(&report.description)
        .bind(&report.location)
        .bind(&report.status)
        .bind(&report.user_id)
        .bind(report.created_at)
        .execute(&self.pool)
        .await?;

        Ok(report.id)
    }

    /// Every report on the platform, newest first, with the reporter's email
    /// joined in.
    pub async fn list_all(&self) -> Result<Vec<ReportWithOwner>, ApiError> {
        let reports = sqlx::query_as::<_, ReportWithOwner>(
            r#"
            SELECT reports.id, reports.title, reports.description, reports.location,
                   reports.status, reports.user_id, users.email, reports.created_at
            FROM reports
            JOIN users ON reports.user_id = users.id
            ORDER BY reports.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(reports)
    }

    /// Reports filed by one user, newest first.
    pub async fn list_owned(&self, caller_id: &str) -> Result<Vec<ReportWithOwner>, ApiError> {
        let reports = sqlx::query_as::<_, ReportWithOwner>(
            r#"
            SELECT reports.id, reports.title, reports.description, reports.location,
                   reports.status, reports.user_id, users.email, reports.created_at
            FROM reports
            JOIN users ON reports.user_id = users.id
            WHERE reports.user_id = ?
            ORDER BY reports.created_at DESC
            "#,
        )
        .bind(caller_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reports)
    }

    pub async fn get_by_id(&self, report_id: &str) -> Result<Report, ApiError> {
        let report = sqlx::query_as::<_, Report>("SELECT * FROM reports WHERE id = ?")
            .bind(report_id)
            .fetch_optional(&self.pool)
            .await?;

        report.ok_or(ApiError::ReportNotFound)
    }

    pub async fn edit(
        &self,
        report_id: &str,
        payload: &ReportPayload,
        caller: &CurrentUser,
    ) -> Result<(), ApiError> {
        self.check_owner(report_id, &caller.user_id).await?;

        let updated = sqlx::query(
            r#"
            UPDATE reports
            SET title = ?, description = ?, location = ?, status = ?
            WHERE id = ? AND user_id = ?
            "#,
        )
        .bind(&payload.title)
        .bind(&payload.description)
        .bind(&payload.location)
        .bind(&payload.status)
        .bind(report_id)
        .bind(&caller.user_id)
        .execute(&self.pool)
        .await?;

        // Row vanished between the ownership check and the guarded write.
        if updated.rows_affected() == 0 {
            return Err(ApiError::ReportNotFound);
        }

        Ok(())
    }

    pub async fn delete(&self, report_id: &str, caller: &CurrentUser) -> Result<(), ApiError> {
        self.check_owner(report_id, &caller.user_id).await?;

        let deleted = sqlx::query("DELETE FROM reports WHERE id = ? AND user_id = ?")
            .bind(report_id)
            .bind(&caller.user_id)
            .execute(&self.pool)
            .await?;

        if deleted.rows_affected() == 0 {
            return Err(ApiError::ReportNotFound);
        }

        Ok(())
    }

    /// Not-found when the report is absent, forbidden when it belongs to
    /// someone else.
    async fn check_owner(&self, report_id: &str, caller_id: &str) -> Result<(), ApiError> {
        let owner: Option<(String,)> = sqlx::query_as("SELECT user_id FROM reports WHERE id = ?")
            .bind(report_id)
            .fetch_optional(&self.pool)
            .await?;

        let (owner_id,) = owner.ok_or(ApiError::ReportNotFound)?;

        if owner_id != caller_id {
            return Err(ApiError::NotReportOwner);
        }

        Ok(())
    }
}
