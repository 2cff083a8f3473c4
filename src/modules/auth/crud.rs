use chrono::Utc;
use uuid::Uuid;

use crate::config::DbPool;
use crate::error::ApiError;
use crate::services::{hashing, jwt::JwtService};

use super::model::{User, UserType};

pub struct AuthResult {
    pub user: User,
    pub token: String,
}

pub struct UserCrud<'a> {
    pool: DbPool,
    jwt_service: &'a JwtService,
}

impl<'a> UserCrud<'a> {
    pub fn new(pool: DbPool, jwt_service: &'a JwtService) -> Self {
        Self { pool, jwt_service }
    }

    pub async fn register(
        &self,
        email: &str,
        password: &str,
        user_type: UserType,
    ) -> Result<AuthResult, ApiError> {
        if self.email_exists(email).await? {
            return Err(ApiError::EmailTaken);
        }

        let password_hash =
            hashing::hash_password(password).map_err(|e| ApiError::Internal(e.to_string()))?;

        let user = User {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            password_hash,
            user_type,
            created_at: Utc::now(),
        };

        let inserted = sqlx::query(
            r#"
            INSERT INTO users (id, email, password_hash, user_type, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.user_type)
        .bind(user.created_at)
        .execute(&self.pool)
        .await;

        if let Err(e) = inserted {
            // The UNIQUE constraint closes the window between the pre-check
            // above and this insert.
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                return Err(ApiError::EmailTaken);
            }
            return Err(e.into());
        }

        let token = self
            .jwt_service
            .issue(&user.id, user.user_type)
            .map_err(|e| ApiError::Internal(e.to_string()))?;

        Ok(AuthResult { user, token })
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResult, ApiError> {
        let user = self
            .find_by_email(email)
            .await?
            .ok_or(ApiError::UserNotFound)?;

        let is_valid = hashing::verify_password(password, &user.password_hash)
            .map_err(|e| ApiError::Internal(e.to_string()))?;

        if !is_valid {
            return Err(ApiError::InvalidCredentials);
        }

        let token = self
            .jwt_service
            .issue(&user.id, user.user_type)
            .map_err(|e| ApiError::Internal(e.to_string()))?;

        Ok(AuthResult { user, token })
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, sqlx::Error> {
        let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0 > 0)
    }
}
