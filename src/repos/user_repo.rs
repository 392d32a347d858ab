/*
 * Responsibility
 * - SQLx operations for the users table
 * - Takes a PgPool and provides sign-up insert, lookups and profile update
 * - Unique-violation on email is reported as RepoError::Conflict
 */
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    #[sqlx(rename = "userId")]
    pub id: Uuid,
    pub email: String,
    // Argon2 credential hash; never leaves the repo/handler boundary.
    pub hash: String,
    #[sqlx(rename = "firstName")]
    pub first_name: Option<String>,
    #[sqlx(rename = "lastName")]
    pub last_name: Option<String>,
    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[sqlx(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

pub async fn create(db: &PgPool, email: &str, hash: &str) -> Result<UserRow, RepoError> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (email, hash)
        VALUES ($1, $2)
        RETURNING "userId", email, hash, "firstName", "lastName", "createdAt", "updatedAt"
        "#,
    )
    .bind(email)
    .bind(hash)
    .fetch_one(db)
    .await
    .map_err(RepoError::from_sqlx)?;

    Ok(row)
}

pub async fn get(db: &PgPool, user_id: Uuid) -> Result<Option<UserRow>, RepoError> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT "userId", email, hash, "firstName", "lastName", "createdAt", "updatedAt"
        FROM users
        WHERE "userId" = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<UserRow>, RepoError> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT "userId", email, hash, "firstName", "lastName", "createdAt", "updatedAt"
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn update(
    db: &PgPool,
    user_id: Uuid,
    email: Option<&str>,
    first_name: Option<Option<&str>>,
    last_name: Option<Option<&str>>,
) -> Result<Option<UserRow>, RepoError> {
    // first_name / last_name tri-state:
    // - Some(Some(v)) -> set to v
    // - Some(None)    -> set to NULL
    // - None          -> do not update
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        UPDATE users
        SET
            email = COALESCE($2, email),
            "firstName" = CASE
                WHEN $3 = false THEN "firstName"
                ELSE $4
            END,
            "lastName" = CASE
                WHEN $5 = false THEN "lastName"
                ELSE $6
            END,
            "updatedAt" = now()
        WHERE "userId" = $1
        RETURNING "userId", email, hash, "firstName", "lastName", "createdAt", "updatedAt"
        "#,
    )
    .bind(user_id)
    .bind(email)
    .bind(first_name.is_some()) // $3: flag to set first_name
    .bind(first_name.flatten()) // $4: new first_name value
    .bind(last_name.is_some()) // $5: flag to set last_name
    .bind(last_name.flatten()) // $6: new last_name value
    .fetch_optional(db)
    .await
    .map_err(RepoError::from_sqlx)?;

    Ok(row)
}
