/*
 * Responsibility
 * - bookmarks CRUD, always scoped to the owning user
 * - Every statement matches "userId" alongside the row id, so a row owned by
 *   someone else behaves exactly like a row that does not exist
 */
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BookmarkRow {
    #[sqlx(rename = "bookmarkId")]
    pub bookmark_id: i64,

    pub title: String,
    pub description: Option<String>,
    pub link: String,

    #[sqlx(rename = "userId")]
    pub user_id: Uuid,

    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[sqlx(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

pub async fn list_owned(db: &PgPool, user_id: Uuid) -> Result<Vec<BookmarkRow>, RepoError> {
    let rows = sqlx::query_as::<_, BookmarkRow>(
        r#"
        SELECT
            "bookmarkId", title, description, link, "userId", "createdAt", "updatedAt"
        FROM bookmarks
        WHERE "userId" = $1
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn get_owned(
    db: &PgPool,
    user_id: Uuid,
    bookmark_id: i64,
) -> Result<Option<BookmarkRow>, RepoError> {
    let row = sqlx::query_as::<_, BookmarkRow>(
        r#"
        SELECT
            "bookmarkId", title, description, link, "userId", "createdAt", "updatedAt"
        FROM bookmarks
        WHERE "bookmarkId" = $1 AND "userId" = $2
        "#,
    )
    .bind(bookmark_id)
    .bind(user_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

/// Insert with the owner taken from the authenticated caller. The request
/// payload has no owner field, so a client-supplied value can never reach $4.
pub async fn create_owned(
    db: &PgPool,
    user_id: Uuid,
    title: &str,
    description: Option<&str>,
    link: &str,
) -> Result<BookmarkRow, RepoError> {
    let row = sqlx::query_as::<_, BookmarkRow>(
        r#"
        INSERT INTO bookmarks (title, description, link, "userId")
        VALUES ($1, $2, $3, $4)
        RETURNING
            "bookmarkId", title, description, link, "userId", "createdAt", "updatedAt"
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(link)
    .bind(user_id)
    .fetch_one(db)
    .await?;

    Ok(row)
}

pub async fn update_owned(
    db: &PgPool,
    user_id: Uuid,
    bookmark_id: i64,
    title: Option<&str>,
    description: Option<Option<&str>>,
    link: Option<&str>,
) -> Result<Option<BookmarkRow>, RepoError> {
    // description tri-state:
    // - Some(Some(v)) -> set to v
    // - Some(None)    -> set to NULL
    // - None          -> do not update
    // An all-None merge is a no-op that still returns the current row.
    let row = sqlx::query_as::<_, BookmarkRow>(
        r#"
        UPDATE bookmarks
        SET
            title = COALESCE($3, title),
            description = CASE
                WHEN $4 = false THEN description
                ELSE $5
            END,
            link = COALESCE($6, link),
            "updatedAt" = now()
        WHERE "bookmarkId" = $1 AND "userId" = $2
        RETURNING
            "bookmarkId", title, description, link, "userId", "createdAt", "updatedAt"
        "#,
    )
    .bind(bookmark_id)
    .bind(user_id)
    .bind(title)
    .bind(description.is_some()) // $4: flag to set description
    .bind(description.flatten()) // $5: new description value
    .bind(link)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn delete_owned(db: &PgPool, user_id: Uuid, bookmark_id: i64) -> Result<bool, RepoError> {
    let result = sqlx::query(
        r#"
        DELETE FROM bookmarks
        WHERE "bookmarkId" = $1 AND "userId" = $2
        "#,
    )
    .bind(bookmark_id)
    .bind(user_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}
