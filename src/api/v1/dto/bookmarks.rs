/*
 * Responsibility
 * - Bookmark request/response DTOs
 * - validate() checks shape (title, link syntax); ownership is not a DTO
 *   concern and no owner field exists here at all
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::api::v1::dto::double_option;
use crate::repos::bookmark_repo::BookmarkRow;

fn validate_link(link: &str) -> Result<(), &'static str> {
    match Url::parse(link) {
        Ok(_) => Ok(()),
        Err(_) => Err("link must be a valid URL"),
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateBookmarkRequest {
    pub title: String,
    pub description: Option<String>,
    pub link: String,
}

impl CreateBookmarkRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("title is required");
        }
        validate_link(&self.link)
    }
}

#[derive(Debug, Deserialize)]
pub struct EditBookmarkRequest {
    pub title: Option<String>,
    // Tri-state:
    // - None: field missing (do not update)
    // - Some(None): null (set NULL)
    // - Some(Some(v)): set value
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub link: Option<String>,
}

impl EditBookmarkRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if let Some(title) = &self.title
            && title.trim().is_empty()
        {
            return Err("title cannot be empty");
        }
        if let Some(link) = &self.link {
            validate_link(link)?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct BookmarkResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub link: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BookmarkRow> for BookmarkResponse {
    fn from(row: BookmarkRow) -> Self {
        Self {
            id: row.bookmark_id,
            title: row.title,
            description: row.description,
            link: row.link,
            user_id: row.user_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_create_passes() {
        let req: CreateBookmarkRequest =
            serde_json::from_str(r#"{"title": "T", "description": "D", "link": "https://x"}"#)
                .unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn empty_title_is_rejected() {
        let req: CreateBookmarkRequest =
            serde_json::from_str(r#"{"title": " ", "link": "https://x"}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn malformed_link_is_rejected() {
        let req: CreateBookmarkRequest =
            serde_json::from_str(r#"{"title": "T", "link": "not a url"}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn client_supplied_owner_field_is_ignored() {
        // Unknown fields are dropped at deserialization; the DTO has no
        // owner slot for a hostile payload to occupy.
        let req: CreateBookmarkRequest = serde_json::from_str(
            r#"{"title": "T", "link": "https://x", "user_id": "11111111-1111-1111-1111-111111111111"}"#,
        )
        .unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn edit_tri_state_description() {
        let req: EditBookmarkRequest =
            serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert_eq!(req.description, Some(None));
        assert!(req.validate().is_ok());

        let req: EditBookmarkRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.description, None);
    }

    #[test]
    fn edit_with_bad_link_is_rejected() {
        let req: EditBookmarkRequest =
            serde_json::from_str(r#"{"link": "::nope::"}"#).unwrap();
        assert!(req.validate().is_err());
    }
}
