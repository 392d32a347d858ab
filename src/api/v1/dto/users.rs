/*
 * Responsibility
 * - User profile request/response DTOs
 * - validate() for shape checks; is_empty() backs the empty-payload 400
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::v1::dto::double_option;
use crate::api::v1::extractors::CurrentUser;
use crate::repos::user_repo::UserRow;

#[derive(Debug, Deserialize)]
pub struct EditUserRequest {
    pub email: Option<String>,
    // Tri-state:
    // - None: field missing (do not update)
    // - Some(None): null (set NULL)
    // - Some(Some(v)): set value
    #[serde(default, deserialize_with = "double_option")]
    pub first_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub last_name: Option<Option<String>>,
}

impl EditUserRequest {
    /// An edit carrying no fields at all is a client error; it must be
    /// rejected before any persistence access.
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.first_name.is_none() && self.last_name.is_none()
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if let Some(email) = &self.email {
            let email = email.trim();
            if email.is_empty() {
                return Err("email cannot be empty");
            }
            if !email.contains('@') {
                return Err("email is not a valid address");
            }
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CurrentUser> for UserResponse {
    fn from(user: CurrentUser) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<UserRow> for UserResponse {
    // The credential hash never reaches a response body.
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
            first_name: row.first_name,
            last_name: row.last_name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload_is_detected() {
        let req: EditUserRequest = serde_json::from_str("{}").unwrap();
        assert!(req.is_empty());
    }

    #[test]
    fn any_field_makes_payload_non_empty() {
        let req: EditUserRequest =
            serde_json::from_str(r#"{"first_name": "Jane"}"#).unwrap();
        assert!(!req.is_empty());

        let req: EditUserRequest = serde_json::from_str(r#"{"last_name": null}"#).unwrap();
        assert!(!req.is_empty());
    }

    #[test]
    fn empty_email_is_rejected() {
        let req: EditUserRequest = serde_json::from_str(r#"{"email": "  "}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn valid_edit_passes() {
        let req: EditUserRequest = serde_json::from_str(
            r#"{"email": "user@gmail.com", "first_name": "Jane", "last_name": null}"#,
        )
        .unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.first_name, Some(Some("Jane".to_string())));
        assert_eq!(req.last_name, Some(None));
    }
}
