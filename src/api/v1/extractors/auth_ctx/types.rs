/*
 * Responsibility
 * - The "authenticated context" type visible to handlers
 * - The gate verifies the token, resolves the user and stores this in
 *   request extensions; handlers receive only this type
 *
 * Notes
 * - This is the sole channel for caller identity; nothing downstream
 *   re-derives it from headers or payloads
 */

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// The user record resolved by the authentication gate.
///
/// Mirrors the users row minus the credential hash, which must not travel
/// past the gate.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Context attached to an authenticated request.
#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub user: CurrentUser,
}

impl AuthCtx {
    pub fn new(user: CurrentUser) -> Self {
        Self { user }
    }
}
