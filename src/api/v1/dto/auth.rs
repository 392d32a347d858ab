/*
 * Responsibility
 * - Sign-up / sign-in request DTO and the token response DTO
 * - validate() covers shape only; credential checks live in the handler
 */
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    pub email: String,
    pub password: String,
}

impl AuthRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err("email is required");
        }
        if !email.contains('@') {
            return Err("email is not a valid address");
        }
        if self.password.is_empty() {
            return Err("password is required");
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(email: &str, password: &str) -> AuthRequest {
        AuthRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn valid_credentials_pass() {
        assert!(req("user@gmail.com", "12345@user").validate().is_ok());
    }

    #[test]
    fn empty_password_is_rejected() {
        assert!(req("user@gmail.com", "").validate().is_err());
    }

    #[test]
    fn empty_email_is_rejected() {
        assert!(req("", "12345@user").validate().is_err());
        assert!(req("   ", "12345@user").validate().is_err());
    }

    #[test]
    fn email_without_at_is_rejected() {
        assert!(req("usergmail.com", "12345@user").validate().is_err());
    }
}
