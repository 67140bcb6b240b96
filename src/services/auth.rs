//! Static API-key authentication

use subtle::ConstantTimeEq;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
};

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "Api-Key";

#[derive(Clone)]
pub struct AuthService {
    config: AuthConfig,
}

impl AuthService {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    /// Exchange the configured login/password pair for the API key
    pub fn login(&self, login: &str, password: &str) -> AppResult<String> {
        let login_ok = login.as_bytes().ct_eq(self.config.api_user.as_bytes());
        let password_ok = password.as_bytes().ct_eq(self.config.api_password.as_bytes());
        if !bool::from(login_ok & password_ok) {
            tracing::warn!("Rejected login attempt for {}", login);
            return Err(AppError::Authentication("Incorrect login or password".to_string()));
        }
        Ok(self.config.api_key.clone())
    }

    /// Check a header-supplied key against the configured one
    pub fn verify_api_key(&self, key: Option<&str>) -> AppResult<()> {
        match key {
            Some(key) if key.as_bytes().ct_eq(self.config.api_key.as_bytes()).into() => Ok(()),
            _ => Err(AppError::Authorization("Missing or invalid Api-Key".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new(AuthConfig {
            api_key: "key-123".to_string(),
            api_user: "librarian".to_string(),
            api_password: "s3cret".to_string(),
        })
    }

    #[test]
    fn test_login() {
        let auth = service();
        assert_eq!(auth.login("librarian", "s3cret").unwrap(), "key-123");
        assert!(matches!(
            auth.login("librarian", "wrong"),
            Err(AppError::Authentication(_))
        ));
        assert!(auth.login("other", "s3cret").is_err());
        assert!(auth.login("librarian", "s3cret-and-more").is_err());
        assert!(auth.login("", "").is_err());
    }

    #[test]
    fn test_verify_api_key() {
        let auth = service();
        assert!(auth.verify_api_key(Some("key-123")).is_ok());
        assert!(matches!(
            auth.verify_api_key(Some("key-124")),
            Err(AppError::Authorization(_))
        ));
        assert!(auth.verify_api_key(Some("key-1234")).is_err());
        assert!(auth.verify_api_key(Some("key-12")).is_err());
        assert!(auth.verify_api_key(Some("")).is_err());
        assert!(auth.verify_api_key(None).is_err());
    }
}
