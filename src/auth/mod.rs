//! Hosted authentication
//!
//! Sign-in and sign-up happen against a hosted identity provider; this crate
//! never sees credentials. The server only asks the provider whether a bearer
//! token belongs to a live session and passes the yes/no answer on.

mod hosted;

pub use hosted::{HostedAuthConfig, HostedAuthProvider};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Session state reported to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthStatus {
    pub authenticated: bool,
}

impl AuthStatus {
    pub const ANONYMOUS: AuthStatus = AuthStatus {
        authenticated: false,
    };
}

/// A source of truth for session checks
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Check the session behind a bearer token. No token means unauthenticated.
    async fn session(&self, token: Option<&str>) -> Result<AuthStatus, AuthError>;
}

/// Used when no provider is configured: nobody is signed in
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledAuth;

#[async_trait]
impl AuthProvider for DisabledAuth {
    fn name(&self) -> &str {
        "disabled"
    }

    async fn session(&self, _token: Option<&str>) -> Result<AuthStatus, AuthError> {
        Ok(AuthStatus::ANONYMOUS)
    }
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Auth provider unavailable")]
    Unavailable,

    #[error("Auth provider timed out")]
    Timeout,

    #[error("Auth provider returned {status}")]
    Provider { status: u16 },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Extract the token from an `Authorization: Bearer <token>` header value
pub fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_auth() {
        let auth = DisabledAuth;
        assert_eq!(auth.session(Some("abc")).await.unwrap(), AuthStatus::ANONYMOUS);
        assert_eq!(auth.name(), "disabled");
    }

    #[test]
    fn test_bearer_token() {
        assert_eq!(bearer_token("Bearer abc123"), Some("abc123"));
        assert_eq!(bearer_token("bearer   xyz "), Some("xyz"));
        assert_eq!(bearer_token("Basic abc"), None);
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("abc"), None);
    }

    #[test]
    fn test_status_shape() {
        let json = serde_json::to_string(&AuthStatus { authenticated: true }).unwrap();
        assert_eq!(json, r#"{"authenticated":true}"#);
    }
}
