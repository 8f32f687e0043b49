//! Session checks against a hosted identity provider

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use super::{AuthError, AuthProvider, AuthStatus};

#[derive(Debug, Clone)]
pub struct HostedAuthConfig {
    /// Provider base URL, e.g. "https://auth.tfdn.org"
    pub base_url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl HostedAuthConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: 5000,
        }
    }

    fn session_url(&self) -> String {
        format!("{}/session", self.base_url.trim_end_matches('/'))
    }
}

/// Asks the provider's `GET /session` endpoint about a bearer token
///
/// 2xx with `{"authenticated": bool}` is taken as the answer, 401/403 as
/// signed out. Anything else is an error for the caller to degrade.
pub struct HostedAuthProvider {
    client: Client,
    config: HostedAuthConfig,
}

impl HostedAuthProvider {
    pub fn new(config: HostedAuthConfig) -> Result<Self, AuthError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl AuthProvider for HostedAuthProvider {
    fn name(&self) -> &str {
        "hosted"
    }

    async fn session(&self, token: Option<&str>) -> Result<AuthStatus, AuthError> {
        let Some(token) = token else {
            return Ok(AuthStatus::ANONYMOUS);
        };

        let response = self
            .client
            .get(self.config.session_url())
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AuthError::Timeout
                } else if e.is_connect() {
                    AuthError::Unavailable
                } else {
                    AuthError::Request(e)
                }
            })?;

        match response.status() {
            status if status.is_success() => Ok(response.json::<AuthStatus>().await?),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(AuthStatus::ANONYMOUS),
            status => Err(AuthError::Provider {
                status: status.as_u16(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_url() {
        let config = HostedAuthConfig::new("https://auth.example.org/");
        assert_eq!(config.session_url(), "https://auth.example.org/session");
        assert_eq!(config.timeout_ms, 5000);
    }

    #[tokio::test]
    async fn test_no_token_skips_provider() {
        // Unroutable: a request would fail, so Ok proves none was sent
        let provider = HostedAuthProvider::new(HostedAuthConfig::new("http://127.0.0.1:1")).unwrap();
        assert_eq!(provider.session(None).await.unwrap(), AuthStatus::ANONYMOUS);
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_error() {
        let provider = HostedAuthProvider::new(HostedAuthConfig::new("http://127.0.0.1:1")).unwrap();
        assert!(provider.session(Some("token")).await.is_err());
    }
}
