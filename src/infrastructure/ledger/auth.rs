//! OAuth access tokens for the Sheets API, minted from a service account.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::domain::errors::{DomainError, DomainResult};

pub const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: i64 = 3600;
/// Refresh this long before the token actually expires.
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn access_token(&self) -> DomainResult<String>;
}

/// The subset of a service-account key file we need.
#[derive(Clone, Deserialize)]
pub struct ServiceAccountCredentials {
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

impl std::fmt::Debug for ServiceAccountCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountCredentials")
            .field("client_email", &self.client_email)
            .field("private_key", &"<redacted>")
            .field("token_uri", &self.token_uri)
            .finish()
    }
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

#[derive(Serialize)]
struct Claims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

struct CachedToken {
    token: String,
    refresh_at: Instant,
}

pub struct ServiceAccountTokenProvider {
    client: reqwest::Client,
    credentials: ServiceAccountCredentials,
    key: EncodingKey,
    cached: Mutex<Option<CachedToken>>,
}

impl ServiceAccountTokenProvider {
    pub fn new(
        client: reqwest::Client,
        credentials: ServiceAccountCredentials,
    ) -> DomainResult<Self> {
        let key = EncodingKey::from_rsa_pem(credentials.private_key.as_bytes())
            .map_err(|err| DomainError::Validation(format!("invalid service account key: {err}")))?;
        Ok(Self {
            client,
            credentials,
            key,
            cached: Mutex::new(None),
        })
    }

    fn assertion(&self) -> DomainResult<String> {
        let iat = Utc::now().timestamp();
        let claims = Claims {
            iss: &self.credentials.client_email,
            scope: SHEETS_SCOPE,
            aud: &self.credentials.token_uri,
            iat,
            exp: iat + ASSERTION_LIFETIME_SECS,
        };
        encode(&Header::new(Algorithm::RS256), &claims, &self.key)
            .map_err(|err| DomainError::persistence(format!("failed to sign token request: {err}")))
    }

    async fn fetch(&self) -> DomainResult<CachedToken> {
        let assertion = self.assertion()?;
        let response = self
            .client
            .post(&self.credentials.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await
            .map_err(|err| DomainError::persistence(format!("token request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::persistence(format!(
                "token endpoint returned {status}: {body}"
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|err| DomainError::persistence(format!("invalid token response: {err}")))?;
        let lifetime = Duration::from_secs(token.expires_in).saturating_sub(EXPIRY_MARGIN);
        Ok(CachedToken {
            token: token.access_token,
            refresh_at: Instant::now() + lifetime,
        })
    }
}

#[async_trait]
impl AccessTokenProvider for ServiceAccountTokenProvider {
    async fn access_token(&self) -> DomainResult<String> {
        let mut cached = self.cached.lock().await;
        if let Some(token) = cached.as_ref().filter(|t| Instant::now() < t.refresh_at) {
            return Ok(token.token.clone());
        }

        tracing::debug!(email = %self.credentials.client_email, "requesting sheets access token");
        let fresh = self.fetch().await?;
        let token = fresh.token.clone();
        *cached = Some(fresh);
        Ok(token)
    }
}

/// Fixed token, for local emulators and tests.
pub struct StaticTokenProvider(pub String);

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> DomainResult<String> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_file_defaults_token_uri() {
        let creds: ServiceAccountCredentials = serde_json::from_str(
            r#"{"type":"service_account","client_email":"bot@p.iam.gserviceaccount.com","private_key":"k"}"#,
        )
        .unwrap();
        assert_eq!(creds.token_uri, DEFAULT_TOKEN_URI);
        assert!(!format!("{creds:?}").contains("\"k\""));
    }

    #[test]
    fn garbage_key_is_rejected() {
        let creds = ServiceAccountCredentials {
            client_email: "bot@p.iam.gserviceaccount.com".into(),
            private_key: "not a pem document".into(),
            token_uri: DEFAULT_TOKEN_URI.into(),
        };
        assert!(ServiceAccountTokenProvider::new(reqwest::Client::new(), creds).is_err());
    }
}
