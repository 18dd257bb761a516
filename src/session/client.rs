//! HTTP session implementation for the forum's check-in API.
//!
//! Authentication is an OpenID Connect password grant against the forum's
//! identity server; the check-in action and status query hit the REST API
//! with the bearer token. One `ForumSession` belongs to one account.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::domain::{SignAttempt, SignInfo};
use crate::session::{AccountSession, SessionError, SessionProvider};

/// Identity server token endpoint
const AUTH_URL: &str = "https://openid.cc98.org/connect/token";

/// REST API base URL
const API_URL: &str = "https://api.cc98.org";

/// OAuth client registered for third-party tools
const CLIENT_ID: &str = "9a1fd200-8687-44b1-4c20-08d50a96e5cd";
const CLIENT_SECRET: &str = "8b53f727-08e2-4509-8857-e34bf92b27f2";
const SCOPE: &str = "cc98-api openid";

/// Configuration for forum sessions
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub auth_url: String,
    pub api_url: String,
    pub timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            auth_url: AUTH_URL.to_string(),
            api_url: API_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Opens a fresh [`ForumSession`] per account.
#[derive(Debug, Clone, Default)]
pub struct ForumProvider {
    config: SessionConfig,
}

impl ForumProvider {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }
}

impl SessionProvider for ForumProvider {
    type Session = ForumSession;

    fn session(&self) -> Result<ForumSession, SessionError> {
        let client = Client::builder().timeout(self.config.timeout).build()?;
        Ok(ForumSession {
            client,
            config: self.config.clone(),
            token: None,
        })
    }
}

/// One account's authenticated session.
pub struct ForumSession {
    client: Client,
    config: SessionConfig,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl ForumSession {
    fn token(&self) -> Result<&str, SessionError> {
        self.token
            .as_deref()
            .ok_or_else(|| SessionError::Authentication("not logged in".to_string()))
    }

    fn signin_endpoint(&self) -> String {
        format!("{}/me/signin", self.config.api_url)
    }
}

#[async_trait]
impl AccountSession for ForumSession {
    async fn login(&mut self, username: &str, password: &str) -> Result<(), SessionError> {
        let params = [
            ("client_id", CLIENT_ID),
            ("client_secret", CLIENT_SECRET),
            ("grant_type", "password"),
            ("username", username),
            ("password", password),
            ("scope", SCOPE),
        ];

        let response = self
            .client
            .post(&self.config.auth_url)
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SessionError::Authentication(format!(
                "token endpoint returned {}: {}",
                status,
                body.trim()
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| SessionError::InvalidResponse(format!("token response: {}", e)))?;
        self.token = Some(token.access_token);
        Ok(())
    }

    async fn sign_in(&mut self) -> Result<SignAttempt, SessionError> {
        let token = self.token()?.to_string();
        let response = self
            .client
            .post(self.signin_endpoint())
            .bearer_auth(token)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(SignAttempt::Fresh),
            // The service rejects a duplicate check-in with 400
            StatusCode::BAD_REQUEST => Ok(SignAttempt::AlreadyDone),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(SessionError::SignIn(format!(
                    "service returned {}: {}",
                    status,
                    body.trim()
                )))
            }
        }
    }

    async fn sign_info(&self) -> Result<SignInfo, SessionError> {
        let token = self.token()?.to_string();
        let response = self
            .client
            .get(self.signin_endpoint())
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SessionError::InvalidResponse(format!(
                "status query returned {}",
                status
            )));
        }

        response
            .json()
            .await
            .map_err(|e| SessionError::InvalidResponse(format!("status response: {}", e)))
    }
}
