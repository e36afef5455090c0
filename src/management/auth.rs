use std::path::PathBuf;

use chrono::Utc;
use reqwest::Client;

use crate::{
    error::Result,
    spotify::auth::{Credentials, request_token},
    types::Token,
};

/// Seconds before expiry at which a cached token is considered stale.
const EXPIRY_MARGIN_SECS: u64 = 240;

pub struct TokenManager {
    credentials: Credentials,
    token: Option<Token>,
}

impl TokenManager {
    pub fn new(credentials: Credentials, token: Option<Token>) -> Self {
        TokenManager { credentials, token }
    }

    /// Loads the cached token, if any. A missing or unreadable cache is not an error.
    pub async fn load(credentials: Credentials) -> Self {
        let token = match async_fs::read_to_string(Self::token_path()).await {
            Ok(content) => serde_json::from_str::<Token>(&content).ok(),
            Err(_) => None,
        };
        Self { credentials, token }
    }

    pub async fn persist(&self) -> Result<()> {
        let Some(token) = &self.token else {
            return Ok(());
        };

        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(token)?;
        async_fs::write(path, json).await?;
        Ok(())
    }

    /// Returns a usable access token, requesting a fresh one when needed.
    pub async fn get_valid_token(&mut self, http: &Client) -> Result<String> {
        if let Some(token) = &self.token {
            if !is_expired(token, Utc::now().timestamp() as u64) {
                return Ok(token.access_token.clone());
            }
        }

        let token = request_token(http, &self.credentials).await?;
        let access_token = token.access_token.clone();
        self.token = Some(token);
        let _ = self.persist().await;

        Ok(access_token)
    }

    pub fn current_token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("featcli/cache/token.json");
        path
    }
}

/// True when `token` expires within the margin at time `now` (unix seconds).
pub fn is_expired(token: &Token, now: u64) -> bool {
    now + EXPIRY_MARGIN_SECS >= token.obtained_at + token.expires_in
}
