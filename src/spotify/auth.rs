use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    config,
    error::{Error, Result},
    types::Token,
};

/// Client id, secret and token endpoint for the client-credentials grant.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub token_url: String,
}

impl Credentials {
    /// Reads the credentials from the environment, see [`config`].
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            client_id: config::spotify_client_id()?,
            client_secret: config::spotify_client_secret()?,
            token_url: config::spotify_apitoken_url(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    token_type: Option<String>,
    expires_in: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct TokenErrorResponse {
    error: Option<String>,
    error_description: Option<String>,
}

/// Requests an app token with the client-credentials grant.
///
/// Posts `grant_type=client_credentials` to the token endpoint with the client
/// id and secret as HTTP basic auth. No user is involved, so the token only
/// grants access to public catalog data.
///
/// # Arguments
///
/// * `http` - Shared HTTP client, configured with the request timeout
/// * `credentials` - Client id, secret and token endpoint
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - The access token, stamped with the time it was obtained
/// - `Err(Error::Auth)` - Spotify rejected the credentials or sent an
///   unexpected body
/// - `Err(Error::Http)` - The token endpoint could not be reached
///
/// # Defaults
///
/// A response without `token_type` is treated as `Bearer`, and one without
/// `expires_in` as valid for 3600 seconds.
///
/// # Error Handling
///
/// For a rejected request the reason is taken from the `error_description`
/// or `error` field of the body, falling back to the HTTP status. Auth errors
/// are fatal and abort the run.
///
/// # Example
///
/// ```
/// let credentials = Credentials::from_env()?;
/// let token = request_token(&reqwest::Client::new(), &credentials).await?;
/// println!("expires in {}s", token.expires_in);
/// ```
pub async fn request_token(http: &Client, credentials: &Credentials) -> Result<Token> {
    let res = http
        .post(&credentials.token_url)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        let reason = match res.json::<TokenErrorResponse>().await {
            Ok(body) => body
                .error_description
                .or(body.error)
                .unwrap_or_else(|| status.to_string()),
            Err(_) => status.to_string(),
        };
        return Err(Error::Auth(reason));
    }

    let json = res
        .json::<TokenResponse>()
        .await
        .map_err(|e| Error::Auth(format!("unexpected token response: {}", e)))?;

    Ok(Token {
        access_token: json.access_token,
        token_type: json.token_type.unwrap_or_else(|| "Bearer".to_string()),
        expires_in: json.expires_in.unwrap_or(3600),
        obtained_at: Utc::now().timestamp() as u64,
    })
}
