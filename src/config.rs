//! Configuration management for featcli.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Spotify client credentials are required; API
//! endpoints, request timeout and the track limit fall back to defaults.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf, time::Duration};

use crate::error::{Error, Result};

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_TRACK_LIMIT: usize = 10;

/// Loads environment variables from the `.env` file in the local data directory.
///
/// The directory `<data_local_dir>/featcli` is created when missing. A missing
/// `.env` file is not an error: variables already present in the process
/// environment are used as they are, and dotenv never overrides them.
///
/// # Directory Structure
///
/// The `.env` file is looked up in:
/// - Linux: `~/.local/share/featcli/.env`
/// - macOS: `~/Library/Application Support/featcli/.env`
/// - Windows: `%LOCALAPPDATA%/featcli/.env`
///
/// # Errors
///
/// Returns [`Error::Io`] when the directory cannot be created and
/// [`Error::Config`] when an existing `.env` file cannot be parsed.
///
/// # Example
///
/// ```
/// use featcli::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<()> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        dotenv::from_path(&path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
    }
    Ok(())
}

/// Path of the `.env` file read by [`load_env`].
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("featcli/.env");
    path
}

/// Returns the Spotify API client ID.
///
/// Reads `SPOTIFY_API_AUTH_CLIENT_ID`, the client ID of the application
/// registered on Spotify's developer dashboard. It is sent together with the
/// secret when requesting a client-credentials token.
///
/// # Errors
///
/// Returns [`Error::Config`] when the variable is unset or blank. The error
/// is fatal and aborts a dataset build before any request is made.
///
/// # Example
///
/// ```
/// let client_id = config::spotify_client_id()?; // e.g., "abc123..."
/// ```
pub fn spotify_client_id() -> Result<String> {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Returns the Spotify API client secret.
///
/// Reads `SPOTIFY_API_AUTH_CLIENT_SECRET`, the secret belonging to
/// [`spotify_client_id`].
///
/// # Errors
///
/// Returns [`Error::Config`] when the variable is unset or blank.
///
/// # Security Note
///
/// The secret is only ever sent as HTTP basic auth to the token endpoint. It
/// is never printed and never written to the token cache.
///
/// # Example
///
/// ```
/// let client_secret = config::spotify_client_secret()?; // e.g., "def456..."
/// ```
pub fn spotify_client_secret() -> Result<String> {
    required("SPOTIFY_API_AUTH_CLIENT_SECRET")
}

/// Returns the base URL of the Spotify Web API.
///
/// Reads `SPOTIFY_API_URL` and falls back to [`DEFAULT_API_URL`]. Every
/// endpoint URL is built on top of this value, so pointing it elsewhere
/// redirects all catalog requests.
///
/// # Example
///
/// ```
/// let api_url = config::spotify_apiurl(); // e.g., "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Returns the Spotify accounts token endpoint.
///
/// Reads `SPOTIFY_API_TOKEN_URL` and falls back to [`DEFAULT_TOKEN_URL`].
///
/// # Example
///
/// ```
/// let token_url = config::spotify_apitoken_url();
/// // e.g., "https://accounts.spotify.com/api/token"
/// ```
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string())
}

/// Returns the timeout applied to every HTTP request.
///
/// Reads `REQUEST_TIMEOUT_SECS` as whole seconds. Unset or unparsable values
/// fall back to [`DEFAULT_TIMEOUT_SECS`]. A request that runs past the timeout
/// fails with a transient error, so the affected country or track is skipped.
///
/// # Example
///
/// ```
/// let timeout = config::request_timeout(); // e.g., 30s
/// ```
pub fn request_timeout() -> Duration {
    let secs = env::var("REQUEST_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

/// Returns the number of tracks fetched per playlist.
///
/// Reads `TRACK_LIMIT`. The command line `--limit` and `--all-tracks` flags
/// take precedence over it.
///
/// # Returns
///
/// - `Some(n)` - fetch at most `n` tracks (default [`DEFAULT_TRACK_LIMIT`])
/// - `None` - `TRACK_LIMIT=0` or `TRACK_LIMIT=all`, fetch the whole playlist
///
/// Unparsable values fall back to the default.
///
/// # Example
///
/// ```
/// // TRACK_LIMIT=25
/// assert_eq!(config::track_limit(), Some(25));
/// ```
pub fn track_limit() -> Option<usize> {
    match env::var("TRACK_LIMIT") {
        Ok(v) if v.trim().eq_ignore_ascii_case("all") => None,
        Ok(v) => match v.trim().parse::<usize>() {
            Ok(0) => None,
            Ok(n) => Some(n),
            Err(_) => Some(DEFAULT_TRACK_LIMIT),
        },
        Err(_) => Some(DEFAULT_TRACK_LIMIT),
    }
}

fn required(key: &str) -> Result<String> {
    match env::var(key) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::Config(format!("{} must be set", key))),
    }
}
