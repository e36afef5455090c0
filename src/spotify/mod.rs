//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API that the dataset
//! pipeline depends on. It handles HTTP communication, client-credentials
//! authentication and response decoding.
//!
//! ## Architecture
//!
//! ```text
//! Pipeline (locate, enrich, assemble)
//!          ↓
//! Catalog trait
//!          ↓
//! SpotifyClient
//!     ├── Authentication (client credentials)
//!     ├── Playlist Operations (featured playlists, playlist tracks)
//!     └── Track Operations (audio features)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! The pipeline only ever talks to the [`Catalog`] trait, so every stage can
//! run against an in-memory catalog in tests.
//!
//! ## API Coverage
//!
//! - `GET /browse/featured-playlists` - Featured playlists of a market, paged
//! - `GET /playlists/{id}/tracks` - Playlist items, paged
//! - `GET /audio-features/{id}` - Audio features of one track
//! - `POST /api/token` - Client-credentials token exchange
//!
//! ## Error Handling
//!
//! Non-success responses become [`Error::Status`]. Not-found lookups of
//! optional resources become `Ok(None)`. There is no retry; the pipeline
//! decides per [`crate::error::Severity`] whether to skip or abort.

pub mod auth;
pub mod features;
pub mod playlists;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use crate::{
    config,
    error::{Error, Result},
    management::TokenManager,
    types::{AudioFeatures, Paging, PlaylistTrackItem, SimplifiedPlaylist},
};

use auth::Credentials;

/// Read access to the parts of the catalog the dataset pipeline needs.
///
/// `cursor` is the `next` URL of the previous page; `None` requests the first page.
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn featured_playlists(
        &self,
        country: &str,
        cursor: Option<&str>,
    ) -> Result<Paging<Option<SimplifiedPlaylist>>>;

    async fn playlist_tracks(
        &self,
        playlist_id: &str,
        limit: usize,
        cursor: Option<&str>,
    ) -> Result<Paging<PlaylistTrackItem>>;

    async fn audio_features(&self, track_id: &str) -> Result<Option<AudioFeatures>>;
}

/// Spotify Web API client holding a shared HTTP client and the token cache.
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    tokens: Mutex<TokenManager>,
}

impl SpotifyClient {
    pub fn new(http: Client, api_url: String, tokens: TokenManager) -> Self {
        Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            tokens: Mutex::new(tokens),
        }
    }

    /// Builds a client from the environment and makes sure a valid token exists.
    pub async fn from_env() -> Result<Self> {
        let http = Client::builder()
            .timeout(config::request_timeout())
            .build()?;
        let credentials = Credentials::from_env()?;
        let mut tokens = TokenManager::load(credentials).await;
        tokens.get_valid_token(&http).await?;

        Ok(Self::new(http, config::spotify_apiurl(), tokens))
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// GETs `url` and decodes the body. Any non-success status is an error.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        match self.get_optional_json(url).await? {
            Some(body) => Ok(body),
            None => Err(Error::Status {
                status: StatusCode::NOT_FOUND,
                url: url.to_string(),
            }),
        }
    }

    /// GETs `url`; a 404 or a `null` body yields `None`.
    pub(crate) async fn get_optional_json<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> Result<Option<T>> {
        let token = {
            let mut tokens = self.tokens.lock().await;
            tokens.get_valid_token(&self.http).await?
        };

        let response = self.http.get(url).bearer_auth(token).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(Error::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.json::<Option<T>>().await?;
        Ok(body)
    }
}

#[async_trait]
impl Catalog for SpotifyClient {
    async fn featured_playlists(
        &self,
        country: &str,
        cursor: Option<&str>,
    ) -> Result<Paging<Option<SimplifiedPlaylist>>> {
        playlists::get_featured_playlists(self, country, cursor).await
    }

    async fn playlist_tracks(
        &self,
        playlist_id: &str,
        limit: usize,
        cursor: Option<&str>,
    ) -> Result<Paging<PlaylistTrackItem>> {
        playlists::get_playlist_tracks(self, playlist_id, limit, cursor).await
    }

    async fn audio_features(&self, track_id: &str) -> Result<Option<AudioFeatures>> {
        features::get_audio_features(self, track_id).await
    }
}
