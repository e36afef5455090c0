#![allow(dead_code)]

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use featcli::{
    error::{Error, Result},
    spotify::Catalog,
    types::{
        AudioFeatures, Paging, PlaylistTrack, PlaylistTrackItem, SimplifiedPlaylist, TrackArtist,
    },
};
use reqwest::StatusCode;

// In-memory catalog serving canned pages
#[derive(Default)]
pub struct FakeCatalog {
    pub featured: HashMap<String, Vec<Vec<Option<SimplifiedPlaylist>>>>,
    pub featured_status: HashMap<String, StatusCode>,
    pub tracks: HashMap<String, Vec<PlaylistTrackItem>>,
    pub tracks_status: HashMap<String, StatusCode>,
    pub features: HashMap<String, AudioFeatures>,
    pub features_status: HashMap<String, StatusCode>,
    pub feature_calls: Mutex<Vec<String>>,
    pub track_calls: Mutex<Vec<(String, usize, Option<String>)>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_featured(mut self, country: &str, pages: Vec<Vec<(&str, &str)>>) -> Self {
        let pages = pages
            .into_iter()
            .map(|page| {
                page.into_iter()
                    .map(|(id, name)| {
                        Some(SimplifiedPlaylist {
                            id: id.to_string(),
                            name: name.to_string(),
                        })
                    })
                    .collect()
            })
            .collect();
        self.featured.insert(country.to_string(), pages);
        self
    }

    pub fn with_tracks(mut self, playlist_id: &str, items: Vec<PlaylistTrackItem>) -> Self {
        self.tracks.insert(playlist_id.to_string(), items);
        self
    }

    pub fn with_features(mut self, track_id: &str, features: AudioFeatures) -> Self {
        self.features.insert(track_id.to_string(), features);
        self
    }

    /// Adds a playlist whose tracks `t1..tN` each have features with the given tempo.
    pub fn with_playlist(mut self, playlist_id: &str, tracks: &[(&str, u32, f64)]) -> Self {
        let items = tracks
            .iter()
            .map(|(id, popularity, _)| item(id, &format!("Song {}", id), "Artist", *popularity))
            .collect();
        self.tracks.insert(playlist_id.to_string(), items);
        for (id, _, tempo) in tracks {
            self.features.insert(id.to_string(), features_with_tempo(*tempo));
        }
        self
    }

    pub fn feature_calls(&self) -> Vec<String> {
        self.feature_calls.lock().unwrap().clone()
    }

    pub fn track_calls(&self) -> Vec<(String, usize, Option<String>)> {
        self.track_calls.lock().unwrap().clone()
    }
}

fn status_error(status: StatusCode, url: String) -> Error {
    Error::Status { status, url }
}

#[async_trait]
impl Catalog for FakeCatalog {
    async fn featured_playlists(
        &self,
        country: &str,
        cursor: Option<&str>,
    ) -> Result<Paging<Option<SimplifiedPlaylist>>> {
        if let Some(status) = self.featured_status.get(country) {
            return Err(status_error(*status, format!("fake://featured/{}", country)));
        }

        let pages = match self.featured.get(country) {
            Some(pages) => pages,
            None => return Ok(Paging::default()),
        };

        let page_no: usize = cursor
            .and_then(|c| c.rsplit('/').next())
            .and_then(|n| n.parse().ok())
            .unwrap_or(0);

        let items = pages.get(page_no).cloned().unwrap_or_default();
        let next = if page_no + 1 < pages.len() {
            Some(format!("fake://featured/{}/{}", country, page_no + 1))
        } else {
            None
        };

        Ok(Paging {
            items,
            next,
            total: None,
        })
    }

    async fn playlist_tracks(
        &self,
        playlist_id: &str,
        limit: usize,
        cursor: Option<&str>,
    ) -> Result<Paging<PlaylistTrackItem>> {
        self.track_calls.lock().unwrap().push((
            playlist_id.to_string(),
            limit,
            cursor.map(str::to_string),
        ));

        if let Some(status) = self.tracks_status.get(playlist_id) {
            return Err(status_error(*status, format!("fake://tracks/{}", playlist_id)));
        }

        let all = self.tracks.get(playlist_id).cloned().unwrap_or_default();

        // cursor format: "<offset>,<limit>"
        let (offset, page_limit) = match cursor {
            Some(c) => {
                let mut parts = c.split(',');
                let offset = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
                let page_limit = parts.next().and_then(|p| p.parse().ok()).unwrap_or(limit);
                (offset, page_limit)
            }
            None => (0, limit),
        };

        let end = (offset + page_limit).min(all.len());
        let items = all.get(offset..end).map(|s| s.to_vec()).unwrap_or_default();
        let next = if end < all.len() {
            Some(format!("{},{}", end, page_limit))
        } else {
            None
        };

        Ok(Paging {
            items,
            next,
            total: Some(all.len() as u64),
        })
    }

    async fn audio_features(&self, track_id: &str) -> Result<Option<AudioFeatures>> {
        self.feature_calls.lock().unwrap().push(track_id.to_string());

        if let Some(status) = self.features_status.get(track_id) {
            return Err(status_error(*status, format!("fake://features/{}", track_id)));
        }

        Ok(self.features.get(track_id).cloned())
    }
}

pub fn item(id: &str, name: &str, artist: &str, popularity: u32) -> PlaylistTrackItem {
    PlaylistTrackItem {
        track: Some(PlaylistTrack {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            popularity: Some(popularity),
            artists: Some(vec![TrackArtist {
                id: Some(format!("{}_artist", id)),
                name: Some(artist.to_string()),
            }]),
        }),
    }
}

pub fn features_with_tempo(tempo: f64) -> AudioFeatures {
    AudioFeatures {
        key: Some(5),
        tempo: Some(tempo),
        time_signature: Some(4),
        valence: Some(0.5),
        liveness: Some(0.1),
        energy: Some(0.7),
        danceability: Some(0.6),
        loudness: Some(-6.0),
        speechiness: Some(0.05),
        acousticness: Some(0.2),
        instrumentalness: Some(0.0),
    }
}

pub fn codes(codes: &[&str]) -> Vec<String> {
    codes.iter().map(|c| c.to_string()).collect()
}
