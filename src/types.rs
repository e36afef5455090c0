use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// A cursor-paged Spotify listing. `next` is the full URL of the next page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paging<T> {
    #[serde(default)]
    pub items: Vec<T>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

impl<T> Default for Paging<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next: None,
            total: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturedPlaylistsResponse {
    pub message: Option<String>,
    // removed or region-locked entries come back as null
    pub playlists: Paging<Option<SimplifiedPlaylist>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimplifiedPlaylist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaylistTrackItem {
    pub track: Option<PlaylistTrack>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaylistTrack {
    pub id: Option<String>,
    pub name: Option<String>,
    pub popularity: Option<u32>,
    pub artists: Option<Vec<TrackArtist>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackArtist {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub key: Option<i32>,
    pub tempo: Option<f64>,
    pub time_signature: Option<i32>,
    pub valence: Option<f64>,
    pub liveness: Option<f64>,
    pub energy: Option<f64>,
    pub danceability: Option<f64>,
    pub loudness: Option<f64>,
    pub speechiness: Option<f64>,
    pub acousticness: Option<f64>,
    pub instrumentalness: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryEntry {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistRef {
    pub name: String,
    pub id: String,
    pub country_code: String,
}

/// CSV header of [`TrackRow`], in field order.
pub const TRACK_ROW_COLUMNS: [&str; 21] = [
    "index",
    "country_code",
    "country",
    "playlist_id",
    "top_playlist_name",
    "artist",
    "track_name",
    "track_id",
    "popularity",
    "key",
    "tempo",
    "time_signature",
    "valence",
    "liveness",
    "energy",
    "danceability",
    "loudness",
    "speechiness",
    "acousticness",
    "instrumentalness",
    "tempo_normalized",
];

/// One track of one playlist batch, in export column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackRow {
    pub index: usize,
    pub country_code: String,
    pub country: String,
    pub playlist_id: String,
    pub top_playlist_name: String,
    pub artist: String,
    pub track_name: String,
    pub track_id: String,
    pub popularity: Option<u32>,
    pub key: Option<i32>,
    pub tempo: Option<f64>,
    pub time_signature: Option<i32>,
    pub valence: Option<f64>,
    pub liveness: Option<f64>,
    pub energy: Option<f64>,
    pub danceability: Option<f64>,
    pub loudness: Option<f64>,
    pub speechiness: Option<f64>,
    pub acousticness: Option<f64>,
    pub instrumentalness: Option<f64>,
    pub tempo_normalized: Option<f64>,
}

impl TrackRow {
    pub fn apply_features(&mut self, features: &AudioFeatures) {
        self.key = features.key;
        self.tempo = features.tempo;
        self.time_signature = features.time_signature;
        self.valence = features.valence;
        self.liveness = features.liveness;
        self.energy = features.energy;
        self.danceability = features.danceability;
        self.loudness = features.loudness;
        self.speechiness = features.speechiness;
        self.acousticness = features.acousticness;
        self.instrumentalness = features.instrumentalness;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub rows: Vec<TrackRow>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Tabled)]
pub struct DatasetTableRow {
    pub index: usize,
    pub country: String,
    pub artist: String,
    pub track: String,
    pub popularity: String,
    pub tempo: String,
}

impl From<&TrackRow> for DatasetTableRow {
    fn from(row: &TrackRow) -> Self {
        Self {
            index: row.index,
            country: row.country_code.clone(),
            artist: row.artist.clone(),
            track: row.track_name.clone(),
            popularity: row.popularity.map(|p| p.to_string()).unwrap_or_default(),
            tempo: row
                .tempo_normalized
                .map(|t| format!("{:.2}", t))
                .unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
pub struct CountryTableRow {
    pub code: String,
    pub name: String,
}
