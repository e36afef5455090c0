use std::collections::HashMap;

use crate::{
    config,
    error::Result,
    spotify::{Catalog, playlists::TRACKS_PAGE_LIMIT},
    types::{AudioFeatures, PlaylistTrackItem, TrackRow},
    utils, warning,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrichOptions {
    /// Maximum number of tracks per playlist; `None` fetches the whole playlist.
    pub track_limit: Option<usize>,
}

impl Default for EnrichOptions {
    fn default() -> Self {
        Self {
            track_limit: Some(config::DEFAULT_TRACK_LIMIT),
        }
    }
}

/// The basic fields of one playlist item, or the sentinel when any is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackFields {
    Present {
        artist: String,
        track_name: String,
        track_id: String,
        popularity: u32,
    },
    Missing,
}

impl TrackFields {
    fn into_row(self, index: usize, playlist_name: &str, playlist_id: &str) -> TrackRow {
        let mut row = TrackRow {
            index,
            playlist_id: playlist_id.to_string(),
            top_playlist_name: playlist_name.to_string(),
            ..TrackRow::default()
        };

        if let TrackFields::Present {
            artist,
            track_name,
            track_id,
            popularity,
        } = self
        {
            row.artist = artist;
            row.track_name = track_name;
            row.track_id = track_id;
            row.popularity = Some(popularity);
        }

        row
    }
}

/// Reads first artist, name, id and popularity of an item.
///
/// Removed items, local files without an id and tracks without artists all
/// come back as [`TrackFields::Missing`].
pub fn extract_track_fields(item: &PlaylistTrackItem) -> TrackFields {
    let fields = item.track.as_ref().and_then(|track| {
        let artist = track.artists.as_ref()?.first()?.name.clone()?;
        Some(TrackFields::Present {
            artist,
            track_name: track.name.clone()?,
            track_id: track.id.clone().filter(|id| !id.is_empty())?,
            popularity: track.popularity?,
        })
    });

    fields.unwrap_or(TrackFields::Missing)
}

/// Builds the enriched, popularity-sorted rows of one playlist.
///
/// `index` of each row is its position in the fetched playlist; country
/// columns are left empty for the caller to fill in.
pub async fn enrich<C>(
    catalog: &C,
    playlist_name: &str,
    playlist_id: &str,
    options: &EnrichOptions,
) -> Result<Vec<TrackRow>>
where
    C: Catalog + ?Sized,
{
    let items = fetch_items(catalog, playlist_id, options.track_limit).await?;

    let mut rows: Vec<TrackRow> = items
        .iter()
        .enumerate()
        .map(|(i, item)| extract_track_fields(item).into_row(i, playlist_name, playlist_id))
        .collect();

    let features = fetch_features(catalog, &rows).await?;
    for row in rows.iter_mut() {
        if let Some(Some(f)) = features.get(&row.track_id) {
            row.apply_features(f);
        }
    }

    utils::normalize_tempos(&mut rows);
    utils::sort_by_popularity(&mut rows);

    Ok(rows)
}

/// Fetches playlist items page by page until `limit` items or the last page.
async fn fetch_items<C>(
    catalog: &C,
    playlist_id: &str,
    limit: Option<usize>,
) -> Result<Vec<PlaylistTrackItem>>
where
    C: Catalog + ?Sized,
{
    let mut items: Vec<PlaylistTrackItem> = Vec::new();
    let mut cursor: Option<String> = None;

    if limit == Some(0) {
        return Ok(items);
    }

    loop {
        let page_limit = match limit {
            Some(l) => (l - items.len()).min(TRACKS_PAGE_LIMIT),
            None => TRACKS_PAGE_LIMIT,
        };

        let page = catalog
            .playlist_tracks(playlist_id, page_limit, cursor.as_deref())
            .await?;
        let fetched = page.items.len();
        items.extend(page.items);

        if let Some(l) = limit {
            if items.len() >= l {
                items.truncate(l);
                break;
            }
        }

        match page.next {
            Some(next) if fetched > 0 => cursor = Some(next),
            _ => break,
        }
    }

    Ok(items)
}

/// Looks up audio features once per distinct, non-empty track id.
async fn fetch_features<C>(
    catalog: &C,
    rows: &[TrackRow],
) -> Result<HashMap<String, Option<AudioFeatures>>>
where
    C: Catalog + ?Sized,
{
    let mut features = HashMap::new();

    for row in rows {
        if row.track_id.is_empty() || features.contains_key(&row.track_id) {
            continue;
        }

        let found = match catalog.audio_features(&row.track_id).await {
            Ok(found) => found,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                warning!("No audio features for track {}. Err: {}", row.track_id, e);
                None
            }
        };
        features.insert(row.track_id.clone(), found);
    }

    Ok(features)
}
