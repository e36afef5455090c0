use crate::{
    error::Result,
    spotify::SpotifyClient,
    types::{FeaturedPlaylistsResponse, Paging, PlaylistTrackItem, SimplifiedPlaylist},
};

/// Largest page Spotify serves for featured playlists.
pub const FEATURED_PAGE_LIMIT: usize = 50;

/// Largest page Spotify serves for playlist items.
pub const TRACKS_PAGE_LIMIT: usize = 100;

/// Builds the first-page URL of the featured playlists of a market.
pub fn featured_playlists_url(api_url: &str, country: &str) -> String {
    format!(
        "{uri}/browse/featured-playlists?country={country}&limit={limit}",
        uri = api_url,
        country = country,
        limit = FEATURED_PAGE_LIMIT
    )
}

pub fn playlist_tracks_url(api_url: &str, playlist_id: &str, limit: usize) -> String {
    format!(
        "{uri}/playlists/{id}/tracks?limit={limit}",
        uri = api_url,
        id = playlist_id,
        limit = limit.clamp(1, TRACKS_PAGE_LIMIT)
    )
}

/// Fetches one page of featured playlists for a market.
///
/// # Arguments
///
/// * `client` - Authenticated Spotify client
/// * `country` - Two-letter market code, e.g. `SE`
/// * `cursor` - The `next` URL of the previous page, or `None` for the first
///   page
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Paging<Option<SimplifiedPlaylist>>)` - One page of playlists. Spotify
///   may send `null` entries, which are kept as `None`
/// - `Err(Error)` - Network error, non-success status or undecodable body
///
/// # API Endpoint
///
/// Uses `/browse/featured-playlists` with:
/// - `country` - The requested market
/// - `limit` - [`FEATURED_PAGE_LIMIT`]
///
/// A cursor is used as-is and already carries both parameters.
///
/// # Error Handling
///
/// Spotify answers `404 Not Found` here for applications without access to
/// the endpoint. That status is a permanent error, so the caller skips the
/// country instead of aborting.
///
/// # Example
///
/// ```
/// let page = get_featured_playlists(&client, "SE", None).await?;
/// if let Some(next) = page.next.as_deref() {
///     let more = get_featured_playlists(&client, "SE", Some(next)).await?;
/// }
/// ```
pub async fn get_featured_playlists(
    client: &SpotifyClient,
    country: &str,
    cursor: Option<&str>,
) -> Result<Paging<Option<SimplifiedPlaylist>>> {
    let api_url = match cursor {
        Some(next) => next.to_string(),
        None => featured_playlists_url(client.api_url(), country),
    };

    let res = client
        .get_json::<FeaturedPlaylistsResponse>(&api_url)
        .await?;
    Ok(res.playlists)
}

/// Fetches one page of playlist items.
///
/// # Arguments
///
/// * `client` - Authenticated Spotify client
/// * `playlist_id` - Spotify ID of the playlist
/// * `limit` - Page size, clamped to `1..=`[`TRACKS_PAGE_LIMIT`]
/// * `cursor` - The `next` URL of the previous page, or `None` for the first
///   page
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Paging<PlaylistTrackItem>)` - One page of items; an item's `track`
///   is `None` for local or removed tracks
/// - `Err(Error)` - Network error, non-success status or undecodable body
///
/// # API Endpoint
///
/// Uses `/playlists/{id}/tracks` with `limit`. `limit` is ignored when
/// following a cursor, since the cursor URL carries its own.
///
/// # Example
///
/// ```
/// let page = get_playlist_tracks(&client, "37i9dQZF1DXcBWIGoYBM5M", 10, None).await?;
/// println!("{} of {} items", page.items.len(), page.total.unwrap_or_default());
/// ```
pub async fn get_playlist_tracks(
    client: &SpotifyClient,
    playlist_id: &str,
    limit: usize,
    cursor: Option<&str>,
) -> Result<Paging<PlaylistTrackItem>> {
    let api_url = match cursor {
        Some(next) => next.to_string(),
        None => playlist_tracks_url(client.api_url(), playlist_id, limit),
    };

    client.get_json::<Paging<PlaylistTrackItem>>(&api_url).await
}
