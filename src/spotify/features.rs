use crate::{error::Result, spotify::SpotifyClient, types::AudioFeatures};

pub fn audio_features_url(api_url: &str, track_id: &str) -> String {
    format!("{uri}/audio-features/{id}", uri = api_url, id = track_id)
}

/// Looks up the audio features of one track.
///
/// # Arguments
///
/// * `client` - Authenticated Spotify client
/// * `track_id` - Non-empty Spotify ID of the track
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Some(AudioFeatures))` - The features; single fields may still be
///   absent
/// - `Ok(None)` - Spotify answered `404 Not Found` or a `null` body
/// - `Err(Error)` - Any other failure, classified by
///   [`Error::severity`](crate::error::Error::severity)
///
/// # API Endpoint
///
/// Uses `/audio-features/{id}`.
///
/// # Example
///
/// ```
/// match get_audio_features(&client, "11dFghVXANMlKmJXsNCbNl").await? {
///     Some(features) => println!("tempo {:?}", features.tempo),
///     None => println!("no features"),
/// }
/// ```
pub async fn get_audio_features(
    client: &SpotifyClient,
    track_id: &str,
) -> Result<Option<AudioFeatures>> {
    let api_url = audio_features_url(client.api_url(), track_id);
    client.get_optional_json::<AudioFeatures>(&api_url).await
}
