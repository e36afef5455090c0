use std::collections::HashSet;

use crate::{
    countries::CountryTable,
    error::Result,
    spotify::Catalog,
    types::{CountryEntry, PlaylistRef},
    warning,
};

/// The featured playlists found for one country, in the order Spotify listed them.
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedCountry {
    pub country: CountryEntry,
    pub playlists: Vec<PlaylistRef>,
}

impl LocatedCountry {
    /// The tracked playlist of the country: the first one it lists.
    pub fn selected(&self) -> Option<&PlaylistRef> {
        self.playlists.first()
    }
}

/// Located countries keyed by country code, in request order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaylistLocations {
    entries: Vec<LocatedCountry>,
}

impl PlaylistLocations {
    pub fn get(&self, code: &str) -> Option<&LocatedCountry> {
        self.entries
            .iter()
            .find(|e| e.country.code.eq_ignore_ascii_case(code))
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocatedCountry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, located: LocatedCountry) {
        self.entries.push(located);
    }
}

/// Resolves each country and finds its featured playlist.
///
/// Every country is queried on its own and its pages are followed until the
/// cursor runs out. A country that returns no playlists, or whose query fails
/// with a non-fatal error, is left out with a warning and does not affect the
/// others. Fatal errors abort.
pub async fn locate<C>(
    catalog: &C,
    countries: &CountryTable,
    codes: &[String],
) -> Result<PlaylistLocations>
where
    C: Catalog + ?Sized,
{
    let mut locations = PlaylistLocations::default();
    let mut seen = HashSet::new();

    for code in codes {
        let code = code.trim().to_ascii_uppercase();
        if !seen.insert(code.clone()) {
            continue;
        }

        let (country, known) = countries.resolve(&code);
        if !known {
            warning!("Unknown country code {}, using the code as its name.", code);
        }

        let playlists = match featured_for_country(catalog, &code).await {
            Ok(playlists) => playlists,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                warning!("Skipping {}: cannot fetch featured playlists. Err: {}", code, e);
                continue;
            }
        };

        if playlists.is_empty() {
            warning!("No featured playlist found for {}: {}", code, country.name);
            continue;
        }

        locations.insert(LocatedCountry { country, playlists });
    }

    Ok(locations)
}

/// Walks every page of one country's featured playlists.
pub async fn featured_for_country<C>(catalog: &C, code: &str) -> Result<Vec<PlaylistRef>>
where
    C: Catalog + ?Sized,
{
    let mut playlists = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let page = catalog.featured_playlists(code, cursor.as_deref()).await?;

        playlists.extend(page.items.into_iter().flatten().map(|p| PlaylistRef {
            name: p.name,
            id: p.id,
            country_code: code.to_string(),
        }));

        match page.next {
            Some(next) if cursor.as_deref() != Some(next.as_str()) => cursor = Some(next),
            _ => break,
        }
    }

    Ok(playlists)
}
