use crate::{
    countries::CountryTable,
    error::Result,
    info,
    pipeline::{EnrichOptions, enrich, locate},
    spotify::Catalog,
    success,
    types::{Dataset, TrackRow},
    warning,
};

/// Builds the combined dataset for `codes`.
///
/// Countries appear in request order, each batch sorted by popularity. Every
/// row is tagged with the country that issued its playlist, and `index` runs
/// densely from zero over the whole dataset.
pub async fn assemble<C>(
    catalog: &C,
    countries: &CountryTable,
    codes: &[String],
    options: &EnrichOptions,
) -> Result<Dataset>
where
    C: Catalog + ?Sized,
{
    let locations = locate(catalog, countries, codes).await?;
    let mut rows: Vec<TrackRow> = Vec::new();

    for located in locations.iter() {
        let country = &located.country;
        let Some(playlist) = located.selected() else {
            continue;
        };

        info!("Making dataset for {}: {}", country.code, country.name);

        let batch = match enrich(catalog, &playlist.name, &playlist.id, options).await {
            Ok(batch) => batch,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                warning!(
                    "Skipping {}: cannot load playlist {}. Err: {}",
                    country.code,
                    playlist.id,
                    e
                );
                continue;
            }
        };

        rows.extend(batch.into_iter().map(|mut row| {
            row.country_code = country.code.clone();
            row.country = country.name.clone();
            row
        }));
    }

    for (i, row) in rows.iter_mut().enumerate() {
        row.index = i;
    }

    success!("Done!");
    Ok(Dataset { rows })
}
