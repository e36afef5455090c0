use std::path::PathBuf;

use tabled::Table;

use crate::{
    countries::CountryTable,
    error, export,
    pipeline::{self, EnrichOptions},
    spotify::SpotifyClient,
    success,
    types::DatasetTableRow,
    utils::{self, CountryCodes},
    warning,
};

pub const DEFAULT_CSV_PATH: &str = "featured_playlists.csv";

#[derive(Debug, Clone, Default)]
pub struct DatasetOutputs {
    pub csv: Option<PathBuf>,
    pub json: Option<PathBuf>,
    pub preview: bool,
}

impl DatasetOutputs {
    /// Falls back to a CSV in the working directory when nothing was requested.
    fn or_default(self) -> Self {
        if self.csv.is_none() && self.json.is_none() && !self.preview {
            return Self {
                csv: Some(PathBuf::from(DEFAULT_CSV_PATH)),
                ..self
            };
        }
        self
    }
}

pub async fn dataset(codes: CountryCodes, track_limit: Option<usize>, outputs: DatasetOutputs) {
    let pb = utils::spinner("Connecting to Spotify...");
    let client = SpotifyClient::from_env().await;
    pb.finish_and_clear();

    let client = match client {
        Ok(c) => c,
        Err(e) => error!("Cannot connect to Spotify. Please run featcli auth\n Error: {}", e),
    };

    let options = EnrichOptions { track_limit };
    let dataset =
        match pipeline::assemble(&client, &CountryTable::markets(), &codes.0, &options).await {
            Ok(dataset) => dataset,
            Err(e) => error!("Cannot build dataset for {}. Err: {}", codes, e),
        };

    if dataset.is_empty() {
        warning!("The dataset for {} is empty.", codes);
    }

    let outputs = outputs.or_default();

    if let Some(path) = &outputs.csv {
        match export::write_csv(&dataset, path) {
            Ok(()) => success!("Wrote {} rows to {}", dataset.len(), path.display()),
            Err(e) => error!("Cannot write {}. Err: {}", path.display(), e),
        }
    }

    if let Some(path) = &outputs.json {
        match export::write_json(&dataset, path) {
            Ok(()) => success!("Wrote {} rows to {}", dataset.len(), path.display()),
            Err(e) => error!("Cannot write {}. Err: {}", path.display(), e),
        }
    }

    if outputs.preview && !dataset.is_empty() {
        let table_rows: Vec<DatasetTableRow> =
            dataset.rows.iter().map(DatasetTableRow::from).collect();
        println!("{}", Table::new(table_rows));
    }
}
