use std::path::Path;

use crate::{
    convert,
    error::Result,
    types::{Dataset, TRACK_ROW_COLUMNS},
};

/// Writes the dataset as CSV with a header row; absent values are empty cells.
pub fn write_csv(dataset: &Dataset, path: impl AsRef<Path>) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    if dataset.is_empty() {
        writer.write_record(TRACK_ROW_COLUMNS)?;
    }
    for row in &dataset.rows {
        writer.serialize(row)?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes the dataset as a JSON array of row objects, in the converter's layout.
pub fn write_json(dataset: &Dataset, path: impl AsRef<Path>) -> Result<()> {
    convert::write_json(&dataset.rows, path)
}
