//! CSV to JSON conversion.
//!
//! A delimited file with a header row becomes a JSON array of objects. Keys are
//! sorted per object, output is indented with four spaces, non-ASCII text is
//! written as-is and the file ends with a newline.

use std::{collections::BTreeMap, fs, path::Path};

use serde::Serialize;
use serde_json::{Serializer, Value, ser::PrettyFormatter};

use crate::error::Result;

pub type Record = BTreeMap<String, Value>;

/// Reads every data row of a CSV file into a header-keyed record.
///
/// Values stay strings as read. A row shorter than the header gets `null` for
/// the missing columns, cells beyond the header are dropped and a repeated
/// header name keeps the value of its last column.
pub fn read_records(input: impl AsRef<Path>) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(input)?;

    let headers = reader.headers()?.clone();
    let mut records = Vec::new();

    for result in reader.records() {
        let row = result?;
        let mut record = Record::new();
        for (i, field) in headers.iter().enumerate() {
            let value = match row.get(i) {
                Some(v) => Value::String(v.to_string()),
                None => Value::Null,
            };
            record.insert(field.to_string(), value);
        }
        records.push(record);
    }

    Ok(records)
}

/// Converts `input` (CSV) into `output` (JSON) and returns the number of records.
pub fn make_json(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<usize> {
    let records = read_records(input)?;
    write_json(&records, output)?;
    Ok(records.len())
}

/// Writes any serializable value in the converter's JSON layout.
pub fn write_json<T: Serialize + ?Sized>(value: &T, output: impl AsRef<Path>) -> Result<()> {
    let json = to_json_string(value)?;
    fs::write(output, json)?;
    Ok(())
}

/// Renders `value` with sorted object keys, four-space indent and a trailing newline.
pub fn to_json_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    // going through Value sorts the keys of every object
    let value = serde_json::to_value(value)?;

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    buf.push(b'\n');

    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
