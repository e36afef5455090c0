use std::fs;

use featcli::{
    convert::{make_json, read_records, to_json_string},
    export::{write_csv, write_json},
    types::{Dataset, TrackRow},
};
use serde_json::Value;
use tempfile::TempDir;

fn write_input(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_make_json_single_row() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "in.csv", "a,b\n1,2\n");
    let output = dir.path().join("out.json");

    let count = make_json(&input, &output).unwrap();

    assert_eq!(count, 1);
    let json = fs::read_to_string(&output).unwrap();
    assert_eq!(
        json,
        "[\n    {\n        \"a\": \"1\",\n        \"b\": \"2\"\n    }\n]\n"
    );
}

#[test]
fn test_make_json_sorts_keys_alphabetically() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "in.csv", "zeta,alpha,mid\nz,a,m\n");
    let output = dir.path().join("out.json");

    make_json(&input, &output).unwrap();

    let json = fs::read_to_string(&output).unwrap();
    let alpha = json.find("\"alpha\"").unwrap();
    let mid = json.find("\"mid\"").unwrap();
    let zeta = json.find("\"zeta\"").unwrap();
    assert!(alpha < mid && mid < zeta);
    assert!(json.ends_with("]\n"));
}

#[test]
fn test_make_json_writes_non_ascii_literally() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "in.csv", "artist,country\nBjörk,Ísland\n");
    let output = dir.path().join("out.json");

    make_json(&input, &output).unwrap();

    let json = fs::read_to_string(&output).unwrap();
    assert!(json.contains("\"Björk\""));
    assert!(json.contains("\"Ísland\""));
    assert!(!json.contains("\\u"));
}

#[test]
fn test_make_json_header_only_gives_empty_array() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "in.csv", "a,b\n");
    let output = dir.path().join("out.json");

    let count = make_json(&input, &output).unwrap();

    assert_eq!(count, 0);
    assert_eq!(fs::read_to_string(&output).unwrap(), "[]\n");
}

#[test]
fn test_read_records_short_rows_and_quoting() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "in.csv",
        "name,note,extra\n\"Doe, Jane\",\"said \"\"hi\"\"\"\nshort\n",
    );

    let records = read_records(&input).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["name"], Value::String("Doe, Jane".to_string()));
    assert_eq!(records[0]["note"], Value::String("said \"hi\"".to_string()));
    assert_eq!(records[0]["extra"], Value::Null);
    assert_eq!(records[1]["name"], Value::String("short".to_string()));
    assert_eq!(records[1]["note"], Value::Null);
}

#[test]
fn test_make_json_missing_input_is_error() {
    let dir = TempDir::new().unwrap();
    let result = make_json(dir.path().join("nope.csv"), dir.path().join("out.json"));
    assert!(result.is_err());
    assert!(!dir.path().join("out.json").exists());
}

#[test]
fn test_to_json_string_indents_nested_values() {
    let value = serde_json::json!({"b": [1, 2], "a": {"y": true, "x": null}});
    let json = to_json_string(&value).unwrap();
    assert_eq!(
        json,
        "{\n    \"a\": {\n        \"x\": null,\n        \"y\": true\n    },\n    \"b\": [\n        1,\n        2\n    ]\n}\n"
    );
}

fn sample_dataset() -> Dataset {
    Dataset {
        rows: vec![
            TrackRow {
                index: 0,
                country_code: "SE".to_string(),
                country: "Sweden".to_string(),
                playlist_id: "p1".to_string(),
                top_playlist_name: "Topplistan".to_string(),
                artist: "Robyn".to_string(),
                track_name: "Dancing On My Own".to_string(),
                track_id: "t1".to_string(),
                popularity: Some(77),
                tempo: Some(117.0),
                tempo_normalized: Some(1.0),
                ..TrackRow::default()
            },
            TrackRow {
                index: 1,
                country_code: "SE".to_string(),
                country: "Sweden".to_string(),
                playlist_id: "p1".to_string(),
                top_playlist_name: "Topplistan".to_string(),
                ..TrackRow::default()
            },
        ],
    }
}

#[test]
fn test_write_csv_has_header_and_empty_sentinels() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dataset.csv");

    write_csv(&sample_dataset(), &path).unwrap();

    let csv = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("index,country_code,country,playlist_id,top_playlist_name,artist"));
    assert!(lines[0].ends_with("instrumentalness,tempo_normalized"));
    assert!(lines[1].starts_with("0,SE,Sweden,p1,Topplistan,Robyn,Dancing On My Own,t1,77,"));
    assert_eq!(lines[2], "1,SE,Sweden,p1,Topplistan,,,,,,,,,,,,,,,,");
}

#[test]
fn test_write_csv_empty_dataset_still_writes_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.csv");

    write_csv(&Dataset::default(), &path).unwrap();

    let csv = fs::read_to_string(&path).unwrap();
    assert_eq!(csv.lines().count(), 1);
    assert!(csv.starts_with("index,"));
}

#[test]
fn test_dataset_csv_converts_to_json() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("dataset.csv");
    let json_path = dir.path().join("dataset.json");

    write_csv(&sample_dataset(), &csv_path).unwrap();
    let count = make_json(&csv_path, &json_path).unwrap();

    assert_eq!(count, 2);
    let parsed: Vec<Value> = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(parsed[0]["artist"], "Robyn");
    assert_eq!(parsed[0]["popularity"], "77");
    assert_eq!(parsed[1]["popularity"], "");
}

#[test]
fn test_write_json_keeps_types_and_nulls() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dataset.json");

    write_json(&sample_dataset(), &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.ends_with("]\n"));
    let parsed: Vec<Value> = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0]["popularity"], 77);
    assert_eq!(parsed[0]["tempo"], 117.0);
    assert_eq!(parsed[1]["popularity"], Value::Null);
}
