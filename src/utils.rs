use std::{cmp::Ordering, collections::HashSet, fmt, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::types::TrackRow;

/// Rounds to `decimals` places, ties to even (`0.125` becomes `0.12`).
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// Min-max scales one batch's tempos into `tempo_normalized`, rounded to 2 places.
///
/// Only rows with a tempo take part in min/max and receive a value. When every
/// present tempo is equal (a single track included) the result is `0.0`.
pub fn normalize_tempos(rows: &mut [TrackRow]) {
    let tempos: Vec<f64> = rows
        .iter()
        .filter_map(|r| r.tempo)
        .filter(|t| t.is_finite())
        .collect();

    if tempos.is_empty() {
        for row in rows.iter_mut() {
            row.tempo_normalized = None;
        }
        return;
    }

    let min = tempos.iter().copied().fold(f64::INFINITY, f64::min);
    let max = tempos.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    for row in rows.iter_mut() {
        row.tempo_normalized = match row.tempo {
            Some(t) if t.is_finite() => {
                if span > 0.0 {
                    Some(round_to((t - min) / span, 2))
                } else {
                    Some(0.0)
                }
            }
            _ => None,
        };
    }
}

/// Stable sort by popularity, highest first. Rows without popularity go last.
pub fn sort_by_popularity(rows: &mut [TrackRow]) {
    rows.sort_by(|a, b| match (a.popularity, b.popularity) {
        (Some(pa), Some(pb)) => pb.cmp(&pa),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// Market codes as passed on the command line, deduplicated, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryCodes(pub Vec<String>);

impl CountryCodes {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CountryCodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(","))
    }
}

/// Parses a comma separated list of two-letter market codes, e.g. `us, GB,de`.
pub fn parse_country_codes(s: &str) -> Result<CountryCodes, String> {
    if s.trim().is_empty() {
        return Err("country list cannot be empty".to_string());
    }

    let mut seen = HashSet::new();
    let mut codes = Vec::new();

    for raw in s.split(',') {
        let code = raw.trim();
        if code.is_empty() {
            return Err(format!("empty segment in country list '{}'", s));
        }
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(format!(
                "invalid value '{}': expected a two-letter country code",
                code
            ));
        }

        let code = code.to_ascii_uppercase();
        if seen.insert(code.clone()) {
            codes.push(code);
        }
    }

    Ok(CountryCodes(codes))
}

pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
