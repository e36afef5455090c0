//! Featured Playlist Dataset CLI Library
//!
//! This library builds per-country datasets of Spotify featured playlists. For
//! each requested market it locates the featured playlist, enriches its tracks
//! with audio features, and combines everything into one table that can be
//! exported to CSV or JSON.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `convert` - CSV to JSON conversion
//! - `countries` - Static market code to country name table
//! - `error` - Error type and severity classification
//! - `export` - Dataset CSV/JSON writers
//! - `management` - Token caching
//! - `pipeline` - Locate, enrich and assemble stages
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use featcli::{config, countries::CountryTable, pipeline, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> featcli::error::Result<()> {
//!     config::load_env().await?;
//!     let client = SpotifyClient::from_env().await?;
//!     let codes = vec!["US".to_string(), "GB".to_string()];
//!     let dataset = pipeline::assemble(
//!         &client,
//!         &CountryTable::markets(),
//!         &codes,
//!         &pipeline::EnrichOptions::default(),
//!     )
//!     .await?;
//!     println!("{} rows", dataset.len());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod convert;
pub mod countries;
pub mod error;
pub mod export;
pub mod management;
pub mod pipeline;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints a progress line prefixed with a blue `[o]`.
///
/// # Arguments
///
/// Takes the same arguments as `println!`: a format string followed by its
/// values.
///
/// # Output
///
/// Writes to stdout as `[o] <message>`, with the marker in bold blue.
///
/// # Example
///
/// ```
/// info!("Making dataset for {}: {}", code, name);
/// // [o] Making dataset for SE: Sweden
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a completion line prefixed with a green `[✓]`.
///
/// ```
/// success!("Wrote {} rows to {}", count, path.display());
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red `[!]` line and exits the process with status 1.
///
/// # Arguments
///
/// Takes the same arguments as `println!`.
///
/// # Output
///
/// Writes to stderr as `[!] <message>`, with the marker in bold red.
///
/// # Process Exit
///
/// Never returns. Only the CLI layer uses this; library code returns
/// [`error::Error`] instead.
///
/// # Example
///
/// ```
/// error!("Cannot load environment. Err: {}", e);
/// // unreachable from here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a yellow `[!]` line for problems the run recovers from, such as a
/// country that is skipped.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
