//! # CLI Module
//!
//! User-facing command implementations for featcli. Each command loads what it
//! needs (credentials, country table), calls into the library and reports the
//! outcome with the crate's output macros.
//!
//! ## Commands
//!
//! - [`auth`] - Requests a client-credentials token and caches it
//! - [`dataset`] - Builds the featured playlist dataset and exports it
//! - [`convert`] - Converts a CSV file into the JSON layout
//! - [`countries`] - Lists the built-in market table
//!
//! ## Error Handling
//!
//! Commands do not return errors. Fatal problems end the process through
//! [`crate::error!`] with exit code 1; recoverable ones are reported with
//! [`crate::warning!`].

mod auth;
mod convert;
mod countries;
mod dataset;

pub use auth::auth;
pub use convert::convert;
pub use countries::countries;
pub use dataset::{DatasetOutputs, dataset};
