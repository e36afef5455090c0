//! # Dataset Pipeline
//!
//! The three stages that turn a list of country codes into one dataset:
//!
//! ```text
//! country codes
//!     ↓ locate    (featured playlist per country)
//!     ↓ enrich    (tracks + audio features per playlist)
//!     ↓ assemble  (tag, concatenate, reindex)
//! Dataset
//! ```
//!
//! All stages run sequentially against any [`crate::spotify::Catalog`].

mod assemble;
mod enrich;
mod locate;

pub use assemble::assemble;
pub use enrich::{EnrichOptions, TrackFields, enrich, extract_track_fields};
pub use locate::{LocatedCountry, PlaylistLocations, featured_for_country, locate};
