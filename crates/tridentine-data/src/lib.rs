//! Feast and season metadata for the 1962 General Roman Calendar.
//!
//! The tables are JSON, compiled into the crate and optionally replaced at
//! runtime by a directory of the same files. Loading validates every record
//! once against an explicit schema; malformed records are logged and skipped.

mod schema;
mod source;

pub mod error;

pub use error::{Error, Result};
pub use source::{FIXED_FILE, JsonSource, MOVABLE_FILE, SEASONS_FILE, bundled_dir};
