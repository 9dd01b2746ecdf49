//! Error type for `tridentine-data`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to read {}: {source}", path.display())]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// A table is not a JSON object of the expected shape. Individual
  /// malformed records are skipped rather than reported here.
  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Why a single record was skipped.
#[derive(Debug, Error)]
pub(crate) enum Rejection {
  #[error("malformed record: {0}")]
  Malformed(#[from] serde_json::Error),

  #[error("record has no name")]
  MissingName,

  #[error("liturgical record has no class")]
  MissingClass,

  #[error("{0}")]
  BadClass(String),
}
