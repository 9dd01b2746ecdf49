//! Error types for `tridentine-core`.

use chrono::NaiveDate;
use thiserror::Error;

use crate::season::Season;

#[derive(Debug, Error)]
pub enum Error {
  #[error("year {0} is outside the supported range 1583..=9999")]
  YearOutOfRange(i32),

  #[error("liturgical year {0} is not loaded")]
  YearNotLoaded(i32),

  #[error("no metadata record for movable feast {0:?}")]
  MissingMetadata(String),

  #[error("no metadata record for season {0}")]
  MissingSeason(Season),

  #[error("season {0} has neither a color nor a parent season")]
  SeasonColorMissing(Season),

  #[error("season color inheritance for {0} forms a cycle")]
  SeasonColorCycle(Season),

  /// A date failed every season interval test. Unreachable under correct
  /// boundary arithmetic.
  #[error("unable to determine the season of {0}")]
  SeasonUnresolved(NaiveDate),

  #[error("{date} falls outside liturgical year {year}")]
  DateOutsideYear { date: NaiveDate, year: i32 },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
