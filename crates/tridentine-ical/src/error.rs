//! Error types for the tridentine-ical codec.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("iCalendar missing BEGIN/END:VCALENDAR envelope")]
  MissingEnvelope,

  #[error("unterminated component: {0}")]
  UnterminatedComponent(String),

  #[error("invalid date in {property}: {value}")]
  InvalidDate { property: String, value: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
