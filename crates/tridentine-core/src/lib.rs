//! Date derivation and precedence resolution for the 1962 liturgical
//! calendar.
//!
//! This crate is free of IO. Feast and season metadata arrive through the
//! [`FeastSource`] trait; `tridentine-data` provides the bundled tables and
//! `tridentine-ical` renders assembled calendars.

pub mod assemble;
pub mod cache;
pub mod calendar;
pub mod computus;
pub mod date;
pub mod error;
pub mod event;
pub mod feast;
pub mod ordinal;
pub mod season;
pub mod source;
pub mod year;

#[cfg(test)]
mod test_support;

pub use assemble::LiturgicalYear;
pub use cache::FeastDates;
pub use calendar::LiturgicalCalendar;
pub use error::{Error, Result};
pub use event::{Event, Origin};
pub use feast::{Feast, MOVABLE_FEASTS, MovableFeastSpec, Occurrence};
pub use season::{Season, SeasonTable};
pub use source::{
  Color, FeastRecord, FeastSource, Link, MemorySource, Rank, SeasonRecord,
};
pub use year::{liturgical_year_of, year_end, year_start};
