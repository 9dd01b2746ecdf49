//! iCalendar (RFC 5545) export for the Tridentine calendar.
//!
//! Renders assembled [`tridentine_core`] calendars as all-day VEVENTs with
//! generated summaries and descriptions, reads earlier exports back, and
//! extends them with new years. Pure synchronous; no file IO.
//!
//! # Quick start
//!
//! ```no_run
//! use chrono::Utc;
//! use tridentine_core::{LiturgicalCalendar, MemorySource};
//! use tridentine_ical::{ExportOptions, IdentifierPool, export};
//!
//! let calendar = LiturgicalCalendar::with_years(MemorySource::new(), [2019]).unwrap();
//! let mut pool = IdentifierPool::new("tridentine-calendar");
//! let ics = export(&calendar, &ExportOptions::default(), &mut pool, Utc::now());
//! println!("{ics}");
//! ```

mod content;
mod description;
pub mod error;
mod export;
mod links;
mod parse;
mod serialize;
mod uid;

pub use description::{Describer, INFORMATIONAL_PREFIX, OUTRANKED_PREFIX};
pub use error::{Error, Result};
pub use export::{ExportOptions, export, extend, render};
pub use links::{href, link_text};
pub use parse::{ExistingCalendar, ExistingEvent, parse};
pub use serialize::{PRODID, VEvent};
pub use uid::IdentifierPool;
