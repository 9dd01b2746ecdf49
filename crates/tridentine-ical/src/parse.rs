//! iCalendar reader for previously exported calendars.
//!
//! Pipeline:
//!   raw &str
//!     └─ unfold()                → Vec<String>
//!          └─ split components    → header / other components / VEVENTs
//!               └─ split()        → UID, SUMMARY, DTSTART, DESCRIPTION
//!
//! Every line is kept as read so that a rewritten calendar reproduces the
//! existing entries unchanged.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use tridentine_core::liturgical_year_of;

use crate::{
  content::{split, unescape, unfold},
  error::{Error, Result},
};

/// A VEVENT read from an existing calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistingEvent {
  pub uid:         Option<String>,
  pub summary:     Option<String>,
  pub start:       Option<NaiveDate>,
  pub description: Option<String>,
  /// Unfolded content lines, `BEGIN:VEVENT` through `END:VEVENT`.
  pub(crate) lines: Vec<String>,
}

/// A parsed VCALENDAR.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExistingCalendar {
  /// Calendar-level content lines.
  pub(crate) header:     Vec<String>,
  /// Lines of sub-components other than VEVENT (VTIMEZONE, …).
  pub(crate) components: Vec<String>,
  pub(crate) events:     Vec<ExistingEvent>,
}

impl ExistingCalendar {
  pub fn events(&self) -> &[ExistingEvent] { &self.events }

  /// The unescaped value of the first calendar-level property `name`.
  pub fn property(&self, name: &str) -> Option<String> {
    self.header.iter().find_map(|line| {
      let (n, value) = split(line)?;
      n.eq_ignore_ascii_case(name).then(|| unescape(value))
    })
  }

  /// Liturgical years with at least one entry.
  pub fn liturgical_years(&self) -> BTreeSet<i32> {
    self.events.iter().filter_map(|e| e.start).map(liturgical_year_of).collect()
  }

  /// Whether links are written as HTML anchors, judged by the first entry
  /// whose description contains a URL. `None` when no entry has one.
  pub fn uses_html(&self) -> Option<bool> {
    self
      .events
      .iter()
      .filter_map(|e| e.description.as_deref())
      .find(|d| d.contains("://"))
      .map(|d| d.contains("<a href="))
  }
}

// ─── Low-level helpers ───────────────────────────────────────────────────────

/// `DATE` or the date part of a `DATE-TIME` value.
fn parse_date(property: &str, value: &str) -> Result<NaiveDate> {
  value
    .get(..8)
    .and_then(|d| NaiveDate::parse_from_str(d, "%Y%m%d").ok())
    .ok_or_else(|| Error::InvalidDate {
      property: property.to_owned(),
      value:    value.to_owned(),
    })
}

fn is_begin(line: &str) -> Option<&str> {
  let (name, value) = split(line)?;
  name.eq_ignore_ascii_case("BEGIN").then_some(value)
}

fn is_end(line: &str, component: &str) -> bool {
  split(line).is_some_and(|(name, value)| {
    name.eq_ignore_ascii_case("END") && value.eq_ignore_ascii_case(component)
  })
}

// ─── Core parser ─────────────────────────────────────────────────────────────

/// Parse the first VCALENDAR in `input`.
pub fn parse(input: &str) -> Result<ExistingCalendar> {
  let lines = unfold(input);

  let start = lines
    .iter()
    .position(|l| is_begin(l).is_some_and(|c| c.eq_ignore_ascii_case("VCALENDAR")))
    .ok_or(Error::MissingEnvelope)?;
  let end = lines
    .iter()
    .rposition(|l| is_end(l, "VCALENDAR"))
    .ok_or(Error::MissingEnvelope)?;
  if end <= start {
    return Err(Error::MissingEnvelope);
  }

  let mut calendar = ExistingCalendar::default();
  let body = &lines[start + 1..end];
  let mut i = 0;
  while i < body.len() {
    let Some(component) = is_begin(&body[i]) else {
      calendar.header.push(body[i].clone());
      i += 1;
      continue;
    };
    let len = body[i + 1..]
      .iter()
      .position(|l| is_end(l, component))
      .ok_or_else(|| Error::UnterminatedComponent(component.to_owned()))?;
    let block = &body[i..=i + 1 + len];
    if component.eq_ignore_ascii_case("VEVENT") {
      calendar.events.push(event(block)?);
    } else {
      calendar.components.extend(block.iter().cloned());
    }
    i += len + 2;
  }

  tracing::debug!(
    events = calendar.events.len(),
    components = calendar.components.len(),
    "parsed existing calendar"
  );
  Ok(calendar)
}

fn event(block: &[String]) -> Result<ExistingEvent> {
  let mut event = ExistingEvent {
    uid:         None,
    summary:     None,
    start:       None,
    description: None,
    lines:       block.to_vec(),
  };
  // Nested components (VALARM) carry their own properties; skip them.
  let mut depth = 0usize;
  for line in &block[1..block.len() - 1] {
    if is_begin(line).is_some() {
      depth += 1;
      continue;
    }
    let Some((name, value)) = split(line) else { continue };
    if name.eq_ignore_ascii_case("END") {
      depth = depth.saturating_sub(1);
      continue;
    }
    if depth > 0 {
      continue;
    }
    match name.to_ascii_uppercase().as_str() {
      "UID" => event.uid = Some(value.trim().to_owned()),
      "SUMMARY" => event.summary = Some(unescape(value)),
      "DESCRIPTION" => event.description = Some(unescape(value)),
      "DTSTART" => event.start = Some(parse_date("DTSTART", value)?),
      _ => {}
    }
  }
  Ok(event)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
