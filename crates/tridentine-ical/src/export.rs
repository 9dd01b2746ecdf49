//! Whole-calendar export and extension of an earlier export.

use chrono::{DateTime, Utc};
use tridentine_core::{FeastSource, LiturgicalCalendar, LiturgicalYear};

use crate::{
  description::Describer,
  parse::ExistingCalendar,
  serialize::{VEvent, header, write_calendar},
  uid::IdentifierPool,
};

/// Calendar-level settings of an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
  /// `X-WR-CALNAME`.
  pub name:        String,
  /// `X-WR-CALDESC`.
  pub description: String,
  /// Write links as `<a href>` anchors. Web calendars render these; desktop
  /// clients mostly show them as text.
  pub html:        bool,
}

impl Default for ExportOptions {
  fn default() -> Self {
    Self {
      name:        "Tridentine calendar".to_owned(),
      description: "Liturgical calendar using the 1962 Roman Catholic rubrics.".to_owned(),
      html:        false,
    }
  }
}

/// One entry per event of every loaded year, in date then precedence order.
///
/// Identifiers come from `pool`; `now` is every entry's DTSTAMP.
pub fn render<S: FeastSource>(
  calendar: &LiturgicalCalendar<S>,
  html: bool,
  pool: &mut IdentifierPool,
  now: DateTime<Utc>,
) -> Vec<VEvent> {
  let describer = Describer::new(calendar.dates(), calendar.seasons(), html);
  let mut out = Vec::new();
  for year in calendar.years() {
    render_year(year, &describer, pool, now, &mut out);
  }
  out
}

fn render_year(
  year: &LiturgicalYear,
  describer: &Describer<'_>,
  pool: &mut IdentifierPool,
  now: DateTime<Utc>,
  out: &mut Vec<VEvent>,
) {
  for (date, events) in year.days() {
    for i in 0..events.len() {
      let (summary, description) = describer.entry(events, i);
      out.push(VEvent {
        uid: pool.issue(&summary, date),
        stamp: now,
        start: date,
        summary,
        description,
      });
    }
  }
}

/// The whole calendar as an iCalendar document.
pub fn export<S: FeastSource>(
  calendar: &LiturgicalCalendar<S>,
  options: &ExportOptions,
  pool: &mut IdentifierPool,
  now: DateTime<Utc>,
) -> String {
  let events = render(calendar, options.html, pool, now);
  tracing::info!(
    events = events.len(),
    reused = pool.reused(),
    minted = pool.minted(),
    "exported calendar"
  );
  write_calendar(&header(&options.name, &options.description), &[], &events)
}

/// `existing` with the liturgical years of `calendar` it lacks appended.
///
/// Existing entries are kept as they are, including their header. Years that
/// already have an entry are skipped. Links follow the existing calendar's
/// style, or `options.html` when it has none.
pub fn extend<S: FeastSource>(
  existing: &ExistingCalendar,
  calendar: &LiturgicalCalendar<S>,
  options: &ExportOptions,
  pool: &mut IdentifierPool,
  now: DateTime<Utc>,
) -> String {
  let present = existing.liturgical_years();
  let html = existing.uses_html().unwrap_or(options.html);
  let describer = Describer::new(calendar.dates(), calendar.seasons(), html);

  let mut events = Vec::new();
  for year in calendar.years() {
    if present.contains(&year.year()) {
      tracing::info!(year = year.year(), "skipping year already in calendar");
      continue;
    }
    render_year(year, &describer, pool, now, &mut events);
    tracing::info!(year = year.year(), "appending year");
  }

  let verbatim: Vec<String> = existing
    .components
    .iter()
    .cloned()
    .chain(existing.events.iter().flat_map(|e| e.lines.iter().cloned()))
    .collect();
  write_calendar(&existing.header, &verbatim, &events)
}
