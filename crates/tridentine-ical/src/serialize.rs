//! iCalendar serializer.
//!
//! Produces CRLF line endings and folds at 75 octets per RFC 5545 §3.1.

use chrono::{DateTime, NaiveDate, Utc};

use crate::content::{escape, push_line, push_text};

pub const PRODID: &str = "-//tridentine//Tridentine Calendar//EN";

/// One all-day calendar entry, ready to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VEvent {
  pub uid:         String,
  pub stamp:       DateTime<Utc>,
  pub start:       NaiveDate,
  pub summary:     String,
  pub description: String,
}

fn format_date(d: NaiveDate) -> String { d.format("%Y%m%d").to_string() }

fn format_stamp(t: DateTime<Utc>) -> String { t.format("%Y%m%dT%H%M%SZ").to_string() }

// ─── Writers ─────────────────────────────────────────────────────────────────

/// Append `event` as a folded VEVENT block.
pub(crate) fn write_event(out: &mut String, event: &VEvent) {
  out.push_str("BEGIN:VEVENT\r\n");
  push_line(out, &format!("UID:{}", event.uid));
  push_line(out, &format!("DTSTAMP:{}", format_stamp(event.stamp)));
  push_line(out, &format!("DTSTART;VALUE=DATE:{}", format_date(event.start)));
  push_text(out, "SUMMARY", &event.summary);
  push_text(out, "DESCRIPTION", &event.description);
  out.push_str("END:VEVENT\r\n");
}

/// The calendar-level properties of a fresh export.
pub(crate) fn header(name: &str, description: &str) -> Vec<String> {
  vec![
    "VERSION:2.0".to_owned(),
    format!("PRODID:{PRODID}"),
    format!("X-WR-CALNAME:{}", escape(name)),
    format!("X-WR-CALDESC:{}", escape(description)),
  ]
}

/// A whole VCALENDAR: `header` lines (unfolded content lines), then
/// `verbatim` unfolded lines, then `events`.
pub(crate) fn write_calendar(header: &[String], verbatim: &[String], events: &[VEvent]) -> String {
  let mut out = String::from("BEGIN:VCALENDAR\r\n");
  for line in header.iter().chain(verbatim) {
    push_line(&mut out, line);
  }
  for event in events {
    write_event(&mut out, event);
  }
  out.push_str("END:VCALENDAR\r\n");
  out
}

// ─── Tests ───────────────────────────────────────────────────────────────────
