//! Stable identifiers across re-exports.

use std::collections::HashMap;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::parse::ExistingCalendar;

/// UIDs issued by an earlier export, keyed by (SUMMARY, DTSTART).
///
/// Issuing an identifier for a pair the pool knows hands back the earlier UID
/// (once); any other pair gets a fresh `<uuid>@<domain>`.
#[derive(Debug, Clone)]
pub struct IdentifierPool {
  domain: String,
  known:  HashMap<(String, NaiveDate), String>,
  reused: usize,
  minted: usize,
}

impl IdentifierPool {
  /// An empty pool minting identifiers under `domain`.
  pub fn new(domain: impl Into<String>) -> Self {
    Self { domain: domain.into(), known: HashMap::new(), reused: 0, minted: 0 }
  }

  /// A pool seeded with every identified entry of `calendar`. When two
  /// entries share a key the first one wins.
  pub fn from_calendar(calendar: &ExistingCalendar, domain: impl Into<String>) -> Self {
    let mut pool = Self::new(domain);
    for event in calendar.events() {
      if let (Some(uid), Some(summary), Some(start)) = (&event.uid, &event.summary, event.start) {
        pool.known.entry((summary.clone(), start)).or_insert_with(|| uid.clone());
      }
    }
    tracing::debug!(known = pool.known.len(), "seeded identifier pool");
    pool
  }

  /// The identifier for the entry `summary` on `start`.
  pub fn issue(&mut self, summary: &str, start: NaiveDate) -> String {
    match self.known.remove(&(summary.to_owned(), start)) {
      Some(uid) => {
        self.reused += 1;
        uid
      }
      None => {
        self.minted += 1;
        format!("{}@{}", Uuid::new_v4(), self.domain)
      }
    }
  }

  /// Pooled identifiers not yet issued.
  pub fn len(&self) -> usize { self.known.len() }

  pub fn is_empty(&self) -> bool { self.known.is_empty() }

  pub fn reused(&self) -> usize { self.reused }

  pub fn minted(&self) -> usize { self.minted }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::parse::parse;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
  }

  const PRIOR: &str = "BEGIN:VCALENDAR\r\n\
    BEGIN:VEVENT\r\nUID:christmas@old\r\nDTSTART;VALUE=DATE:20181225\r\nSUMMARY:Christmas\r\nEND:VEVENT\r\n\
    BEGIN:VEVENT\r\nUID:duplicate@old\r\nDTSTART;VALUE=DATE:20181225\r\nSUMMARY:Christmas\r\nEND:VEVENT\r\n\
    BEGIN:VEVENT\r\nDTSTART;VALUE=DATE:20181226\r\nSUMMARY:St. Stephen\r\nEND:VEVENT\r\n\
    END:VCALENDAR\r\n";

  #[test]
  fn known_pairs_keep_their_identifier() {
    let mut pool = IdentifierPool::from_calendar(&parse(PRIOR).expect("valid"), "tridentine");
    assert_eq!(pool.len(), 1);
    assert_eq!(pool.issue("Christmas", date(2018, 12, 25)), "christmas@old");
    assert_eq!(pool.reused(), 1);
    assert!(pool.is_empty());
  }

  #[test]
  fn new_pairs_get_fresh_identifiers() {
    let mut pool = IdentifierPool::from_calendar(&parse(PRIOR).expect("valid"), "tridentine");
    // Same summary on another date, and an entry that had no UID.
    let a = pool.issue("Christmas", date(2019, 12, 25));
    let b = pool.issue("St. Stephen", date(2018, 12, 26));
    assert_ne!(a, b);
    for uid in [&a, &b] {
      let (id, domain) = uid.split_once('@').expect("uid has a domain");
      assert_eq!(domain, "tridentine");
      assert!(Uuid::parse_str(id).is_ok());
    }
    assert_eq!(pool.minted(), 2);
    assert_eq!(pool.len(), 1);
  }

  #[test]
  fn identifiers_are_issued_once() {
    let mut pool = IdentifierPool::from_calendar(&parse(PRIOR).expect("valid"), "tridentine");
    let first = pool.issue("Christmas", date(2018, 12, 25));
    let second = pool.issue("Christmas", date(2018, 12, 25));
    assert_eq!(first, "christmas@old");
    assert_ne!(second, first);
  }
}
