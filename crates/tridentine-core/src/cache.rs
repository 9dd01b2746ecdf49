//! Memoized movable-feast dates.
//!
//! [`FeastDates`] computes each `(feast, year)` pair at most once for the
//! lifetime of the cache and is safe to share between threads. Date rules may
//! look up their anchors through the same cache while being computed: the map
//! lock is only held long enough to fetch or insert the per-key cell, never
//! while a rule runs.

use std::{
  collections::HashMap,
  sync::{Arc, Mutex, OnceLock, PoisonError},
};

use chrono::NaiveDate;

use crate::feast::{Feast, Occurrence};

type Cell = Arc<OnceLock<Occurrence>>;

/// Lazily computed, never-invalidated movable-feast dates keyed by
/// `(feast, liturgical year)`.
#[derive(Debug, Default)]
pub struct FeastDates {
  cells: Mutex<HashMap<(Feast, i32), Cell>>,
}

impl FeastDates {
  pub fn new() -> Self { Self::default() }

  /// The occurrence of `feast` in `year`, computing it on first request.
  pub fn occurrence(&self, feast: Feast, year: i32) -> Occurrence {
    let cell = {
      let mut cells = self.cells.lock().unwrap_or_else(PoisonError::into_inner);
      Arc::clone(cells.entry((feast, year)).or_default())
    };
    *cell.get_or_init(|| {
      tracing::trace!(?feast, year, "computing movable feast date");
      (feast.spec().rule)(self, year)
    })
  }

  /// The (first) date of `feast` in `year`.
  pub fn date(&self, feast: Feast, year: i32) -> NaiveDate {
    self.occurrence(feast, year).first()
  }

  /// Easter Sunday of `year`.
  pub fn easter(&self, year: i32) -> NaiveDate { self.date(Feast::Easter, year) }

  /// Number of `(feast, year)` pairs that have been requested so far.
  pub fn len(&self) -> usize {
    self.cells.lock().unwrap_or_else(PoisonError::into_inner).len()
  }

  pub fn is_empty(&self) -> bool { self.len() == 0 }
}

#[cfg(test)]
mod tests {
  use std::thread;

  use super::*;
  use crate::date::ymd;

  #[test]
  fn anchors_are_cached_alongside_dependents() {
    let dates = FeastDates::new();
    assert!(dates.is_empty());
    assert_eq!(dates.date(Feast::Septuagesima, 2018), ymd(2018, 1, 28));
    // Septuagesima → Sexagesima → Quinquagesima → Ash Wednesday → Easter.
    assert_eq!(dates.len(), 5);
    assert_eq!(dates.easter(2018), ymd(2018, 4, 1));
    assert_eq!(dates.len(), 5);
  }

  #[test]
  fn years_are_independent_keys() {
    let dates = FeastDates::new();
    assert_eq!(dates.easter(2018), ymd(2018, 4, 1));
    assert_eq!(dates.easter(2019), ymd(2019, 4, 21));
    assert_eq!(dates.len(), 2);
  }

  #[test]
  fn concurrent_readers_agree() {
    let dates = Arc::new(FeastDates::new());
    let handles: Vec<_> = (0..8)
      .map(|_| {
        let dates = Arc::clone(&dates);
        thread::spawn(move || {
          (2000..2040)
            .map(|y| dates.occurrence(Feast::MinorRogation, y))
            .collect::<Vec<_>>()
        })
      })
      .collect();

    let results: Vec<_> = handles
      .into_iter()
      .map(|h| h.join().expect("worker panicked"))
      .collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
    // MinorRogation, Ascension, and Easter for each of the 40 years.
    assert_eq!(dates.len(), 120);
  }
}
