//! Multi-year composition.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::{
  Error, Result,
  assemble::LiturgicalYear,
  cache::FeastDates,
  date::check_year,
  event::Event,
  season::SeasonTable,
  source::FeastSource,
  year::liturgical_year_of,
};

/// A calendar spanning any number of liturgical years assembled from one
/// metadata source.
///
/// Years share the feast-date cache and the resolved season table. Date
/// lookups are routed to the liturgical year containing the date.
#[derive(Debug)]
pub struct LiturgicalCalendar<S> {
  source:  S,
  dates:   FeastDates,
  seasons: SeasonTable,
  years:   BTreeMap<i32, LiturgicalYear>,
}

impl<S: FeastSource> LiturgicalCalendar<S> {
  /// An empty calendar. Fails if the season metadata is incomplete.
  pub fn new(source: S) -> Result<Self> {
    let seasons = SeasonTable::resolve(&source)?;
    Ok(Self { source, dates: FeastDates::new(), seasons, years: BTreeMap::new() })
  }

  /// A calendar with each of `years` assembled.
  pub fn with_years(source: S, years: impl IntoIterator<Item = i32>) -> Result<Self> {
    let mut calendar = Self::new(source)?;
    for year in years {
      calendar.add_year(year)?;
    }
    Ok(calendar)
  }

  /// Assemble liturgical year `year` unless it is already loaded.
  ///
  /// On failure the calendar is left exactly as it was.
  pub fn add_year(&mut self, year: i32) -> Result<&LiturgicalYear> {
    let year = check_year(year)?;
    if !self.years.contains_key(&year) {
      let assembled =
        LiturgicalYear::assemble(year, &self.source, &self.dates, &self.seasons)?;
      self.years.insert(year, assembled);
    }
    self.years.get(&year).ok_or(Error::YearNotLoaded(year))
  }

  /// The events of `date`, ordered by precedence.
  pub fn day(&self, date: NaiveDate) -> Result<&[Event]> {
    let year = liturgical_year_of(date);
    self
      .years
      .get(&year)
      .and_then(|y| y.day(date))
      .ok_or(Error::YearNotLoaded(year))
  }

  pub fn year(&self, year: i32) -> Option<&LiturgicalYear> { self.years.get(&year) }

  /// Loaded years in ascending order.
  pub fn years(&self) -> impl Iterator<Item = &LiturgicalYear> { self.years.values() }

  pub fn contains_year(&self, year: i32) -> bool { self.years.contains_key(&year) }

  pub fn source(&self) -> &S { &self.source }

  pub fn dates(&self) -> &FeastDates { &self.dates }

  pub fn seasons(&self) -> &SeasonTable { &self.seasons }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{date::ymd, source::MemorySource, test_support::sample_source};

  #[test]
  fn routes_dates_to_their_liturgical_year() {
    let calendar =
      LiturgicalCalendar::with_years(sample_source(), [2018, 2019]).expect("assembles");
    // The last day of 2018 is an ordinary Saturday with nothing registered.
    assert!(calendar.day(ymd(2018, 12, 1)).expect("loaded").is_empty());
    assert_eq!(
      calendar.day(ymd(2018, 12, 2)).expect("loaded")[0].name,
      "First Sunday of Advent"
    );
    assert_eq!(calendar.years().map(LiturgicalYear::year).collect::<Vec<_>>(), [
      2018, 2019
    ]);
  }

  #[test]
  fn unloaded_years_are_reported() {
    let calendar = LiturgicalCalendar::with_years(sample_source(), [2018]).expect("assembles");
    // December 2, 2018 opens liturgical year 2019.
    assert!(matches!(
      calendar.day(ymd(2018, 12, 2)),
      Err(Error::YearNotLoaded(2019))
    ));
  }

  #[test]
  fn failed_years_leave_the_calendar_untouched() {
    let mut calendar = LiturgicalCalendar::with_years(sample_source(), [2018]).expect("assembles");
    assert!(matches!(calendar.add_year(1200), Err(Error::YearOutOfRange(1200))));
    assert!(calendar.contains_year(2018));
    assert_eq!(calendar.years().count(), 1);
  }

  #[test]
  fn missing_metadata_fails_the_year_only() {
    let mut source = MemorySource::new();
    let sample = sample_source();
    for season in crate::season::Season::ALL {
      if let Some(record) = sample.season(season) {
        source.insert_season(season, record.clone());
      }
    }
    let mut calendar = LiturgicalCalendar::new(source).expect("seasons complete");
    assert!(matches!(calendar.add_year(2018), Err(Error::MissingMetadata(_))));
    assert!(!calendar.contains_year(2018));
  }

  #[test]
  fn adding_a_loaded_year_is_a_no_op() {
    let mut calendar = LiturgicalCalendar::with_years(sample_source(), [2018]).expect("assembles");
    let cached = calendar.dates().len();
    calendar.add_year(2018).expect("already loaded");
    assert_eq!(calendar.dates().len(), cached);
  }
}
