//! Day-by-day assembly of one liturgical year.
//!
//! Passes run in a fixed order and only ever append to a day's list:
//!
//! 1. every day of the year starts empty;
//! 2. Class I fixed-date records;
//! 3. movable feasts, in registry order;
//! 4. positional Sundays;
//! 5. the remaining fixed-date records;
//! 6. each day is stable-sorted by precedence key;
//! 7. season and color are attached.
//!
//! Ties in step 6 keep pass order, so a solemnity from the fixed table beats
//! an equally ranked movable feast, which beats an equally ranked Sunday.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::{
  Error, Result,
  cache::FeastDates,
  date::{days_between, shift},
  event::{Candidate, Event, Origin},
  feast::{Feast, MOVABLE_FEASTS},
  ordinal::ordinal,
  season::{SeasonTable, classify},
  source::{FeastSource, Rank, fixed_key},
  year::{year_end, year_start},
};

/// The assembled calendar of one liturgical year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiturgicalYear {
  year:  i32,
  start: NaiveDate,
  end:   NaiveDate,
  days:  BTreeMap<NaiveDate, Vec<Event>>,
}

impl LiturgicalYear {
  /// Assemble liturgical year `year` from `source`.
  ///
  /// Fails if a movable feast has no metadata record or a date cannot be
  /// placed in a season.
  pub fn assemble<S: FeastSource + ?Sized>(
    year: i32,
    source: &S,
    dates: &FeastDates,
    seasons: &SeasonTable,
  ) -> Result<Self> {
    let start = year_start(year);
    let end = year_end(year);
    let mut days = Days { year, lists: BTreeMap::new() };

    // 1.
    for date in days_between(start, end) {
      days.lists.insert(date, Vec::new());
    }

    // 2.
    for date in days_between(start, end) {
      let key = fixed_key(date);
      for record in source.fixed(&key).iter().filter(|r| r.rank == Some(Rank::I)) {
        days.push(Candidate::from_record(date, record, Origin::Fixed))?;
      }
    }

    // 3.
    for spec in &MOVABLE_FEASTS {
      let record = source
        .movable(spec.name)
        .ok_or_else(|| Error::MissingMetadata(spec.name.to_owned()))?;
      for &date in dates.occurrence(spec.feast, year).dates() {
        days.push(Candidate::from_record(date, record, Origin::Movable))?;
      }
    }

    // 4.
    push_sundays(&mut days, year, start, end, dates)?;

    // 5.
    for date in days_between(start, end) {
      let key = fixed_key(date);
      for record in source.fixed(&key).iter().filter(|r| r.rank != Some(Rank::I)) {
        days.push(Candidate::from_record(date, record, Origin::Fixed))?;
      }
    }

    // 6. and 7.
    let mut assembled = BTreeMap::new();
    for (date, mut candidates) in days.lists {
      candidates.sort_by_key(Candidate::precedence_key);
      let season = classify(date, dates)?;
      let color = seasons.color(season);
      let events = candidates
        .into_iter()
        .map(|c| c.finish(season, color))
        .collect();
      assembled.insert(date, events);
    }

    tracing::debug!(year, %start, %end, "assembled liturgical year");
    Ok(Self { year, start, end, days: assembled })
  }

  pub fn year(&self) -> i32 { self.year }

  /// First Sunday of Advent.
  pub fn start(&self) -> NaiveDate { self.start }

  /// Saturday before the next First Sunday of Advent.
  pub fn end(&self) -> NaiveDate { self.end }

  /// The events of `date` ordered by precedence, or `None` outside this year.
  /// Index 0 is the observed event; the rest are outranked.
  pub fn day(&self, date: NaiveDate) -> Option<&[Event]> {
    self.days.get(&date).map(Vec::as_slice)
  }

  /// Every day of the year in date order.
  pub fn days(&self) -> impl Iterator<Item = (NaiveDate, &[Event])> {
    self.days.iter().map(|(date, events)| (*date, events.as_slice()))
  }

  /// Every event of the year, by date and then precedence.
  pub fn events(&self) -> impl Iterator<Item = &Event> { self.days.values().flatten() }
}

struct Days {
  year:  i32,
  lists: BTreeMap<NaiveDate, Vec<Candidate>>,
}

impl Days {
  fn push(&mut self, candidate: Candidate) -> Result<()> {
    let date = candidate.date;
    self
      .lists
      .get_mut(&date)
      .ok_or(Error::DateOutsideYear { date, year: self.year })?
      .push(candidate);
    Ok(())
  }

  fn sunday(&mut self, date: NaiveDate, name: String, rank: Rank) -> Result<()> {
    self.push(Candidate::sunday(date, name, rank))
  }
}

fn push_sundays(
  days: &mut Days,
  year: i32,
  start: NaiveDate,
  end: NaiveDate,
  dates: &FeastDates,
) -> Result<()> {
  // The third Sunday of Advent is Gaudete Sunday.
  for i in [1, 2, 4] {
    let date = shift(start, 7 * (i - 1));
    days.sunday(date, format!("{} Sunday of Advent", ordinal(i as u32)), Rank::I)?;
  }

  let septuagesima = dates.date(Feast::Septuagesima, year);
  let mut date = shift(dates.date(Feast::HolyFamily, year), 7);
  let mut i = 2;
  while date < septuagesima {
    days.sunday(date, format!("{} Sunday after Epiphany", ordinal(i)), Rank::II)?;
    date = shift(date, 7);
    i += 1;
  }

  let quinquagesima = dates.date(Feast::Quinquagesima, year);
  for i in 1..=3 {
    let date = shift(quinquagesima, 7 * i);
    days.sunday(date, format!("{} Sunday of Lent", ordinal(i as u32)), Rank::I)?;
  }

  days.sunday(
    shift(dates.date(Feast::CantateSunday, year), 7),
    "Fifth Sunday after Easter".to_owned(),
    Rank::I,
  )?;
  days.sunday(
    shift(dates.date(Feast::Ascension, year), 3),
    "Sunday after Ascension".to_owned(),
    Rank::I,
  )?;

  let last = shift(end, -7);
  let mut date = shift(dates.date(Feast::TrinitySunday, year), 7);
  let mut i = 2;
  while date <= last {
    days.sunday(date, format!("{} Sunday after Pentecost", ordinal(i)), Rank::II)?;
    date = shift(date, 7);
    i += 1;
  }
  days.sunday(date, "Last Sunday after Pentecost".to_owned(), Rank::II)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    date::ymd,
    season::Season,
    source::{Color, FeastRecord, MemorySource},
    test_support::sample_source,
  };

  fn assemble(year: i32, source: &MemorySource) -> LiturgicalYear {
    let seasons = SeasonTable::resolve(source).expect("seasons resolve");
    LiturgicalYear::assemble(year, source, &FeastDates::new(), &seasons)
      .expect("year assembles")
  }

  fn top(year: &LiturgicalYear, date: NaiveDate) -> &str {
    &year.day(date).expect("date in year")[0].name
  }

  #[test]
  fn every_day_has_an_entry() {
    let year = assemble(2018, &sample_source());
    assert_eq!(year.start(), ymd(2017, 12, 3));
    assert_eq!(year.end(), ymd(2018, 12, 1));
    assert_eq!(year.days().count(), 364);
    assert!(year.day(ymd(2017, 12, 2)).is_none());
    assert!(year.day(ymd(2018, 12, 2)).is_none());
  }

  #[test]
  fn positional_sundays_2018() {
    let year = assemble(2018, &sample_source());
    assert_eq!(top(&year, ymd(2017, 12, 3)), "First Sunday of Advent");
    assert_eq!(top(&year, ymd(2017, 12, 10)), "Second Sunday of Advent");
    assert_eq!(top(&year, ymd(2017, 12, 17)), "Gaudete Sunday");
    assert_eq!(top(&year, ymd(2017, 12, 24)), "Fourth Sunday of Advent");
    assert_eq!(top(&year, ymd(2018, 1, 14)), "Second Sunday after Epiphany");
    assert_eq!(top(&year, ymd(2018, 1, 21)), "Third Sunday after Epiphany");
    assert_eq!(top(&year, ymd(2018, 1, 28)), "Septuagesima");
    assert_eq!(top(&year, ymd(2018, 2, 18)), "First Sunday of Lent");
    assert_eq!(top(&year, ymd(2018, 3, 4)), "Third Sunday of Lent");
    assert_eq!(top(&year, ymd(2018, 5, 6)), "Fifth Sunday after Easter");
    assert_eq!(top(&year, ymd(2018, 5, 13)), "Sunday after Ascension");
    assert_eq!(top(&year, ymd(2018, 6, 3)), "Second Sunday after Pentecost");
    assert_eq!(top(&year, ymd(2018, 9, 2)), "Fifteenth Sunday after Pentecost");
    assert_eq!(top(&year, ymd(2018, 11, 18)), "Twenty-sixth Sunday after Pentecost");
    assert_eq!(top(&year, ymd(2018, 11, 25)), "Last Sunday after Pentecost");
  }

  #[test]
  fn solemnity_outranks_lesser_feast_appended_first() {
    let mut source = sample_source();
    // Sorted after the Sunday (pass 4) despite being appended in pass 5.
    source.insert_fixed("September 2", FeastRecord::new("St. Stephen of Hungary", Rank::III));
    // Class I fixed records are appended before everything else; a Class III
    // record at the same date in pass 5 must still follow it.
    source.insert_fixed("August 15", FeastRecord::new("St. Hyacinth", Rank::III));
    source.insert_fixed("August 15", FeastRecord::new("The Assumption", Rank::I));

    let year = assemble(2018, &source);
    let names: Vec<_> = year
      .day(ymd(2018, 8, 15))
      .expect("in year")
      .iter()
      .map(|e| e.name.as_str())
      .collect();
    assert_eq!(names, ["The Assumption", "St. Hyacinth"]);
    assert_eq!(top(&year, ymd(2018, 9, 2)), "Fifteenth Sunday after Pentecost");
  }

  #[test]
  fn equal_ranks_keep_pass_order() {
    let mut source = sample_source();
    // Fifth Sunday after Easter (pass 4) against a Class I fixed feast
    // (pass 2) on May 6, 2018.
    source.insert_fixed("May 6", FeastRecord::new("St. John before the Latin Gate", Rank::I));
    let year = assemble(2018, &source);
    let names: Vec<_> = year
      .day(ymd(2018, 5, 6))
      .expect("in year")
      .iter()
      .map(|e| e.name.as_str())
      .collect();
    assert_eq!(names, ["St. John before the Latin Gate", "Fifth Sunday after Easter"]);
  }

  #[test]
  fn additions_follow_equally_ranked_feasts() {
    let mut source = sample_source();
    source.insert_fixed("May 8", FeastRecord::new("Apparition of St. Michael", Rank::II));
    source.insert_fixed("May 9", FeastRecord::new("St. Gregory Nazianzen", Rank::III));
    let year = assemble(2018, &source);

    let may_8 = year.day(ymd(2018, 5, 8)).expect("in year");
    assert_eq!(may_8[0].name, "Apparition of St. Michael");
    assert_eq!(may_8[1].name, "Minor Rogation");

    let may_9 = year.day(ymd(2018, 5, 9)).expect("in year");
    assert_eq!(may_9[0].name, "Minor Rogation");
    assert_eq!(may_9[1].name, "St. Gregory Nazianzen");
  }

  #[test]
  fn seasons_and_colors_are_attached() {
    let year = assemble(2018, &sample_source());
    let sunday = &year.day(ymd(2018, 9, 2)).expect("in year")[0];
    assert_eq!(sunday.season, Season::TimeAfterPentecost);
    assert_eq!(sunday.color, Color::Green);

    let gaudete = &year.day(ymd(2017, 12, 17)).expect("in year")[0];
    assert_eq!(gaudete.color, Color::Rose);

    let advent = &year.day(ymd(2017, 12, 3)).expect("in year")[0];
    assert_eq!(advent.color, Color::Violet);
  }

  #[test]
  fn missing_movable_metadata_is_fatal() {
    let mut source = MemorySource::new();
    for (season, record) in sample_source_seasons() {
      source.insert_season(season, record);
    }
    let seasons = SeasonTable::resolve(&source).expect("seasons resolve");
    let err = LiturgicalYear::assemble(2018, &source, &FeastDates::new(), &seasons)
      .expect_err("no movable records");
    assert!(matches!(err, Error::MissingMetadata(name) if name == "Gaudete Sunday"));
  }

  #[test]
  fn assembly_is_deterministic() {
    let source = sample_source();
    assert_eq!(assemble(2019, &source), assemble(2019, &source));
  }

  fn sample_source_seasons() -> Vec<(Season, crate::source::SeasonRecord)> {
    let source = sample_source();
    Season::ALL
      .into_iter()
      .filter_map(|s| source.season(s).cloned().map(|r| (s, r)))
      .collect()
  }
}
