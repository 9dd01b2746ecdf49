//! Liturgical year boundaries.
//!
//! Liturgical year `Y` runs from the First Sunday of Advent in civil year
//! `Y - 1` through the Saturday before the First Sunday of Advent in civil
//! year `Y`. Consecutive years therefore tile the calendar with no gaps.

use chrono::{Datelike, NaiveDate};

use crate::date::{christmas, shift, weekday};

/// First Sunday of Advent opening liturgical year `year`.
pub fn year_start(year: i32) -> NaiveDate {
  let xmas = christmas(year - 1);
  shift(xmas, -(weekday(xmas) + 22))
}

/// Saturday closing liturgical year `year`.
pub fn year_end(year: i32) -> NaiveDate {
  let xmas = christmas(year);
  shift(xmas, -(weekday(xmas) + 23))
}

/// The liturgical year containing `date`.
pub fn liturgical_year_of(date: NaiveDate) -> i32 {
  if date <= year_end(date.year()) {
    date.year()
  } else {
    date.year() + 1
  }
}
