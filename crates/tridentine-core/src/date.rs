//! Calendar-date helpers shared by the date-derivation modules.
//!
//! Every date in the system is a [`NaiveDate`]: an exact (year, month, day)
//! with no time component.

use chrono::{Datelike, Days, NaiveDate};

use crate::{Error, Result};

/// First year for which calendars are computed (the first full Gregorian year).
pub const FIRST_YEAR: i32 = 1583;
/// Last year for which calendars are computed.
pub const LAST_YEAR: i32 = 9999;

/// Reject years outside [`FIRST_YEAR`]`..=`[`LAST_YEAR`].
pub fn check_year(year: i32) -> Result<i32> {
  if (FIRST_YEAR..=LAST_YEAR).contains(&year) {
    Ok(year)
  } else {
    Err(Error::YearOutOfRange(year))
  }
}

/// Build a date from components that are valid in every year (i.e. never
/// February 29).
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(year, month, day)
    .expect("month/day constants are valid in every supported year")
}

/// Monday = 0 … Sunday = 6.
pub(crate) fn weekday(date: NaiveDate) -> i64 {
  i64::from(date.weekday().num_days_from_monday())
}

/// Shift `date` by a signed number of days.
pub(crate) fn shift(date: NaiveDate, days: i64) -> NaiveDate {
  let magnitude = Days::new(days.unsigned_abs());
  let shifted = if days >= 0 {
    date.checked_add_days(magnitude)
  } else {
    date.checked_sub_days(magnitude)
  };
  shifted.expect("shifts stay inside the supported years")
}

pub(crate) fn is_leap_year(year: i32) -> bool {
  NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Christmas Day of the civil year `year`.
pub(crate) fn christmas(year: i32) -> NaiveDate { ymd(year, 12, 25) }

/// Iterate every date in `start..=end`.
pub fn days_between(
  start: NaiveDate,
  end: NaiveDate,
) -> impl Iterator<Item = NaiveDate> {
  start.iter_days().take_while(move |d| *d <= end)
}
