//! Gregorian computus: the date of Easter for a given year.
//!
//! [`computus`] is the raw, uncached computation. Callers that query the same
//! year repeatedly go through [`FeastDates::easter`](crate::cache::FeastDates::easter),
//! which memoizes it per year.

use chrono::NaiveDate;

use crate::date::ymd;

/// The date of Easter Sunday in `year` (anonymous Gregorian algorithm,
/// Meeus/Jones/Butcher).
pub fn computus(year: i32) -> NaiveDate {
  let a = year % 19;
  let b = year / 100;
  let c = year % 100;
  let d = b / 4;
  let e = b % 4;
  let f = (b + 8) / 25;
  let g = (b - f + 1) / 3;
  let h = (19 * a + b - d - g + 15) % 30;
  let i = c / 4;
  let k = c % 4;
  let l = (32 + 2 * e + 2 * i - h - k) % 7;
  let m = (a + 11 * h + 22 * l) / 451;
  let month = (h + l - 7 * m + 114) / 31;
  let day = (h + l - 7 * m + 114) % 31 + 1;

  // month is 3 or 4 and day is 1..=31 with March 22 ..= April 25 as the
  // only reachable combinations.
  ymd(year, month as u32, day as u32)
}

#[cfg(test)]
mod tests {
  use chrono::Datelike as _;
  use proptest::prelude::*;

  use super::*;

  #[test]
  fn known_easter_dates() {
    assert_eq!(computus(2004), ymd(2004, 4, 11));
    assert_eq!(computus(2018), ymd(2018, 4, 1));
    assert_eq!(computus(2019), ymd(2019, 4, 21));
    assert_eq!(computus(2027), ymd(2027, 3, 28));
    assert_eq!(computus(2050), ymd(2050, 4, 10));
  }

  #[test]
  fn extreme_dates_occur() {
    // 1818 and 2285 have the earliest possible Easter, 1943 and 2038 the latest.
    assert_eq!(computus(1818), ymd(1818, 3, 22));
    assert_eq!(computus(2285), ymd(2285, 3, 22));
    assert_eq!(computus(1943), ymd(1943, 4, 25));
    assert_eq!(computus(2038), ymd(2038, 4, 25));
  }

  proptest! {
    #[test]
    fn easter_falls_between_march_22_and_april_25(year in 1583i32..=9999) {
      let easter = computus(year);
      prop_assert!(easter >= ymd(year, 3, 22));
      prop_assert!(easter <= ymd(year, 4, 25));
      prop_assert_eq!(easter.weekday(), chrono::Weekday::Sun);
    }
  }
}
