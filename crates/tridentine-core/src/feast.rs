//! The movable feasts of the liturgical calendar.
//!
//! Each movable feast is one row of [`MOVABLE_FEASTS`]: an identifier, the
//! name that links it to its metadata record, and a pure date rule. Rules
//! resolve their anchors (Easter, Ash Wednesday, Pentecost, …) through the
//! [`FeastDates`] cache, so dependencies form a DAG rooted at Easter and
//! Christmas. Adding a movable feast means adding a variant and a row.
//!
//! Row order is significant: it is the order in which movable feasts are
//! appended to each day during assembly, and therefore the tie-break between
//! equally ranked movable feasts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
  cache::FeastDates,
  computus::computus,
  date::{christmas, is_leap_year, shift, weekday, ymd},
};

// ─── Occurrence ──────────────────────────────────────────────────────────────

/// The date(s) a movable feast falls on in a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "dates", rename_all = "snake_case")]
pub enum Occurrence {
  Single(NaiveDate),
  /// A three-day observance (Embertide, Minor Rogation), ascending.
  Triple([NaiveDate; 3]),
}

impl Occurrence {
  pub fn dates(&self) -> &[NaiveDate] {
    match self {
      Self::Single(d) => std::slice::from_ref(d),
      Self::Triple(ds) => ds,
    }
  }

  /// The earliest date of the occurrence.
  pub fn first(&self) -> NaiveDate {
    match self {
      Self::Single(d) => *d,
      Self::Triple(ds) => ds[0],
    }
  }

  fn triple(anchor: NaiveDate, offsets: [i64; 3]) -> Self {
    let mut ds = offsets.map(|o| shift(anchor, o));
    ds.sort();
    Self::Triple(ds)
  }
}

// ─── Identifiers ─────────────────────────────────────────────────────────────

/// Identifier of a movable feast. Discriminants index [`MOVABLE_FEASTS`].
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Feast {
  GaudeteSunday,
  AdventEmbertide,
  SundayWithinTheOctaveOfChristmas,
  HolyName,
  HolyFamily,
  PloughMonday,
  Septuagesima,
  Sexagesima,
  Quinquagesima,
  FatThursday,
  ShroveMonday,
  MardiGras,
  AshWednesday,
  LentenEmbertide,
  StMatthias,
  StGabrielOfOurLadyOfSorrows,
  LadyDay,
  LaetareSunday,
  PassionSunday,
  SevenSorrows,
  PalmSunday,
  MondayOfHolyWeek,
  TuesdayOfHolyWeek,
  SpyWednesday,
  MaundyThursday,
  GoodFriday,
  HolySaturday,
  Easter,
  EasterMonday,
  EasterTuesday,
  EasterWednesday,
  EasterThursday,
  EasterFriday,
  EasterSaturday,
  QuasimodoSunday,
  JubilateSunday,
  MisericordiaSunday,
  CantateSunday,
  MajorRogation,
  Ascension,
  MinorRogation,
  Pentecost,
  PentecostMonday,
  PentecostTuesday,
  ThursdayInPentecostWeek,
  WhitEmbertide,
  TrinitySunday,
  CorpusChristi,
  SacredHeart,
  PetersPence,
  MichaelmasEmbertide,
  ChristTheKing,
}

impl Feast {
  /// The registry row for this feast.
  pub fn spec(self) -> &'static MovableFeastSpec {
    &MOVABLE_FEASTS[self as usize]
  }

  /// The name linking this feast to its metadata record.
  pub fn name(self) -> &'static str { self.spec().name }
}

// ─── Registry ────────────────────────────────────────────────────────────────

/// A date rule: pure in `year`, with anchors looked up through the cache.
pub type DateRule = fn(&FeastDates, i32) -> Occurrence;

/// One row of the movable-feast registry.
#[derive(Debug)]
pub struct MovableFeastSpec {
  pub feast: Feast,
  pub name:  &'static str,
  pub rule:  DateRule,
}

macro_rules! row {
  ($feast:ident, $name:literal, $rule:expr) => {
    MovableFeastSpec { feast: Feast::$feast, name: $name, rule: $rule }
  };
}

/// Every movable feast, in assembly order.
pub static MOVABLE_FEASTS: [MovableFeastSpec; 52] = [
  row!(GaudeteSunday, "Gaudete Sunday", gaudete_sunday),
  row!(AdventEmbertide, "Advent Embertide", |d, y| {
    Occurrence::triple(d.date(Feast::GaudeteSunday, y), [3, 5, 6])
  }),
  row!(
    SundayWithinTheOctaveOfChristmas,
    "Sunday within the Octave of Christmas",
    sunday_within_the_octave_of_christmas
  ),
  row!(HolyName, "The Holy Name", holy_name),
  row!(HolyFamily, "The Holy Family", holy_family),
  row!(PloughMonday, "Plough Monday", plough_monday),
  row!(Septuagesima, "Septuagesima", |d, y| after(d, Feast::Sexagesima, y, -7)),
  row!(Sexagesima, "Sexagesima", |d, y| after(d, Feast::Quinquagesima, y, -7)),
  row!(Quinquagesima, "Quinquagesima", |d, y| {
    after(d, Feast::AshWednesday, y, -3)
  }),
  row!(FatThursday, "Fat Thursday", |d, y| after(d, Feast::AshWednesday, y, -6)),
  row!(ShroveMonday, "Shrove Monday", |d, y| {
    after(d, Feast::AshWednesday, y, -2)
  }),
  row!(MardiGras, "Mardi Gras", |d, y| after(d, Feast::AshWednesday, y, -1)),
  row!(AshWednesday, "Ash Wednesday", |d, y| after(d, Feast::Easter, y, -46)),
  row!(LentenEmbertide, "Lenten Embertide", |d, y| {
    Occurrence::triple(d.date(Feast::AshWednesday, y), [7, 9, 10])
  }),
  row!(StMatthias, "St. Matthias", |_, y| leap_shifted(y, 24)),
  row!(
    StGabrielOfOurLadyOfSorrows,
    "St. Gabriel of Our Lady of Sorrows",
    |_, y| leap_shifted(y, 27)
  ),
  row!(LadyDay, "Lady Day", lady_day),
  row!(LaetareSunday, "Laetare Sunday", |d, y| after(d, Feast::Easter, y, -21)),
  row!(PassionSunday, "Passion Sunday", |d, y| after(d, Feast::Easter, y, -14)),
  row!(SevenSorrows, "The Seven Sorrows", |d, y| {
    after(d, Feast::PalmSunday, y, -2)
  }),
  row!(PalmSunday, "Palm Sunday", |d, y| after(d, Feast::Easter, y, -7)),
  row!(MondayOfHolyWeek, "Monday of Holy Week", |d, y| {
    after(d, Feast::PalmSunday, y, 1)
  }),
  row!(TuesdayOfHolyWeek, "Tuesday of Holy Week", |d, y| {
    after(d, Feast::PalmSunday, y, 2)
  }),
  row!(SpyWednesday, "Spy Wednesday", |d, y| after(d, Feast::Easter, y, -4)),
  row!(MaundyThursday, "Maundy Thursday", |d, y| after(d, Feast::Easter, y, -3)),
  row!(GoodFriday, "Good Friday", |d, y| after(d, Feast::Easter, y, -2)),
  row!(HolySaturday, "Holy Saturday", |d, y| after(d, Feast::Easter, y, -1)),
  row!(Easter, "Easter", |_, y| Occurrence::Single(computus(y))),
  row!(EasterMonday, "Easter Monday", |d, y| after(d, Feast::Easter, y, 1)),
  row!(EasterTuesday, "Easter Tuesday", |d, y| after(d, Feast::Easter, y, 2)),
  row!(EasterWednesday, "Easter Wednesday", |d, y| after(d, Feast::Easter, y, 3)),
  row!(EasterThursday, "Easter Thursday", |d, y| after(d, Feast::Easter, y, 4)),
  row!(EasterFriday, "Easter Friday", |d, y| after(d, Feast::Easter, y, 5)),
  row!(EasterSaturday, "Easter Saturday", |d, y| after(d, Feast::Easter, y, 6)),
  row!(QuasimodoSunday, "Quasimodo Sunday", |d, y| after(d, Feast::Easter, y, 7)),
  row!(JubilateSunday, "Jubilate Sunday", |d, y| after(d, Feast::Easter, y, 21)),
  row!(MisericordiaSunday, "Misericordia Sunday", |d, y| {
    after(d, Feast::Easter, y, 14)
  }),
  row!(CantateSunday, "Cantate Sunday", |d, y| after(d, Feast::Easter, y, 28)),
  row!(MajorRogation, "Major Rogation", major_rogation),
  row!(Ascension, "Ascension", |d, y| after(d, Feast::Easter, y, 39)),
  row!(MinorRogation, "Minor Rogation", |d, y| {
    Occurrence::triple(d.date(Feast::Ascension, y), [-3, -2, -1])
  }),
  row!(Pentecost, "Pentecost", |d, y| after(d, Feast::Easter, y, 49)),
  row!(PentecostMonday, "Pentecost Monday", |d, y| {
    after(d, Feast::Pentecost, y, 1)
  }),
  row!(PentecostTuesday, "Pentecost Tuesday", |d, y| {
    after(d, Feast::Pentecost, y, 2)
  }),
  row!(ThursdayInPentecostWeek, "Thursday in Pentecost Week", |d, y| {
    after(d, Feast::Pentecost, y, 4)
  }),
  row!(WhitEmbertide, "Whit Embertide", |d, y| {
    Occurrence::triple(d.date(Feast::Pentecost, y), [3, 5, 6])
  }),
  row!(TrinitySunday, "Trinity Sunday", |d, y| after(d, Feast::Pentecost, y, 7)),
  row!(CorpusChristi, "Corpus Christi", |d, y| {
    after(d, Feast::TrinitySunday, y, 4)
  }),
  row!(SacredHeart, "The Sacred Heart", |d, y| {
    after(d, Feast::CorpusChristi, y, 8)
  }),
  row!(PetersPence, "Peter's Pence", peters_pence),
  row!(MichaelmasEmbertide, "Michaelmas Embertide", michaelmas_embertide),
  row!(ChristTheKing, "Christ the King", christ_the_king),
];

// ─── Rules ───────────────────────────────────────────────────────────────────

fn after(dates: &FeastDates, anchor: Feast, year: i32, days: i64) -> Occurrence {
  Occurrence::Single(shift(dates.date(anchor, year), days))
}

/// Third Sunday of Advent.
fn gaudete_sunday(_: &FeastDates, year: i32) -> Occurrence {
  let xmas = christmas(year - 1);
  Occurrence::Single(shift(xmas, -(weekday(xmas) + 8)))
}

/// First Sunday after Christmas; never Christmas itself.
fn sunday_within_the_octave_of_christmas(_: &FeastDates, year: i32) -> Occurrence {
  let xmas = christmas(year - 1);
  let mut sunday = shift(xmas, 6 - weekday(xmas));
  if sunday == xmas {
    sunday = shift(sunday, 7);
  }
  Occurrence::Single(sunday)
}

/// First Sunday of the civil year, moved to January 2 when that Sunday is
/// January 1, 6, or 7.
fn holy_name(_: &FeastDates, year: i32) -> Occurrence {
  let new_years_day = ymd(year, 1, 1);
  let sunday = shift(new_years_day, 6 - weekday(new_years_day));
  if [new_years_day, ymd(year, 1, 6), ymd(year, 1, 7)].contains(&sunday) {
    Occurrence::Single(ymd(year, 1, 2))
  } else {
    Occurrence::Single(sunday)
  }
}

/// First Sunday strictly after the Epiphany.
fn holy_family(_: &FeastDates, year: i32) -> Occurrence {
  let epiphany = ymd(year, 1, 6);
  let delta = match 6 - weekday(epiphany) {
    0 => 7,
    n => n,
  };
  Occurrence::Single(shift(epiphany, delta))
}

/// First Monday after the Epiphany.
fn plough_monday(dates: &FeastDates, year: i32) -> Occurrence {
  let epiphany = ymd(year, 1, 6);
  if weekday(epiphany) == 6 {
    Occurrence::Single(shift(epiphany, 1))
  } else {
    after(dates, Feast::HolyFamily, year, 1)
  }
}

/// February `day`, one day later in leap years (the doubled sixth day
/// before the Kalends of March).
fn leap_shifted(year: i32, day: u32) -> Occurrence {
  let day = if is_leap_year(year) { day + 1 } else { day };
  Occurrence::Single(ymd(year, 2, day))
}

/// March 25, transferred out of Holy Week and Easter Week to the Monday after
/// Quasimodo Sunday, or off a Sunday to the Monday.
fn lady_day(dates: &FeastDates, year: i32) -> Occurrence {
  let lady_day = ymd(year, 3, 25);
  let palm_sunday = dates.date(Feast::PalmSunday, year);
  let quasimodo = dates.date(Feast::QuasimodoSunday, year);
  if (palm_sunday..=quasimodo).contains(&lady_day) {
    Occurrence::Single(shift(quasimodo, 1))
  } else if weekday(lady_day) == 6 {
    Occurrence::Single(shift(lady_day, 1))
  } else {
    Occurrence::Single(lady_day)
  }
}

/// April 25, moved to Easter Tuesday when it coincides with Easter.
fn major_rogation(dates: &FeastDates, year: i32) -> Occurrence {
  let st_mark = ymd(year, 4, 25);
  if st_mark == dates.easter(year) {
    Occurrence::Single(shift(st_mark, 2))
  } else {
    Occurrence::Single(st_mark)
  }
}

/// The Sunday nearest June 29; when it is three days either way, the earlier.
fn peters_pence(_: &FeastDates, year: i32) -> Occurrence {
  let ss_peter_paul = ymd(year, 6, 29);
  let offset = (2 - weekday(ss_peter_paul)).rem_euclid(7) - 3;
  Occurrence::Single(shift(ss_peter_paul, offset))
}

/// Wednesday, Friday, and Saturday after the third Sunday of September.
fn michaelmas_embertide(_: &FeastDates, year: i32) -> Occurrence {
  let september_1 = ymd(year, 9, 1);
  let first_sunday = shift(september_1, 6 - weekday(september_1));
  Occurrence::triple(shift(first_sunday, 14), [3, 5, 6])
}

/// Last Sunday of October.
fn christ_the_king(_: &FeastDates, year: i32) -> Occurrence {
  let halloween = ymd(year, 10, 31);
  Occurrence::Single(shift(halloween, -((weekday(halloween) + 1) % 7)))
}
