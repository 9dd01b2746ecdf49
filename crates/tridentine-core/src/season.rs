//! Liturgical seasons: classification of dates and resolution of season
//! colors.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  cache::FeastDates,
  date::{christmas, shift, ymd},
  feast::Feast,
  ordinal::ordinal,
  source::{Color, FeastSource, Link},
  year::{liturgical_year_of, year_end, year_start},
};

/// Season keys, in the order they first occur within a liturgical year.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Season {
  Advent,
  Christmastide,
  #[serde(rename = "Time after Epiphany")]
  TimeAfterEpiphany,
  Shrovetide,
  Septuagesima,
  Lent,
  Passiontide,
  #[serde(rename = "Holy Week")]
  HolyWeek,
  #[serde(rename = "Paschal Triduum")]
  PaschalTriduum,
  Eastertide,
  #[serde(rename = "Time after Pentecost")]
  TimeAfterPentecost,
  Hallowtide,
}

impl Season {
  pub const ALL: [Season; 12] = [
    Self::Advent,
    Self::Christmastide,
    Self::TimeAfterEpiphany,
    Self::Shrovetide,
    Self::Septuagesima,
    Self::Lent,
    Self::Passiontide,
    Self::HolyWeek,
    Self::PaschalTriduum,
    Self::Eastertide,
    Self::TimeAfterPentecost,
    Self::Hallowtide,
  ];

  pub fn name(self) -> &'static str {
    match self {
      Self::Advent => "Advent",
      Self::Christmastide => "Christmastide",
      Self::TimeAfterEpiphany => "Time after Epiphany",
      Self::Shrovetide => "Shrovetide",
      Self::Septuagesima => "Septuagesima",
      Self::Lent => "Lent",
      Self::Passiontide => "Passiontide",
      Self::HolyWeek => "Holy Week",
      Self::PaschalTriduum => "Paschal Triduum",
      Self::Eastertide => "Eastertide",
      Self::TimeAfterPentecost => "Time after Pentecost",
      Self::Hallowtide => "Hallowtide",
    }
  }

  /// The season with display name `name`.
  pub fn from_name(name: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|s| s.name() == name)
  }

  /// The name as used mid-sentence: "the Time after Pentecost", "Advent".
  pub fn full_name(self, capitalize: bool) -> String {
    let name = self.name();
    let full = if name.starts_with("Time after") {
      format!("the {name}")
    } else {
      name.to_owned()
    };
    if capitalize { capitalize_first(&full) } else { full }
  }

  /// Whether this is a penitential season in which lesser feasts are reduced
  /// to commemorations.
  pub fn is_lenten(self) -> bool { matches!(self, Self::Lent | Self::Passiontide) }
}

impl fmt::Display for Season {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

pub(crate) fn capitalize_first(s: &str) -> String {
  let mut chars = s.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

// ─── Classification ──────────────────────────────────────────────────────────

/// The season containing `date`.
///
/// Intervals are tested in a fixed priority order; the Shrovetide window is
/// carved out of whatever season would otherwise contain it.
pub fn classify(date: NaiveDate, dates: &FeastDates) -> Result<Season> {
  let year = liturgical_year_of(date);
  let at = |feast| dates.date(feast, year);

  if [Feast::FatThursday, Feast::ShroveMonday, Feast::MardiGras]
    .into_iter()
    .any(|f| at(f) == date)
  {
    return Ok(Season::Shrovetide);
  }

  let epiphany = ymd(year, 1, 6);
  let halloween = ymd(year, 10, 31);
  let all_souls_end = ymd(year, 11, 3);
  let chain = [
    (year_start(year), christmas(year - 1), Season::Advent),
    (christmas(year - 1), epiphany, Season::Christmastide),
    (epiphany, at(Feast::Septuagesima), Season::TimeAfterEpiphany),
    (at(Feast::Septuagesima), at(Feast::AshWednesday), Season::Septuagesima),
    (at(Feast::AshWednesday), at(Feast::PassionSunday), Season::Lent),
    (at(Feast::PassionSunday), at(Feast::PalmSunday), Season::Passiontide),
    (at(Feast::PalmSunday), at(Feast::MaundyThursday), Season::HolyWeek),
    (at(Feast::MaundyThursday), at(Feast::Easter), Season::PaschalTriduum),
    (at(Feast::Easter), at(Feast::Pentecost), Season::Eastertide),
    (at(Feast::Pentecost), halloween, Season::TimeAfterPentecost),
    (halloween, all_souls_end, Season::Hallowtide),
    (all_souls_end, shift(year_end(year), 1), Season::TimeAfterPentecost),
  ];

  chain
    .into_iter()
    .find(|(from, until, _)| (*from..*until).contains(&date))
    .map(|(_, _, season)| season)
    .ok_or(Error::SeasonUnresolved(date))
}

/// The name of a weekday of Lent, e.g. "Monday in the second week of Lent".
///
/// Dates outside Ash Wednesday..Palm Sunday are named by weekday alone.
pub fn feria_name(date: NaiveDate, dates: &FeastDates) -> String {
  let year = liturgical_year_of(date);
  let ash_wednesday = dates.date(Feast::AshWednesday, year);
  let first_sunday_of_lent = shift(ash_wednesday, 4);
  let passion_sunday = dates.date(Feast::PassionSunday, year);
  let palm_sunday = dates.date(Feast::PalmSunday, year);
  let weekday = date.format("%A");

  if date == ash_wednesday {
    "Ash Wednesday".to_owned()
  } else if ash_wednesday < date && date < first_sunday_of_lent {
    format!("{weekday} after Ash Wednesday")
  } else if first_sunday_of_lent <= date && date < passion_sunday {
    let week = (date - first_sunday_of_lent).num_days() / 7 + 1;
    let week = ordinal(week as u32).to_lowercase();
    format!("{weekday} in the {week} week of Lent")
  } else if passion_sunday <= date && date < palm_sunday {
    format!("{weekday} in Passion week")
  } else {
    weekday.to_string()
  }
}

// ─── Season colors ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
struct ResolvedSeason {
  color: Color,
  links: Vec<Link>,
}

/// Every season's effective color and links, resolved once from metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonTable {
  // Indexed by `Season as usize`.
  resolved: Vec<ResolvedSeason>,
}

impl SeasonTable {
  /// Resolve every season, following parent references for inherited colors.
  pub fn resolve<S: FeastSource + ?Sized>(source: &S) -> Result<Self> {
    let resolved = Season::ALL
      .into_iter()
      .map(|season| {
        let record = source.season(season).ok_or(Error::MissingSeason(season))?;
        Ok(ResolvedSeason {
          color: resolve_color(source, season)?,
          links: record.links.clone(),
        })
      })
      .collect::<Result<Vec<_>>>()?;
    Ok(Self { resolved })
  }

  pub fn color(&self, season: Season) -> Color { self.resolved[season as usize].color }

  pub fn links(&self, season: Season) -> &[Link] {
    &self.resolved[season as usize].links
  }
}

fn resolve_color<S: FeastSource + ?Sized>(source: &S, season: Season) -> Result<Color> {
  let mut visited = Vec::new();
  let mut current = season;
  loop {
    if visited.contains(&current) {
      return Err(Error::SeasonColorCycle(season));
    }
    visited.push(current);

    let record = source.season(current).ok_or(Error::MissingSeason(current))?;
    match (record.color, record.parent) {
      (Some(color), _) => return Ok(color),
      (None, Some(parent)) => current = parent,
      (None, None) => return Err(Error::SeasonColorMissing(season)),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    source::{MemorySource, SeasonRecord},
    test_support::sample_source,
  };

  fn season_of(y: i32, m: u32, d: u32) -> Season {
    classify(ymd(y, m, d), &FeastDates::new()).expect("every date has a season")
  }

  #[test]
  fn classifies_2018() {
    assert_eq!(season_of(2017, 12, 3), Season::Advent);
    assert_eq!(season_of(2017, 12, 24), Season::Advent);
    assert_eq!(season_of(2017, 12, 25), Season::Christmastide);
    assert_eq!(season_of(2018, 1, 5), Season::Christmastide);
    assert_eq!(season_of(2018, 1, 6), Season::TimeAfterEpiphany);
    assert_eq!(season_of(2018, 1, 28), Season::Septuagesima);
    assert_eq!(season_of(2018, 2, 8), Season::Shrovetide);
    assert_eq!(season_of(2018, 2, 13), Season::Shrovetide);
    assert_eq!(season_of(2018, 2, 14), Season::Lent);
    assert_eq!(season_of(2018, 3, 18), Season::Passiontide);
    assert_eq!(season_of(2018, 3, 25), Season::HolyWeek);
    assert_eq!(season_of(2018, 3, 29), Season::PaschalTriduum);
    assert_eq!(season_of(2018, 4, 1), Season::Eastertide);
    assert_eq!(season_of(2018, 5, 20), Season::TimeAfterPentecost);
    assert_eq!(season_of(2018, 10, 31), Season::Hallowtide);
    assert_eq!(season_of(2018, 11, 2), Season::Hallowtide);
    assert_eq!(season_of(2018, 11, 3), Season::TimeAfterPentecost);
    assert_eq!(season_of(2018, 12, 1), Season::TimeAfterPentecost);
    assert_eq!(season_of(2018, 12, 2), Season::Advent);
  }

  #[test]
  fn shrovetide_is_carved_out_of_septuagesima() {
    // Easter 2008 was March 23: Septuagesima January 20, Fat Thursday
    // January 31, Ash Wednesday February 6.
    assert_eq!(season_of(2008, 1, 30), Season::Septuagesima);
    assert_eq!(season_of(2008, 1, 31), Season::Shrovetide);
    assert_eq!(season_of(2008, 2, 1), Season::Septuagesima);
    assert_eq!(season_of(2008, 2, 4), Season::Shrovetide);
  }

  #[test]
  fn season_names() {
    assert_eq!(Season::TimeAfterPentecost.full_name(false), "the Time after Pentecost");
    assert_eq!(Season::TimeAfterPentecost.full_name(true), "The Time after Pentecost");
    assert_eq!(Season::Advent.full_name(false), "Advent");
    assert_eq!(Season::HolyWeek.to_string(), "Holy Week");
  }

  #[test]
  fn season_keys_deserialize_from_display_names() {
    let season: Season =
      serde_json::from_str("\"Time after Epiphany\"").expect("known season");
    assert_eq!(season, Season::TimeAfterEpiphany);
    assert_eq!(Season::from_name("Paschal Triduum"), Some(Season::PaschalTriduum));
    assert_eq!(Season::from_name("Ordinary Time"), None);
  }

  #[test]
  fn feria_names_in_lent_2019() {
    let dates = FeastDates::new();
    // Ash Wednesday 2019 was March 6; Passion Sunday April 7.
    assert_eq!(feria_name(ymd(2019, 3, 6), &dates), "Ash Wednesday");
    assert_eq!(feria_name(ymd(2019, 3, 8), &dates), "Friday after Ash Wednesday");
    assert_eq!(
      feria_name(ymd(2019, 3, 18), &dates),
      "Monday in the second week of Lent"
    );
    assert_eq!(feria_name(ymd(2019, 4, 8), &dates), "Monday in Passion week");
    assert_eq!(feria_name(ymd(2019, 6, 3), &dates), "Monday");
  }

  #[test]
  fn colors_inherit_through_parents() {
    let table = SeasonTable::resolve(&sample_source()).expect("complete seasons");
    assert_eq!(table.color(Season::Advent), Color::Violet);
    assert_eq!(table.color(Season::PaschalTriduum), Color::Violet);
    assert_eq!(table.color(Season::Hallowtide), Color::Green);
    assert_eq!(table.color(Season::Eastertide), Color::White);
  }

  #[test]
  fn missing_and_cyclic_seasons_are_errors() {
    let mut source = MemorySource::new();
    assert!(matches!(
      SeasonTable::resolve(&source),
      Err(Error::MissingSeason(Season::Advent))
    ));

    for season in Season::ALL {
      source.insert_season(season, SeasonRecord {
        color: Some(Color::Green),
        ..Default::default()
      });
    }
    source.insert_season(Season::Lent, SeasonRecord {
      parent: Some(Season::Passiontide),
      ..Default::default()
    });
    source.insert_season(Season::Passiontide, SeasonRecord {
      parent: Some(Season::Lent),
      ..Default::default()
    });
    assert!(matches!(
      SeasonTable::resolve(&source),
      Err(Error::SeasonColorCycle(Season::Lent))
    ));

    source.insert_season(Season::Lent, SeasonRecord::default());
    assert!(matches!(
      SeasonTable::resolve(&source),
      Err(Error::SeasonColorMissing(Season::Lent))
    ));
  }
}
