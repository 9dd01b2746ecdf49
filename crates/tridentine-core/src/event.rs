//! The event model: one candidate observance on one date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
  ordinal::is_ordinal_word,
  season::{Season, capitalize_first},
  source::{Color, FeastRecord, Link, Rank},
};

/// Which assembly pass produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
  /// The fixed-date table.
  Fixed,
  /// The movable-feast registry.
  Movable,
  /// A positional Sunday (Sundays of Advent, after Epiphany, …).
  Sunday,
}

/// One observance on one date, with its season and color resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
  pub date:       NaiveDate,
  pub name:       String,
  pub rank:       Option<Rank>,
  pub titles:     Vec<String>,
  pub links:      Vec<Link>,
  pub liturgical: bool,
  pub feast:      bool,
  pub holy_day:   bool,
  pub addition:   bool,
  pub origin:     Origin,
  pub season:     Season,
  pub color:      Color,
}

impl Event {
  /// Whether the event comes from the fixed-date table.
  pub fn is_fixed(&self) -> bool { self.origin == Origin::Fixed }

  /// Whether the event is a commemoration (Class IV).
  pub fn is_commemoration(&self) -> bool { self.rank == Some(Rank::IV) }

  /// The name with the article or prefix it takes mid-sentence, e.g.
  /// "the Feast of St. Nicholas" or "the Commemoration of St. Saturninus".
  pub fn full_name(&self, capitalize: bool) -> String {
    let full = full_name(&self.name, self.rank);
    if capitalize { capitalize_first(&full) } else { full }
  }
}

const FEAST_OF_PREFIXES: [&str; 4] = ["St.", "SS.", "Pope", "The"];
const FEAST_OF_THE_PREFIXES: [&str; 3] = ["Basilica", "Baptism", "Church"];

fn full_name(name: &str, rank: Option<Rank>) -> String {
  let first = name.split_whitespace().next().unwrap_or_default();
  let kind = if rank == Some(Rank::IV) { "Commemoration" } else { "Feast" };

  if FEAST_OF_PREFIXES.contains(&first)
    || name.starts_with("Our Lady")
    || name == "Christ the King"
  {
    let name = match name.strip_prefix("The") {
      Some(rest) => format!("the{rest}"),
      None => name.to_owned(),
    };
    format!("the {kind} of {name}")
  } else if FEAST_OF_THE_PREFIXES.contains(&first) {
    format!("the {kind} of the {name}")
  } else if first == "Vigil" {
    match name.strip_prefix("Vigil of ") {
      Some(saint) if saint.starts_with("St.") || saint.starts_with("SS.") => {
        format!("the Vigil of the Feast of {saint}")
      }
      _ => format!("the {name}"),
    }
  } else if is_ordinal_word(first)
    || name.starts_with("Last Sunday")
    || name.starts_with("Feast")
  {
    format!("the {name}")
  } else {
    name.to_owned()
  }
}

// ─── Assembly-time candidates ────────────────────────────────────────────────

/// An event before sorting, without its season and color.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
  pub date:       NaiveDate,
  pub name:       String,
  pub rank:       Option<Rank>,
  pub titles:     Vec<String>,
  pub links:      Vec<Link>,
  pub liturgical: bool,
  pub feast:      bool,
  pub holy_day:   bool,
  pub addition:   bool,
  pub origin:     Origin,
  pub color:      Option<Color>,
}

impl Candidate {
  pub fn from_record(date: NaiveDate, record: &FeastRecord, origin: Origin) -> Self {
    Self {
      date,
      name: record.name.clone(),
      rank: record.rank,
      titles: record.titles.clone(),
      links: record.links.clone(),
      liturgical: record.liturgical,
      feast: record.feast,
      holy_day: record.holy_day,
      addition: record.addition,
      origin,
      color: record.color,
    }
  }

  pub fn sunday(date: NaiveDate, name: String, rank: Rank) -> Self {
    Self {
      date,
      name,
      rank: Some(rank),
      titles: Vec::new(),
      links: Vec::new(),
      liturgical: true,
      feast: true,
      holy_day: false,
      addition: false,
      origin: Origin::Sunday,
      color: None,
    }
  }

  /// Sort key in half-steps: rank × 2, plus one for additions and
  /// second-class vigils. Entries without liturgy or rank sort last.
  pub fn precedence_key(&self) -> u8 {
    match self.rank {
      Some(rank) if self.liturgical => {
        let key = rank.class() * 2;
        if self.addition || self.is_second_class_vigil() { key + 1 } else { key }
      }
      _ => 8,
    }
  }

  fn is_second_class_vigil(&self) -> bool {
    self.rank == Some(Rank::II) && self.name.starts_with("Vigil")
  }

  /// Resolve the color and attach the season.
  ///
  /// An explicit color always wins. Otherwise a liturgical, non-commemoration
  /// event from the fixed-date table is White (Red for martyrs, apostles and
  /// evangelists), unless it is a lesser feast in Lent or Passiontide. Every
  /// other event takes the season's color.
  pub fn finish(self, season: Season, season_color: Color) -> Event {
    let color = self.color.unwrap_or_else(|| {
      let lenten_lesser = self.rank != Some(Rank::I) && season.is_lenten();
      if self.liturgical
        && self.rank != Some(Rank::IV)
        && self.origin == Origin::Fixed
        && !lenten_lesser
      {
        let red = ["Martyr", "Apostle", "Evangelist"]
          .iter()
          .any(|title| self.titles.iter().any(|t| t == title));
        if red { Color::Red } else { Color::White }
      } else {
        season_color
      }
    });

    Event {
      date: self.date,
      name: self.name,
      rank: self.rank,
      titles: self.titles,
      links: self.links,
      liturgical: self.liturgical,
      feast: self.feast,
      holy_day: self.holy_day,
      addition: self.addition,
      origin: self.origin,
      season,
      color,
    }
  }
}
