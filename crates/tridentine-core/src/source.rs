//! Feast and season metadata, and the [`FeastSource`] lookup seam.
//!
//! The core never reads metadata from disk. A backend (`tridentine-data`)
//! validates its records into these types and serves them through
//! [`FeastSource`]; [`MemorySource`] is the in-memory implementation backends
//! build into.

use std::{collections::HashMap, fmt};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::season::Season;

// ─── Rank ────────────────────────────────────────────────────────────────────

/// Liturgical class, from Class I (highest) to Class IV (commemoration).
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Rank {
  I   = 1,
  II  = 2,
  III = 3,
  IV  = 4,
}

impl Rank {
  pub fn class(self) -> u8 { self as u8 }

  pub fn roman(self) -> &'static str {
    match self {
      Self::I => "I",
      Self::II => "II",
      Self::III => "III",
      Self::IV => "IV",
    }
  }
}

impl TryFrom<u8> for Rank {
  type Error = String;

  fn try_from(class: u8) -> Result<Self, Self::Error> {
    match class {
      1 => Ok(Self::I),
      2 => Ok(Self::II),
      3 => Ok(Self::III),
      4 => Ok(Self::IV),
      other => Err(format!("class must be between 1 and 4, got {other}")),
    }
  }
}

impl From<Rank> for u8 {
  fn from(rank: Rank) -> Self { rank.class() }
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// Liturgical color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
  White,
  Red,
  Green,
  Violet,
  Rose,
  Black,
}

impl Color {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::White => "White",
      Self::Red => "Red",
      Self::Green => "Green",
      Self::Violet => "Violet",
      Self::Rose => "Rose",
      Self::Black => "Black",
    }
  }
}

impl fmt::Display for Color {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─── Records ─────────────────────────────────────────────────────────────────

/// An informational link attached to a feast or season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
  pub url:         String,
  /// Display text supplied with the link, if any. Export derives one from the
  /// URL when absent.
  pub description: Option<String>,
}

impl Link {
  pub fn new(url: impl Into<String>) -> Self {
    Self { url: url.into(), description: None }
  }

  pub fn described(url: impl Into<String>, description: impl Into<String>) -> Self {
    Self { url: url.into(), description: Some(description.into()) }
  }
}

/// Metadata for one fixed-date or movable observance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeastRecord {
  pub name:       String,
  /// `None` only for informational entries.
  pub rank:       Option<Rank>,
  /// Honorifics ("Martyr", "Apostle", …); only consulted to infer color.
  pub titles:     Vec<String>,
  pub links:      Vec<Link>,
  pub holy_day:   bool,
  /// `false` for informational entries with no liturgy of their own.
  pub liturgical: bool,
  /// `false` for ferias.
  pub feast:      bool,
  /// Observed alongside the day's office rather than competing with it.
  pub addition:   bool,
  /// Explicit color; derived at assembly when absent.
  pub color:      Option<Color>,
}

impl FeastRecord {
  /// A liturgical feast with no titles, links or explicit color.
  pub fn new(name: impl Into<String>, rank: Rank) -> Self {
    Self {
      name:       name.into(),
      rank:       Some(rank),
      titles:     Vec::new(),
      links:      Vec::new(),
      holy_day:   false,
      liturgical: true,
      feast:      true,
      addition:   false,
      color:      None,
    }
  }

  /// An entry with no liturgy of its own (e.g. Halloween).
  pub fn informational(name: impl Into<String>) -> Self {
    Self { rank: None, liturgical: false, ..Self::new(name, Rank::IV) }
  }
}

/// Metadata for a liturgical season.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonRecord {
  pub color:  Option<Color>,
  /// Season whose color this one inherits when `color` is absent.
  pub parent: Option<Season>,
  pub links:  Vec<Link>,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Read-only metadata lookup consumed by the calendar assembler.
pub trait FeastSource: Send + Sync {
  /// Fixed-date records for a "Month D" key (e.g. `"December 25"`), in table
  /// order. Unknown keys yield an empty slice.
  fn fixed(&self, key: &str) -> &[FeastRecord];

  /// The record for a movable feast, by registry name.
  fn movable(&self, name: &str) -> Option<&FeastRecord>;

  fn season(&self, season: Season) -> Option<&SeasonRecord>;
}

impl<T: FeastSource + ?Sized> FeastSource for &T {
  fn fixed(&self, key: &str) -> &[FeastRecord] { (**self).fixed(key) }

  fn movable(&self, name: &str) -> Option<&FeastRecord> { (**self).movable(name) }

  fn season(&self, season: Season) -> Option<&SeasonRecord> {
    (**self).season(season)
  }
}

/// The "Month D" key fixed-date records are filed under.
pub fn fixed_key(date: NaiveDate) -> String { date.format("%B %-d").to_string() }

// ─── In-memory source ────────────────────────────────────────────────────────

/// A [`FeastSource`] held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
  fixed:   HashMap<String, Vec<FeastRecord>>,
  movable: HashMap<String, FeastRecord>,
  seasons: HashMap<Season, SeasonRecord>,
}

impl MemorySource {
  pub fn new() -> Self { Self::default() }

  /// Append a record under a "Month D" key, after any already filed there.
  pub fn insert_fixed(&mut self, key: impl Into<String>, record: FeastRecord) {
    self.fixed.entry(key.into()).or_default().push(record);
  }

  /// Insert the record for the movable feast registered as `name`.
  pub fn insert_movable(
    &mut self,
    name: impl Into<String>,
    record: FeastRecord,
  ) -> Option<FeastRecord> {
    self.movable.insert(name.into(), record)
  }

  pub fn insert_season(
    &mut self,
    season: Season,
    record: SeasonRecord,
  ) -> Option<SeasonRecord> {
    self.seasons.insert(season, record)
  }

  /// Number of fixed-date records across all keys.
  pub fn fixed_len(&self) -> usize { self.fixed.values().map(Vec::len).sum() }

  pub fn movable_len(&self) -> usize { self.movable.len() }
}

impl FeastSource for MemorySource {
  fn fixed(&self, key: &str) -> &[FeastRecord] {
    self.fixed.get(key).map(Vec::as_slice).unwrap_or_default()
  }

  fn movable(&self, name: &str) -> Option<&FeastRecord> { self.movable.get(name) }

  fn season(&self, season: Season) -> Option<&SeasonRecord> {
    self.seasons.get(&season)
  }
}
