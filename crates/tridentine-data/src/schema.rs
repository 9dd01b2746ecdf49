//! Raw JSON record shapes, before validation.
//!
//! Every field a record may omit is optional or defaulted here; the loader
//! decides which omissions are fatal for a record.

use serde::Deserialize;
use tridentine_core::{Color, Season};

/// One fixed-date or movable-feast record as written in the JSON tables.
#[derive(Debug, Deserialize)]
pub struct RawFeast {
  pub name:             Option<String>,
  pub class:            Option<u8>,
  #[serde(default)]
  pub titles:           Vec<String>,
  #[serde(default)]
  pub urls:             Vec<RawUrl>,
  #[serde(default, alias = "obligation")]
  pub holy_day:         bool,
  #[serde(default = "yes")]
  pub liturgical_event: bool,
  #[serde(default = "yes")]
  pub feast:            bool,
  #[serde(default)]
  pub addition:         bool,
  pub color:            Option<Color>,
}

/// A link, either a bare URL or a URL with display text.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawUrl {
  Plain(String),
  Described { url: String, description: String },
}

/// One season record.
#[derive(Debug, Deserialize)]
pub struct RawSeason {
  pub color:  Option<Color>,
  /// Parent season whose color is inherited.
  #[serde(alias = "parent")]
  pub season: Option<Season>,
  #[serde(default)]
  pub urls:   Vec<RawUrl>,
}

fn yes() -> bool { true }
