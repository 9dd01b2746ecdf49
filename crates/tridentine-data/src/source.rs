//! [`JsonSource`]: the JSON metadata tables, validated into a [`FeastSource`].

use std::{
  collections::BTreeMap,
  fs,
  path::{Path, PathBuf},
};

use chrono::NaiveDate;
use serde_json::Value;
use tridentine_core::{
  FeastRecord, FeastSource, Link, MOVABLE_FEASTS, MemorySource, Rank, Season,
  SeasonRecord, source::fixed_key,
};

use crate::{
  Error, Result,
  error::Rejection,
  schema::{RawFeast, RawSeason, RawUrl},
};

const BUNDLED_FIXED: &str = include_str!("../data/fixed.json");
const BUNDLED_MOVABLE: &str = include_str!("../data/movable.json");
const BUNDLED_SEASONS: &str = include_str!("../data/seasons.json");

pub const FIXED_FILE: &str = "fixed.json";
pub const MOVABLE_FILE: &str = "movable.json";
pub const SEASONS_FILE: &str = "seasons.json";

/// Feast and season metadata loaded from JSON.
///
/// Records that fail validation are logged and skipped; [`rejected`] counts
/// them.
///
/// [`rejected`]: JsonSource::rejected
#[derive(Debug, Clone)]
pub struct JsonSource {
  inner:    MemorySource,
  rejected: usize,
}

impl JsonSource {
  /// The 1962 tables compiled into this crate.
  pub fn bundled() -> Result<Self> {
    Self::from_json(BUNDLED_FIXED, BUNDLED_MOVABLE, BUNDLED_SEASONS)
  }

  /// Load `fixed.json`, `movable.json` and `seasons.json` from `dir`.
  pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
    let dir = dir.as_ref();
    let read = |name: &str| {
      let path = dir.join(name);
      fs::read_to_string(&path).map_err(|source| Error::Io { path, source })
    };
    let source =
      Self::from_json(&read(FIXED_FILE)?, &read(MOVABLE_FILE)?, &read(SEASONS_FILE)?)?;
    tracing::info!(dir = %dir.display(), "loaded feast metadata from directory");
    Ok(source)
  }

  /// Parse and validate the three tables.
  pub fn from_json(fixed: &str, movable: &str, seasons: &str) -> Result<Self> {
    let mut loader = Loader::default();
    loader.fixed(serde_json::from_str(fixed)?);
    loader.movable(serde_json::from_str(movable)?);
    loader.seasons(serde_json::from_str(seasons)?);

    tracing::debug!(
      fixed = loader.inner.fixed_len(),
      movable = loader.inner.movable_len(),
      rejected = loader.rejected,
      "validated feast metadata"
    );
    Ok(Self { inner: loader.inner, rejected: loader.rejected })
  }

  /// Number of records skipped during validation.
  pub fn rejected(&self) -> usize { self.rejected }
}

impl FeastSource for JsonSource {
  fn fixed(&self, key: &str) -> &[FeastRecord] { self.inner.fixed(key) }

  fn movable(&self, name: &str) -> Option<&FeastRecord> { self.inner.movable(name) }

  fn season(&self, season: Season) -> Option<&SeasonRecord> { self.inner.season(season) }
}

/// Where the bundled tables would live in a source checkout, for callers that
/// want to copy and edit them.
pub fn bundled_dir() -> PathBuf { Path::new(env!("CARGO_MANIFEST_DIR")).join("data") }

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Default)]
struct Loader {
  inner:    MemorySource,
  rejected: usize,
}

impl Loader {
  fn fixed(&mut self, table: BTreeMap<String, Vec<Value>>) {
    for (key, records) in table {
      let Some(canonical) = canonical_key(&key) else {
        tracing::warn!(%key, count = records.len(), "rejecting records under invalid date key");
        self.rejected += records.len();
        continue;
      };
      for value in records {
        match feast_record(value, None) {
          Ok(record) => self.inner.insert_fixed(canonical.clone(), record),
          Err(reason) => {
            tracing::warn!(%key, %reason, "rejecting fixed-feast record");
            self.rejected += 1;
          }
        }
      }
    }
  }

  fn movable(&mut self, table: BTreeMap<String, Value>) {
    for (name, value) in table {
      if !MOVABLE_FEASTS.iter().any(|spec| spec.name == name) {
        tracing::warn!(%name, "rejecting record for unknown movable feast");
        self.rejected += 1;
        continue;
      }
      match feast_record(value, Some(&name)) {
        Ok(record) => {
          self.inner.insert_movable(name, record);
        }
        Err(reason) => {
          tracing::warn!(%name, %reason, "rejecting movable-feast record");
          self.rejected += 1;
        }
      }
    }

    for spec in &MOVABLE_FEASTS {
      if self.inner.movable(spec.name).is_none() {
        tracing::warn!(name = spec.name, "movable feast has no metadata record");
      }
    }
  }

  fn seasons(&mut self, table: BTreeMap<String, Value>) {
    for (key, value) in table {
      let Some(season) = Season::from_name(&key) else {
        tracing::warn!(%key, "rejecting record for unknown season");
        self.rejected += 1;
        continue;
      };
      match serde_json::from_value::<RawSeason>(value) {
        Ok(raw) => {
          self.inner.insert_season(season, SeasonRecord {
            color:  raw.color,
            parent: raw.season,
            links:  raw.urls.into_iter().map(link).collect(),
          });
        }
        Err(reason) => {
          tracing::warn!(%key, %reason, "rejecting season record");
          self.rejected += 1;
        }
      }
    }
  }
}

/// Normalise a "Month D" key ("December 05" → "December 5"). February 29 is
/// accepted.
fn canonical_key(key: &str) -> Option<String> {
  NaiveDate::parse_from_str(&format!("{key} 2000"), "%B %d %Y")
    .ok()
    .map(fixed_key)
}

fn feast_record(
  value: Value,
  default_name: Option<&str>,
) -> Result<FeastRecord, Rejection> {
  let raw: RawFeast = serde_json::from_value(value)?;
  let name = raw
    .name
    .or_else(|| default_name.map(str::to_owned))
    .filter(|n| !n.trim().is_empty())
    .ok_or(Rejection::MissingName)?;
  let rank = match raw.class {
    Some(class) => Some(Rank::try_from(class).map_err(Rejection::BadClass)?),
    None if raw.liturgical_event => return Err(Rejection::MissingClass),
    None => None,
  };

  Ok(FeastRecord {
    name,
    rank,
    titles: raw.titles,
    links: raw.urls.into_iter().map(link).collect(),
    holy_day: raw.holy_day,
    liturgical: raw.liturgical_event,
    feast: raw.feast,
    addition: raw.addition,
    color: raw.color,
  })
}

fn link(raw: RawUrl) -> Link {
  match raw {
    RawUrl::Plain(url) => Link::new(url),
    RawUrl::Described { url, description } => Link::described(url, description),
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn keys_are_canonicalised() {
    assert_eq!(canonical_key("December 05").as_deref(), Some("December 5"));
    assert_eq!(canonical_key("February 29").as_deref(), Some("February 29"));
    assert_eq!(canonical_key("Smarch 3"), None);
    assert_eq!(canonical_key("April 31"), None);
  }

  #[test]
  fn informational_records_need_no_class() {
    let record =
      feast_record(json!({ "name": "Halloween", "liturgical_event": false }), None)
        .expect("valid informational record");
    assert_eq!(record.rank, None);
    assert!(!record.liturgical);
  }

  #[test]
  fn liturgical_records_need_a_class() {
    let err = feast_record(json!({ "name": "St. Nobody" }), None).expect_err("no class");
    assert!(matches!(err, Rejection::MissingClass));

    let err = feast_record(json!({ "name": "St. Nobody", "class": 7 }), None)
      .expect_err("bad class");
    assert!(matches!(err, Rejection::BadClass(_)));
  }

  #[test]
  fn records_need_a_name() {
    let err = feast_record(json!({ "class": 3 }), None).expect_err("no name");
    assert!(matches!(err, Rejection::MissingName));

    let record = feast_record(json!({ "class": 1 }), Some("Easter")).expect("named by key");
    assert_eq!(record.name, "Easter");
  }

  #[test]
  fn obligation_is_an_alias_for_holy_day() {
    let record = feast_record(json!({ "name": "Christmas", "class": 1, "obligation": true }), None)
      .expect("valid");
    assert!(record.holy_day);
  }

  #[test]
  fn urls_may_carry_descriptions() {
    let record = feast_record(
      json!({
        "name": "St. Saturninus",
        "class": 4,
        "urls": [
          "https://en.wikipedia.org/wiki/Saturnin",
          { "url": "http://www.newadvent.org/cathen/13480a.htm", "description": "Saturninus" }
        ]
      }),
      None,
    )
    .expect("valid");
    assert_eq!(record.links, vec![
      Link::new("https://en.wikipedia.org/wiki/Saturnin"),
      Link::described("http://www.newadvent.org/cathen/13480a.htm", "Saturninus"),
    ]);
  }

  #[test]
  fn malformed_records_are_skipped_not_fatal() {
    let fixed = r#"{
      "May 1": [
        { "name": "St. Joseph the Worker", "class": 1 },
        { "name": "Broken", "class": "one" },
        { "class": 3 }
      ],
      "Nonsense": [{ "name": "Lost", "class": 3 }]
    }"#;
    let source = JsonSource::from_json(fixed, "{}", "{}").expect("tables parse");
    assert_eq!(source.fixed("May 1").len(), 1);
    assert_eq!(source.rejected(), 3);
  }

  #[test]
  fn unknown_movable_feasts_and_seasons_are_rejected() {
    let source = JsonSource::from_json(
      "{}",
      r#"{ "Easter": { "class": 1 }, "Festivus": { "class": 1 } }"#,
      r#"{ "Advent": { "color": "Violet" }, "Ordinary Time": { "color": "Green" } }"#,
    )
    .expect("tables parse");
    assert!(source.movable("Easter").is_some());
    assert!(source.movable("Festivus").is_none());
    assert!(source.season(Season::Advent).is_some());
    assert_eq!(source.rejected(), 2);
  }

  #[test]
  fn tables_must_be_objects() {
    assert!(matches!(JsonSource::from_json("[]", "{}", "{}"), Err(Error::Json(_))));
  }

  #[test]
  fn missing_directory_reports_the_path() {
    let err = JsonSource::open("/nonexistent/tridentine").expect_err("missing dir");
    assert!(err.to_string().contains("/nonexistent/tridentine/fixed.json"));
  }

  #[test]
  fn bundled_dir_loads_like_the_compiled_tables() {
    let from_disk = JsonSource::open(bundled_dir()).expect("bundled dir");
    let compiled = JsonSource::bundled().expect("bundled");
    assert_eq!(from_disk.inner.fixed_len(), compiled.inner.fixed_len());
    assert_eq!(from_disk.rejected(), 0);
  }
}
