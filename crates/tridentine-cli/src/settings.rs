//! Layered settings: defaults, then an optional TOML file, then
//! `TRIDENTINE_*` environment variables.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;
use tridentine_ical::ExportOptions;

/// Runtime settings, deserialised from `tridentine.toml` and the environment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
  pub calendar_name:        String,
  pub calendar_description: String,
  pub html_formatting:      bool,
  /// Domain part of minted UIDs.
  pub uid_domain:           String,
  /// Directory holding `fixed.json`, `movable.json` and `seasons.json`. The
  /// bundled tables are used when unset.
  pub data_dir:             Option<PathBuf>,
}

impl Default for Settings {
  fn default() -> Self {
    let export = ExportOptions::default();
    Self {
      calendar_name:        export.name,
      calendar_description: export.description,
      html_formatting:      export.html,
      uid_domain:           "tridentine-calendar".to_owned(),
      data_dir:             None,
    }
  }
}

impl Settings {
  /// Load from `path` (which need not exist) and the environment.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("TRIDENTINE"))
      .build()
      .with_context(|| format!("failed to read settings from {}", path.display()))?
      .try_deserialize()
      .context("failed to deserialise Settings")
  }

  pub fn export_options(&self, html: bool) -> ExportOptions {
    ExportOptions {
      name:        self.calendar_name.clone(),
      description: self.calendar_description.clone(),
      html:        html || self.html_formatting,
    }
  }
}
