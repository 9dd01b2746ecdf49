//! `tridentine`: write the 1962 liturgical calendar to an ICS file.
//!
//! # Usage
//!
//! ```text
//! tridentine --output tridentine.ics --years 2025 2026
//! tridentine --output tridentine.ics --years 2027          # extends the file
//! tridentine --output new.ics --overwrite-existing --reuse-uids-from old.ics
//! ```

mod settings;

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use settings::Settings;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tridentine_core::{LiturgicalCalendar, liturgical_year_of};
use tridentine_data::JsonSource;
use tridentine_ical::{ExistingCalendar, IdentifierPool, export, extend};

// ─── CLI args ────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
  name = "tridentine",
  version,
  about = "Generate a liturgical calendar using the 1962 Roman Catholic rubrics."
)]
struct Args {
  /// ICS file to write. An existing file is extended with the given years.
  #[arg(short, long, value_name = "FILE")]
  output: PathBuf,

  /// Liturgical years to generate (default: the current liturgical year).
  #[arg(long, value_name = "YYYY", num_args = 1..)]
  years: Vec<i32>,

  /// Replace an existing output file instead of extending it.
  #[arg(long, alias = "overwrite_existing")]
  overwrite_existing: bool,

  /// Earlier export whose UIDs are kept for unchanged entries, whether the
  /// output is written fresh or extended.
  #[arg(long, value_name = "FILE")]
  reuse_uids_from: Option<PathBuf>,

  /// Write links as HTML anchors.
  #[arg(long)]
  html: bool,

  /// Directory of feast metadata tables replacing the bundled ones.
  #[arg(long, value_name = "DIR")]
  data_dir: Option<PathBuf>,

  /// Path to the TOML settings file.
  #[arg(short, long, value_name = "FILE", default_value = "tridentine.toml")]
  config: PathBuf,
}

// ─── Entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();
  let settings = Settings::load(&args.config)?;
  run(&args, &settings, Utc::now())
}

/// Generate the calendar described by `args` and write it out. `now` fixes
/// the default year and every DTSTAMP.
fn run(args: &Args, settings: &Settings, now: DateTime<Utc>) -> Result<()> {
  let years = if args.years.is_empty() {
    vec![liturgical_year_of(now.date_naive())]
  } else {
    args.years.clone()
  };

  let source = match args.data_dir.as_ref().or(settings.data_dir.as_ref()) {
    Some(dir) => JsonSource::open(dir)
      .with_context(|| format!("failed to load feast metadata from {}", dir.display()))?,
    None => JsonSource::bundled().context("failed to load bundled feast metadata")?,
  };
  if source.rejected() > 0 {
    tracing::warn!(rejected = source.rejected(), "some feast records were skipped");
  }

  let calendar = LiturgicalCalendar::with_years(source, years.iter().copied())
    .with_context(|| format!("failed to assemble liturgical years {years:?}"))?;
  let options = settings.export_options(args.html);

  let mut pool = match &args.reuse_uids_from {
    Some(path) => IdentifierPool::from_calendar(&read_calendar(path)?, &settings.uid_domain),
    None => IdentifierPool::new(&settings.uid_domain),
  };
  let ics = if args.output.is_file() && !args.overwrite_existing {
    tracing::info!(output = %args.output.display(), "extending existing calendar");
    let existing = read_calendar(&args.output)?;
    extend(&existing, &calendar, &options, &mut pool, now)
  } else {
    export(&calendar, &options, &mut pool, now)
  };

  fs::write(&args.output, ics)
    .with_context(|| format!("failed to write {}", args.output.display()))?;
  tracing::info!(output = %args.output.display(), ?years, "wrote calendar");
  Ok(())
}

fn read_calendar(path: &std::path::Path) -> Result<ExistingCalendar> {
  let raw = fs::read_to_string(path)
    .with_context(|| format!("failed to read {}", path.display()))?;
  tridentine_ical::parse(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
