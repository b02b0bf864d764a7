use chrono::{Local, NaiveDateTime};
use std::env;
use std::path::{Path, PathBuf};

use crate::assets::{AssetSource, DirAssets, EmbeddedAssets};
use crate::utils::get_file_name;

/// Environment variable pointing at a directory of `<key>.cpp` snippets
pub const SNIPPETS_DIR_ENV: &str = "DSGEN_SNIPPETS_DIR";

/// Format of the timestamp written into the generated header
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Source of the generation timestamp
pub trait Clock {
  fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> NaiveDateTime {
    Local::now().naive_local()
  }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
  fn now(&self) -> NaiveDateTime {
    self.0
  }
}

/// Format a timestamp for the generated header
pub fn format_timestamp(clock: &dyn Clock) -> String {
  clock.now().format(TIMESTAMP_FORMAT).to_string()
}

/// Settings for one run, resolved once at startup
#[derive(Debug, Clone)]
pub struct Config {
  /// Name shown in usage hints
  pub program_name: String,
  /// Read snippets from this directory instead of the embedded copies
  pub snippets_dir: Option<PathBuf>,
}

impl Config {
  /// Resolve settings from `argv[0]` and the environment
  pub fn from_env(argv0: Option<&Path>) -> Self {
    let program_name = argv0
      .and_then(get_file_name)
      .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
    let snippets_dir = env::var_os(SNIPPETS_DIR_ENV)
      .filter(|value| !value.is_empty())
      .map(PathBuf::from);

    Self {
      program_name,
      snippets_dir,
    }
  }

  /// The asset source these settings select
  pub fn asset_source(&self) -> Box<dyn AssetSource> {
    match &self.snippets_dir {
      Some(dir) => {
        log::info!("reading snippets from {}", dir.display());
        Box::new(DirAssets::new(dir.clone()))
      }
      None => Box::new(EmbeddedAssets),
    }
  }
}

impl Default for Config {
  fn default() -> Self {
    Self {
      program_name: env!("CARGO_PKG_NAME").to_string(),
      snippets_dir: None,
    }
  }
}
