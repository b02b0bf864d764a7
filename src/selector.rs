use std::ffi::OsStr;
use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::error::{GenError, Result};

/// Token selecting every catalog item
pub const ALL_FLAG: &str = "-all";

/// Tokens that request the help screen wherever they appear
pub const HELP_FLAGS: [&str; 3] = ["-h", "--help", "-help"];

/// Keys chosen for one run, in the order they were requested
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
  /// Selected keys. Repeated flags are kept.
  pub keys: Vec<String>,
  /// Flag-like tokens that matched nothing in the catalog
  pub unknown_flags: Vec<String>,
}

impl Selection {
  pub fn is_empty(&self) -> bool {
    self.keys.is_empty()
  }
}

/// What the command line asks the tool to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
  Help,
  Generate { output: PathBuf, selection: Selection },
}

/// Whether any token asks for help
pub fn wants_help<S: AsRef<OsStr>>(args: &[S]) -> bool {
  args
    .iter()
    .filter_map(|arg| arg.as_ref().to_str())
    .any(|arg| HELP_FLAGS.contains(&arg))
}

/// Scan flag tokens left to right and resolve them against the catalog.
///
/// `-all` selects the whole catalog and ends the scan. Tokens that do not
/// start with `-` are ignored. A token that is not valid UTF-8 can never
/// match a catalog flag, so it is reported as unknown under its lossy form.
pub fn select<S: AsRef<OsStr>>(tokens: &[S], catalog: &Catalog) -> Selection {
  let mut selection = Selection::default();

  for token in tokens {
    let lossy = token.as_ref().to_string_lossy();
    let token: &str = &lossy;

    if token == ALL_FLAG {
      selection.keys.extend(catalog.keys());
      break;
    }

    if !token.starts_with('-') {
      continue;
    }

    match catalog.by_flag(token) {
      Some(item) => selection.keys.push(item.key.clone()),
      None => selection.unknown_flags.push(token.to_string()),
    }
  }

  log::debug!(
    "selected {} item(s), {} unknown flag(s)",
    selection.keys.len(),
    selection.unknown_flags.len()
  );
  selection
}

/// Parse the arguments following the program name.
///
/// The first argument is always the output path. Help is checked before
/// anything else. The output path is taken as-is, without any UTF-8
/// conversion.
pub fn parse_invocation<S: AsRef<OsStr>>(args: &[S], catalog: &Catalog) -> Result<Invocation> {
  if wants_help(args) {
    return Ok(Invocation::Help);
  }

  let Some((output, flags)) = args.split_first() else {
    return Err(GenError::Usage("Not enough arguments.".to_string()));
  };

  let output: &OsStr = output.as_ref();
  let selection = select(flags, catalog);
  Ok(Invocation::Generate {
    output: PathBuf::from(output),
    selection,
  })
}
