use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::assembler::generate_file;
use crate::catalog::Catalog;
use crate::config::{Clock, Config};
use crate::console::Console;
use crate::error::{GenError, Result};
use crate::selector::{parse_invocation, Invocation};

/// What a successful run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
  Help,
  Generated { output: PathBuf, included: usize },
}

/// Everything one run needs, constructed once by the caller
pub struct App<'a> {
  pub config: &'a Config,
  pub catalog: &'a Catalog,
  pub clock: &'a dyn Clock,
}

impl<'a> App<'a> {
  pub fn new(config: &'a Config, catalog: &'a Catalog, clock: &'a dyn Clock) -> Self {
    Self {
      config,
      catalog,
      clock,
    }
  }

  /// Parse `args` (program name excluded) and generate the requested file
  pub fn execute<S: AsRef<OsStr>, O: Write>(
    &self,
    args: &[S],
    console: &mut Console<O>,
  ) -> Result<Outcome> {
    let (output, selection) = match parse_invocation(args, self.catalog)? {
      Invocation::Help => {
        console.help(&self.config.program_name, self.catalog)?;
        return Ok(Outcome::Help);
      }
      Invocation::Generate { output, selection } => (output, selection),
    };

    for flag in &selection.unknown_flags {
      console.warn(&format!("Unknown flag: {}", flag))?;
    }
    if selection.is_empty() {
      return Err(GenError::NothingSelected);
    }

    let source = self.config.asset_source();
    let included = generate_file(
      &output,
      &selection.keys,
      self.catalog,
      &*source,
      self.clock,
      console,
    )?;
    console.success(&output, included)?;

    Ok(Outcome::Generated { output, included })
  }

  /// Run end to end and return the process exit code
  pub fn run<S: AsRef<OsStr>, O: Write>(&self, args: &[S], console: &mut Console<O>) -> i32 {
    if let Err(err) = console.banner() {
      log::error!("failed to write banner: {}", err);
    }

    let code = match self.execute(args, console) {
      Ok(outcome) => {
        log::debug!("run finished: {:?}", outcome);
        0
      }
      Err(err) => {
        if let Err(io_err) = self.report(&err, console) {
          log::error!("failed to report error: {}", io_err);
        }
        1
      }
    };

    if let Err(err) = console.footer() {
      log::error!("failed to write footer: {}", err);
    }
    code
  }

  fn report<O: Write>(&self, err: &GenError, console: &mut Console<O>) -> io::Result<()> {
    let program = &self.config.program_name;
    match err {
      GenError::Usage(message) => {
        console.error(message)?;
        console.help_hint(program, "for usage information.")
      }
      GenError::NothingSelected => {
        console.error(&err.to_string())?;
        console.help_hint(program, "to see available options.")
      }
      GenError::OutputOpen { source, .. } => {
        log::debug!("output open failure: {:#}", source);
        console.error(&err.to_string())
      }
      other => console.error(&other.to_string()),
    }
  }
}
