use std::io::{self, Write};
use std::path::Path;

use crate::catalog::Catalog;
use crate::utils::{pad_right, repeat_str};

const BOX_RULE: &str = "+-----------------------------------------------------+";
const BOX_WIDTH: usize = 51;

/// Operator-facing output: banners, progress, warnings and help.
///
/// Kept apart from the generated file so nothing printed here ends up in the
/// artifact.
pub struct Console<W: Write> {
  out: W,
}

impl<W: Write> Console<W> {
  pub fn new(out: W) -> Self {
    Self { out }
  }

  pub fn banner(&mut self) -> io::Result<()> {
    writeln!(self.out, "+--------------------------------------------------------------+")?;
    writeln!(self.out, "|                          DSGEN                               |")?;
    writeln!(self.out, "|  Generate professional data structures with a single command |")?;
    writeln!(self.out, "+--------------------------------------------------------------+")?;
    writeln!(self.out)
  }

  pub fn footer(&mut self) -> io::Result<()> {
    writeln!(self.out)?;
    writeln!(self.out, "================================================================")?;
    writeln!(self.out, "               Thank you for using dsgen!                       ")?;
    writeln!(self.out, "================================================================")?;
    writeln!(self.out)?;
    self.out.flush()
  }

  pub fn warn(&mut self, message: &str) -> io::Result<()> {
    writeln!(self.out, "WARNING: {}", message)
  }

  pub fn error(&mut self, message: &str) -> io::Result<()> {
    writeln!(self.out, "ERROR: {}", message)
  }

  /// Point the operator at the help screen
  pub fn help_hint(&mut self, program: &str, purpose: &str) -> io::Result<()> {
    writeln!(self.out, "Use {} --help {}", program, purpose)
  }

  /// Start a progress section
  pub fn section(&mut self, title: &str) -> io::Result<()> {
    writeln!(self.out)?;
    writeln!(self.out, "{}", title)
  }

  /// One completed progress step
  pub fn check(&mut self, text: &str) -> io::Result<()> {
    writeln!(self.out, "  \u{2713} {}", text)
  }

  pub fn success(&mut self, output: &Path, count: usize) -> io::Result<()> {
    writeln!(self.out)?;
    writeln!(self.out, "SUCCESS!")?;
    writeln!(self.out, "{}", BOX_RULE)?;
    writeln!(self.out, "| {}|", pad_right("Output file generated:", BOX_WIDTH))?;
    writeln!(self.out, "| {}|", pad_right(&output.display().to_string(), BOX_WIDTH))?;
    writeln!(self.out, "{}", BOX_RULE)?;
    writeln!(
      self.out,
      "| {}|",
      pad_right(&format!("Data structures included: {}", count), BOX_WIDTH)
    )?;
    writeln!(self.out, "{}", BOX_RULE)
  }

  /// Usage, examples and the catalog listing
  pub fn help(&mut self, program: &str, catalog: &Catalog) -> io::Result<()> {
    writeln!(self.out, "USAGE:")?;
    writeln!(
      self.out,
      "  {} <output_file> [-datastructure1] [-datastructure2] ... [-all]",
      program
    )?;
    writeln!(self.out)?;

    writeln!(self.out, "EXAMPLES:")?;
    writeln!(self.out, "  {} mycode.cpp -stack -linkedlist", program)?;
    writeln!(self.out, "  {} datastructures.cpp -queue -bst -heap", program)?;
    writeln!(
      self.out,
      "  {} complete.cpp -all              # Generate all data structures",
      program
    )?;
    writeln!(self.out)?;

    writeln!(self.out, "FLAGS:")?;
    writeln!(self.out, "  -h, --help   : Display this help information")?;
    writeln!(self.out, "  -all         : Include all available data structures")?;
    writeln!(self.out)?;

    self.catalog(catalog)
  }

  /// The catalog grouped by category
  pub fn catalog(&mut self, catalog: &Catalog) -> io::Result<()> {
    writeln!(self.out, "AVAILABLE DATA STRUCTURES:")?;

    for group in catalog.categories() {
      writeln!(self.out)?;
      writeln!(self.out, "  {} Data Structures:", group.category)?;
      writeln!(
        self.out,
        "  {}{}DESCRIPTION",
        pad_right("FLAG", 20),
        pad_right("NAME", 25)
      )?;
      writeln!(self.out, "  {}", repeat_str("-", 75))?;

      for item in group.members {
        writeln!(
          self.out,
          "  {}{}{}",
          pad_right(&item.flag, 20),
          pad_right(&item.display_name, 25),
          item.description
        )?;
      }
    }

    writeln!(self.out)
  }
}
