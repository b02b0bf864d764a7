use anyhow::Context as AnyhowContext;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::assets::{AssetBody, AssetLoader, AssetSource};
use crate::catalog::Catalog;
use crate::code_writer::CodeWriter;
use crate::config::{format_timestamp, Clock};
use crate::console::Console;
use crate::error::{GenError, Result};
use crate::example::write_example_driver;

/// System headers every snippet relies on
pub const PREAMBLE_INCLUDES: [&str; 4] = ["iostream", "string", "stdexcept", "algorithm"];

/// Create the output file, truncating any previous content
pub fn open_output(path: &Path) -> Result<CodeWriter<BufWriter<File>>> {
  let file = File::create(path)
    .with_context(|| format!("Failed to create output file: {}", path.display()))
    .map_err(|e| GenError::OutputOpen {
      path: path.to_path_buf(),
      source: e,
    })?;
  Ok(CodeWriter::new(BufWriter::new(file)))
}

/// Load every distinct selected key once.
///
/// Failures are reported on the console and leave the key out of the map.
pub fn load_bodies<O: Write>(
  loader: &AssetLoader<'_>,
  keys: &[String],
  console: &mut Console<O>,
) -> Result<HashMap<String, AssetBody>> {
  let mut bodies: HashMap<String, AssetBody> = HashMap::new();

  console.section("Reading data structure implementations...")?;
  for key in keys {
    if bodies.contains_key(key) {
      continue;
    }

    match loader.load(key) {
      Ok(body) => {
        console.check(key)?;
        bodies.insert(key.clone(), body);
      }
      Err(err) => {
        log::warn!("skipping '{}': {:#}", key, anyhow::Error::from(err));
        console.error(&format!(
          "Code for {} not found at {}",
          key,
          loader.location(key).display()
        ))?;
      }
    }
  }

  Ok(bodies)
}

/// Writes the generated file: header, preamble, snippet bodies, driver
pub struct Assembler<'a> {
  catalog: &'a Catalog,
  clock: &'a dyn Clock,
}

impl<'a> Assembler<'a> {
  pub fn new(catalog: &'a Catalog, clock: &'a dyn Clock) -> Self {
    Self { catalog, clock }
  }

  /// Write the header comment listing the keys that will be emitted
  pub fn write_header<W: Write>(&self, writer: &mut CodeWriter<W>, included: &[&str]) -> Result<()> {
    let mut lines = vec![
      "Data Structures Implementation".to_string(),
      "Generated with dsgen".to_string(),
      format!("Date: {}", format_timestamp(self.clock)),
      String::new(),
      "Contains:".to_string(),
    ];
    lines.extend(
      included
        .iter()
        .map(|key| format!("- {}", self.catalog.display_name(key))),
    );

    writer.write_doc_comment(lines.as_slice())?;
    writer.newline()
  }

  /// Write the includes and namespace import shared by all snippets
  pub fn write_preamble<W: Write>(&self, writer: &mut CodeWriter<W>) -> Result<()> {
    for header in PREAMBLE_INCLUDES {
      writer.write_include(header, true)?;
    }
    writer.write_using_namespace("std")?;
    writer.newline()
  }

  /// Write the whole artifact and return how many bodies were emitted.
  ///
  /// Keys without a loaded body are skipped here; their failure was reported
  /// while loading.
  pub fn assemble<W: Write, O: Write>(
    &self,
    writer: &mut CodeWriter<W>,
    keys: &[String],
    bodies: &HashMap<String, AssetBody>,
    console: &mut Console<O>,
  ) -> Result<usize> {
    let included: Vec<&str> = keys
      .iter()
      .filter(|key| bodies.contains_key(key.as_str()))
      .map(|key| key.as_str())
      .collect();

    self.write_header(writer, &included)?;
    self.write_preamble(writer)?;

    console.section("Writing data structures to file...")?;
    for key in &included {
      let Some(body) = bodies.get(*key) else {
        continue;
      };
      console.check(&format!("Adding {}", self.catalog.display_name(key)))?;

      for line in &body.lines {
        writer.write_verbatim(line)?;
      }
      writer.newline()?;
    }

    write_example_driver(writer, keys, self.catalog)?;
    writer.flush()?;

    Ok(included.len())
  }
}

/// Generate `output` from the selected keys.
///
/// The output file is created before any snippet is read, so an unwritable
/// target aborts the run with nothing generated. A write failure later on
/// leaves whatever was flushed so far in place.
pub fn generate_file<O: Write>(
  output: &Path,
  keys: &[String],
  catalog: &Catalog,
  source: &dyn AssetSource,
  clock: &dyn Clock,
  console: &mut Console<O>,
) -> Result<usize> {
  let mut writer = open_output(output)?;
  let loader = AssetLoader::new(source)?;

  let bodies = load_bodies(&loader, keys, console)?;
  let count = Assembler::new(catalog, clock).assemble(&mut writer, keys, &bodies, console)?;

  console.section(&format!(
    "All data structures successfully written to {}",
    output.display()
  ))?;
  Ok(count)
}
