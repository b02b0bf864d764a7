use std::io::Write;

use crate::error::Result;
use crate::utils::repeat_str;

/// A writer for generated C++ text with indentation tracking
pub struct CodeWriter<W: Write> {
  /// The underlying writer
  writer: W,
  /// Current indentation level
  indent_level: usize,
  /// Number of spaces per indentation level
  indent_size: usize,
}

impl<W: Write> CodeWriter<W> {
  /// Create a new CodeWriter with four-space indentation
  pub fn new(writer: W) -> Self {
    Self::with_indent_size(writer, 4)
  }

  pub fn with_indent_size(writer: W, indent_size: usize) -> Self {
    Self {
      writer,
      indent_level: 0,
      indent_size,
    }
  }

  /// Increase the indentation level
  pub fn indent(&mut self) {
    self.indent_level += 1;
  }

  /// Decrease the indentation level
  pub fn dedent(&mut self) {
    if self.indent_level > 0 {
      self.indent_level -= 1;
    }
  }

  /// Write content with the current indentation, one line at a time,
  /// terminating it with a newline
  pub fn writeln(&mut self, content: &str) -> Result<()> {
    if content.is_empty() {
      return self.newline();
    }

    let indent = repeat_str(" ", self.indent_level * self.indent_size);
    for line in content.lines() {
      if !line.is_empty() {
        self.writer.write_all(indent.as_bytes())?;
        self.writer.write_all(line.as_bytes())?;
      }
      self.writer.write_all(b"\n")?;
    }

    Ok(())
  }

  /// Write a line exactly as given, ignoring indentation
  pub fn write_verbatim(&mut self, line: &str) -> Result<()> {
    self.writer.write_all(line.as_bytes())?;
    self.writer.write_all(b"\n")?;
    Ok(())
  }

  /// Write a newline
  pub fn newline(&mut self) -> Result<()> {
    self.writer.write_all(b"\n")?;
    Ok(())
  }

  /// Write a line comment
  pub fn write_comment(&mut self, comment: &str) -> Result<()> {
    self.writeln(&format!("// {}", comment))
  }

  /// Write a `/** ... */` block, one ` * ` line per entry.
  /// Empty entries become a bare ` *`.
  pub fn write_doc_comment<S: AsRef<str>>(&mut self, lines: &[S]) -> Result<()> {
    self.writeln("/**")?;
    for line in lines {
      let line = line.as_ref();
      if line.is_empty() {
        self.writeln(" *")?;
      } else {
        self.writeln(&format!(" * {}", line))?;
      }
    }
    self.writeln(" */")
  }

  /// Write a #include directive
  pub fn write_include(&mut self, header: &str, is_system: bool) -> Result<()> {
    if is_system {
      self.writeln(&format!("#include <{}>", header))
    } else {
      self.writeln(&format!("#include \"{}\"", header))
    }
  }

  /// Write a `using namespace` directive
  pub fn write_using_namespace(&mut self, namespace: &str) -> Result<()> {
    self.writeln(&format!("using namespace {};", namespace))
  }

  /// Begin a function definition
  pub fn begin_function(
    &mut self,
    ret_type: &str,
    name: &str,
    args: &[(&str, &str)],
  ) -> Result<()> {
    let args_formatted: Vec<String> = args
      .iter()
      .map(|(type_name, arg_name)| format!("{} {}", type_name, arg_name))
      .collect();

    self.writeln(&format!(
      "{} {}({}) {{",
      ret_type,
      name,
      args_formatted.join(", ")
    ))
  }

  /// End a function definition
  pub fn end_function(&mut self) -> Result<()> {
    self.writeln("}")
  }

  /// Write a variable declaration
  pub fn write_variable(&mut self, type_name: &str, var_name: &str) -> Result<()> {
    self.writeln(&format!("{} {};", type_name, var_name))
  }

  /// Flush the underlying writer
  pub fn flush(&mut self) -> Result<()> {
    self.writer.flush()?;
    Ok(())
  }
}
