use anyhow::{anyhow, Context as AnyhowContext};
use regex::Regex;
use std::fs;
use std::path::PathBuf;

use crate::error::{GenError, Result};

/// File extension shared by every snippet
pub const ASSET_EXTENSION: &str = "cpp";

/// Snippets compiled into the binary, keyed by catalog key
const EMBEDDED: &[(&str, &str)] = &[
  ("stack", include_str!("../snippets/stack.cpp")),
  ("queue", include_str!("../snippets/queue.cpp")),
  ("deque", include_str!("../snippets/deque.cpp")),
  ("array", include_str!("../snippets/array.cpp")),
  ("linkedlist", include_str!("../snippets/linkedlist.cpp")),
  ("doublylinkedlist", include_str!("../snippets/doublylinkedlist.cpp")),
  ("circularlist", include_str!("../snippets/circularlist.cpp")),
  ("bst", include_str!("../snippets/bst.cpp")),
  ("heap", include_str!("../snippets/heap.cpp")),
  ("hashtable", include_str!("../snippets/hashtable.cpp")),
];

/// Read-only mapping from key to snippet text
pub trait AssetSource {
  /// Where the snippet for `key` lives, used in diagnostics
  fn location(&self, key: &str) -> PathBuf;

  /// Raw snippet text for `key`
  fn read(&self, key: &str) -> Result<String>;
}

/// Snippets embedded at build time
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedAssets;

impl AssetSource for EmbeddedAssets {
  fn location(&self, key: &str) -> PathBuf {
    PathBuf::from("snippets").join(format!("{}.{}", key, ASSET_EXTENSION))
  }

  fn read(&self, key: &str) -> Result<String> {
    EMBEDDED
      .iter()
      .find(|(name, _)| *name == key)
      .map(|(_, text)| text.to_string())
      .ok_or_else(|| GenError::AssetNotFound {
        key: key.to_string(),
        path: self.location(key),
        source: anyhow!("no embedded snippet"),
      })
  }
}

/// Snippets read at run time from `<root>/<key>.cpp`
#[derive(Debug, Clone)]
pub struct DirAssets {
  root: PathBuf,
}

impl DirAssets {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }
}

impl AssetSource for DirAssets {
  fn location(&self, key: &str) -> PathBuf {
    self.root.join(format!("{}.{}", key, ASSET_EXTENSION))
  }

  fn read(&self, key: &str) -> Result<String> {
    let path = self.location(key);
    fs::read_to_string(&path)
      .with_context(|| format!("Failed to read file: {}", path.display()))
      .map_err(|e| GenError::AssetNotFound {
        key: key.to_string(),
        path: path.clone(),
        source: e,
      })
  }
}

/// Filtered lines of one snippet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetBody {
  pub key: String,
  pub lines: Vec<String>,
}

/// Loads snippets and strips lines the shared preamble already provides
pub struct AssetLoader<'a> {
  source: &'a dyn AssetSource,
  boilerplate: Regex,
}

impl<'a> AssetLoader<'a> {
  pub fn new(source: &'a dyn AssetSource) -> Result<Self> {
    let boilerplate = Regex::new(r"#include|using namespace").map_err(GenError::Regex)?;
    Ok(Self {
      source,
      boilerplate,
    })
  }

  pub fn location(&self, key: &str) -> PathBuf {
    self.source.location(key)
  }

  /// Load the body for `key`
  pub fn load(&self, key: &str) -> Result<AssetBody> {
    let text = self.source.read(key)?;
    let lines = self.filter(&text);
    log::debug!(
      "loaded {} line(s) for '{}' from {}",
      lines.len(),
      key,
      self.source.location(key).display()
    );

    Ok(AssetBody {
      key: key.to_string(),
      lines,
    })
  }

  /// Drop include directives, namespace imports and empty lines
  pub fn filter(&self, text: &str) -> Vec<String> {
    text
      .lines()
      .filter(|line| !line.is_empty() && !self.boilerplate.is_match(line))
      .map(String::from)
      .collect()
  }
}
