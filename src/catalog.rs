/// Metadata for one generatable data structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDescriptor {
  /// Identifier used for asset lookup and example rules
  pub key: String,
  /// Human readable name, also the source of the generated class name
  pub display_name: String,
  /// One-line description shown in the help listing
  pub description: String,
  /// Command-line token selecting this item
  pub flag: String,
  /// Category used to group items in help and in the example driver
  pub category: String,
}

impl ItemDescriptor {
  /// Create a descriptor whose flag is `-<key>`
  pub fn new(key: &str, display_name: &str, description: &str, category: &str) -> Self {
    Self {
      key: key.to_string(),
      display_name: display_name.to_string(),
      description: description.to_string(),
      flag: format!("-{}", key),
      category: category.to_string(),
    }
  }
}

/// A group of items sharing a category, in first-appearance order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
  pub category: &'a str,
  pub members: Vec<&'a ItemDescriptor>,
}

/// Ordered, immutable list of available items.
///
/// Declaration order is the order `-all` selects in and the order categories
/// are first seen in.
#[derive(Debug, Clone)]
pub struct Catalog {
  items: Vec<ItemDescriptor>,
}

impl Catalog {
  /// Build a catalog from descriptors. Later duplicates of a key are dropped.
  pub fn new(items: Vec<ItemDescriptor>) -> Self {
    let mut unique: Vec<ItemDescriptor> = Vec::with_capacity(items.len());
    for item in items {
      if unique.iter().any(|existing| existing.key == item.key) {
        log::warn!("duplicate catalog key '{}' ignored", item.key);
        continue;
      }
      unique.push(item);
    }
    Self { items: unique }
  }

  /// The data structures shipped with the tool
  pub fn builtin() -> Self {
    Self::new(vec![
      ItemDescriptor::new("stack", "Stack", "Last-In-First-Out (LIFO) data structure", "Linear"),
      ItemDescriptor::new("queue", "Queue", "First-In-First-Out (FIFO) data structure", "Linear"),
      ItemDescriptor::new("deque", "Deque", "Double-ended Queue implementation", "Linear"),
      ItemDescriptor::new(
        "array",
        "Dynamic Array",
        "Dynamic Array implementation (similar to C++ vector)",
        "Linear",
      ),
      ItemDescriptor::new("linkedlist", "Linked List", "Singly Linked List implementation", "Linked"),
      ItemDescriptor::new(
        "doublylinkedlist",
        "Doubly Linked List",
        "Bi-directional linked nodes",
        "Linked",
      ),
      ItemDescriptor::new(
        "circularlist",
        "Circular Linked List",
        "Circular chain of linked nodes",
        "Linked",
      ),
      ItemDescriptor::new("bst", "Binary Search Tree", "Ordered binary tree implementation", "Tree"),
      ItemDescriptor::new("heap", "Min Heap", "Complete binary tree with heap property", "Tree"),
      ItemDescriptor::new(
        "hashtable",
        "Hash Table",
        "Key-value pairs with O(1) access time",
        "Hash-based",
      ),
    ])
  }

  pub fn items(&self) -> &[ItemDescriptor] {
    &self.items
  }

  /// Look up a descriptor by key
  pub fn get(&self, key: &str) -> Option<&ItemDescriptor> {
    self.items.iter().find(|item| item.key == key)
  }

  /// Look up a descriptor by its command-line flag
  pub fn by_flag(&self, flag: &str) -> Option<&ItemDescriptor> {
    self.items.iter().find(|item| item.flag == flag)
  }

  /// Display name for a key, falling back to the key itself
  pub fn display_name<'a>(&'a self, key: &'a str) -> &'a str {
    self
      .get(key)
      .map(|item| item.display_name.as_str())
      .unwrap_or(key)
  }

  /// Every key in declaration order
  pub fn keys(&self) -> Vec<String> {
    self.items.iter().map(|item| item.key.clone()).collect()
  }

  /// Group all catalog items by category in declaration order
  pub fn categories(&self) -> Vec<CategoryGroup<'_>> {
    self.group(self.items.iter().map(|item| item.key.as_str()))
  }

  /// Group the given keys by category.
  ///
  /// Categories appear in the order their first member appears in `keys`, and
  /// members keep the order of `keys`. Keys missing from the catalog are
  /// skipped.
  pub fn group<'a, I, S>(&'a self, keys: I) -> Vec<CategoryGroup<'a>>
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut groups: Vec<CategoryGroup<'a>> = Vec::new();

    for key in keys {
      let Some(item) = self.get(key.as_ref()) else {
        log::debug!("key '{}' has no catalog entry, not grouped", key.as_ref());
        continue;
      };

      match groups.iter_mut().find(|g| g.category == item.category) {
        Some(group) => group.members.push(item),
        None => groups.push(CategoryGroup {
          category: &item.category,
          members: vec![item],
        }),
      }
    }

    groups
  }
}
