//! Example driver synthesis.
//!
//! Every catalog key maps to a short list of [`Step`]s describing the calls
//! made against one instance of the generated class. A single routine renders
//! any step list, so adding a data structure only means adding a table entry.

use std::io::Write;

use crate::catalog::Catalog;
use crate::code_writer::CodeWriter;
use crate::error::Result;
use crate::utils::{repeat_str, to_instance_name, to_type_name};

/// Something printed as part of a `cout` chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
  /// `v.method(args)`
  Call(&'static str, &'static [i32]),
  /// `(v.method(args) ? "Success" : "Not found")`
  Outcome(&'static str, &'static [i32]),
}

/// One statement of an example call sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
  /// `v.method(args);`
  Call(&'static str, &'static [i32]),
  /// `cout << "label" << value ... << endl;`
  Print(&'static [(&'static str, Value)]),
  /// `cout << "label";` without a line break
  Label(&'static str),
  /// Out-parameter lookup printed only when found
  Lookup {
    method: &'static str,
    key: i32,
    label: &'static str,
  },
}

const STACK: &[Step] = &[
  Step::Call("push", &[10]),
  Step::Call("push", &[20]),
  Step::Call("push", &[30]),
  Step::Print(&[("Top element: ", Value::Call("top", &[]))]),
  Step::Call("display", &[]),
  Step::Print(&[("Pop: ", Value::Call("pop", &[]))]),
  Step::Call("display", &[]),
];

const QUEUE: &[Step] = &[
  Step::Call("enqueue", &[10]),
  Step::Call("enqueue", &[20]),
  Step::Call("enqueue", &[30]),
  Step::Print(&[("Front element: ", Value::Call("front", &[]))]),
  Step::Call("display", &[]),
  Step::Print(&[("Dequeue: ", Value::Call("dequeue", &[]))]),
  Step::Call("display", &[]),
];

const LINKED_LIST: &[Step] = &[
  Step::Call("insertAtBeginning", &[30]),
  Step::Call("insertAtBeginning", &[20]),
  Step::Call("insertAtEnd", &[40]),
  Step::Call("display", &[]),
  Step::Print(&[("Deleting 20: ", Value::Outcome("deleteNode", &[20]))]),
  Step::Call("display", &[]),
];

const BST: &[Step] = &[
  Step::Call("insert", &[50]),
  Step::Call("insert", &[30]),
  Step::Call("insert", &[70]),
  Step::Call("insert", &[20]),
  Step::Call("insert", &[40]),
  Step::Label("Inorder traversal: "),
  Step::Call("inorderTraversal", &[]),
  Step::Print(&[("Removing 30: ", Value::Outcome("remove", &[30]))]),
  Step::Call("inorderTraversal", &[]),
];

const HEAP: &[Step] = &[
  Step::Call("insert", &[30]),
  Step::Call("insert", &[10]),
  Step::Call("insert", &[20]),
  Step::Call("insert", &[5]),
  Step::Call("display", &[]),
  Step::Print(&[("Min element: ", Value::Call("getMin", &[]))]),
  Step::Print(&[("Extracting min: ", Value::Call("extractMin", &[]))]),
  Step::Call("display", &[]),
];

const HASH_TABLE: &[Step] = &[
  Step::Call("insert", &[1, 100]),
  Step::Call("insert", &[2, 200]),
  Step::Call("insert", &[3, 300]),
  Step::Lookup {
    method: "get",
    key: 2,
    label: "Value for key 2: ",
  },
  Step::Call("display", &[]),
  Step::Print(&[("Removing key 2: ", Value::Outcome("remove", &[2]))]),
  Step::Call("display", &[]),
];

const DEQUE: &[Step] = &[
  Step::Call("insertRear", &[10]),
  Step::Call("insertFront", &[5]),
  Step::Call("insertRear", &[20]),
  Step::Call("display", &[]),
  Step::Print(&[
    ("Front: ", Value::Call("getFront", &[])),
    (", Rear: ", Value::Call("getRear", &[])),
  ]),
  Step::Print(&[("Deleting from front: ", Value::Call("deleteFront", &[]))]),
  Step::Call("display", &[]),
];

const ARRAY: &[Step] = &[
  Step::Call("pushBack", &[10]),
  Step::Call("pushBack", &[20]),
  Step::Call("pushBack", &[30]),
  Step::Call("insert", &[1, 15]),
  Step::Call("display", &[]),
  Step::Print(&[("Element at position 2: ", Value::Call("get", &[2]))]),
  Step::Call("removeAt", &[1]),
  Step::Call("display", &[]),
];

/// Key to call sequence
const RULES: &[(&str, &[Step])] = &[
  ("stack", STACK),
  ("queue", QUEUE),
  ("linkedlist", LINKED_LIST),
  ("doublylinkedlist", LINKED_LIST),
  ("circularlist", LINKED_LIST),
  ("bst", BST),
  ("heap", HEAP),
  ("hashtable", HASH_TABLE),
  ("deque", DEQUE),
  ("array", ARRAY),
];

/// The call sequence for `key`, if one is defined
pub fn rule_for(key: &str) -> Option<&'static [Step]> {
  RULES
    .iter()
    .find(|(name, _)| *name == key)
    .map(|(_, steps)| *steps)
}

fn render_args(args: &[i32]) -> String {
  args
    .iter()
    .map(|a| a.to_string())
    .collect::<Vec<_>>()
    .join(", ")
}

fn render_value(var: &str, value: &Value) -> String {
  match value {
    Value::Call(method, args) => format!("{}.{}({})", var, method, render_args(args)),
    Value::Outcome(method, args) => format!(
      "({}.{}({}) ? \"Success\" : \"Not found\")",
      var,
      method,
      render_args(args)
    ),
  }
}

/// Render one step against the instance named `var`
pub fn render_step(var: &str, step: &Step) -> Vec<String> {
  match step {
    Step::Call(method, args) => vec![format!("{}.{}({});", var, method, render_args(args))],
    Step::Print(parts) => {
      let chain: String = parts
        .iter()
        .map(|(label, value)| format!(" << \"{}\" << {}", label, render_value(var, value)))
        .collect();
      vec![format!("cout{} << endl;", chain)]
    }
    Step::Label(label) => vec![format!("cout << \"{}\";", label)],
    Step::Lookup { method, key, label } => vec![
      "int value;".to_string(),
      format!("if ({}.{}({}, value)) {{", var, method, key),
      format!("    cout << \"{}\" << value << endl;", label),
      "}".to_string(),
    ],
  }
}

/// Write the `main` routine exercising every selected key.
///
/// Keys are grouped by category in order of first appearance in `keys`.
pub fn write_example_driver<W: Write, S: AsRef<str>>(
  writer: &mut CodeWriter<W>,
  keys: &[S],
  catalog: &Catalog,
) -> Result<()> {
  writer.write_doc_comment(&["Example usage of implemented data structures"])?;
  writer.begin_function("int", "main", &[])?;
  writer.indent();

  writer.writeln("cout << \"+----------------------------------------------+\" << endl;")?;
  writer.writeln("cout << \"|  Data Structures Implementation Example     |\" << endl;")?;
  writer.writeln("cout << \"+----------------------------------------------+\" << endl << endl;")?;

  for group in catalog.group(keys) {
    let title = format!("{} Data Structures", group.category);
    writer.write_comment(&format!("{} Examples", title))?;
    writer.writeln(&format!("cout << \"\\n{}:\" << endl;", title))?;
    writer.writeln(&format!(
      "cout << \"{}\" << endl;",
      repeat_str("-", title.chars().count())
    ))?;
    writer.newline()?;

    for item in group.members {
      let type_name = to_type_name(&item.display_name);
      let var = to_instance_name(&item.key);

      writer.write_comment(&format!("{} example:", item.display_name))?;
      writer.writeln(&format!(
        "cout << \"\\n{} operations:\" << endl;",
        item.display_name
      ))?;
      writer.write_variable(&type_name, &var)?;

      match rule_for(&item.key) {
        Some(steps) => {
          for step in steps {
            for line in render_step(&var, step) {
              writer.writeln(&line)?;
            }
          }
        }
        None => {
          log::debug!("no example rule for '{}', emitting placeholder", item.key);
          writer.write_comment(&format!("Add example usage for {} here", item.display_name))?;
          writer.writeln(&format!("{}.display();", var))?;
        }
      }

      writer.newline()?;
    }
  }

  writer.writeln("cout << \"\\nAll data structures implemented successfully!\" << endl;")?;
  writer.writeln("return 0;")?;
  writer.dedent();
  writer.end_function()
}
