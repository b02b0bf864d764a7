// End-to-end behavior of the dsgen binary: exit codes, operator output and
// the generated file.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn dsgen(args: &[&str]) -> Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_dsgen"))
        .args(args)
        .env_remove("DSGEN_SNIPPETS_DIR")
        .output()
        .context("failed to execute dsgen")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("temp path is UTF-8")
}

// Stack then queue, each exercised with its fixed call sequence.
#[test]
fn stack_and_queue_end_to_end() -> Result<()> {
    let dir = TempDir::new()?;
    let output = dir.path().join("out.txt");

    let result = dsgen(&[path_arg(&output), "-stack", "-queue"])?;
    assert!(result.status.success(), "dsgen failed: {:?}", result);

    let generated = fs::read_to_string(&output)?;
    assert_eq!(generated.matches("class Stack {").count(), 1);
    assert_eq!(generated.matches("class Queue {").count(), 1);

    let stack_body = generated.find("class Stack {").unwrap();
    let queue_body = generated.find("class Queue {").unwrap();
    let main = generated.find("int main() {").unwrap();
    assert!(stack_body < queue_body && queue_body < main);

    let driver = &generated[main..];
    assert!(driver.contains(
        "    Stack stack;\n    stack.push(10);\n    stack.push(20);\n    stack.push(30);\n    cout << \"Top element: \" << stack.top() << endl;\n    stack.display();\n    cout << \"Pop: \" << stack.pop() << endl;\n    stack.display();\n"
    ));
    assert!(driver.contains(
        "    Queue queue;\n    queue.enqueue(10);\n    queue.enqueue(20);\n    queue.enqueue(30);\n    cout << \"Front element: \" << queue.front() << endl;\n    queue.display();\n    cout << \"Dequeue: \" << queue.dequeue() << endl;\n    queue.display();\n"
    ));
    assert!(generated.ends_with("    return 0;\n}\n"));

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Data structures included: 2"));
    assert!(!generated.contains("SUCCESS!"));

    Ok(())
}

// Boilerplate from the snippets appears only once, in the shared preamble.
#[test]
fn preamble_is_consolidated() -> Result<()> {
    let dir = TempDir::new()?;
    let output = dir.path().join("all.cpp");

    let result = dsgen(&[path_arg(&output), "-all"])?;
    assert!(result.status.success());

    let generated = fs::read_to_string(&output)?;
    assert_eq!(generated.matches("#include <iostream>").count(), 1);
    assert_eq!(generated.matches("using namespace std;").count(), 1);

    let header_end = generated.find(" */").unwrap();
    let header = &generated[..header_end];
    assert_eq!(header.lines().filter(|l| l.starts_with(" * - ")).count(), 10);

    Ok(())
}

#[test]
fn unknown_flag_warns_but_succeeds() -> Result<()> {
    let dir = TempDir::new()?;
    let output = dir.path().join("out.cpp");

    let result = dsgen(&[path_arg(&output), "-foobar", "-stack"])?;
    assert_eq!(result.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("WARNING: Unknown flag: -foobar"));

    let generated = fs::read_to_string(&output)?;
    assert!(generated.contains("class Stack {"));
    assert!(!generated.contains("class Queue {"));

    Ok(())
}

#[test]
fn no_flags_fails_without_writing() -> Result<()> {
    let dir = TempDir::new()?;
    let output = dir.path().join("out.cpp");

    let result = dsgen(&[path_arg(&output)])?;
    assert_eq!(result.status.code(), Some(1));
    assert!(!output.exists());

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("ERROR: No data structures were selected."));

    Ok(())
}

#[test]
fn existing_file_untouched_when_nothing_selected() -> Result<()> {
    let dir = TempDir::new()?;
    let output = dir.path().join("keep.cpp");
    fs::write(&output, "original")?;

    let result = dsgen(&[path_arg(&output), "stray"])?;
    assert_eq!(result.status.code(), Some(1));
    assert_eq!(fs::read_to_string(&output)?, "original");

    Ok(())
}

#[test]
fn missing_output_path_is_usage_error() -> Result<()> {
    let result = dsgen(&[])?;
    assert_eq!(result.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("ERROR: Not enough arguments."));
    assert!(stdout.contains("--help for usage information."));

    Ok(())
}

#[test]
fn help_wins_over_other_arguments() -> Result<()> {
    let dir = TempDir::new()?;
    let output = dir.path().join("out.cpp");

    for flag in ["-h", "--help", "-help"] {
        let result = dsgen(&[path_arg(&output), "-stack", flag])?;
        assert_eq!(result.status.code(), Some(0), "{flag} should exit 0");

        let stdout = String::from_utf8_lossy(&result.stdout);
        assert!(stdout.contains("USAGE:"));
        assert!(stdout.contains("-doublylinkedlist"));
    }
    assert!(!output.exists());

    Ok(())
}

// Snippets can be overridden from a directory; missing ones are skipped.
#[test]
fn snippets_dir_override_skips_missing_assets() -> Result<()> {
    let assets = TempDir::new()?;
    fs::write(
        assets.path().join("heap.cpp"),
        "#include <vector>\nclass MinHeap { /* custom */ };\n",
    )?;
    let dir = TempDir::new()?;
    let output = dir.path().join("out.cpp");

    let result = Command::new(env!("CARGO_BIN_EXE_dsgen"))
        .args([path_arg(&output), "-heap", "-bst"])
        .env("DSGEN_SNIPPETS_DIR", assets.path())
        .output()
        .context("failed to execute dsgen")?;
    assert!(result.status.success());

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("ERROR: Code for bst not found at"));
    assert!(stdout.contains("Data structures included: 1"));

    let generated = fs::read_to_string(&output)?;
    assert!(generated.contains("class MinHeap { /* custom */ };"));
    assert!(!generated.contains("#include <vector>"));
    assert!(generated.contains(" * - Min Heap\n"));
    assert!(!generated.contains(" * - Binary Search Tree\n"));

    Ok(())
}

#[test]
fn unwritable_output_fails() -> Result<()> {
    let dir = TempDir::new()?;
    let output = dir.path().join("no-such-dir").join("out.cpp");

    let result = dsgen(&[path_arg(&output), "-stack"])?;
    assert_eq!(result.status.code(), Some(1));
    assert!(!output.exists());

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("ERROR: Failed to open output file"));

    Ok(())
}

// Output paths are taken byte for byte, even when they are not UTF-8.
#[cfg(target_os = "linux")]
#[test]
fn non_utf8_output_path_is_written() -> Result<()> {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = TempDir::new()?;
    let output = dir.path().join(OsStr::from_bytes(b"out\xff.cpp"));

    let result = Command::new(env!("CARGO_BIN_EXE_dsgen"))
        .arg(&output)
        .arg("-stack")
        .arg(OsStr::from_bytes(b"-bad\xfe"))
        .env_remove("DSGEN_SNIPPETS_DIR")
        .output()
        .context("failed to execute dsgen")?;
    assert_eq!(result.status.code(), Some(0), "dsgen failed: {:?}", result);

    let generated = fs::read_to_string(&output)?;
    assert!(generated.contains("class Stack {"));

    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("WARNING: Unknown flag: -bad\u{FFFD}"));

    Ok(())
}
