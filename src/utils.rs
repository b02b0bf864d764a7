use std::path::Path;

/// Get the file name from a path
pub fn get_file_name(path: &Path) -> Option<String> {
    path.file_name().and_then(|name| name.to_str()).map(String::from)
}

/// Repeat a string n times
pub fn repeat_str(s: &str, n: usize) -> String {
    s.repeat(n)
}

/// Class name used in generated code: the display name without spaces
pub fn to_type_name(display_name: &str) -> String {
    display_name.chars().filter(|c| *c != ' ').collect()
}

/// Variable name used in generated code.
///
/// Spaces and underscores are dropped and the first character is lowercased.
pub fn to_instance_name(key: &str) -> String {
    let mut chars = key.chars().filter(|c| *c != ' ' && *c != '_');

    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Pad `s` with spaces on the right up to `width` characters
pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}
