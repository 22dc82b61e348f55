const DEFAULT_NAME: &str = "World";

/// Formats the greeting for an optional name.
///
/// Falls back to `World` when no name is given or the given name is empty
/// after trimming surrounding whitespace. A name that survives the check is
/// rendered verbatim.
pub fn say_hello(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => format!("Hello, {name}!"),
        _ => format!("Hello, {DEFAULT_NAME}!"),
    }
}
