/// Joins a parent path and a field name with `/`.
///
/// Root-level fields carry no prefix, so a leading slash never appears in
/// reported paths.
pub fn join(parent: &str, field: &str) -> String {
    if parent.is_empty() {
        field.to_string()
    } else {
        format!("{parent}/{field}")
    }
}
