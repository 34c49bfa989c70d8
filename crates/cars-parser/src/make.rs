use std::collections::BTreeMap;

/// Derive the display label for a manufacturer file such as `merc.csv`.
///
/// The `.{extension}` suffix is stripped, the stem is passed through the
/// override table, and the first character is uppercased. The remainder of
/// the label keeps its original casing.
pub fn manufacturer_label(
    file_name: &str,
    extension: &str,
    overrides: &BTreeMap<String, String>,
) -> String {
    let suffix = format!(".{extension}");
    let stem = file_name.strip_suffix(&suffix).unwrap_or(file_name);
    let name = overrides.get(stem).map(String::as_str).unwrap_or(stem);
    capitalize_first(name)
}

fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
