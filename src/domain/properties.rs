//! `key=value` metadata files shipped with a project export.

/// Value of the first `key=` line, trimmed. Empty values count as missing.
pub fn property_value(content: &str, key: &str) -> Option<String> {
    content.lines().find_map(|line| {
        let (name, value) = line.split_once('=')?;
        (name.trim() == key).then(|| value.trim().to_string()).filter(|value| !value.is_empty())
    })
}
