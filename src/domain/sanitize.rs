//! File name sanitization for every name written to the output tree.

/// Characters rejected by at least one supported filesystem.
const RESERVED: [char; 9] = ['<', '>', '/', '\\', '?', ':', '*', '|', '"'];

/// Replace filesystem-reserved characters with `_`.
///
/// Entity names coming from the platform routinely contain such characters,
/// e.g. `jb.sqlServer.table1->table2 [ETL_log]`.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars().map(|c| if RESERVED.contains(&c) { '_' } else { c }).collect()
}
