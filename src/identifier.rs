/// Test-case identifiers derived from log file names
///
/// Solver logs are named `<test case>.<test ext>.<run ext>`, e.g.
/// `uf20-01.cnf.log`. The identifier is the base name with its last two
/// dot-separated components removed.
use std::path::Path;

/// Derive the identifier recorded in the first column of every row.
///
/// Only `/` separates path segments. A base name with fewer than three
/// dot-separated components yields an empty identifier.
pub fn test_case_identifier(input: &Path) -> String {
    let path = input.to_string_lossy();
    let base_name = path.rsplit('/').next().unwrap_or_default();

    let components: Vec<&str> = base_name.split('.').collect();
    let keep = components.len().saturating_sub(2);
    components[..keep].join(".")
}
