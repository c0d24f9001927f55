//! Line formatting and the name/target predicates used while rendering.

/// Whether `name` starts with the hidden marker.
pub fn is_hidden(name: &str, marker: char) -> bool {
    name.starts_with(marker)
}

/// Whether the suffix of `name` from its last `.` equals `ext` exactly.
///
/// `ext` includes the leading dot (e.g. `".fish"`). Matching is
/// case-sensitive; a name without a dot has no extension.
pub fn has_extension(name: &str, ext: &str) -> bool {
    match name.rfind('.') {
        Some(idx) => &name[idx..] == ext,
        None => false,
    }
}

/// Replace the first occurrence of `root` in `target` with `token`.
///
/// An unset or empty `root` leaves the target unchanged.
pub fn substitute_workspace_root(target: &str, root: Option<&str>, token: &str) -> String {
    match root {
        Some(root) if !root.is_empty() => target.replacen(root, token, 1),
        _ => target.to_string(),
    }
}

/// A plain entry line: prefix followed by the name.
pub fn entry_line(prefix: &str, name: &str) -> String {
    format!("{prefix}{name}")
}

/// A symlink line: prefix, name, arrow and (already substituted) target.
pub fn symlink_line(prefix: &str, name: &str, target: &str) -> String {
    format!("{prefix}{name} -> {target}")
}
