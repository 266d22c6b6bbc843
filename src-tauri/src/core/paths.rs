// ─── Path Normalization ───
// Narrow heuristic applied to user-supplied install paths before they
// reach the validators or the store. Only Windows drive-letter paths are
// touched; every other shape passes through unchanged so POSIX and UNC
// paths keep whatever form the picker handed over.

use std::sync::OnceLock;

use regex::Regex;

// Windows drive-letter absolute path, e.g. `C:\Games\Minecraft\`.
fn windows_drive_path() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^[a-zA-Z]:\\(?:[^<>:"/\\|?*\n]+\\?)*$"#).expect("valid pattern")
    })
}

/// Normalize a raw path string. Drive-letter paths lose surrounding
/// whitespace and any trailing backslash (the bare drive root `C:\` keeps
/// its separator); anything else is returned trimmed but otherwise as-is.
pub fn normalize_path(raw: &str) -> String {
    let trimmed = raw.trim();
    if !windows_drive_path().is_match(trimmed) {
        return trimmed.to_string();
    }

    let mut normalized = trimmed.trim_end_matches('\\').to_string();
    if normalized.ends_with(':') {
        normalized.push('\\');
    }
    normalized
}
