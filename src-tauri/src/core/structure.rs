// ─── Directory Structure Validator ───
// Decides whether a user-selected directory looks like a Minecraft
// installation by probing for well-known launcher artifacts.

use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::core::error::{SyncError, SyncResult};

/// Items that must all exist for a directory to count as a Minecraft install.
pub const REQUIRED_ITEMS: [&str; 2] = ["launcher_profiles.json", "versions"];

/// Items reported when present, for display only. Their absence never
/// invalidates the directory.
pub const OPTIONAL_ITEMS: [&str; 5] = ["assets", "mods", "config", "saves", "resourcepacks"];

/// Outcome of a structure check. `missing_items` only ever contains
/// required items.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureValidation {
    pub is_valid: bool,
    pub found_items: Vec<String>,
    pub missing_items: Vec<String>,
}

/// Check a candidate install directory for the expected launcher layout.
///
/// Returns `Err` only when the path cannot be inspected at all (missing,
/// not a directory, unreadable) — callers must be able to tell "this is
/// not Minecraft" apart from "could not look at this path".
pub async fn validate_structure(path: &Path) -> SyncResult<StructureValidation> {
    let metadata = tokio::fs::metadata(path).await.map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            SyncError::PathNotFound(path.to_path_buf())
        } else {
            SyncError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    if !metadata.is_dir() {
        return Err(SyncError::NotADirectory(path.to_path_buf()));
    }

    let mut found_items = Vec::new();
    let mut missing_items = Vec::new();

    for item in REQUIRED_ITEMS {
        if entry_exists(path, item).await {
            found_items.push(item.to_string());
        } else {
            missing_items.push(item.to_string());
        }
    }

    for item in OPTIONAL_ITEMS {
        if entry_exists(path, item).await {
            found_items.push(item.to_string());
        }
    }

    let is_valid = missing_items.is_empty();
    debug!(
        "Structure check at {:?}: valid = {}, missing = {:?}",
        path, is_valid, missing_items
    );

    Ok(StructureValidation {
        is_valid,
        found_items,
        missing_items,
    })
}

async fn entry_exists(dir: &Path, item: &str) -> bool {
    tokio::fs::try_exists(dir.join(item)).await.unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn fill(dir: &Path, items: &[&str]) {
        for item in items {
            if item.contains('.') {
                fs::write(dir.join(item), b"{}").unwrap();
            } else {
                fs::create_dir(dir.join(item)).unwrap();
            }
        }
    }

    #[tokio::test]
    async fn complete_directory_is_valid() {
        let dir = tempdir().unwrap();
        fill(dir.path(), &["launcher_profiles.json", "versions"]);

        let result = validate_structure(dir.path()).await.unwrap();
        assert!(result.is_valid);
        assert!(result.missing_items.is_empty());
        assert_eq!(result.found_items.len(), 2);
    }

    #[tokio::test]
    async fn missing_profiles_file_invalidates() {
        let dir = tempdir().unwrap();
        fill(dir.path(), &["versions"]);

        let result = validate_structure(dir.path()).await.unwrap();
        assert!(!result.is_valid);
        assert_eq!(result.found_items, vec!["versions"]);
        assert_eq!(result.missing_items, vec!["launcher_profiles.json"]);
    }

    #[tokio::test]
    async fn each_missing_item_listed_once() {
        let dir = tempdir().unwrap();

        let result = validate_structure(dir.path()).await.unwrap();
        assert!(!result.is_valid);
        assert_eq!(
            result.missing_items,
            vec!["launcher_profiles.json", "versions"]
        );
    }

    #[tokio::test]
    async fn optional_items_reported_but_never_required() {
        let dir = tempdir().unwrap();
        fill(
            dir.path(),
            &["launcher_profiles.json", "versions", "mods", "saves"],
        );

        let result = validate_structure(dir.path()).await.unwrap();
        assert!(result.is_valid);
        assert!(result.found_items.contains(&"mods".to_string()));
        assert!(result.found_items.contains(&"saves".to_string()));
        assert!(result.missing_items.is_empty());
    }

    #[tokio::test]
    async fn nonexistent_path_is_a_distinct_failure() {
        let dir = tempdir().unwrap();
        let ghost = dir.path().join("nope");

        let err = validate_structure(&ghost).await.unwrap_err();
        assert!(matches!(err, SyncError::PathNotFound(_)));
    }

    #[tokio::test]
    async fn file_path_is_not_a_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("some-file.txt");
        fs::write(&file, b"x").unwrap();

        let err = validate_structure(&file).await.unwrap_err();
        assert!(matches!(err, SyncError::NotADirectory(_)));
    }
}
