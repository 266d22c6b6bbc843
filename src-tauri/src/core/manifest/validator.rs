// ─── Manifest Reader/Validator ───
// Locates and schema-checks the per-installation manifest. A broken or
// absent manifest is an expected state (fresh directory, manual edits,
// partial writes) and degrades to "no usable manifest" instead of failing
// the surrounding reconciliation flow.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use super::model::Manifest;

/// Manifest file name inside the install directory.
pub const MANIFEST_FILE: &str = ".sn-manifest.json";

/// Outcome of a manifest check. `manifest_data` is only populated when
/// the document passed every shape and semantic check.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestValidation {
    pub has_manifest: bool,
    pub is_valid: bool,
    pub manifest_data: Option<Manifest>,
}

impl ManifestValidation {
    fn absent() -> Self {
        Self {
            has_manifest: false,
            is_valid: false,
            manifest_data: None,
        }
    }

    fn unusable() -> Self {
        Self {
            has_manifest: true,
            is_valid: false,
            manifest_data: None,
        }
    }
}

/// Read and validate `.sn-manifest.json` under `path`. Infallible by
/// design: every failure mode is folded into the returned flags and
/// logged for diagnostics.
pub async fn validate_manifest(path: &Path) -> ManifestValidation {
    let manifest_path = path.join(MANIFEST_FILE);

    let present = tokio::fs::try_exists(&manifest_path)
        .await
        .unwrap_or(false);
    if !present {
        debug!("No manifest at {:?}", manifest_path);
        return ManifestValidation::absent();
    }

    let raw = match tokio::fs::read_to_string(&manifest_path).await {
        Ok(raw) => raw,
        Err(source) => {
            warn!("Failed to read manifest {:?}: {}", manifest_path, source);
            return ManifestValidation::unusable();
        }
    };

    if raw.trim().is_empty() {
        warn!("Manifest {:?} is empty", manifest_path);
        return ManifestValidation::unusable();
    }

    let manifest: Manifest = match serde_json::from_str(&raw) {
        Ok(manifest) => manifest,
        Err(err) => {
            warn!(
                "Manifest {:?} failed schema validation: {}",
                manifest_path, err
            );
            return ManifestValidation::unusable();
        }
    };

    if let Err(err) = Url::parse(&manifest.modpack.url) {
        warn!(
            "Manifest {:?} has invalid modpack.url '{}': {}",
            manifest_path, manifest.modpack.url, err
        );
        return ManifestValidation::unusable();
    }

    debug!(
        "Manifest {:?} ok: {} {}",
        manifest_path, manifest.modpack.name, manifest.modpack.version
    );

    ManifestValidation {
        has_manifest: true,
        is_valid: true,
        manifest_data: Some(manifest),
    }
}
