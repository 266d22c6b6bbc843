// ─── Reconciliation Façade ───
// The single entry point the UI uses after a directory is chosen.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::core::error::SyncResult;
use crate::core::manifest::{validate_manifest, ManifestValidation};
use crate::core::structure::{validate_structure, StructureValidation};

/// Composite view of one install directory: does it look like a Minecraft
/// installation, and does it carry a usable modpack manifest. The two
/// facts are orthogonal; no cross-validation happens here.
#[derive(Debug, Clone, Serialize)]
pub struct InstallationStatus {
    pub structure: StructureValidation,
    pub manifest: ManifestValidation,
}

/// Run both validators against the same path. Only the structure check can
/// fail (path not inspectable); manifest problems degrade to flags.
pub async fn check_installation(path: &Path) -> SyncResult<InstallationStatus> {
    let structure = validate_structure(path).await?;
    let manifest = validate_manifest(path).await;

    debug!(
        "Installation check at {:?}: structure valid = {}, manifest usable = {}",
        path, structure.is_valid, manifest.is_valid
    );

    Ok(InstallationStatus { structure, manifest })
}
