use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mod loaders a manifest may declare — strongly typed, no magic strings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ModLoader {
    Forge,
    Fabric,
    NeoForge,
    Quilt,
}

impl std::fmt::Display for ModLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModLoader::Forge => write!(f, "forge"),
            ModLoader::Fabric => write!(f, "fabric"),
            ModLoader::NeoForge => write!(f, "neoforge"),
            ModLoader::Quilt => write!(f, "quilt"),
        }
    }
}

/// Per-installation manifest written by the installer as
/// `.sn-manifest.json` inside the install directory. Read-only here.
///
/// Parsing is strict: unknown fields reject the document, so a manifest
/// produced by a newer, incompatible tool never half-loads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Manifest {
    pub schema_version: String,
    pub minecraft: MinecraftSection,
    pub modpack: ModpackSection,
}

/// The game flavor the pack was installed against.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MinecraftSection {
    pub version: String,
    pub mod_loader: ModLoader,
    pub mod_loader_version: String,
}

/// Which modpack version is currently installed, and from where.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ModpackSection {
    pub id: String,
    pub name: String,
    pub version: String,
    pub last_updated: DateTime<Utc>,
    pub url: String,
    pub package: PackageSection,
    pub contents: ContentsSection,
}

/// The distributed archive this installation came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PackageSection {
    pub file_name: String,
    pub size: u64,
    pub hash: String,
}

/// What the pack put into the installation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContentsSection {
    pub mods: u32,
    pub mods_list: Vec<ModEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ModEntry {
    pub name: String,
    pub version: String,
}
