// ─── Config Store ───
// Durable registry of the modpacks the user tracks across sessions.
// Every mutation is a full read-modify-write of `sn-config.json` with an
// atomic replace of the backing file, so a reader never observes a
// half-written store.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{info, warn};
use url::Url;

use super::model::{Config, Modpack};
use crate::core::error::{SyncError, SyncResult};

/// Store file name inside the app data directory.
pub const CONFIG_FILE: &str = "sn-config.json";

pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(CONFIG_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the store, creating or repairing it as needed. A missing file
    /// yields a fresh empty store; unreadable content is backed up and
    /// replaced by one. Only genuine storage failures (permissions, full
    /// disk) surface as errors.
    pub async fn read_or_create(&self) -> SyncResult<Config> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) if raw.trim().is_empty() => {
                warn!("Config store {:?} is empty, reinitializing", self.path);
                self.reinitialize().await
            }
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(config) => Ok(config),
                Err(err) => {
                    warn!(
                        "Config store {:?} is corrupt ({}), reinitializing",
                        self.path, err
                    );
                    self.backup_corrupt().await;
                    self.reinitialize().await
                }
            },
            Err(source) if source.kind() == ErrorKind::NotFound => {
                info!("No config store at {:?}, creating a fresh one", self.path);
                self.reinitialize().await
            }
            Err(source) => Err(SyncError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Track a new modpack. Validates inputs before touching the store;
    /// assigns the next free id and bumps the counter.
    pub async fn add(&self, url: &str, last_path: &str) -> SyncResult<Modpack> {
        let url = validated_url(url)?;
        let last_path = last_path.trim();
        if last_path.is_empty() {
            return Err(SyncError::EmptyField("last_path"));
        }

        let mut config = self.read_or_create().await?;

        if config.modpacks.iter().any(|m| m.last_path == last_path) {
            return Err(SyncError::DuplicatePath(last_path.to_string()));
        }

        let modpack = Modpack {
            id: config.next_id,
            url,
            last_path: last_path.to_string(),
        };
        config.next_id += 1;
        config.modpacks.push(modpack.clone());
        self.write(&config).await?;

        info!("Tracked modpack {} at '{}'", modpack.id, modpack.last_path);
        Ok(modpack)
    }

    /// Partial update of one entry. Supplied fields are validated exactly
    /// like `add`; the store stays untouched on any validation failure.
    pub async fn update(
        &self,
        id: u64,
        url: Option<&str>,
        last_path: Option<&str>,
    ) -> SyncResult<Modpack> {
        let url = url.map(validated_url).transpose()?;
        let last_path = match last_path {
            Some(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(SyncError::EmptyField("last_path"));
                }
                Some(trimmed.to_string())
            }
            None => None,
        };

        let mut config = self.read_or_create().await?;
        let modpack = config
            .modpacks
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(SyncError::ModpackNotFound(id))?;

        if let Some(url) = url {
            modpack.url = url;
        }
        if let Some(last_path) = last_path {
            modpack.last_path = last_path;
        }
        let updated = modpack.clone();

        self.write(&config).await?;
        info!("Updated modpack {}", id);
        Ok(updated)
    }

    /// Remove an entry. Idempotent: an id that is already gone is a
    /// successful no-op and does not rewrite the store.
    pub async fn remove(&self, id: u64) -> SyncResult<()> {
        let mut config = self.read_or_create().await?;
        let before = config.modpacks.len();
        config.modpacks.retain(|m| m.id != id);

        if config.modpacks.len() == before {
            return Ok(());
        }

        self.write(&config).await?;
        info!("Removed modpack {}", id);
        Ok(())
    }

    pub async fn get_by_id(&self, id: u64) -> SyncResult<Option<Modpack>> {
        let config = self.read_or_create().await?;
        Ok(config.modpacks.into_iter().find(|m| m.id == id))
    }

    pub async fn get_by_path(&self, last_path: &str) -> SyncResult<Option<Modpack>> {
        let config = self.read_or_create().await?;
        Ok(config.modpacks.into_iter().find(|m| m.last_path == last_path))
    }

    pub async fn list(&self) -> SyncResult<Vec<Modpack>> {
        Ok(self.read_or_create().await?.modpacks)
    }

    async fn reinitialize(&self) -> SyncResult<Config> {
        let config = Config::default();
        self.write(&config).await?;
        Ok(config)
    }

    // Best effort: park the unreadable content next to the store before
    // it gets replaced.
    async fn backup_corrupt(&self) {
        let backup = self.path.with_extension("json.backup");
        match tokio::fs::copy(&self.path, &backup).await {
            Ok(_) => info!("Backed up corrupt config to {:?}", backup),
            Err(err) => warn!("Could not back up corrupt config to {:?}: {}", backup, err),
        }
    }

    // Write to a temp sibling, then rename over the target. The rename is
    // what makes a concurrent-in-time reader see either the old or the
    // new store, never a partial one.
    async fn write(&self, config: &Config) -> SyncResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| SyncError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let json = serde_json::to_string_pretty(config)?;
        let tmp_path = self.path.with_extension("json.tmp");

        tokio::fs::write(&tmp_path, json)
            .await
            .map_err(|source| SyncError::Io {
                path: tmp_path.clone(),
                source,
            })?;

        if let Err(source) = tokio::fs::rename(&tmp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(SyncError::Io {
                path: self.path.clone(),
                source,
            });
        }

        Ok(())
    }
}

fn validated_url(raw: &str) -> SyncResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SyncError::EmptyField("url"));
    }
    Url::parse(trimmed).map_err(|err| SyncError::InvalidUrl {
        value: trimmed.to_string(),
        reason: err.to_string(),
    })?;
    Ok(trimmed.to_string())
}
