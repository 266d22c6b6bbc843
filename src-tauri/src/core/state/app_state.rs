use std::path::PathBuf;

use crate::core::config::ConfigStore;

const APP_DIR_NAME: &str = "SnapSync";

/// Global application state, managed by Tauri as `Arc<Mutex<AppState>>`.
/// The mutex serializes command access so two config mutations can never
/// interleave their read-modify-write cycles.
pub struct AppState {
    pub data_dir: PathBuf,
    pub config_store: ConfigStore,
}

impl AppState {
    pub fn new() -> Self {
        let data_dir = default_data_dir();
        let config_store = ConfigStore::new(&data_dir);

        Self {
            data_dir,
            config_store,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn default_data_dir() -> PathBuf {
    let dir = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME);

    if !dir.exists() {
        let _ = std::fs::create_dir_all(&dir);
    }

    dir
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::CONFIG_FILE;

    #[test]
    fn store_lives_under_the_data_dir() {
        let state = AppState::new();
        assert_eq!(
            state.config_store.path(),
            state.data_dir.join(CONFIG_FILE).as_path()
        );
    }
}
