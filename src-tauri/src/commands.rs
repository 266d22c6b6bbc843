// IPC surface exposed to the webview. Commands stay thin: normalize
// user-supplied paths, take the state lock, delegate to the core.

use std::path::Path;
use std::sync::Arc;

use tauri::State;
use tokio::sync::Mutex;

use crate::core::config::{Config, Modpack};
use crate::core::error::SyncError;
use crate::core::paths::normalize_path;
use crate::core::reconcile::{self, InstallationStatus};
use crate::core::state::AppState;

type SharedState<'a> = State<'a, Arc<Mutex<AppState>>>;

#[tauri::command]
pub async fn read_or_create_config(state: SharedState<'_>) -> Result<Config, SyncError> {
    let state = state.lock().await;
    state.config_store.read_or_create().await
}

#[tauri::command]
pub async fn add_modpack(
    state: SharedState<'_>,
    url: String,
    last_path: String,
) -> Result<Modpack, SyncError> {
    let last_path = normalize_path(&last_path);
    let state = state.lock().await;
    state.config_store.add(&url, &last_path).await
}

#[tauri::command]
pub async fn update_modpack(
    state: SharedState<'_>,
    id: u64,
    url: Option<String>,
    last_path: Option<String>,
) -> Result<Modpack, SyncError> {
    let last_path = last_path.map(|p| normalize_path(&p));
    let state = state.lock().await;
    state
        .config_store
        .update(id, url.as_deref(), last_path.as_deref())
        .await
}

#[tauri::command]
pub async fn remove_modpack(state: SharedState<'_>, id: u64) -> Result<(), SyncError> {
    let state = state.lock().await;
    state.config_store.remove(id).await
}

#[tauri::command]
pub async fn get_modpack_by_id(
    state: SharedState<'_>,
    id: u64,
) -> Result<Option<Modpack>, SyncError> {
    let state = state.lock().await;
    state.config_store.get_by_id(id).await
}

#[tauri::command]
pub async fn get_modpack_by_path(
    state: SharedState<'_>,
    last_path: String,
) -> Result<Option<Modpack>, SyncError> {
    let last_path = normalize_path(&last_path);
    let state = state.lock().await;
    state.config_store.get_by_path(&last_path).await
}

#[tauri::command]
pub async fn list_modpacks(state: SharedState<'_>) -> Result<Vec<Modpack>, SyncError> {
    let state = state.lock().await;
    state.config_store.list().await
}

#[tauri::command]
pub async fn check_installation(path: String) -> Result<InstallationStatus, SyncError> {
    let path = normalize_path(&path);
    reconcile::check_installation(Path::new(&path)).await
}
