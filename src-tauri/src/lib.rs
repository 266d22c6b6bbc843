mod commands;
mod core;

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::core::state::AppState;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,snapsync_lib=debug")),
        )
        .init();

    tracing::info!("SnapSync starting...");

    tauri::Builder::default()
        .plugin(tauri_plugin_fs::init())
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_opener::init())
        .manage(Arc::new(Mutex::new(AppState::new())))
        .invoke_handler(tauri::generate_handler![
            commands::read_or_create_config,
            commands::add_modpack,
            commands::update_modpack,
            commands::remove_modpack,
            commands::get_modpack_by_id,
            commands::get_modpack_by_path,
            commands::list_modpacks,
            commands::check_installation,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
