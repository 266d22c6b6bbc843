// ─── SnapSync Core ───
// Installation-state reconciliation backend for the modpack sync tool.
//
// Architecture:
//   core/
//     config/    — Durable registry of tracked modpacks (CRUD over sn-config.json)
//     manifest/  — `.sn-manifest.json` reader + schema validation
//     paths      — User-path normalization heuristics
//     reconcile  — Composite installation check consumed by the UI
//     structure  — Minecraft directory layout validation
//     state      — Global application state

pub mod config;
pub mod error;
pub mod manifest;
pub mod paths;
pub mod reconcile;
pub mod state;
pub mod structure;
