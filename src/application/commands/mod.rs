// src/application/commands/mod.rs
//
// Tauri Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between UI and Services
// - Commands accept DTOs, return DTOs
// - Commands handle error conversion for Tauri
// - Commands NEVER contain business logic

pub mod item_commands;
pub mod view_commands;

pub use item_commands::*;
pub use view_commands::*;
