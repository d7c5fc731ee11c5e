// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - This layer sits ABOVE domain, repositories, and services
// - It provides the boundary between UI (Tauri) and Domain (Services)
// - It translates between DTOs and domain entities
// - View logic (search/filter, summaries, notices, form state) is pure
//   and computed per call from the current snapshot

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;
pub mod view;

pub use commands::*;
pub use dto::*;
pub use state::AppState;
