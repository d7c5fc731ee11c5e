// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod inventory_service;


pub use inventory_service::{InventoryService, LoadState};
