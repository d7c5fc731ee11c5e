// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO cross-repository calls
// - One network round trip per operation, no retries, no batching

pub mod item_repository;

pub use item_repository::{HttpItemRepository, ItemRepository, StoreConfig};
