//! Task lifecycle management for Tasker.
//!
//! This module implements the whole task-tracking core: creating validated
//! task records, storing them in insertion order, retrieving the full list,
//! and dispatching a best-effort notification when a high or critical
//! priority task is created. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
