//! Tasker: minimal task-tracking core.
//!
//! This crate provides the task lifecycle subsystem of a small task-tracking
//! service: entity validation, in-memory storage, and priority-triggered
//! notification dispatch. The HTTP transport layer is a thin external
//! adapter that calls into [`task::services::TaskLifecycleService`].
//!
//! # Architecture
//!
//! Tasker follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (storage, messaging)
//!
//! # Modules
//!
//! - [`task`]: Task creation, storage, and notification dispatch

pub mod task;
