//! Adapter implementations of the task-tracking ports.

pub mod memory;
pub mod telegram;
