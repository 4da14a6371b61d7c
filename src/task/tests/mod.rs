//! Unit tests for the task-tracking core.

mod repository_tests;
