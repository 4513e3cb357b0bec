//! Background Tasks Module
//!
//! Maintenance tasks that run alongside the server.

mod cleanup;

pub use cleanup::spawn_cleanup_task;
