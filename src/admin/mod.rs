//! Operator commands
//!
//! Writes to the store (start/stop, preset management) with local
//! validation in front of every write, plus a live self-preview.

pub mod controller;
pub mod validate;

// Re-export main types
pub use controller::AdminController;
