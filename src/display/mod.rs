//! Display surface
//!
//! A passive countdown display: one ChangePoller watching the store, one
//! local one-second render tick, and an explicit phase machine between
//! them. The model is pure so the whole countdown lifecycle is testable
//! without a terminal or a network.

pub mod controller;
pub mod model;
pub mod phase;
pub mod render;

// Re-export main types
pub use controller::DisplayController;
pub use model::{DisplayModel, Frame};
pub use phase::{transition, Phase, PhaseEvent};
