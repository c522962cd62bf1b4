//! Countdown Board - a shared countdown-timer display
//!
//! One operator sets a title and a target time; any number of passive
//! display surfaces poll the backing store and render a synchronized
//! countdown, progress bar, and urgency state. Change detection rides on
//! the store-assigned `updated_at` token, so displays re-render only when
//! the record actually changed.

pub mod admin;
pub mod api;
pub mod client;
pub mod config;
pub mod countdown;
pub mod display;
pub mod poller;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use admin::AdminController;
pub use api::create_router;
pub use client::StoreClient;
pub use config::Cli;
pub use display::DisplayController;
pub use poller::ChangePoller;
pub use state::StoreState;
pub use utils::shutdown_signal;
