//! Store-side state
//!
//! This module contains the records the backing store persists and the
//! shared state wrapper the HTTP handlers mutate.

pub mod preset;
pub mod store_state;
pub mod timer_record;

// Re-export main types
pub use preset::Preset;
pub use store_state::StoreState;
pub use timer_record::TimerRecord;
