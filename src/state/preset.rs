//! Named duration presets

use serde::{Deserialize, Serialize};

/// A reusable duration shortcut for starting a countdown quickly.
/// Presets are created and deleted, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub title: String,
    pub duration_minutes: u32,
    pub id: String,
}
