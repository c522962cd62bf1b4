//! Shared store state behind the HTTP handlers

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tracing::info;

use super::{Preset, TimerRecord};

/// In-memory backing store: the singleton timer record plus the preset
/// list, shared across handlers.
#[derive(Debug)]
pub struct StoreState {
    timer: Arc<Mutex<TimerRecord>>,
    presets: Arc<Mutex<Vec<Preset>>>,
    /// Server metadata
    pub start_time: Instant,
    pub host: String,
    pub port: u16,
}

impl StoreState {
    /// Create a new store with a stopped timer and no presets.
    pub fn new(host: String, port: u16) -> Self {
        Self {
            timer: Arc::new(Mutex::new(TimerRecord::new())),
            presets: Arc::new(Mutex::new(Vec::new())),
            start_time: Instant::now(),
            host,
            port,
        }
    }

    /// Get the current timer record.
    pub fn get_timer(&self) -> Result<TimerRecord, String> {
        self.timer.lock()
            .map(|record| record.clone())
            .map_err(|e| format!("Failed to lock timer record: {}", e))
    }

    /// Overwrite the timer record, assigning a fresh `updated_at` change
    /// token. The row id never changes.
    pub fn set_timer(
        &self,
        title: String,
        target_time: Option<DateTime<Utc>>,
        is_active: bool,
    ) -> Result<TimerRecord, String> {
        let mut record = self.timer.lock()
            .map_err(|e| format!("Failed to lock timer record: {}", e))?;

        record.title = title;
        record.target_time = target_time;
        record.is_active = is_active;
        record.updated_at = Utc::now();
        let applied = record.clone();
        drop(record);

        info!(
            "Timer record updated: active={}, target={:?}",
            applied.is_active, applied.target_time
        );
        Ok(applied)
    }

    /// Get all presets. An empty list is a normal state.
    pub fn get_presets(&self) -> Result<Vec<Preset>, String> {
        self.presets.lock()
            .map(|presets| presets.clone())
            .map_err(|e| format!("Failed to lock presets: {}", e))
    }

    /// Append a preset with a freshly assigned id.
    pub fn add_preset(&self, title: String, duration_minutes: u32) -> Result<Preset, String> {
        let mut presets = self.presets.lock()
            .map_err(|e| format!("Failed to lock presets: {}", e))?;

        // Millisecond-epoch id, bumped until unique so that two creations
        // landing in the same millisecond cannot collide.
        let mut id = Utc::now().timestamp_millis();
        while presets.iter().any(|p| p.id == id.to_string()) {
            id += 1;
        }

        let preset = Preset {
            title,
            duration_minutes,
            id: id.to_string(),
        };
        presets.push(preset.clone());

        info!("Preset added: {} ({}min)", preset.title, preset.duration_minutes);
        Ok(preset)
    }

    /// Delete a preset by id. Returns false when no preset has that id.
    pub fn delete_preset(&self, id: &str) -> Result<bool, String> {
        let mut presets = self.presets.lock()
            .map_err(|e| format!("Failed to lock presets: {}", e))?;

        let initial_count = presets.len();
        presets.retain(|p| p.id != id);
        let deleted = presets.len() != initial_count;

        if deleted {
            info!("Preset deleted: {}", id);
        }
        Ok(deleted)
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn set_timer_assigns_fresh_change_token() {
        let store = StoreState::new("127.0.0.1".to_string(), 0);
        let before = store.get_timer().unwrap();

        std::thread::sleep(std::time::Duration::from_millis(2));
        let target = Utc::now() + Duration::minutes(30);
        let applied = store.set_timer("회의".to_string(), Some(target), true).unwrap();

        assert!(applied.updated_at > before.updated_at);
        assert_eq!(applied.id, before.id);
        assert!(applied.has_countdown());
        assert_eq!(store.get_timer().unwrap(), applied);
    }

    #[test]
    fn preset_ids_are_unique_within_a_millisecond() {
        let store = StoreState::new("127.0.0.1".to_string(), 0);
        let a = store.add_preset("a".to_string(), 10).unwrap();
        let b = store.add_preset("b".to_string(), 20).unwrap();
        let c = store.add_preset("c".to_string(), 30).unwrap();
        assert_ne!(a.id, b.id);
        assert_ne!(b.id, c.id);
        assert_eq!(store.get_presets().unwrap().len(), 3);
    }

    #[test]
    fn delete_preset_reports_missing_ids() {
        let store = StoreState::new("127.0.0.1".to_string(), 0);
        let preset = store.add_preset("점심시간".to_string(), 60).unwrap();

        assert!(store.delete_preset(&preset.id).unwrap());
        assert!(!store.delete_preset(&preset.id).unwrap());
        assert!(store.get_presets().unwrap().is_empty());
    }
}
