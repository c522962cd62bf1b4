//! Admin operations against the store

use std::time::Duration;
use anyhow::{bail, Context, Result};
use chrono::{DateTime, Local, Utc};
use tracing::info;

use crate::client::StoreClient;
use crate::countdown;
use crate::display::DisplayController;
use crate::state::TimerRecord;
use super::validate;

/// Issues validated writes and re-fetches the record after each one, so
/// the operator sees the applied state immediately instead of waiting for
/// a polling cycle.
pub struct AdminController {
    client: StoreClient,
}

impl AdminController {
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    /// Start a countdown at an absolute target or a positive duration.
    pub async fn start(
        &self,
        title: String,
        at: Option<DateTime<Utc>>,
        minutes: Option<i64>,
    ) -> Result<TimerRecord> {
        let target = validate::resolve_target(at, minutes, Utc::now())?;
        self.write_and_refresh(title, Some(target), true).await
    }

    /// Start a countdown from a stored preset.
    pub async fn start_preset(&self, id: &str) -> Result<TimerRecord> {
        let presets = self.client.fetch_presets().await;
        let preset = presets
            .iter()
            .find(|p| p.id == id)
            .with_context(|| format!("No preset with id {}", id))?;

        let target = countdown::target_from_minutes(preset.duration_minutes as i64, Utc::now());
        self.write_and_refresh(preset.title.clone(), Some(target), true)
            .await
    }

    /// Stop the countdown: active off, target cleared, title preserved.
    pub async fn stop(&self) -> Result<TimerRecord> {
        let title = self
            .client
            .fetch_timer()
            .await
            .map(|record| record.title)
            .unwrap_or_default();
        self.write_and_refresh(title, None, false).await
    }

    async fn write_and_refresh(
        &self,
        title: String,
        target_time: Option<DateTime<Utc>>,
        is_active: bool,
    ) -> Result<TimerRecord> {
        let applied = self
            .client
            .set_timer(title, target_time, is_active)
            .await
            .context("Store did not accept the update")?;
        info!("Timer record written (token {})", applied.updated_at);

        // instant feedback; remote displays catch up within one interval
        let refreshed = self.client.fetch_timer().await.unwrap_or(applied);
        println!("{}", describe_record(&refreshed));
        Ok(refreshed)
    }

    /// Print the current record and the preset list.
    pub async fn status(&self) -> Result<()> {
        match self.client.fetch_timer().await {
            Some(record) => println!("{}", describe_record(&record)),
            None => println!("저장소에 연결할 수 없습니다"),
        }
        self.list_presets().await
    }

    /// Print the preset list.
    pub async fn list_presets(&self) -> Result<()> {
        let presets = self.client.fetch_presets().await;
        if presets.is_empty() {
            println!("프리셋 없음");
        } else {
            for preset in &presets {
                println!(
                    "  {}  {} ({})",
                    preset.id,
                    preset.title,
                    countdown::format_duration(preset.duration_minutes)
                );
            }
        }
        Ok(())
    }

    /// Create a preset after local validation.
    pub async fn add_preset(&self, title: &str, minutes: u32) -> Result<()> {
        let title = validate::validate_preset(title, minutes)?;
        let preset = self
            .client
            .add_preset(title, minutes)
            .await
            .context("Store did not accept the preset")?;
        println!(
            "프리셋 추가됨: {} ({}) id={}",
            preset.title,
            countdown::format_duration(preset.duration_minutes),
            preset.id
        );
        Ok(())
    }

    /// Delete a preset by id.
    pub async fn delete_preset(&self, id: &str) -> Result<()> {
        if !self.client.delete_preset(id).await {
            bail!("No preset with id {}", id);
        }
        println!("프리셋 삭제됨: {}", id);
        Ok(())
    }

    /// Live self-preview: the same poller, tick, and math as a display
    /// surface, run in the operator's terminal.
    pub async fn watch(&self, poll_interval: Duration) -> Result<()> {
        println!("미리보기 (Ctrl-C로 종료)");
        DisplayController::new(self.client.clone(), poll_interval)
            .run()
            .await
    }
}

fn describe_record(record: &TimerRecord) -> String {
    if !record.has_countdown() {
        return "타이머 중지됨".to_string();
    }

    // has_countdown guarantees the target is present
    let target = record.target_time.unwrap_or(record.updated_at);
    let left = countdown::time_left(target, Utc::now());
    format!(
        "진행 중: {} | 목표 {} | 남은 시간 {}",
        if record.title.is_empty() { "(제목 없음)" } else { record.title.as_str() },
        target.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S"),
        countdown::format_clock(left.hours, left.minutes, left.seconds),
    )
}
