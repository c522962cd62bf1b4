//! Display render loop

use std::io::{self, Write};
use std::time::Duration;
use chrono::Utc;
use tokio::sync::mpsc;
use tracing::info;

use crate::client::StoreClient;
use crate::poller::ChangePoller;
use crate::state::TimerRecord;
use crate::utils::shutdown_signal;
use super::model::DisplayModel;
use super::phase::Phase;
use super::render;

/// A passive display surface: owns its poller and its one-second render
/// tick, shares nothing with other surfaces except the remote store.
pub struct DisplayController {
    client: StoreClient,
    poll_interval: Duration,
}

impl DisplayController {
    pub fn new(client: StoreClient, poll_interval: Duration) -> Self {
        Self {
            client,
            poll_interval,
        }
    }

    /// Run until a shutdown signal arrives.
    pub async fn run(self) -> anyhow::Result<()> {
        if self.client.ping().await {
            info!("Store connection established");
        } else {
            // not fatal: the poller keeps retrying at its own cadence
            show(&render::waiting_line("연결 끊김 - 저장소 응답 대기 중"));
        }

        let (record_tx, mut record_rx) = mpsc::unbounded_channel::<TimerRecord>();
        let fetch_client = self.client.clone();
        let poller = ChangePoller::spawn(
            self.poll_interval,
            move || {
                let client = fetch_client.clone();
                async move { client.fetch_timer().await }
            },
            move |record| {
                let _ = record_tx.send(record);
            },
        );

        let mut model = DisplayModel::new();
        let mut tick = tokio::time::interval(Duration::from_secs(1));
        tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        let mut ticking = false;

        show(&render::waiting_line("타이머 대기 중"));

        let shutdown = shutdown_signal();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                accepted = record_rx.recv() => {
                    let Some(record) = accepted else { break };
                    info!("Accepted timer record (token {})", record.updated_at);

                    if model.on_record(record) {
                        // new anchor: restart the local tick immediately
                        tick.reset();
                        ticking = true;
                        render_once(&mut model, &mut ticking);
                    } else {
                        ticking = false;
                        show(&render::waiting_line("타이머가 중지되었습니다"));
                    }
                }
                _ = tick.tick(), if ticking => {
                    render_once(&mut model, &mut ticking);
                }
                _ = &mut shutdown => {
                    info!("Shutdown signal received");
                    break;
                }
            }
        }

        poller.shutdown().await;
        println!();
        Ok(())
    }
}

fn render_once(model: &mut DisplayModel, ticking: &mut bool) {
    if let Some(frame) = model.on_tick(Utc::now()) {
        show(&render::render_frame(&frame));
        if frame.phase == Phase::Complete {
            // terminal until the poller accepts a fresh record
            *ticking = false;
            println!();
        }
    }
}

/// Redraw in place; log output goes to stderr so stdout stays a single
/// live line.
fn show(line: &str) {
    print!("\r{:<100}", line);
    let _ = io::stdout().flush();
}
