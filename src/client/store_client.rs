//! HTTP client for the backing store

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::api::handlers::{AddPresetRequest, SetTimerRequest};
use crate::api::responses::{Envelope, PingResponse};
use crate::state::{Preset, TimerRecord};

/// Client side of the store API. Transport failures, non-2xx statuses,
/// `success: false` envelopes, and malformed bodies are all collapsed into
/// the same outcome - no data this cycle - so pollers can simply retry on
/// their next interval. Nothing here is fatal.
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: Client,
    base_url: String,
}

impl StoreClient {
    /// Create a client for the store at `base_url`, e.g.
    /// `http://127.0.0.1:20653`.
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a path and unwrap its envelope into `Some(data)` on success.
    async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Option<T> {
        let response = match self.http.get(self.url(path)).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Store request failed: GET {}: {}", path, e);
                return None;
            }
        };

        Self::unwrap_envelope(path, response).await
    }

    /// POST a JSON body and unwrap the response envelope.
    async fn post_data<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Option<T> {
        let response = match self.http.post(self.url(path)).json(body).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Store request failed: POST {}: {}", path, e);
                return None;
            }
        };

        Self::unwrap_envelope(path, response).await
    }

    async fn unwrap_envelope<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> Option<T> {
        if !response.status().is_success() {
            warn!("Store returned HTTP {} for {}", response.status(), path);
            return None;
        }

        let envelope: Envelope<T> = match response.json().await {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!("Malformed store response for {}: {}", path, e);
                return None;
            }
        };

        if !envelope.success {
            warn!(
                "Store rejected {}: {}",
                path,
                envelope.error.as_deref().unwrap_or("unknown error")
            );
            return None;
        }

        envelope.data
    }

    /// Connectivity probe.
    pub async fn ping(&self) -> bool {
        match self.http.get(self.url("/ping")).send().await {
            Ok(response) if response.status().is_success() => {
                match response.json::<PingResponse>().await {
                    Ok(body) => body.success,
                    Err(_) => false,
                }
            }
            _ => false,
        }
    }

    /// Fetch the current timer record.
    pub async fn fetch_timer(&self) -> Option<TimerRecord> {
        self.get_data("/timer").await
    }

    /// Overwrite the timer record; returns the applied record with its
    /// fresh change token.
    pub async fn set_timer(
        &self,
        title: String,
        target_time: Option<DateTime<Utc>>,
        is_active: bool,
    ) -> Option<TimerRecord> {
        let request = SetTimerRequest {
            title,
            target_time,
            is_active,
        };
        self.post_data("/timer", &request).await
    }

    /// Fetch all presets; failures read as an empty list, matching how the
    /// admin surface degrades.
    pub async fn fetch_presets(&self) -> Vec<Preset> {
        self.get_data("/presets").await.unwrap_or_default()
    }

    /// Create a preset.
    pub async fn add_preset(&self, title: String, duration_minutes: u32) -> Option<Preset> {
        let request = AddPresetRequest {
            title,
            duration_minutes,
        };
        self.post_data("/presets", &request).await
    }

    /// Delete a preset by id. False covers both "not found" and any
    /// transport trouble.
    pub async fn delete_preset(&self, id: &str) -> bool {
        let path = format!("/presets/{}", id);
        let response = match self.http.delete(self.url(&path)).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Store request failed: DELETE {}: {}", path, e);
                return false;
            }
        };

        if !response.status().is_success() {
            return false;
        }
        match response.json::<Envelope<()>>().await {
            Ok(envelope) => envelope.success,
            Err(_) => false,
        }
    }
}
