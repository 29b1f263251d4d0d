// Once-a-day bonus spin
use crate::client::GameApi;
use crate::config::SpinConfig;
use crate::error::Result;
use crate::models::{latest_spin, SpinRecord};
use chrono::{DateTime, Duration, Utc};
use tracing::info;

pub fn spin_interval() -> Duration {
    Duration::days(1)
}

/// Due when there is no history or a full day has passed since the latest spin.
pub fn is_spin_due(history: &[SpinRecord], now: DateTime<Utc>) -> bool {
    match latest_spin(history) {
        None => true,
        Some(last) => now.signed_duration_since(last.created_at) >= spin_interval(),
    }
}

pub struct SpinRotator<'a> {
    api: &'a dyn GameApi,
    config: &'a SpinConfig,
}

impl<'a> SpinRotator<'a> {
    pub fn new(api: &'a dyn GameApi, config: &'a SpinConfig) -> Self {
        Self { api, config }
    }

    /// Returns whether a spin was performed.
    pub async fn rotate_if_due(&self, now: DateTime<Utc>) -> Result<bool> {
        let history = self.api.spin_history(self.config.history_page_size, 1).await?;
        if !is_spin_due(&history, now) {
            return Ok(false);
        }

        let result = self.api.rotate_spin().await?;
        info!("Spin rotated: {}", result);

        let history = self.api.spin_history(self.config.history_page_size, 1).await?;
        if let Some(last) = latest_spin(&history) {
            info!(
                "Spin result: {} at {}",
                last.prize.as_deref().unwrap_or("unknown prize"),
                last.created_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
        }
        Ok(true)
    }
}
