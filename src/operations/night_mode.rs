// Quiet-hours window
use crate::config::NightModeConfig;
use chrono::{NaiveTime, Timelike};
use std::time::Duration;

const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

/// Hours `[start_hour, end_hour)`, wrapping midnight when start > end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NightWindow {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl NightWindow {
    pub fn from_config(config: &NightModeConfig) -> Option<Self> {
        config.enabled.then_some(NightWindow {
            start_hour: config.start_hour,
            end_hour: config.end_hour,
        })
    }

    pub fn contains_hour(&self, hour: u32) -> bool {
        if self.start_hour <= self.end_hour {
            hour >= self.start_hour && hour < self.end_hour
        } else {
            hour >= self.start_hour || hour < self.end_hour
        }
    }

    /// Time left until the window closes, or `None` outside the window.
    pub fn remaining(&self, now: NaiveTime) -> Option<Duration> {
        if !self.contains_hour(now.hour()) {
            return None;
        }
        let now_secs = now.num_seconds_from_midnight();
        let end_secs = self.end_hour * 3600;
        let wait = (end_secs + SECONDS_PER_DAY - now_secs) % SECONDS_PER_DAY;
        Some(Duration::from_secs(u64::from(wait)))
    }
}
