// Error classification and the consecutive-error backoff controller
use crate::config::{ErrorConfig, TimingConfig};
use crate::error::BotError;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Known account/identity hiccup: short fixed wait, no penalty.
    TransientNoPenalty,
    /// Anything unexpected: counts toward the stop threshold.
    TransientPenalized,
    /// Cannot heal by retrying.
    Fatal,
}

pub fn classify(err: &BotError) -> ErrorClass {
    match err {
        BotError::PeerIdInvalid(_) | BotError::IdNotFound(_) => ErrorClass::TransientNoPenalty,
        BotError::Config(_) => ErrorClass::Fatal,
        _ => ErrorClass::TransientPenalized,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Wait, then retry with the cached login intact.
    Wait(Duration),
    /// Drop the cached login, wait, then retry.
    Backoff(Duration),
    Stop,
}

#[derive(Debug, Clone)]
pub struct RetryController {
    errors: u32,
    threshold: u32,
    reset_on_success: bool,
    transient_delay: Duration,
    backoff_unit: Duration,
}

impl RetryController {
    pub fn new(errors: &ErrorConfig, timing: &TimingConfig) -> Self {
        Self {
            errors: 0,
            threshold: errors.errors_before_stop,
            reset_on_success: errors.reset_on_success,
            transient_delay: timing.transient_retry(),
            backoff_unit: timing.error_backoff_unit(),
        }
    }

    pub fn error_count(&self) -> u32 {
        self.errors
    }

    pub fn should_stop(&self) -> bool {
        self.errors >= self.threshold
    }

    pub fn on_success(&mut self) {
        if self.reset_on_success {
            self.errors = 0;
        }
    }

    pub fn on_error(&mut self, err: &BotError) -> RetryDecision {
        match classify(err) {
            ErrorClass::TransientNoPenalty => RetryDecision::Wait(self.transient_delay),
            ErrorClass::Fatal => RetryDecision::Stop,
            ErrorClass::TransientPenalized => {
                self.errors += 1;
                if self.should_stop() {
                    RetryDecision::Stop
                } else {
                    RetryDecision::Backoff(self.backoff_unit * self.errors)
                }
            }
        }
    }
}
