use std::time::Duration;

use common::config::Validate;
use serde::{Deserialize, Serialize};

const MAX_DELAY_MS: u64 = 10_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct TimingConfig {
    /// Time the winning line stays visible before the end-of-game modal.
    pub modal_delay_ms: u64,
    /// Time a mismatched memory pair stays face up.
    pub mismatch_hide_delay_ms: u64,
}

impl TimingConfig {
    pub fn modal_delay(&self) -> Duration {
        Duration::from_millis(self.modal_delay_ms)
    }

    pub fn mismatch_hide_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_hide_delay_ms)
    }
}

impl Validate for TimingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.modal_delay_ms > MAX_DELAY_MS {
            return Err(format!("modal_delay_ms must not exceed {}", MAX_DELAY_MS));
        }
        if self.mismatch_hide_delay_ms == 0 || self.mismatch_hide_delay_ms > MAX_DELAY_MS {
            return Err(format!(
                "mismatch_hide_delay_ms must be between 1 and {}",
                MAX_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            modal_delay_ms: 800,
            mismatch_hide_delay_ms: 1000,
        }
    }
}
