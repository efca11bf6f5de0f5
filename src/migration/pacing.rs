use std::time::Duration;

use crate::utils::Config;

/// Feste Pausen zwischen API Calls, damit die Rate Limits
/// der Ziel-Plattform nicht reißen
#[derive(Debug, Clone)]
pub struct PacingPolicy {
    pub metafield_delay: Duration,
    pub record_delay: Duration,
    pub batch_delay: Duration,
}

impl PacingPolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            metafield_delay: Duration::from_millis(config.metafield_delay_ms),
            record_delay: Duration::from_millis(config.record_delay_ms),
            batch_delay: Duration::from_millis(config.batch_delay_ms),
        }
    }

    /// Keine Pausen (für Tests)
    pub fn none() -> Self {
        Self {
            metafield_delay: Duration::ZERO,
            record_delay: Duration::ZERO,
            batch_delay: Duration::ZERO,
        }
    }

    pub async fn after_metafield(&self) {
        Self::pause(self.metafield_delay).await;
    }

    pub async fn after_record(&self) {
        Self::pause(self.record_delay).await;
    }

    pub async fn between_batches(&self) {
        Self::pause(self.batch_delay).await;
    }

    async fn pause(delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
