use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use std::time::Duration;

#[cfg_attr(test, automock)]
#[async_trait]
pub(crate) trait Pacer: Send + Sync {
    async fn pause(&self);
}

/// Sleeps for the same interval every time, no jitter and no drift correction.
pub(crate) struct FixedIntervalPacer {
    interval: Duration,
}

impl FixedIntervalPacer {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

#[async_trait]
impl Pacer for FixedIntervalPacer {
    async fn pause(&self) {
        tokio::time::sleep(self.interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::{FixedIntervalPacer, Pacer};
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn when_pausing_should_wait_for_the_interval() {
        let pacer = FixedIntervalPacer::new(Duration::from_secs(1));
        let start = tokio::time::Instant::now();

        pacer.pause().await;

        assert!(start.elapsed() >= Duration::from_secs(1));
    }
}
