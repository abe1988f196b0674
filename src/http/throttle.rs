//! Artificial response latency.
//!
//! Every route holds its response back by the configured throttle so client
//! code can exercise loading states and timeouts without being modified.
//! The wait is a Tokio timer: it parks only the request that owns it, and if
//! the connection goes away the handler future (and its timer) is dropped.

use std::time::Duration;

/// Fixed delay applied before a response is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Throttle(Duration);

impl Throttle {
    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    pub fn duration(&self) -> Duration {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Sleep for the configured duration without blocking the worker thread.
    pub async fn wait(self) {
        if !self.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }

    /// Hold a prepared response until the throttle has elapsed.
    pub async fn deliver<T>(self, response: T) -> T {
        self.wait().await;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn deliver_waits_at_least_the_throttle() {
        let throttle = Throttle::from_millis(50);
        let start = Instant::now();
        let value = throttle.deliver("done").await;
        assert_eq!(value, "done");
        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn zero_throttle_is_immediate() {
        let throttle = Throttle::default();
        assert!(throttle.is_zero());
        let start = Instant::now();
        throttle.wait().await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn dropped_delivery_is_abandoned_quietly() {
        let throttle = Throttle::from_millis(5_000);
        let pending = tokio::time::timeout(Duration::from_millis(20), throttle.deliver(()));
        assert!(pending.await.is_err());
    }

    #[tokio::test]
    async fn concurrent_waits_overlap() {
        let throttle = Throttle::from_millis(100);
        let start = Instant::now();
        let mut tasks = tokio::task::JoinSet::new();
        for _ in 0..20 {
            tasks.spawn(throttle.wait());
        }
        while let Some(result) = tasks.join_next().await {
            result.unwrap();
        }
        // Twenty sequential waits would take two seconds.
        assert!(start.elapsed() < Duration::from_millis(1_000));
    }
}
