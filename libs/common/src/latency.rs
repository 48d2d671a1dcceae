//! Simulated network latency
//!
//! The store stands in for a remote backend, so every repository call waits
//! a fixed delay before touching it. The delay is per operation kind and can
//! be switched off entirely.

use std::time::Duration;
use tracing::debug;

/// Kind of operation being delayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Listing a whole collection
    List,
    /// Fetching a single record
    Fetch,
    /// Creating, updating or deleting a record
    Mutate,
    /// Changing a booking status
    StatusChange,
    /// Checking credentials
    Login,
}

/// Delay applied to each operation kind, in milliseconds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatencyConfig {
    pub list_ms: u64,
    pub fetch_ms: u64,
    pub mutate_ms: u64,
    pub status_ms: u64,
    pub login_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            list_ms: 800,
            fetch_ms: 500,
            mutate_ms: 1000,
            status_ms: 500,
            login_ms: 1000,
        }
    }
}

impl LatencyConfig {
    /// No delay at all
    pub fn none() -> Self {
        Self {
            list_ms: 0,
            fetch_ms: 0,
            mutate_ms: 0,
            status_ms: 0,
            login_ms: 0,
        }
    }

    /// Create a new LatencyConfig from environment variables
    ///
    /// # Environment Variables
    /// - `SIMULATED_LATENCY`: `false`, `0` or `off` disables the delays (default: enabled)
    pub fn from_env() -> Self {
        let enabled = std::env::var("SIMULATED_LATENCY")
            .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "false" | "0" | "off"))
            .unwrap_or(true);

        if enabled { Self::default() } else { Self::none() }
    }

    /// Delay for the given operation
    pub fn delay_for(&self, operation: Operation) -> Duration {
        let ms = match operation {
            Operation::List => self.list_ms,
            Operation::Fetch => self.fetch_ms,
            Operation::Mutate => self.mutate_ms,
            Operation::StatusChange => self.status_ms,
            Operation::Login => self.login_ms,
        };
        Duration::from_millis(ms)
    }

    /// Wait out the delay for the given operation
    pub async fn simulate(&self, operation: Operation) {
        let delay = self.delay_for(operation);
        if delay.is_zero() {
            return;
        }
        debug!("Simulating {:?} latency of {:?}", operation, delay);
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_delays() {
        let latency = LatencyConfig::default();
        assert_eq!(latency.delay_for(Operation::List), Duration::from_millis(800));
        assert_eq!(latency.delay_for(Operation::Fetch), Duration::from_millis(500));
        assert_eq!(latency.delay_for(Operation::Mutate), Duration::from_millis(1000));
        assert_eq!(
            latency.delay_for(Operation::StatusChange),
            Duration::from_millis(500)
        );
        assert_eq!(latency.delay_for(Operation::Login), Duration::from_millis(1000));
    }

    #[test]
    #[serial]
    fn test_from_env_toggle() {
        unsafe {
            std::env::set_var("SIMULATED_LATENCY", "off");
        }
        assert_eq!(LatencyConfig::from_env(), LatencyConfig::none());

        unsafe {
            std::env::remove_var("SIMULATED_LATENCY");
        }
        assert_eq!(LatencyConfig::from_env(), LatencyConfig::default());
    }

    #[tokio::test]
    async fn test_simulate_none_returns_immediately() {
        let started = std::time::Instant::now();
        LatencyConfig::none().simulate(Operation::Mutate).await;
        assert!(started.elapsed() < Duration::from_millis(100));
    }
}
