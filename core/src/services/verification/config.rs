//! Verification timing configuration

use std::time::Duration;
use tracing::warn;

/// Timing knobs for the verification-code lifecycle.
///
/// The store TTL and the manager's verify window are independent expiry
/// layers. Historically they disagreed: codes were stored for 30/60 seconds
/// but verified against a 5-minute window, so the store TTL was the
/// effective limit. [`VerificationConfig::legacy`] preserves those values;
/// [`VerificationConfig::is_consistent`] reports whether the layers agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationConfig {
    /// Store TTL for registration challenges
    pub registration_ttl: Duration,
    /// Store TTL for password-reset challenges
    pub reset_ttl: Duration,
    /// Maximum accepted age of a challenge at verify time
    pub verify_window: Duration,
}

impl VerificationConfig {
    /// Build a config, warning when the expiry layers disagree.
    pub fn new(registration_ttl: Duration, reset_ttl: Duration, verify_window: Duration) -> Self {
        let config = Self {
            registration_ttl,
            reset_ttl,
            verify_window,
        };
        if !config.is_consistent() {
            warn!(
                registration_ttl_secs = registration_ttl.as_secs(),
                reset_ttl_secs = reset_ttl.as_secs(),
                verify_window_secs = verify_window.as_secs(),
                "verification TTLs are shorter than the verify window; store eviction is the effective limit"
            );
        }
        config
    }

    /// The historical values: 30 s registration TTL, 60 s reset TTL,
    /// 5-minute verify window.
    pub fn legacy() -> Self {
        Self {
            registration_ttl: Duration::from_secs(30),
            reset_ttl: Duration::from_secs(60),
            verify_window: Duration::from_secs(300),
        }
    }

    /// True when neither store TTL undercuts the verify window.
    pub fn is_consistent(&self) -> bool {
        self.registration_ttl >= self.verify_window && self.reset_ttl >= self.verify_window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_values() {
        let config = VerificationConfig::legacy();
        assert_eq!(config.registration_ttl, Duration::from_secs(30));
        assert_eq!(config.reset_ttl, Duration::from_secs(60));
        assert_eq!(config.verify_window, Duration::from_secs(300));
    }

    #[test]
    fn test_legacy_config_is_inconsistent() {
        // The historical TTLs undercut the verify window; keep that visible.
        assert!(!VerificationConfig::legacy().is_consistent());
    }

    #[test]
    fn test_aligned_config_is_consistent() {
        let config = VerificationConfig::new(
            Duration::from_secs(300),
            Duration::from_secs(300),
            Duration::from_secs(300),
        );
        assert!(config.is_consistent());
    }
}
