//! Destination channels and batch dispatch semantics.

use std::str::FromStr;

use super::status::PaymentStatus;
use crate::error::DomainError;

/// Destination channel names, one per payment status.
///
/// Resolved once at startup and handed to the processing service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelConfig {
    partial: String,
    full: String,
    overpaid: String,
}

impl ChannelConfig {
    /// Creates a channel configuration.
    ///
    /// All three names must be non-empty and distinct.
    pub fn new(
        partial: impl Into<String>,
        full: impl Into<String>,
        overpaid: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let config = Self {
            partial: partial.into(),
            full: full.into(),
            overpaid: overpaid.into(),
        };

        for (status, name) in config.entries() {
            if name.trim().is_empty() {
                return Err(DomainError::InvalidChannelConfig(format!(
                    "channel for {} is empty",
                    status
                )));
            }
        }

        if config.partial == config.full
            || config.partial == config.overpaid
            || config.full == config.overpaid
        {
            return Err(DomainError::InvalidChannelConfig(
                "channel names must be distinct".into(),
            ));
        }

        Ok(config)
    }

    /// Returns the destination channel for a status.
    pub fn channel_for(&self, status: PaymentStatus) -> &str {
        match status {
            PaymentStatus::Partial => &self.partial,
            PaymentStatus::Full => &self.full,
            PaymentStatus::Overpaid => &self.overpaid,
        }
    }

    fn entries(&self) -> [(PaymentStatus, &str); 3] {
        [
            (PaymentStatus::Partial, self.partial.as_str()),
            (PaymentStatus::Full, self.full.as_str()),
            (PaymentStatus::Overpaid, self.overpaid.as_str()),
        ]
    }
}

/// How a batch is walked.
///
/// Both modes stop at the first failure and never retract messages that
/// were already published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchMode {
    /// Lookup, classify and publish one payment at a time.
    #[default]
    FailFast,
    /// Resolve every billing code first, then classify and publish.
    /// A missing billing code anywhere in the batch publishes nothing.
    ValidateFirst,
}

impl FromStr for DispatchMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fail_fast" | "fail-fast" => Ok(DispatchMode::FailFast),
            "validate_first" | "validate-first" => Ok(DispatchMode::ValidateFirst),
            other => Err(DomainError::UnknownDispatchMode(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_mapping() {
        let config = ChannelConfig::new("partial-q", "full-q", "overpaid-q").unwrap();

        assert_eq!(config.channel_for(PaymentStatus::Partial), "partial-q");
        assert_eq!(config.channel_for(PaymentStatus::Full), "full-q");
        assert_eq!(config.channel_for(PaymentStatus::Overpaid), "overpaid-q");
    }

    #[test]
    fn test_empty_channel_rejected() {
        let result = ChannelConfig::new("partial-q", "  ", "overpaid-q");
        assert!(matches!(result, Err(DomainError::InvalidChannelConfig(_))));
    }

    #[test]
    fn test_duplicate_channels_rejected() {
        let result = ChannelConfig::new("same", "full-q", "same");
        assert!(matches!(result, Err(DomainError::InvalidChannelConfig(_))));
    }

    #[test]
    fn test_dispatch_mode_parsing() {
        assert_eq!("fail_fast".parse::<DispatchMode>().unwrap(), DispatchMode::FailFast);
        assert_eq!(
            "Validate-First".parse::<DispatchMode>().unwrap(),
            DispatchMode::ValidateFirst
        );
        assert!("eventually".parse::<DispatchMode>().is_err());
        assert_eq!(DispatchMode::default(), DispatchMode::FailFast);
    }
}
