//! Cart analytics configuration

use serde::{Deserialize, Serialize};
use services_common::constants::capacity::DEFAULT_MAX_LINE_ITEMS;
use services_common::{CommerceError, Px};

/// Cart analytics configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Unit-price threshold for the premium total
    pub premium_threshold: Px,

    /// Advisory upper bound on line items per cart; larger carts are
    /// processed but logged
    pub max_line_items: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            premium_threshold: Px::from_units(100),
            max_line_items: DEFAULT_MAX_LINE_ITEMS,
        }
    }
}

impl AnalyticsConfig {
    /// Validate the configuration
    ///
    /// # Errors
    /// Returns `CommerceError::InvalidConfig` when the threshold is
    /// negative or the line-item bound is zero.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.premium_threshold < Px::ZERO {
            return Err(CommerceError::InvalidConfig(format!(
                "premium_threshold must be non-negative, got {}",
                self.premium_threshold
            )));
        }
        if self.max_line_items == 0 {
            return Err(CommerceError::InvalidConfig(
                "max_line_items must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
