//! Cart Analytics Service
//!
//! Single-pass analytics over shopping carts and related commerce records:
//! - Per-category totals (first-seen category order)
//! - Whole-cart and premium-item totals
//! - Order fulfillment stock screening
//! - Postal-code membership eligibility

pub mod aggregators;
pub mod config;
pub mod inventory;
pub mod membership;

use services_common::{
    Applicant, CategoryTotal, CommerceError, EligibilityRecord, IneligibleApplicant, LineItem,
    ProductOrder, Px,
};
use tracing::{info, warn};

pub use aggregators::{cart_total, premium_total, totals_by_category};
pub use config::AnalyticsConfig;
pub use inventory::all_in_stock;
pub use membership::{ineligible_applicants, screen_applicants};

/// Cart analytics engine
///
/// Binds a validated configuration to the analytics operations. Holds no
/// mutable state, so a single instance is safe to share across threads.
#[derive(Debug, Clone)]
pub struct CartAnalytics {
    config: AnalyticsConfig,
}

impl CartAnalytics {
    /// Create a new engine from a validated configuration
    ///
    /// # Errors
    /// Returns `CommerceError::InvalidConfig` if the configuration is
    /// rejected.
    pub fn new(config: AnalyticsConfig) -> Result<Self, CommerceError> {
        config.validate()?;
        info!(
            premium_threshold = %config.premium_threshold,
            max_line_items = config.max_line_items,
            "Cart analytics engine initialized"
        );
        Ok(Self { config })
    }

    /// Engine configuration
    #[must_use]
    pub const fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    fn check_cart_size(&self, items: &[LineItem]) {
        if items.len() > self.config.max_line_items {
            warn!(
                items = items.len(),
                max_line_items = self.config.max_line_items,
                "Cart exceeds advisory line-item bound"
            );
        }
    }

    /// Sum of all line notionals in the cart
    #[must_use]
    pub fn total(&self, items: &[LineItem]) -> Px {
        self.check_cart_size(items);
        cart_total(items)
    }

    /// Sum of line notionals for items at or above the configured
    /// premium threshold
    #[must_use]
    pub fn premium_total(&self, items: &[LineItem]) -> Px {
        self.check_cart_size(items);
        premium_total(items, self.config.premium_threshold)
    }

    /// Per-category totals, in first-seen category order
    #[must_use]
    pub fn totals_by_category(&self, items: &[LineItem]) -> Vec<CategoryTotal> {
        self.check_cart_size(items);
        totals_by_category(items)
    }

    /// Whether every order line is covered by stock on hand
    #[must_use]
    pub fn all_in_stock(&self, orders: &[ProductOrder]) -> bool {
        all_in_stock(orders)
    }

    /// One eligibility record per applicant, in input order
    #[must_use]
    pub fn screen_applicants(
        &self,
        eligible_codes: &[String],
        applicants: &[Applicant],
    ) -> Vec<EligibilityRecord> {
        screen_applicants(eligible_codes, applicants)
    }

    /// Only the rejected applicants, with rejection reasons
    #[must_use]
    pub fn ineligible_applicants(
        &self,
        eligible_codes: &[String],
        applicants: &[Applicant],
    ) -> Vec<IneligibleApplicant> {
        ineligible_applicants(eligible_codes, applicants)
    }
}

impl Default for CartAnalytics {
    fn default() -> Self {
        Self {
            config: AnalyticsConfig::default(),
        }
    }
}
