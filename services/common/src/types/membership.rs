//! Membership types for postal-code eligibility screening

use serde::{Deserialize, Serialize};
use std::fmt;

/// A membership applicant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    /// Applicant display name
    pub name: String,

    /// Postal code on the application
    pub postal_code: String,
}

impl Applicant {
    /// Create a new applicant
    #[must_use]
    pub fn new(name: impl Into<String>, postal_code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            postal_code: postal_code.into(),
        }
    }
}

/// Screening outcome for one applicant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityRecord {
    /// Applicant display name
    pub name: String,

    /// Whether the applicant's postal code is in the eligible set
    pub is_eligible: bool,
}

/// Why an applicant was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IneligibilityReason {
    /// Postal code outside the eligible set
    PostalCode,
}

impl fmt::Display for IneligibilityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PostalCode => f.write_str("Ineligible postal code"),
        }
    }
}

/// A rejected applicant with the rejection reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IneligibleApplicant {
    /// Applicant display name
    pub name: String,

    /// Rejection reason
    pub reason: IneligibilityReason,
}
