//! Postal-code membership eligibility screening

use rustc_hash::FxHashSet;
use services_common::{Applicant, EligibilityRecord, IneligibilityReason, IneligibleApplicant};
use tracing::debug;

fn eligible_set(eligible_codes: &[String]) -> FxHashSet<&str> {
    eligible_codes.iter().map(String::as_str).collect()
}

/// Screen every applicant against the eligible postal codes.
///
/// Returns one record per applicant, in input order.
#[must_use]
pub fn screen_applicants(
    eligible_codes: &[String],
    applicants: &[Applicant],
) -> Vec<EligibilityRecord> {
    let codes = eligible_set(eligible_codes);

    let records: Vec<EligibilityRecord> = applicants
        .iter()
        .map(|applicant| EligibilityRecord {
            name: applicant.name.clone(),
            is_eligible: codes.contains(applicant.postal_code.as_str()),
        })
        .collect();

    debug!(
        applicants = records.len(),
        eligible = records.iter().filter(|r| r.is_eligible).count(),
        "Screened membership applicants"
    );
    records
}

/// Only the rejected applicants, each with the rejection reason, in
/// input order.
#[must_use]
pub fn ineligible_applicants(
    eligible_codes: &[String],
    applicants: &[Applicant],
) -> Vec<IneligibleApplicant> {
    let codes = eligible_set(eligible_codes);

    applicants
        .iter()
        .filter(|applicant| !codes.contains(applicant.postal_code.as_str()))
        .map(|applicant| IneligibleApplicant {
            name: applicant.name.clone(),
            reason: IneligibilityReason::PostalCode,
        })
        .collect()
}
