//! Presence and format checks for registrants and lead batches
//!
//! Validation only checks that fields are non-empty after trimming and that
//! the email contains `@`. Values are returned trimmed and otherwise verbatim.

use crate::error::LeadwheelError;
use crate::model::LeadInput;

/// Smallest accepted lead batch
pub const MIN_BATCH_SIZE: usize = 3;

/// Largest accepted lead batch
pub const MAX_BATCH_SIZE: usize = 5;

/// Label used in batch errors when the offending lead has no name
const EMPTY_NAME_PLACEHOLDER: &str = "empty name";

/// Validate a registrant and return its trimmed fields.
///
/// # Examples
///
/// ```
/// use leadwheel_common::{LeadInput, validation::validate_registrant};
///
/// let lead = validate_registrant(&LeadInput::new(" Ana ", "ana@example.com", "123")).unwrap();
/// assert_eq!(lead.name, "Ana");
/// assert!(validate_registrant(&LeadInput::new("Ana", "ana.example.com", "123")).is_err());
/// ```
pub fn validate_registrant(input: &LeadInput) -> Result<LeadInput, LeadwheelError> {
    let lead = input.trimmed();

    if let Some(field) = first_missing_field(&lead) {
        return Err(LeadwheelError::validation(format!("{} is required", field)));
    }
    if !lead.email.contains('@') {
        return Err(LeadwheelError::validation("invalid email: must contain '@'"));
    }

    Ok(lead)
}

/// Validate a whole lead batch before anything is written.
///
/// Checks run in order: reference present, batch size within
/// [`MIN_BATCH_SIZE`, `MAX_BATCH_SIZE`], then every lead in order. The first
/// failing lead is reported by name.
pub fn validate_batch(
    reference: &str,
    leads: &[LeadInput],
) -> Result<(String, Vec<LeadInput>), LeadwheelError> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Err(LeadwheelError::validation(
            "reference of the registrant is required",
        ));
    }

    if leads.len() < MIN_BATCH_SIZE {
        return Err(LeadwheelError::validation(format!(
            "at least {} leads are required",
            MIN_BATCH_SIZE
        )));
    }
    if leads.len() > MAX_BATCH_SIZE {
        return Err(LeadwheelError::validation(format!(
            "at most {} leads are allowed",
            MAX_BATCH_SIZE
        )));
    }

    let mut accepted = Vec::with_capacity(leads.len());
    for input in leads {
        let lead = input.trimmed();
        let label = if lead.name.is_empty() {
            EMPTY_NAME_PLACEHOLDER
        } else {
            lead.name.as_str()
        };

        if let Some(field) = first_missing_field(&lead) {
            return Err(LeadwheelError::validation(format!(
                "{} is required for lead: {}",
                field, label
            )));
        }
        if !lead.email.contains('@') {
            return Err(LeadwheelError::validation(format!(
                "invalid email for lead: {}",
                label
            )));
        }

        accepted.push(lead);
    }

    Ok((reference.to_string(), accepted))
}

fn first_missing_field(lead: &LeadInput) -> Option<&'static str> {
    if lead.name.is_empty() {
        Some("name")
    } else if lead.email.is_empty() {
        Some("email")
    } else if lead.phone.is_empty() {
        Some("phone")
    } else {
        None
    }
}
