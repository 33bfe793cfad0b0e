use chrono::NaiveDate;

use super::error::{SiapError, ValidationError};
use super::types::ReportRequest;

/// Validate a report request against `today`.
/// Returns all validation errors found (not just the first).
pub fn validate_request(request: &ReportRequest, today: NaiveDate) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if request.cutoff_date > today {
        errors.push(ValidationError::new(
            "cutoff_date",
            format!(
                "export date {} cannot be in the future (today is {today})",
                request.cutoff_date
            ),
        ));
    }

    if request.company.name.trim().is_empty() {
        errors.push(ValidationError::new("company.name", "company name must not be empty"));
    }

    errors
}

/// Like [`validate_request`], folding any errors into [`SiapError::Validation`].
pub fn ensure_valid(request: &ReportRequest, today: NaiveDate) -> Result<(), SiapError> {
    let errors = validate_request(request, today);
    if errors.is_empty() {
        return Ok(());
    }
    let joined = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    Err(SiapError::Validation(joined))
}
