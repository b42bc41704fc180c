//! Materialized errors.
//!
//! Validation failures are normally data (error records in the report);
//! only the `throw` terminals convert the first failure into an actual
//! error value, optionally through a caller-supplied constructor.

use thiserror::Error;

use super::report::TestReport;

/// The default materialized error kind produced by `throw`/`throw_async`.
///
/// Carries the rendered message of the *first* error record plus the full
/// report for consumers that want more than the headline.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct SchemaError {
    message: String,
    report: TestReport,
}

impl SchemaError {
    /// Builds the error from a failing report.
    ///
    /// The message falls back to a generic line if the report somehow failed
    /// without any error record.
    #[must_use]
    pub fn from_report(report: TestReport) -> Self {
        let message = report
            .first_error_message()
            .unwrap_or("validation failed")
            .to_string();
        Self { message, report }
    }

    /// The first failure's rendered message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The full report behind this error.
    #[must_use]
    pub fn report(&self) -> &TestReport {
        &self.report
    }
}
