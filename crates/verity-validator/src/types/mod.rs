//! Report and error types: the shapes terminal calls hand back.

pub mod error;
pub mod report;

pub use error::SchemaError;
pub use report::{ErrorCategory, ErrorRecord, SuccessRecord, TestReport};
