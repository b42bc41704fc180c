//! Rule descriptors: the data model produced by the builder and consumed by
//! the executor.

pub mod formats;
pub mod rule;

pub use formats::{DateFormat, TimeFormat, UuidVersion};
pub use rule::{Predicate, Rule, RuleSpec};
