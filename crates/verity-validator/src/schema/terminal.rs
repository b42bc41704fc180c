//! Terminal calls: the methods that end a chain and run the executor.

use std::future::Future;

use verity_value::Value;

use crate::executor;
use crate::schema::SchemaLike;
use crate::types::{SchemaError, TestReport};

/// Name used in report records when the caller does not supply one.
const DEFAULT_NAME: &str = "value";

/// Terminal surface of every chain view.
///
/// Each call runs one full validation pass over a snapshot of the
/// accumulated rules; the chain itself is never consumed or mutated, so one
/// built schema can be exercised any number of times.
///
/// The async variants accept a future producing the value and suspend once,
/// before the pass; validation itself never awaits.
pub trait Validatable: SchemaLike {
    /// Runs a pass and returns the full replayable report.
    fn test(&self, value: impl Into<Value>, name: &str) -> TestReport {
        let schema = self.schema();
        executor::run(&schema.config, &schema.rules, value.into(), name)
    }

    /// Runs a pass and collapses the report to its overall verdict.
    fn validate(&self, value: impl Into<Value>) -> bool {
        self.test(value, DEFAULT_NAME).passed_all
    }

    /// Runs a pass and converts the first failure into an error.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] carrying the first error record's rendered
    /// message (and the full report) when any rule fails.
    fn throw(&self, value: impl Into<Value>, name: &str) -> Result<(), SchemaError> {
        let report = self.test(value, name);
        if report.passed_all {
            Ok(())
        } else {
            Err(SchemaError::from_report(report))
        }
    }

    /// Like [`throw`](Validatable::throw), mapped into a caller error type.
    ///
    /// # Errors
    ///
    /// Returns `wrap`'s output when any rule fails.
    fn throw_with<E>(
        &self,
        value: impl Into<Value>,
        name: &str,
        wrap: impl FnOnce(SchemaError) -> E,
    ) -> Result<(), E> {
        self.throw(value, name).map_err(wrap)
    }

    /// Awaits the value, then runs [`validate`](Validatable::validate).
    fn validate_async<F>(&self, value: F) -> impl Future<Output = bool>
    where
        F: Future,
        F::Output: Into<Value>,
    {
        async move { self.validate(value.await) }
    }

    /// Awaits the value, then runs [`test`](Validatable::test).
    fn test_async<F>(&self, value: F, name: &str) -> impl Future<Output = TestReport>
    where
        F: Future,
        F::Output: Into<Value>,
    {
        async move { self.test(value.await, name) }
    }

    /// Awaits the value, then runs [`throw`](Validatable::throw).
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] when any rule fails.
    fn throw_async<F>(&self, value: F, name: &str) -> impl Future<Output = Result<(), SchemaError>>
    where
        F: Future,
        F::Output: Into<Value>,
    {
        async move { self.throw(value.await, name) }
    }
}

impl<T: SchemaLike> Validatable for T {}
