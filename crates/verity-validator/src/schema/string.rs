//! Text chain view and its string-only rules.

use regex::Regex;

use crate::rules::{RuleSpec, UuidVersion};
use crate::schema::{SchemaLike, schema_view};

schema_view! {
    /// Chain view after `string()`.
    StringSchema
}

impl StringSchema {
    /// Lower bound on length, counted in Unicode scalar values.
    #[must_use]
    pub fn min_length(self, min: usize) -> Self {
        self.append(RuleSpec::MinLength { min })
    }

    /// Upper bound on length, counted in Unicode scalar values.
    #[must_use]
    pub fn max_length(self, max: usize) -> Self {
        self.append(RuleSpec::MaxLength { max })
    }

    /// Minimum number of whitespace-separated words.
    #[must_use]
    pub fn min_word(self, min: usize) -> Self {
        self.append(RuleSpec::MinWord { min })
    }

    /// The text must match the pattern.
    ///
    /// # Panics
    ///
    /// Panics when the pattern is not a valid regular expression; a broken
    /// pattern is a builder misuse, not a validation failure.
    #[must_use]
    pub fn regex(self, pattern: &str) -> Self {
        let regex = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("regex expects a valid pattern: {e}"));
        self.append(RuleSpec::Pattern { regex })
    }

    /// The text must be a well-formed email address.
    #[must_use]
    pub fn email(self) -> Self {
        self.append(RuleSpec::Email)
    }

    /// The text must be a well-formed UUID of any version.
    #[must_use]
    pub fn uuid(self) -> Self {
        self.append(RuleSpec::Uuid { version: None })
    }

    /// The text must be a well-formed UUID of the given version.
    #[must_use]
    pub fn uuid_version(self, version: UuidVersion) -> Self {
        self.append(RuleSpec::Uuid {
            version: Some(version),
        })
    }
}
