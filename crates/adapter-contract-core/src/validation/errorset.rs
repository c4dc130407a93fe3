// crates/adapter-contract-core/src/validation/errorset.rs
// ============================================================================
// Module: Adapter Contract Error Set
// Description: Ordered, deduplicating collection of validation messages.
// Purpose: Let every validator report all violations in a single pass.
// Dependencies: indexmap, thiserror
// ============================================================================

//! ## Overview
//! [`ErrorSet`] is the shared reporting contract of all validators. Adding
//! a message that is already present is a no-op; iteration and
//! [`ErrorSet::join`] follow first-insertion order so rendered output is
//! reproducible.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use indexmap::IndexSet;
use indexmap::set::IntoIter;
use indexmap::set::Iter;
use thiserror::Error;

// ============================================================================
// SECTION: Error Set
// ============================================================================

/// Insertion-ordered set of validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet {
    /// Messages in first-insertion order.
    messages: IndexSet<String>,
}

impl ErrorSet {
    /// Creates an empty error set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message; duplicates collapse into the first occurrence.
    pub fn add(&mut self, message: impl Into<String>) {
        self.messages.insert(message.into());
    }

    /// Moves all messages of `other` into this set.
    pub fn append(&mut self, other: Self) {
        self.messages.extend(other.messages);
    }

    /// Returns true when no violation was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the number of distinct messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true when `message` was recorded.
    #[must_use]
    pub fn contains(&self, message: &str) -> bool {
        self.messages.contains(message)
    }

    /// Iterates messages in insertion order.
    pub fn iter(&self) -> Iter<'_, String> {
        self.messages.iter()
    }

    /// Renders all messages separated by `separator`.
    #[must_use]
    pub fn join(&self, separator: &str) -> String {
        let mut rendered = String::new();
        for (index, message) in self.messages.iter().enumerate() {
            if index > 0 {
                rendered.push_str(separator);
            }
            rendered.push_str(message);
        }
        rendered
    }

    /// Converts the set into a result, failing when any message was recorded.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] carrying this set when it is not empty.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                errors: self,
            })
        }
    }
}

impl fmt::Display for ErrorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(", "))
    }
}

impl IntoIterator for ErrorSet {
    type IntoIter = IntoIter<String>;
    type Item = String;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorSet {
    type IntoIter = Iter<'a, String>;
    type Item = &'a String;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for ErrorSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut errors = Self::new();
        errors.extend(iter);
        errors
    }
}

impl<S: Into<String>> Extend<S> for ErrorSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for message in iter {
            self.add(message);
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Validation failure carrying every violation found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{errors}")]
pub struct ValidationError {
    /// All recorded violations.
    errors: ErrorSet,
}

impl ValidationError {
    /// Returns the recorded violations.
    #[must_use]
    pub const fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    /// Consumes the error, returning the recorded violations.
    #[must_use]
    pub fn into_errors(self) -> ErrorSet {
        self.errors
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
