//! Error types for the Parlance system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Realisation itself is total; these errors come from parsing feature
//! values out of strings, strict feature access, and lexicon snapshots.

use std::fmt;

use thiserror::Error;

use crate::features::Feature;

/// The main error type for Parlance operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unknown-value error for a closed enumeration.
    #[must_use]
    pub fn unknown_value(domain: &'static str, value: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownValue {
            domain,
            value: value.into(),
        })
    }

    /// Creates a feature type mismatch error.
    #[must_use]
    pub fn feature_type_mismatch(
        feature: Feature,
        expected: &'static str,
        actual: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::FeatureTypeMismatch {
            feature,
            expected,
            actual: actual.into(),
        })
    }

    /// Creates a missing feature error.
    #[must_use]
    pub fn missing_feature(feature: Feature) -> Self {
        Self::new(ErrorKind::MissingFeature(feature))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization(message.into()))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A string did not name any member of a closed enumeration.
    #[error("unknown {domain}: {value:?}")]
    UnknownValue {
        /// The enumeration being parsed (e.g. "tense").
        domain: &'static str,
        /// The offending input.
        value: String,
    },

    /// A feature held a value of the wrong kind.
    #[error("feature {feature} holds {actual}, expected {expected}")]
    FeatureTypeMismatch {
        /// The feature that was read.
        feature: Feature,
        /// Description of the expected value kind.
        expected: &'static str,
        /// Description of the value actually stored.
        actual: String,
    },

    /// A required feature was absent.
    #[error("missing feature: {0}")]
    MissingFeature(Feature),

    /// Encoding or decoding a snapshot failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Reading or writing a file failed.
    #[error("io error: {0}")]
    Io(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file or lexicon name.
    pub source: Option<String>,
    /// Base form of the word being processed, if any.
    pub word: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the word being processed.
    #[must_use]
    pub fn with_word(mut self, word: impl Into<String>) -> Self {
        self.word = Some(word.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
        }
        if let Some(word) = &self.word {
            if self.source.is_some() {
                write!(f, " ")?;
            }
            write!(f, "at word {word:?}")?;
        }
        Ok(())
    }
}

/// Result type for Parlance operations.
pub type Result<T> = std::result::Result<T, Error>;
