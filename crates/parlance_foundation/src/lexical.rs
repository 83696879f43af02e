//! Lexical entries.
//!
//! An entry is identified by its base form and category and carries a
//! feature table of irregular forms and semantic flags. Entries are owned
//! by a lexicon and shared read-only (`Arc`) with the tokens that refer to
//! them.

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::feature_map::{FeatureMap, FeatureValue};
use crate::features::{Feature, Inflection, LexicalCategory};

/// An immutable lexicon record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LexicalEntry {
    /// Unique identifier within a lexicon, if assigned.
    pub id: Option<Arc<str>>,
    /// Uninflected form.
    pub base_form: Arc<str>,
    /// Lexical category.
    pub category: LexicalCategory,
    /// Irregular forms and flags.
    pub features: FeatureMap,
}

impl LexicalEntry {
    /// Creates an entry with no features.
    #[must_use]
    pub fn new(base_form: impl AsRef<str>, category: LexicalCategory) -> Self {
        Self {
            id: None,
            base_form: Arc::from(base_form.as_ref()),
            category,
            features: FeatureMap::new(),
        }
    }

    /// Sets the identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl AsRef<str>) -> Self {
        self.id = Some(Arc::from(id.as_ref()));
        self
    }

    /// Sets a feature.
    #[must_use]
    pub fn with_feature(mut self, feature: Feature, value: impl Into<FeatureValue>) -> Self {
        self.features.set(feature, value);
        self
    }

    /// Sets the default inflection pattern.
    #[must_use]
    pub fn with_inflection(self, inflection: Inflection) -> Self {
        self.with_feature(Feature::DefaultInflection, inflection)
    }

    /// Returns a string feature (e.g. an irregular form).
    #[must_use]
    pub fn string(&self, feature: Feature) -> Option<&str> {
        self.features.string(feature)
    }

    /// Returns a boolean flag.
    #[must_use]
    pub fn flag(&self, feature: Feature) -> bool {
        self.features.flag(feature)
    }

    /// Returns the default inflection pattern, treating absence as regular.
    #[must_use]
    pub fn inflection(&self) -> Inflection {
        self.features.inflection().unwrap_or(Inflection::Regular)
    }

    /// Wraps the entry for sharing.
    #[must_use]
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}
