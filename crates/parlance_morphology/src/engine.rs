//! The morphology interface.

use std::fmt;
use std::sync::Arc;

use parlance_foundation::{
    Feature, FeatureMap, FeatureValue, FromFeatureValue, Inflection, InflectedWord, LexicalEntry,
    PhraseCategory, PronounPosition,
};
use parlance_lexicon::LexiconSource;

use crate::pronouns::Referent;

/// Where a token is being inflected.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    /// Feature table of the enclosing node.
    pub parent: &'a FeatureMap,
    /// Category of the enclosing phrase, if any.
    pub parent_category: Option<PhraseCategory>,
    /// Lexicon used for tokens without an entry; `None` inflects by rule.
    pub lexicon: Option<&'a dyn LexiconSource>,
}

impl<'a> Context<'a> {
    /// Creates a context with no lexicon.
    #[must_use]
    pub fn new(parent: &'a FeatureMap) -> Self {
        Self {
            parent,
            parent_category: None,
            lexicon: None,
        }
    }

    /// Sets the enclosing phrase category.
    #[must_use]
    pub fn in_phrase(mut self, category: Option<PhraseCategory>) -> Self {
        self.parent_category = category;
        self
    }

    /// Sets the lexicon.
    #[must_use]
    pub fn with_lexicon(mut self, lexicon: &'a dyn LexiconSource) -> Self {
        self.lexicon = Some(lexicon);
        self
    }
}

impl fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("parent", self.parent)
            .field("parent_category", &self.parent_category)
            .field("lexicon", &self.lexicon.is_some())
            .finish()
    }
}

/// Turns a token into its surface form.
///
/// Inflection never fails. Each form is resolved from the token's own
/// features, then its lexical entry, then the rule table; tokens marked
/// [`Feature::NonMorph`] come back unchanged.
pub trait Morphology: Send + Sync + fmt::Debug {
    /// Inflects a token.
    fn inflect(&self, word: &InflectedWord, context: &Context<'_>) -> String;

    /// Selects a personal pronoun.
    fn pronoun(&self, referent: Referent, position: PronounPosition) -> String;
}

/// A token paired with its resolved entry and context.
pub(crate) struct Token<'w, 'c> {
    pub word: &'w InflectedWord,
    pub entry: Option<Arc<LexicalEntry>>,
    pub context: &'w Context<'c>,
}

impl<'w, 'c> Token<'w, 'c> {
    pub fn resolve(word: &'w InflectedWord, context: &'w Context<'c>) -> Self {
        let entry = word.entry.clone().or_else(|| {
            context
                .lexicon
                .and_then(|lexicon| lexicon.lookup(&word.base_form, word.category))
        });
        Self {
            word,
            entry,
            context,
        }
    }

    pub fn base(&self) -> &str {
        &self.word.base_form
    }

    /// Lexical feature from the token, then the entry.
    pub fn lexical(&self, feature: Feature) -> Option<&FeatureValue> {
        self.word
            .features
            .get(feature)
            .or_else(|| self.entry.as_ref().and_then(|e| e.features.get(feature)))
    }

    pub fn lexical_str(&self, feature: Feature) -> Option<&str> {
        self.lexical(feature).and_then(FeatureValue::as_str)
    }

    pub fn lexical_flag(&self, feature: Feature) -> bool {
        matches!(self.lexical(feature), Some(FeatureValue::Bool(true)))
    }

    pub fn inflection(&self) -> Inflection {
        self.lexical(Feature::DefaultInflection)
            .and_then(Inflection::from_feature_value)
            .unwrap_or(Inflection::Regular)
    }

    /// Own feature, falling back to the parent for inheriting features.
    pub fn inherited<T: FromFeatureValue>(&self, feature: Feature) -> Option<T> {
        self.word
            .features
            .inherited(self.context.parent, feature)
            .and_then(T::from_feature_value)
    }

    /// Own flag or the parent's.
    pub fn flag_or_parent(&self, feature: Feature) -> bool {
        self.word.features.flag(feature) || self.context.parent.flag(feature)
    }
}
