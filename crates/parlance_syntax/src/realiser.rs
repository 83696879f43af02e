//! The recursive dispatcher.
//!
//! [`Realiser`] walks a feature tree depth first. Phrase nodes go to the
//! realiser for their category, words go to the morphology engine, and
//! literal text passes through trimmed. The tree is mutated in place
//! (agreement and mood features are written onto nodes), so a realiser
//! call needs exclusive access to the tree; the realiser itself and its
//! lexicon can be shared.

use std::sync::Arc;

use tracing::debug;

use parlance_foundation::{
    CoordinatedElement, Element, Feature, FeatureMap, InflectedWord, LexicalEntry, PhraseCategory,
    PhraseElement, Realized,
};
use parlance_lexicon::{Lexicon, LexiconSource};
use parlance_morphology::Context;

use crate::config::RealiserConfig;
use crate::english::English;
use crate::grammar::Grammar;
use crate::{coordination, phrase, verb_phrase};

/// The node a child is realised under.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Parent {
    /// Features visible to the child.
    pub features: FeatureMap,
    /// Category of the enclosing phrase, if any.
    pub category: Option<PhraseCategory>,
}

impl Parent {
    /// The parent of a top-level element.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a parent context.
    #[must_use]
    pub fn new(features: FeatureMap, category: PhraseCategory) -> Self {
        Self {
            features,
            category: Some(category),
        }
    }

    /// The context a phrase provides to its own children.
    #[must_use]
    pub fn of(phrase: &PhraseElement) -> Self {
        Self::new(phrase.features.clone(), phrase.category)
    }
}

/// Turns feature trees into realised output.
#[derive(Debug)]
pub struct Realiser {
    grammar: Box<dyn Grammar>,
    lexicon: Arc<dyn LexiconSource>,
    config: RealiserConfig,
}

impl Realiser {
    /// Creates a realiser for a grammar and lexicon.
    #[must_use]
    pub fn new(grammar: impl Grammar + 'static, lexicon: Arc<dyn LexiconSource>) -> Self {
        Self {
            grammar: Box::new(grammar),
            lexicon,
            config: RealiserConfig::default(),
        }
    }

    /// Creates an English realiser over the built-in core lexicon.
    #[must_use]
    pub fn english() -> Self {
        Self::new(English::new(), Arc::new(Lexicon::english_core()))
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: RealiserConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the grammar.
    #[must_use]
    pub fn grammar(&self) -> &dyn Grammar {
        self.grammar.as_ref()
    }

    /// Returns the lexicon.
    #[must_use]
    pub fn lexicon(&self) -> &dyn LexiconSource {
        self.lexicon.as_ref()
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &RealiserConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Entry points
    // ------------------------------------------------------------------

    /// Realises a top-level element.
    pub fn realise(&self, element: &mut Element) -> Realized {
        if self.config.debug {
            debug!(grammar = self.grammar.name(), tree = ?element, "realising");
        }
        let realized = self.realise_in(element, &Parent::root());
        if self.config.debug {
            debug!(text = %realized.to_text(), "realised");
        }
        realized
    }

    /// Realises a top-level element and joins the words with spaces.
    pub fn realise_sentence(&self, element: &mut Element) -> String {
        self.realise(element).to_text()
    }

    /// Realises independent trees in order.
    pub fn realise_all(&self, elements: &mut [Element]) -> Vec<Realized> {
        elements.iter_mut().map(|element| self.realise(element)).collect()
    }

    // ------------------------------------------------------------------
    // Recursion
    // ------------------------------------------------------------------

    /// Realises an element under a parent.
    pub fn realise_in(&self, element: &mut Element, parent: &Parent) -> Realized {
        let features = element.features();
        let function = features.discourse_function();
        let appositive = features.flag(Feature::Appositive);

        if features.flag(Feature::Elided) {
            let mut empty = Realized::empty();
            if let Some(function) = function {
                empty.set_function(function);
            }
            return empty;
        }

        let mut realized = match element {
            Element::Phrase(phrase) => self.realise_phrase(phrase, parent),
            Element::Word(word) => Realized::word(self.inflect(word, parent), Some(word.category)),
            Element::Coordinated(coordination) => self.realise_coordination(coordination, parent),
            Element::Text(text) => Realized::word(text.text.trim(), None),
        };

        if let Some(function) = function {
            realized.set_function(function);
        }
        if appositive {
            if let Realized::List(list) = &mut realized {
                list.appositive = true;
            }
        }
        realized
    }

    fn realise_phrase(&self, phrase: &mut PhraseElement, parent: &Parent) -> Realized {
        match phrase.category {
            PhraseCategory::Clause => self.grammar.realize_clause(self, phrase, parent),
            PhraseCategory::NounPhrase => self.grammar.realize_noun_phrase(self, phrase, parent),
            PhraseCategory::VerbPhrase => verb_phrase::realize(self.grammar(), self, phrase, parent),
            PhraseCategory::AdjectivePhrase
            | PhraseCategory::AdverbPhrase
            | PhraseCategory::PrepositionalPhrase
            | PhraseCategory::CannedText => phrase::realize(self, phrase, parent),
        }
    }

    fn realise_coordination(&self, coordination: &mut CoordinatedElement, parent: &Parent) -> Realized {
        coordination::realize(self, coordination, parent)
    }

    /// Inflects a single token under a parent.
    #[must_use]
    pub fn inflect(&self, word: &InflectedWord, parent: &Parent) -> String {
        let context = Context::new(&parent.features).in_phrase(parent.category);
        let context = if self.config.lookup_missing_entries {
            context.with_lexicon(self.lexicon.as_ref())
        } else {
            context
        };
        self.grammar.morphology().inflect(word, &context)
    }

    /// Returns the entry backing a token, looking it up if allowed.
    #[must_use]
    pub fn entry_for(&self, word: &InflectedWord) -> Option<Arc<LexicalEntry>> {
        word.entry.clone().or_else(|| {
            if self.config.lookup_missing_entries {
                self.lexicon.lookup(&word.base_form, word.category)
            } else {
                None
            }
        })
    }
}

impl Default for Realiser {
    fn default() -> Self {
        Self::english()
    }
}
