//! The feature tree handed to the realiser.
//!
//! A tree is built once by the caller, owned by the caller, and mutated in
//! place during realisation (agreement and mood features are written onto
//! nodes). The constructors and `with_*` builders here are conveniences
//! for assembling trees; they are not a phrase factory.

use std::sync::Arc;

use crate::feature_map::{FeatureMap, FeatureValue};
use crate::features::{DiscourseFunction, Feature, LexicalCategory, PhraseCategory};
use crate::lexical::LexicalEntry;

/// A node of the feature tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    /// Phrase or clause with named child slots.
    Phrase(PhraseElement),
    /// Single lexical token to be inflected.
    Word(InflectedWord),
    /// Coordination of several elements.
    Coordinated(CoordinatedElement),
    /// Pre-realised text.
    Text(TextElement),
}

impl Element {
    /// Creates a word element.
    #[must_use]
    pub fn word(base_form: impl AsRef<str>, category: LexicalCategory) -> Self {
        Self::Word(InflectedWord::new(base_form, category))
    }

    /// Creates a literal text element.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(TextElement::new(text))
    }

    /// Returns this node's feature table.
    #[must_use]
    pub fn features(&self) -> &FeatureMap {
        match self {
            Self::Phrase(p) => &p.features,
            Self::Word(w) => &w.features,
            Self::Coordinated(c) => &c.features,
            Self::Text(t) => &t.features,
        }
    }

    /// Returns this node's feature table mutably.
    pub fn features_mut(&mut self) -> &mut FeatureMap {
        match self {
            Self::Phrase(p) => &mut p.features,
            Self::Word(w) => &mut w.features,
            Self::Coordinated(c) => &mut c.features,
            Self::Text(t) => &mut t.features,
        }
    }

    /// Sets a feature on this node.
    pub fn set_feature(&mut self, feature: Feature, value: impl Into<FeatureValue>) {
        self.features_mut().set(feature, value);
    }

    /// Builder form of [`Element::set_feature`].
    #[must_use]
    pub fn with_feature(mut self, feature: Feature, value: impl Into<FeatureValue>) -> Self {
        self.set_feature(feature, value);
        self
    }

    /// Returns the discourse function this node fills, if tagged.
    #[must_use]
    pub fn discourse_function(&self) -> Option<DiscourseFunction> {
        self.features().discourse_function()
    }

    /// Tags this node with a discourse function.
    pub fn set_discourse_function(&mut self, function: DiscourseFunction) {
        self.set_feature(Feature::DiscourseFunction, function);
    }

    /// Returns the phrase category, if this is a phrase.
    #[must_use]
    pub fn phrase_category(&self) -> Option<PhraseCategory> {
        match self {
            Self::Phrase(p) => Some(p.category),
            _ => None,
        }
    }

    /// Returns true if this is a phrase of the given category.
    #[must_use]
    pub fn is_phrase(&self, category: PhraseCategory) -> bool {
        self.phrase_category() == Some(category)
    }

    /// Returns the lexical category, if this is a word.
    #[must_use]
    pub fn lexical_category(&self) -> Option<LexicalCategory> {
        match self {
            Self::Word(w) => Some(w.category),
            _ => None,
        }
    }

    /// Returns the phrase, if this is one.
    #[must_use]
    pub fn as_phrase(&self) -> Option<&PhraseElement> {
        match self {
            Self::Phrase(p) => Some(p),
            _ => None,
        }
    }

    /// Returns the phrase mutably, if this is one.
    pub fn as_phrase_mut(&mut self) -> Option<&mut PhraseElement> {
        match self {
            Self::Phrase(p) => Some(p),
            _ => None,
        }
    }

    /// Returns the word, if this is one.
    #[must_use]
    pub fn as_word(&self) -> Option<&InflectedWord> {
        match self {
            Self::Word(w) => Some(w),
            _ => None,
        }
    }

    /// Returns the coordination, if this is one.
    #[must_use]
    pub fn as_coordinated(&self) -> Option<&CoordinatedElement> {
        match self {
            Self::Coordinated(c) => Some(c),
            _ => None,
        }
    }

    /// Returns the head word of a phrase (following nested heads), or the word itself.
    #[must_use]
    pub fn head_word(&self) -> Option<&InflectedWord> {
        match self {
            Self::Word(w) => Some(w),
            Self::Phrase(p) => p.head.as_deref().and_then(Element::head_word),
            _ => None,
        }
    }
}

impl From<PhraseElement> for Element {
    fn from(p: PhraseElement) -> Self {
        Self::Phrase(p)
    }
}

impl From<InflectedWord> for Element {
    fn from(w: InflectedWord) -> Self {
        Self::Word(w)
    }
}

impl From<CoordinatedElement> for Element {
    fn from(c: CoordinatedElement) -> Self {
        Self::Coordinated(c)
    }
}

impl From<TextElement> for Element {
    fn from(t: TextElement) -> Self {
        Self::Text(t)
    }
}

/// A phrase or clause node.
#[derive(Clone, Debug, PartialEq)]
pub struct PhraseElement {
    /// Phrase category.
    pub category: PhraseCategory,
    /// Feature table.
    pub features: FeatureMap,
    /// Determiner or possessor.
    pub specifier: Option<Box<Element>>,
    /// Pre-head modifiers, in order.
    pub premodifiers: Vec<Element>,
    /// Head.
    pub head: Option<Box<Element>>,
    /// Complements, each tagged with a discourse function.
    pub complements: Vec<Element>,
    /// Post-head modifiers, in order.
    pub postmodifiers: Vec<Element>,
    /// Sentence-initial modifiers, in order (clauses).
    pub front_modifiers: Vec<Element>,
    /// Verb phrase (clauses).
    pub verb_phrase: Option<Box<Element>>,
    /// Subjects (clauses); several for coordination-like listing.
    pub subjects: Vec<Element>,
    /// Cue phrase (clauses).
    pub cue_phrase: Option<Box<Element>>,
}

impl PhraseElement {
    /// Creates an empty phrase of the given category.
    #[must_use]
    pub fn new(category: PhraseCategory) -> Self {
        Self {
            category,
            features: FeatureMap::new(),
            specifier: None,
            premodifiers: Vec::new(),
            head: None,
            complements: Vec::new(),
            postmodifiers: Vec::new(),
            front_modifiers: Vec::new(),
            verb_phrase: None,
            subjects: Vec::new(),
            cue_phrase: None,
        }
    }

    /// Creates an empty clause.
    #[must_use]
    pub fn clause() -> Self {
        Self::new(PhraseCategory::Clause)
    }

    /// Creates a noun phrase with the given head.
    #[must_use]
    pub fn noun_phrase(head: impl Into<Element>) -> Self {
        Self::new(PhraseCategory::NounPhrase).with_head(head)
    }

    /// Creates a verb phrase with the given head.
    #[must_use]
    pub fn verb_phrase(head: impl Into<Element>) -> Self {
        Self::new(PhraseCategory::VerbPhrase).with_head(head)
    }

    /// Creates an adjective phrase with the given head.
    #[must_use]
    pub fn adjective_phrase(head: impl Into<Element>) -> Self {
        Self::new(PhraseCategory::AdjectivePhrase).with_head(head)
    }

    /// Creates an adverb phrase with the given head.
    #[must_use]
    pub fn adverb_phrase(head: impl Into<Element>) -> Self {
        Self::new(PhraseCategory::AdverbPhrase).with_head(head)
    }

    /// Creates a prepositional phrase `preposition object`.
    #[must_use]
    pub fn prepositional_phrase(preposition: impl AsRef<str>, object: impl Into<Element>) -> Self {
        Self::new(PhraseCategory::PrepositionalPhrase)
            .with_head(Element::word(preposition, LexicalCategory::Preposition))
            .with_complement(object, DiscourseFunction::Object)
    }

    /// Sets a feature.
    #[must_use]
    pub fn with_feature(mut self, feature: Feature, value: impl Into<FeatureValue>) -> Self {
        self.features.set(feature, value);
        self
    }

    /// Sets the head.
    #[must_use]
    pub fn with_head(mut self, head: impl Into<Element>) -> Self {
        let mut head = head.into();
        head.set_discourse_function(DiscourseFunction::Head);
        self.head = Some(Box::new(head));
        self
    }

    /// Sets the specifier.
    #[must_use]
    pub fn with_specifier(mut self, specifier: impl Into<Element>) -> Self {
        let mut specifier = specifier.into();
        specifier.set_discourse_function(DiscourseFunction::Specifier);
        self.specifier = Some(Box::new(specifier));
        self
    }

    /// Appends a premodifier.
    #[must_use]
    pub fn with_premodifier(mut self, modifier: impl Into<Element>) -> Self {
        let mut modifier = modifier.into();
        modifier.set_discourse_function(DiscourseFunction::PreModifier);
        self.premodifiers.push(modifier);
        self
    }

    /// Appends a postmodifier.
    #[must_use]
    pub fn with_postmodifier(mut self, modifier: impl Into<Element>) -> Self {
        let mut modifier = modifier.into();
        modifier.set_discourse_function(DiscourseFunction::PostModifier);
        self.postmodifiers.push(modifier);
        self
    }

    /// Appends a front modifier.
    #[must_use]
    pub fn with_front_modifier(mut self, modifier: impl Into<Element>) -> Self {
        let mut modifier = modifier.into();
        modifier.set_discourse_function(DiscourseFunction::FrontModifier);
        self.front_modifiers.push(modifier);
        self
    }

    /// Appends a complement tagged with `function`.
    #[must_use]
    pub fn with_complement(mut self, complement: impl Into<Element>, function: DiscourseFunction) -> Self {
        let mut complement = complement.into();
        complement.set_discourse_function(function);
        self.complements.push(complement);
        self
    }

    /// Appends a direct object.
    #[must_use]
    pub fn with_object(self, object: impl Into<Element>) -> Self {
        self.with_complement(object, DiscourseFunction::Object)
    }

    /// Appends an indirect object.
    #[must_use]
    pub fn with_indirect_object(self, object: impl Into<Element>) -> Self {
        self.with_complement(object, DiscourseFunction::IndirectObject)
    }

    /// Appends a subject.
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<Element>) -> Self {
        let mut subject = subject.into();
        subject.set_discourse_function(DiscourseFunction::Subject);
        self.subjects.push(subject);
        self
    }

    /// Sets the verb phrase.
    #[must_use]
    pub fn with_verb_phrase(mut self, verb_phrase: impl Into<Element>) -> Self {
        let mut verb_phrase = verb_phrase.into();
        verb_phrase.set_discourse_function(DiscourseFunction::VerbPhrase);
        self.verb_phrase = Some(Box::new(verb_phrase));
        self
    }

    /// Sets the cue phrase.
    #[must_use]
    pub fn with_cue_phrase(mut self, cue: impl Into<Element>) -> Self {
        let mut cue = cue.into();
        cue.set_discourse_function(DiscourseFunction::Cue);
        self.cue_phrase = Some(Box::new(cue));
        self
    }

    /// Returns the verb phrase slot, or the head when no verb phrase is set.
    #[must_use]
    pub fn verb_element(&self) -> Option<&Element> {
        self.verb_phrase.as_deref().or(self.head.as_deref())
    }

    /// Mutable form of [`PhraseElement::verb_element`].
    pub fn verb_element_mut(&mut self) -> Option<&mut Element> {
        match self.verb_phrase {
            Some(ref mut vp) => Some(vp.as_mut()),
            None => self.head.as_deref_mut(),
        }
    }
}

/// A lexical token awaiting inflection.
#[derive(Clone, Debug, PartialEq)]
pub struct InflectedWord {
    /// Uninflected form.
    pub base_form: Arc<str>,
    /// Lexical category.
    pub category: LexicalCategory,
    /// Backing lexical entry, if looked up.
    pub entry: Option<Arc<LexicalEntry>>,
    /// Per-occurrence feature overrides.
    pub features: FeatureMap,
}

impl InflectedWord {
    /// Creates a token with no backing entry.
    #[must_use]
    pub fn new(base_form: impl AsRef<str>, category: LexicalCategory) -> Self {
        Self {
            base_form: Arc::from(base_form.as_ref()),
            category,
            entry: None,
            features: FeatureMap::new(),
        }
    }

    /// Creates a token backed by a lexical entry.
    #[must_use]
    pub fn from_entry(entry: Arc<LexicalEntry>) -> Self {
        Self {
            base_form: Arc::clone(&entry.base_form),
            category: entry.category,
            entry: Some(entry),
            features: FeatureMap::new(),
        }
    }

    /// Sets a feature.
    #[must_use]
    pub fn with_feature(mut self, feature: Feature, value: impl Into<FeatureValue>) -> Self {
        self.features.set(feature, value);
        self
    }

    /// Reads a feature from the token, then from its entry.
    #[must_use]
    pub fn lexical(&self, feature: Feature) -> Option<&FeatureValue> {
        self.features
            .get(feature)
            .or_else(|| self.entry.as_ref().and_then(|e| e.features.get(feature)))
    }

    /// Reads a boolean flag from the token, then from its entry.
    #[must_use]
    pub fn lexical_flag(&self, feature: Feature) -> bool {
        matches!(self.lexical(feature), Some(FeatureValue::Bool(true)))
    }
}

/// A coordination of elements.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CoordinatedElement {
    /// The conjuncts, in order.
    pub coordinates: Vec<Element>,
    /// Feature table; some features cascade to the conjuncts.
    pub features: FeatureMap,
}

impl CoordinatedElement {
    /// Creates a coordination of the given elements.
    #[must_use]
    pub fn new(coordinates: impl IntoIterator<Item = Element>) -> Self {
        Self {
            coordinates: coordinates.into_iter().collect(),
            features: FeatureMap::new(),
        }
    }

    /// Sets the conjunction word.
    #[must_use]
    pub fn with_conjunction(mut self, conjunction: impl AsRef<str>) -> Self {
        self.features.set(Feature::Conjunction, conjunction.as_ref());
        self
    }

    /// Sets a feature.
    #[must_use]
    pub fn with_feature(mut self, feature: Feature, value: impl Into<FeatureValue>) -> Self {
        self.features.set(feature, value);
        self
    }

    /// Returns the conjunction word, if one was set.
    #[must_use]
    pub fn conjunction(&self) -> Option<&str> {
        self.features.string(Feature::Conjunction)
    }
}

/// Opaque pre-realised text.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TextElement {
    /// The text.
    pub text: String,
    /// Feature table.
    pub features: FeatureMap,
}

impl TextElement {
    /// Creates a text element.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            features: FeatureMap::new(),
        }
    }
}
