//! The per-language strategy.
//!
//! A [`Grammar`] supplies the closed-class words and the few decisions
//! that differ between languages. The three realisation entry points have
//! default implementations that run the shared algorithms against those
//! hooks; a language overrides them only when its word order differs.

use std::fmt;

use parlance_foundation::{
    FeatureMap, Form, InflectedWord, InterrogativeType, LexicalEntry, PhraseElement, Realized,
};
use parlance_morphology::{Morphology, Referent};

use crate::realiser::{Parent, Realiser};
use crate::{clause, noun_phrase, verb_group};

/// Language-specific realisation rules.
pub trait Grammar: Send + Sync + fmt::Debug {
    /// Short language name, used in logs.
    fn name(&self) -> &'static str;

    /// The inflection tables for this language.
    fn morphology(&self) -> &dyn Morphology;

    // ------------------------------------------------------------------
    // Closed-class words
    // ------------------------------------------------------------------

    /// Conjunction used when a coordination names none.
    fn default_conjunction(&self) -> &'static str;

    /// Returns true if coordinating with `conjunction` makes a plural.
    fn is_plural_conjunction(&self, conjunction: &str) -> bool;

    /// Preposition introducing the agent of a passive.
    fn passive_preposition(&self) -> &'static str;

    /// Preposition fronted by an indirect-object question.
    fn indirect_object_preposition(&self) -> &'static str;

    /// Negation particle.
    fn negation_particle(&self) -> &'static str;

    /// Marker occupying the modal slot of an infinitive.
    fn infinitive_marker(&self) -> &'static str;

    /// Modal marking future tense.
    fn future_modal(&self) -> &'static str;

    /// Auxiliary of the passive.
    fn passive_auxiliary(&self) -> &'static str;

    /// Auxiliary of the progressive.
    fn progressive_auxiliary(&self) -> &'static str;

    /// Auxiliary of the perfect.
    fn perfect_auxiliary(&self) -> &'static str;

    /// Dummy auxiliary carrying tense under negation and inversion, if any.
    fn support_auxiliary(&self) -> Option<&'static str>;

    /// Question word(s) for an interrogative type.
    ///
    /// `after_preposition` selects the oblique form ("whom").
    fn interrogative_keyword(&self, kind: InterrogativeType, after_preposition: bool) -> &'static str;

    // ------------------------------------------------------------------
    // Decisions
    // ------------------------------------------------------------------

    /// Returns true if the verb is copular.
    fn is_copular(&self, verb: &InflectedWord, entry: Option<&LexicalEntry>) -> bool;

    /// Returns true if this question type inverts through the support auxiliary.
    fn takes_do_support(&self, kind: InterrogativeType) -> bool;

    /// Returns true if a split marker follows a verb group of a single word.
    fn split_follows_single_verb(&self, kind: InterrogativeType) -> bool {
        kind.splits_after_verb()
    }

    /// Form an imperative clause takes when it fills an object slot.
    fn object_clause_form(&self) -> Form {
        Form::Infinitive
    }

    /// Form an imperative clause takes when it fills the subject slot.
    fn subject_clause_form(&self) -> Form {
        Form::Gerund
    }

    /// Replacement for an article given the next word, if it changes.
    fn adjust_article(&self, article: &str, next_word: &str) -> Option<&'static str>;

    /// Person, number, and gender of a pronoun form.
    fn pronoun_referent(&self, form: &str) -> Option<Referent>;

    // ------------------------------------------------------------------
    // Realisation entry points
    // ------------------------------------------------------------------

    /// Realises a clause.
    fn realize_clause(&self, realiser: &Realiser, clause: &mut PhraseElement, parent: &Parent) -> Realized {
        clause::realize(self, realiser, clause, parent)
    }

    /// Builds the ordered verb group for a head verb, front to back.
    fn build_verb_group(
        &self,
        realiser: &Realiser,
        head: &InflectedWord,
        features: &FeatureMap,
    ) -> Vec<InflectedWord> {
        verb_group::build(self, realiser, head, features)
    }

    /// Realises a noun phrase.
    fn realize_noun_phrase(
        &self,
        realiser: &Realiser,
        phrase: &mut PhraseElement,
        parent: &Parent,
    ) -> Realized {
        noun_phrase::realize(self, realiser, phrase, parent)
    }
}
