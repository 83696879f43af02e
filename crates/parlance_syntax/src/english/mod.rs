//! The English grammar.

mod words;

use parlance_foundation::{Feature, InflectedWord, InterrogativeType, LexicalEntry};
use parlance_morphology::{pronouns, rules, EnglishMorphology, Morphology, Referent};

use crate::grammar::Grammar;

/// English realisation rules.
///
/// Questions and negated simple tenses use "do"-support; indefinite
/// articles agree with the sound of the following word.
#[derive(Clone, Copy, Debug, Default)]
pub struct English {
    morphology: EnglishMorphology,
}

impl English {
    /// Creates the English grammar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Grammar for English {
    fn name(&self) -> &'static str {
        "english"
    }

    fn morphology(&self) -> &dyn Morphology {
        &self.morphology
    }

    fn default_conjunction(&self) -> &'static str {
        words::AND
    }

    fn is_plural_conjunction(&self, conjunction: &str) -> bool {
        words::PLURAL_CONJUNCTIONS.contains(&conjunction.trim().to_lowercase().as_str())
    }

    fn passive_preposition(&self) -> &'static str {
        words::BY
    }

    fn indirect_object_preposition(&self) -> &'static str {
        words::TO
    }

    fn negation_particle(&self) -> &'static str {
        words::NOT
    }

    fn infinitive_marker(&self) -> &'static str {
        words::TO
    }

    fn future_modal(&self) -> &'static str {
        words::WILL
    }

    fn passive_auxiliary(&self) -> &'static str {
        words::BE
    }

    fn progressive_auxiliary(&self) -> &'static str {
        words::BE
    }

    fn perfect_auxiliary(&self) -> &'static str {
        words::HAVE
    }

    fn support_auxiliary(&self) -> Option<&'static str> {
        Some(words::DO)
    }

    fn interrogative_keyword(&self, kind: InterrogativeType, after_preposition: bool) -> &'static str {
        words::keyword(kind, after_preposition)
    }

    fn is_copular(&self, verb: &InflectedWord, entry: Option<&LexicalEntry>) -> bool {
        verb.lexical_flag(Feature::Copular)
            || entry.is_some_and(|e| e.flag(Feature::Copular))
            || &*verb.base_form == words::BE
    }

    fn takes_do_support(&self, kind: InterrogativeType) -> bool {
        !matches!(
            kind,
            InterrogativeType::WhoSubject | InterrogativeType::WhatSubject | InterrogativeType::HowMany
        )
    }

    fn split_follows_single_verb(&self, kind: InterrogativeType) -> bool {
        // Polar questions invert a lone copula: "is the dog happy".
        kind == InterrogativeType::YesNo || kind.splits_after_verb()
    }

    fn adjust_article(&self, article: &str, next_word: &str) -> Option<&'static str> {
        let vowel = rules::starts_with_vowel(next_word);
        match article {
            "a" if vowel => Some("an"),
            "an" if !vowel => Some("a"),
            _ => None,
        }
    }

    fn pronoun_referent(&self, form: &str) -> Option<Referent> {
        pronouns::referent_of(form)
    }
}
