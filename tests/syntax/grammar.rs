//! Integration tests for the grammar strategy seam
//!
//! A grammar without a support auxiliary, delegating everything else to
//! English, changes negation and inversion without touching the shared
//! algorithms.

use std::sync::Arc;

use parlance_foundation::{
    Element, Feature, InflectedWord, InterrogativeType, LexicalEntry, PhraseElement,
};
use parlance_lexicon::Lexicon;
use parlance_morphology::{Morphology, Referent};
use parlance_syntax::{English, Grammar, Realiser};

use crate::common::dog_chases_cat;

#[derive(Debug, Default)]
struct NoSupport {
    english: English,
}

impl Grammar for NoSupport {
    fn name(&self) -> &'static str {
        "no-support"
    }

    fn morphology(&self) -> &dyn Morphology {
        self.english.morphology()
    }

    fn default_conjunction(&self) -> &'static str {
        self.english.default_conjunction()
    }

    fn is_plural_conjunction(&self, conjunction: &str) -> bool {
        self.english.is_plural_conjunction(conjunction)
    }

    fn passive_preposition(&self) -> &'static str {
        self.english.passive_preposition()
    }

    fn indirect_object_preposition(&self) -> &'static str {
        self.english.indirect_object_preposition()
    }

    fn negation_particle(&self) -> &'static str {
        self.english.negation_particle()
    }

    fn infinitive_marker(&self) -> &'static str {
        self.english.infinitive_marker()
    }

    fn future_modal(&self) -> &'static str {
        self.english.future_modal()
    }

    fn passive_auxiliary(&self) -> &'static str {
        self.english.passive_auxiliary()
    }

    fn progressive_auxiliary(&self) -> &'static str {
        self.english.progressive_auxiliary()
    }

    fn perfect_auxiliary(&self) -> &'static str {
        self.english.perfect_auxiliary()
    }

    fn support_auxiliary(&self) -> Option<&'static str> {
        None
    }

    fn interrogative_keyword(&self, kind: InterrogativeType, after_preposition: bool) -> &'static str {
        self.english.interrogative_keyword(kind, after_preposition)
    }

    fn is_copular(&self, verb: &InflectedWord, entry: Option<&LexicalEntry>) -> bool {
        self.english.is_copular(verb, entry)
    }

    fn takes_do_support(&self, _kind: InterrogativeType) -> bool {
        false
    }

    fn split_follows_single_verb(&self, _kind: InterrogativeType) -> bool {
        true
    }

    fn adjust_article(&self, article: &str, next_word: &str) -> Option<&'static str> {
        self.english.adjust_article(article, next_word)
    }

    fn pronoun_referent(&self, form: &str) -> Option<Referent> {
        self.english.pronoun_referent(form)
    }
}

fn realiser() -> Realiser {
    Realiser::new(NoSupport::default(), Arc::new(Lexicon::english_core()))
}

fn realise(clause: PhraseElement) -> String {
    realiser().realise_sentence(&mut Element::from(clause))
}

#[test]
fn declaratives_are_unchanged() {
    assert_eq!(realise(dog_chases_cat()), "the dog chases the cat");
    assert_eq!(realiser().grammar().name(), "no-support");
}

#[test]
fn negation_follows_the_verb() {
    let clause = dog_chases_cat().with_feature(Feature::Negated, true);
    assert_eq!(realise(clause), "the dog chases not the cat");
}

#[test]
fn questions_invert_the_main_verb() {
    let clause = dog_chases_cat().with_feature(Feature::Interrogative, InterrogativeType::YesNo);
    assert_eq!(realise(clause), "chases the dog the cat");
}

#[test]
fn english_is_the_default_grammar() {
    assert_eq!(Realiser::default().grammar().name(), "english");
}
