//! Property tests for clause realisation

use parlance_foundation::{
    CoordinatedElement, DiscourseFunction, Element, Feature, LexicalCategory, Number, Person, PhraseElement,
    Realized, Tense,
};
use parlance_syntax::{Realiser, resolve_agreement};
use proptest::prelude::*;

use crate::common::{noun, pronoun, verb};

fn nouns() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["dog", "cat", "child", "mouse", "man", "box", "baby", "sheep"])
}

fn verbs() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["chase", "watch", "see", "carry", "take", "stop"])
}

fn tenses() -> impl Strategy<Value = Tense> {
    prop::sample::select(vec![Tense::Past, Tense::Present, Tense::Future])
}

fn numbers() -> impl Strategy<Value = Number> {
    prop::sample::select(vec![Number::Singular, Number::Plural])
}

fn clause(subject: &str, number: Number, verb_base: &str, object: &str, tense: Tense) -> PhraseElement {
    PhraseElement::clause()
        .with_subject(noun("the", subject).with_feature(Feature::Number, number))
        .with_verb_phrase(verb(verb_base).with_object(noun("the", object)))
        .with_feature(Feature::Tense, tense)
}

fn main_verb(realized: &Realized) -> Option<String> {
    realized
        .find(DiscourseFunction::VerbPhrase)
        .and_then(|vp| vp.find(DiscourseFunction::Head))
        .map(Realized::to_text)
}

proptest! {
    #[test]
    fn single_plural_subject_makes_the_verb_plural(
        subject in nouns(),
        verb_base in verbs(),
        object in nouns(),
        tense in tenses(),
    ) {
        let realiser = Realiser::english();
        let mut element = Element::from(clause(subject, Number::Plural, verb_base, object, tense));
        let realized = realiser.realise(&mut element);

        let phrase = element.as_phrase().unwrap();
        let verb_features = phrase.verb_element().unwrap().features();
        prop_assert_eq!(verb_features.number(), Number::Plural);
        if tense != Tense::Past {
            prop_assert_eq!(main_verb(&realized), Some(verb_base.to_string()));
        }
    }

    #[test]
    fn realising_twice_gives_the_same_text(
        subject in nouns(),
        number in numbers(),
        verb_base in verbs(),
        object in nouns(),
        tense in tenses(),
        passive in any::<bool>(),
        negated in any::<bool>(),
    ) {
        let realiser = Realiser::english();
        let tree = clause(subject, number, verb_base, object, tense)
            .with_feature(Feature::Passive, passive)
            .with_feature(Feature::Negated, negated);
        let mut element = Element::from(tree);
        let first = realiser.realise_sentence(&mut element);
        let second = realiser.realise_sentence(&mut element);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn passive_round_trip_leaves_no_trace(
        subject in nouns(),
        number in numbers(),
        verb_base in verbs(),
        object in nouns(),
        tense in tenses(),
    ) {
        let realiser = Realiser::english();
        let expected = realiser.realise_sentence(&mut Element::from(clause(subject, number, verb_base, object, tense)));

        let mut element = Element::from(clause(subject, number, verb_base, object, tense));
        element.set_feature(Feature::Passive, true);
        realiser.realise(&mut element);
        element.set_feature(Feature::Passive, false);
        prop_assert_eq!(realiser.realise_sentence(&mut element), expected);
    }

    #[test]
    fn passive_round_trip_clears_raised_gender(
        subject in nouns(),
        object in prop::sample::select(vec!["her", "him", "it", "them"]),
        tense in tenses(),
    ) {
        let build = || {
            PhraseElement::clause()
                .with_subject(noun("the", subject))
                .with_verb_phrase(
                    verb("wash")
                        .with_feature(Feature::Reflexive, true)
                        .with_object(pronoun(object)),
                )
                .with_feature(Feature::Tense, tense)
        };
        let realiser = Realiser::english();
        let expected = realiser.realise_sentence(&mut Element::from(build()));

        let mut element = Element::from(build());
        element.set_feature(Feature::Passive, true);
        realiser.realise(&mut element);
        element.set_feature(Feature::Passive, false);
        prop_assert_eq!(realiser.realise_sentence(&mut element), expected);
    }

    #[test]
    fn coordinated_first_person_wins(object in nouns(), tense in tenses()) {
        let subject = CoordinatedElement::new([
            Element::from(PhraseElement::noun_phrase(Element::word("I", LexicalCategory::Pronoun))),
            Element::from(noun("the", object)),
        ]);
        let tree = PhraseElement::clause()
            .with_subject(subject)
            .with_verb_phrase(verb("be"))
            .with_feature(Feature::Tense, tense);
        let realiser = Realiser::english();
        let agreement = resolve_agreement(realiser.grammar(), &tree.subjects, &tree.features);
        prop_assert_eq!(agreement.person, Person::First);
        prop_assert_eq!(agreement.number, Number::Plural);

        let text = realiser.realise_sentence(&mut Element::from(tree));
        let expected_verb = match tense {
            Tense::Past => "were",
            Tense::Present => "are",
            Tense::Future => "be",
        };
        prop_assert!(text.ends_with(expected_verb), "{}", text);
    }
}
