//! Integration tests for clause realisation

use parlance_foundation::{
    CoordinatedElement, DiscourseFunction, Element, Feature, Form, LexicalCategory, Number, PhraseCategory,
    PhraseElement, Tense,
};
use parlance_syntax::Realiser;

use crate::common::{dog_chases_cat, noun, pronoun, realise, realise_with, verb};

// =============================================================================
// Declaratives
// =============================================================================

#[test]
fn tenses() {
    assert_eq!(realise(dog_chases_cat()), "the dog chases the cat");
    assert_eq!(
        realise_with(dog_chases_cat(), &[(Feature::Tense, Tense::Past.into())]),
        "the dog chased the cat"
    );
    assert_eq!(
        realise_with(dog_chases_cat(), &[(Feature::Tense, Tense::Future.into())]),
        "the dog will chase the cat"
    );
}

#[test]
fn aspect_and_modality() {
    assert_eq!(
        realise_with(dog_chases_cat(), &[(Feature::Perfect, true.into())]),
        "the dog has chased the cat"
    );
    assert_eq!(
        realise_with(dog_chases_cat(), &[(Feature::Progressive, true.into())]),
        "the dog is chasing the cat"
    );
    assert_eq!(
        realise_with(dog_chases_cat(), &[(Feature::Modal, "must".into())]),
        "the dog must chase the cat"
    );
}

#[test]
fn negation() {
    assert_eq!(
        realise_with(dog_chases_cat(), &[(Feature::Negated, true.into())]),
        "the dog does not chase the cat"
    );
    assert_eq!(
        realise_with(
            dog_chases_cat(),
            &[(Feature::Negated, true.into()), (Feature::Tense, Tense::Past.into())]
        ),
        "the dog did not chase the cat"
    );
    assert_eq!(
        realise_with(
            dog_chases_cat(),
            &[(Feature::Negated, true.into()), (Feature::Perfect, true.into())]
        ),
        "the dog has not chased the cat"
    );
}

#[test]
fn plural_subject_agrees() {
    let clause = PhraseElement::clause()
        .with_subject(noun("the", "dog").with_feature(Feature::Number, Number::Plural))
        .with_verb_phrase(verb("chase").with_object(noun("the", "cat")));
    assert_eq!(realise(clause), "the dogs chase the cat");
}

#[test]
fn irregular_forms_come_from_the_lexicon() {
    let clause = PhraseElement::clause()
        .with_subject(noun("the", "child").with_feature(Feature::Number, Number::Plural))
        .with_verb_phrase(verb("eat").with_object(noun("an", "apple")))
        .with_feature(Feature::Tense, Tense::Past);
    assert_eq!(realise(clause), "the children ate an apple");
}

// =============================================================================
// Passive
// =============================================================================

#[test]
fn passive_raises_the_object() {
    assert_eq!(
        realise_with(dog_chases_cat(), &[(Feature::Passive, true.into())]),
        "the cat is chased by the dog"
    );
    assert_eq!(
        realise_with(
            dog_chases_cat(),
            &[(Feature::Passive, true.into()), (Feature::Tense, Tense::Past.into())]
        ),
        "the cat was chased by the dog"
    );
}

#[test]
fn several_raised_objects_are_conjoined() {
    let clause = PhraseElement::clause()
        .with_subject(noun("the", "dog"))
        .with_verb_phrase(
            verb("chase")
                .with_object(noun("the", "cat"))
                .with_object(noun("the", "mouse")),
        )
        .with_feature(Feature::Passive, true);
    assert_eq!(realise(clause), "the cat and the mouse are chased by the dog");
}

#[test]
fn passive_pronoun_agent_is_oblique() {
    let clause = PhraseElement::clause()
        .with_subject(pronoun("he"))
        .with_verb_phrase(verb("chase").with_object(noun("the", "cat")))
        .with_feature(Feature::Passive, true);
    assert_eq!(realise(clause), "the cat is chased by him");
}

#[test]
fn passive_leaves_the_tree_unchanged_apart_from_agreement() {
    let realiser = Realiser::english();
    let mut clause = Element::from(dog_chases_cat().with_feature(Feature::Passive, true));
    realiser.realise(&mut clause);
    let phrase = clause.as_phrase().unwrap();
    assert_eq!(phrase.subjects.len(), 1);
    assert!(!phrase.subjects[0].features().flag(Feature::Passive));
    let vp = phrase.verb_element().and_then(Element::as_phrase).unwrap();
    assert!(!vp.complements[0].features().flag(Feature::Passive));
}

// =============================================================================
// Coordination and Agreement
// =============================================================================

#[test]
fn coordinated_subjects() {
    let subject = CoordinatedElement::new([Element::from(pronoun("I")), Element::from(noun("the", "dog"))]);
    let clause = PhraseElement::clause()
        .with_subject(subject)
        .with_verb_phrase(verb("be").with_complement(
            PhraseElement::adjective_phrase(Element::word("hungry", LexicalCategory::Adjective)),
            DiscourseFunction::Complement,
        ));
    assert_eq!(realise(clause), "I and the dog are hungry");
}

#[test]
fn coordinated_verb_phrases_share_tense() {
    let vps = CoordinatedElement::new([Element::from(verb("sing")), Element::from(verb("dance"))]);
    let clause = PhraseElement::clause()
        .with_subject(pronoun("she"))
        .with_verb_phrase(vps)
        .with_feature(Feature::Tense, Tense::Past);
    let realiser = Realiser::english();
    let mut element = Element::from(clause);
    let text = realiser.realise_sentence(&mut element);
    assert!(text.starts_with("she "), "{text}");
    assert!(text.ends_with("and danced"), "{text}");
}

// =============================================================================
// Moods and Embedding
// =============================================================================

#[test]
fn imperative() {
    assert_eq!(
        realise_with(dog_chases_cat(), &[(Feature::Form, Form::Imperative.into())]),
        "chase the cat"
    );
    assert_eq!(
        realise_with(
            dog_chases_cat(),
            &[(Feature::Form, Form::Imperative.into()), (Feature::Negated, true.into())]
        ),
        "do not chase the cat"
    );
}

#[test]
fn embedded_clauses() {
    let embedded = dog_chases_cat().with_feature(Feature::Complementiser, "that");
    let clause = PhraseElement::clause()
        .with_subject(pronoun("I"))
        .with_verb_phrase(verb("know").with_object(embedded));
    assert_eq!(realise(clause), "I know that the dog chases the cat");
}

#[test]
fn cue_phrase_and_front_modifier() {
    let clause = dog_chases_cat()
        .with_cue_phrase(Element::text("however"))
        .with_front_modifier(Element::word("yesterday", LexicalCategory::Adverb))
        .with_feature(Feature::Tense, Tense::Past);
    assert_eq!(realise(clause), "however yesterday the dog chased the cat");
}

#[test]
fn output_is_structured() {
    let realiser = Realiser::english();
    let mut clause = Element::from(dog_chases_cat());
    let realized = realiser.realise(&mut clause);
    assert_eq!(
        realized.find(DiscourseFunction::Subject).map(|r| r.to_text()),
        Some("the dog".to_string())
    );
    assert_eq!(
        realized.find(DiscourseFunction::Object).map(|r| r.to_text()),
        Some("the cat".to_string())
    );
    match &realized {
        parlance_foundation::Realized::List(list) => assert_eq!(list.category, Some(PhraseCategory::Clause)),
        parlance_foundation::Realized::Word(_) => panic!("expected a clause list"),
    }
}
