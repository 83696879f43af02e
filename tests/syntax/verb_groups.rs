//! Integration tests for verb group construction

use parlance_foundation::{
    DiscourseFunction, Feature, FeatureMap, Form, Gender, InflectedWord, LexicalCategory, Number, Person,
    PhraseCategory, Tense,
};
use parlance_syntax::{Parent, Realiser};

fn surface(verb: &str, features: &FeatureMap) -> Vec<String> {
    let realiser = Realiser::english();
    let head = InflectedWord::new(verb, LexicalCategory::Verb);
    let tokens = realiser.grammar().build_verb_group(&realiser, &head, features);
    let parent = Parent::new(features.clone(), PhraseCategory::VerbPhrase);
    tokens.iter().map(|token| realiser.inflect(token, &parent)).collect()
}

// =============================================================================
// Auxiliary Stacking
// =============================================================================

#[test]
fn perfect_passive_progressive_stack() {
    let features = FeatureMap::new()
        .with(Feature::Perfect, true)
        .with(Feature::Passive, true)
        .with(Feature::Progressive, true);
    assert_eq!(surface("chase", &features), ["has", "been", "being", "chased"]);

    let modal = features.with(Feature::Modal, "may");
    assert_eq!(surface("chase", &modal), ["may", "have", "been", "being", "chased"]);
}

#[test]
fn past_with_a_modal_uses_perfect() {
    let features = FeatureMap::new()
        .with(Feature::Modal, "should")
        .with(Feature::Tense, Tense::Past);
    assert_eq!(surface("go", &features), ["should", "have", "gone"]);
}

#[test]
fn plural_agreement_lands_on_the_first_auxiliary() {
    let features = FeatureMap::new()
        .with(Feature::Progressive, true)
        .with(Feature::Number, Number::Plural)
        .with(Feature::Tense, Tense::Past);
    assert_eq!(surface("run", &features), ["were", "running"]);
}

#[test]
fn non_finite_forms() {
    let form = |form: Form| surface("see", &FeatureMap::new().with(Feature::Form, form));
    assert_eq!(form(Form::Infinitive), ["to", "see"]);
    assert_eq!(form(Form::BareInfinitive), ["see"]);
    assert_eq!(form(Form::Gerund), ["seeing"]);
    assert_eq!(form(Form::Imperative), ["see"]);
}

#[test]
fn tokens_are_tagged_by_function() {
    let realiser = Realiser::english();
    let head = InflectedWord::new("chase", LexicalCategory::Verb);
    let features = FeatureMap::new().with(Feature::Tense, Tense::Future);
    let tokens = realiser.grammar().build_verb_group(&realiser, &head, &features);
    let functions: Vec<_> = tokens.iter().map(|t| t.features.discourse_function()).collect();
    assert_eq!(
        functions,
        [Some(DiscourseFunction::Auxiliary), Some(DiscourseFunction::Head)]
    );
    assert_eq!(tokens[0].category, LexicalCategory::Modal);
}

// =============================================================================
// Reflexives
// =============================================================================

#[test]
fn reflexive_pronoun_matches_agreement() {
    let features = FeatureMap::new()
        .with(Feature::Reflexive, true)
        .with(Feature::Gender, Gender::Feminine)
        .with(Feature::Tense, Tense::Past);
    assert_eq!(surface("wash", &features), ["washed", "herself"]);

    let plural = FeatureMap::new()
        .with(Feature::Reflexive, true)
        .with(Feature::Number, Number::Plural);
    assert_eq!(surface("wash", &plural), ["wash", "themselves"]);
}

#[test]
fn reflexive_negation_takes_its_own_path() {
    // The main verb is pushed before negation runs, so no "do" is added.
    let features = FeatureMap::new()
        .with(Feature::Reflexive, true)
        .with(Feature::Negated, true)
        .with(Feature::Person, Person::First);
    assert_eq!(surface("wash", &features), ["not", "wash", "myself"]);

    let plain = FeatureMap::new()
        .with(Feature::Negated, true)
        .with(Feature::Person, Person::First);
    assert_eq!(surface("wash", &plain), ["do", "not", "wash"]);
}
