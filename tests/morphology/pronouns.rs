//! Integration tests for the pronoun table

use parlance_foundation::{
    DiscourseFunction, Feature, FeatureMap, Gender, InflectedWord, LexicalCategory, Number, Person,
    PronounPosition,
};
use parlance_morphology::pronouns::{position, pronoun, referent_of};
use parlance_morphology::{Context, EnglishMorphology, Morphology, Referent};

fn referent(person: Person, number: Number, gender: Gender) -> Referent {
    Referent { person, number, gender }
}

#[test]
fn every_position_has_a_form() {
    for person in Person::ALL {
        for number in [Number::Singular, Number::Plural] {
            for gender in Gender::ALL {
                for &at in PronounPosition::ALL {
                    assert!(!pronoun(referent(*person, number, *gender), at).is_empty());
                }
            }
        }
    }
}

#[test]
fn table_samples() {
    let him = referent(Person::Third, Number::Singular, Gender::Masculine);
    assert_eq!(pronoun(him, PronounPosition::Subject), "he");
    assert_eq!(pronoun(him, PronounPosition::Object), "him");
    assert_eq!(pronoun(him, PronounPosition::Reflexive), "himself");
    assert_eq!(pronoun(him, PronounPosition::PossessiveSpecifier), "his");

    let us = referent(Person::First, Number::Plural, Gender::Neuter);
    assert_eq!(pronoun(us, PronounPosition::Subject), "we");
    assert_eq!(pronoun(us, PronounPosition::Object), "us");
    assert_eq!(pronoun(us, PronounPosition::Reflexive), "ourselves");
}

#[test]
fn referents_analyse_forms() {
    assert_eq!(referent_of("I"), Some(referent(Person::First, Number::Singular, Gender::Neuter)));
    assert_eq!(referent_of("they").map(|r| r.number), Some(Number::Plural));
    assert_eq!(referent_of("Her").map(|r| r.gender), Some(Gender::Feminine));
    assert_eq!(referent_of("dog"), None);
}

#[test]
fn position_follows_function_and_voice() {
    let subject = FeatureMap::new().with(Feature::DiscourseFunction, DiscourseFunction::Subject);
    let empty = FeatureMap::new();
    let passive = FeatureMap::new().with(Feature::Passive, true);

    assert_eq!(position(&subject, &empty, false), PronounPosition::Subject);
    assert_eq!(position(&empty, &empty, false), PronounPosition::Object);
    assert_eq!(position(&subject, &passive, false), PronounPosition::Object);
    assert_eq!(position(&subject, &empty, true), PronounPosition::PostPreposition);
}

#[test]
fn pronoun_tokens_are_reselected() {
    let morphology = EnglishMorphology::new();
    let parent = FeatureMap::new();
    let object = InflectedWord::new("she", LexicalCategory::Pronoun)
        .with_feature(Feature::DiscourseFunction, DiscourseFunction::Object);
    assert_eq!(morphology.inflect(&object, &Context::new(&parent)), "her");

    let plural = InflectedWord::new("he", LexicalCategory::Pronoun)
        .with_feature(Feature::DiscourseFunction, DiscourseFunction::Subject)
        .with_feature(Feature::Number, Number::Plural);
    assert_eq!(morphology.inflect(&plural, &Context::new(&parent)), "they");
}
