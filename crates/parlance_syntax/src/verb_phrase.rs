//! Verb phrase realisation: the verb group followed by its complements.

use parlance_foundation::{
    DiscourseFunction, Element, Feature, FeatureMap, InterrogativeType, PhraseCategory, PhraseElement,
    Realized,
};

use crate::grammar::Grammar;
use crate::realiser::{Parent, Realiser};

/// Clause features a verb phrase reads when it does not set them itself.
const CLAUSE_FEATURES: &[Feature] = &[
    Feature::Tense,
    Feature::Form,
    Feature::Negated,
    Feature::Passive,
    Feature::Perfect,
    Feature::Progressive,
    Feature::Modal,
    Feature::IgnoreModal,
    Feature::Interrogative,
    Feature::Number,
    Feature::Person,
];

/// The verb phrase's own features completed from the enclosing clause.
#[must_use]
pub fn effective_features(own: &FeatureMap, parent: &Parent) -> FeatureMap {
    let mut features = own.clone();
    if parent.category == Some(PhraseCategory::Clause) {
        for &feature in CLAUSE_FEATURES {
            if !features.contains(feature) {
                if let Some(value) = parent.features.get(feature) {
                    features.set(feature, value.clone());
                }
            }
        }
    }
    features
}

/// Realises a verb phrase as one flat list: verb group, then complements,
/// then postmodifiers.
pub fn realize<G: Grammar + ?Sized>(
    grammar: &G,
    realiser: &Realiser,
    phrase: &mut PhraseElement,
    parent: &Parent,
) -> Realized {
    let features = effective_features(&phrase.features, parent);
    let group_parent = Parent::new(features.clone(), PhraseCategory::VerbPhrase);
    let own = Parent::of(phrase);

    let mut items: Vec<Realized> = match phrase.head.as_deref_mut() {
        Some(Element::Word(head)) => grammar
            .build_verb_group(realiser, head, &features)
            .iter()
            .map(|token| {
                let mut word = Realized::word(realiser.inflect(token, &group_parent), Some(token.category));
                if let Some(function) = token.features.discourse_function() {
                    word.set_function(function);
                }
                word
            })
            .collect(),
        Some(head) => vec![realiser.realise_in(head, &group_parent)],
        None => Vec::new(),
    };

    // Verb premodifiers sit before the main verb: "does not quickly chase".
    let premodifiers: Vec<Realized> = phrase
        .premodifiers
        .iter_mut()
        .map(|modifier| realiser.realise_in(modifier, &own))
        .collect();
    let at = items.len().saturating_sub(1);
    items.splice(at..at, premodifiers);

    let interrogative = features.interrogative();
    let passive = features.flag(Feature::Passive);

    for complement in &mut phrase.complements {
        if complement.discourse_function() == Some(DiscourseFunction::IndirectObject)
            && interrogative != Some(InterrogativeType::WhoIndirectObject)
        {
            items.push(realiser.realise_in(complement, &own));
        }
    }
    for complement in &mut phrase.complements {
        if complement.discourse_function() == Some(DiscourseFunction::Object)
            && !passive
            && !interrogative.is_some_and(InterrogativeType::is_object)
        {
            items.push(realiser.realise_in(complement, &own));
        }
    }
    for complement in &mut phrase.complements {
        let function = complement.discourse_function();
        let skipped = matches!(
            function,
            Some(DiscourseFunction::IndirectObject | DiscourseFunction::Object)
        ) || (function == Some(DiscourseFunction::Complement)
            && interrogative == Some(InterrogativeType::HowPredicate));
        if !skipped {
            items.push(realiser.realise_in(complement, &own));
        }
    }

    for modifier in &mut phrase.postmodifiers {
        items.push(realiser.realise_in(modifier, &own));
    }

    Realized::list(items, Some(PhraseCategory::VerbPhrase))
}
