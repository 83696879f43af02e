//! Coordination realisation.

use parlance_foundation::{
    CoordinatedElement, DiscourseFunction, Element, Feature, LexicalCategory, PhraseCategory, Realized,
};

use crate::realiser::{Parent, Realiser};

/// Features a coordination pushes onto every coordinate.
const CASCADING: &[Feature] = &[
    Feature::Tense,
    Feature::Form,
    Feature::Negated,
    Feature::Perfect,
    Feature::Progressive,
    Feature::Modal,
    Feature::Passive,
    Feature::Possessive,
    Feature::DiscourseFunction,
];

/// Features pushed onto verbal coordinates only.
const VERBAL_CASCADING: &[Feature] = &[Feature::Number, Feature::Person];

fn is_verbal(element: &Element) -> bool {
    element.is_phrase(PhraseCategory::VerbPhrase)
        || element.is_phrase(PhraseCategory::Clause)
        || matches!(
            element.lexical_category(),
            Some(LexicalCategory::Verb | LexicalCategory::Modal | LexicalCategory::Auxiliary)
        )
}

/// Copies the coordination's cascading features onto its coordinates.
pub fn cascade(coordination: &mut CoordinatedElement) {
    let features = coordination.features.clone();
    for coordinate in &mut coordination.coordinates {
        let verbal = is_verbal(coordinate);
        let cascading = CASCADING
            .iter()
            .chain(VERBAL_CASCADING.iter().filter(|_| verbal));
        for &feature in cascading {
            if let Some(value) = features.get(feature) {
                coordinate.set_feature(feature, value.clone());
            }
        }
    }
}

/// Realises a coordination: coordinates in order, the conjunction before the last.
pub fn realize(realiser: &Realiser, coordination: &mut CoordinatedElement, parent: &Parent) -> Realized {
    cascade(coordination);

    let mut features = parent.features.clone();
    for (&feature, value) in coordination.features.iter() {
        features.set(feature, value.clone());
    }
    for feature in [Feature::Number, Feature::Person, Feature::Gender] {
        features.remove(feature);
    }
    let inner = Parent {
        features,
        category: parent.category,
    };

    let conjunction = coordination
        .conjunction()
        .unwrap_or_else(|| realiser.grammar().default_conjunction())
        .to_string();
    let count = coordination.coordinates.len();
    let mut items = Vec::with_capacity(count + 1);
    for (i, coordinate) in coordination.coordinates.iter_mut().enumerate() {
        if count > 1 && i == count - 1 {
            items.push(
                Realized::word(conjunction.as_str(), Some(LexicalCategory::Conjunction))
                    .with_function(DiscourseFunction::Conjunction),
            );
        }
        items.push(realiser.realise_in(coordinate, &inner));
    }
    Realized::list(items, None)
}
