//! Noun phrase realisation and premodifier ordering.

use parlance_foundation::{
    DiscourseFunction, Element, Feature, FeatureMap, LexicalCategory, PhraseCategory, PhraseElement, Realized, RealizedWord,
};
use parlance_morphology::{pronouns, Referent};

use crate::grammar::Grammar;
use crate::realiser::{Parent, Realiser};

// ============================================================================
// Premodifier ordering
// ============================================================================

/// Slots a premodifier may occupy, leftmost first.
///
/// Qualitative adjectives take slot 1, colours 2, classifiers 3 and nouns
/// 4. An adjective with no class floats over slots 1 to 3.
fn slots(realiser: &Realiser, modifier: &Element) -> (u8, u8) {
    if modifier.is_phrase(PhraseCategory::NounPhrase) || modifier.lexical_category() == Some(LexicalCategory::Noun) {
        return (4, 4);
    }
    let adjective = match modifier {
        Element::Word(word) => Some(word),
        Element::Phrase(phrase) if phrase.category == PhraseCategory::AdjectivePhrase => modifier.head_word(),
        _ => None,
    }
    .filter(|word| word.category == LexicalCategory::Adjective);

    let Some(adjective) = adjective else {
        return (1, 4);
    };
    let entry = realiser.entry_for(adjective);
    let has = |feature: Feature| adjective.lexical_flag(feature) || entry.as_ref().is_some_and(|e| e.flag(feature));
    if has(Feature::Qualitative) {
        (1, 1)
    } else if has(Feature::Colour) {
        (2, 2)
    } else if has(Feature::Classifying) {
        (3, 3)
    } else {
        (1, 3)
    }
}

/// Order in which to realise premodifiers.
///
/// A stable bubble sort: adjacent modifiers swap only when the left one
/// cannot come earlier than the right one's latest slot.
#[must_use]
pub fn premodifier_order(realiser: &Realiser, modifiers: &[Element]) -> Vec<usize> {
    let ranges: Vec<(u8, u8)> = modifiers.iter().map(|m| slots(realiser, m)).collect();
    let mut order: Vec<usize> = (0..modifiers.len()).collect();
    let mut swapped = true;
    while swapped {
        swapped = false;
        for i in 1..order.len() {
            if ranges[order[i - 1]].0 > ranges[order[i]].1 {
                order.swap(i - 1, i);
                swapped = true;
            }
        }
    }
    order
}

// ============================================================================
// Realisation
// ============================================================================

fn collect_words<'a>(realized: &'a mut Realized, out: &mut Vec<&'a mut RealizedWord>) {
    match realized {
        Realized::Word(word) => out.push(word),
        Realized::List(list) => {
            for item in &mut list.items {
                collect_words(item, out);
            }
        }
    }
}

/// Adjusts articles to the word that follows them ("a apple" → "an apple").
fn fix_articles<G: Grammar + ?Sized>(grammar: &G, items: &mut [Realized]) {
    let mut words = Vec::new();
    for item in items.iter_mut() {
        collect_words(item, &mut words);
    }
    for i in 0..words.len() {
        if words[i].category != Some(LexicalCategory::Determiner) {
            continue;
        }
        let Some(next) = words[i + 1..].iter().find(|w| !w.text.is_empty()).map(|w| w.text.clone()) else {
            continue;
        };
        if let Some(replacement) = grammar.adjust_article(&words[i].text, &next) {
            words[i].text = replacement.to_string();
        }
    }
}

fn realise_pronoun<G: Grammar + ?Sized>(grammar: &G, phrase: &PhraseElement, parent: &Parent) -> Realized {
    let features = &phrase.features;
    let referent = Referent {
        person: features.person(),
        number: features.number(),
        gender: features.gender(),
    };
    let after_preposition = parent.category == Some(PhraseCategory::PrepositionalPhrase);
    let position = pronouns::position(features, &FeatureMap::new(), after_preposition);
    let word = Realized::word(grammar.morphology().pronoun(referent, position), Some(LexicalCategory::Pronoun))
        .with_function(DiscourseFunction::Head);
    Realized::list(vec![word], Some(PhraseCategory::NounPhrase))
}

/// Realises a noun phrase.
pub fn realize<G: Grammar + ?Sized>(
    grammar: &G,
    realiser: &Realiser,
    phrase: &mut PhraseElement,
    parent: &Parent,
) -> Realized {
    if phrase.features.flag(Feature::Pronominal) {
        return realise_pronoun(grammar, phrase, parent);
    }

    let number = phrase
        .features
        .get_number()
        .or_else(|| phrase.head.as_deref().and_then(|head| head.features().get_number()));
    let mut agreement = phrase.features.clone();
    if let Some(number) = number {
        agreement.set(Feature::Number, number);
    }
    let agree = Parent::new(agreement, PhraseCategory::NounPhrase);
    let plain = Parent::new(FeatureMap::new(), PhraseCategory::NounPhrase);

    let mut items = Vec::new();

    if let Some(specifier) = phrase.specifier.as_deref_mut() {
        // A pronoun specifier is a possessive determiner: "his dog", never "him dog".
        let possessive = Parent::new(
            FeatureMap::new().with(Feature::Possessive, true),
            PhraseCategory::NounPhrase,
        );
        let context = if specifier.lexical_category() == Some(LexicalCategory::Pronoun) {
            &possessive
        } else if specifier.is_phrase(PhraseCategory::NounPhrase) {
            &plain
        } else {
            &agree
        };
        items.push(realiser.realise_in(specifier, context));
    }

    let sorted = phrase.features.flag(Feature::SortPremodifiers) || realiser.config().sort_premodifiers;
    let order: Vec<usize> = if sorted {
        premodifier_order(realiser, &phrase.premodifiers)
    } else {
        (0..phrase.premodifiers.len()).collect()
    };
    for i in order {
        items.push(realiser.realise_in(&mut phrase.premodifiers[i], &plain));
    }

    if let Some(head) = phrase.head.as_deref_mut() {
        items.push(realiser.realise_in(head, &agree));
    }
    for modifier in &mut phrase.postmodifiers {
        items.push(realiser.realise_in(modifier, &plain));
    }
    for complement in &mut phrase.complements {
        items.push(realiser.realise_in(complement, &plain));
    }

    fix_articles(grammar, &mut items);
    Realized::list(items, Some(PhraseCategory::NounPhrase))
}
