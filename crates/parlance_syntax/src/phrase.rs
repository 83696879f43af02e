//! Adjective, adverb, and prepositional phrases.

use parlance_foundation::{PhraseElement, Realized};

use crate::realiser::{Parent, Realiser};

/// Realises a phrase in slot order: specifier, premodifiers, head,
/// complements, postmodifiers.
pub fn realize(realiser: &Realiser, phrase: &mut PhraseElement, _parent: &Parent) -> Realized {
    let own = Parent::of(phrase);
    let mut items = Vec::new();

    if let Some(specifier) = phrase.specifier.as_deref_mut() {
        items.push(realiser.realise_in(specifier, &own));
    }
    for modifier in &mut phrase.premodifiers {
        items.push(realiser.realise_in(modifier, &own));
    }
    if let Some(head) = phrase.head.as_deref_mut() {
        items.push(realiser.realise_in(head, &own));
    }
    for complement in &mut phrase.complements {
        items.push(realiser.realise_in(complement, &own));
    }
    for modifier in &mut phrase.postmodifiers {
        items.push(realiser.realise_in(modifier, &own));
    }

    Realized::list(items, Some(phrase.category))
}
