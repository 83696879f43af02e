//! Clause realisation.
//!
//! The clause realiser writes agreement and mood onto the tree, then
//! emits constituents in declarative or interrogative order. Features it
//! writes, in order:
//!
//! 1. `Number`, `Person` and `Gender` (removed when unknown) on the verb element,
//!    from the subjects, or from the raised objects of a passive.
//! 2. `Form` and `SuppressedComplementiser` on the clause, when the clause
//!    itself fills a subject or object slot.
//! 3. `NonMorph` on the verb phrase, and copies of the front modifiers in
//!    its postmodifiers, for infinitive and subjunctive clauses.
//!
//! The verb group reads all of these when the verb phrase is realised.
//! Passive raising and subject-question handling work on clones, so a
//! clause can be realised again after its voice or question type changes.

use tracing::debug;

use parlance_foundation::{
    DiscourseFunction, Element, Feature, FeatureMap, Form, Gender, InterrogativeType, LexicalCategory,
    Number, Person, PhraseCategory, PhraseElement, Realized,
};

use crate::grammar::Grammar;
use crate::realiser::{Parent, Realiser};

// ============================================================================
// Agreement
// ============================================================================

/// Number, person, and gender a verb agrees with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Agreement {
    /// Grammatical number.
    pub number: Number,
    /// Grammatical person.
    pub person: Person,
    /// Grammatical gender, when a single subject supplies one.
    pub gender: Option<Gender>,
}

impl Agreement {
    /// Third person singular, the agreement of a question word.
    #[must_use]
    pub const fn third_singular() -> Self {
        Self {
            number: Number::Singular,
            person: Person::Third,
            gender: None,
        }
    }

    /// The same agreement in the plural.
    #[must_use]
    pub const fn plural(self) -> Self {
        Self {
            number: Number::Plural,
            ..self
        }
    }

    /// Writes the agreement onto a feature table.
    pub fn apply(self, features: &mut FeatureMap) {
        features.set(Feature::Number, self.number);
        features.set(Feature::Person, self.person);
        match self.gender {
            Some(gender) => features.set(Feature::Gender, gender),
            None => {
                features.remove(Feature::Gender);
            }
        }
    }
}

/// Agreement contributed by one subject.
fn agreement_of<G: Grammar + ?Sized>(grammar: &G, subject: &Element) -> Agreement {
    if let Element::Coordinated(coordination) = subject {
        if let [only] = coordination.coordinates.as_slice() {
            return agreement_of(grammar, only);
        }
        let conjunction = coordination
            .conjunction()
            .unwrap_or_else(|| grammar.default_conjunction());
        let plural = (coordination.coordinates.len() > 1 && grammar.is_plural_conjunction(conjunction))
            || coordination.features.get_number().is_some_and(Number::is_plural);
        let person = coordination
            .coordinates
            .iter()
            .map(|coordinate| agreement_of(grammar, coordinate).person)
            .min()
            .unwrap_or(Person::Third);
        return Agreement {
            number: if plural { Number::Plural } else { Number::Singular },
            person,
            gender: None,
        };
    }

    let own = subject.features();
    let head = subject.head_word();
    let head_features = head.map(|word| &word.features);
    let referent = head
        .filter(|word| word.category == LexicalCategory::Pronoun)
        .and_then(|word| grammar.pronoun_referent(&word.base_form));

    Agreement {
        number: own
            .get_number()
            .or_else(|| head_features.and_then(FeatureMap::get_number))
            .or(referent.map(|r| r.number))
            .unwrap_or(Number::Singular),
        person: own
            .get_person()
            .or_else(|| head_features.and_then(FeatureMap::get_person))
            .or(referent.map(|r| r.person))
            .unwrap_or(Person::Third),
        gender: own
            .get_gender()
            .or_else(|| head_features.and_then(FeatureMap::get_gender))
            .or(referent.map(|r| r.gender)),
    }
}

/// Resolves verb agreement from a clause's subjects.
///
/// With no subjects the clause's own number and person stand. Several
/// subjects are always plural; person is the lowest among them, so
/// "you and I" agrees in the first person.
#[must_use]
pub fn resolve_agreement<G: Grammar + ?Sized>(grammar: &G, subjects: &[Element], clause: &FeatureMap) -> Agreement {
    match subjects {
        [] => Agreement {
            number: clause.number(),
            person: clause.person(),
            gender: clause.get_gender(),
        },
        [subject] => agreement_of(grammar, subject),
        several => Agreement {
            number: Number::Plural,
            person: several
                .iter()
                .map(|subject| agreement_of(grammar, subject).person)
                .min()
                .unwrap_or(Person::Third),
            gender: None,
        },
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn keyword_words<G: Grammar + ?Sized>(grammar: &G, kind: InterrogativeType, after_preposition: bool) -> Vec<Realized> {
    let category = if kind.is_subject() || kind.is_object() || kind.is_indirect_object() {
        LexicalCategory::Pronoun
    } else {
        LexicalCategory::Adverb
    };
    grammar
        .interrogative_keyword(kind, after_preposition)
        .split_whitespace()
        .map(|word| Realized::word(word, Some(category)))
        .collect()
}

fn preposition(word: &str) -> Realized {
    Realized::word(word, Some(LexicalCategory::Preposition))
}

/// Preposition fronted together with the question word, if any.
fn fronted_preposition<G: Grammar + ?Sized>(
    grammar: &G,
    clause: &PhraseElement,
    kind: InterrogativeType,
) -> Option<String> {
    if kind.is_indirect_object() {
        return Some(grammar.indirect_object_preposition().to_string());
    }
    if !kind.is_object() {
        return None;
    }
    let object = clause
        .verb_element()?
        .as_phrase()?
        .complements
        .iter()
        .find(|c| c.discourse_function() == Some(DiscourseFunction::Object))?;
    object
        .as_phrase()
        .filter(|p| p.category == PhraseCategory::PrepositionalPhrase)
        .and_then(|p| p.head.as_deref())
        .and_then(Element::as_word)
        .map(|word| word.base_form.to_string())
}

/// Realises subjects; several are joined with the default conjunction.
fn realise_subjects<G: Grammar + ?Sized>(
    grammar: &G,
    realiser: &Realiser,
    subjects: &mut [Element],
    parent: &Parent,
) -> Option<Realized> {
    if subjects.is_empty() {
        return None;
    }
    let last = subjects.len() - 1;
    let mut items = Vec::with_capacity(subjects.len() + 1);
    for (i, subject) in subjects.iter_mut().enumerate() {
        if i == last && i > 0 {
            items.push(
                Realized::word(grammar.default_conjunction(), Some(LexicalCategory::Conjunction))
                    .with_function(DiscourseFunction::Conjunction),
            );
        }
        items.push(realiser.realise_in(subject, parent));
    }
    Some(Realized::list(items, None).with_function(DiscourseFunction::Subject))
}

/// A subject counted by "how many": plural, without its determiner.
fn counted(subject: &Element) -> Element {
    let mut subject = subject.clone();
    subject.set_feature(Feature::Number, Number::Plural);
    if let Element::Phrase(phrase) = &mut subject {
        phrase.specifier = None;
    }
    subject
}

fn passive_clone(element: &Element) -> Element {
    element.clone().with_feature(Feature::Passive, true)
}

/// Shifts the form of a clause that fills a slot in another clause.
fn shift_mood<G: Grammar + ?Sized>(grammar: &G, clause: &mut PhraseElement) {
    let form = clause.features.form();
    let suppress = match clause.features.discourse_function() {
        Some(DiscourseFunction::Object | DiscourseFunction::IndirectObject) => {
            if form == Form::Imperative {
                clause.features.set(Feature::Form, grammar.object_clause_form());
                true
            } else {
                form == Form::Gerund && clause.subjects.is_empty()
            }
        }
        Some(DiscourseFunction::Subject) => {
            if form == Form::Imperative {
                clause.features.set(Feature::Form, grammar.subject_clause_form());
                true
            } else {
                matches!(form, Form::Gerund | Form::Infinitive)
            }
        }
        _ => false,
    };
    if suppress {
        clause.features.set(Feature::SuppressedComplementiser, true);
    }
}

/// Moves front modifiers into the verb phrase of a non-finite clause.
fn fold_front_modifiers(clause: &mut PhraseElement) {
    let fronts = clause.front_modifiers.clone();
    if let Some(Element::Phrase(vp)) = clause.verb_element_mut() {
        for mut modifier in fronts {
            modifier.set_discourse_function(DiscourseFunction::PostModifier);
            if !vp.postmodifiers.contains(&modifier) {
                vp.postmodifiers.push(modifier);
            }
        }
        vp.features.set(Feature::NonMorph, true);
    }
}

// ============================================================================
// Realisation
// ============================================================================

/// Realises a clause.
pub fn realize<G: Grammar + ?Sized>(
    grammar: &G,
    realiser: &Realiser,
    clause: &mut PhraseElement,
    parent: &Parent,
) -> Realized {
    let raw_interrogative = clause.features.get(Feature::Interrogative).is_some();
    let interrogative = clause.features.interrogative();
    if raw_interrogative && interrogative.is_none() {
        debug!(value = ?clause.features.get(Feature::Interrogative), "unrecognised interrogative type, realising as declarative");
    }

    // Agreement.
    let mut agreement = resolve_agreement(grammar, &clause.subjects, &clause.features);
    match interrogative {
        Some(InterrogativeType::HowMany) => agreement = agreement.plural(),
        Some(kind) if kind.is_subject() => agreement = Agreement::third_singular(),
        _ => {}
    }
    if let Some(verb) = clause.verb_element_mut() {
        agreement.apply(verb.features_mut());
    }

    // Mood.
    shift_mood(grammar, clause);
    let form = clause.features.form();
    let folds_front = matches!(form, Form::Infinitive | Form::Subjunctive);
    if folds_front {
        fold_front_modifiers(clause);
    }

    let own = Parent::of(clause);
    let passive = clause.features.flag(Feature::Passive);
    let subject_clause = clause.features.discourse_function() == Some(DiscourseFunction::Subject);
    let mut items = Vec::new();

    // Complementiser and cue phrase.
    let complementiser = clause
        .features
        .string(Feature::Complementiser)
        .filter(|_| !clause.features.flag(Feature::SuppressedComplementiser) && parent.category.is_some())
        .map(|word| {
            Realized::word(word, Some(LexicalCategory::Complementiser))
                .with_function(DiscourseFunction::Complementiser)
        });
    let cue = clause
        .cue_phrase
        .as_deref_mut()
        .map(|cue| realiser.realise_in(cue, &own));
    if subject_clause {
        items.extend(cue);
        items.extend(complementiser);
    } else {
        items.extend(complementiser);
        items.extend(cue);
    }

    // Question words.
    let mut split: Option<Realized> = None;
    let mut subjects_done = false;
    let mut agents_replaced = false;
    if let Some(kind) = interrogative {
        debug!(?kind, passive, "interrogative clause");
        match kind {
            InterrogativeType::YesNo => {
                if !passive {
                    split = realise_subjects(grammar, realiser, &mut clause.subjects, &own);
                    subjects_done = true;
                }
            }
            InterrogativeType::WhoSubject | InterrogativeType::WhatSubject => {
                if passive {
                    items.push(preposition(grammar.passive_preposition()));
                    items.extend(keyword_words(grammar, kind, true));
                    agents_replaced = true;
                } else {
                    items.extend(keyword_words(grammar, kind, false));
                }
                subjects_done = true;
            }
            InterrogativeType::HowMany => {
                items.extend(keyword_words(grammar, kind, false));
            }
            InterrogativeType::WhoObject
            | InterrogativeType::WhatObject
            | InterrogativeType::WhoIndirectObject
            | InterrogativeType::How
            | InterrogativeType::Why
            | InterrogativeType::Where
            | InterrogativeType::HowPredicate => {
                let fronted = fronted_preposition(grammar, clause, kind);
                let after_preposition = fronted.is_some();
                if let Some(word) = fronted {
                    items.push(preposition(&word));
                }
                items.extend(keyword_words(grammar, kind, after_preposition));
                if !passive {
                    split = realise_subjects(grammar, realiser, &mut clause.subjects, &own);
                    subjects_done = true;
                }
            }
        }
    } else if !folds_front {
        for modifier in &mut clause.front_modifiers {
            items.push(realiser.realise_in(modifier, &own));
        }
    }

    // Subjects.
    let omits_subjects = matches!(form, Form::Infinitive | Form::Imperative) || passive || subjects_done;
    if !omits_subjects {
        let realized = if interrogative == Some(InterrogativeType::HowMany) {
            let mut counted: Vec<Element> = clause.subjects.iter().map(counted).collect();
            realise_subjects(grammar, realiser, &mut counted, &own)
        } else {
            realise_subjects(grammar, realiser, &mut clause.subjects, &own)
        };
        items.extend(realized);
    }

    // Passive raising.
    if passive {
        let extracted = interrogative.is_some_and(InterrogativeType::is_object);
        let how_many = interrogative == Some(InterrogativeType::HowMany);
        let mut raised: Vec<Element> = if extracted {
            Vec::new()
        } else {
            clause
                .verb_element()
                .and_then(Element::as_phrase)
                .map(|vp| {
                    vp.complements
                        .iter()
                        .filter(|c| c.discourse_function() == Some(DiscourseFunction::Object))
                        .map(|object| {
                            let object = passive_clone(object);
                            if how_many { counted(&object) } else { object }
                        })
                        .collect()
                })
                .unwrap_or_default()
        };
        if !raised.is_empty() {
            debug!(count = raised.len(), "raising passive objects");
            let mut raised_agreement = resolve_agreement(grammar, &raised, &FeatureMap::new());
            if how_many {
                raised_agreement = raised_agreement.plural();
            }
            if let Some(verb) = clause.verb_element_mut() {
                raised_agreement.apply(verb.features_mut());
            }
            let splits = interrogative.is_some() && !how_many;
            if let Some(realized) = realise_subjects(grammar, realiser, &mut raised, &own) {
                if splits && split.is_none() {
                    split = Some(realized);
                } else {
                    items.push(realized);
                }
            }
        }
    }

    // Verb group, with the split constituent spliced in.
    let verb = clause.verb_element_mut().map(|verb| match verb {
        Element::Word(word) => {
            let mut temporary = Element::from(PhraseElement {
                features: word.features.clone(),
                ..PhraseElement::verb_phrase(word.clone())
            });
            realiser.realise_in(&mut temporary, &own)
        }
        other => realiser.realise_in(other, &own),
    });
    match (verb, split) {
        (Some(verb), Some(split)) => {
            let mut group = verb.into_items();
            if group.len() > 1 {
                group.insert(1, split);
            } else if interrogative.is_some_and(|kind| grammar.split_follows_single_verb(kind)) {
                group.push(split);
            } else {
                group.insert(0, split);
            }
            items.push(
                Realized::list(group, Some(PhraseCategory::VerbPhrase)).with_function(DiscourseFunction::VerbPhrase),
            );
        }
        (Some(verb), None) => items.push(verb),
        (None, Some(split)) => items.push(split),
        (None, None) => {}
    }

    // Agent phrase.
    if passive && !agents_replaced {
        let agents: Vec<Element> = clause
            .subjects
            .iter()
            .filter(|s| s.is_phrase(PhraseCategory::NounPhrase) || matches!(s, Element::Coordinated(_)))
            .map(passive_clone)
            .collect();
        if !agents.is_empty() {
            items.push(preposition(grammar.passive_preposition()));
            for mut agent in agents {
                items.push(realiser.realise_in(&mut agent, &own));
            }
        }
    }

    for modifier in &mut clause.postmodifiers {
        items.push(realiser.realise_in(modifier, &own));
    }

    // Questions put front modifiers last.
    if interrogative.is_some() && !folds_front {
        for modifier in &mut clause.front_modifiers {
            items.push(
                realiser
                    .realise_in(modifier, &own)
                    .with_function(DiscourseFunction::FrontModifier),
            );
        }
    }

    Realized::list(items, Some(PhraseCategory::Clause))
}
