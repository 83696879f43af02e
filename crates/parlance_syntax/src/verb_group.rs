//! Auxiliary stacking.
//!
//! The verb group is built back to front. [`VerbGroup`] keeps a pending
//! `front` token and a stack of settled tokens; each aspect or voice step
//! settles the current front in the form it now requires and puts a new
//! auxiliary in front of it. The surface order is the stack reversed.

use tracing::trace;

use parlance_foundation::{
    DiscourseFunction, Feature, FeatureMap, Form, Gender, InflectedWord, InterrogativeType,
    LexicalCategory, Number, Person, PronounPosition, Tense,
};
use parlance_morphology::Referent;

use crate::grammar::Grammar;
use crate::realiser::Realiser;

/// Agreement features copied onto finite tokens.
#[derive(Clone, Copy, Debug)]
struct Agreement {
    number: Number,
    person: Person,
    gender: Option<Gender>,
}

impl Agreement {
    fn of(features: &FeatureMap) -> Self {
        Self {
            number: features.number(),
            person: features.person(),
            gender: features.get_gender(),
        }
    }

    fn apply(self, token: &mut InflectedWord) {
        token.features.set(Feature::Number, self.number);
        token.features.set(Feature::Person, self.person);
        if let Some(gender) = self.gender {
            token.features.set(Feature::Gender, gender);
        }
    }
}

/// A verb group under construction.
#[derive(Debug, Default)]
struct VerbGroup {
    front: Option<InflectedWord>,
    stack: Vec<InflectedWord>,
}

impl VerbGroup {
    fn push(&mut self, token: InflectedWord) {
        trace!(token = %token.base_form, form = ?token.features.get_form(), "verb group push");
        self.stack.push(token);
    }

    /// Settles the front in `form` and puts `auxiliary` before it.
    fn wrap(&mut self, form: Form, auxiliary: InflectedWord) {
        if let Some(mut front) = self.front.take() {
            front.features.set(Feature::Form, form);
            self.push(front);
        }
        self.front = Some(auxiliary);
    }

    fn into_surface_order(self) -> Vec<InflectedWord> {
        let mut tokens = self.stack;
        tokens.reverse();
        tokens
    }
}

fn auxiliary(base: &str, category: LexicalCategory, tense: Tense) -> InflectedWord {
    InflectedWord::new(base, category)
        .with_feature(Feature::Tense, tense)
        .with_feature(Feature::DiscourseFunction, DiscourseFunction::Auxiliary)
}

fn particle(text: &str, category: LexicalCategory, function: DiscourseFunction) -> InflectedWord {
    InflectedWord::new(text, category)
        .with_feature(Feature::NonMorph, true)
        .with_feature(Feature::DiscourseFunction, function)
}

/// Puts the front token into the shape the clause form asks for.
fn shape_front(front: &mut InflectedWord, form: Form, interrogative: bool, agreement: Agreement) {
    match form {
        Form::Gerund | Form::PresentParticiple | Form::PastParticiple => {
            front.features.set(Feature::Form, form);
        }
        Form::Imperative | Form::Subjunctive => {
            front.features.set(Feature::Form, form);
            agreement.apply(front);
        }
        _ if form != Form::Normal || interrogative => agreement.apply(front),
        _ => {}
    }
}

/// Builds the verb group for `head` under the verb phrase's effective features.
///
/// Tokens come back in surface order; each is tagged with its discourse
/// function (`Head` for the main verb, `Auxiliary` for the rest).
#[must_use]
pub fn build<G: Grammar + ?Sized>(
    grammar: &G,
    realiser: &Realiser,
    head: &InflectedWord,
    features: &FeatureMap,
) -> Vec<InflectedWord> {
    let form = features.form();
    let interrogative = features.interrogative();
    let agreement = Agreement::of(features);
    let is_copular = |token: &InflectedWord| grammar.is_copular(token, realiser.entry_for(token).as_deref());

    let tense = if matches!(form, Form::Gerund | Form::Infinitive) {
        Tense::Present
    } else {
        features.tense()
    };

    let explicit_modal = features.string(Feature::Modal);
    let modal = match form {
        Form::Infinitive => Some(grammar.infinitive_marker()),
        Form::Normal => explicit_modal.or_else(|| (tense == Tense::Future).then(|| grammar.future_modal())),
        _ => None,
    };
    let modal_past = form == Form::Normal && tense == Tense::Past && explicit_modal.is_some();

    let mut main = head.clone();
    main.features.set(Feature::Tense, tense);
    main.features.set(Feature::DiscourseFunction, DiscourseFunction::Head);
    agreement.apply(&mut main);
    if matches!(form, Form::Imperative | Form::Infinitive | Form::BareInfinitive) {
        main.features.set(Feature::Form, Form::BareInfinitive);
    }

    let mut group = VerbGroup {
        front: Some(main),
        stack: Vec::new(),
    };

    if features.flag(Feature::Passive) {
        group.wrap(
            Form::PastParticiple,
            auxiliary(grammar.passive_auxiliary(), LexicalCategory::Verb, tense),
        );
    }
    if features.flag(Feature::Progressive) {
        group.wrap(
            Form::PresentParticiple,
            auxiliary(grammar.progressive_auxiliary(), LexicalCategory::Verb, tense),
        );
    }
    if features.flag(Feature::Perfect) || modal_past {
        let have_tense = if modal.is_some() && tense == Tense::Past {
            Tense::Present
        } else {
            tense
        };
        group.wrap(
            Form::PastParticiple,
            auxiliary(grammar.perfect_auxiliary(), LexicalCategory::Verb, have_tense),
        );
    }

    if let Some(front) = group.front.as_mut() {
        agreement.apply(front);
    }

    if let Some(modal) = modal.filter(|_| !features.flag(Feature::IgnoreModal)) {
        let behind = group
            .front
            .as_ref()
            .and_then(|front| front.features.get_tense())
            .unwrap_or(tense);
        let mut token = auxiliary(modal, LexicalCategory::Modal, behind);
        agreement.apply(&mut token);
        group.wrap(Form::BareInfinitive, token);
    }

    // A subjunctive main verb with nothing stacked on it keeps its base form.
    if features.flag(Feature::NonMorph) && group.stack.is_empty() {
        if let Some(front) = group.front.as_mut() {
            front.features.set(Feature::NonMorph, true);
        }
    }

    if features.flag(Feature::Reflexive) {
        let referent = Referent {
            person: agreement.person,
            number: agreement.number,
            gender: agreement.gender.unwrap_or(Gender::Neuter),
        };
        let pronoun = grammar.morphology().pronoun(referent, PronounPosition::Reflexive);
        group.stack.insert(
            0,
            particle(&pronoun, LexicalCategory::Pronoun, DiscourseFunction::Object),
        );
        if let Some(mut front) = group.front.take() {
            shape_front(&mut front, form, interrogative.is_some(), agreement);
            group.push(front);
        }
    }

    if features.flag(Feature::Negated) {
        let not = particle(grammar.negation_particle(), LexicalCategory::Adverb, DiscourseFunction::Auxiliary);
        let keeps_front = !group.stack.is_empty() || group.front.as_ref().is_none_or(|front| is_copular(front));
        if keeps_front {
            group.push(not);
        } else if let Some(mut front) = group.front.take() {
            if form.is_non_finite() {
                shape_front(&mut front, form, interrogative.is_some(), agreement);
                group.push(front);
                group.push(not);
            } else if let Some(support) = grammar.support_auxiliary() {
                let support_tense = front.features.get_tense().unwrap_or(tense);
                front.features.set(Feature::Negated, true);
                group.push(front);
                group.push(not);
                let mut support = auxiliary(support, LexicalCategory::Verb, support_tense);
                agreement.apply(&mut support);
                group.front = Some(support);
            } else {
                group.front = Some(front);
                group.push(not);
            }
        }
    }

    if let Some(mut front) = group.front.take() {
        shape_front(&mut front, form, interrogative.is_some(), agreement);
        let inverts = interrogative.is_some_and(|kind: InterrogativeType| grammar.takes_do_support(kind))
            && group.stack.is_empty()
            && !form.is_non_finite()
            && !is_copular(&front);
        match grammar.support_auxiliary().filter(|_| inverts) {
            Some(support) => {
                let support_tense = front.features.get_tense().unwrap_or(tense);
                front.features.set(Feature::Form, Form::BareInfinitive);
                group.push(front);
                let mut support = auxiliary(support, LexicalCategory::Verb, support_tense);
                agreement.apply(&mut support);
                group.push(support);
            }
            None => group.push(front),
        }
    }

    group.into_surface_order()
}
