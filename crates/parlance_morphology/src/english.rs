//! English inflection.

use tracing::trace;

use parlance_foundation::{
    DiscourseFunction, Feature, FeatureMap, Form, Inflection, InflectedWord, LexicalCategory, Number, Person,
    PhraseCategory, PronounPosition, Tense,
};

use crate::engine::{Context, Morphology, Token};
use crate::pronouns::{self, Referent};
use crate::rules;

/// English morphology: suffix rules plus the closed auxiliary forms.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnglishMorphology;

impl EnglishMorphology {
    /// Creates the English morphology.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn noun(token: &Token<'_, '_>) -> String {
        let number = token.inherited::<Number>(Feature::Number).unwrap_or(Number::Singular);
        let inflection = token.inflection();
        let countable = !matches!(inflection, Inflection::Uncount | Inflection::Invariant)
            && !token.lexical_flag(Feature::Proper);

        let form = if number.is_plural() && countable {
            token.lexical_str(Feature::Plural).map_or_else(
                || {
                    trace!(base = token.base(), "plural by rule");
                    if inflection == Inflection::GrecoLatin {
                        rules::greco_latin_plural(token.base())
                    } else {
                        rules::regular_plural(token.base())
                    }
                },
                str::to_string,
            )
        } else {
            token.base().to_string()
        };

        let is_head = token.word.features.discourse_function() == Some(DiscourseFunction::Head);
        let possessive = token.word.features.flag(Feature::Possessive)
            || (is_head
                && token.context.parent_category == Some(PhraseCategory::NounPhrase)
                && token.context.parent.flag(Feature::Possessive));
        if possessive {
            rules::possessive(&form)
        } else {
            form
        }
    }

    fn verb(token: &Token<'_, '_>) -> String {
        let features = &token.word.features;
        let base = token.base();
        let double = token.inflection() == Inflection::RegularDouble;

        if features.flag(Feature::Negated) {
            return base.to_string();
        }

        match features.form() {
            Form::BareInfinitive | Form::Infinitive | Form::Imperative | Form::Subjunctive => {
                base.to_string()
            }
            Form::Gerund | Form::PresentParticiple => token
                .lexical_str(Feature::PresentParticiple)
                .map_or_else(|| rules::present_participle(base, double), str::to_string),
            Form::PastParticiple => Self::past_participle(token, double),
            Form::Normal => {
                let tense = token.inherited::<Tense>(Feature::Tense).unwrap_or(Tense::Present);
                let number = token.inherited::<Number>(Feature::Number).unwrap_or(Number::Singular);
                let person = token.inherited::<Person>(Feature::Person).unwrap_or(Person::Third);
                match tense {
                    Tense::Past => Self::past(token, number, person, double),
                    Tense::Present | Tense::Future => Self::present(token, number, person),
                }
            }
        }
    }

    fn past(token: &Token<'_, '_>, number: Number, person: Person, double: bool) -> String {
        let base = token.base();
        if base == "be" {
            let were = number.is_plural() || person == Person::Second;
            return if were { "were" } else { "was" }.to_string();
        }
        token.lexical_str(Feature::Past).map_or_else(
            || {
                trace!(base, "past by rule");
                rules::regular_past(base, double)
            },
            str::to_string,
        )
    }

    fn past_participle(token: &Token<'_, '_>, double: bool) -> String {
        let base = token.base();
        token.lexical_str(Feature::PastParticiple).map_or_else(
            || {
                if base == "be" {
                    "been".to_string()
                } else {
                    token
                        .lexical_str(Feature::Past)
                        .map_or_else(|| rules::regular_past(base, double), str::to_string)
                }
            },
            str::to_string,
        )
    }

    fn present(token: &Token<'_, '_>, number: Number, person: Person) -> String {
        let base = token.base();
        if person == Person::Third && !number.is_plural() {
            return token
                .lexical_str(Feature::Present3s)
                .map_or_else(|| rules::present_3s(base), str::to_string);
        }
        if base == "be" {
            let am = person == Person::First && !number.is_plural();
            return if am { "am" } else { "are" }.to_string();
        }
        base.to_string()
    }

    fn adjective(token: &Token<'_, '_>) -> String {
        let base = token.base();
        let double = token.inflection() == Inflection::RegularDouble;
        if token.flag_or_parent(Feature::IsSuperlative) {
            token
                .lexical_str(Feature::Superlative)
                .map_or_else(|| rules::superlative(base, double), str::to_string)
        } else if token.flag_or_parent(Feature::IsComparative) {
            token
                .lexical_str(Feature::Comparative)
                .map_or_else(|| rules::comparative(base, double), str::to_string)
        } else {
            base.to_string()
        }
    }

    fn adverb(token: &Token<'_, '_>) -> String {
        let base = token.base();
        if token.flag_or_parent(Feature::IsSuperlative) {
            token
                .lexical_str(Feature::Superlative)
                .map_or_else(|| format!("most {base}"), str::to_string)
        } else if token.flag_or_parent(Feature::IsComparative) {
            token
                .lexical_str(Feature::Comparative)
                .map_or_else(|| format!("more {base}"), str::to_string)
        } else {
            base.to_string()
        }
    }

    fn modal(token: &Token<'_, '_>) -> String {
        match token.word.features.tense() {
            Tense::Past => rules::modal_past(token.base()).to_string(),
            Tense::Present | Tense::Future => token.base().to_string(),
        }
    }

    fn determiner(token: &Token<'_, '_>) -> String {
        let number = token.inherited::<Number>(Feature::Number).unwrap_or(Number::Singular);
        if !number.is_plural() {
            return token.base().to_string();
        }
        if let Some(plural) = token.lexical_str(Feature::Plural) {
            return plural.to_string();
        }
        match token.base() {
            "a" | "an" => String::new(),
            "this" => "these".to_string(),
            "that" => "those".to_string(),
            other => other.to_string(),
        }
    }

    fn personal_pronoun(&self, token: &Token<'_, '_>) -> String {
        let Some(analysed) = pronouns::referent_of(token.base()) else {
            return token.base().to_string();
        };
        let own = &token.word.features;
        let parent = token.context.parent;
        let from_head = token.context.parent_category == Some(PhraseCategory::NounPhrase);
        // A pronoun heading a noun phrase takes that phrase's agreement.
        let inherit = if from_head { parent.clone() } else { FeatureMap::new() };

        let referent = Referent {
            person: own.get_person().or(inherit.get_person()).unwrap_or(analysed.person),
            number: own.get_number().or(inherit.get_number()).unwrap_or(analysed.number),
            gender: own.get_gender().or(inherit.get_gender()).unwrap_or(analysed.gender),
        };
        let after_preposition =
            token.context.parent_category == Some(PhraseCategory::PrepositionalPhrase);
        let position = pronouns::position(own, parent, after_preposition);
        self.pronoun(referent, position)
    }
}

impl Morphology for EnglishMorphology {
    fn inflect(&self, word: &InflectedWord, context: &Context<'_>) -> String {
        if word.features.flag(Feature::NonMorph) {
            return word.base_form.to_string();
        }
        let token = Token::resolve(word, context);
        match word.category {
            LexicalCategory::Noun => Self::noun(&token),
            LexicalCategory::Verb | LexicalCategory::Auxiliary => Self::verb(&token),
            LexicalCategory::Adjective => Self::adjective(&token),
            LexicalCategory::Adverb => Self::adverb(&token),
            LexicalCategory::Modal => Self::modal(&token),
            LexicalCategory::Determiner => Self::determiner(&token),
            LexicalCategory::Pronoun => self.personal_pronoun(&token),
            LexicalCategory::Preposition
            | LexicalCategory::Conjunction
            | LexicalCategory::Complementiser
            | LexicalCategory::Symbol
            | LexicalCategory::Any => word.base_form.to_string(),
        }
    }

    fn pronoun(&self, referent: Referent, position: PronounPosition) -> String {
        pronouns::pronoun(referent, position).to_string()
    }
}
