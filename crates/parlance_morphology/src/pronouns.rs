//! English personal pronoun table.
//!
//! Forms are indexed by number, position, and a referent column: first
//! person, second person, then third person masculine, feminine, neuter.

use parlance_foundation::{
    DiscourseFunction, Feature, FeatureMap, Gender, Number, Person, PronounPosition,
};

/// Number of referent columns.
const COLUMNS: usize = 5;

/// Number of positions.
const POSITIONS: usize = 6;

type Table = [[[&'static str; COLUMNS]; POSITIONS]; 2];

#[rustfmt::skip]
const PRONOUNS: Table = [
    // Singular
    [
        ["I",      "you",      "he",      "she",     "it"],
        ["me",     "you",      "him",     "her",     "it"],
        ["myself", "yourself", "himself", "herself", "itself"],
        ["mine",   "yours",    "his",     "hers",    "its"],
        ["my",     "your",     "his",     "her",     "its"],
        ["me",     "you",      "him",     "her",     "it"],
    ],
    // Plural
    [
        ["we",        "you",        "they",       "they",       "they"],
        ["us",        "you",        "them",       "them",       "them"],
        ["ourselves", "yourselves", "themselves", "themselves", "themselves"],
        ["ours",      "yours",      "theirs",     "theirs",     "theirs"],
        ["our",       "your",       "their",      "their",      "their"],
        ["us",        "you",        "them",       "them",       "them"],
    ],
];

/// Person, number, and gender of a pronoun.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Referent {
    /// Grammatical person.
    pub person: Person,
    /// Grammatical number.
    pub number: Number,
    /// Grammatical gender (meaningful in the third person only).
    pub gender: Gender,
}

impl Default for Referent {
    fn default() -> Self {
        Self {
            person: Person::Third,
            number: Number::Singular,
            gender: Gender::Neuter,
        }
    }
}

fn column(person: Person, gender: Gender) -> usize {
    match (person, gender) {
        (Person::First, _) => 0,
        (Person::Second, _) => 1,
        (Person::Third, Gender::Masculine) => 2,
        (Person::Third, Gender::Feminine) => 3,
        (Person::Third, Gender::Neuter) => 4,
    }
}

fn referent_of_column(column: usize) -> (Person, Gender) {
    match column {
        0 => (Person::First, Gender::Neuter),
        1 => (Person::Second, Gender::Neuter),
        2 => (Person::Third, Gender::Masculine),
        3 => (Person::Third, Gender::Feminine),
        _ => (Person::Third, Gender::Neuter),
    }
}

/// Selects a pronoun form.
#[must_use]
pub fn pronoun(referent: Referent, position: PronounPosition) -> &'static str {
    let row = usize::from(referent.number.is_plural());
    PRONOUNS[row][position.index()][column(referent.person, referent.gender)]
}

/// Identifies the referent of a pronoun form, if it is in the table.
///
/// Ambiguous forms resolve to their first occurrence, scanning singular
/// before plural and subject before the other positions ("you" is
/// second person singular, "her" is third person feminine).
#[must_use]
pub fn referent_of(form: &str) -> Option<Referent> {
    let lowered = form.to_lowercase();
    for (row, positions) in PRONOUNS.iter().enumerate() {
        for forms in positions {
            if let Some(col) = forms.iter().position(|f| f.to_lowercase() == lowered) {
                let (person, gender) = referent_of_column(col);
                let number = if row == 0 { Number::Singular } else { Number::Plural };
                return Some(Referent {
                    person,
                    number,
                    gender,
                });
            }
        }
    }
    None
}

/// Chooses the position of a pronoun from its features and its parent's.
///
/// Own features win; the parent supplies passive and possessive marking
/// and, when the pronoun is a phrase head, its discourse function.
#[must_use]
pub fn position(features: &FeatureMap, parent: &FeatureMap, after_preposition: bool) -> PronounPosition {
    let flag = |f: Feature| features.flag(f) || parent.flag(f);

    let function = match features.discourse_function() {
        None | Some(DiscourseFunction::Head) => parent.discourse_function(),
        own => own,
    };

    if after_preposition {
        PronounPosition::PostPreposition
    } else if flag(Feature::Reflexive) {
        PronounPosition::Reflexive
    } else if flag(Feature::Possessive) {
        if function == Some(DiscourseFunction::Specifier) {
            PronounPosition::PossessiveSpecifier
        } else {
            PronounPosition::Possessive
        }
    } else if (function == Some(DiscourseFunction::Subject)) != flag(Feature::Passive) {
        PronounPosition::Subject
    } else {
        PronounPosition::Object
    }
}
