//! Closed grammatical enumerations and feature keys.
//!
//! Every grammatical dimension the realiser switches on is a closed sum
//! type. Feature tables are keyed by [`Feature`], never by strings.
//! Each enumeration parses from and displays as its lower-case name so
//! that externally supplied values (lexicon data, caller input) can be
//! brought in without a string-keyed store.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Declares a closed enumeration with lower-case string names.
///
/// Generates `as_str`, `ALL`, `Display`, and `FromStr`.
macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $domain:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Returns the lower-case name of this value.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $text ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let lowered = s.trim().to_ascii_lowercase();
                match lowered.as_str() {
                    $( $text => Ok($name::$variant), )+
                    _ => Err(Error::unknown_value($domain, s)),
                }
            }
        }
    };
}

closed_enum! {
    /// Grammatical number.
    Number, "number" {
        /// One referent.
        Singular => "singular",
        /// Several referents.
        Plural => "plural",
        /// Invariant for number (lexical entries only; agrees as singular).
        Both => "both",
    }
}

impl Number {
    /// Returns true if agreement should treat this as plural.
    #[must_use]
    pub const fn is_plural(self) -> bool {
        matches!(self, Self::Plural)
    }
}

closed_enum! {
    /// Grammatical person. Ordered `First < Second < Third`.
    Person, "person" {
        /// Speaker.
        First => "first",
        /// Addressee.
        Second => "second",
        /// Anyone else.
        Third => "third",
    }
}

closed_enum! {
    /// Grammatical gender.
    Gender, "gender" {
        /// Masculine.
        Masculine => "masculine",
        /// Feminine.
        Feminine => "feminine",
        /// Neuter.
        Neuter => "neuter",
    }
}

closed_enum! {
    /// Tense of a clause or verb.
    Tense, "tense" {
        /// Past.
        Past => "past",
        /// Present.
        Present => "present",
        /// Future.
        Future => "future",
    }
}

closed_enum! {
    /// Form (mood) of a clause or verb.
    Form, "form" {
        /// Ordinary indicative.
        Normal => "normal",
        /// Imperative.
        Imperative => "imperative",
        /// Marked infinitive ("to go").
        Infinitive => "infinitive",
        /// Bare infinitive ("go").
        BareInfinitive => "bare_infinitive",
        /// Gerund ("going" as a noun).
        Gerund => "gerund",
        /// Present participle.
        PresentParticiple => "present_participle",
        /// Past participle.
        PastParticiple => "past_participle",
        /// Subjunctive.
        Subjunctive => "subjunctive",
    }
}

impl Form {
    /// Returns true for forms without a tensed finite verb of their own.
    #[must_use]
    pub const fn is_non_finite(self) -> bool {
        matches!(
            self,
            Self::Infinitive
                | Self::BareInfinitive
                | Self::Gerund
                | Self::PresentParticiple
                | Self::PastParticiple
        )
    }
}

closed_enum! {
    /// The interrogative transformation applied to a clause.
    InterrogativeType, "interrogative type" {
        /// Polar question.
        YesNo => "yes_no",
        /// Question about the (animate) subject.
        WhoSubject => "who_subject",
        /// Question about the (inanimate) subject.
        WhatSubject => "what_subject",
        /// Question about the (animate) object.
        WhoObject => "who_object",
        /// Question about the (inanimate) object.
        WhatObject => "what_object",
        /// Question about the indirect object.
        WhoIndirectObject => "who_indirect_object",
        /// Question about manner.
        How => "how",
        /// Question about reason.
        Why => "why",
        /// Question about place.
        Where => "where",
        /// Question about the predicate of a copular clause.
        HowPredicate => "how_predicate",
        /// Question about a quantity of the subject.
        HowMany => "how_many",
    }
}

impl InterrogativeType {
    /// Returns true if the question extracts the direct object.
    #[must_use]
    pub const fn is_object(self) -> bool {
        matches!(self, Self::WhoObject | Self::WhatObject)
    }

    /// Returns true if the question extracts the indirect object.
    #[must_use]
    pub const fn is_indirect_object(self) -> bool {
        matches!(self, Self::WhoIndirectObject)
    }

    /// Returns true if the question replaces the subject.
    #[must_use]
    pub const fn is_subject(self) -> bool {
        matches!(self, Self::WhoSubject | Self::WhatSubject)
    }

    /// Returns true if a split subject goes after a single-token verb block.
    #[must_use]
    pub const fn splits_after_verb(self) -> bool {
        matches!(
            self,
            Self::WhoObject
                | Self::WhatObject
                | Self::WhoIndirectObject
                | Self::How
                | Self::Why
                | Self::Where
                | Self::HowPredicate
        )
    }
}

closed_enum! {
    /// Role a constituent plays relative to its parent.
    DiscourseFunction, "discourse function" {
        /// Clause subject.
        Subject => "subject",
        /// Direct object.
        Object => "object",
        /// Indirect object.
        IndirectObject => "indirect_object",
        /// Any other complement (predicative, prepositional).
        Complement => "complement",
        /// Determiner or possessor.
        Specifier => "specifier",
        /// Pre-head modifier.
        PreModifier => "pre_modifier",
        /// Phrase head.
        Head => "head",
        /// Post-head modifier.
        PostModifier => "post_modifier",
        /// Sentence-initial modifier.
        FrontModifier => "front_modifier",
        /// Discourse cue phrase.
        Cue => "cue_phrase",
        /// Complementiser ("that").
        Complementiser => "complementiser",
        /// Coordinating conjunction.
        Conjunction => "conjunction",
        /// Auxiliary verb in a verb group.
        Auxiliary => "auxiliary",
        /// Verb group material.
        VerbPhrase => "verb_phrase",
    }
}

closed_enum! {
    /// Category of a phrase node.
    PhraseCategory, "phrase category" {
        /// Clause.
        Clause => "clause",
        /// Noun phrase.
        NounPhrase => "noun_phrase",
        /// Verb phrase.
        VerbPhrase => "verb_phrase",
        /// Adjective phrase.
        AdjectivePhrase => "adjective_phrase",
        /// Adverb phrase.
        AdverbPhrase => "adverb_phrase",
        /// Prepositional phrase.
        PrepositionalPhrase => "preposition_phrase",
        /// Pre-realised text wrapped as a phrase.
        CannedText => "canned_text",
    }
}

closed_enum! {
    /// Category of a lexical token.
    LexicalCategory, "lexical category" {
        /// Noun.
        Noun => "noun",
        /// Verb.
        Verb => "verb",
        /// Adjective.
        Adjective => "adjective",
        /// Adverb.
        Adverb => "adverb",
        /// Pronoun.
        Pronoun => "pronoun",
        /// Determiner.
        Determiner => "determiner",
        /// Preposition.
        Preposition => "preposition",
        /// Conjunction.
        Conjunction => "conjunction",
        /// Complementiser.
        Complementiser => "complementiser",
        /// Modal auxiliary.
        Modal => "modal",
        /// Non-modal auxiliary.
        Auxiliary => "auxiliary",
        /// Symbol or number.
        Symbol => "symbol",
        /// Unspecified.
        Any => "any",
    }
}

closed_enum! {
    /// Default inflection pattern of a lexical entry.
    Inflection, "inflection" {
        /// Regular suffixation.
        Regular => "reg",
        /// Regular with final consonant doubling ("stop" → "stopped").
        RegularDouble => "regd",
        /// Irregular; forms come from the entry.
        Irregular => "irreg",
        /// Greco-Latin plural ("cactus" → "cacti").
        GrecoLatin => "glreg",
        /// Uncountable; no plural.
        Uncount => "uncount",
        /// Invariant for number.
        Invariant => "inv",
    }
}

closed_enum! {
    /// Grammatical-role position used to select a pronoun form.
    PronounPosition, "pronoun position" {
        /// Nominative ("I").
        Subject => "subject",
        /// Accusative ("me").
        Object => "object",
        /// Reflexive ("myself").
        Reflexive => "reflexive",
        /// Standalone possessive ("mine").
        Possessive => "possessive",
        /// Possessive used as a specifier ("my").
        PossessiveSpecifier => "possessive_specifier",
        /// Form following a preposition.
        PostPreposition => "post_preposition",
    }
}

impl PronounPosition {
    /// Row of this position in a pronoun table.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Subject => 0,
            Self::Object => 1,
            Self::Reflexive => 2,
            Self::Possessive => 3,
            Self::PossessiveSpecifier => 4,
            Self::PostPreposition => 5,
        }
    }
}

closed_enum! {
    /// Keys of a feature table.
    Feature, "feature" {
        // Clause and phrase features
        /// Grammatical number (`Number`).
        Number => "number",
        /// Grammatical person (`Person`).
        Person => "person",
        /// Grammatical gender (`Gender`).
        Gender => "gender",
        /// Tense (`Tense`).
        Tense => "tense",
        /// Form / mood (`Form`).
        Form => "form",
        /// Interrogative type (`InterrogativeType`).
        Interrogative => "interrogative_type",
        /// Clause or word is negated.
        Negated => "negated",
        /// Clause is passive.
        Passive => "passive",
        /// Perfect aspect.
        Perfect => "perfect",
        /// Progressive aspect.
        Progressive => "progressive",
        /// Modal auxiliary (string).
        Modal => "modal",
        /// Complementiser word (string).
        Complementiser => "complementiser",
        /// Complementiser is suppressed.
        SuppressedComplementiser => "suppressed_complementiser",
        /// Possessive noun phrase or word.
        Possessive => "possessive",
        /// Noun phrase realised as a pronoun.
        Pronominal => "pronominal",
        /// Verb phrase takes a reflexive pronoun.
        Reflexive => "reflexive",
        /// Noun phrase premodifiers are reordered.
        SortPremodifiers => "sort_premodifiers",
        /// Phrase is appositive.
        Appositive => "appositive",
        /// Conjunction word of a coordination (string).
        Conjunction => "conjunction",
        /// Modal is not emitted even though resolved.
        IgnoreModal => "ignore_modal",
        /// Element contributes nothing to output.
        Elided => "elided",
        /// Comparative degree requested.
        IsComparative => "is_comparative",
        /// Superlative degree requested.
        IsSuperlative => "is_superlative",

        // Internal features
        /// Discourse function (`DiscourseFunction`).
        DiscourseFunction => "discourse_function",
        /// Token bypasses morphology.
        NonMorph => "non_morph",

        // Lexical features
        /// Irregular plural (string).
        Plural => "plural",
        /// Irregular past (string).
        Past => "past",
        /// Irregular past participle (string).
        PastParticiple => "past_participle",
        /// Irregular present participle (string).
        PresentParticiple => "present_participle",
        /// Irregular present third-singular (string).
        Present3s => "present3s",
        /// Irregular comparative (string).
        Comparative => "comparative",
        /// Irregular superlative (string).
        Superlative => "superlative",
        /// Adjective is qualitative.
        Qualitative => "qualitative",
        /// Adjective denotes a colour.
        Colour => "colour",
        /// Adjective is classifying.
        Classifying => "classifying",
        /// Verb is copular.
        Copular => "copular",
        /// Noun is a proper name.
        Proper => "proper",
        /// Default inflection pattern (`Inflection`).
        DefaultInflection => "default_inflection",
    }
}

impl Feature {
    /// Returns true if a missing value may be taken from the parent node.
    #[must_use]
    pub const fn inherits(self) -> bool {
        matches!(self, Self::Number | Self::Person | Self::Gender | Self::Tense)
    }
}
