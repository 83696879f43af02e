//! Closed-class English entries.
//!
//! The realiser inflects by rule when a word is missing, so this seed only
//! holds what the rules cannot produce: the auxiliaries, the modals,
//! irregular verbs and nouns, irregular adjectives, and the determiners
//! whose plural differs from the singular.

use parlance_foundation::{Feature, Inflection, LexicalCategory, LexicalEntry};

use crate::lexicon::Lexicon;

/// Irregular verbs: base, past, past participle.
const IRREGULAR_VERBS: &[(&str, &str, &str)] = &[
    ("begin", "began", "begun"),
    ("bite", "bit", "bitten"),
    ("break", "broke", "broken"),
    ("bring", "brought", "brought"),
    ("build", "built", "built"),
    ("buy", "bought", "bought"),
    ("catch", "caught", "caught"),
    ("choose", "chose", "chosen"),
    ("come", "came", "come"),
    ("drink", "drank", "drunk"),
    ("drive", "drove", "driven"),
    ("eat", "ate", "eaten"),
    ("fall", "fell", "fallen"),
    ("feel", "felt", "felt"),
    ("find", "found", "found"),
    ("fly", "flew", "flown"),
    ("forget", "forgot", "forgotten"),
    ("get", "got", "gotten"),
    ("give", "gave", "given"),
    ("go", "went", "gone"),
    ("hold", "held", "held"),
    ("keep", "kept", "kept"),
    ("know", "knew", "known"),
    ("leave", "left", "left"),
    ("lose", "lost", "lost"),
    ("make", "made", "made"),
    ("meet", "met", "met"),
    ("put", "put", "put"),
    ("read", "read", "read"),
    ("ride", "rode", "ridden"),
    ("run", "ran", "run"),
    ("say", "said", "said"),
    ("see", "saw", "seen"),
    ("sell", "sold", "sold"),
    ("send", "sent", "sent"),
    ("sing", "sang", "sung"),
    ("sit", "sat", "sat"),
    ("sleep", "slept", "slept"),
    ("speak", "spoke", "spoken"),
    ("stand", "stood", "stood"),
    ("swim", "swam", "swum"),
    ("take", "took", "taken"),
    ("teach", "taught", "taught"),
    ("tell", "told", "told"),
    ("think", "thought", "thought"),
    ("throw", "threw", "thrown"),
    ("understand", "understood", "understood"),
    ("wake", "woke", "woken"),
    ("wear", "wore", "worn"),
    ("win", "won", "won"),
    ("write", "wrote", "written"),
];

/// Present third-singular forms the suffix rules get wrong.
const IRREGULAR_PRESENT_3S: &[(&str, &str)] = &[("go", "goes")];

/// Irregular verbs whose present participle doubles the final consonant.
const DOUBLING_IRREGULAR_VERBS: &[&str] = &["begin", "forget", "get", "put", "run", "sit", "swim", "win"];

/// Regular verbs that double their final consonant.
const DOUBLING_VERBS: &[&str] = &[
    "beg", "chat", "drop", "grab", "hop", "hug", "jog", "nod", "plan", "prefer", "rob", "shop",
    "skip", "stop", "tap", "trip",
];

/// Irregular noun plurals.
const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("child", "children"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("man", "men"),
    ("mouse", "mice"),
    ("ox", "oxen"),
    ("person", "people"),
    ("tooth", "teeth"),
    ("woman", "women"),
];

/// Nouns with no distinct plural.
const INVARIANT_NOUNS: &[&str] = &["deer", "fish", "sheep", "species"];

/// Uncountable nouns.
const UNCOUNT_NOUNS: &[&str] = &["furniture", "information", "rice", "water"];

/// Nouns with Greco-Latin plurals.
const GRECO_LATIN_NOUNS: &[&str] = &[
    "analysis", "appendix", "cactus", "criterion", "datum", "fungus", "index", "matrix",
    "nucleus", "phenomenon", "schema", "stimulus", "thesis",
];

/// Irregular adjectives: base, comparative, superlative.
const IRREGULAR_ADJECTIVES: &[(&str, &str, &str)] = &[
    ("bad", "worse", "worst"),
    ("far", "further", "furthest"),
    ("good", "better", "best"),
    ("little", "less", "least"),
    ("much", "more", "most"),
];

/// Adjective classes used when ordering premodifiers.
const QUALITATIVE_ADJECTIVES: &[&str] = &[
    "beautiful", "big", "fast", "hungry", "lazy", "old", "quick", "slow", "small", "young",
];
const COLOUR_ADJECTIVES: &[&str] = &["black", "blue", "brown", "green", "grey", "red", "white"];
const CLASSIFYING_ADJECTIVES: &[&str] = &["electric", "french", "medical", "wooden"];

/// Adjectives that double their final consonant.
const DOUBLING_ADJECTIVES: &[&str] = &["big", "fat", "hot", "red", "sad", "thin", "wet"];

const MODALS: &[&str] = &[
    "can", "could", "may", "might", "must", "ought", "shall", "should", "will", "would",
];

impl Lexicon {
    /// Builds a lexicon holding the closed-class English entries.
    #[must_use]
    pub fn english_core() -> Self {
        let mut lexicon = Self::new();
        let mut next_id = 0_usize;
        let mut id = || {
            next_id += 1;
            format!("E{next_id:04}")
        };

        lexicon.insert(
            LexicalEntry::new("be", LexicalCategory::Verb)
                .with_id(id())
                .with_inflection(Inflection::Irregular)
                .with_feature(Feature::Copular, true)
                .with_feature(Feature::Present3s, "is")
                .with_feature(Feature::Past, "was")
                .with_feature(Feature::PastParticiple, "been")
                .with_feature(Feature::PresentParticiple, "being"),
        );
        lexicon.insert(
            LexicalEntry::new("have", LexicalCategory::Verb)
                .with_id(id())
                .with_inflection(Inflection::Irregular)
                .with_feature(Feature::Present3s, "has")
                .with_feature(Feature::Past, "had")
                .with_feature(Feature::PastParticiple, "had"),
        );
        lexicon.insert(
            LexicalEntry::new("do", LexicalCategory::Verb)
                .with_id(id())
                .with_inflection(Inflection::Irregular)
                .with_feature(Feature::Present3s, "does")
                .with_feature(Feature::Past, "did")
                .with_feature(Feature::PastParticiple, "done"),
        );

        for &(base, past, participle) in IRREGULAR_VERBS {
            let mut entry = LexicalEntry::new(base, LexicalCategory::Verb)
                .with_id(id())
                .with_inflection(Inflection::Irregular)
                .with_feature(Feature::Past, past)
                .with_feature(Feature::PastParticiple, participle);
            if DOUBLING_IRREGULAR_VERBS.contains(&base) {
                entry = entry.with_inflection(Inflection::RegularDouble);
            }
            if let Some(&(_, form)) = IRREGULAR_PRESENT_3S.iter().find(|(b, _)| *b == base) {
                entry = entry.with_feature(Feature::Present3s, form);
            }
            lexicon.insert(entry);
        }
        for &base in DOUBLING_VERBS {
            lexicon.insert(
                LexicalEntry::new(base, LexicalCategory::Verb)
                    .with_id(id())
                    .with_inflection(Inflection::RegularDouble),
            );
        }

        for &(base, plural) in IRREGULAR_NOUNS {
            lexicon.insert(
                LexicalEntry::new(base, LexicalCategory::Noun)
                    .with_id(id())
                    .with_inflection(Inflection::Irregular)
                    .with_feature(Feature::Plural, plural),
            );
        }
        for &base in INVARIANT_NOUNS {
            lexicon.insert(
                LexicalEntry::new(base, LexicalCategory::Noun)
                    .with_id(id())
                    .with_inflection(Inflection::Invariant),
            );
        }
        for &base in UNCOUNT_NOUNS {
            lexicon.insert(
                LexicalEntry::new(base, LexicalCategory::Noun)
                    .with_id(id())
                    .with_inflection(Inflection::Uncount),
            );
        }
        for &base in GRECO_LATIN_NOUNS {
            lexicon.insert(
                LexicalEntry::new(base, LexicalCategory::Noun)
                    .with_id(id())
                    .with_inflection(Inflection::GrecoLatin),
            );
        }

        for &(base, comparative, superlative) in IRREGULAR_ADJECTIVES {
            lexicon.insert(
                LexicalEntry::new(base, LexicalCategory::Adjective)
                    .with_id(id())
                    .with_inflection(Inflection::Irregular)
                    .with_feature(Feature::Qualitative, true)
                    .with_feature(Feature::Comparative, comparative)
                    .with_feature(Feature::Superlative, superlative),
            );
        }
        for (words, class) in [
            (QUALITATIVE_ADJECTIVES, Feature::Qualitative),
            (COLOUR_ADJECTIVES, Feature::Colour),
            (CLASSIFYING_ADJECTIVES, Feature::Classifying),
        ] {
            for &base in words {
                let mut entry = LexicalEntry::new(base, LexicalCategory::Adjective)
                    .with_id(id())
                    .with_feature(class, true);
                if DOUBLING_ADJECTIVES.contains(&base) {
                    entry = entry.with_inflection(Inflection::RegularDouble);
                }
                lexicon.insert(entry);
            }
        }

        for &base in MODALS {
            lexicon.insert(LexicalEntry::new(base, LexicalCategory::Modal).with_id(id()));
        }

        for (base, plural) in [("a", ""), ("the", "the"), ("this", "these"), ("that", "those")] {
            lexicon.insert(
                LexicalEntry::new(base, LexicalCategory::Determiner)
                    .with_id(id())
                    .with_feature(Feature::Plural, plural),
            );
        }

        lexicon
    }
}
