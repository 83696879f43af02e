//! Integration tests for the inflection fallback chain

use parlance_foundation::{
    Feature, FeatureMap, Form, InflectedWord, LexicalCategory, Number, Person, PhraseCategory, Tense,
};
use parlance_lexicon::{EmptyLexicon, Lexicon};
use parlance_morphology::{Context, EnglishMorphology, Morphology};

// =============================================================================
// Helper Functions
// =============================================================================

fn with_lexicon(word: &InflectedWord) -> String {
    let lexicon = Lexicon::english_core();
    let parent = FeatureMap::new();
    EnglishMorphology::new().inflect(word, &Context::new(&parent).with_lexicon(&lexicon))
}

fn by_rule(word: &InflectedWord) -> String {
    let parent = FeatureMap::new();
    EnglishMorphology::new().inflect(word, &Context::new(&parent))
}

fn verb(base: &str) -> InflectedWord {
    InflectedWord::new(base, LexicalCategory::Verb)
}

fn plural(base: &str) -> InflectedWord {
    InflectedWord::new(base, LexicalCategory::Noun).with_feature(Feature::Number, Number::Plural)
}

// =============================================================================
// Fallback Chain
// =============================================================================

#[test]
fn token_then_entry_then_rule() {
    // Token feature wins over everything.
    let word = plural("child").with_feature(Feature::Plural, "childer");
    assert_eq!(with_lexicon(&word), "childer");
    // Entry supplies the irregular form.
    assert_eq!(with_lexicon(&plural("child")), "children");
    // Without a lexicon the rule applies.
    assert_eq!(by_rule(&plural("child")), "childs");
}

#[test]
fn empty_lexicon_is_rule_only() {
    let parent = FeatureMap::new();
    let context = Context::new(&parent).with_lexicon(&EmptyLexicon);
    let word = verb("go").with_feature(Feature::Tense, Tense::Past);
    assert_eq!(EnglishMorphology::new().inflect(&word, &context), "goed");
}

#[test]
fn non_morph_tokens_pass_through() {
    let word = plural("mouse").with_feature(Feature::NonMorph, true);
    assert_eq!(with_lexicon(&word), "mouse");
}

// =============================================================================
// Nouns
// =============================================================================

#[test]
fn noun_plurals() {
    assert_eq!(with_lexicon(&plural("dog")), "dogs");
    assert_eq!(with_lexicon(&plural("box")), "boxes");
    assert_eq!(with_lexicon(&plural("baby")), "babies");
    assert_eq!(with_lexicon(&plural("mouse")), "mice");
    assert_eq!(with_lexicon(&plural("sheep")), "sheep");
    assert_eq!(with_lexicon(&plural("cactus")), "cacti");
}

#[test]
fn possessive_nouns() {
    let word = InflectedWord::new("dog", LexicalCategory::Noun).with_feature(Feature::Possessive, true);
    assert_eq!(with_lexicon(&word), "dog's");
    assert_eq!(with_lexicon(&plural("dog").with_feature(Feature::Possessive, true)), "dogs'");
    assert_eq!(with_lexicon(&plural("child").with_feature(Feature::Possessive, true)), "children's");
}

#[test]
fn number_is_inherited_from_the_parent() {
    let lexicon = Lexicon::english_core();
    let parent = FeatureMap::new().with(Feature::Number, Number::Plural);
    let context = Context::new(&parent)
        .in_phrase(Some(PhraseCategory::NounPhrase))
        .with_lexicon(&lexicon);
    let word = InflectedWord::new("man", LexicalCategory::Noun);
    assert_eq!(EnglishMorphology::new().inflect(&word, &context), "men");
}

// =============================================================================
// Verbs
// =============================================================================

#[test]
fn verb_present_agreement() {
    assert_eq!(with_lexicon(&verb("watch")), "watches");
    assert_eq!(with_lexicon(&verb("try")), "tries");
    assert_eq!(with_lexicon(&verb("go")), "goes");
    assert_eq!(with_lexicon(&verb("be")), "is");
    let first = verb("be").with_feature(Feature::Person, Person::First);
    assert_eq!(with_lexicon(&first), "am");
    let plural = verb("be").with_feature(Feature::Number, Number::Plural);
    assert_eq!(with_lexicon(&plural), "are");
}

#[test]
fn verb_past() {
    let past = |base: &str| with_lexicon(&verb(base).with_feature(Feature::Tense, Tense::Past));
    assert_eq!(past("walk"), "walked");
    assert_eq!(past("like"), "liked");
    assert_eq!(past("cry"), "cried");
    assert_eq!(past("stop"), "stopped");
    assert_eq!(past("give"), "gave");
    assert_eq!(past("be"), "was");
    let plural = verb("be")
        .with_feature(Feature::Tense, Tense::Past)
        .with_feature(Feature::Number, Number::Plural);
    assert_eq!(with_lexicon(&plural), "were");
}

#[test]
fn verb_forms() {
    let form = |base: &str, form: Form| with_lexicon(&verb(base).with_feature(Feature::Form, form));
    assert_eq!(form("run", Form::PresentParticiple), "running");
    assert_eq!(form("make", Form::Gerund), "making");
    assert_eq!(form("see", Form::PresentParticiple), "seeing");
    assert_eq!(form("lie", Form::PresentParticiple), "lying");
    assert_eq!(form("write", Form::PastParticiple), "written");
    assert_eq!(form("walk", Form::PastParticiple), "walked");
    assert_eq!(form("be", Form::BareInfinitive), "be");
}

// =============================================================================
// Other Categories
// =============================================================================

#[test]
fn adjective_degrees() {
    let degree = |base: &str, feature: Feature| {
        with_lexicon(&InflectedWord::new(base, LexicalCategory::Adjective).with_feature(feature, true))
    };
    assert_eq!(degree("big", Feature::IsComparative), "bigger");
    assert_eq!(degree("happy", Feature::IsSuperlative), "happiest");
    assert_eq!(degree("good", Feature::IsComparative), "better");
    assert_eq!(degree("late", Feature::IsSuperlative), "latest");
}

#[test]
fn adverb_degrees_are_periphrastic() {
    let word = InflectedWord::new("quickly", LexicalCategory::Adverb).with_feature(Feature::IsComparative, true);
    assert_eq!(with_lexicon(&word), "more quickly");
}

#[test]
fn modal_past() {
    let past = |base: &str| {
        with_lexicon(&InflectedWord::new(base, LexicalCategory::Modal).with_feature(Feature::Tense, Tense::Past))
    };
    assert_eq!(past("can"), "could");
    assert_eq!(past("will"), "would");
    assert_eq!(past("must"), "must");
}

#[test]
fn determiners_agree() {
    let det = |base: &str| {
        with_lexicon(&InflectedWord::new(base, LexicalCategory::Determiner).with_feature(Feature::Number, Number::Plural))
    };
    assert_eq!(det("this"), "these");
    assert_eq!(det("that"), "those");
    assert_eq!(det("a"), "");
    assert_eq!(det("the"), "the");
}
