//! Integration tests for lexicon lookup

use std::sync::Arc;

use parlance_foundation::{Feature, Inflection, LexicalCategory, LexicalEntry};
use parlance_lexicon::{EmptyLexicon, Lexicon, LexiconSource};

// =============================================================================
// Indexed Lookup
// =============================================================================

#[test]
fn lookup_by_base_and_category() {
    let lexicon = Lexicon::from_entries([
        LexicalEntry::new("run", LexicalCategory::Noun).with_id("n1"),
        LexicalEntry::new("run", LexicalCategory::Verb).with_id("v1"),
    ]);

    let verb = lexicon.lookup("run", LexicalCategory::Verb).unwrap();
    assert_eq!(verb.id.as_deref(), Some("v1"));
    let noun = lexicon.lookup("run", LexicalCategory::Noun).unwrap();
    assert_eq!(noun.id.as_deref(), Some("n1"));
    assert!(lexicon.lookup("run", LexicalCategory::Adjective).is_none());
    assert_eq!(lexicon.lookup_all("run").len(), 2);
}

#[test]
fn lookup_is_case_insensitive() {
    let lexicon = Lexicon::from_entries([LexicalEntry::new("London", LexicalCategory::Noun)]);
    assert!(lexicon.lookup("london", LexicalCategory::Noun).is_some());
    assert!(lexicon.lookup("LONDON", LexicalCategory::Noun).is_some());
}

#[test]
fn lookup_any_category() {
    let lexicon = Lexicon::from_entries([LexicalEntry::new("quickly", LexicalCategory::Adverb)]);
    let entry = lexicon.lookup_any("quickly").unwrap();
    assert_eq!(entry.category, LexicalCategory::Adverb);
    assert!(lexicon.lookup_any("slowly").is_none());
}

#[test]
fn lookup_by_id() {
    let lexicon = Lexicon::from_entries([LexicalEntry::new("mouse", LexicalCategory::Noun).with_id("m")]);
    let entry = lexicon.lookup_by_id("m").unwrap();
    assert_eq!(entry.base_form.as_ref(), "mouse");
    assert!(lexicon.lookup_by_id("x").is_none());
}

#[test]
fn duplicate_ids_keep_the_first_entry() {
    let lexicon = Lexicon::from_entries([
        LexicalEntry::new("fish", LexicalCategory::Noun).with_id("dup"),
        LexicalEntry::new("fish", LexicalCategory::Verb).with_id("dup"),
    ]);
    let report = lexicon.index_report();
    assert!(!report.is_clean());
    assert_eq!(report.entries, 2);
    assert_eq!(report.duplicate_ids.len(), 1);
    assert_eq!(lexicon.lookup_by_id("dup").unwrap().category, LexicalCategory::Noun);
    // Both stay reachable by base form.
    assert!(lexicon.lookup("fish", LexicalCategory::Verb).is_some());
}

#[test]
fn empty_lexicon_always_misses() {
    let lexicon = EmptyLexicon;
    assert!(lexicon.lookup("be", LexicalCategory::Verb).is_none());
    assert!(lexicon.lookup_by_id("E0001").is_none());
    assert!(lexicon.lookup_any("be").is_none());
}

// =============================================================================
// English Seed Entries
// =============================================================================

#[test]
fn english_core_auxiliaries() {
    let lexicon = Lexicon::english_core();
    assert!(lexicon.index_report().is_clean());

    let be = lexicon.lookup("be", LexicalCategory::Verb).unwrap();
    assert!(be.flag(Feature::Copular));
    assert_eq!(be.string(Feature::PastParticiple), Some("been"));

    let have = lexicon.lookup("have", LexicalCategory::Verb).unwrap();
    assert_eq!(have.string(Feature::Past), Some("had"));
    let did = lexicon.lookup("do", LexicalCategory::Verb).unwrap();
    assert_eq!(did.string(Feature::Past), Some("did"));
}

#[test]
fn english_core_irregulars() {
    let lexicon = Lexicon::english_core();
    let child = lexicon.lookup("child", LexicalCategory::Noun).unwrap();
    assert_eq!(child.string(Feature::Plural), Some("children"));
    assert_eq!(child.inflection(), Inflection::Irregular);

    let sheep = lexicon.lookup("sheep", LexicalCategory::Noun).unwrap();
    assert_eq!(sheep.inflection(), Inflection::Invariant);

    let give = lexicon.lookup("give", LexicalCategory::Verb).unwrap();
    assert_eq!(give.string(Feature::PastParticiple), Some("given"));
}

#[test]
fn english_core_adjective_classes() {
    let lexicon = Lexicon::english_core();
    assert!(lexicon.lookup("big", LexicalCategory::Adjective).unwrap().flag(Feature::Qualitative));
    assert!(lexicon.lookup("brown", LexicalCategory::Adjective).unwrap().flag(Feature::Colour));
    assert!(lexicon.lookup("wooden", LexicalCategory::Adjective).unwrap().flag(Feature::Classifying));
}

#[test]
fn shared_across_threads() {
    let lexicon: Arc<dyn LexiconSource> = Arc::new(Lexicon::english_core());
    std::thread::scope(|scope| {
        for _ in 0..4 {
            let lexicon = Arc::clone(&lexicon);
            scope.spawn(move || {
                assert!(lexicon.lookup("be", LexicalCategory::Verb).is_some());
            });
        }
    });
}
