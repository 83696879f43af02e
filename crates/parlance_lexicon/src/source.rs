//! The lexicon query interface consumed by the realiser.

use std::fmt;
use std::sync::Arc;

use parlance_foundation::{LexicalCategory, LexicalEntry};

/// Read-only access to lexical entries.
///
/// Implementations may be shared across concurrent realisations. A miss
/// is not an error: callers fall back to regular-rule inflection.
pub trait LexiconSource: Send + Sync + fmt::Debug {
    /// Finds the entry for a base form in a category.
    fn lookup(&self, base_form: &str, category: LexicalCategory) -> Option<Arc<LexicalEntry>>;

    /// Finds an entry by identifier.
    fn lookup_by_id(&self, id: &str) -> Option<Arc<LexicalEntry>>;

    /// Finds the first entry for a base form in any category.
    fn lookup_any(&self, base_form: &str) -> Option<Arc<LexicalEntry>> {
        LexicalCategory::ALL
            .iter()
            .find_map(|&category| self.lookup(base_form, category))
    }
}

/// A lexicon with no entries; every word is inflected by rule.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyLexicon;

impl LexiconSource for EmptyLexicon {
    fn lookup(&self, _base_form: &str, _category: LexicalCategory) -> Option<Arc<LexicalEntry>> {
        None
    }

    fn lookup_by_id(&self, _id: &str) -> Option<Arc<LexicalEntry>> {
        None
    }
}
