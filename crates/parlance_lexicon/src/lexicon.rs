//! In-memory lexicon indexed by base form, category, and identifier.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{trace, warn};

use parlance_foundation::{LexicalCategory, LexicalEntry};

use crate::source::LexiconSource;

/// Summary of indexing problems seen so far.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IndexReport {
    /// Number of entries stored.
    pub entries: usize,
    /// Identifiers seen more than once; the first entry keeps the id.
    pub duplicate_ids: Vec<Arc<str>>,
}

impl IndexReport {
    /// Returns true if no problems were found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.duplicate_ids.is_empty()
    }
}

/// An in-memory lexicon.
///
/// Entries are stored in insertion order. Lookups by base form are
/// case-insensitive; when two entries share a base form and category the
/// first one inserted wins. When two entries share an identifier the first
/// keeps it and the duplicate is reported (both remain reachable by base
/// form).
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    /// All entries, in insertion order.
    entries: Vec<Arc<LexicalEntry>>,
    /// Lower-cased base form -> entry indices.
    by_base: HashMap<String, Vec<usize>>,
    /// Identifier -> entry index.
    by_id: HashMap<Arc<str>, usize>,
    /// Identifiers seen more than once.
    duplicate_ids: Vec<Arc<str>>,
}

impl Lexicon {
    /// Creates an empty lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a lexicon from entries, in order.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = LexicalEntry>) -> Self {
        let mut lexicon = Self::new();
        for entry in entries {
            lexicon.insert(entry);
        }
        lexicon
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the lexicon has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Arc<LexicalEntry>] {
        &self.entries
    }

    /// Adds an entry and indexes it.
    pub fn insert(&mut self, entry: LexicalEntry) -> Arc<LexicalEntry> {
        let index = self.entries.len();
        let entry = Arc::new(entry);

        self.by_base
            .entry(entry.base_form.to_lowercase())
            .or_default()
            .push(index);

        if let Some(id) = &entry.id {
            if self.by_id.contains_key(id) {
                warn!(id = %id, base = %entry.base_form, "duplicate lexicon id; keeping first entry");
                self.duplicate_ids.push(Arc::clone(id));
            } else {
                self.by_id.insert(Arc::clone(id), index);
            }
        }

        self.entries.push(Arc::clone(&entry));
        entry
    }

    /// Returns the indexing report.
    #[must_use]
    pub fn index_report(&self) -> IndexReport {
        IndexReport {
            entries: self.entries.len(),
            duplicate_ids: self.duplicate_ids.clone(),
        }
    }

    /// All entries with the given base form, in any category.
    #[must_use]
    pub fn lookup_all(&self, base_form: &str) -> Vec<Arc<LexicalEntry>> {
        self.by_base
            .get(&base_form.to_lowercase())
            .map(|indices| indices.iter().map(|&i| Arc::clone(&self.entries[i])).collect())
            .unwrap_or_default()
    }
}

impl LexiconSource for Lexicon {
    fn lookup(&self, base_form: &str, category: LexicalCategory) -> Option<Arc<LexicalEntry>> {
        let found = self.by_base.get(&base_form.to_lowercase()).and_then(|indices| {
            indices
                .iter()
                .map(|&i| &self.entries[i])
                .find(|e| category == LexicalCategory::Any || e.category == category)
                .cloned()
        });
        if found.is_none() {
            trace!(base = base_form, %category, "lexicon miss");
        }
        found
    }

    fn lookup_by_id(&self, id: &str) -> Option<Arc<LexicalEntry>> {
        self.by_id.get(id).map(|&i| Arc::clone(&self.entries[i]))
    }

    fn lookup_any(&self, base_form: &str) -> Option<Arc<LexicalEntry>> {
        self.by_base
            .get(&base_form.to_lowercase())
            .and_then(|indices| indices.first())
            .map(|&i| Arc::clone(&self.entries[i]))
    }
}

impl FromIterator<LexicalEntry> for Lexicon {
    fn from_iter<I: IntoIterator<Item = LexicalEntry>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}
