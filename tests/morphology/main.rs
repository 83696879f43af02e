//! Integration tests for Layer 2: Morphology
//!
//! Tests the inflection fallback chain against the English lexicon, and
//! the pronoun table.

mod inflection;
mod pronouns;
