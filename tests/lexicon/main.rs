//! Integration tests for Layer 1: Lexicon
//!
//! Tests for lookup, the English seed entries, and snapshots.

mod lookup;
