//! Integration tests for Layer 3: Syntax
//!
//! Tests clause, verb group, and noun phrase realisation through the
//! public realiser, plus the grammar strategy seam.

mod clauses;
mod grammar;
mod properties;
mod verb_groups;
