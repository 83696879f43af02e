//! Parlance - Rule-driven surface realisation
//!
//! This crate re-exports all layers of the Parlance system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: parlance_syntax     : Clause, phrase, and verb group realisation
//! Layer 2: parlance_morphology : Inflection rules, pronouns, irregular forms
//! Layer 1: parlance_lexicon    : Lexical entries, lookup, snapshots
//! Layer 0: parlance_foundation : Features, elements, realised output, errors
//! ```

pub use parlance_foundation as foundation;
pub use parlance_lexicon as lexicon;
pub use parlance_morphology as morphology;
pub use parlance_syntax as syntax;
