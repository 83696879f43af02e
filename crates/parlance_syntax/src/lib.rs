//! Syntactic realisation for Parlance.
//!
//! This crate provides:
//! - [`Realiser`] - Walks a feature tree and dispatches each node
//! - [`Grammar`] - Per-language hooks and the three realisation entry points
//! - [`English`] - The English grammar
//! - [`RealiserConfig`] - Premodifier ordering, lexicon use, and debug logging
//!
//! # Modules
//!
//! - [`clause`] - Agreement, mood shifts, interrogatives, passive raising
//! - [`verb_group`] - Modal, auxiliary, and negation stacking
//! - [`verb_phrase`] - Verb group plus complements
//! - [`noun_phrase`] - Determiners, premodifier ordering, pronominalisation
//! - [`coordination`] - Conjoined elements and feature cascading
//! - [`phrase`] - Adjective, adverb, and prepositional phrases

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod clause;
pub mod config;
pub mod coordination;
pub mod english;
pub mod grammar;
pub mod noun_phrase;
pub mod phrase;
pub mod realiser;
pub mod verb_group;
pub mod verb_phrase;

pub use clause::{resolve_agreement, Agreement};
pub use config::RealiserConfig;
pub use english::English;
pub use grammar::Grammar;
pub use realiser::{Parent, Realiser};
