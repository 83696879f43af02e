//! Inflection for Parlance.
//!
//! A token is inflected from three sources in order: the token's own
//! features, its lexical entry, and a closed rule table. The English
//! tables live here; other languages implement [`Morphology`].
//!
//! # Modules
//!
//! - [`engine`] - The [`Morphology`] trait and inflection [`Context`]
//! - [`english`] - English noun, verb, adjective, adverb, modal, determiner, and pronoun forms
//! - [`pronouns`] - The English personal pronoun table
//! - [`rules`] - English suffix rules

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod engine;
pub mod english;
pub mod pronouns;
pub mod rules;

pub use engine::{Context, Morphology};
pub use english::EnglishMorphology;
pub use pronouns::Referent;
