//! Core types for Parlance: features, phrase trees, and realised output.
//!
//! This crate provides:
//! - [`Feature`] and the closed grammatical enumerations ([`Number`], [`Person`],
//!   [`Tense`], [`Form`], [`InterrogativeType`], ...)
//! - [`FeatureMap`] - Per-node feature tables with documented defaults
//! - [`LexicalEntry`] - Immutable lexicon records
//! - [`Element`] - The feature tree consumed by the realiser
//! - [`Realized`] - The tagged output tree produced by the realiser
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod element;
pub mod error;
pub mod feature_map;
pub mod features;
pub mod lexical;
pub mod realized;

pub use element::{CoordinatedElement, Element, InflectedWord, PhraseElement, TextElement};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use feature_map::{FeatureMap, FeatureValue, FromFeatureValue};
pub use features::{
    DiscourseFunction, Feature, Form, Gender, Inflection, InterrogativeType, LexicalCategory,
    Number, Person, PhraseCategory, PronounPosition, Tense,
};
pub use lexical::LexicalEntry;
pub use realized::{Realized, RealizedList, RealizedWord};
