//! Lexicon access for Parlance.
//!
//! The realiser consumes lexical data only through [`LexiconSource`]; a
//! miss is never an error, it just means the word is inflected by rule.
//!
//! # Modules
//!
//! - [`source`] - The query trait and an always-missing implementation
//! - [`lexicon`] - An in-memory indexed lexicon with duplicate reporting
//! - [`english`] - Closed-class English seed entries
//! - [`serialize`] - `MessagePack` snapshots (feature `serde`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod english;
pub mod lexicon;
#[cfg(feature = "serde")]
pub mod serialize;
pub mod source;

pub use lexicon::{IndexReport, Lexicon};
#[cfg(feature = "serde")]
pub use serialize::{from_bytes, load_from_file, save_to_file, to_bytes};
pub use source::{EmptyLexicon, LexiconSource};

pub use parlance_foundation::LexicalEntry;
