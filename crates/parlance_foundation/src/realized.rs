//! Realised output handed to the formatting layer.
//!
//! Realisation produces a tree of literal strings, each tagged with the
//! discourse function it filled. List boundaries are kept so a formatter
//! can make punctuation decisions (appositives, front modifiers). No
//! capitalisation or punctuation is applied here.

use crate::features::{DiscourseFunction, LexicalCategory, PhraseCategory};

/// A realised constituent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Realized {
    /// A single surface word.
    Word(RealizedWord),
    /// An ordered group of realised constituents.
    List(RealizedList),
}

/// A single surface word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RealizedWord {
    /// Surface text.
    pub text: String,
    /// Discourse function of the word, if tagged.
    pub function: Option<DiscourseFunction>,
    /// Lexical category of the source token.
    pub category: Option<LexicalCategory>,
}

/// An ordered group of realised constituents.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct RealizedList {
    /// Children, in surface order.
    pub items: Vec<Realized>,
    /// Discourse function of the group, if tagged.
    pub function: Option<DiscourseFunction>,
    /// Category of the source phrase.
    pub category: Option<PhraseCategory>,
    /// Group is an appositive.
    pub appositive: bool,
}

impl Realized {
    /// Creates a word.
    #[must_use]
    pub fn word(text: impl Into<String>, category: Option<LexicalCategory>) -> Self {
        Self::Word(RealizedWord {
            text: text.into(),
            function: None,
            category,
        })
    }

    /// Creates a list.
    #[must_use]
    pub fn list(items: Vec<Realized>, category: Option<PhraseCategory>) -> Self {
        Self::List(RealizedList {
            items,
            function: None,
            category,
            appositive: false,
        })
    }

    /// Creates an empty list.
    #[must_use]
    pub fn empty() -> Self {
        Self::List(RealizedList::default())
    }

    /// Returns the discourse function tag.
    #[must_use]
    pub fn function(&self) -> Option<DiscourseFunction> {
        match self {
            Self::Word(w) => w.function,
            Self::List(l) => l.function,
        }
    }

    /// Sets the discourse function tag.
    pub fn set_function(&mut self, function: DiscourseFunction) {
        match self {
            Self::Word(w) => w.function = Some(function),
            Self::List(l) => l.function = Some(function),
        }
    }

    /// Builder form of [`Realized::set_function`].
    #[must_use]
    pub fn with_function(mut self, function: DiscourseFunction) -> Self {
        self.set_function(function);
        self
    }

    /// Returns true if the constituent contains no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Word(w) => w.text.is_empty(),
            Self::List(l) => l.items.iter().all(Realized::is_empty),
        }
    }

    /// Returns the children of a list, or the word itself as a single item.
    #[must_use]
    pub fn into_items(self) -> Vec<Realized> {
        match self {
            Self::List(l) => l.items,
            word @ Self::Word(_) => vec![word],
        }
    }

    /// Flattens the tree into its non-empty words.
    #[must_use]
    pub fn words(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_words(&mut out);
        out
    }

    fn collect_words<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Word(w) => {
                if !w.text.is_empty() {
                    out.push(&w.text);
                }
            }
            Self::List(l) => {
                for item in &l.items {
                    item.collect_words(out);
                }
            }
        }
    }

    /// Joins the words with single spaces.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.words().join(" ")
    }

    /// Finds the first constituent tagged with `function`, depth first.
    #[must_use]
    pub fn find(&self, function: DiscourseFunction) -> Option<&Realized> {
        if self.function() == Some(function) {
            return Some(self);
        }
        match self {
            Self::Word(_) => None,
            Self::List(l) => l.items.iter().find_map(|item| item.find(function)),
        }
    }
}
