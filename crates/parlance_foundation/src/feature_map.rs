//! Feature values and per-node feature tables.
//!
//! A [`FeatureMap`] is a thin wrapper around `im::OrdMap`, so cloning a
//! node's table is O(1) and iteration order is deterministic. Typed
//! accessors return the documented default when a key is absent or holds
//! a value of the wrong kind; the `require_*` accessors report those
//! cases as errors instead.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::features::{
    DiscourseFunction, Feature, Form, Gender, Inflection, InterrogativeType, Number, Person,
    Tense,
};

/// A value stored under a [`Feature`] key.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FeatureValue {
    /// Boolean flag.
    Bool(bool),
    /// String value (irregular forms, modal, complementiser).
    Str(Arc<str>),
    /// Grammatical number.
    Number(Number),
    /// Grammatical person.
    Person(Person),
    /// Grammatical gender.
    Gender(Gender),
    /// Tense.
    Tense(Tense),
    /// Form.
    Form(Form),
    /// Interrogative type.
    Interrogative(InterrogativeType),
    /// Discourse function.
    Discourse(DiscourseFunction),
    /// Inflection pattern.
    Inflection(Inflection),
}

impl FeatureValue {
    /// Short name of the value kind, used in error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Str(_) => "string",
            Self::Number(_) => "number",
            Self::Person(_) => "person",
            Self::Gender(_) => "gender",
            Self::Tense(_) => "tense",
            Self::Form(_) => "form",
            Self::Interrogative(_) => "interrogative type",
            Self::Discourse(_) => "discourse function",
            Self::Inflection(_) => "inflection",
        }
    }

    /// Returns the string payload, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Number(v) => write!(f, "{v}"),
            Self::Person(v) => write!(f, "{v}"),
            Self::Gender(v) => write!(f, "{v}"),
            Self::Tense(v) => write!(f, "{v}"),
            Self::Form(v) => write!(f, "{v}"),
            Self::Interrogative(v) => write!(f, "{v}"),
            Self::Discourse(v) => write!(f, "{v}"),
            Self::Inflection(v) => write!(f, "{v}"),
        }
    }
}

impl From<bool> for FeatureValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for FeatureValue {
    fn from(s: &str) -> Self {
        Self::Str(Arc::from(s))
    }
}

impl From<String> for FeatureValue {
    fn from(s: String) -> Self {
        Self::Str(Arc::from(s))
    }
}

/// Conversion from a stored [`FeatureValue`] into a typed value.
///
/// Enumerations also accept a string value that parses as a member, so
/// externally supplied strings resolve to the closed type. A string that
/// does not parse is treated as absent.
pub trait FromFeatureValue: Sized {
    /// Name of the expected kind, used in error messages.
    const KIND: &'static str;

    /// Extracts a typed value, or `None` if the kinds do not match.
    fn from_feature_value(value: &FeatureValue) -> Option<Self>;
}

impl FromFeatureValue for bool {
    const KIND: &'static str = "bool";

    fn from_feature_value(value: &FeatureValue) -> Option<Self> {
        match value {
            FeatureValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl FromFeatureValue for Arc<str> {
    const KIND: &'static str = "string";

    fn from_feature_value(value: &FeatureValue) -> Option<Self> {
        match value {
            FeatureValue::Str(s) => Some(Arc::clone(s)),
            _ => None,
        }
    }
}

macro_rules! enum_feature_value {
    ($ty:ident, $variant:ident) => {
        impl From<$ty> for FeatureValue {
            fn from(v: $ty) -> Self {
                Self::$variant(v)
            }
        }

        impl FromFeatureValue for $ty {
            const KIND: &'static str = stringify!($ty);

            fn from_feature_value(value: &FeatureValue) -> Option<Self> {
                match value {
                    FeatureValue::$variant(v) => Some(*v),
                    FeatureValue::Str(s) => s.parse().ok(),
                    _ => None,
                }
            }
        }
    };
}

enum_feature_value!(Number, Number);
enum_feature_value!(Person, Person);
enum_feature_value!(Gender, Gender);
enum_feature_value!(Tense, Tense);
enum_feature_value!(Form, Form);
enum_feature_value!(InterrogativeType, Interrogative);
enum_feature_value!(DiscourseFunction, Discourse);
enum_feature_value!(Inflection, Inflection);

/// A node's mutable feature table.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FeatureMap(im::OrdMap<Feature, FeatureValue>);

impl FeatureMap {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self(im::OrdMap::new())
    }

    /// Returns the number of features set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no features are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the raw value stored under `feature`.
    #[must_use]
    pub fn get(&self, feature: Feature) -> Option<&FeatureValue> {
        self.0.get(&feature)
    }

    /// Returns true if `feature` is set.
    #[must_use]
    pub fn contains(&self, feature: Feature) -> bool {
        self.0.contains_key(&feature)
    }

    /// Sets `feature`. Setting the value already stored is a no-op.
    pub fn set(&mut self, feature: Feature, value: impl Into<FeatureValue>) {
        let value = value.into();
        if self.0.get(&feature) != Some(&value) {
            self.0.insert(feature, value);
        }
    }

    /// Builder form of [`FeatureMap::set`].
    #[must_use]
    pub fn with(mut self, feature: Feature, value: impl Into<FeatureValue>) -> Self {
        self.set(feature, value);
        self
    }

    /// Removes `feature`, returning its previous value.
    pub fn remove(&mut self, feature: Feature) -> Option<FeatureValue> {
        self.0.remove(&feature)
    }

    /// Iterates over features in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&Feature, &FeatureValue)> {
        self.0.iter()
    }

    /// Returns the value of `feature` converted to `T`, if present and convertible.
    #[must_use]
    pub fn get_as<T: FromFeatureValue>(&self, feature: Feature) -> Option<T> {
        self.get(feature).and_then(T::from_feature_value)
    }

    /// Returns the value of `feature` converted to `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if the feature is absent or holds another kind.
    pub fn require<T: FromFeatureValue>(&self, feature: Feature) -> Result<T> {
        let value = self
            .get(feature)
            .ok_or_else(|| Error::missing_feature(feature))?;
        T::from_feature_value(value)
            .ok_or_else(|| Error::feature_type_mismatch(feature, T::KIND, value.kind_name()))
    }

    /// Looks up `feature` here, then in `parent` for inheriting features.
    #[must_use]
    pub fn inherited<'a>(&'a self, parent: &'a FeatureMap, feature: Feature) -> Option<&'a FeatureValue> {
        self.get(feature).or_else(|| {
            if feature.inherits() {
                parent.get(feature)
            } else {
                None
            }
        })
    }

    /// Returns a boolean flag, defaulting to `false`.
    #[must_use]
    pub fn flag(&self, feature: Feature) -> bool {
        self.get_as::<bool>(feature).unwrap_or(false)
    }

    /// Returns a string feature.
    #[must_use]
    pub fn string(&self, feature: Feature) -> Option<&str> {
        self.get(feature).and_then(FeatureValue::as_str)
    }

    /// Returns the explicitly set number, if any.
    #[must_use]
    pub fn get_number(&self) -> Option<Number> {
        self.get_as(Feature::Number)
    }

    /// Returns the number, defaulting to singular.
    #[must_use]
    pub fn number(&self) -> Number {
        self.get_number().unwrap_or(Number::Singular)
    }

    /// Returns the explicitly set person, if any.
    #[must_use]
    pub fn get_person(&self) -> Option<Person> {
        self.get_as(Feature::Person)
    }

    /// Returns the person, defaulting to third.
    #[must_use]
    pub fn person(&self) -> Person {
        self.get_person().unwrap_or(Person::Third)
    }

    /// Returns the explicitly set gender, if any.
    #[must_use]
    pub fn get_gender(&self) -> Option<Gender> {
        self.get_as(Feature::Gender)
    }

    /// Returns the gender, defaulting to neuter.
    #[must_use]
    pub fn gender(&self) -> Gender {
        self.get_gender().unwrap_or(Gender::Neuter)
    }

    /// Returns the explicitly set tense, if any.
    #[must_use]
    pub fn get_tense(&self) -> Option<Tense> {
        self.get_as(Feature::Tense)
    }

    /// Returns the tense, defaulting to present.
    #[must_use]
    pub fn tense(&self) -> Tense {
        self.get_tense().unwrap_or(Tense::Present)
    }

    /// Returns the explicitly set form, if any.
    #[must_use]
    pub fn get_form(&self) -> Option<Form> {
        self.get_as(Feature::Form)
    }

    /// Returns the form, defaulting to normal.
    #[must_use]
    pub fn form(&self) -> Form {
        self.get_form().unwrap_or(Form::Normal)
    }

    /// Returns the interrogative type; unrecognised values read as `None`.
    #[must_use]
    pub fn interrogative(&self) -> Option<InterrogativeType> {
        self.get_as(Feature::Interrogative)
    }

    /// Returns the discourse function, if tagged.
    #[must_use]
    pub fn discourse_function(&self) -> Option<DiscourseFunction> {
        self.get_as(Feature::DiscourseFunction)
    }

    /// Returns the default inflection pattern, if recorded.
    #[must_use]
    pub fn inflection(&self) -> Option<Inflection> {
        self.get_as(Feature::DefaultInflection)
    }
}

impl fmt::Debug for FeatureMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

impl FromIterator<(Feature, FeatureValue)> for FeatureMap {
    fn from_iter<I: IntoIterator<Item = (Feature, FeatureValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
