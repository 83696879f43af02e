//! English closed-class vocabulary.

use parlance_foundation::InterrogativeType;

pub const AND: &str = "and";
pub const BY: &str = "by";
pub const TO: &str = "to";
pub const NOT: &str = "not";
pub const WILL: &str = "will";
pub const BE: &str = "be";
pub const HAVE: &str = "have";
pub const DO: &str = "do";

/// Conjunctions whose coordinations agree in the plural.
pub const PLURAL_CONJUNCTIONS: &[&str] = &["and", "as well as", "both"];

/// Question words by interrogative type.
pub fn keyword(kind: InterrogativeType, after_preposition: bool) -> &'static str {
    match kind {
        InterrogativeType::WhoSubject | InterrogativeType::WhoObject if after_preposition => "whom",
        InterrogativeType::WhoSubject | InterrogativeType::WhoObject => "who",
        InterrogativeType::WhatSubject | InterrogativeType::WhatObject => "what",
        InterrogativeType::WhoIndirectObject => "whom",
        InterrogativeType::How | InterrogativeType::HowPredicate => "how",
        InterrogativeType::Why => "why",
        InterrogativeType::Where => "where",
        InterrogativeType::HowMany => "how many",
        InterrogativeType::YesNo => "",
    }
}
