//! English suffix rules.
//!
//! These apply only after the token and its lexical entry have failed to
//! supply a form. Every function takes a lower-case base form and
//! returns the inflected form; none of them consults a lexicon.

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Returns true if `word` ends in a consonant followed by `y`.
#[must_use]
pub fn ends_consonant_y(word: &str) -> bool {
    let mut chars = word.chars().rev();
    matches!(
        (chars.next(), chars.next()),
        (Some('y'), Some(c)) if !is_vowel(c)
    )
}

/// Returns true if `word` ends in a sibilant (s, x, z, ch, sh).
#[must_use]
pub fn ends_sibilant(word: &str) -> bool {
    ["s", "x", "z", "ch", "sh"].iter().any(|s| word.ends_with(s))
}

/// Returns true if `word` begins with a written vowel.
#[must_use]
pub fn starts_with_vowel(word: &str) -> bool {
    word.chars().next().is_some_and(is_vowel)
}

/// Doubles the final letter ("stop" -> "stopp").
#[must_use]
pub fn double_final_consonant(word: &str) -> String {
    match word.chars().last() {
        Some(last) => format!("{word}{last}"),
        None => String::new(),
    }
}

fn strip<'a>(word: &'a str, suffix: &str) -> &'a str {
    &word[..word.len() - suffix.len()]
}

/// Regular noun plural.
#[must_use]
pub fn regular_plural(base: &str) -> String {
    if ends_consonant_y(base) {
        format!("{}ies", strip(base, "y"))
    } else if ends_sibilant(base) {
        format!("{base}es")
    } else {
        format!("{base}s")
    }
}

/// Greco-Latin noun plural, falling back to the regular plural.
#[must_use]
pub fn greco_latin_plural(base: &str) -> String {
    // Longest suffixes first.
    const TABLE: &[(&str, &str)] = &[
        ("sis", "ses"),
        ("ma", "mata"),
        ("us", "i"),
        ("um", "a"),
        ("on", "a"),
        ("ix", "ices"),
        ("ex", "ices"),
        ("is", "ides"),
        ("a", "ae"),
        ("x", "ces"),
    ];
    TABLE
        .iter()
        .find(|(suffix, _)| base.ends_with(suffix))
        .map_or_else(
            || regular_plural(base),
            |(suffix, replacement)| format!("{}{replacement}", strip(base, suffix)),
        )
}

/// Possessive form of an already-inflected noun.
#[must_use]
pub fn possessive(form: &str) -> String {
    if form.ends_with('s') {
        format!("{form}'")
    } else {
        format!("{form}'s")
    }
}

/// Present tense, third person singular.
#[must_use]
pub fn present_3s(base: &str) -> String {
    match base {
        "be" => "is".to_string(),
        "have" => "has".to_string(),
        "do" => "does".to_string(),
        _ if ends_sibilant(base) => format!("{base}es"),
        _ if ends_consonant_y(base) => format!("{}ies", strip(base, "y")),
        _ => format!("{base}s"),
    }
}

/// Regular past tense.
#[must_use]
pub fn regular_past(base: &str, double: bool) -> String {
    if double {
        format!("{}ed", double_final_consonant(base))
    } else if base.ends_with('e') {
        format!("{base}d")
    } else if ends_consonant_y(base) {
        format!("{}ied", strip(base, "y"))
    } else {
        format!("{base}ed")
    }
}

/// Present participle.
#[must_use]
pub fn present_participle(base: &str, double: bool) -> String {
    if base == "be" {
        return "being".to_string();
    }
    if double {
        return format!("{}ing", double_final_consonant(base));
    }
    if base.ends_with("ie") {
        return format!("{}ying", strip(base, "ie"));
    }
    if base.ends_with('e') {
        let stem = strip(base, "e");
        let keeps_e = stem
            .chars()
            .last()
            .is_some_and(|c| matches!(c, 'i' | 'y' | 'e' | 'o'));
        if !keeps_e && !stem.is_empty() {
            return format!("{stem}ing");
        }
    }
    format!("{base}ing")
}

/// Regular comparative ("-er").
#[must_use]
pub fn comparative(base: &str, double: bool) -> String {
    degree(base, double, "er")
}

/// Regular superlative ("-est").
#[must_use]
pub fn superlative(base: &str, double: bool) -> String {
    degree(base, double, "est")
}

fn degree(base: &str, double: bool, suffix: &str) -> String {
    if ends_consonant_y(base) {
        format!("{}i{suffix}", strip(base, "y"))
    } else if base.ends_with('e') {
        format!("{base}{}", &suffix[1..])
    } else if double {
        format!("{}{suffix}", double_final_consonant(base))
    } else {
        format!("{base}{suffix}")
    }
}

/// Past form of a modal; modals without one are returned unchanged.
#[must_use]
pub fn modal_past(modal: &str) -> &str {
    match modal {
        "can" => "could",
        "will" => "would",
        "shall" => "should",
        "may" => "might",
        other => other,
    }
}
