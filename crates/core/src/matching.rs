//! Guess checking.

use crate::model::Person;

/// Canonical form of a typed guess: trimmed and lowercased.
#[must_use]
pub fn normalize_guess(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether `guess` names `person`.
///
/// Accepts the full name, any listed variant, or any single
/// whitespace-delimited token of the full name, all compared without case.
#[must_use]
pub fn is_correct_guess(person: &Person, guess: &str) -> bool {
    let guess = normalize_guess(guess);
    if guess.is_empty() {
        return false;
    }

    let full_name = person.name().map(normalize_guess).unwrap_or_default();
    if full_name == guess {
        return true;
    }

    if person
        .variants()
        .iter()
        .any(|variant| normalize_guess(variant) == guess)
    {
        return true;
    }

    full_name.split_whitespace().any(|token| token == guess)
}
