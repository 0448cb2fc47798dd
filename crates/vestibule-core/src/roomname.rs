//! Room name generation and validation.
//!
//! Generation composes a pronounceable suggestion from fixed word lists,
//! drawing entropy from the [`Environment`] so tests stay deterministic.
//! Generation is idempotent-safe: calling it repeatedly is valid and each
//! call simply yields a fresh suggestion.

use thiserror::Error;

use crate::Environment;

/// Characters that are never allowed in a room name.
///
/// The set mirrors the join-URL constraints of the conference backend.
const FORBIDDEN_CHARS: [char; 7] = ['?', '&', ':', '"', '\'', '%', '#'];

const ADJECTIVES: [&str; 12] = [
    "Amber", "Bold", "Calm", "Daring", "Eager", "Fabled", "Gentle", "Hidden", "Keen", "Lively",
    "Mellow", "Noble",
];

const PLURAL_NOUNS: [&str; 12] = [
    "Foxes", "Rivers", "Larks", "Maples", "Comets", "Harbors", "Meadows", "Otters", "Pines",
    "Quills", "Summits", "Willows",
];

const VERBS: [&str; 10] = [
    "Gather", "Wander", "Ponder", "Applaud", "Convene", "Debate", "Explore", "Mingle", "Rejoice",
    "Assemble",
];

const ADVERBS: [&str; 10] = [
    "Brightly", "Calmly", "Eagerly", "Gladly", "Quietly", "Swiftly", "Warmly", "Boldly", "Freely",
    "Kindly",
];

/// Reasons a room name fails local validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoomNameError {
    /// The name is empty or whitespace-only.
    #[error("room name is empty")]
    Empty,

    /// The name contains a character the join URL cannot carry.
    #[error("room name contains forbidden character {0:?}")]
    ForbiddenChar(char),
}

/// Generate a suggested room name.
///
/// The result is always non-empty and always passes [`validate`].
pub fn generate(env: &impl Environment) -> String {
    let mut name = String::new();
    for list in [&ADJECTIVES[..], &PLURAL_NOUNS[..], &VERBS[..], &ADVERBS[..]] {
        let index = (env.random_u64() % list.len() as u64) as usize;
        name.push_str(list[index]);
    }
    name
}

/// Validate a room name entered by the user.
///
/// # Errors
///
/// Returns [`RoomNameError::Empty`] for empty or whitespace-only input and
/// [`RoomNameError::ForbiddenChar`] for the first disallowed character.
pub fn validate(name: &str) -> Result<(), RoomNameError> {
    if name.trim().is_empty() {
        return Err(RoomNameError::Empty);
    }

    match name.chars().find(|c| FORBIDDEN_CHARS.contains(c)) {
        Some(c) => Err(RoomNameError::ForbiddenChar(c)),
        None => Ok(()),
    }
}
