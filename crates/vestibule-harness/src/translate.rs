//! Identity translator.

use vestibule_core::Translator;

/// Translator double that echoes the key.
///
/// Keeps assertions readable: a rendered label equals its lookup key.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyTranslator;

impl Translator for KeyTranslator {
    fn translate(&self, key: &str) -> String {
        key.to_owned()
    }
}
