//! Externally supplied content fragments.
//!
//! A fragment is an opaque block of markup that the surrounding document
//! provides under a well-known identifier. The welcome surface never owns a
//! fragment; it clones the content into a designated mount point at most
//! once, and the transfer is never retried or undone.

/// Identifier of the fragment mounted below the welcome page header.
pub const WELCOME_CONTENT_FRAGMENT: &str = "welcome-page-additional-content-template";

/// Identifier of the fragment mounted inside the header toolbar.
pub const TOOLBAR_CONTENT_FRAGMENT: &str = "settings-toolbar-additional-content-template";

/// Opaque block of externally supplied markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    markup: String,
}

impl Fragment {
    /// Create a fragment from raw markup.
    pub fn new(markup: impl Into<String>) -> Self {
        Self { markup: markup.into() }
    }

    /// Whether the fragment carries any content after trimming whitespace.
    ///
    /// A whitespace-only fragment is treated the same as an absent one.
    pub fn has_content(&self) -> bool {
        !self.markup.trim().is_empty()
    }

    /// The raw markup.
    pub fn markup(&self) -> &str {
        &self.markup
    }
}

/// Locator for externally supplied fragments.
///
/// Implemented by the embedding shell over the surrounding document; the
/// harness provides an in-memory implementation for tests.
pub trait FragmentSource {
    /// Look up a fragment by its well-known identifier.
    ///
    /// Returns `None` when the document does not provide the fragment.
    /// Absence is a normal answer, never an error.
    fn lookup(&self, id: &str) -> Option<Fragment>;
}
