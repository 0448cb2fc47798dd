//! In-memory fragment source.

use std::collections::HashMap;

use vestibule_core::{
    Fragment, FragmentSource, TOOLBAR_CONTENT_FRAGMENT, WELCOME_CONTENT_FRAGMENT,
};

/// Fragment source double backed by an id -> markup map.
#[derive(Debug, Clone, Default)]
pub struct MemoryFragments {
    fragments: HashMap<String, String>,
}

impl MemoryFragments {
    /// Create an empty source: every lookup answers `None`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fragment under an arbitrary identifier.
    #[must_use]
    pub fn with_fragment(mut self, id: impl Into<String>, markup: impl Into<String>) -> Self {
        self.fragments.insert(id.into(), markup.into());
        self
    }

    /// Add the welcome-content fragment.
    #[must_use]
    pub fn with_welcome_content(self, markup: impl Into<String>) -> Self {
        self.with_fragment(WELCOME_CONTENT_FRAGMENT, markup)
    }

    /// Add the toolbar-content fragment.
    #[must_use]
    pub fn with_toolbar_content(self, markup: impl Into<String>) -> Self {
        self.with_fragment(TOOLBAR_CONTENT_FRAGMENT, markup)
    }
}

impl FragmentSource for MemoryFragments {
    fn lookup(&self, id: &str) -> Option<Fragment> {
        self.fragments.get(id).map(Fragment::new)
    }
}
