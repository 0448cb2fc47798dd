//! Translation collaborator interface.
//!
//! The welcome surface looks labels up by key and never implements the
//! lookup itself. Well-known keys live in [`keys`].

/// Label lookup supplied by the embedding application.
pub trait Translator {
    /// Translate a label key into display text.
    ///
    /// Implementations return the key itself for unknown keys rather than
    /// failing.
    fn translate(&self, key: &str) -> String;
}

/// Well-known label keys used by the welcome surface.
pub mod keys {
    /// Calendar tab label.
    pub const CALENDAR_TAB: &str = "welcomepage.calendar";

    /// Recent-meetings tab label.
    pub const RECENT_LIST_TAB: &str = "welcomepage.recentList";

    /// Join button label on wide layouts.
    pub const GO_BUTTON: &str = "welcomepage.go";

    /// Join button label on narrow layouts.
    pub const GO_BUTTON_SMALL: &str = "welcomepage.goSmall";
}
