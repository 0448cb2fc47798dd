//! Observable view state types.
//!
//! Lifecycle phases and tab descriptors. Tab descriptors carry no persisted
//! identity across renders beyond their position; the sequence is rebuilt
//! from current capability decisions on every render.

/// Lifecycle phase of the view composer.
///
/// Transitions are `Detached -> Attached -> Released`; `Released` is
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed but not yet attached to the document.
    Detached,

    /// Attached; presentation marker applied, one-time injections done.
    Attached,

    /// Detached for good; the instance is discarded.
    Released,
}

/// Kind of optional tab offered on the welcome surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabKind {
    /// Upcoming calendar events.
    Calendar,

    /// Previously joined meetings.
    RecentList,
}

/// A tab in the rendered sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    /// What the tab shows.
    pub kind: TabKind,

    /// Translated label text.
    pub label: String,
}
