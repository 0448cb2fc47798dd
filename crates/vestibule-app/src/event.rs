//! View composer input events.
//!
//! This module defines [`ViewEvent`], the set of inputs that drive the
//! [`crate::WelcomeView`] state machine.
//!
//! Events originate from two sources: the shell's lifecycle (attach, detach)
//! and user input (tab clicks, room name edits, form submission).

/// Events processed by the view composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// The surface is attached to the document.
    Attach,

    /// The surface is detached from the document. Terminal.
    Detach,

    /// The user selected a tab by its position in the rendered sequence.
    ///
    /// The index is accepted unvalidated; rendering decides whether it still
    /// points at a tab.
    TabSelected(usize),

    /// The room name input changed.
    RoomNameChanged(String),

    /// The user requested to join with the current room name.
    SubmitRequested,
}
