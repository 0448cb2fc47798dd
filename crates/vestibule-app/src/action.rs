//! View composer side-effects and intents.
//!
//! This module defines the [`ViewAction`] enum, instructions produced by the
//! [`crate::WelcomeView`] state machine for the session loop to execute
//! against a [`crate::Surface`].

use vestibule_core::Fragment;

/// Mount points for externally supplied content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The mount point below the welcome page header.
    Content,

    /// The mount point inside the header toolbar.
    Toolbar,
}

/// Actions produced by the view composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    /// Render the surface from the current composer state.
    Render,

    /// Apply the document-wide presentation marker and title.
    AcquirePresentation {
        /// Document title, taken from the configured application name.
        title: String,
    },

    /// Remove the presentation marker applied on attach.
    ///
    /// Symmetric counterpart of [`ViewAction::AcquirePresentation`]; injected
    /// content is deliberately not undone.
    ReleasePresentation,

    /// Clone an external fragment into a mount point. Emitted at most once
    /// per slot over the life of a composer.
    Inject {
        /// Target mount point.
        slot: Slot,
        /// Fragment content to clone into the mount point.
        fragment: Fragment,
    },

    /// Delegate a join to the session-join collaborator.
    Join {
        /// Validated room name.
        room: String,
    },
}
