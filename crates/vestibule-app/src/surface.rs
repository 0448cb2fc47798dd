//! Surface trait for abstracting presentation side effects.
//!
//! The [`Surface`] trait decouples the view composer from the concrete
//! document runtime. A live shell implements it against the real document;
//! the harness records calls for assertions. The same session loop drives
//! both.

use vestibule_core::Fragment;

use crate::{Slot, WelcomeFrame};

/// Platform-specific presentation side effects.
///
/// All operations are synchronous and bounded: the domain is a
/// single-threaded UI event loop and nothing here may block it.
pub trait Surface {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Apply the document-wide presentation marker and set the title.
    ///
    /// # Errors
    ///
    /// Returns an error if the document scope cannot be reached.
    fn acquire_presentation(&mut self, title: &str) -> Result<(), Self::Error>;

    /// Remove the presentation marker applied by
    /// [`acquire_presentation`](Surface::acquire_presentation).
    ///
    /// # Errors
    ///
    /// Returns an error if the document scope cannot be reached.
    fn release_presentation(&mut self) -> Result<(), Self::Error>;

    /// Clone a fragment's content into the given mount point.
    ///
    /// The composer guarantees this is called at most once per slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the mount point cannot be written.
    fn inject(&mut self, slot: Slot, fragment: &Fragment) -> Result<(), Self::Error>;

    /// Delegate a join to the session-join collaborator.
    ///
    /// # Errors
    ///
    /// Returns an error if the join cannot be delegated.
    fn join(&mut self, room: &str) -> Result<(), Self::Error>;

    /// Render the given frame.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, frame: &WelcomeFrame) -> Result<(), Self::Error>;
}
