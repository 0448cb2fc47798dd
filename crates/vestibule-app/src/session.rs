//! Session loop for the welcome surface.
//!
//! The session wires a [`WelcomeView`] to a [`Surface`], dispatching events
//! into the state machine and executing the returned actions in order. It is
//! synchronous: every state transition is a reaction to a discrete event on
//! the single-threaded UI loop, and no operation blocks.

use vestibule_core::{Environment, FragmentSource, StoreReader, Translator};

use crate::{Surface, ViewAction, ViewEvent, WelcomeFrame, WelcomeView};

/// Orchestrates the view composer against a platform surface.
///
/// # Type Parameters
///
/// - `D`: platform-specific presentation surface
/// - `E`, `F`, `S`, `T`: the composer's injected collaborators
pub struct Session<D, E, F, S, T> {
    surface: D,
    view: WelcomeView<E, F, S, T>,
}

impl<D, E, F, S, T> Session<D, E, F, S, T>
where
    D: Surface,
    E: Environment,
    F: FragmentSource,
    S: StoreReader,
    T: Translator,
{
    /// Create a session over an existing composer.
    pub fn new(surface: D, view: WelcomeView<E, F, S, T>) -> Self {
        Self { surface, view }
    }

    /// Attach the surface to the document.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface fails to execute an action.
    pub fn attach(&mut self) -> Result<(), D::Error> {
        self.dispatch(ViewEvent::Attach)
    }

    /// Detach the surface from the document. Terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface fails to execute an action.
    pub fn detach(&mut self) -> Result<(), D::Error> {
        self.dispatch(ViewEvent::Detach)
    }

    /// Dispatch an event into the composer and execute the actions.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface fails to execute an action.
    pub fn dispatch(&mut self, event: ViewEvent) -> Result<(), D::Error> {
        let actions = self.view.handle(event);
        self.apply(actions)
    }

    /// Execute composer actions against the surface, in order.
    fn apply(&mut self, actions: Vec<ViewAction>) -> Result<(), D::Error> {
        for action in actions {
            match action {
                ViewAction::Render => {
                    let frame = WelcomeFrame::from_view(&self.view);
                    self.surface.render(&frame)?;
                },
                ViewAction::AcquirePresentation { title } => {
                    self.surface.acquire_presentation(&title)?;
                },
                ViewAction::ReleasePresentation => self.surface.release_presentation()?,
                ViewAction::Inject { slot, fragment } => self.surface.inject(slot, &fragment)?,
                ViewAction::Join { room } => self.surface.join(&room)?,
            }
        }
        Ok(())
    }

    /// The composer.
    pub fn view(&self) -> &WelcomeView<E, F, S, T> {
        &self.view
    }

    /// The surface.
    pub fn surface(&self) -> &D {
        &self.surface
    }
}
