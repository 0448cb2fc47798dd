//! View composer for the Vestibule welcome surface.
//!
//! Pure state machine and a synchronous session loop, enabling deterministic
//! testing with the same code that drives a live shell.
//!
//! # Components
//!
//! - [`WelcomeView`]: view composer state machine (lifecycle, tab selection,
//!   one-time content injection)
//! - [`Surface`]: trait for platform-specific presentation side effects
//! - [`Session`]: orchestration loop executing composer actions on a surface
//! - [`WelcomeFrame`]: render description built fresh per render

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod composer;
mod event;
mod session;
mod state;
mod surface;
mod view;

pub use action::{Slot, ViewAction};
pub use composer::WelcomeView;
pub use event::ViewEvent;
pub use session::Session;
pub use state::{Phase, Tab, TabKind};
pub use surface::Surface;
pub use view::{TabsModel, WelcomeFrame};
