//! Core types for the Vestibule welcome surface.
//!
//! Pure decision logic and the narrow collaborator interfaces it depends on,
//! completely decoupled from any rendering runtime.
//!
//! # Components
//!
//! - [`WelcomeConfig`]: read-only interface configuration
//! - [`caps`]: capability gate deciding which optional sections render
//! - [`Environment`]: viewport/mobile probes and entropy
//! - [`FragmentSource`]: locator for externally supplied content fragments
//! - [`StoreReader`]: calendar / recent-list availability flags
//! - [`Translator`]: label lookup
//! - [`roomname`]: room name generation and validation

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod caps;
mod config;
mod env;
mod fragment;
pub mod i18n;
pub mod roomname;
mod store;

pub use config::WelcomeConfig;
pub use env::Environment;
pub use fragment::{
    Fragment, FragmentSource, TOOLBAR_CONTENT_FRAGMENT, WELCOME_CONTENT_FRAGMENT,
};
pub use i18n::Translator;
pub use roomname::RoomNameError;
pub use store::StoreReader;
