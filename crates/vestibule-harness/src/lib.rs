//! Deterministic test doubles for the welcome surface.
//!
//! Fixed, seeded implementations of the collaborator traits
//! ([`vestibule_core::Environment`], [`vestibule_core::FragmentSource`],
//! [`vestibule_core::StoreReader`], [`vestibule_core::Translator`]) and a
//! recording [`vestibule_app::Surface`], so composer behavior is reproducible
//! without a live document.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod env;
mod fragments;
mod store;
mod surface;
mod translate;

pub use env::StaticEnv;
pub use fragments::MemoryFragments;
pub use store::StaticStore;
pub use surface::{RecordingSurface, SurfaceCall};
pub use translate::KeyTranslator;
