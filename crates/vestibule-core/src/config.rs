//! Interface configuration for the welcome surface.
//!
//! The configuration is produced once at build time by the template assembler,
//! loaded once by the shell, and never mutated afterwards. Every key defaults
//! to a safe "disabled"/empty value so an absent key can never fail a load.

use serde::{Deserialize, Serialize};

/// Read-only interface configuration.
///
/// Absent keys deserialize to their defaults; missing optional input is a
/// default, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WelcomeConfig {
    /// Application name, applied as the document title on attach.
    pub app_name: String,
    /// Generate a suggested room name when the welcome surface attaches.
    pub generate_room_names_on_load: bool,
    /// Admit the externally supplied content fragment below the header.
    pub display_additional_content: bool,
    /// Admit the externally supplied fragment inside the header toolbar.
    pub display_additional_toolbar_content: bool,
}
