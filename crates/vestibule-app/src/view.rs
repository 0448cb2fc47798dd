//! Render description.
//!
//! Pure conversion of composer state into a [`WelcomeFrame`], the tree a
//! surface renders from: header block, optional tabs block, and the two
//! designated mount points for injected content. Built fresh on every
//! render; nothing here is cached.

use vestibule_core::{Environment, FragmentSource, StoreReader, Translator};

use crate::{Tab, WelcomeView};

/// The tabs block of a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabsModel {
    /// Tab descriptors in render order.
    pub tabs: Vec<Tab>,

    /// Selected position, or `None` when the stored index points past the
    /// current sequence. A stale index selects nothing rather than erroring.
    pub selected: Option<usize>,
}

/// Render description of the welcome surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeFrame {
    /// Application name shown in the header block.
    pub app_name: String,

    /// Current room name input value.
    pub room_name: String,

    /// Join button label, already resolved for the current viewport.
    pub go_label: String,

    /// Tabs block. `None` when the computed sequence is empty, in which
    /// case no tab UI is produced at all.
    pub tabs: Option<TabsModel>,

    /// Narrow-layout text variant applies.
    pub show_responsive_label: bool,

    /// The content mount point has been populated.
    pub content_slot_populated: bool,

    /// The toolbar mount point has been populated.
    pub toolbar_slot_populated: bool,
}

impl WelcomeFrame {
    /// Build a frame from the composer's current state and live capability
    /// decisions.
    pub fn from_view<E, F, S, T>(view: &WelcomeView<E, F, S, T>) -> Self
    where
        E: Environment,
        F: FragmentSource,
        S: StoreReader,
        T: Translator,
    {
        let sequence = view.tab_sequence();
        let tabs = if sequence.is_empty() {
            None
        } else {
            let selected = (view.selected_tab() < sequence.len()).then(|| view.selected_tab());
            Some(TabsModel { tabs: sequence, selected })
        };

        Self {
            app_name: view.app_name().to_owned(),
            room_name: view.room_name().to_owned(),
            go_label: view.go_label(),
            tabs,
            show_responsive_label: view.show_responsive_label(),
            content_slot_populated: view.content_injected(),
            toolbar_slot_populated: view.toolbar_injected(),
        }
    }
}
