//! Fixed store reader.

use vestibule_core::StoreReader;

/// Store double with fixed availability flags.
#[derive(Debug, Clone, Copy)]
pub struct StaticStore {
    calendar: bool,
    recent_list: bool,
}

impl StaticStore {
    /// Create a store with the given calendar / recent-list flags.
    pub fn new(calendar: bool, recent_list: bool) -> Self {
        Self { calendar, recent_list }
    }
}

impl StoreReader for StaticStore {
    fn calendar_enabled(&self) -> bool {
        self.calendar
    }

    fn recent_list_enabled(&self) -> bool {
        self.recent_list
    }
}
