//! Read-only view over the session state container.
//!
//! The welcome surface only needs two availability flags from the
//! application's state store; it never writes to it.

/// Availability flags supplied by the state container.
pub trait StoreReader {
    /// Whether calendar integration is enabled for this session.
    fn calendar_enabled(&self) -> bool;

    /// Whether the recent-meetings list is enabled for this session.
    fn recent_list_enabled(&self) -> bool;
}
