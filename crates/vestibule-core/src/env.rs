//! Environment abstraction for deterministic testing.
//!
//! Decouples decision logic from ambient browser/system facts (viewport
//! width, mobile detection, randomness). The embedding shell implements this
//! against the real runtime; tests use a fixed implementation from the
//! harness crate.

/// Abstract environment providing display probes and randomness.
///
/// # Safety
///
/// Implementations MUST guarantee:
///
/// - Probes are cheap, synchronous, and never block the event loop
/// - `random_bytes()` is infallible except in exceptional circumstances
///   (e.g., OS entropy exhaustion)
pub trait Environment: Clone + Send + Sync + 'static {
    /// Whether the surface runs in a mobile environment.
    ///
    /// When `true`, calendar and recent-list tabs are never offered,
    /// regardless of their individual enablement flags.
    fn is_mobile(&self) -> bool;

    /// Current viewport width in display units.
    ///
    /// Callers must not cache the result: the width can change during the
    /// session, and decisions derived from it are re-evaluated per render.
    /// A zero width is a valid answer, not an error.
    fn viewport_width(&self) -> u32;

    /// Fills the provided buffer with random bytes.
    ///
    /// # Invariants
    ///
    /// - Given the same RNG seed, a deterministic implementation produces
    ///   the same sequence of bytes
    fn random_bytes(&self, buffer: &mut [u8]);

    /// Generates a random `u64`.
    ///
    /// Convenience for common use cases like picking room name words.
    fn random_u64(&self) -> u64 {
        let mut bytes = [0u8; 8];
        self.random_bytes(&mut bytes);
        u64::from_be_bytes(bytes)
    }
}
