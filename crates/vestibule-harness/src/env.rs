//! Fixed environment with seeded entropy.

use std::sync::{Arc, Mutex, PoisonError};

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use vestibule_core::Environment;

const DEFAULT_SEED: u64 = 42;

/// Environment double with fixed probes and a seeded RNG.
///
/// Given the same seed, every run draws the same entropy, so generated room
/// names are reproducible.
#[derive(Debug, Clone)]
pub struct StaticEnv {
    mobile: bool,
    width: u32,
    rng: Arc<Mutex<ChaCha8Rng>>,
}

impl StaticEnv {
    /// Create an environment with explicit probes and seed.
    pub fn new(mobile: bool, width: u32, seed: u64) -> Self {
        Self { mobile, width, rng: Arc::new(Mutex::new(ChaCha8Rng::seed_from_u64(seed))) }
    }

    /// Non-mobile environment with the given viewport width.
    pub fn desktop(width: u32) -> Self {
        Self::new(false, width, DEFAULT_SEED)
    }

    /// Mobile environment with the given viewport width.
    pub fn mobile(width: u32) -> Self {
        Self::new(true, width, DEFAULT_SEED)
    }
}

impl Environment for StaticEnv {
    fn is_mobile(&self) -> bool {
        self.mobile
    }

    fn viewport_width(&self) -> u32 {
        self.width
    }

    fn random_bytes(&self, buffer: &mut [u8]) {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner).fill_bytes(buffer);
    }
}
