//! Randomness capability used to generate ceremony challenges
//!
//! Earlier C-based U2F relying-party libraries consumed randomness through
//! a narrow `set_random_bytes(dest, len)` callback so the source could be
//! swapped out by the host platform. This crate keeps that seam as a trait,
//! defaulting to a cryptographically secure source so callers who don't
//! need to mock it don't have to think about it.

use crate::error::{Error, Result};
use ring::rand::SecureRandom;

/// A source of cryptographically secure random bytes.
///
/// `Send` so that a `Context` holding one as `Box<dyn RandomSource>` is
/// itself `Send` -- independent contexts must be usable from independent
/// threads.
pub trait RandomSource: Send {
    /// Fills `dest` with random bytes.
    fn fill(&self, dest: &mut [u8]) -> Result<()>;
}

/// Default [`RandomSource`], backed by `ring`'s platform CSPRNG.
pub struct SystemRandomSource {
    inner: ring::rand::SystemRandom,
}

impl Default for SystemRandomSource {
    fn default() -> Self {
        SystemRandomSource {
            inner: ring::rand::SystemRandom::new(),
        }
    }
}

impl RandomSource for SystemRandomSource {
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        self.inner
            .fill(dest)
            .map_err(|_| Error::Crypto("failed to source random bytes"))
    }
}
