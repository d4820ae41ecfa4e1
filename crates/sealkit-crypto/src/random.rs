//! Injected source of cryptographically secure randomness.
//!
//! Randomness is modeled as a capability passed to the primitives rather than
//! ambient global state. Production code uses [`SystemRandom`]; tests may
//! substitute a deterministic implementation to pin down IV bytes.

use crate::error::AeadError;

/// A thread-safe source of cryptographically secure random bytes.
///
/// # Invariants
///
/// - Implementations MUST be safe for concurrent use from multiple threads
/// - Production implementations MUST draw from a CSPRNG
/// - A failing source MUST report the failure; it must never fall back to a
///   weaker source or return predictable bytes
pub trait SecureRandom: Send + Sync {
    /// Fills `buf` with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`AeadError::RandomSource`] if the underlying source is
    /// unavailable or exhausted. This is fatal for the calling operation and
    /// is surfaced immediately.
    fn fill(&self, buf: &mut [u8]) -> Result<(), AeadError>;
}

/// Production randomness from the operating system CSPRNG.
///
/// Uses getrandom (`/dev/urandom` on Linux, `BCryptGenRandom` on Windows).
/// OS RNG failure is extremely rare and indicates a system-level problem; it
/// is reported as [`AeadError::RandomSource`] rather than masked.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRandom;

impl SystemRandom {
    /// Create a new system randomness source.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SecureRandom for SystemRandom {
    fn fill(&self, buf: &mut [u8]) -> Result<(), AeadError> {
        getrandom::fill(buf).map_err(|err| AeadError::RandomSource(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_requested_length() {
        let mut buf = [0u8; 64];
        SystemRandom::new().fill(&mut buf).unwrap();
        // 64 zero bytes from a working CSPRNG is a 2^-512 event
        assert_ne!(buf, [0u8; 64]);
    }

    #[test]
    fn successive_draws_differ() {
        let random = SystemRandom::new();
        let mut first = [0u8; 32];
        let mut second = [0u8; 32];
        random.fill(&mut first).unwrap();
        random.fill(&mut second).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn empty_buffer_is_fine() {
        let mut buf = [0u8; 0];
        SystemRandom::new().fill(&mut buf).unwrap();
    }
}
