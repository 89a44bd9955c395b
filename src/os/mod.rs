//! Operating system abstraction layer
//!
//! This module provides the only environment-facing service the crate
//! needs: cryptographically secure random bytes from the operating system.
//!
//! Platform selection is delegated to `rand_core`'s `OsRng`, which wraps
//! `getrandom(2)` on Linux, `getentropy`/`arc4random_buf` on the BSDs and
//! macOS, and `BCryptGenRandom` on Windows.

use rand_core::{OsRng, RngCore};

/// Fills a buffer with cryptographically secure random bytes from the OS.
///
/// # Panics
/// Panics if the operating system entropy source fails. Such a failure is
/// considered unrecoverable: continuing with weak or predictable randomness
/// is a worse outcome than aborting.
pub(crate) fn sys_random(buf: &mut [u8]) {
    if let Err(err) = OsRng.try_fill_bytes(buf) {
        tracing::error!(%err, "operating system entropy source failed");
        panic!("OS random source failed: {err}");
    }
}
