//! Secure random bytes.
//!
//! Thin public facade over the operating system layer. There is no
//! user-space generator in between: every call reads fresh entropy from
//! the kernel.

use crate::os::sys_random;

/// Fills `buf` with cryptographically secure random bytes.
///
/// # Panics
/// Panics if no secure entropy source is available. Callers never observe
/// low-entropy output.
pub fn fill_random(buf: &mut [u8]) {
    sys_random(buf);
}

/// Returns `N` fresh random bytes.
pub fn random_array<const N: usize>() -> [u8; N] {
    let mut out = [0u8; N];
    fill_random(&mut out);
    out
}
