//! Cooperative watchdog hook for embedded deployments.
//!
//! Long-running operations (hashing large inputs, signing, verification)
//! consist of many permutation calls. Deployments supervised by a hardware
//! or software watchdog can install a hook that is invoked once per
//! permutation call made by the sponge engine, so the operation never
//! starves the watchdog.
//!
//! The hook is called only with the `watchdog` feature; without it,
//! [`set_hook`] refuses every hook. The hook must be cheap and must not
//! block; it has no effect on any result.

use std::sync::OnceLock;

static HOOK: OnceLock<fn()> = OnceLock::new();

/// Installs the watchdog hook.
///
/// The hook can be installed only once for the lifetime of the process.
/// Returns `false` if a hook was already installed, in which case the
/// existing hook is kept.
///
/// Without the `watchdog` feature nothing would ever call the hook, so it
/// is rejected and this always returns `false`.
pub fn set_hook(hook: fn()) -> bool {
    if cfg!(feature = "watchdog") {
        HOOK.set(hook).is_ok()
    } else {
        false
    }
}

/// Returns `true` if a hook has been installed.
pub fn is_installed() -> bool {
    HOOK.get().is_some()
}

/// Invokes the installed hook, if any.
#[cfg(feature = "watchdog")]
#[inline]
pub(crate) fn pet() {
    if let Some(hook) = HOOK.get() {
        hook();
    }
}
