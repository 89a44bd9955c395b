#![cfg(feature = "watchdog")]

use std::sync::atomic::{AtomicUsize, Ordering};

use lithic::{hash, watchdog};

static CALLS: AtomicUsize = AtomicUsize::new(0);

fn count() {
    CALLS.fetch_add(1, Ordering::Relaxed);
}

#[test]
fn hook_runs_once_per_permutation() {
    assert!(watchdog::set_hook(count));
    assert!(watchdog::is_installed());
    assert!(!watchdog::set_hook(count));

    let before = CALLS.load(Ordering::Relaxed);

    // 3 absorbed blocks, 1 padding permutation, 2 squeezed blocks.
    let _: [u8; 32] = hash::hash_array(&[0u8; 48]);

    let after = CALLS.load(Ordering::Relaxed);
    assert_eq!(after - before, 6);
}
