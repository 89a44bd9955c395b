//! Error type shared by the fallible conveniences of the crate.
//!
//! The cryptographic core signals soft failures (a bad tag, a rejected
//! signature) with plain booleans. This type exists for the wrappers that
//! validate caller-provided byte slices or produce owned outputs.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid length: expected {expected} got {got}")]
    InvalidLength { expected: usize, got: usize },

    #[error("invalid output length: {got} not in [{min}, {max}]")]
    InvalidOutputLength { min: usize, max: usize, got: usize },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("invalid signature")]
    InvalidSignature,
}

pub type Result<T> = core::result::Result<T, Error>;
