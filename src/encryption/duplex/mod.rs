//! Gimli duplex AEAD.
//!
//! The implementation is split into two layers:
//!
//! - `core`: one-shot encryption and decryption, plus the owned
//!   `seal`/`open` conveniences,
//! - `stream`: the phase-typed incremental API the one-shot functions are
//!   built on.

pub mod core;

pub(crate) mod stream;
