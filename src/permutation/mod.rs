//! The Gimli permutation.
//!
//! Gimli is a 384-bit permutation designed to be fast on a wide range of
//! platforms, from 8-bit microcontrollers to vectorised desktop CPUs. Every
//! symmetric construction in this crate (hashing, authenticated encryption,
//! signature transcripts) is built on top of it through the sponge engine.
//!
//! ## Structure
//!
//! - `core`  
//!   The round function and the round constant schedule.
//!
//! The state is a plain `[u32; 12]`, viewed as a 3 × 4 matrix of rows
//! `x`, `y`, `z` (words `0..4`, `4..8`, `8..12`).

mod core;

pub use self::core::*;
