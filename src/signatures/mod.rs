//! Digital signature schemes.
//!
//! Each submodule corresponds to a specific signature scheme and is
//! responsible for its own key types, signing logic, and verification
//! rules. The implementations are intentionally explicit and
//! self-contained, favoring clarity and auditability over abstraction.

pub mod schnorr;
