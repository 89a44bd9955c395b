use crate::errors::{Error, Result};
use crate::sponge::Sponge;

/// Default digest length in bytes.
pub const DEFAULT_LEN: usize = 32;

/// Smallest output length accepted by [`try_hash`].
pub const MIN_LEN: usize = 16;

/// Largest output length accepted by [`try_hash`].
pub const MAX_LEN: usize = 65535;

/// Incremental Gimli-Hash state.
///
/// Absorb input with [`Hasher::update`] as many times as needed, then call
/// one of the finalizers. Finalizing consumes the hasher, so the squeezing
/// phase can never be followed by more absorption.
#[derive(Clone, Debug, Default)]
pub struct Hasher {
    sponge: Sponge,
}

impl Hasher {
    /// Creates a hasher over the empty message.
    pub fn new() -> Self {
        Self {
            sponge: Sponge::new(),
        }
    }

    /// Absorbs `input` into the running hash.
    pub fn update(&mut self, input: &[u8]) -> &mut Self {
        self.sponge.absorb(input);
        self
    }

    /// Pads the message and fills `output` with the digest.
    ///
    /// Any output length is valid, including zero.
    pub fn finalize(mut self, output: &mut [u8]) {
        self.sponge.pad();
        self.sponge.squeeze(output);
    }

    /// Pads the message and returns an `N`-byte digest.
    pub fn finalize_array<const N: usize>(self) -> [u8; N] {
        let mut out = [0u8; N];
        self.finalize(&mut out);
        out
    }
}

/// Computes the Gimli-Hash of `input` into `output`.
///
/// The output length is chosen by the caller through the length of
/// `output`. There is no upper bound.
pub fn hash(output: &mut [u8], input: &[u8]) {
    let mut hasher = Hasher::new();
    hasher.update(input);
    hasher.finalize(output);
}

/// Computes an `N`-byte Gimli-Hash of `input`.
pub fn hash_array<const N: usize>(input: &[u8]) -> [u8; N] {
    let mut hasher = Hasher::new();
    hasher.update(input);
    hasher.finalize_array()
}

/// Computes the Gimli-Hash of `input`, rejecting output lengths outside
/// `MIN_LEN..=MAX_LEN`.
///
/// Digests shorter than 16 bytes do not offer collision resistance; this
/// entry point is meant for callers that take the length from
/// configuration.
pub fn try_hash(output: &mut [u8], input: &[u8]) -> Result<()> {
    if !(MIN_LEN..=MAX_LEN).contains(&output.len()) {
        return Err(Error::InvalidOutputLength {
            min: MIN_LEN,
            max: MAX_LEN,
            got: output.len(),
        });
    }

    hash(output, input);
    Ok(())
}
