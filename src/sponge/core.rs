use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::permutation::{STATE_WORDS, permute};

/// Number of bytes in the sponge rate.
pub const RATE: usize = 16;

/// Number of 32-bit words in the sponge rate.
const RATE_WORDS: usize = RATE / 4;

/// Domain separation byte absorbed by [`Sponge::pad`].
const PAD_BYTE: u8 = 0x01;

/// Padding bit flipped in the last capacity word by [`Sponge::pad`].
const PAD_CAPACITY: u32 = 0x0100_0000;

/// A Gimli sponge: the permutation state and the position inside the rate.
///
/// Bytes are addressed little-endian within each word, so the byte at
/// offset `i` is bits `8 * (i % 4)..8 * (i % 4) + 8` of word `i / 4`,
/// whatever the host byte order.
///
/// The state is wiped when the sponge is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sponge {
    state: [u32; STATE_WORDS],
    offset: usize,
}

impl Sponge {
    /// Creates a sponge with an all-zero state.
    pub fn new() -> Self {
        Self {
            state: [0u32; STATE_WORDS],
            offset: 0,
        }
    }

    /// Creates a sponge from a fully loaded state, with offset 0.
    ///
    /// The state is used as-is; callers that load keys typically permute
    /// immediately afterwards.
    pub fn from_state(state: [u32; STATE_WORDS]) -> Self {
        Self { state, offset: 0 }
    }

    /// Current byte position inside the rate window (`0..16`).
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Read-only view of the permutation state.
    #[inline]
    pub fn state(&self) -> &[u32; STATE_WORDS] {
        &self.state
    }

    /// Applies the permutation to the whole state.
    ///
    /// This is the single place where the sponge calls the permutation, and
    /// therefore the single place where the watchdog hook is invoked.
    #[inline]
    pub fn permute(&mut self) {
        #[cfg(feature = "watchdog")]
        crate::watchdog::pet();

        permute(&mut self.state);
    }

    /// XORs `byte` into the state at the current offset.
    #[inline]
    pub fn absorb_byte(&mut self, byte: u8) {
        self.state[self.offset / 4] ^= (byte as u32) << ((self.offset % 4) * 8);
    }

    /// Reads the state byte at the current offset.
    #[inline]
    pub fn squeeze_byte(&self) -> u8 {
        (self.state[self.offset / 4] >> ((self.offset % 4) * 8)) as u8
    }

    /// Moves to the next byte of the rate, permuting when the rate is full.
    #[inline]
    pub fn advance(&mut self) {
        self.offset += 1;
        if self.offset == RATE {
            self.permute();
            self.offset = 0;
        }
    }

    /// Absorbs `input`, one byte at a time except for aligned full blocks.
    pub fn absorb(&mut self, mut input: &[u8]) {
        while !input.is_empty() {
            if self.offset == 0 && input.len() >= RATE {
                let (block, rest) = input.split_at(RATE);

                for (word, bytes) in self.state[..RATE_WORDS]
                    .iter_mut()
                    .zip(block.chunks_exact(4))
                {
                    *word ^= u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
                }

                self.permute();
                input = rest;
            } else {
                self.absorb_byte(input[0]);
                self.advance();
                input = &input[1..];
            }
        }
    }

    /// Fills `output` with squeezed bytes.
    pub fn squeeze(&mut self, output: &mut [u8]) {
        let mut i = 0;

        while i < output.len() {
            if self.offset == 0 && output.len() - i >= RATE {
                for (bytes, word) in output[i..i + RATE]
                    .chunks_exact_mut(4)
                    .zip(self.state[..RATE_WORDS].iter())
                {
                    bytes.copy_from_slice(&word.to_le_bytes());
                }

                self.permute();
                i += RATE;
            } else {
                output[i] = self.squeeze_byte();
                self.advance();
                i += 1;
            }
        }
    }

    /// Closes the current phase.
    ///
    /// Absorbs the domain separation byte at the current offset, flips the
    /// padding bit in the last capacity word, permutes and rewinds the
    /// offset. The same scheme is used by every mode built on the sponge.
    pub fn pad(&mut self) {
        self.absorb_byte(PAD_BYTE);
        self.state[STATE_WORDS - 1] ^= PAD_CAPACITY;
        self.permute();
        self.offset = 0;
    }
}

impl Default for Sponge {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Sponge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sponge")
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn absorb_bytewise(sponge: &mut Sponge, input: &[u8]) {
        for &b in input {
            sponge.absorb_byte(b);
            sponge.advance();
        }
    }

    fn squeeze_bytewise(sponge: &mut Sponge, output: &mut [u8]) {
        for out in output.iter_mut() {
            *out = sponge.squeeze_byte();
            sponge.advance();
        }
    }

    #[test]
    fn byte_addressing_is_little_endian() {
        let mut sponge = Sponge::new();
        for b in [0x11, 0x22, 0x33, 0x44, 0x55] {
            sponge.absorb_byte(b);
            sponge.advance();
        }

        assert_eq!(sponge.state()[0], 0x4433_2211);
        assert_eq!(sponge.state()[1], 0x0000_0055);
        assert_eq!(sponge.offset(), 5);
    }

    #[test]
    fn advance_permutes_at_end_of_rate() {
        let mut sponge = Sponge::new();
        for _ in 0..RATE - 1 {
            sponge.advance();
        }
        assert_eq!(sponge.state(), &[0u32; STATE_WORDS]);

        sponge.advance();
        assert_eq!(sponge.offset(), 0);

        let mut expected = [0u32; STATE_WORDS];
        permute(&mut expected);
        assert_eq!(sponge.state(), &expected);
    }

    #[test]
    fn block_fast_path_matches_bytewise_absorb() {
        let input: Vec<u8> = (0..100u8).collect();

        for start in 0..RATE {
            let mut fast = Sponge::new();
            let mut slow = Sponge::new();

            fast.absorb(&input[..start]);
            absorb_bytewise(&mut slow, &input[..start]);

            fast.absorb(&input[start..]);
            absorb_bytewise(&mut slow, &input[start..]);

            assert_eq!(fast.state(), slow.state());
            assert_eq!(fast.offset(), slow.offset());
        }
    }

    #[test]
    fn block_fast_path_matches_bytewise_squeeze() {
        let mut fast = Sponge::new();
        let mut slow = Sponge::new();
        fast.absorb(b"seed");
        slow.absorb(b"seed");
        fast.pad();
        slow.pad();

        let mut a = [0u8; 77];
        let mut b = [0u8; 77];
        fast.squeeze(&mut a[..3]);
        fast.squeeze(&mut a[3..]);
        squeeze_bytewise(&mut slow, &mut b);

        assert_eq!(a, b);
        assert_eq!(fast.state(), slow.state());
    }

    #[test]
    fn pad_resets_offset_and_touches_capacity() {
        let mut sponge = Sponge::new();
        sponge.absorb(b"abc");
        sponge.pad();
        assert_eq!(sponge.offset(), 0);

        let mut expected = [0u32; STATE_WORDS];
        expected[0] = u32::from_le_bytes([b'a', b'b', b'c', 0x01]);
        expected[STATE_WORDS - 1] = PAD_CAPACITY;
        permute(&mut expected);
        assert_eq!(sponge.state(), &expected);
    }
}
