/// Number of 32-bit words in the permutation state.
pub const STATE_WORDS: usize = 12;

/// Size of the permutation state in bytes.
pub const STATE_BYTES: usize = STATE_WORDS * 4;

/// Number of rounds applied by [`permute`].
pub const ROUNDS: u32 = 24;

/// Round constant injected on every fourth round.
///
/// The upper 24 bits are the fixed pattern `0x9e3779`, the low byte is the
/// round number.
#[inline(always)]
fn coeff(round: u32) -> u32 {
    0x9e37_7900 | round
}

/// Applies the Gimli permutation to `state` in place.
///
/// The round counter runs from 24 down to 1. Each round applies the
/// non-linear SP-box to the four columns, followed on rounds `≡ 0 (mod 4)`
/// by the small swap and the constant injection, and on rounds
/// `≡ 2 (mod 4)` by the big swap.
///
/// The schedule is fixed by the published Gimli definition; any deviation
/// breaks interoperability with every other implementation.
pub fn permute(state: &mut [u32; STATE_WORDS]) {
    for round in (1..=ROUNDS).rev() {
        for column in 0..4 {
            let x = state[column].rotate_left(24);
            let y = state[column + 4].rotate_left(9);
            let z = state[column + 8];

            state[column + 8] = x ^ (z << 1) ^ ((y & z) << 2);
            state[column + 4] = y ^ x ^ ((x | z) << 1);
            state[column] = z ^ y ^ ((x & y) << 3);
        }

        match round & 3 {
            0 => {
                // small swap
                state.swap(0, 1);
                state.swap(2, 3);

                state[0] ^= coeff(round);
            }
            2 => {
                // big swap
                state.swap(0, 2);
                state.swap(1, 3);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_is_injected_only_on_multiples_of_four() {
        let injected: Vec<u32> = (1..=ROUNDS).rev().filter(|r| r & 3 == 0).collect();
        assert_eq!(injected, vec![24, 20, 16, 12, 8, 4]);
        assert_eq!(coeff(24), 0x9e37_7918);
    }

    #[test]
    fn zero_state_is_not_a_fixed_point() {
        let mut state = [0u32; STATE_WORDS];
        permute(&mut state);
        assert!(state.iter().any(|&w| w != 0));
    }
}
