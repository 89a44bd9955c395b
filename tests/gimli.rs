use lithic::hash::{self, Hasher, hash_array, try_hash};
use lithic::permutation::permute;
use lithic::Error;
use proptest::prelude::*;

// -------------------------------------------------------
// 1. PERMUTATION KNOWN ANSWER
// -------------------------------------------------------

#[test]
fn permutation_reference_vector() {
    let mut state = [0u32; 12];
    for (i, word) in state.iter_mut().enumerate() {
        let i = i as u32;
        *word = i
            .wrapping_mul(i)
            .wrapping_mul(i)
            .wrapping_add(i.wrapping_mul(0x9e37_79b9));
    }

    assert_eq!(
        state,
        [
            0x00000000, 0x9e3779ba, 0x3c6ef37a, 0xdaa66d46, 0x78dde724, 0x1715611a, 0xb54cdb2e,
            0x53845566, 0xf1bbcfc8, 0x8ff34a5a, 0x2e2ac522, 0xcc624026,
        ]
    );

    permute(&mut state);

    assert_eq!(
        state,
        [
            0xba11c85a, 0x91bad119, 0x380ce880, 0xd24c2c68, 0x3eceffea, 0x277a921c, 0x4f73a0bd,
            0xda5a9cd8, 0x84b673f0, 0x34e52ff7, 0x9e2bef49, 0xf41bb8d6,
        ]
    );
}

#[test]
fn permutation_is_deterministic() {
    let mut a = [0x0123_4567u32; 12];
    let mut b = a;
    permute(&mut a);
    permute(&mut b);
    assert_eq!(a, b);
}

// -------------------------------------------------------
// 2. HASH VECTORS
// -------------------------------------------------------

#[test]
fn hash_empty_vector() {
    let digest: [u8; 32] = hash_array(&[]);
    assert_eq!(
        hex::encode(digest),
        "27ae20e95fbc2bf01e972b0015eea431c20fc8818f25bc6dbe66232230db352f"
    );
}

#[test]
fn hash_output_is_a_prefix_of_longer_output() {
    let short: [u8; 32] = hash_array(b"abc");
    let long: [u8; 100] = hash_array(b"abc");
    assert_eq!(&short[..], &long[..32]);
}

#[test]
fn hash_distinguishes_trailing_zero() {
    let a: [u8; 32] = hash_array(b"abc");
    let b: [u8; 32] = hash_array(b"abc\0");
    assert_ne!(a, b);
}

#[test]
fn hash_block_boundaries() {
    // lengths around the 16-byte rate
    let data = [0xa5u8; 64];
    let mut seen = Vec::new();

    for len in [0, 1, 15, 16, 17, 31, 32, 33, 48, 64] {
        let digest: [u8; 32] = hash_array(&data[..len]);
        assert!(!seen.contains(&digest), "collision at length {len}");
        seen.push(digest);
    }
}

#[test]
fn hash_zero_length_output() {
    let mut out = [0u8; 0];
    hash::hash(&mut out, b"anything");
}

#[test]
fn try_hash_enforces_range() {
    let mut too_short = [0u8; 15];
    assert_eq!(
        try_hash(&mut too_short, b"x"),
        Err(Error::InvalidOutputLength {
            min: 16,
            max: 65535,
            got: 15
        })
    );

    let mut ok = [0u8; 16];
    assert_eq!(try_hash(&mut ok, b"x"), Ok(()));

    let expected: [u8; 16] = hash_array(b"x");
    assert_eq!(ok, expected);
}

// -------------------------------------------------------
// 3. STREAMING EQUIVALENCE
// -------------------------------------------------------

#[test]
fn streaming_byte_by_byte() {
    let msg: Vec<u8> = (0..=255u8).collect();

    let mut hasher = Hasher::new();
    for b in &msg {
        hasher.update(std::slice::from_ref(b));
    }

    let streamed: [u8; 48] = hasher.finalize_array();
    let oneshot: [u8; 48] = hash_array(&msg);
    assert_eq!(streamed, oneshot);
}

proptest! {
    #[test]
    fn streaming_matches_oneshot(
        msg in prop::collection::vec(any::<u8>(), 0..300),
        cuts in prop::collection::vec(any::<prop::sample::Index>(), 0..8),
        out_len in 0usize..80,
    ) {
        let mut points: Vec<usize> = cuts.iter().map(|c| c.index(msg.len() + 1)).collect();
        points.push(0);
        points.push(msg.len());
        points.sort_unstable();

        let mut hasher = Hasher::new();
        for w in points.windows(2) {
            hasher.update(&msg[w[0]..w[1]]);
        }

        let mut streamed = vec![0u8; out_len];
        hasher.finalize(&mut streamed);

        let mut oneshot = vec![0u8; out_len];
        hash::hash(&mut oneshot, &msg);

        prop_assert_eq!(streamed, oneshot);
    }
}
