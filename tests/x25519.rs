use lithic::keys::x25519::{BASE_POINT, clamp, exchange, scalar_mult, scalar_mult_base};

fn h32(s: &str) -> [u8; 32] {
    hex::decode(s).unwrap().try_into().unwrap()
}

// -------------------------------------------------------
// 1. RFC 7748 VECTORS
// -------------------------------------------------------

#[test]
fn rfc7748_vector_1() {
    let scalar = h32("a546e36bf0527c9d3b16154b82465edd62144c0ac1fc5a18506a2244ba449ac4");
    let u = h32("e6db6867583030db3594c1a424b15f7c726624ec26b3353b10a903a6d0ab1c4c");

    assert_eq!(
        hex::encode(scalar_mult(&scalar, &u)),
        "c3da55379de9c6908e94ea4df28d084f32eccf03491c71f754b4075577a28552"
    );
}

#[test]
fn rfc7748_vector_2_ignores_top_bit() {
    let scalar = h32("4b66e9d4d1b4673c5ad22691957d6af5c11b6421e0ea01d42ca4169e7918ba0d");
    let u = h32("e5210f12786811d3f4b7959d0538ae2c31dbe7106fc03c3efc4cd549c715a493");

    assert_eq!(
        hex::encode(scalar_mult(&scalar, &u)),
        "95cbde9476e8907d7aade45cb4b873f88b595a68799fa152e6f8f7647aac7957"
    );
}

#[test]
fn rfc7748_one_iteration() {
    let k = BASE_POINT;
    let u = BASE_POINT;

    assert_eq!(
        hex::encode(scalar_mult(&k, &u)),
        "422c8e7a6227d7bca1350b3e2bb7279f7897b87bb6854b783c60e80311ae3079"
    );
}

#[test]
fn rfc7748_diffie_hellman() {
    let alice = h32("77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a");
    let bob = h32("5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb");

    let alice_pub = scalar_mult_base(&alice);
    let bob_pub = scalar_mult_base(&bob);

    assert_eq!(
        hex::encode(alice_pub),
        "8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a"
    );
    assert_eq!(
        hex::encode(bob_pub),
        "de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f"
    );

    let k1 = exchange(&alice, &bob_pub);
    let k2 = exchange(&bob, &alice_pub);

    assert_eq!(k1, k2);
    assert_eq!(
        hex::encode(k1),
        "4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742"
    );
}

// -------------------------------------------------------
// 2. PROPERTIES
// -------------------------------------------------------

#[test]
fn clamping_is_idempotent_and_internal() {
    let raw = [0xffu8; 32];
    let mut clamped = raw;
    clamp(&mut clamped);

    assert_eq!(clamped[0] & 7, 0);
    assert_eq!(clamped[31] & 0x80, 0);
    assert_eq!(clamped[31] & 0x40, 0x40);

    let mut twice = clamped;
    clamp(&mut twice);
    assert_eq!(twice, clamped);

    assert_eq!(scalar_mult_base(&raw), scalar_mult_base(&clamped));
}

#[test]
fn shared_secret_is_symmetric() {
    for seed in 1u8..6 {
        let a = [seed; 32];
        let b = [seed.wrapping_mul(37); 32];

        let shared_ab = exchange(&a, &scalar_mult_base(&b));
        let shared_ba = exchange(&b, &scalar_mult_base(&a));
        assert_eq!(shared_ab, shared_ba);
    }
}

#[test]
fn zero_point_gives_zero_output() {
    let scalar = [0x11u8; 32];
    assert_eq!(scalar_mult(&scalar, &[0u8; 32]), [0u8; 32]);
}

#[test]
fn output_is_canonical() {
    let out = scalar_mult_base(&[0x77u8; 32]);
    assert_eq!(out[31] & 0x80, 0);
}
