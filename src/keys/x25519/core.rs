use zeroize::Zeroize;

use super::field::FieldElement;

/// Length of scalars, u-coordinates and shared secrets.
pub const X25519_LEN: usize = 32;

/// The u-coordinate of the Curve25519 base point.
pub const BASE_POINT: [u8; X25519_LEN] = {
    let mut b = [0u8; X25519_LEN];
    b[0] = 9;
    b
};

/// `(A - 2) / 4` for Curve25519 (`A = 486662`).
const A24: u64 = 121665;

/// Clamps a scalar as specified by RFC 7748.
///
/// Clears the three low bits and the top bit, and sets bit 254.
#[inline]
pub fn clamp(scalar: &mut [u8; X25519_LEN]) {
    scalar[0] &= 0xf8;
    scalar[31] &= 0x7f;
    scalar[31] |= 0x40;
}

/// Registers of the Montgomery ladder.
///
/// `P = (x2 : z2)` is the running multiple, `Q = (x3 : z3)` is `P + u`.
/// `t1` is scratch space shared between the two halves of a step.
pub(crate) struct Ladder {
    pub(crate) x2: FieldElement,
    pub(crate) z2: FieldElement,
    pub(crate) x3: FieldElement,
    pub(crate) z3: FieldElement,
    t1: FieldElement,
}

impl Ladder {
    fn new(u: FieldElement) -> Self {
        Self {
            x2: FieldElement::ONE,
            z2: FieldElement::ZERO,
            x3: u,
            z3: FieldElement::ONE,
            t1: FieldElement::ZERO,
        }
    }

    /// Swaps `P` and `Q` when `mask` is all ones.
    #[inline(always)]
    fn cswap(&mut self, mask: u64) {
        self.x2.swap(&mut self.x3, mask);
        self.z2.swap(&mut self.z3, mask);
    }

    /// First half of a ladder step.
    ///
    /// Afterwards:
    ///
    /// ```text
    /// x3 = DA + CB     z3 = DA - CB
    /// t1 = AA          x2 = E = AA - BB
    /// z2 = a24·E + AA
    /// ```
    ///
    /// The verifier reuses this half on its own to build the combined
    /// x-only equation.
    fn step_part1(&mut self) {
        let a = self.x2 + self.z2;
        let b = self.x2 - self.z2;
        let c = self.x3 + self.z3;
        let d = self.x3 - self.z3;

        let da = d * a;
        let cb = c * b;
        self.x3 = da + cb;
        self.z3 = da - cb;

        let aa = a.square();
        let bb = b.square();
        self.t1 = aa;
        self.x2 = aa - bb;
        self.z2 = self.x2.mul_word(A24) + aa;
    }

    /// Second half of a ladder step: finishes the doubling of `P` and the
    /// differential addition into `Q`.
    fn step_part2(&mut self, u: &FieldElement) {
        self.z3 = self.z3.square() * *u;
        self.x3 = self.x3.square();
        self.z2 = self.z2 * self.x2;
        self.x2 = (self.t1 - self.x2) * self.t1;
    }

    /// Affine u-coordinate of `P`, canonical and encoded.
    fn to_affine(&self) -> [u8; X25519_LEN] {
        (self.x2 * self.z2.invert()).to_bytes()
    }
}

impl Drop for Ladder {
    fn drop(&mut self) {
        for fe in [
            &mut self.x2,
            &mut self.z2,
            &mut self.x3,
            &mut self.z3,
            &mut self.t1,
        ] {
            fe.0.zeroize();
        }
    }
}

/// Runs the Montgomery ladder over all 256 bits of `scalar`.
///
/// The scalar is used exactly as given; clamping is the caller's decision.
/// Swaps are driven by `bit ^ previous_bit`, so two equal consecutive bits
/// cost the same masked swap as a real exchange.
pub(crate) fn ladder(scalar: &[u8; X25519_LEN], u: &FieldElement) -> Ladder {
    let mut state = Ladder::new(*u);
    let mut swap = 0u64;

    for pos in (0..256).rev() {
        let bit = ((scalar[pos >> 3] >> (pos & 7)) & 1) as u64;
        let doswap = 0u64.wrapping_sub(bit);

        state.cswap(swap ^ doswap);
        swap = doswap;

        state.step_part1();
        state.step_part2(u);
    }

    state.cswap(swap);
    state
}

/// Checks the Schnorr verification equation on x-coordinates only.
///
/// With `(x : z) = response · B`, `(u : w) = challenge · A` and `r` the
/// u-coordinate of the signature nonce point, the signature is valid iff
///
/// ```text
/// 16·u·w·r·(x² + A·x·z + z²) = (r·(2zu − 2xw) − (2xu − 2zw))²
/// ```
///
/// which states that `r` is the x-coordinate of `response·B − challenge·A`
/// (or of the sum, which x-only arithmetic cannot tell apart).
///
/// Signatures where the left side vanishes are rejected: a ladder that
/// ended on `0/0` would otherwise satisfy the equation trivially.
pub(crate) fn verify_ladders(mut response: Ladder, challenge: &Ladder, r: &FieldElement) -> bool {
    let u = challenge.x2;
    let w = challenge.z2;

    response.x3 = u;
    response.z3 = w;
    response.step_part1();

    // z2 = a24·(4xz) + (x + z)² = x² + A·x·z + z²
    let mut lhs = (response.z2 * u * w * *r).mul_word(16);

    let rhs = (response.z3 * *r - response.x3).square();
    let mut diff = rhs - lhs;

    let lhs_zero = lhs.canon();
    let equal = diff.canon();

    (!lhs_zero & equal) != 0
}

/// Computes `scalar · point` on Curve25519 (RFC 7748 X25519).
///
/// ## Inputs
///
/// - `scalar`: secret scalar, clamped internally as specified by RFC 7748.
/// - `point`: u-coordinate of the peer point. Bit 255 is ignored.
///
/// ## Algorithm
///
/// 1. Clamp a copy of the scalar.
/// 2. Decode the u-coordinate as a field element.
/// 3. Run the Montgomery ladder over 256 bits with constant-time swaps.
/// 4. Convert back to affine form with one inversion.
///
/// ## Return value
///
/// The 32-byte u-coordinate of the result.
///
/// **Note:** per RFC 7748, the output may be all zeros for certain peer
/// points (e.g. low-order points). This function returns that value as-is;
/// protocols that must reject it have to check explicitly.
///
/// ## Security
///
/// - Constant-time with respect to the scalar.
/// - No secret-dependent branches.
pub fn scalar_mult(scalar: &[u8; X25519_LEN], point: &[u8; X25519_LEN]) -> [u8; X25519_LEN] {
    let mut e = *scalar;
    clamp(&mut e);

    let u = FieldElement::from_bytes(point);
    let out = ladder(&e, &u).to_affine();
    e.zeroize();

    out
}

/// Computes `scalar · B` where `B` is the base point `u = 9`.
///
/// The scalar is clamped internally, exactly as in [`scalar_mult`].
pub fn scalar_mult_base(scalar: &[u8; X25519_LEN]) -> [u8; X25519_LEN] {
    scalar_mult(scalar, &BASE_POINT)
}

/// X25519 Diffie–Hellman key agreement.
///
/// Alias of [`scalar_mult`] under its key-exchange name: combines a local
/// private scalar with a peer public u-coordinate into a shared secret.
pub fn exchange(private: &[u8; X25519_LEN], public: &[u8; X25519_LEN]) -> [u8; X25519_LEN] {
    scalar_mult(private, public)
}

/// Unclamped scalar multiplication, returning the projective result.
///
/// Used by the signature scheme, whose challenge and response scalars are
/// uniform modulo `L` and must not be clamped.
pub(crate) fn scalar_mult_unclamped(scalar: &[u8; X25519_LEN], point: &[u8; X25519_LEN]) -> Ladder {
    ladder(scalar, &FieldElement::from_bytes(point))
}
