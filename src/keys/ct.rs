/// Constant-time comparison utilities.
///
/// Implementations must ensure that execution time does not depend on the
/// compared data: no early exits and no data-dependent branches.
pub(crate) trait ConstantTimeEq {
    /// Returns `true` if `self == other`, in constant time.
    fn ct_eq(&self, other: &Self) -> bool;
}

impl ConstantTimeEq for [u8] {
    /// Constant-time equality test for byte slices of equal length.
    ///
    /// All bytes are XORed and OR-accumulated before comparison, so the
    /// running time does not depend on where the first difference occurs.
    /// Slices of different lengths compare unequal; lengths are public.
    #[inline(always)]
    fn ct_eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let diff = self
            .iter()
            .zip(other)
            .map(|(a, b)| a ^ b)
            .fold(0, |acc, v| acc | v);

        ((diff as u32).wrapping_sub(1) >> 8) & 1 == 1
    }
}

impl ConstantTimeEq for [u8; 32] {
    #[inline(always)]
    fn ct_eq(&self, other: &Self) -> bool {
        self[..].ct_eq(&other[..])
    }
}

impl ConstantTimeEq for [u8; 64] {
    #[inline(always)]
    fn ct_eq(&self, other: &Self) -> bool {
        self[..].ct_eq(&other[..])
    }
}

#[cfg(test)]
mod tests {
    use super::ConstantTimeEq;

    #[test]
    fn equal_and_unequal() {
        let a = [7u8; 32];
        let mut b = a;
        assert!(a.ct_eq(&b));

        b[31] ^= 0x80;
        assert!(!a.ct_eq(&b));

        assert!(!a[..].ct_eq(&a[..31]));
    }
}
