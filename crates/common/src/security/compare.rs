//! Constant-time comparison helpers

use num_bigint::BigUint;
use subtle::ConstantTimeEq;

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise. Slices of
/// different lengths compare unequal immediately; length is not secret.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Constant-time comparison of two unsigned integers
///
/// Both values are left-padded to a common width before the byte
/// comparison, so equal values with different encodings still match.
pub fn ct_eq_uint(a: &BigUint, b: &BigUint) -> bool {
    let a = a.to_bytes_be();
    let b = b.to_bytes_be();
    let width = a.len().max(b.len());
    ct_eq(pad_left(&a, width), pad_left(&b, width))
}

fn pad_left(bytes: &[u8], width: usize) -> Vec<u8> {
    let mut out = vec![0u8; width - bytes.len()];
    out.extend_from_slice(bytes);
    out
}
