//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise. Slices of different
/// lengths compare unequal; the length itself is not secret.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a, b).into()
}

/// Constant-time equality check that returns a Choice (0 or 1)
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Constant-time comparison of two 32-bit words
pub fn ct_eq_u32(a: u32, b: u32) -> bool {
    a.ct_eq(&b).into()
}

/// OR-accumulate the byte differences of two equal-length slices
///
/// Returns zero exactly when the slices are equal. Used as the second,
/// independent comparison path next to [`ct_eq`].
pub fn diff_accumulate(a: &[u8], b: &[u8]) -> u32 {
    if a.len() != b.len() {
        return u32::MAX;
    }
    a.iter()
        .zip(b)
        .fold(0u32, |acc, (&x, &y)| acc | u32::from(x ^ y))
}
