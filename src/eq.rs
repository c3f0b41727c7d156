//! Sequence comparison used by [`SdoGeometry`][crate::SdoGeometry] equality.

/// Compare two floats, treating any two NaN values as equal.
///
/// Non-NaN values must be bit-identical, so `0.0` and `-0.0` differ.
pub fn f64_eq(left: f64, right: f64) -> bool {
    left.to_bits() == right.to_bits() || (left.is_nan() && right.is_nan())
}

/// Compare two optional float sequences elementwise with [`f64_eq`].
///
/// Two absent sequences are equal. An absent sequence never equals a present one, even an
/// empty one.
pub fn ordinates_eq(left: Option<&[f64]>, right: Option<&[f64]>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(left), Some(right)) => {
            left.len() == right.len() && left.iter().zip(right).all(|(l, r)| f64_eq(*l, *r))
        }
        _ => false,
    }
}

/// Compare two optional integer sequences.
pub fn elem_info_eq(left: Option<&[i32]>, right: Option<&[i32]>) -> bool {
    left == right
}
