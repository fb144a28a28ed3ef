//! Tolerance-based floating-point equality.

use std::fmt::{Debug, Display};

use verity_core::{CheckError, SignalInfo};

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// The closed floating-point family tolerance comparison is defined over.
///
/// Sealed: exactly `f32` and `f64`, one generic implementation instead of a
/// per-width pair.
pub trait Floating: sealed::Sealed + Copy + PartialOrd + Display + Debug {
    /// Additive identity of the width.
    const ZERO: Self;

    /// True for NaN.
    fn is_nan(self) -> bool;
    /// True for either infinity.
    fn is_infinite(self) -> bool;
    /// True for positive sign (including positive infinity).
    fn is_sign_positive(self) -> bool;
    /// Absolute difference `|self - other|`.
    fn abs_diff(self, other: Self) -> Self;
}

macro_rules! impl_floating {
    ($($ty:ty),*) => {
        $(
            impl Floating for $ty {
                const ZERO: Self = 0.0;

                fn is_nan(self) -> bool {
                    <$ty>::is_nan(self)
                }

                fn is_infinite(self) -> bool {
                    <$ty>::is_infinite(self)
                }

                fn is_sign_positive(self) -> bool {
                    <$ty>::is_sign_positive(self)
                }

                fn abs_diff(self, other: Self) -> Self {
                    (self - other).abs()
                }
            }
        )*
    };
}

impl_floating!(f32, f64);

/// Decides whether `actual` lies within `delta` of `expected`.
///
/// `delta` must be non-negative (NaN fails this test); violation raises
/// invalid-argument before any comparison. An infinite `expected` ignores
/// the delta and matches only the same signed infinity. NaN on either side
/// is never within delta of anything.
pub fn within_delta<F: Floating>(expected: F, actual: F, delta: F) -> Result<bool, CheckError> {
    if delta.is_nan() || delta < F::ZERO {
        return Err(CheckError::InvalidArgument(
            SignalInfo::new(format!("tolerance must be non-negative, was {delta}"))
                .with_actual(format!("{delta}")),
        ));
    }
    if expected.is_nan() || actual.is_nan() {
        return Ok(false);
    }
    if expected.is_infinite() {
        return Ok(actual.is_infinite() && expected.is_sign_positive() == actual.is_sign_positive());
    }
    if actual.is_infinite() {
        return Ok(false);
    }
    Ok(expected.abs_diff(actual) <= delta)
}
