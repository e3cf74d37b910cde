//! The `Score` trait is used to represent the scores in an alignment matrix.
//!
//! We provide implementations for the signed integers `i16`, `i32` and `i64`.
//! Scores may be negative, so unsigned integers and floats are not supported.
//! All arithmetic needed by the recurrence is checked so that an overflowing
//! score surfaces as an error instead of silently wrapping.

use core::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::Neg,
};

/// A signed integer used as the score of a cell in an alignment matrix.
pub trait Score:
    Copy + Clone + Debug + Display + Default + Hash + Eq + Ord + Send + Sync + Neg<Output = Self>
{
    /// The additive identity.
    const ZERO: Self;

    /// The multiplicative identity.
    const ONE: Self;

    /// The minimum representable score.
    const MIN: Self;

    /// Adds two scores, returning `None` on overflow.
    fn checked_add(self, other: Self) -> Option<Self>;

    /// Adds two scores, clamping at the numeric bounds.
    #[must_use]
    fn saturating_add(self, other: Self) -> Self;

    /// Multiplies the score by a run length, clamping at the numeric bounds.
    #[must_use]
    fn saturating_mul_count(self, count: usize) -> Self;

    /// Converts a `i64` into a score, returning `None` if it does not fit.
    fn from_i64(value: i64) -> Option<Self>;

    /// Converts the score into a `i64`.
    fn as_i64(self) -> i64;

    /// Converts the score into a `f64`.
    fn as_f64(self) -> f64;

    /// Returns the name of the type.
    fn type_name() -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Macro to implement `Score` for all signed integer types.
macro_rules! impl_score {
    ($($ty:ty),*) => {
        $(
            impl Score for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MIN: Self = <$ty>::MIN;

                fn checked_add(self, other: Self) -> Option<Self> {
                    <$ty>::checked_add(self, other)
                }

                fn saturating_add(self, other: Self) -> Self {
                    <$ty>::saturating_add(self, other)
                }

                fn saturating_mul_count(self, count: usize) -> Self {
                    Self::try_from(count).map_or_else(
                        |_| if self < 0 { <$ty>::MIN } else if self > 0 { <$ty>::MAX } else { 0 },
                        |count| self.saturating_mul(count),
                    )
                }

                fn from_i64(value: i64) -> Option<Self> {
                    Self::try_from(value).ok()
                }

                #[allow(clippy::cast_lossless, clippy::unnecessary_cast)]
                fn as_i64(self) -> i64 {
                    self as i64
                }

                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn as_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    }
}

impl_score!(i16, i32, i64);

#[cfg(test)]
mod tests {
    use super::Score;

    #[test]
    fn saturating_mul_count() {
        assert_eq!((-3_i32).saturating_mul_count(4), -12);
        assert_eq!((-3_i16).saturating_mul_count(usize::MAX), i16::MIN);
        assert_eq!(0_i64.saturating_mul_count(usize::MAX), 0);
    }

    #[test]
    fn checked_add() {
        assert_eq!(Score::checked_add(i16::MAX, 1), None);
        assert_eq!(Score::checked_add(-4_i32, 5), Some(1));
    }

    #[test]
    fn conversions() {
        assert_eq!(<i16 as Score>::from_i64(1 << 20), None);
        assert_eq!(<i32 as Score>::from_i64(-7), Some(-7));
        assert_eq!(Score::as_i64(-7_i16), -7);
        assert!((Score::as_f64(12_i32) - 12.0).abs() < f64::EPSILON);
    }
}
