//! Fixed-point quantities with two decimal digits.
//!
//! Weights and values are carried as integers multiplied by 100 so that every
//! comparison and sum inside the solvers is exact. Conversion back to `f64`
//! happens only when results are presented.

use std::fmt;

use thiserror::Error;

/// Number of scaled units in one whole unit.
pub const SCALE: u64 = 100;

/// Smallest distance from a whole hundredth tolerated by [`Scaled::from_f64`],
/// measured in hundredths.
const PRECISION_TOLERANCE: f64 = 1e-6;

/// Multiple of the relative rounding error of `value * 100` that still counts
/// as a whole hundredth.
const RELATIVE_TOLERANCE_ULPS: f64 = 4.0;

/// Errors returned by [`Scaled::from_f64`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ScaledError {
    /// The input was NaN or infinite.
    #[error("quantity {0} is not finite")]
    NonFinite(f64),
    /// The input was below zero.
    #[error("quantity {0} is negative")]
    Negative(f64),
    /// The input carried more than two fractional decimal digits.
    #[error("quantity {0} has more than two decimal places")]
    ExcessPrecision(f64),
    /// The scaled input does not fit in a `u64`.
    #[error("quantity {0} is too large to scale")]
    Overflow(f64),
}

/// A non-negative quantity stored as an integer number of hundredths.
///
/// # Examples
///
/// ```
/// use knapsack_core::Scaled;
///
/// # fn main() -> Result<(), knapsack_core::ScaledError> {
/// let weight = Scaled::from_f64(2.35)?;
/// assert_eq!(weight.raw(), 235);
/// assert_eq!(weight.to_string(), "2.35");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Scaled(u64);

impl Scaled {
    /// The zero quantity.
    pub const ZERO: Self = Self(0);

    /// Wrap an integer that is already expressed in hundredths.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Convert a real quantity with at most two decimal digits.
    ///
    /// The stored integer is `round(value * 100)`. The distance from a whole
    /// hundredth that is accepted grows with the magnitude of the input, so
    /// large two-decimal quantities are not rejected for the rounding error of
    /// their binary representation.
    ///
    /// # Errors
    ///
    /// Returns [`ScaledError`] when the input is not finite, is negative,
    /// does not fit once scaled, or has more than two decimal digits.
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss,
        reason = "fixed-point construction is the single float-to-integer boundary"
    )]
    pub fn from_f64(value: f64) -> Result<Self, ScaledError> {
        if !value.is_finite() {
            return Err(ScaledError::NonFinite(value));
        }
        if value < 0.0 {
            return Err(ScaledError::Negative(value));
        }
        let hundredths = value * 100.0;
        let rounded = hundredths.round();
        if rounded >= u64::MAX as f64 {
            return Err(ScaledError::Overflow(value));
        }
        let tolerance =
            PRECISION_TOLERANCE.max(hundredths * f64::EPSILON * RELATIVE_TOLERANCE_ULPS);
        if (hundredths - rounded).abs() > tolerance {
            return Err(ScaledError::ExcessPrecision(value));
        }
        Ok(Self(rounded as u64))
    }

    /// The number of hundredths.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Convert back into a real quantity.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "presentation boundary for fixed-point values"
    )]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Whether the quantity is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Add two quantities, returning `None` on overflow.
    #[must_use]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }

    /// Add two quantities, clamping at the largest representable quantity.
    #[must_use]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl fmt::Display for Scaled {
    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "splitting hundredths into whole and fractional digits"
    )]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / SCALE, self.0 % SCALE)
    }
}
