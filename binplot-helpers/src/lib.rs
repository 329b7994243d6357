use ndarray::{NdFloat, ScalarOperand};
use num_traits::{AsPrimitive, FromPrimitive};

use std::iter::Sum;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

mod style;
mod window;

pub use style::{Color, FormatString, LineStyle, Marker, StyleError};
pub use window::Window;

/// Numeric scalar used for coordinates, normal vectors and offsets.
///
/// Implemented for `f32` and `f64`. Drawing surfaces store `f64`, so every
/// scalar must convert into it losslessly enough for display.
pub trait Float:
    NdFloat
    + FromPrimitive
    + Default
    + Sum
    + AsPrimitive<f64>
    + for<'a> AddAssign<&'a Self>
    + for<'a> MulAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> DivAssign<&'a Self>
    + ScalarOperand
    + std::marker::Unpin
{
    /// Widens to the `f64` representation used by figures.
    fn to_plot(self) -> f64 {
        self.as_()
    }
}

impl Float for f32 {}

impl Float for f64 {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_widen_to_plot() {
        assert_abs_diff_eq!(7.5_f32.to_plot(), 7.5_f64);
        assert_abs_diff_eq!((-1.0_f64).to_plot(), -1.0);
    }
}
