use crate::figure::{Figure, PlotError};
use binplot_helpers::{Float, FormatString, Window};
use ndarray::ArrayView2;

/// Green circles.
pub const DEFAULT_CLASS_ONE_STYLE: &str = "go";
/// Red circles.
pub const DEFAULT_CLASS_TWO_STYLE: &str = "ro";

/// Format strings for the two classes of a binary dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetStyles<'a> {
    pub class_one: &'a str,
    pub class_two: &'a str,
}

impl Default for DatasetStyles<'_> {
    fn default() -> Self {
        DatasetStyles {
            class_one: DEFAULT_CLASS_ONE_STYLE,
            class_two: DEFAULT_CLASS_TWO_STYLE,
        }
    }
}

fn check_point_set<F>(points: &ArrayView2<F>) -> Result<(), PlotError> {
    if points.nrows() != 2 {
        return Err(PlotError::NotTwoDimensional {
            rows: points.nrows(),
        });
    }
    Ok(())
}

/// Plots the two classes of a 2D binary dataset.
///
/// `d1` and `d2` are 2×N and 2×M point sets (row 0 = x, row 1 = y); either
/// may be empty. The axis is fixed to `window`, the grid is turned on, then
/// `d1` and `d2` are added with their respective styles.
///
/// # Errors
///
/// Returns `PlotError::Style` if a format string does not parse and
/// `PlotError::NotTwoDimensional` if a point set does not have two rows.
/// The figure is not modified when an error is returned.
pub fn plot_binary_dataset<F: Float>(
    fig: &mut Figure,
    d1: ArrayView2<F>,
    d2: ArrayView2<F>,
    window: Window<F>,
    styles: DatasetStyles<'_>,
) -> Result<(), PlotError> {
    let st1: FormatString = styles.class_one.parse()?;
    let st2: FormatString = styles.class_two.parse()?;
    check_point_set(&d1)?;
    check_point_set(&d2)?;

    fig.set_axis(window);
    fig.set_grid(true);
    fig.plot(d1.row(0), d1.row(1), st1)?;
    fig.plot(d2.row(0), d2.row(1), st2)?;
    Ok(())
}
