use crate::figure::{Figure, Series};
use binplot_helpers::{Color, Float, FormatString, LineStyle, Window};
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Errors that can occur when turning `u[0]*x + u[1]*y + b = 0` into a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineError {
    /// Both components of the normal vector are zero, so the equation has no direction.
    DegenerateNormal,
}

impl Display for LineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LineError::DegenerateNormal => {
                write!(f, "normal vector is zero, the equation does not define a line")
            }
        }
    }
}

impl Error for LineError {}

/// The two endpoints drawn for a line, in drawing order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Segment<F> {
    pub start: (F, F),
    pub end: (F, F),
}

/// Stroke used by [`plot_line`]. Defaults to a solid black line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineOptions {
    pub style: LineStyle,
    pub color: Color,
}

impl Default for LineOptions {
    fn default() -> Self {
        LineOptions {
            style: LineStyle::Solid,
            color: Color::Black,
        }
    }
}

/// Computes the segment drawn for the line `u[0]*x + u[1]*y + b = 0` in `window`.
///
/// A vertical line (`u[1] == 0`) spans `ymax` down to `ymin`; any other line
/// is evaluated at `xmax` then at `xmin`. The y values are not clipped to
/// `[ymin, ymax]`, the renderer's own clipping takes care of overflow.
///
/// # Errors
///
/// Returns `LineError::DegenerateNormal` if `u` is the zero vector.
pub fn line_segment<F: Float>(
    u: [F; 2],
    b: F,
    window: Window<F>,
) -> Result<Segment<F>, LineError> {
    let [u0, u1] = u;
    if u1.is_zero() {
        if u0.is_zero() {
            return Err(LineError::DegenerateNormal);
        }
        let x = -b / u0;
        return Ok(Segment {
            start: (x, window.ymax),
            end: (x, window.ymin),
        });
    }

    let y_at = |x: F| -(b + u0 * x) / u1;
    Ok(Segment {
        start: (window.xmax, y_at(window.xmax)),
        end: (window.xmin, y_at(window.xmin)),
    })
}

/// Draws the line `u[0]*x + u[1]*y + b = 0` on `fig`, fixing the axis to
/// `window` and turning the grid on.
///
/// A zero normal vector is reported with a warning on the log and nothing is
/// drawn; the figure is left as it was and `None` is returned.
pub fn plot_line<F: Float>(
    fig: &mut Figure,
    u: [F; 2],
    b: F,
    window: Window<F>,
    options: LineOptions,
) -> Option<Segment<F>> {
    let segment = match line_segment(u, b, window) {
        Ok(segment) => segment,
        Err(e) => {
            warn!("cannot plot such line ... ({})", e);
            return None;
        }
    };

    fig.set_axis(window);
    fig.set_grid(true);
    let points = [segment.start, segment.end]
        .into_iter()
        .map(|(x, y)| (x.to_plot(), y.to_plot()));
    fig.push(Series::from_points(
        points,
        FormatString::line(options.style, options.color),
    ));
    Some(segment)
}
