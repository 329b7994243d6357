use binplot_helpers::{Color, Float, FormatString, LineStyle, Marker, StyleError, Window};
use log::debug;
use ndarray::ArrayView1;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors that can occur when adding data to a [`Figure`].
#[derive(Debug, Clone, PartialEq)]
pub enum PlotError {
    /// A style string could not be parsed.
    Style(StyleError),
    /// A point set must have exactly two rows (x and y).
    NotTwoDimensional { rows: usize },
    /// x and y coordinate sequences differ in length.
    LengthMismatch { xs: usize, ys: usize },
}

impl Display for PlotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PlotError::Style(e) => write!(f, "Invalid style: {}", e),
            PlotError::NotTwoDimensional { rows } => write!(
                f,
                "A point set must have 2 rows (x and y), got {}",
                rows
            ),
            PlotError::LengthMismatch { xs, ys } => write!(
                f,
                "x and y must have the same length, got {} and {}",
                xs, ys
            ),
        }
    }
}

impl Error for PlotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PlotError::Style(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StyleError> for PlotError {
    fn from(e: StyleError) -> Self {
        PlotError::Style(e)
    }
}

/// One call's worth of plotted data: points joined by a line, marked, or both.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub color: Color,
    pub marker: Option<Marker>,
    pub line: Option<LineStyle>,
}

impl Series {
    pub fn from_points<I>(points: I, style: FormatString) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (xs, ys) = points.into_iter().unzip();
        Series {
            xs,
            ys,
            color: style.color,
            marker: style.marker,
            line: style.line,
        }
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }

    pub fn style(&self) -> FormatString {
        FormatString {
            color: self.color,
            marker: self.marker,
            line: self.line,
        }
    }
}

/// A retained drawing surface.
///
/// Plotting functions record what they draw here; renderers walk the
/// recorded axis window, grid flag and series in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Figure {
    window: Option<Window<f64>>,
    grid: bool,
    series: Vec<Series>,
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixes the visible range. Later calls replace earlier ones.
    pub fn set_axis<F: Float>(&mut self, window: Window<F>) {
        let window = window.to_plot();
        debug!("axis set to {:?}", window);
        self.window = Some(window);
    }

    pub fn set_grid(&mut self, on: bool) {
        self.grid = on;
    }

    /// Adds the points `(xs[i], ys[i])` drawn with `style`.
    pub fn plot<F: Float>(
        &mut self,
        xs: ArrayView1<F>,
        ys: ArrayView1<F>,
        style: FormatString,
    ) -> Result<(), PlotError> {
        if xs.len() != ys.len() {
            return Err(PlotError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        let points = xs.iter().zip(ys.iter()).map(|(&x, &y)| (x.to_plot(), y.to_plot()));
        self.push(Series::from_points(points, style));
        Ok(())
    }

    pub(crate) fn push(&mut self, series: Series) {
        debug!("adding series '{}' with {} points", series.style(), series.len());
        self.series.push(series);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn window(&self) -> Option<Window<f64>> {
        self.window
    }

    pub fn grid(&self) -> bool {
        self.grid
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn is_empty(&self) -> bool {
        self.window.is_none() && !self.grid && self.series.is_empty()
    }
}

impl Display for Figure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.window {
            Some(w) => writeln!(f, "axis: [{}, {}, {}, {}]", w.xmin, w.xmax, w.ymin, w.ymax)?,
            None => writeln!(f, "axis: auto")?,
        }
        writeln!(f, "grid: {}", if self.grid { "on" } else { "off" })?;
        for (i, series) in self.series.iter().enumerate() {
            write!(f, "series {} '{}' ({} points):", i, series.style(), series.len())?;
            for (x, y) in series.points() {
                write!(f, " ({}, {})", x, y)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_new_figure_is_empty() {
        let fig = Figure::new();
        assert!(fig.is_empty());
        assert!(fig.window().is_none());
        assert!(!fig.grid());
    }

    #[test]
    fn test_plot_records_series() {
        let mut fig = Figure::new();
        let xs = array![1.0_f32, 2.0, 3.0];
        let ys = array![4.0_f32, 5.0, 6.0];
        fig.plot(xs.view(), ys.view(), "rs".parse().unwrap()).unwrap();

        assert_eq!(fig.series().len(), 1);
        let series = &fig.series()[0];
        assert_eq!(series.color, Color::Red);
        assert_eq!(series.marker, Some(Marker::Square));
        assert_eq!(series.line, None);
        assert_eq!(
            series.points().collect::<Vec<_>>(),
            vec![(1.0, 4.0), (2.0, 5.0), (3.0, 6.0)]
        );
    }

    #[test]
    fn test_plot_length_mismatch() {
        let mut fig = Figure::new();
        let xs = array![1.0, 2.0];
        let ys = array![1.0];
        let result = fig.plot(xs.view(), ys.view(), "k".parse().unwrap());
        assert_eq!(result, Err(PlotError::LengthMismatch { xs: 2, ys: 1 }));
        assert!(fig.series().is_empty());
    }

    #[test]
    fn test_axis_replaced_and_clear() {
        let mut fig = Figure::new();
        fig.set_axis(Window::new(0.0, 1.0, 0.0, 1.0));
        fig.set_axis(Window::new(-1.0, 21.0, -1.0, 21.0));
        fig.set_grid(true);
        assert_eq!(fig.window(), Some(Window::new(-1.0, 21.0, -1.0, 21.0)));

        fig.clear();
        assert!(fig.is_empty());
    }

    #[test]
    fn test_display_summary() {
        let mut fig = Figure::new();
        fig.set_axis(Window::new(0.0, 10.0, 0.0, 10.0));
        fig.set_grid(true);
        fig.push(Series::from_points(
            vec![(10.0, 3.0), (0.0, 3.0)],
            FormatString::line(LineStyle::Solid, Color::Black),
        ));
        let text = fig.to_string();
        assert!(text.contains("axis: [0, 10, 0, 10]"));
        assert!(text.contains("grid: on"));
        assert!(text.contains("series 0 'k-' (2 points): (10, 3) (0, 3)"));
    }
}
