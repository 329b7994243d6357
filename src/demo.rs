use crate::dataset::{NEGATIVE_LABEL, POSITIVE_LABEL, toy_dataset};
use crate::figure::{Figure, PlotError};
use crate::line::{LineOptions, plot_line};
use crate::scatter::{DatasetStyles, plot_binary_dataset};
use binplot_helpers::{Color, LineStyle, Window};

/// Viewing window of the demonstration, as `[xmin, xmax, ymin, ymax]`.
pub const DEMO_WINDOW: [f64; 4] = [-1.0, 21.0, -1.0, 21.0];
/// Normal vector of the example boundary `0.5x + 0.5y - 10 = 0`.
pub const DEMO_NORMAL: [f64; 2] = [0.5, 0.5];
pub const DEMO_OFFSET: f64 = -10.0;

/// Builds the demonstration figure: the toy dataset split by label, plus one
/// blue boundary line separating the two classes.
pub fn demo_figure() -> Result<Figure, PlotError> {
    let data = toy_dataset();
    let window = Window::from(DEMO_WINDOW);
    let positives = data.split_by_label(POSITIVE_LABEL);
    let negatives = data.split_by_label(NEGATIVE_LABEL);

    let mut fig = Figure::new();
    plot_binary_dataset(
        &mut fig,
        positives.view(),
        negatives.view(),
        window,
        DatasetStyles::default(),
    )?;

    let options = LineOptions {
        style: LineStyle::Solid,
        color: Color::Blue,
    };
    plot_line(&mut fig, DEMO_NORMAL, DEMO_OFFSET, window, options);
    Ok(fig)
}
