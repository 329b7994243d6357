//! Plotting helpers for 2D binary-classification datasets and linear
//! decision boundaries.
//!
//! Plot functions draw onto an explicit [`Figure`]; a renderer (see the
//! `binplot-viewer` app) then displays it.

pub mod dataset;
pub mod demo;
pub mod figure;
pub mod line;
pub mod scatter;

pub use binplot_helpers::{Color, Float, FormatString, LineStyle, Marker, StyleError, Window};
pub use dataset::{DatasetError, LabeledDataset, toy_dataset};
pub use demo::demo_figure;
pub use figure::{Figure, PlotError, Series};
pub use line::{LineError, LineOptions, Segment, line_segment, plot_line};
pub use scatter::{DatasetStyles, plot_binary_dataset};
