use crate::ui;

use binplot::Figure;
use eframe::egui;
use eframe::{App, Frame};

/// Display settings for the viewer window.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub title: String,
    /// Initial inner size of the native window, in points.
    pub window_size: [f32; 2],
    /// Space kept around the plot area for tick labels.
    pub margin: f32,
    pub marker_radius: f32,
    pub line_width: f32,
    /// Approximate number of grid lines per axis.
    pub target_ticks: usize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        ViewerConfig {
            title: "binplot".to_string(),
            window_size: [640.0, 640.0],
            margin: 40.0,
            marker_radius: 4.0,
            line_width: 1.5,
            target_ticks: 8,
        }
    }
}

/// The viewer application: shows one figure, no editing.
pub struct ViewerApp {
    pub figure: Figure,
    pub config: ViewerConfig,
}

impl ViewerApp {
    pub fn new(figure: Figure, config: ViewerConfig) -> Self {
        Self { figure, config }
    }
}

impl App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        ui::draw_central_panel(self, ctx);
    }
}
