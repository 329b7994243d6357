use crate::app::{ViewerApp, ViewerConfig};

use binplot::{Color, Figure, LineStyle, Marker, Series, Window};
use eframe::egui::{
    self, Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Shape, Stroke, pos2, vec2,
};

const GRID_COLOR: Color32 = Color32::from_gray(210);
const FRAME_COLOR: Color32 = Color32::BLACK;
const LABEL_COLOR: Color32 = Color32::from_gray(60);

/// Draws the figure filling the central panel.
pub fn draw_central_panel(app: &ViewerApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::default().fill(Color32::WHITE))
        .show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
            let plot_rect = response.rect.shrink(app.config.margin);
            draw_figure(&painter, plot_rect, &app.figure, &app.config);
        });
}

fn draw_figure(painter: &Painter, plot_rect: Rect, fig: &Figure, config: &ViewerConfig) {
    let window = fig.window().unwrap_or_else(|| auto_window(fig));
    if !window.is_proper() || plot_rect.width() <= 0.0 || plot_rect.height() <= 0.0 {
        painter.text(
            plot_rect.center(),
            Align2::CENTER_CENTER,
            "Cannot draw: the viewing window is empty",
            FontId::proportional(14.0),
            Color32::DARK_RED,
        );
        return;
    }

    let transform = PlotTransform::new(window, plot_rect);
    let xticks = nice_ticks(window.xmin, window.xmax, config.target_ticks);
    let yticks = nice_ticks(window.ymin, window.ymax, config.target_ticks);

    if fig.grid() {
        let stroke = Stroke::new(0.8, GRID_COLOR);
        for &x in &xticks {
            painter.line_segment(
                [transform.to_screen((x, window.ymin)), transform.to_screen((x, window.ymax))],
                stroke,
            );
        }
        for &y in &yticks {
            painter.line_segment(
                [transform.to_screen((window.xmin, y)), transform.to_screen((window.xmax, y))],
                stroke,
            );
        }
    }

    let label_font = FontId::proportional(11.0);
    for &x in &xticks {
        let at = transform.to_screen((x, window.ymin)) + vec2(0.0, 4.0);
        painter.text(at, Align2::CENTER_TOP, format_tick(x), label_font.clone(), LABEL_COLOR);
    }
    for &y in &yticks {
        let at = transform.to_screen((window.xmin, y)) - vec2(4.0, 0.0);
        painter.text(at, Align2::RIGHT_CENTER, format_tick(y), label_font.clone(), LABEL_COLOR);
    }

    let clipped = painter.with_clip_rect(plot_rect);
    for series in fig.series() {
        draw_series(&clipped, series, &transform, config);
    }

    let corners = vec![
        plot_rect.left_top(),
        plot_rect.right_top(),
        plot_rect.right_bottom(),
        plot_rect.left_bottom(),
    ];
    painter.add(Shape::closed_line(corners, Stroke::new(1.0, FRAME_COLOR)));
}

fn draw_series(
    painter: &Painter,
    series: &Series,
    transform: &PlotTransform,
    config: &ViewerConfig,
) {
    let color = to_color32(series.color);
    let points: Vec<(f64, f64)> = series.points().collect();

    if let Some(style) = series.line {
        let stroke = Stroke::new(config.line_width, color);
        for pair in points.windows(2) {
            let Some((a, b)) = transform.window.clip_segment(pair[0], pair[1]) else {
                continue;
            };
            let (a, b) = (transform.to_screen(a), transform.to_screen(b));
            for piece in dash_segments(a, b, dash_pattern(style)) {
                painter.line_segment(piece, stroke);
            }
        }
    }

    if let Some(marker) = series.marker {
        for &(x, y) in points.iter().filter(|(x, y)| x.is_finite() && y.is_finite()) {
            draw_marker(painter, marker, transform.to_screen((x, y)), config.marker_radius, color);
        }
    }
}

fn draw_marker(painter: &Painter, marker: Marker, center: Pos2, radius: f32, color: Color32) {
    let polygon = |offsets: &[(f32, f32)]| {
        let points = offsets
            .iter()
            .map(|&(dx, dy)| center + vec2(dx, dy) * radius)
            .collect();
        Shape::convex_polygon(points, color, Stroke::NONE)
    };
    let stroke = Stroke::new(1.5, color);
    let spoke = |dx: f32, dy: f32| {
        let d = vec2(dx, dy) * radius;
        painter.line_segment([center - d, center + d], stroke);
    };

    // Screen y grows downwards: an "up" triangle has its apex at negative dy.
    match marker {
        Marker::Point => {
            painter.circle_filled(center, radius * 0.5, color);
        }
        Marker::Circle => {
            painter.circle_filled(center, radius, color);
        }
        Marker::Square => {
            painter.add(polygon(&[(-0.9, -0.9), (0.9, -0.9), (0.9, 0.9), (-0.9, 0.9)]));
        }
        Marker::TriangleUp => {
            painter.add(polygon(&[(0.0, -1.1), (1.0, 0.8), (-1.0, 0.8)]));
        }
        Marker::TriangleDown => {
            painter.add(polygon(&[(0.0, 1.1), (-1.0, -0.8), (1.0, -0.8)]));
        }
        Marker::TriangleLeft => {
            painter.add(polygon(&[(-1.1, 0.0), (0.8, -1.0), (0.8, 1.0)]));
        }
        Marker::TriangleRight => {
            painter.add(polygon(&[(1.1, 0.0), (-0.8, 1.0), (-0.8, -1.0)]));
        }
        Marker::Diamond => {
            painter.add(polygon(&[(0.0, -1.1), (1.1, 0.0), (0.0, 1.1), (-1.1, 0.0)]));
        }
        Marker::ThinDiamond => {
            painter.add(polygon(&[(0.0, -1.1), (0.7, 0.0), (0.0, 1.1), (-0.7, 0.0)]));
        }
        Marker::Cross => {
            spoke(1.0, 1.0);
            spoke(1.0, -1.0);
        }
        Marker::Plus => {
            spoke(1.2, 0.0);
            spoke(0.0, 1.2);
        }
        Marker::Star => {
            spoke(1.2, 0.0);
            spoke(0.0, 1.2);
            spoke(0.85, 0.85);
            spoke(0.85, -0.85);
        }
    }
}

fn to_color32(color: Color) -> Color32 {
    let (r, g, b) = color.rgb();
    Color32::from_rgb(r, g, b)
}

/// Maps data coordinates in `window` onto `rect`, y axis pointing up.
#[derive(Debug, Clone, Copy)]
struct PlotTransform {
    window: Window<f64>,
    rect: Rect,
}

impl PlotTransform {
    fn new(window: Window<f64>, rect: Rect) -> Self {
        Self { window, rect }
    }

    fn to_screen(&self, (x, y): (f64, f64)) -> Pos2 {
        let tx = (x - self.window.xmin) / self.window.width();
        let ty = (self.window.ymax - y) / self.window.height();
        pos2(
            self.rect.left() + tx as f32 * self.rect.width(),
            self.rect.top() + ty as f32 * self.rect.height(),
        )
    }
}

/// Window used when the figure never fixed one: the data bounds padded by 5%.
fn auto_window(fig: &Figure) -> Window<f64> {
    let mut bounds: Option<Window<f64>> = None;
    let points = fig
        .series()
        .iter()
        .flat_map(|s| s.points())
        .filter(|(x, y)| x.is_finite() && y.is_finite());
    for (x, y) in points {
        bounds = Some(match bounds {
            None => Window::new(x, x, y, y),
            Some(w) => Window::new(w.xmin.min(x), w.xmax.max(x), w.ymin.min(y), w.ymax.max(y)),
        });
    }

    let Some(w) = bounds else {
        return Window::new(0.0, 1.0, 0.0, 1.0);
    };
    let pad = |lo: f64, hi: f64| {
        let span = hi - lo;
        if span > 0.0 { span * 0.05 } else { 0.5 }
    };
    let (px, py) = (pad(w.xmin, w.xmax), pad(w.ymin, w.ymax));
    Window::new(w.xmin - px, w.xmax + px, w.ymin - py, w.ymax + py)
}

/// Grid positions inside `[min, max]` spaced by 1, 2 or 5 times a power of
/// ten, giving at most about `target` ticks.
fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let span = max - min;
    if !(span > 0.0) || !span.is_finite() || target == 0 {
        return Vec::new();
    }
    let raw = span / target as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|&s| s >= raw)
        .unwrap_or(10.0 * magnitude);

    let first = (min / step).ceil();
    let slack = step * 1e-9;
    (0..)
        .map(|i| (first + i as f64) * step)
        .take_while(|&t| t <= max + slack)
        .collect()
}

fn format_tick(value: f64) -> String {
    // Adding 0.0 turns -0.0 into 0.0.
    let rounded = (value * 1e6).round() / 1e6 + 0.0;
    format!("{}", rounded)
}

/// On/off lengths, in points, of each line style's dash pattern.
fn dash_pattern(style: LineStyle) -> &'static [f32] {
    match style {
        LineStyle::Solid => &[],
        LineStyle::Dashed => &[6.0, 4.0],
        LineStyle::DashDot => &[6.0, 3.0, 1.5, 3.0],
        LineStyle::Dotted => &[1.5, 3.0],
    }
}

/// Splits `a → b` into the visible pieces of an on/off dash `pattern`.
/// An empty pattern yields the whole segment.
fn dash_segments(a: Pos2, b: Pos2, pattern: &[f32]) -> Vec<[Pos2; 2]> {
    let length = a.distance(b);
    if pattern.is_empty() || pattern.iter().any(|&p| p <= 0.0) || !length.is_finite() {
        return vec![[a, b]];
    }

    let direction = (b - a) / length;
    let mut pieces = Vec::new();
    let mut travelled = 0.0;
    let mut on = true;
    for &dash in pattern.iter().cycle() {
        if travelled >= length {
            break;
        }
        let end = (travelled + dash).min(length);
        if on {
            pieces.push([a + direction * travelled, a + direction * end]);
        }
        travelled = end;
        on = !on;
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use binplot::{FormatString, demo_figure};

    #[test]
    fn test_transform_corners_y_up() {
        let window = Window::new(-1.0, 21.0, -1.0, 21.0);
        let rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(220.0, 110.0));
        let t = PlotTransform::new(window, rect);

        let top_left = t.to_screen((-1.0, 21.0));
        assert_abs_diff_eq!(top_left.x, 0.0);
        assert_abs_diff_eq!(top_left.y, 0.0);

        let bottom_right = t.to_screen((21.0, -1.0));
        assert_abs_diff_eq!(bottom_right.x, 220.0);
        assert_abs_diff_eq!(bottom_right.y, 110.0);

        let middle = t.to_screen((10.0, 10.0));
        assert_abs_diff_eq!(middle.x, 110.0, epsilon = 1e-4);
        assert_abs_diff_eq!(middle.y, 55.0, epsilon = 1e-4);
    }

    #[test]
    fn test_nice_ticks() {
        assert_eq!(nice_ticks(-1.0, 21.0, 8), vec![0.0, 5.0, 10.0, 15.0, 20.0]);
        assert_eq!(nice_ticks(0.0, 10.0, 8), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert!(nice_ticks(5.0, 5.0, 8).is_empty());
        assert!(nice_ticks(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_nice_ticks_fractional_step() {
        let ticks = nice_ticks(0.0, 1.0, 4);
        assert_eq!(ticks, vec![0.0, 0.5, 1.0]);
        assert_eq!(format_tick(ticks[1]), "0.5");
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(20.0), "20");
        assert_eq!(format_tick(2.5), "2.5");
        assert_eq!(format_tick(-0.0), "0");
        assert_eq!(format_tick(0.1 + 0.2), "0.3");
    }

    #[test]
    fn test_dash_segments_solid_and_dashed() {
        let a = pos2(0.0, 0.0);
        let b = pos2(20.0, 0.0);
        assert_eq!(dash_segments(a, b, &[]), vec![[a, b]]);

        let pieces = dash_segments(a, b, &[6.0, 4.0]);
        assert_eq!(pieces.len(), 2);
        assert_abs_diff_eq!(pieces[0][1].x, 6.0);
        assert_abs_diff_eq!(pieces[1][0].x, 10.0);
        assert_abs_diff_eq!(pieces[1][1].x, 16.0);
    }

    #[test]
    fn test_dash_segments_truncates_last_dash() {
        let pieces = dash_segments(pos2(0.0, 0.0), pos2(0.0, 8.0), &[6.0, 1.0]);
        assert_eq!(pieces.len(), 2);
        assert_abs_diff_eq!(pieces[1][0].y, 7.0);
        assert_abs_diff_eq!(pieces[1][1].y, 8.0);
    }

    #[test]
    fn test_auto_window_pads_data_bounds() {
        let mut fig = Figure::new();
        assert_eq!(auto_window(&fig), Window::new(0.0, 1.0, 0.0, 1.0));

        let style: FormatString = "go".parse().unwrap();
        let xs = ndarray::array![0.0, 10.0];
        let ys = ndarray::array![5.0, 5.0];
        fig.plot(xs.view(), ys.view(), style).unwrap();

        let w = auto_window(&fig);
        assert_abs_diff_eq!(w.xmin, -0.5);
        assert_abs_diff_eq!(w.xmax, 10.5);
        assert_abs_diff_eq!(w.ymin, 4.5);
        assert_abs_diff_eq!(w.ymax, 5.5);
    }

    #[test]
    fn test_demo_colors() {
        let fig = demo_figure().unwrap();
        let colors: Vec<Color32> = fig.series().iter().map(|s| to_color32(s.color)).collect();
        assert_eq!(colors[0], Color32::from_rgb(0, 128, 0));
        assert_eq!(colors[1], Color32::from_rgb(255, 0, 0));
        assert_eq!(colors[2], Color32::from_rgb(0, 0, 255));
    }
}
