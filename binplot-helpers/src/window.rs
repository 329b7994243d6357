use crate::Float;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// The rectangular coordinate range a plot is drawn in.
///
/// Bounds are taken as given; `xmin < xmax` and `ymin < ymax` are not
/// enforced here. Renderers can check [`Window::is_proper`] before drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Window<F> {
    pub xmin: F,
    pub xmax: F,
    pub ymin: F,
    pub ymax: F,
}

impl<F: Float> Window<F> {
    pub fn new(xmin: F, xmax: F, ymin: F, ymax: F) -> Self {
        Window {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }

    /// `true` when both ranges are non-empty and finite.
    pub fn is_proper(&self) -> bool {
        [self.xmin, self.xmax, self.ymin, self.ymax]
            .iter()
            .all(|v| v.is_finite())
            && self.xmin < self.xmax
            && self.ymin < self.ymax
    }

    pub fn width(&self) -> F {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> F {
        self.ymax - self.ymin
    }

    /// Clips the segment `p0 → p1` to the window (Liang–Barsky), keeping its
    /// direction. Returns `None` when nothing of it is visible or a
    /// coordinate is not finite.
    pub fn clip_segment(&self, p0: (F, F), p1: (F, F)) -> Option<((F, F), (F, F))> {
        let (x0, y0) = p0;
        let (x1, y1) = p1;
        if ![x0, y0, x1, y1].iter().all(|v| v.is_finite()) {
            return None;
        }
        let dx = x1 - x0;
        let dy = y1 - y0;
        let mut t0 = F::zero();
        let mut t1 = F::one();
        let edges = [
            (-dx, x0 - self.xmin),
            (dx, self.xmax - x0),
            (-dy, y0 - self.ymin),
            (dy, self.ymax - y0),
        ];
        for (p, q) in edges {
            if p.is_zero() {
                // Parallel to this edge: either fully inside or fully outside it.
                if q < F::zero() {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < F::zero() {
                if r > t1 {
                    return None;
                }
                if r > t0 {
                    t0 = r;
                }
            } else {
                if r < t0 {
                    return None;
                }
                if r < t1 {
                    t1 = r;
                }
            }
        }
        Some(((x0 + t0 * dx, y0 + t0 * dy), (x0 + t1 * dx, y0 + t1 * dy)))
    }

    pub fn to_plot(&self) -> Window<f64> {
        Window {
            xmin: self.xmin.to_plot(),
            xmax: self.xmax.to_plot(),
            ymin: self.ymin.to_plot(),
            ymax: self.ymax.to_plot(),
        }
    }
}

impl<F: Float> From<[F; 4]> for Window<F> {
    /// Same ordering as `plt.axis`: `[xmin, xmax, ymin, ymax]`.
    fn from(bounds: [F; 4]) -> Self {
        Window::new(bounds[0], bounds[1], bounds[2], bounds[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_window_extent() {
        let w = Window::new(-1.0, 21.0, -1.0, 21.0);
        assert!(w.is_proper());
        assert_abs_diff_eq!(w.width(), 22.0);
        assert_abs_diff_eq!(w.height(), 22.0);
    }

    #[test]
    fn test_improper_windows() {
        assert!(!Window::new(10.0, 0.0, 0.0, 10.0).is_proper());
        assert!(!Window::new(0.0, 10.0, 5.0, 5.0).is_proper());
        assert!(!Window::new(0.0, f64::INFINITY, 0.0, 1.0).is_proper());
    }

    #[test]
    fn test_clip_segment_inside_untouched() {
        let w = Window::new(-1.0, 21.0, -1.0, 21.0);
        let clipped = w.clip_segment((21.0, -1.0), (-1.0, 21.0)).unwrap();
        assert_eq!(clipped, ((21.0, -1.0), (-1.0, 21.0)));
    }

    #[test]
    fn test_clip_segment_crossing_top() {
        let w = Window::new(0.0, 10.0, 0.0, 10.0);
        let ((sx, sy), (ex, ey)) = w.clip_segment((10.0, 20.0), (0.0, 0.0)).unwrap();
        assert_abs_diff_eq!(sx, 5.0);
        assert_abs_diff_eq!(sy, 10.0);
        assert_abs_diff_eq!(ex, 0.0);
        assert_abs_diff_eq!(ey, 0.0);
    }

    #[test]
    fn test_clip_segment_outside_or_invalid() {
        let w = Window::new(0.0, 10.0, 0.0, 10.0);
        assert_eq!(w.clip_segment((11.0, 0.0), (11.0, 10.0)), None);
        assert_eq!(w.clip_segment((-5.0, 20.0), (20.0, 15.0)), None);
        assert_eq!(w.clip_segment((0.0, f64::NAN), (1.0, 1.0)), None);
    }

    #[test]
    fn test_clip_vertical_segment() {
        let w = Window::new(0.0, 10.0, 0.0, 10.0);
        let ((sx, sy), (ex, ey)) = w.clip_segment((5.0, 1e9), (5.0, -1e9)).unwrap();
        assert_abs_diff_eq!(sx, 5.0);
        assert_abs_diff_eq!(sy, 10.0, epsilon = 1e-6);
        assert_abs_diff_eq!(ex, 5.0);
        assert_abs_diff_eq!(ey, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_from_axis_array() {
        let w: Window<f32> = [0.0, 10.0, 2.0, 8.0].into();
        assert_eq!(w, Window::new(0.0, 10.0, 2.0, 8.0));
        let wide = w.to_plot();
        assert_abs_diff_eq!(wide.ymin, 2.0_f64);
    }
}
