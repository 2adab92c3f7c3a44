// File: crates/benchplot-core/src/view.rs
// Summary: Visible ranges derived from series extents, padded by a fixed margin.

use crate::series::Series;
use crate::types::MARGIN_FRACTION;

#[derive(Clone, Copy, Debug)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Joint extent of every series, padded by [`MARGIN_FRACTION`] on both
    /// dimensions. No data (or a degenerate extent) falls back to a unit range.
    pub fn from_series(series: &[Series]) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in series {
            for &(x, y) in &s.data_xy {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        if (x_max - x_min).abs() < 1e-9 {
            x_max = x_min + 1.0;
        }
        if (y_max - y_min).abs() < 1e-9 {
            y_max = y_min + 1.0;
        }
        let xm = (x_max - x_min) * MARGIN_FRACTION;
        let ym = (y_max - y_min) * MARGIN_FRACTION;
        Self {
            x_min: x_min - xm,
            x_max: x_max + xm,
            y_min: y_min - ym,
            y_max: y_max + ym,
        }
    }
}
