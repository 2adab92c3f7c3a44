// File: crates/benchplot-core/src/series.rs
// Summary: Named line series model built from parsed benchmark columns.

/// One benchmark algorithm's timings, indexed in parallel with the x axis.
/// The name doubles as the legend label.
#[derive(Clone, Debug)]
pub struct Series {
    pub name: String,
    pub data_xy: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(name: impl Into<String>, data_xy: Vec<(f64, f64)>) -> Self {
        Self { name: name.into(), data_xy }
    }

    /// Zip an x axis with one measurement column. Extra entries on either
    /// side are dropped; the parser guarantees equal lengths.
    pub fn from_columns(name: impl Into<String>, x_axis: &[i64], values: &[i64]) -> Self {
        let data_xy = x_axis
            .iter()
            .zip(values.iter())
            .map(|(&x, &y)| (x as f64, y as f64))
            .collect();
        Self::new(name, data_xy)
    }
}
