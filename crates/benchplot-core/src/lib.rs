// File: crates/benchplot-core/src/lib.rs
// Summary: Core library entry point; exports the table parser and chart API.

pub mod axis;
pub mod chart;
pub mod error;
pub mod grid;
pub mod series;
pub mod table;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::Axis;
pub use chart::{Chart, RenderOptions};
pub use error::ParseError;
pub use series::Series;
pub use table::{BenchTable, TABLE_MARKER, X_AXIS_LABEL};
pub use theme::Theme;
pub use view::ViewState;
