// File: crates/benchplot-core/src/theme.rs
// Summary: Chart colors, including the per-series palette cycle.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub legend_fill: skia::Color,
    pub legend_border: skia::Color,
    pub palette: &'static [skia::Color],
}

/// Line colors cycled by series index, so chart colors are deterministic
/// given header column order.
const LIGHT_PALETTE: &[skia::Color] = &[
    skia::Color::from_argb(255, 31, 119, 180),  // blue
    skia::Color::from_argb(255, 255, 127, 14),  // orange
    skia::Color::from_argb(255, 44, 160, 44),   // green
    skia::Color::from_argb(255, 214, 39, 40),   // red
    skia::Color::from_argb(255, 148, 103, 189), // purple
    skia::Color::from_argb(255, 140, 86, 75),   // brown
];

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 220, 220, 225),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            title: skia::Color::from_argb(255, 20, 20, 30),
            legend_fill: skia::Color::from_argb(230, 250, 250, 252),
            legend_border: skia::Color::from_argb(255, 180, 180, 190),
            palette: LIGHT_PALETTE,
        }
    }

    /// Line color for the series at `index`, cycling through the palette.
    pub fn series_color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
