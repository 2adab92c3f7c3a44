// File: crates/benchplot-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::grid::{format_tick, linspace};
use crate::series::Series;
use crate::table::BenchTable;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewState;
use crate::Axis;

const X_TICKS: usize = 9;
const Y_TICKS: usize = 7;
const MARKER_RADIUS: f32 = 4.0;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
        }
    }
}

pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Chart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
        }
    }

    /// Build a chart from a parsed benchmark table: one line series per
    /// `stats` entry, in header column order, with axes fit to the data.
    pub fn from_table(table: &BenchTable, title: impl Into<String>) -> Self {
        let mut chart = Self::new(title);
        for (name, values) in &table.stats {
            chart.add_series(Series::from_columns(name, &table.x_axis, values));
        }
        chart.autoscale_axes();
        chart
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axes to the joint data extent, padded by the fixed margin
    /// fraction. A chart without data gets a unit range.
    pub fn autoscale_axes(&mut self) {
        let view = ViewState::from_series(&self.series);
        self.x_axis.min = view.x_min;
        self.x_axis.max = view.x_max;
        self.y_axis.min = view.y_min;
        self.y_axis.max = view.y_max;
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render the chart and return the encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        // Create raster surface
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        let theme = &opts.theme;

        // Background
        canvas.clear(theme.background);

        // Paddings & plot rect
        let plot_left = opts.insets.left;
        let plot_right = opts.width - opts.insets.right;
        let plot_top = opts.insets.top;
        let plot_bottom = opts.height - opts.insets.bottom;

        draw_grid_and_ticks(
            canvas,
            plot_left, plot_top, plot_right, plot_bottom,
            &self.x_axis, &self.y_axis, theme,
        );
        draw_axes(
            canvas,
            plot_left, plot_top, plot_right, plot_bottom,
            &self.x_axis, &self.y_axis, theme,
        );
        draw_title(canvas, opts, &self.title);

        // Series
        for (i, s) in self.series.iter().enumerate() {
            draw_line_series(
                canvas,
                plot_left, plot_top, plot_right, plot_bottom,
                &self.x_axis, &self.y_axis, s,
                theme.series_color(i),
            );
        }

        draw_legend(canvas, plot_left, plot_top, &self.series, theme);

        // Snapshot and encode PNG
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }
}

// ---- helpers ----------------------------------------------------------------

fn label_font(size: f32) -> skia::Font {
    let mut font = skia::Font::default();
    font.set_size(size);
    font
}

fn draw_grid_and_ticks(
    canvas: &skia::Canvas,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
    x_axis: &Axis,
    y_axis: &Axis,
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(theme.tick);
    tick_paint.set_anti_alias(true);
    let font = label_font(13.0);

    let xspan = (x_axis.max - x_axis.min).max(1e-9);
    let yspan = (y_axis.max - y_axis.min).max(1e-9);

    // verticals with x tick labels underneath
    for v in linspace(x_axis.min, x_axis.max, X_TICKS) {
        let x = l as f32 + ((v - x_axis.min) / xspan) as f32 * (r - l) as f32;
        canvas.draw_line((x, t as f32), (x, b as f32), &paint);
        let label = format_tick(v);
        let (w, _) = font.measure_str(&label, None);
        canvas.draw_str(&label, (x - w * 0.5, b as f32 + 20.0), &font, &tick_paint);
    }
    // horizontals with y tick labels on the left
    for v in linspace(y_axis.min, y_axis.max, Y_TICKS) {
        let y = b as f32 - ((v - y_axis.min) / yspan) as f32 * (b - t) as f32;
        canvas.draw_line((l as f32, y), (r as f32, y), &paint);
        let label = format_tick(v);
        let (w, _) = font.measure_str(&label, None);
        canvas.draw_str(&label, (l as f32 - w - 10.0, y + 5.0), &font, &tick_paint);
    }
}

fn draw_axes(
    canvas: &skia::Canvas,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
    x: &Axis,
    y: &Axis,
    theme: &Theme,
) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);

    // X and Y axis lines
    canvas.draw_line((l as f32, b as f32), (r as f32, b as f32), &axis_paint);
    canvas.draw_line((l as f32, t as f32), (l as f32, b as f32), &axis_paint);

    // Labels
    let mut paint_text = skia::Paint::default();
    paint_text.set_color(theme.axis_label);
    paint_text.set_anti_alias(true);
    let font = label_font(16.0);

    let (xw, _) = font.measure_str(&x.label, None);
    canvas.draw_str(
        &x.label,
        ((l + r) as f32 * 0.5 - xw * 0.5, b as f32 + 44.0),
        &font,
        &paint_text,
    );
    canvas.draw_str(&y.label, (l as f32 - 72.0, t as f32 - 14.0), &font, &paint_text);
}

fn draw_title(canvas: &skia::Canvas, opts: &RenderOptions, title: &str) {
    if title.is_empty() {
        return;
    }
    let mut paint = skia::Paint::default();
    paint.set_color(opts.theme.title);
    paint.set_anti_alias(true);
    let font = label_font(22.0);
    let (w, _) = font.measure_str(title, None);
    canvas.draw_str(
        title,
        (opts.width as f32 * 0.5 - w * 0.5, opts.insets.top as f32 * 0.5 + 8.0),
        &font,
        &paint,
    );
}

fn draw_line_series(
    canvas: &skia::Canvas,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
    x_axis: &Axis,
    y_axis: &Axis,
    series: &Series,
    color: skia::Color,
) {
    let data = &series.data_xy;
    if data.is_empty() {
        return;
    }

    // Scale helpers
    let xspan = (x_axis.max - x_axis.min).max(1e-9);
    let yspan = (y_axis.max - y_axis.min).max(1e-9);
    let sx = |x: f64| -> f32 { l as f32 + ((x - x_axis.min) / xspan) as f32 * (r - l) as f32 };
    let sy = |y: f64| -> f32 { b as f32 - ((y - y_axis.min) / yspan) as f32 * (b - t) as f32 };

    if data.len() >= 2 {
        let mut path = skia::Path::new();
        let (x0, y0) = data[0];
        path.move_to((sx(x0), sy(y0)));
        for &(x, y) in data.iter().skip(1) {
            path.line_to((sx(x), sy(y)));
        }

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(2.0);
        stroke.set_color(color);
        canvas.draw_path(&path, &stroke);
    }

    // Point markers, one per sample
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(color);
    for &(x, y) in data.iter() {
        canvas.draw_circle((sx(x), sy(y)), MARKER_RADIUS, &fill);
    }
}

/// Legend box in the upper-left corner of the plot area: a line sample with a
/// marker dot plus the series name, one row per series. Nothing is drawn for
/// an empty chart.
fn draw_legend(canvas: &skia::Canvas, l: i32, t: i32, series: &[Series], theme: &Theme) {
    if series.is_empty() {
        return;
    }

    let font = label_font(15.0);
    let row_h = 26.0_f32;
    let sample_w = 30.0_f32;
    let pad = 12.0_f32;

    let max_label_w = series
        .iter()
        .map(|s| font.measure_str(&s.name, None).0)
        .fold(0.0_f32, f32::max);

    let box_left = l as f32 + 16.0;
    let box_top = t as f32 + 16.0;
    let box_w = pad + sample_w + 10.0 + max_label_w + pad;
    let box_h = pad + row_h * series.len() as f32 + pad * 0.5;

    let rect = skia::Rect::from_xywh(box_left, box_top, box_w, box_h);
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.legend_fill);
    canvas.draw_rect(rect, &fill);

    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(theme.legend_border);
    canvas.draw_rect(rect, &border);

    let mut text_paint = skia::Paint::default();
    text_paint.set_color(theme.axis_label);
    text_paint.set_anti_alias(true);

    for (i, s) in series.iter().enumerate() {
        let y = box_top + pad + row_h * i as f32 + row_h * 0.5;
        let color = theme.series_color(i);

        let mut line = skia::Paint::default();
        line.set_anti_alias(true);
        line.set_style(skia::paint::Style::Stroke);
        line.set_stroke_width(2.0);
        line.set_color(color);
        canvas.draw_line((box_left + pad, y), (box_left + pad + sample_w, y), &line);

        let mut dot = skia::Paint::default();
        dot.set_anti_alias(true);
        dot.set_style(skia::paint::Style::Fill);
        dot.set_color(color);
        canvas.draw_circle((box_left + pad + sample_w * 0.5, y), MARKER_RADIUS, &dot);

        canvas.draw_str(
            &s.name,
            (box_left + pad + sample_w + 10.0, y + 5.0),
            &font,
            &text_paint,
        );
    }
}
