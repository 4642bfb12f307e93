//! Static Bar Chart Renderers
//!
//! Horizontal bar charts drawn straight onto a bitmap backend, one PNG per
//! call. Layout is three bands: a title band on top, the plot band, and a
//! caption band along the bottom. Labels are drawn directly on the data
//! (names before each bar, values after it) instead of a legend.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};
use std::path::Path;
use thiserror::Error;

use super::style::{contrast_ink, Theme};

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("no rows to draw")]
    Empty,
    #[error("all values are zero or negative, nothing to scale")]
    NoExtent,
    #[error("rendering failed: {0}")]
    Backend(String),
}

fn backend_err(e: impl std::fmt::Display) -> ChartError {
    ChartError::Backend(e.to_string())
}

type Canvas<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// One bar of a plain bar chart.
pub struct BarRow {
    pub label: String,
    pub value: f64,
}

/// One colored piece of a stacked bar.
pub struct Segment {
    pub label: String,
    pub value: f64,
    pub color: RGBColor,
}

/// One stacked bar: a row label plus its segments in stacking order.
pub struct StackedRow {
    pub label: String,
    pub segments: Vec<Segment>,
}

impl StackedRow {
    pub fn total(&self) -> f64 {
        self.segments.iter().map(|s| s.value).sum()
    }
}

/// Horizontal bar chart with direct value labels.
pub struct BarChart {
    pub title: String,
    pub subtitle: String,
    pub caption: String,
    pub x_label: String,
    pub theme: Theme,
    pub bar_color: RGBColor,
    /// Pixels reserved left of the axis for row labels.
    pub label_gutter: u32,
    /// Drawn top to bottom in the order given.
    pub rows: Vec<BarRow>,
}

impl Default for BarChart {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            caption: String::new(),
            x_label: String::new(),
            theme: Theme::minimal(),
            bar_color: super::style::rgb(0x3A7CA5),
            label_gutter: 240,
            rows: Vec::new(),
        }
    }
}

impl BarChart {
    /// Render to `path` as a PNG of the given pixel size.
    ///
    /// Validation happens before the backend is created, so a bad chart
    /// never touches the output file.
    pub fn render(&self, path: &Path, size: (u32, u32)) -> Result<(), ChartError> {
        if self.rows.is_empty() {
            return Err(ChartError::Empty);
        }
        let max = self.rows.iter().map(|r| r.value).fold(0.0, f64::max);
        if max <= 0.0 {
            return Err(ChartError::NoExtent);
        }

        let root = BitMapBackend::new(path, size).into_drawing_area();
        root.fill(&self.theme.background).map_err(backend_err)?;

        let frame = Frame::fit(size, self.label_gutter, max);
        draw_chrome(
            &root,
            &self.theme,
            &frame,
            &self.title,
            &self.subtitle,
            &self.caption,
            &self.x_label,
        )?;

        let row_h = frame.row_height(self.rows.len());
        let bar_h = (f64::from(row_h) * 0.7) as i32;
        let name_style = ("sans-serif", 16)
            .into_font()
            .color(&self.theme.ink)
            .pos(Pos::new(HPos::Right, VPos::Center));
        let value_style = ("sans-serif", 14)
            .into_font()
            .color(&self.theme.muted)
            .pos(Pos::new(HPos::Left, VPos::Center));

        for (i, row) in self.rows.iter().enumerate() {
            let y0 = frame.top + i as i32 * row_h + (row_h - bar_h) / 2;
            let yc = y0 + bar_h / 2;
            let x1 = frame.x(row.value);

            root.draw(&Rectangle::new(
                [(frame.left, y0), (x1, y0 + bar_h)],
                self.bar_color.filled(),
            ))
            .map_err(backend_err)?;
            root.draw(&Text::new(
                row.label.clone(),
                (frame.left - 12, yc),
                name_style.clone(),
            ))
            .map_err(backend_err)?;
            root.draw(&Text::new(
                format_count(row.value),
                (x1 + 8, yc),
                value_style.clone(),
            ))
            .map_err(backend_err)?;
        }

        root.present().map_err(backend_err)?;
        Ok(())
    }
}

/// Horizontal stacked bar chart with per-segment colors and direct labels.
pub struct StackedBarChart {
    pub title: String,
    pub subtitle: String,
    pub caption: String,
    pub x_label: String,
    pub theme: Theme,
    /// Pixels reserved left of the axis for row labels.
    pub label_gutter: u32,
    /// Segments at least this large (in data units) get a direct label.
    pub label_threshold: f64,
    /// Drawn top to bottom in the order given.
    pub rows: Vec<StackedRow>,
}

impl Default for StackedBarChart {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            caption: String::new(),
            x_label: String::new(),
            theme: Theme::cosmic(),
            label_gutter: 240,
            label_threshold: 5.0,
            rows: Vec::new(),
        }
    }
}

impl StackedBarChart {
    /// Render to `path` as a PNG of the given pixel size.
    pub fn render(&self, path: &Path, size: (u32, u32)) -> Result<(), ChartError> {
        if self.rows.is_empty() {
            return Err(ChartError::Empty);
        }
        let max = self.rows.iter().map(StackedRow::total).fold(0.0, f64::max);
        if max <= 0.0 {
            return Err(ChartError::NoExtent);
        }

        let root = BitMapBackend::new(path, size).into_drawing_area();
        root.fill(&self.theme.background).map_err(backend_err)?;

        let frame = Frame::fit(size, self.label_gutter, max);
        draw_chrome(
            &root,
            &self.theme,
            &frame,
            &self.title,
            &self.subtitle,
            &self.caption,
            &self.x_label,
        )?;

        let row_h = frame.row_height(self.rows.len());
        let bar_h = (f64::from(row_h) * 0.7) as i32;
        let name_style = ("sans-serif", 16)
            .into_font()
            .color(&self.theme.ink)
            .pos(Pos::new(HPos::Right, VPos::Center));
        let total_style = ("sans-serif", 14)
            .into_font()
            .color(&self.theme.muted)
            .pos(Pos::new(HPos::Left, VPos::Center));

        for (i, row) in self.rows.iter().enumerate() {
            let y0 = frame.top + i as i32 * row_h + (row_h - bar_h) / 2;
            let yc = y0 + bar_h / 2;
            let mut cursor = 0.0;

            for segment in &row.segments {
                if segment.value <= 0.0 {
                    continue;
                }
                let x0 = frame.x(cursor);
                cursor += segment.value;
                let x1 = frame.x(cursor);

                root.draw(&Rectangle::new(
                    [(x0, y0), (x1, y0 + bar_h)],
                    segment.color.filled(),
                ))
                .map_err(backend_err)?;
                // hairline gap between neighboring segments
                root.draw(&Rectangle::new(
                    [(x0, y0), (x1, y0 + bar_h)],
                    &self.theme.background,
                ))
                .map_err(backend_err)?;

                if segment.value >= self.label_threshold {
                    let ink = contrast_ink(&segment.color);
                    let style = ("sans-serif", 13)
                        .into_font()
                        .color(&ink)
                        .pos(Pos::new(HPos::Center, VPos::Center));
                    root.draw(&Text::new(segment.label.clone(), ((x0 + x1) / 2, yc), style))
                        .map_err(backend_err)?;
                }
            }

            root.draw(&Text::new(
                row.label.clone(),
                (frame.left - 12, yc),
                name_style.clone(),
            ))
            .map_err(backend_err)?;
            root.draw(&Text::new(
                format_count(row.total()),
                (frame.x(cursor) + 8, yc),
                total_style.clone(),
            ))
            .map_err(backend_err)?;
        }

        root.present().map_err(backend_err)?;
        Ok(())
    }
}

/// Plot-band geometry and the data-to-pixel x mapping.
struct Frame {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
    x_max: f64,
    step: f64,
}

impl Frame {
    /// Fit the plot band inside the image, rounding the axis end up to a
    /// whole tick so the last bar never touches the edge labels.
    fn fit(size: (u32, u32), label_gutter: u32, max: f64) -> Self {
        let (w, h) = size;
        let step = nice_step(max, 5);
        let x_max = (max / step).ceil() * step;
        Self {
            left: label_gutter as i32,
            top: 110,
            right: w as i32 - 70,
            bottom: h as i32 - 80,
            x_max,
            step,
        }
    }

    fn x(&self, value: f64) -> i32 {
        let ratio = value.clamp(0.0, self.x_max) / self.x_max;
        self.left + (ratio * f64::from(self.right - self.left)).round() as i32
    }

    fn row_height(&self, rows: usize) -> i32 {
        (self.bottom - self.top) / rows as i32
    }
}

/// Title band, caption band, x axis with ticks.
fn draw_chrome(
    root: &Canvas<'_>,
    theme: &Theme,
    frame: &Frame,
    title: &str,
    subtitle: &str,
    caption: &str,
    x_label: &str,
) -> Result<(), ChartError> {
    let (w, h) = root.dim_in_pixel();
    let center = w as i32 / 2;

    let title_style = FontDesc::new(FontFamily::SansSerif, 34.0, FontStyle::Bold)
        .color(&theme.ink)
        .pos(Pos::new(HPos::Center, VPos::Top));
    root.draw(&Text::new(title.to_string(), (center, 22), title_style))
        .map_err(backend_err)?;

    if !subtitle.is_empty() {
        let subtitle_style = ("sans-serif", 18)
            .into_font()
            .color(&theme.muted)
            .pos(Pos::new(HPos::Center, VPos::Top));
        root.draw(&Text::new(subtitle.to_string(), (center, 66), subtitle_style))
            .map_err(backend_err)?;
    }

    if !caption.is_empty() {
        let caption_style = FontDesc::new(FontFamily::SansSerif, 14.0, FontStyle::Italic)
            .color(&theme.muted)
            .pos(Pos::new(HPos::Right, VPos::Bottom));
        root.draw(&Text::new(
            caption.to_string(),
            (w as i32 - 24, h as i32 - 14),
            caption_style,
        ))
        .map_err(backend_err)?;
    }

    // baseline
    root.draw(&PathElement::new(
        vec![(frame.left, frame.bottom), (frame.right, frame.bottom)],
        &theme.faint,
    ))
    .map_err(backend_err)?;

    // ticks at nice intervals, 0 included
    let tick_style = ("sans-serif", 13)
        .into_font()
        .color(&theme.muted)
        .pos(Pos::new(HPos::Center, VPos::Top));
    let ticks = (frame.x_max / frame.step).round() as i64;
    for tick in 0..=ticks {
        let value = tick as f64 * frame.step;
        let x = frame.x(value);
        root.draw(&PathElement::new(
            vec![(x, frame.bottom), (x, frame.bottom + 5)],
            &theme.faint,
        ))
        .map_err(backend_err)?;
        root.draw(&Text::new(
            format_count(value),
            (x, frame.bottom + 9),
            tick_style.clone(),
        ))
        .map_err(backend_err)?;
    }

    if !x_label.is_empty() {
        let x_label_style = ("sans-serif", 14)
            .into_font()
            .color(&theme.muted)
            .pos(Pos::new(HPos::Center, VPos::Top));
        root.draw(&Text::new(
            x_label.to_string(),
            ((frame.left + frame.right) / 2, frame.bottom + 34),
            x_label_style,
        ))
        .map_err(backend_err)?;
    }

    Ok(())
}

fn format_count(value: f64) -> String {
    format!("{value:.0}")
}

/// Round a raw interval up to 1/2/5 times a power of ten.
fn nice_step(range: f64, target_steps: usize) -> f64 {
    let raw_step = range / target_steps as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;

    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice * magnitude
}
