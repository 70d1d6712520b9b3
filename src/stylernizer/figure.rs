//! A small vector figure used by the built-in gallery.
//!
//! [`Figure`] takes its canvas size and look from the [`RenderState`] it was
//! created with, collects line and bar series, and draws itself through the
//! plotters SVG backend. Styles it does not recognise are ignored.

use crate::error::{Result, StylernizerError};
use crate::model::ARTIFACT_EXTENSION;
use crate::render::{Artifact, RenderState};
use crate::viewer;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::fmt::Display;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Pixels per inch.
const DPI: f64 = 72.0;
const MARGIN: i32 = 36;
const TITLE_HEIGHT: i32 = 20;
const TITLE_SIZE: f64 = 14.0;

#[derive(Debug, Clone, PartialEq)]
struct Palette {
    background: RGBColor,
    foreground: RGBColor,
    colors: &'static [RGBColor],
    grid: bool,
}

const DEFAULT_COLORS: &[RGBColor] = &[
    RGBColor(0x1f, 0x77, 0xb4),
    RGBColor(0xff, 0x7f, 0x0e),
    RGBColor(0x2c, 0xa0, 0x2c),
    RGBColor(0xd6, 0x27, 0x28),
    RGBColor(0x94, 0x67, 0xbd),
];
const DARK_COLORS: &[RGBColor] = &[
    RGBColor(0x8d, 0xd3, 0xc7),
    RGBColor(0xfe, 0xff, 0xb3),
    RGBColor(0xbf, 0xbb, 0xd9),
    RGBColor(0xfa, 0x81, 0x74),
    RGBColor(0x81, 0xb1, 0xd2),
];
const GRAY_COLORS: &[RGBColor] = &[
    RGBColor(0x00, 0x00, 0x00),
    RGBColor(0x55, 0x55, 0x55),
    RGBColor(0x88, 0x88, 0x88),
    RGBColor(0xbb, 0xbb, 0xbb),
];

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: WHITE,
            foreground: BLACK,
            colors: DEFAULT_COLORS,
            grid: false,
        }
    }
}

impl Palette {
    /// Applies styles in order; later styles override earlier ones.
    fn from_styles(styles: &[String]) -> Self {
        let mut palette = Palette::default();
        for style in styles {
            match style.as_str() {
                "default" | "classic" => palette = Palette::default(),
                "dark_background" => {
                    palette.background = BLACK;
                    palette.foreground = WHITE;
                    palette.colors = DARK_COLORS;
                }
                "grayscale" => palette.colors = GRAY_COLORS,
                "grid" | "whitegrid" => palette.grid = true,
                _ => {}
            }
        }
        palette
    }

    fn color(&self, index: usize) -> RGBColor {
        self.colors[index % self.colors.len()]
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Series {
    Line {
        label: String,
        points: Vec<(f64, f64)>,
    },
    Bars {
        label: String,
        bars: Vec<(f64, f64)>,
    },
}

impl Series {
    fn points(&self) -> &[(f64, f64)] {
        match self {
            Series::Line { points, .. } => points,
            Series::Bars { bars, .. } => bars,
        }
    }

    fn label(&self) -> &str {
        match self {
            Series::Line { label, .. } | Series::Bars { label, .. } => label,
        }
    }
}

fn draw_error(e: impl Display) -> StylernizerError {
    StylernizerError::Artifact(format!("Failed to draw figure: {}", e))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    title: String,
    size: (f64, f64),
    palette: Palette,
    series: Vec<Series>,
}

impl Figure {
    pub fn new(state: &RenderState, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            size: state.figsize(),
            palette: Palette::from_styles(state.styles()),
            series: Vec::new(),
        }
    }

    /// Size in inches, width first.
    pub fn size(&self) -> (f64, f64) {
        self.size
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    pub fn line<I>(&mut self, label: impl Into<String>, points: I) -> &mut Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        self.series.push(Series::Line {
            label: label.into(),
            points: points.into_iter().filter(|(x, y)| x.is_finite() && y.is_finite()).collect(),
        });
        self
    }

    /// Bars centred on each `x`, rising from zero to `y`.
    pub fn bars<I>(&mut self, label: impl Into<String>, bars: I) -> &mut Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        self.series.push(Series::Bars {
            label: label.into(),
            bars: bars.into_iter().filter(|(x, y)| x.is_finite() && y.is_finite()).collect(),
        });
        self
    }

    fn data_bounds(&self) -> Option<((f64, f64), (f64, f64))> {
        let mut points = self.series.iter().flat_map(|s| s.points().iter().copied()).peekable();
        points.peek()?;

        let (mut x0, mut x1, mut y0, mut y1) = (f64::MAX, f64::MIN, f64::MAX, f64::MIN);
        for (x, y) in points {
            x0 = x0.min(x);
            x1 = x1.max(x);
            y0 = y0.min(y);
            y1 = y1.max(y);
        }
        if self.series.iter().any(|s| matches!(s, Series::Bars { .. })) {
            x0 -= 0.5;
            x1 += 0.5;
            y0 = y0.min(0.0);
            y1 = y1.max(0.0);
        }
        if x1 - x0 < f64::EPSILON {
            x0 -= 0.5;
            x1 += 0.5;
        }
        if y1 - y0 < f64::EPSILON {
            y0 -= 0.5;
            y1 += 0.5;
        }
        Some(((x0, x1), (y0, y1)))
    }

    /// Canvas size in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        let px = |inches: f64| (inches * DPI).round().max(1.0) as u32;
        (px(self.size.0), px(self.size.1))
    }

    /// Draws the figure and returns the SVG document.
    pub fn render(&self) -> Result<String> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, self.pixel_size()).into_drawing_area();
            self.draw(&root)?;
            root.present().map_err(draw_error)?;
        }
        Ok(svg)
    }

    fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, plotters::coord::Shift>) -> Result<()> {
        let p = &self.palette;
        root.fill(&p.background).map_err(draw_error)?;

        let (width, height) = root.dim_in_pixel();
        // Small canvases shrink the margins instead of inverting the plot area
        let margin = MARGIN.min((width.min(height) / 6) as i32);
        let title_style = ("sans-serif", TITLE_SIZE)
            .into_font()
            .color(&p.foreground)
            .pos(Pos::new(HPos::Center, VPos::Top));
        root.draw(&Text::new(
            self.title.clone(),
            ((width / 2) as i32, margin / 2),
            title_style,
        ))
        .map_err(draw_error)?;

        let Some(((x0, x1), (y0, y1))) = self.data_bounds() else {
            return Ok(());
        };

        let mut chart = ChartBuilder::on(root)
            .margin(margin)
            .margin_top(margin + TITLE_HEIGHT.min(margin))
            .build_cartesian_2d(x0..x1, y0..y1)
            .map_err(draw_error)?;
        let area = chart.plotting_area();

        area.draw(&Rectangle::new([(x0, y0), (x1, y1)], p.foreground.stroke_width(1)))
            .map_err(draw_error)?;
        if p.grid {
            for i in 1..5 {
                let y = y0 + (y1 - y0) * f64::from(i) / 5.0;
                area.draw(&PathElement::new(
                    vec![(x0, y), (x1, y)],
                    p.foreground.mix(0.2).stroke_width(1),
                ))
                .map_err(draw_error)?;
            }
        }

        for (i, series) in self.series.iter().enumerate() {
            debug!("drawing series {}", series.label());
            let color = p.color(i);
            match series {
                Series::Line { points, .. } => {
                    chart
                        .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(2)))
                        .map_err(draw_error)?;
                }
                Series::Bars { bars, .. } => {
                    let half = (x1 - x0) / (bars.len() as f64 + 1.0) * 0.4;
                    chart
                        .draw_series(bars.iter().map(|&(x, y)| {
                            Rectangle::new([(x - half, 0.0), (x + half, y)], color.filled())
                        }))
                        .map_err(draw_error)?;
                }
            }
        }
        Ok(())
    }
}

impl Artifact for Figure {
    fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render()?)?;
        Ok(())
    }

    fn show(&self) -> Result<()> {
        viewer::open_contents(&self.title, ARTIFACT_EXTENSION, &self.render()?)?;
        Ok(())
    }

    fn dispose(&mut self) -> Result<()> {
        self.series.clear();
        self.series.shrink_to_fit();
        Ok(())
    }
}
