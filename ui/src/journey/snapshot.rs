//! The "My Reading Journey" image.
//!
//! The layout is written once against [`SnapshotSurface`]; the browser draws
//! it on a 2D canvas and native builds rasterise it with tiny-skia. Either
//! way the result is PNG bytes handed to a [`DownloadSink`].

use tracing::debug;

use crate::core::format::format_percent;
use crate::core::trend::{downsample, ChartFrame};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ExportError {
    /// No drawing context could be created. Exports treat this as a no-op.
    #[error("drawing context unavailable")]
    ContextUnavailable,

    #[error("encoding failed: {0}")]
    Encode(String),

    #[error("delivery failed: {0}")]
    Delivery(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutcome {
    /// `location` is a file path on native builds, `None` for a browser download.
    Downloaded { location: Option<String> },
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
            a: 1.0,
        }
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

const BACKGROUND_FROM: Color = Color::hex(0x1e293b);
const BACKGROUND_TO: Color = Color::hex(0x0f172a);
const TITLE: Color = Color::hex(0xffffff);
const SUBTITLE: Color = Color::hex(0x94a3b8);
const GRID: Color = Color::hex(0x334155);
const ACCENT: Color = Color::hex(0x3b82f6);
const AXIS_LABEL: Color = Color::hex(0x64748b);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub bold: bool,
    pub serif: bool,
    pub color: Color,
    pub align: TextAlign,
}

impl TextStyle {
    pub fn css_font(&self) -> String {
        let weight = if self.bold { "bold " } else { "" };
        let family = if self.serif { "serif" } else { "sans-serif" };
        format!("{weight}{}px {family}", self.size)
    }
}

/// Drawing primitives the snapshot layout needs. `y` for text is the
/// baseline, matching the canvas API.
pub trait SnapshotSurface {
    fn size(&self) -> (f32, f32);
    /// Diagonal gradient from the top-left corner to the bottom-right one.
    fn fill_background(&mut self, from: Color, to: Color);
    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), color: Color, width: f32);
    /// Polygon under `points` closed along `baseline`, filled with a vertical
    /// gradient from `top` at `top_y` to `bottom` at `baseline`.
    fn fill_area(&mut self, points: &[(f32, f32)], top_y: f32, baseline: f32, top: Color, bottom: Color);
    fn stroke_polyline(&mut self, points: &[(f32, f32)], color: Color, width: f32);
    fn fill_circle(&mut self, center: (f32, f32), radius: f32, color: Color);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle);
    fn into_png(self) -> Result<Vec<u8>, ExportError>
    where
        Self: Sized;
}

/// Text drawn on the snapshot, resolved by the caller (localised in the UI).
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotLabels {
    pub title: String,
    pub subtitle: String,
    pub start: String,
    pub end: String,
    pub completion: String,
}

impl SnapshotLabels {
    pub fn english(completion_percent: f64) -> Self {
        Self {
            title: "My Reading Journey".into(),
            subtitle: "The Market's Vote - Data Story".into(),
            start: "Start: 0%".into(),
            end: "End: 100%".into(),
            completion: format!("Completion: {}", format_percent(completion_percent)),
        }
    }
}

const CHART_MARGIN_X: f32 = 50.0;
const CHART_TOP: f32 = 120.0;
const CHART_BOTTOM_RESERVE: f32 = 60.0;
const GRID_ROWS: u32 = 10;

/// Lay out the whole snapshot on `surface`.
pub fn paint_snapshot<S: SnapshotSurface>(surface: &mut S, values: &[f64], labels: &SnapshotLabels) {
    let (width, height) = surface.size();
    surface.fill_background(BACKGROUND_FROM, BACKGROUND_TO);

    surface.fill_text(
        &labels.title,
        width / 2.0,
        50.0,
        &TextStyle {
            size: 32.0,
            bold: true,
            serif: true,
            color: TITLE,
            align: TextAlign::Center,
        },
    );
    surface.fill_text(
        &labels.subtitle,
        width / 2.0,
        80.0,
        &TextStyle {
            size: 16.0,
            bold: false,
            serif: false,
            color: SUBTITLE,
            align: TextAlign::Center,
        },
    );

    let chart_x = CHART_MARGIN_X;
    let chart_y = CHART_TOP;
    let chart_width = width - 2.0 * CHART_MARGIN_X;
    let chart_height = height - CHART_TOP - CHART_BOTTOM_RESERVE;
    let chart_bottom = chart_y + chart_height;

    for row in 0..=GRID_ROWS {
        let y = chart_y + chart_height / GRID_ROWS as f32 * row as f32;
        surface.stroke_line((chart_x, y), (chart_x + chart_width, y), GRID, 0.5);
    }

    if values.len() > 1 {
        let frame = ChartFrame {
            width: chart_width as f64,
            height: chart_height as f64,
        };
        let reduced = downsample(values, chart_width.max(2.0) as usize);
        let points: Vec<(f32, f32)> = frame
            .points(&reduced)
            .into_iter()
            .map(|p| (chart_x + p.x as f32, chart_y + p.y as f32))
            .collect();

        surface.fill_area(
            &points,
            chart_y,
            chart_bottom,
            ACCENT.with_alpha(0.3),
            ACCENT.with_alpha(0.05),
        );
        surface.stroke_polyline(&points, ACCENT, 3.0);
        if let Some(last) = points.last() {
            surface.fill_circle(*last, 5.0, ACCENT);
        }
    } else {
        debug!("Snapshot has a single sample; skipping the trace");
    }

    let axis = |align| TextStyle {
        size: 12.0,
        bold: false,
        serif: false,
        color: AXIS_LABEL,
        align,
    };
    surface.fill_text(&labels.start, chart_x, chart_bottom + 20.0, &axis(TextAlign::Left));
    surface.fill_text(
        &labels.end,
        chart_x + chart_width,
        chart_bottom + 20.0,
        &axis(TextAlign::Right),
    );

    surface.fill_text(
        &labels.completion,
        width / 2.0,
        height - 20.0,
        &TextStyle {
            size: 20.0,
            bold: true,
            serif: false,
            color: TITLE,
            align: TextAlign::Center,
        },
    );
}

/// Create a surface, paint, and encode.
pub fn render_snapshot<S, F>(
    create_surface: F,
    width: u32,
    height: u32,
    values: &[f64],
    labels: &SnapshotLabels,
) -> Result<Vec<u8>, ExportError>
where
    S: SnapshotSurface,
    F: FnOnce(u32, u32) -> Result<S, ExportError>,
{
    let mut surface = create_surface(width, height)?;
    paint_snapshot(&mut surface, values, labels);
    surface.into_png()
}

pub trait DownloadSink {
    /// Returns where the file ended up when that is known.
    fn deliver(&self, file_name: &str, mime: &str, bytes: Vec<u8>) -> Result<Option<String>, ExportError>;
}

/// Render and hand the PNG to `sink`. A missing drawing context yields
/// [`ExportOutcome::Skipped`] and nothing is delivered.
pub fn export_snapshot<S, F, D>(
    create_surface: F,
    sink: &D,
    file_name: &str,
    size: (u32, u32),
    values: &[f64],
    labels: &SnapshotLabels,
) -> Result<ExportOutcome, ExportError>
where
    S: SnapshotSurface,
    F: FnOnce(u32, u32) -> Result<S, ExportError>,
    D: DownloadSink + ?Sized,
{
    let bytes = match render_snapshot(create_surface, size.0, size.1, values, labels) {
        Ok(bytes) => bytes,
        Err(ExportError::ContextUnavailable) => {
            debug!("No drawing context; snapshot export skipped");
            return Ok(ExportOutcome::Skipped);
        }
        Err(err) => return Err(err),
    };
    debug!(bytes = bytes.len(), file_name, "Snapshot rendered");
    let location = sink.deliver(file_name, "image/png", bytes)?;
    Ok(ExportOutcome::Downloaded { location })
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Op {
        Background,
        Line,
        Area(usize),
        Polyline(usize),
        Circle((f32, f32)),
        Text(String, TextAlign),
    }

    pub(crate) struct RecordingSurface {
        pub width: f32,
        pub height: f32,
        pub ops: Vec<Op>,
    }

    impl RecordingSurface {
        pub fn create(width: u32, height: u32) -> Result<Self, ExportError> {
            Ok(Self {
                width: width as f32,
                height: height as f32,
                ops: Vec::new(),
            })
        }
    }

    impl SnapshotSurface for RecordingSurface {
        fn size(&self) -> (f32, f32) {
            (self.width, self.height)
        }
        fn fill_background(&mut self, _from: Color, _to: Color) {
            self.ops.push(Op::Background);
        }
        fn stroke_line(&mut self, _from: (f32, f32), _to: (f32, f32), _color: Color, _width: f32) {
            self.ops.push(Op::Line);
        }
        fn fill_area(&mut self, points: &[(f32, f32)], _: f32, _: f32, _: Color, _: Color) {
            self.ops.push(Op::Area(points.len()));
        }
        fn stroke_polyline(&mut self, points: &[(f32, f32)], _color: Color, _width: f32) {
            self.ops.push(Op::Polyline(points.len()));
        }
        fn fill_circle(&mut self, center: (f32, f32), _radius: f32, _color: Color) {
            self.ops.push(Op::Circle(center));
        }
        fn fill_text(&mut self, text: &str, _x: f32, _y: f32, style: &TextStyle) {
            self.ops.push(Op::Text(text.to_string(), style.align));
        }
        fn into_png(self) -> Result<Vec<u8>, ExportError> {
            Ok(format!("{:?}", self.ops).into_bytes())
        }
    }

    #[derive(Default)]
    pub(crate) struct RecordingSink {
        pub delivered: RefCell<Vec<(String, String, usize)>>,
    }

    impl DownloadSink for RecordingSink {
        fn deliver(&self, file_name: &str, mime: &str, bytes: Vec<u8>) -> Result<Option<String>, ExportError> {
            self.delivered
                .borrow_mut()
                .push((file_name.to_string(), mime.to_string(), bytes.len()));
            Ok(None)
        }
    }

    fn painted(values: &[f64]) -> Vec<Op> {
        let mut surface = RecordingSurface::create(800, 450).unwrap();
        paint_snapshot(&mut surface, values, &SnapshotLabels::english(*values.last().unwrap_or(&0.0)));
        surface.ops
    }

    #[test]
    fn layout_draws_titles_grid_and_labels() {
        let ops = painted(&[0.0, 40.0, 75.0]);
        assert_eq!(ops[0], Op::Background);
        assert_eq!(ops[1], Op::Text("My Reading Journey".into(), TextAlign::Center));
        assert_eq!(ops.iter().filter(|op| **op == Op::Line).count(), 11);
        assert!(ops.contains(&Op::Text("Start: 0%".into(), TextAlign::Left)));
        assert!(ops.contains(&Op::Text("End: 100%".into(), TextAlign::Right)));
        assert_eq!(
            ops.last(),
            Some(&Op::Text("Completion: 75.0%".into(), TextAlign::Center))
        );
    }

    #[test]
    fn trace_needs_two_samples() {
        let ops = painted(&[0.0, 40.0, 75.0]);
        assert!(ops.contains(&Op::Area(3)));
        assert!(ops.contains(&Op::Polyline(3)));
        // End dot sits at the right edge, 75 % up the chart.
        assert!(ops.contains(&Op::Circle((750.0, 120.0 + 270.0 * 0.25))));

        let ops = painted(&[0.0]);
        assert!(!ops.iter().any(|op| matches!(op, Op::Polyline(_) | Op::Area(_) | Op::Circle(_))));
    }

    #[test]
    fn export_delivers_named_png() {
        let sink = RecordingSink::default();
        let outcome = export_snapshot(
            RecordingSurface::create,
            &sink,
            "my-reading-journey.png",
            (800, 450),
            &[0.0, 10.0, 20.0],
            &SnapshotLabels::english(20.0),
        )
        .unwrap();
        assert_eq!(outcome, ExportOutcome::Downloaded { location: None });
        let delivered = sink.delivered.borrow();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].0, "my-reading-journey.png");
        assert_eq!(delivered[0].1, "image/png");
        assert!(delivered[0].2 > 0);
    }

    #[test]
    fn missing_context_skips_silently() {
        let sink = RecordingSink::default();
        let outcome = export_snapshot(
            |_, _| Err::<RecordingSurface, _>(ExportError::ContextUnavailable),
            &sink,
            "my-reading-journey.png",
            (800, 450),
            &[0.0, 10.0],
            &SnapshotLabels::english(10.0),
        );
        assert_eq!(outcome, Ok(ExportOutcome::Skipped));
        assert!(sink.delivered.borrow().is_empty());
    }

    #[test]
    fn encode_errors_propagate() {
        struct Broken;
        impl SnapshotSurface for Broken {
            fn size(&self) -> (f32, f32) {
                (10.0, 10.0)
            }
            fn fill_background(&mut self, _: Color, _: Color) {}
            fn stroke_line(&mut self, _: (f32, f32), _: (f32, f32), _: Color, _: f32) {}
            fn fill_area(&mut self, _: &[(f32, f32)], _: f32, _: f32, _: Color, _: Color) {}
            fn stroke_polyline(&mut self, _: &[(f32, f32)], _: Color, _: f32) {}
            fn fill_circle(&mut self, _: (f32, f32), _: f32, _: Color) {}
            fn fill_text(&mut self, _: &str, _: f32, _: f32, _: &TextStyle) {}
            fn into_png(self) -> Result<Vec<u8>, ExportError> {
                Err(ExportError::Encode("boom".into()))
            }
        }

        let sink = RecordingSink::default();
        let outcome = export_snapshot(
            |_, _| Ok(Broken),
            &sink,
            "x.png",
            (10, 10),
            &[0.0, 1.0],
            &SnapshotLabels::english(1.0),
        );
        assert_eq!(outcome, Err(ExportError::Encode("boom".into())));
        assert!(sink.delivered.borrow().is_empty());
    }

    #[test]
    fn colors_render_as_css() {
        assert_eq!(Color::hex(0x3b82f6).with_alpha(0.3).css(), "rgba(59, 130, 246, 0.3)");
        let style = TextStyle {
            size: 32.0,
            bold: true,
            serif: true,
            color: TITLE,
            align: TextAlign::Center,
        };
        assert_eq!(style.css_font(), "bold 32px serif");
    }
}
