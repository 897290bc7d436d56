//! Native snapshot surface on a tiny-skia pixmap, encoded with `png`.

use tiny_skia::{
    FillRule, GradientStop, LinearGradient, Paint, PathBuilder, Pixmap, Rect, SpreadMode, Stroke,
    Transform,
};

use super::glyphs::{glyph, lit_cells, text_cells, GLYPH_COLUMNS, GLYPH_GAP, GLYPH_ROWS, SPACE_ADVANCE};
use super::snapshot::{Color, ExportError, SnapshotSurface, TextAlign, TextStyle};

/// Font size to glyph cell ratio; a 7-row glyph then spans roughly the
/// cap height of the requested size.
const CELL_DIVISOR: f32 = 9.0;

pub struct PixmapSurface {
    pixmap: Pixmap,
}

impl PixmapSurface {
    pub fn new(width: u32, height: u32) -> Result<Self, ExportError> {
        Pixmap::new(width, height)
            .map(|pixmap| Self { pixmap })
            .ok_or(ExportError::ContextUnavailable)
    }

    fn solid(color: Color) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(skia_color(color));
        paint.anti_alias = true;
        paint
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, paint: &Paint) {
        if let Some(rect) = Rect::from_xywh(x, y, w, h) {
            self.pixmap.fill_rect(rect, paint, Transform::identity(), None);
        }
    }
}

fn skia_color(color: Color) -> tiny_skia::Color {
    let alpha = (color.a.clamp(0.0, 1.0) * 255.0).round() as u8;
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, alpha)
}

fn linear_gradient(
    start: (f32, f32),
    end: (f32, f32),
    from: Color,
    to: Color,
) -> Option<tiny_skia::Shader<'static>> {
    LinearGradient::new(
        tiny_skia::Point::from_xy(start.0, start.1),
        tiny_skia::Point::from_xy(end.0, end.1),
        vec![
            GradientStop::new(0.0, skia_color(from)),
            GradientStop::new(1.0, skia_color(to)),
        ],
        SpreadMode::Pad,
        Transform::identity(),
    )
}

fn polyline(points: &[(f32, f32)]) -> Option<PathBuilder> {
    let (first, rest) = points.split_first()?;
    let mut builder = PathBuilder::new();
    builder.move_to(first.0, first.1);
    for (x, y) in rest {
        builder.line_to(*x, *y);
    }
    Some(builder)
}

impl SnapshotSurface for PixmapSurface {
    fn size(&self) -> (f32, f32) {
        (self.pixmap.width() as f32, self.pixmap.height() as f32)
    }

    fn fill_background(&mut self, from: Color, to: Color) {
        let (width, height) = self.size();
        let mut paint = Paint::default();
        match linear_gradient((0.0, 0.0), (width, height), from, to) {
            Some(shader) => paint.shader = shader,
            None => paint.set_color(skia_color(from)),
        }
        self.fill_rect(0.0, 0.0, width, height, &paint);
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), color: Color, width: f32) {
        let mut builder = PathBuilder::new();
        builder.move_to(from.0, from.1);
        builder.line_to(to.0, to.1);
        if let Some(path) = builder.finish() {
            let stroke = Stroke {
                width,
                ..Stroke::default()
            };
            self.pixmap
                .stroke_path(&path, &Self::solid(color), &stroke, Transform::identity(), None);
        }
    }

    fn fill_area(&mut self, points: &[(f32, f32)], top_y: f32, baseline: f32, top: Color, bottom: Color) {
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return;
        };
        let Some(mut builder) = polyline(points) else {
            return;
        };
        builder.line_to(last.0, baseline);
        builder.line_to(first.0, baseline);
        builder.close();
        let Some(path) = builder.finish() else {
            return;
        };

        let mut paint = Paint::default();
        paint.anti_alias = true;
        match linear_gradient((0.0, top_y), (0.0, baseline), top, bottom) {
            Some(shader) => paint.shader = shader,
            None => paint.set_color(skia_color(top)),
        }
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    fn stroke_polyline(&mut self, points: &[(f32, f32)], color: Color, width: f32) {
        let Some(path) = polyline(points).and_then(PathBuilder::finish) else {
            return;
        };
        let stroke = Stroke {
            width,
            line_cap: tiny_skia::LineCap::Round,
            line_join: tiny_skia::LineJoin::Round,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &Self::solid(color), &stroke, Transform::identity(), None);
    }

    fn fill_circle(&mut self, center: (f32, f32), radius: f32, color: Color) {
        if let Some(path) = PathBuilder::from_circle(center.0, center.1, radius) {
            self.pixmap.fill_path(
                &path,
                &Self::solid(color),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        // Whole-pixel cells; fractional anti-aliased rects trip tiny-skia's
        // hairline scanner.
        let cell = (style.size / CELL_DIVISOR).round().max(1.0);
        let width = text_cells(text) as f32 * cell;
        let mut cursor = match style.align {
            TextAlign::Left => x,
            TextAlign::Center => x - width / 2.0,
            TextAlign::Right => x - width,
        }
        .round();
        let top = (y - GLYPH_ROWS as f32 * cell).round();
        // Bold widens each cell by half.
        let ink = if style.bold { (cell * 1.5).round() } else { cell };
        let mut paint = Self::solid(style.color);
        paint.anti_alias = false;

        for ch in text.chars() {
            match glyph(ch) {
                Some(rows) => {
                    for (col, row) in lit_cells(&rows) {
                        self.fill_rect(
                            cursor + col as f32 * cell,
                            top + row as f32 * cell,
                            ink,
                            cell,
                            &paint,
                        );
                    }
                    cursor += (GLYPH_COLUMNS + GLYPH_GAP) as f32 * cell;
                }
                None => cursor += (SPACE_ADVANCE + GLYPH_GAP) as f32 * cell,
            }
        }
    }

    fn into_png(self) -> Result<Vec<u8>, ExportError> {
        let width = self.pixmap.width();
        let height = self.pixmap.height();
        let mut rgba = Vec::with_capacity((width * height * 4) as usize);
        for pixel in self.pixmap.pixels() {
            let color = pixel.demultiply();
            rgba.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
        }

        let mut buffer = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buffer, width, height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            encoder
                .write_header()
                .map_err(|err| ExportError::Encode(err.to_string()))?
                .write_image_data(&rgba)
                .map_err(|err| ExportError::Encode(err.to_string()))?;
        }
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journey::snapshot::{export_snapshot, render_snapshot, ExportOutcome, SnapshotLabels};
    use crate::journey::snapshot::tests::RecordingSink;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    fn pixel(surface: &PixmapSurface, x: u32, y: u32) -> (u8, u8, u8) {
        let color = surface
            .pixmap
            .pixel(x, y)
            .expect("pixel in bounds")
            .demultiply();
        (color.red(), color.green(), color.blue())
    }

    #[test]
    fn renders_a_png_of_the_requested_size() {
        let bytes = render_snapshot(
            PixmapSurface::new,
            800,
            450,
            &[0.0, 12.0, 30.0, 55.0],
            &SnapshotLabels::english(55.0),
        )
        .expect("render");
        assert_eq!(&bytes[..8], &PNG_SIGNATURE);
        // IHDR width and height, big endian.
        assert_eq!(&bytes[16..20], &800u32.to_be_bytes());
        assert_eq!(&bytes[20..24], &450u32.to_be_bytes());
    }

    #[test]
    fn background_runs_diagonally_from_slate_to_night() {
        let mut surface = PixmapSurface::new(40, 100).unwrap();
        surface.fill_background(Color::hex(0x1e293b), Color::hex(0x0f172a));
        let (r_top, _, _) = pixel(&surface, 0, 0);
        let (r_bottom, _, _) = pixel(&surface, 39, 99);
        assert!(r_top > r_bottom);
        assert!((0x0f..=0x1e).contains(&r_top));
    }

    #[test]
    fn text_inks_cells_around_the_anchor() {
        let mut surface = PixmapSurface::new(100, 40).unwrap();
        let style = TextStyle {
            size: 18.0,
            bold: false,
            serif: false,
            color: Color::hex(0xffffff),
            align: TextAlign::Left,
        };
        surface.fill_text("-", 10.0, 30.0, &style);
        // '-' lights row 3 of 7; cell is 2 px so the bar spans y 22..24.
        assert_eq!(pixel(&surface, 11, 23), (255, 255, 255));
        assert_eq!(pixel(&surface, 11, 17), (0, 0, 0));
    }

    #[test]
    fn fractional_text_sizes_snap_to_whole_pixels() {
        let mut surface = PixmapSurface::new(200, 60).unwrap();
        for (size, bold) in [(12.0, false), (13.5, true), (22.0, true), (8.0, false)] {
            let style = TextStyle {
                size,
                bold,
                serif: false,
                color: Color::hex(0xffffff),
                align: TextAlign::Center,
            };
            surface.fill_text("Completion: 42.2%", 100.3, 40.7, &style);
        }
        // size 12 -> 1 px cells, so '-' and digits ink fully opaque pixels.
        let lit = surface
            .pixmap
            .pixels()
            .iter()
            .filter(|p| p.demultiply().alpha() == 255 && p.demultiply().red() == 255)
            .count();
        assert!(lit > 0);
    }

    #[test]
    fn snapshot_text_renders_without_partial_coverage() {
        let mut surface = PixmapSurface::new(60, 30).unwrap();
        let style = TextStyle {
            size: 12.0,
            bold: false,
            serif: false,
            color: Color::hex(0xffffff),
            align: TextAlign::Left,
        };
        surface.fill_text("88", 3.4, 20.6, &style);
        assert!(surface.pixmap.pixels().iter().all(|p| {
            let alpha = p.demultiply().alpha();
            alpha == 0 || alpha == 255
        }));
    }

    #[test]
    fn zero_sized_pixmap_is_skipped() {
        let sink = RecordingSink::default();
        let outcome = export_snapshot(
            PixmapSurface::new,
            &sink,
            "my-reading-journey.png",
            (0, 0),
            &[0.0, 5.0],
            &SnapshotLabels::english(5.0),
        );
        assert_eq!(outcome, Ok(ExportOutcome::Skipped));
        assert!(sink.delivered.borrow().is_empty());
    }
}
