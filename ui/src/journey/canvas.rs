//! Browser snapshot surface on an off-screen 2D canvas.

use base64::Engine as _;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::snapshot::{Color, ExportError, SnapshotSurface, TextStyle};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Any failure to obtain the canvas or its 2D context reports
    /// [`ExportError::ContextUnavailable`].
    pub fn new(width: u32, height: u32) -> Result<Self, ExportError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ExportError::ContextUnavailable)?;
        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|_| ExportError::ContextUnavailable)?
            .dyn_into()
            .map_err(|_| ExportError::ContextUnavailable)?;
        canvas.set_width(width);
        canvas.set_height(height);

        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(|_| ExportError::ContextUnavailable)?
            .ok_or(ExportError::ContextUnavailable)?
            .dyn_into()
            .map_err(|_| ExportError::ContextUnavailable)?;

        Ok(Self { canvas, context })
    }

    fn trace(&self, points: &[(f32, f32)]) -> bool {
        let Some((first, rest)) = points.split_first() else {
            return false;
        };
        self.context.begin_path();
        self.context.move_to(first.0 as f64, first.1 as f64);
        for (x, y) in rest {
            self.context.line_to(*x as f64, *y as f64);
        }
        true
    }

    fn gradient_fill(&self, start: (f32, f32), end: (f32, f32), from: Color, to: Color) {
        let gradient = self.context.create_linear_gradient(
            start.0 as f64,
            start.1 as f64,
            end.0 as f64,
            end.1 as f64,
        );
        let stops = gradient
            .add_color_stop(0.0, &from.css())
            .and_then(|_| gradient.add_color_stop(1.0, &to.css()));
        match stops {
            Ok(()) => self.context.set_fill_style_canvas_gradient(&gradient),
            Err(_) => self.context.set_fill_style_str(&from.css()),
        }
    }
}

impl SnapshotSurface for CanvasSurface {
    fn size(&self) -> (f32, f32) {
        (self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn fill_background(&mut self, from: Color, to: Color) {
        let (width, height) = self.size();
        self.gradient_fill((0.0, 0.0), (width, height), from, to);
        self.context.fill_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), color: Color, width: f32) {
        self.context.set_stroke_style_str(&color.css());
        self.context.set_line_width(width as f64);
        self.context.begin_path();
        self.context.move_to(from.0 as f64, from.1 as f64);
        self.context.line_to(to.0 as f64, to.1 as f64);
        self.context.stroke();
    }

    fn fill_area(&mut self, points: &[(f32, f32)], top_y: f32, baseline: f32, top: Color, bottom: Color) {
        let (Some(first), Some(last)) = (points.first(), points.last()) else {
            return;
        };
        if !self.trace(points) {
            return;
        }
        self.context.line_to(last.0 as f64, baseline as f64);
        self.context.line_to(first.0 as f64, baseline as f64);
        self.context.close_path();
        self.gradient_fill((0.0, top_y), (0.0, baseline), top, bottom);
        self.context.fill();
    }

    fn stroke_polyline(&mut self, points: &[(f32, f32)], color: Color, width: f32) {
        if !self.trace(points) {
            return;
        }
        self.context.set_stroke_style_str(&color.css());
        self.context.set_line_width(width as f64);
        self.context.set_line_cap("round");
        self.context.set_line_join("round");
        self.context.stroke();
    }

    fn fill_circle(&mut self, center: (f32, f32), radius: f32, color: Color) {
        self.context.begin_path();
        if self
            .context
            .arc(
                center.0 as f64,
                center.1 as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .is_ok()
        {
            self.context.set_fill_style_str(&color.css());
            self.context.fill();
        }
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        self.context.set_font(&style.css_font());
        self.context.set_text_align(style.align.css());
        self.context.set_fill_style_str(&style.color.css());
        self.context.fill_text(text, x as f64, y as f64).ok();
    }

    fn into_png(self) -> Result<Vec<u8>, ExportError> {
        let data_url = self
            .canvas
            .to_data_url_with_type("image/png")
            .map_err(|_| ExportError::Encode("unable to serialise canvas".into()))?;
        let payload = data_url
            .split(',')
            .nth(1)
            .ok_or_else(|| ExportError::Encode("malformed data URL".into()))?;
        base64::engine::general_purpose::STANDARD
            .decode(payload)
            .map_err(|err| ExportError::Encode(err.to_string()))
    }
}
