//! Canvas 2D surface (WASM only)

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Surface;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Wrap a canvas, acquiring its 2D context
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;
        Ok(Self { canvas, ctx })
    }

    fn fill(&self, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f32 {
        self.canvas.width() as f32
    }

    fn height(&self) -> f32 {
        self.canvas.height() as f32
    }

    fn clear_frame(&mut self) {
        let (w, h) = (self.width() as f64, self.height() as f64);
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.ctx.begin_path();
        self.ctx.rect(x as f64, y as f64, w as f64, h as f64);
        self.fill(color);
        self.ctx.close_path();
    }

    fn draw_circle(&mut self, x: f32, y: f32, r: f32, color: &str) {
        self.ctx.begin_path();
        // Radius is never negative, so arc cannot fail
        let _ = self
            .ctx
            .arc(x as f64, y as f64, r as f64, 0.0, std::f64::consts::TAU);
        self.fill(color);
        self.ctx.close_path();
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str) {
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_text(text, x as f64, y as f64).ok();
    }
}
