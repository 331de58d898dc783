use crate::dom;
use cube_render::{physical_size, Renderer};
use viewport_core::RenderSurface;
use web_sys as web;

/// The canvas plus the renderer drawing into it. Resizing sets the canvas
/// backing store to the container size in device pixels before the renderer
/// reconfigures.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    pub renderer: Renderer,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement, renderer: Renderer) -> Self {
        Self { canvas, renderer }
    }
}

impl RenderSurface for CanvasSurface {
    fn set_size(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            let dpr = dom::device_pixel_ratio();
            let (px_w, px_h) = physical_size(width, height, dpr);
            self.canvas.set_width(px_w);
            self.canvas.set_height(px_h);
            self.renderer.set_pixel_ratio(dpr);
        }
        self.renderer.set_size(width, height);
    }
}
