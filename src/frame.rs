use crate::dom::DomControls;
use crate::surface::CanvasSurface;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use viewport_core::{FrameScheduler, FrameStep, Tick, ViewportContext};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedContext = Rc<RefCell<ViewportContext<CanvasSurface>>>;

/// Runs steps on `requestAnimationFrame`. Each frame requests the next only
/// while the step asks to continue, so a stopped step leaves nothing behind.
#[derive(Clone, Copy, Default)]
pub struct RafScheduler;

impl FrameScheduler for RafScheduler {
    fn schedule(&self, step: FrameStep) {
        request_frame(step);
    }
}

fn request_frame(mut step: FrameStep) {
    let Some(w) = web::window() else {
        log::warn!("requestAnimationFrame: no window");
        return;
    };
    let callback = Closure::once_into_js(move || {
        if step(Instant::now()) == Tick::Continue {
            request_frame(step);
        }
    });
    if let Err(e) = w.request_animation_frame(callback.unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {:?}", e);
    }
}

/// Per-frame update and draw; runs for the life of the page unless the GPU
/// runs out of memory.
pub fn start_loop(ctx: SharedContext, controls: Rc<DomControls>) {
    RafScheduler.schedule(Box::new(move |_now| {
        let mut ctx = ctx.borrow_mut();
        ctx.frame(controls.as_ref());
        let ViewportContext {
            camera,
            surface,
            mesh,
            ..
        } = &mut *ctx;
        match surface.renderer.render(camera, mesh) {
            Ok(()) => Tick::Continue,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                surface.renderer.reconfigure();
                Tick::Continue
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("[render] out of memory; stopping");
                Tick::Stop
            }
            Err(e) => {
                log::warn!("[render] {:?}", e);
                Tick::Continue
            }
        }
    }));
}
