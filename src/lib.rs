#![cfg(target_arch = "wasm32")]
use cube_render::Renderer;
use std::cell::RefCell;
use std::rc::Rc;
use viewport_core::{compute_viewport_size, ViewportConfig, ViewportContext};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod constants;
mod dom;
mod events;
mod frame;
mod panel;
mod surface;

use constants::CANVAS_CONTAINER_ID;
use dom::{Container, DomControls};
use surface::CanvasSurface;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cube-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let container = Container(dom::element_by_id(&document, CANVAS_CONTAINER_ID)?);
    let canvas = dom::create_canvas(&document, &container.0)?;

    let instance = wgpu::Instance::default();
    let gpu_surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
    let initial = compute_viewport_size(&container);
    let renderer = Renderer::new(
        &instance,
        gpu_surface,
        initial.width,
        initial.height,
        dom::device_pixel_ratio(),
    )
    .await?;

    let ctx: frame::SharedContext = Rc::new(RefCell::new(ViewportContext::new(
        CanvasSurface::new(canvas, renderer),
        ViewportConfig::default(),
    )?));
    {
        let size = ctx.borrow_mut().resize(&container);
        log::info!("[viewport] initial {}x{}", size.width, size.height);
    }
    // Honour a panel the page opens with; polls like any other toggle
    if panel::is_visible(&document) {
        viewport_core::toggle_panel(
            &ctx,
            &frame::RafScheduler,
            container.clone(),
            true,
            dom::window_width(),
            instant::Instant::now(),
        );
    }

    let controls = Rc::new(DomControls::new(&document));
    events::wire_value_displays(&document, &controls);
    events::wire_window_resize(ctx.clone(), container.clone());
    events::wire_panel_toggle(&document, ctx.clone(), container.clone());
    events::wire_canvas_click(&document, ctx.clone(), container);

    frame::start_loop(ctx, controls);
    Ok(())
}
