use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use instant::Instant;
use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::{Window, WindowBuilder},
};

use cube_render::Renderer;
use viewport_core::{
    click_canvas, compute_viewport_size, toggle_panel, FrameQueue, FrameScheduler, LayoutBox,
    Tick, ViewportConfig, ViewportContext,
};

mod sliders;
use sliders::SliderBank;

type SharedContext = Rc<RefCell<ViewportContext<Renderer>>>;

/// The whole client area is the viewport container, in logical pixels.
#[derive(Clone)]
struct WindowArea(Arc<Window>);

impl WindowArea {
    fn logical_size(&self) -> LogicalSize<f64> {
        self.0.inner_size().to_logical(self.0.scale_factor())
    }

    fn logical_width(&self) -> f64 {
        self.logical_size().width
    }
}

impl LayoutBox for WindowArea {
    fn client_width(&self) -> i32 {
        self.logical_size().width.round() as i32
    }

    fn client_height(&self) -> i32 {
        self.logical_size().height.round() as i32
    }
}

fn key_name(key: &Key) -> Option<String> {
    match key {
        Key::Character(c) => Some(c.to_lowercase()),
        Key::Named(NamedKey::ArrowUp) => Some("ArrowUp".into()),
        Key::Named(NamedKey::ArrowDown) => Some("ArrowDown".into()),
        Key::Named(NamedKey::Backspace) => Some("Backspace".into()),
        Key::Named(NamedKey::Tab) => Some("Tab".into()),
        _ => None,
    }
}

/// Per-frame step: read the sliders, update the scene, draw. Stops (and
/// raises `exit`) when the GPU runs out of memory.
fn main_loop_step(
    ctx: SharedContext,
    sliders: Rc<RefCell<SliderBank>>,
    exit: Rc<Cell<bool>>,
) -> viewport_core::FrameStep {
    Box::new(move |_now| {
        let mut ctx = ctx.borrow_mut();
        ctx.frame(&*sliders.borrow());
        let ViewportContext {
            camera,
            surface,
            mesh,
            ..
        } = &mut *ctx;
        match surface.render(camera, mesh) {
            Ok(()) => Tick::Continue,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                surface.reconfigure();
                Tick::Continue
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("[render] out of memory");
                exit.set(true);
                Tick::Stop
            }
            Err(e) => {
                log::warn!("[render] {:?}", e);
                Tick::Continue
            }
        }
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Cube viewport (native)")
            .with_inner_size(LogicalSize::new(1024.0, 768.0))
            .build(&event_loop)?,
    );
    let area = WindowArea(window.clone());

    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(window.clone())?;
    let initial = compute_viewport_size(&area);
    let renderer = pollster::block_on(Renderer::new(
        &instance,
        surface,
        initial.width,
        initial.height,
        window.scale_factor(),
    ))?;

    let ctx: SharedContext = Rc::new(RefCell::new(ViewportContext::new(
        renderer,
        ViewportConfig::default(),
    )?));
    ctx.borrow_mut().resize(&area);

    let frames = Rc::new(FrameQueue::new());
    let sliders = Rc::new(RefCell::new(SliderBank::default()));
    let exit = Rc::new(Cell::new(false));
    frames.schedule(main_loop_step(ctx.clone(), sliders.clone(), exit.clone()));
    log::info!("[viewport] ready; Tab toggles the panel, Backspace resets the sliders");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(_) => {
                ctx.borrow_mut()
                    .on_window_resize(&area, area.logical_width());
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                let mut ctx = ctx.borrow_mut();
                ctx.surface.set_pixel_ratio(scale_factor);
                ctx.on_window_resize(&area, area.logical_width());
            }
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => match key_name(&logical_key).as_deref() {
                Some("Tab") => {
                    let visible = !ctx.borrow().panel_visible();
                    toggle_panel(
                        &ctx,
                        frames.as_ref(),
                        area.clone(),
                        visible,
                        area.logical_width(),
                        Instant::now(),
                    );
                }
                Some(name) => {
                    sliders.borrow_mut().handle_key(name);
                }
                None => {}
            },
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                click_canvas(
                    &ctx,
                    frames.as_ref(),
                    area.clone(),
                    area.logical_width(),
                    Instant::now(),
                );
            }
            _ => {}
        },
        Event::AboutToWait => {
            frames.advance(Instant::now());
            if exit.get() {
                elwt.exit();
            } else {
                window.request_redraw();
            }
        }
        _ => {}
    })?;
    Ok(())
}
