//! Explicit viewport context.
//!
//! Owns everything the per-frame and per-event paths mutate: camera, render
//! surface, orbit controller, mesh transform, distance state and the
//! transition poll. Front-ends keep one of these behind `Rc<RefCell<_>>` and
//! hand it to whatever event or frame step needs it.

use crate::camera::{DistanceControl, PerspectiveCamera};
use crate::config::ViewportConfig;
use crate::controls::{ControlSnapshot, ControlSource};
use crate::error::ViewportError;
use crate::mesh::MeshTransform;
use crate::orbit::{hides_panel_on_canvas_click, layout_target, OrbitControls};
use crate::transition::{FrameScheduler, PollStep, Tick, TransitionPoll};
use crate::viewport::{apply_viewport_size, compute_viewport_size, LayoutBox, RenderSurface, ViewportSize};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;

pub struct ViewportContext<S: RenderSurface> {
    pub camera: PerspectiveCamera,
    pub surface: S,
    pub orbit: OrbitControls,
    pub mesh: MeshTransform,
    distance: DistanceControl,
    transition: TransitionPoll,
    config: ViewportConfig,
    panel_visible: bool,
    size: ViewportSize,
}

impl<S: RenderSurface> ViewportContext<S> {
    pub fn new(surface: S, config: ViewportConfig) -> Result<Self, ViewportError> {
        config.validate()?;
        let mut camera = PerspectiveCamera::from_config(&config);
        let orbit = OrbitControls::from_config(&config);
        orbit.update(&mut camera);
        Ok(Self {
            camera,
            surface,
            orbit,
            mesh: MeshTransform::default(),
            distance: DistanceControl::default(),
            transition: TransitionPoll::new(config.transition_window),
            config,
            panel_visible: false,
            size: ViewportSize::default(),
        })
    }

    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    pub fn panel_visible(&self) -> bool {
        self.panel_visible
    }

    pub fn transition(&self) -> &TransitionPoll {
        &self.transition
    }

    /// Size from the most recent re-sample, including degenerate ones.
    pub fn size(&self) -> ViewportSize {
        self.size
    }

    /// Re-sample the container and push the size to surface and camera.
    pub fn resize<L: LayoutBox + ?Sized>(&mut self, container: &L) -> ViewportSize {
        let size = compute_viewport_size(container);
        if let Err(e) = apply_viewport_size(&mut self.surface, &mut self.camera, size) {
            log::debug!("[viewport] {}", e);
        }
        self.size = size;
        size
    }

    pub fn on_window_resize<L: LayoutBox + ?Sized>(&mut self, container: &L, window_width: f64) {
        let size = self.resize(container);
        self.retarget(window_width);
        log::debug!("[viewport] window resize -> {}x{}", size.width, size.height);
    }

    fn retarget(&mut self, window_width: f64) {
        let target = layout_target(self.panel_visible, window_width, &self.config);
        self.orbit.set_target(target);
    }

    /// Apply the new layout once right away and open a transition window.
    /// Returns the generation the poll frames must carry.
    pub fn on_panel_visibility_change<L: LayoutBox + ?Sized>(
        &mut self,
        visible: bool,
        container: &L,
        window_width: f64,
        now: Instant,
    ) -> u64 {
        self.panel_visible = visible;
        self.retarget(window_width);
        self.resize(container);
        let generation = self.transition.begin(now);
        log::info!(
            "[panel] {} (transition #{})",
            if visible { "shown" } else { "hidden" },
            generation
        );
        generation
    }

    /// One transition-poll frame.
    pub fn poll_transition<L: LayoutBox + ?Sized>(
        &mut self,
        generation: u64,
        container: &L,
        now: Instant,
    ) -> Tick {
        match self.transition.tick(generation, now) {
            PollStep::Resample => {
                self.resize(container);
                Tick::Continue
            }
            PollStep::Finished => {
                log::debug!("[panel] transition #{} settled", generation);
                Tick::Stop
            }
            PollStep::Superseded => Tick::Stop,
        }
    }

    /// Narrow layouts dismiss an open panel on canvas click. Returns the new
    /// transition generation when that happened.
    pub fn on_canvas_click<L: LayoutBox + ?Sized>(
        &mut self,
        container: &L,
        window_width: f64,
        now: Instant,
    ) -> Option<u64> {
        if self.panel_visible && hides_panel_on_canvas_click(window_width, &self.config) {
            Some(self.on_panel_visibility_change(false, container, window_width, now))
        } else {
            None
        }
    }

    /// Per-frame update: sample controls, move the mesh, set the camera
    /// distance around the orbit target, then let the controller re-aim.
    pub fn frame<C: ControlSource + ?Sized>(&mut self, controls: &C) {
        let snapshot = ControlSnapshot::read(controls);
        self.mesh.apply_controls(&snapshot);
        if let Some(distance) = snapshot.camera_distance {
            self.distance.apply(&mut self.camera, self.orbit.target, distance);
        }
        self.orbit.update(&mut self.camera);
    }
}

/// Schedule per-frame re-sampling for the transition `generation`.
pub fn schedule_transition_poll<S, L, F>(
    ctx: &Rc<RefCell<ViewportContext<S>>>,
    scheduler: &F,
    container: L,
    generation: u64,
) where
    S: RenderSurface + 'static,
    L: LayoutBox + 'static,
    F: FrameScheduler + ?Sized,
{
    let ctx = Rc::clone(ctx);
    scheduler.schedule(Box::new(move |now| {
        ctx.borrow_mut().poll_transition(generation, &container, now)
    }));
}

/// Panel toggle: immediate resize plus a transition poll on `scheduler`.
pub fn toggle_panel<S, L, F>(
    ctx: &Rc<RefCell<ViewportContext<S>>>,
    scheduler: &F,
    container: L,
    visible: bool,
    window_width: f64,
    now: Instant,
) -> u64
where
    S: RenderSurface + 'static,
    L: LayoutBox + 'static,
    F: FrameScheduler + ?Sized,
{
    let generation = ctx
        .borrow_mut()
        .on_panel_visibility_change(visible, &container, window_width, now);
    schedule_transition_poll(ctx, scheduler, container, generation);
    generation
}

/// Canvas click: dismisses the panel on narrow layouts, polling like a toggle.
pub fn click_canvas<S, L, F>(
    ctx: &Rc<RefCell<ViewportContext<S>>>,
    scheduler: &F,
    container: L,
    window_width: f64,
    now: Instant,
) -> Option<u64>
where
    S: RenderSurface + 'static,
    L: LayoutBox + 'static,
    F: FrameScheduler + ?Sized,
{
    let generation = ctx
        .borrow_mut()
        .on_canvas_click(&container, window_width, now)?;
    schedule_transition_poll(ctx, scheduler, container, generation);
    Some(generation)
}
