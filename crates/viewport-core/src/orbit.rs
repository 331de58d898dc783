use crate::camera::PerspectiveCamera;
use crate::config::ViewportConfig;
use glam::Vec3;

/// Orbit controller state: the point the camera orbits and looks at.
///
/// Drag/zoom gestures are not handled here, so the damping settings have
/// nothing to smooth yet; a layout re-target takes effect on the next update.
#[derive(Clone, Copy, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub enable_damping: bool,
    pub damping_factor: f32,
}

impl OrbitControls {
    pub fn from_config(config: &ViewportConfig) -> Self {
        Self {
            target: Vec3::ZERO,
            enable_damping: config.enable_damping,
            damping_factor: config.damping_factor,
        }
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Aim the camera at the target. Called once per frame after the camera
    /// position has been written.
    pub fn update(&self, camera: &mut PerspectiveCamera) {
        camera.look_at(self.target);
    }
}

#[inline]
fn is_wide(window_width: f64, config: &ViewportConfig) -> bool {
    window_width > config.mobile_breakpoint_px
}

/// Orbit target for the current layout: shifted aside while the panel covers
/// part of a wide window, centred otherwise.
pub fn layout_target(panel_visible: bool, window_width: f64, config: &ViewportConfig) -> Vec3 {
    if panel_visible && is_wide(window_width, config) {
        config.panel_target_offset
    } else {
        Vec3::ZERO
    }
}

/// On narrow windows the panel overlays the canvas, so tapping the canvas
/// dismisses it.
#[inline]
pub fn hides_panel_on_canvas_click(window_width: f64, config: &ViewportConfig) -> bool {
    !is_wide(window_width, config)
}
