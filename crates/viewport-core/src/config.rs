use crate::constants::*;
use crate::error::ViewportError;
use glam::Vec3;
use std::time::Duration;

/// Runtime settings for a [`crate::ViewportContext`].
///
/// `Default` mirrors the constants in [`crate::constants`]; front-ends only
/// override what differs on their platform.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportConfig {
    pub fov_y_degrees: f32,
    pub z_near: f32,
    pub z_far: f32,
    pub initial_camera_position: Vec3,
    pub transition_window: Duration,
    pub mobile_breakpoint_px: f64,
    pub panel_target_offset: Vec3,
    pub enable_damping: bool,
    pub damping_factor: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: CAMERA_FOV_Y_DEG,
            z_near: CAMERA_Z_NEAR,
            z_far: CAMERA_Z_FAR,
            initial_camera_position: Vec3::new(0.0, 0.0, INITIAL_CAMERA_Z),
            transition_window: Duration::from_millis(TRANSITION_WINDOW_MS),
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX,
            panel_target_offset: panel_target_offset(),
            enable_damping: true,
            damping_factor: ORBIT_DAMPING_FACTOR,
        }
    }
}

impl ViewportConfig {
    pub fn validate(&self) -> Result<(), ViewportError> {
        if !(self.fov_y_degrees > 0.0 && self.fov_y_degrees < 180.0) {
            return Err(ViewportError::InvalidConfig("fov must be in (0, 180) degrees"));
        }
        if !(self.z_near > 0.0 && self.z_far > self.z_near) {
            return Err(ViewportError::InvalidConfig("clip planes must satisfy 0 < near < far"));
        }
        if self.transition_window.is_zero() {
            return Err(ViewportError::InvalidConfig("transition window must be non-zero"));
        }
        if !(0.0..=1.0).contains(&self.damping_factor) {
            return Err(ViewportError::InvalidConfig("damping factor must be in [0, 1]"));
        }
        if !self.initial_camera_position.is_finite() || !self.panel_target_offset.is_finite() {
            return Err(ViewportError::InvalidConfig("positions must be finite"));
        }
        Ok(())
    }
}
