use glam::Vec3;

// Shared viewport/camera tuning constants used by both web and native frontends.

// Camera projection
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
pub const CAMERA_Z_NEAR: f32 = 0.1;
pub const CAMERA_Z_FAR: f32 = 1000.0;
pub const INITIAL_CAMERA_Z: f32 = 5.0; // also the default of the distance slider

// Used when the camera sits exactly on its orbit target
pub const FALLBACK_VIEW_DIRECTION: [f32; 3] = [0.0, 0.0, 1.0];

// Panel slide animation (matches the CSS transition on #controls)
pub const TRANSITION_WINDOW_MS: u64 = 300;

// Layout
pub const MOBILE_BREAKPOINT_PX: f64 = 600.0; // at or below: panel overlays the canvas
pub const PANEL_TARGET_OFFSET: [f32; 3] = [-1.0, 0.0, 0.0]; // orbit target while the panel is open

// Orbit controller
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05;

// Scene helpers
pub const GRID_SIZE: f32 = 10.0;
pub const GRID_DIVISIONS: u32 = 10;
pub const AXES_LENGTH: f32 = 5.0;
pub const GRID_CENTER_COLOR: [f32; 4] = [0.267, 0.267, 0.267, 1.0]; // 0x444444
pub const GRID_LINE_COLOR: [f32; 4] = [0.533, 0.533, 0.533, 1.0]; // 0x888888

// Materials and lights
pub const CLEAR_COLOR: [f64; 4] = [1.0, 1.0, 1.0, 1.0];
pub const FACE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
pub const FACE_OPACITY: f32 = 0.5;
pub const EDGE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
pub const AMBIENT_LIGHT: f32 = 0.251; // 0x404040
pub const DIRECTIONAL_INTENSITY: f32 = 0.8;
pub const LIGHT_POSITION: [f32; 3] = [5.0, 5.0, 5.0];

#[inline]
pub fn fallback_view_direction() -> Vec3 {
    Vec3::from(FALLBACK_VIEW_DIRECTION)
}

#[inline]
pub fn panel_target_offset() -> Vec3 {
    Vec3::from(PANEL_TARGET_OFFSET)
}
