//! Perspective camera and the radial distance control.
//!
//! The camera keeps its projection matrix cached; changing the aspect ratio
//! only marks it dirty until [`PerspectiveCamera::update_projection_matrix`]
//! runs, which is what the viewport sizing path does right after every
//! aspect change.

use crate::config::ViewportConfig;
use crate::constants::fallback_view_direction;
use glam::{Mat4, Vec3};

/// Right-handed perspective camera looking at an explicit point.
#[derive(Clone, Debug)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub up: Vec3,
    look_at: Vec3,
    fovy_radians: f32,
    znear: f32,
    zfar: f32,
    aspect: f32,
    projection: Mat4,
    projection_dirty: bool,
}

impl PerspectiveCamera {
    /// Aspect starts at 1.0 as a placeholder until the first viewport sizing.
    pub fn new(fovy_degrees: f32, znear: f32, zfar: f32) -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            up: Vec3::Y,
            look_at: Vec3::ZERO,
            fovy_radians: fovy_degrees.to_radians(),
            znear,
            zfar,
            aspect: 1.0,
            projection: Mat4::IDENTITY,
            projection_dirty: true,
        };
        camera.update_projection_matrix();
        camera
    }

    pub fn from_config(config: &ViewportConfig) -> Self {
        let mut camera = Self::new(config.fov_y_degrees, config.z_near, config.z_far);
        camera.position = config.initial_camera_position;
        camera
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.projection_dirty = true;
    }

    pub fn projection_dirty(&self) -> bool {
        self.projection_dirty
    }

    pub fn update_projection_matrix(&mut self) {
        self.projection = Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar);
        self.projection_dirty = false;
    }

    /// Clip-space projection as of the last `update_projection_matrix`.
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn look_at(&mut self, point: Vec3) {
        self.look_at = point;
    }

    pub fn looking_at(&self) -> Vec3 {
        self.look_at
    }

    /// World-to-view transform.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.look_at, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }
}

/// Move `camera` onto the sphere of radius `distance` around `target`,
/// keeping the current orbit angle.
///
/// When the camera sits exactly on `target` the direction is undefined and
/// `fallback` is used instead. Negative or non-finite distances clamp to zero.
/// Returns the direction that was applied.
pub fn update_camera_distance(
    camera: &mut PerspectiveCamera,
    target: Vec3,
    distance: f32,
    fallback: Vec3,
) -> Vec3 {
    let distance = if distance.is_finite() { distance.max(0.0) } else { 0.0 };
    let direction = (camera.position - target)
        .try_normalize()
        .unwrap_or(fallback);
    camera.position = target + direction * distance;
    direction
}

/// Distance slider state: remembers the last well-defined view direction so a
/// camera parked on its target (distance 0) keeps its orbit angle when pulled
/// back out.
#[derive(Clone, Copy, Debug)]
pub struct DistanceControl {
    last_direction: Vec3,
}

impl Default for DistanceControl {
    fn default() -> Self {
        Self {
            last_direction: fallback_view_direction(),
        }
    }
}

impl DistanceControl {
    pub fn apply(&mut self, camera: &mut PerspectiveCamera, target: Vec3, distance: f32) {
        let direction = update_camera_distance(camera, target, distance, self.last_direction);
        if direction != self.last_direction {
            log::trace!(
                "[camera] view direction ({:.3},{:.3},{:.3})",
                direction.x,
                direction.y,
                direction.z
            );
        }
        self.last_direction = direction;
    }

    pub fn last_direction(&self) -> Vec3 {
        self.last_direction
    }
}
