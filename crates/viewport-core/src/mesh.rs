//! Cube transform driven by the sliders, plus the static line/triangle data
//! the renderer uploads once (cube faces and edges, grid and axes helpers).

use crate::constants::*;
use crate::controls::ControlSnapshot;
use glam::{EulerRot, Mat4, Quat, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshTransform {
    pub position: Vec3,
    /// Euler angles in radians, applied in XYZ order.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for MeshTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl MeshTransform {
    /// Write every sampled component; rotation arrives in degrees.
    pub fn apply_controls(&mut self, snapshot: &ControlSnapshot) {
        for axis in 0..3 {
            if let Some(v) = snapshot.position[axis] {
                self.position[axis] = v;
            }
            if let Some(deg) = snapshot.rotation_deg[axis] {
                self.rotation[axis] = deg.to_radians();
            }
            if let Some(s) = snapshot.scale[axis] {
                self.scale[axis] = s;
            }
        }
    }

    pub fn rotation_quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation_quat(), self.position)
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub pos: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    #[inline]
    pub fn line(pos: Vec3, color: [f32; 4]) -> Self {
        Self {
            pos: pos.to_array(),
            normal: [0.0; 3],
            color,
        }
    }
}

#[inline]
fn cube_corner(i: u32, size: f32) -> Vec3 {
    let h = size * 0.5;
    let pick = |bit: u32| if i & bit != 0 { h } else { -h };
    Vec3::new(pick(1), pick(2), pick(4))
}

/// Two triangles per face, face normals, translucent face color.
pub fn cube_faces(size: f32) -> Vec<Vertex> {
    let h = size * 0.5;
    let color = [FACE_COLOR[0], FACE_COLOR[1], FACE_COLOR[2], FACE_OPACITY];
    // (normal, u, v) with u x v == normal
    let faces = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::Y, Vec3::X),
    ];
    let mut out = Vec::with_capacity(36);
    for (n, u, v) in faces {
        let c = n * h;
        let quad = [
            c - u * h - v * h,
            c + u * h - v * h,
            c + u * h + v * h,
            c - u * h + v * h,
        ];
        for idx in [0, 1, 2, 0, 2, 3] {
            out.push(Vertex {
                pos: quad[idx].to_array(),
                normal: n.to_array(),
                color,
            });
        }
    }
    out
}

/// The 12 cube edges as a line list.
pub fn cube_edges(size: f32) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(24);
    for i in 0..8u32 {
        for j in (i + 1)..8u32 {
            if (i ^ j).count_ones() == 1 {
                out.push(Vertex::line(cube_corner(i, size), EDGE_COLOR));
                out.push(Vertex::line(cube_corner(j, size), EDGE_COLOR));
            }
        }
    }
    out
}

/// Square grid on the XZ plane centred at the origin.
pub fn grid_lines(size: f32, divisions: u32) -> Vec<Vertex> {
    let divisions = divisions.max(1);
    let half = size * 0.5;
    let step = size / divisions as f32;
    let mut out = Vec::with_capacity(((divisions + 1) * 4) as usize);
    for i in 0..=divisions {
        let k = -half + i as f32 * step;
        let color = if i * 2 == divisions {
            GRID_CENTER_COLOR
        } else {
            GRID_LINE_COLOR
        };
        out.push(Vertex::line(Vec3::new(-half, 0.0, k), color));
        out.push(Vertex::line(Vec3::new(half, 0.0, k), color));
        out.push(Vertex::line(Vec3::new(k, 0.0, -half), color));
        out.push(Vertex::line(Vec3::new(k, 0.0, half), color));
    }
    out
}

/// X red, Y green, Z blue.
pub fn axes_lines(length: f32) -> Vec<Vertex> {
    let axes = [
        (Vec3::X, [1.0, 0.0, 0.0, 1.0]),
        (Vec3::Y, [0.0, 1.0, 0.0, 1.0]),
        (Vec3::Z, [0.0, 0.0, 1.0, 1.0]),
    ];
    axes.iter()
        .flat_map(|&(axis, color)| [Vertex::line(Vec3::ZERO, color), Vertex::line(axis * length, color)])
        .collect()
}

/// Grid and axes helpers in one line list, using the default sizes.
pub fn helper_lines() -> Vec<Vertex> {
    let mut lines = grid_lines(GRID_SIZE, GRID_DIVISIONS);
    lines.extend(axes_lines(AXES_LENGTH));
    lines
}
