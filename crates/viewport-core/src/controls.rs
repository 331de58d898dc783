//! Slider controls sampled once per frame.
//!
//! Each control is addressed by a stable string key (the DOM element id on
//! the web). Values arrive as strings and are parsed here; a value that does
//! not parse leaves its field empty in the snapshot so the mesh/camera keep
//! whatever they had.

use crate::constants::INITIAL_CAMERA_Z;
use crate::error::ViewportError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlId {
    PosX,
    PosY,
    PosZ,
    RotX,
    RotY,
    RotZ,
    ScaleX,
    ScaleY,
    ScaleZ,
    CameraDistance,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlGroup {
    Position,
    Rotation,
    Scale,
    Camera,
}

impl ControlId {
    pub const ALL: [ControlId; 10] = [
        ControlId::PosX,
        ControlId::PosY,
        ControlId::PosZ,
        ControlId::RotX,
        ControlId::RotY,
        ControlId::RotZ,
        ControlId::ScaleX,
        ControlId::ScaleY,
        ControlId::ScaleZ,
        ControlId::CameraDistance,
    ];

    #[inline]
    pub fn key(self) -> &'static str {
        match self {
            ControlId::PosX => "posX",
            ControlId::PosY => "posY",
            ControlId::PosZ => "posZ",
            ControlId::RotX => "rotX",
            ControlId::RotY => "rotY",
            ControlId::RotZ => "rotZ",
            ControlId::ScaleX => "scaleX",
            ControlId::ScaleY => "scaleY",
            ControlId::ScaleZ => "scaleZ",
            ControlId::CameraDistance => "cameraDistance",
        }
    }

    #[inline]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }

    pub fn group(self) -> ControlGroup {
        match self {
            ControlId::PosX | ControlId::PosY | ControlId::PosZ => ControlGroup::Position,
            ControlId::RotX | ControlId::RotY | ControlId::RotZ => ControlGroup::Rotation,
            ControlId::ScaleX | ControlId::ScaleY | ControlId::ScaleZ => ControlGroup::Scale,
            ControlId::CameraDistance => ControlGroup::Camera,
        }
    }

    /// Id of the label that shows this control's current value.
    pub fn value_display_id(self) -> String {
        format!("{}Value", self.key())
    }

    /// Slider range (inclusive). Rotation is in degrees.
    pub fn range(self) -> (f32, f32) {
        match self.group() {
            ControlGroup::Position => (-5.0, 5.0),
            ControlGroup::Rotation => (-180.0, 180.0),
            ControlGroup::Scale => (0.1, 3.0),
            ControlGroup::Camera => (1.0, 20.0),
        }
    }

    pub fn step(self) -> f32 {
        match self.group() {
            ControlGroup::Rotation => 1.0,
            _ => 0.1,
        }
    }

    pub fn default_value(self) -> f32 {
        match self.group() {
            ControlGroup::Position | ControlGroup::Rotation => 0.0,
            ControlGroup::Scale => 1.0,
            ControlGroup::Camera => INITIAL_CAMERA_Z,
        }
    }
}

/// Where raw control values come from (DOM inputs, a keyboard slider bank,
/// a map in tests).
pub trait ControlSource {
    fn raw_value(&self, key: &str) -> Option<String>;
}

#[inline]
pub fn parse_control_value(raw: &str) -> Option<f32> {
    raw.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}

pub fn sample_control<C: ControlSource + ?Sized>(
    source: &C,
    id: ControlId,
) -> Result<f32, ViewportError> {
    let raw = source
        .raw_value(id.key())
        .ok_or(ViewportError::MissingControl(id.key()))?;
    parse_control_value(&raw).ok_or(ViewportError::InvalidControlValue { key: id.key(), raw })
}

/// Text for a `<key>Value` label.
#[inline]
pub fn format_value_display(value: f32) -> String {
    format!("{:.1}", value)
}

/// One frame's worth of control values. `None` means "leave unchanged".
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ControlSnapshot {
    pub position: [Option<f32>; 3],
    /// Degrees, as entered.
    pub rotation_deg: [Option<f32>; 3],
    pub scale: [Option<f32>; 3],
    pub camera_distance: Option<f32>,
}

impl ControlSnapshot {
    pub fn read<C: ControlSource + ?Sized>(source: &C) -> Self {
        let mut snapshot = Self::default();
        for id in ControlId::ALL {
            let value = match sample_control(source, id) {
                Ok(v) => Some(v),
                Err(e) => {
                    log::debug!("[controls] {}", e);
                    None
                }
            };
            snapshot.set(id, value);
        }
        snapshot
    }

    pub fn get(&self, id: ControlId) -> Option<f32> {
        match id {
            ControlId::PosX => self.position[0],
            ControlId::PosY => self.position[1],
            ControlId::PosZ => self.position[2],
            ControlId::RotX => self.rotation_deg[0],
            ControlId::RotY => self.rotation_deg[1],
            ControlId::RotZ => self.rotation_deg[2],
            ControlId::ScaleX => self.scale[0],
            ControlId::ScaleY => self.scale[1],
            ControlId::ScaleZ => self.scale[2],
            ControlId::CameraDistance => self.camera_distance,
        }
    }

    pub fn set(&mut self, id: ControlId, value: Option<f32>) {
        match id {
            ControlId::PosX => self.position[0] = value,
            ControlId::PosY => self.position[1] = value,
            ControlId::PosZ => self.position[2] = value,
            ControlId::RotX => self.rotation_deg[0] = value,
            ControlId::RotY => self.rotation_deg[1] = value,
            ControlId::RotZ => self.rotation_deg[2] = value,
            ControlId::ScaleX => self.scale[0] = value,
            ControlId::ScaleY => self.scale[1] = value,
            ControlId::ScaleZ => self.scale[2] = value,
            ControlId::CameraDistance => self.camera_distance = value,
        }
    }
}
