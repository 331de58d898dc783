use std::collections::HashMap;
use viewport_core::{format_value_display, ControlGroup, ControlId, ControlSource};

// Keyboard stand-ins for the web page's range inputs.

/// Which controls a key nudges and in which direction.
#[inline]
pub fn key_binding(key: &str) -> Option<(&'static [ControlId], f32)> {
    const SCALE_ALL: &[ControlId] = &[ControlId::ScaleX, ControlId::ScaleY, ControlId::ScaleZ];
    let binding: (&'static [ControlId], f32) = match key {
        "q" => (&[ControlId::PosX], 1.0),
        "a" => (&[ControlId::PosX], -1.0),
        "w" => (&[ControlId::PosY], 1.0),
        "s" => (&[ControlId::PosY], -1.0),
        "e" => (&[ControlId::PosZ], 1.0),
        "d" => (&[ControlId::PosZ], -1.0),
        "r" => (&[ControlId::RotX], 1.0),
        "f" => (&[ControlId::RotX], -1.0),
        "t" => (&[ControlId::RotY], 1.0),
        "g" => (&[ControlId::RotY], -1.0),
        "y" => (&[ControlId::RotZ], 1.0),
        "h" => (&[ControlId::RotZ], -1.0),
        "u" => (SCALE_ALL, 1.0),
        "j" => (SCALE_ALL, -1.0),
        // closer / further
        "ArrowUp" => (&[ControlId::CameraDistance], -1.0),
        "ArrowDown" => (&[ControlId::CameraDistance], 1.0),
        _ => return None,
    };
    Some(binding)
}

/// Key presses move rotation in 5° steps, everything else in slider steps.
#[inline]
fn nudge_amount(id: ControlId) -> f32 {
    match id.group() {
        ControlGroup::Rotation => id.step() * 5.0,
        _ => id.step(),
    }
}

#[derive(Clone, Debug)]
pub struct SliderBank {
    values: HashMap<ControlId, f32>,
}

impl Default for SliderBank {
    fn default() -> Self {
        Self {
            values: ControlId::ALL
                .into_iter()
                .map(|id| (id, id.default_value()))
                .collect(),
        }
    }
}

impl SliderBank {
    pub fn value(&self, id: ControlId) -> f32 {
        self.values
            .get(&id)
            .copied()
            .unwrap_or_else(|| id.default_value())
    }

    pub fn set(&mut self, id: ControlId, value: f32) -> f32 {
        let (lo, hi) = id.range();
        let v = value.clamp(lo, hi);
        self.values.insert(id, v);
        v
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Apply a key press; returns whether anything changed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == "Backspace" {
            self.reset();
            log::info!("[controls] reset");
            return true;
        }
        let Some((ids, direction)) = key_binding(key) else {
            return false;
        };
        for &id in ids {
            let v = self.set(id, self.value(id) + direction * nudge_amount(id));
            log::info!("[controls] {}={}", id.key(), format_value_display(v));
        }
        true
    }
}

impl ControlSource for SliderBank {
    fn raw_value(&self, key: &str) -> Option<String> {
        ControlId::from_key(key).map(|id| self.value(id).to_string())
    }
}
