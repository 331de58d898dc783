// Host-side tests for slider parsing, snapshots and the mesh transform.

use glam::Vec3;
use std::collections::HashMap;
use std::f32::consts::FRAC_PI_2;
use viewport_core::*;

struct MapSource(HashMap<String, String>);

impl MapSource {
    fn with(pairs: &[(&str, &str)]) -> Self {
        MapSource(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

impl ControlSource for MapSource {
    fn raw_value(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

#[test]
fn keys_round_trip_and_are_stable() {
    let keys: Vec<&str> = ControlId::ALL.iter().map(|id| id.key()).collect();
    assert_eq!(
        keys,
        [
            "posX",
            "posY",
            "posZ",
            "rotX",
            "rotY",
            "rotZ",
            "scaleX",
            "scaleY",
            "scaleZ",
            "cameraDistance"
        ]
    );
    for id in ControlId::ALL {
        assert_eq!(ControlId::from_key(id.key()), Some(id));
    }
    assert_eq!(ControlId::from_key("posW"), None);
    assert_eq!(ControlId::CameraDistance.value_display_id(), "cameraDistanceValue");
}

#[test]
fn defaults_lie_inside_ranges() {
    for id in ControlId::ALL {
        let (lo, hi) = id.range();
        let d = id.default_value();
        assert!(lo <= d && d <= hi, "{} default {d} outside [{lo}, {hi}]", id.key());
        assert!(id.step() > 0.0);
    }
}

#[test]
fn parse_accepts_numbers_only() {
    assert_eq!(parse_control_value("1.5"), Some(1.5));
    assert_eq!(parse_control_value(" -90 "), Some(-90.0));
    assert_eq!(parse_control_value("abc"), None);
    assert_eq!(parse_control_value(""), None);
    assert_eq!(parse_control_value("NaN"), None);
    assert_eq!(parse_control_value("inf"), None);
}

#[test]
fn sample_reports_missing_and_invalid() {
    let src = MapSource::with(&[("posX", "oops")]);
    assert_eq!(
        sample_control(&src, ControlId::PosX),
        Err(ViewportError::InvalidControlValue {
            key: "posX",
            raw: "oops".to_string()
        })
    );
    assert_eq!(
        sample_control(&src, ControlId::PosY),
        Err(ViewportError::MissingControl("posY"))
    );
}

#[test]
fn snapshot_maps_each_control() {
    let src = MapSource::with(&[
        ("posX", "1"),
        ("rotZ", "45"),
        ("scaleY", "2.5"),
        ("cameraDistance", "7"),
        ("posY", "bad"),
    ]);
    let snap = ControlSnapshot::read(&src);
    assert_eq!(snap.get(ControlId::PosX), Some(1.0));
    assert_eq!(snap.get(ControlId::PosY), None);
    assert_eq!(snap.rotation_deg[2], Some(45.0));
    assert_eq!(snap.scale[1], Some(2.5));
    assert_eq!(snap.camera_distance, Some(7.0));
}

#[test]
fn value_display_has_one_decimal() {
    assert_eq!(format_value_display(1.0), "1.0");
    assert_eq!(format_value_display(-0.26), "-0.3");
    assert_eq!(format_value_display(180.0), "180.0");
}

#[test]
fn rotation_90_degrees_is_half_pi_on_each_axis() {
    for (i, id) in [ControlId::RotX, ControlId::RotY, ControlId::RotZ].into_iter().enumerate() {
        let mut snap = ControlSnapshot::default();
        snap.set(id, Some(90.0));
        let mut mesh = MeshTransform::default();
        mesh.apply_controls(&snap);
        assert!((mesh.rotation[i] - FRAC_PI_2).abs() < 1e-6);
        for j in (0..3).filter(|&j| j != i) {
            assert_eq!(mesh.rotation[j], 0.0);
        }
    }
}

#[test]
fn missing_fields_leave_mesh_unchanged() {
    let mut mesh = MeshTransform {
        position: Vec3::new(1.0, 2.0, 3.0),
        rotation: Vec3::new(0.1, 0.2, 0.3),
        scale: Vec3::splat(2.0),
    };
    let before = mesh;
    mesh.apply_controls(&ControlSnapshot::default());
    assert_eq!(mesh, before);
}

#[test]
fn model_matrix_places_scaled_cube() {
    let mesh = MeshTransform {
        position: Vec3::new(1.0, 0.0, 0.0),
        rotation: Vec3::new(0.0, 0.0, FRAC_PI_2),
        scale: Vec3::new(2.0, 1.0, 1.0),
    };
    // +X corner scaled to 2, rotated onto +Y, then moved by +1 on X
    let p = mesh.model_matrix().transform_point3(Vec3::new(0.5, 0.0, 0.0));
    assert!((p - Vec3::new(1.0, 1.0, 0.0)).length() < 1e-5);
}

#[test]
fn scene_geometry_counts() {
    assert_eq!(cube_faces(1.0).len(), 36);
    assert_eq!(cube_edges(1.0).len(), 24);
    assert_eq!(grid_lines(10.0, 10).len(), 44);
    assert_eq!(axes_lines(5.0).len(), 6);
    assert_eq!(helper_lines().len(), 50);
}

#[test]
fn cube_edges_have_unit_length() {
    for pair in cube_edges(1.0).chunks(2) {
        let a = Vec3::from(pair[0].pos);
        let b = Vec3::from(pair[1].pos);
        assert!(((a - b).length() - 1.0).abs() < 1e-6);
    }
}

#[test]
fn cube_faces_are_translucent_and_on_the_surface() {
    for v in cube_faces(1.0) {
        assert_eq!(v.color[3], FACE_OPACITY);
        let n = Vec3::from(v.normal);
        assert!((Vec3::from(v.pos).dot(n) - 0.5).abs() < 1e-6);
    }
}

#[test]
fn config_defaults_validate() {
    let cfg = ViewportConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.transition_window, std::time::Duration::from_millis(300));
    let bad = ViewportConfig {
        z_near: 10.0,
        z_far: 1.0,
        ..ViewportConfig::default()
    };
    assert!(bad.validate().is_err());
}

#[test]
fn layout_target_and_mobile_dismiss() {
    let cfg = ViewportConfig::default();
    assert_eq!(layout_target(true, 1024.0, &cfg), Vec3::new(-1.0, 0.0, 0.0));
    assert_eq!(layout_target(true, 600.0, &cfg), Vec3::ZERO);
    assert_eq!(layout_target(false, 1024.0, &cfg), Vec3::ZERO);
    assert!(hides_panel_on_canvas_click(600.0, &cfg));
    assert!(!hides_panel_on_canvas_click(601.0, &cfg));
}
