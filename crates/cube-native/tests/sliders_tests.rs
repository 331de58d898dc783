// Keyboard slider bank: the binary crate has no lib target, so the module is
// included directly.

#![allow(dead_code)]
mod sliders {
    include!("../src/sliders.rs");
}

use sliders::*;
use viewport_core::{ControlId, ControlSnapshot, ControlSource};

#[test]
fn defaults_match_the_web_page() {
    let bank = SliderBank::default();
    assert_eq!(bank.value(ControlId::PosX), 0.0);
    assert_eq!(bank.value(ControlId::RotZ), 0.0);
    assert_eq!(bank.value(ControlId::ScaleY), 1.0);
    assert_eq!(bank.value(ControlId::CameraDistance), 5.0);
}

#[test]
fn every_control_reads_back_through_the_snapshot() {
    let bank = SliderBank::default();
    let snap = ControlSnapshot::read(&bank);
    for id in ControlId::ALL {
        assert_eq!(snap.get(id), Some(id.default_value()), "{}", id.key());
    }
}

#[test]
fn unknown_key_is_not_a_control() {
    let bank = SliderBank::default();
    assert_eq!(bank.raw_value("bogus"), None);
}

#[test]
fn keys_nudge_by_one_step() {
    let mut bank = SliderBank::default();
    assert!(bank.handle_key("q"));
    assert!((bank.value(ControlId::PosX) - 0.1).abs() < 1e-6);
    assert!(bank.handle_key("a"));
    assert!(bank.handle_key("a"));
    assert!((bank.value(ControlId::PosX) + 0.1).abs() < 1e-6);
}

#[test]
fn rotation_keys_move_five_degrees() {
    let mut bank = SliderBank::default();
    bank.handle_key("t");
    assert!((bank.value(ControlId::RotY) - 5.0).abs() < 1e-6);
}

#[test]
fn scale_keys_move_all_three_axes() {
    let mut bank = SliderBank::default();
    bank.handle_key("u");
    for id in [ControlId::ScaleX, ControlId::ScaleY, ControlId::ScaleZ] {
        assert!((bank.value(id) - 1.1).abs() < 1e-6);
    }
}

#[test]
fn arrow_up_moves_the_camera_closer() {
    let mut bank = SliderBank::default();
    bank.handle_key("ArrowUp");
    assert!(bank.value(ControlId::CameraDistance) < 5.0);
}

#[test]
fn values_clamp_to_slider_range() {
    let mut bank = SliderBank::default();
    for _ in 0..100 {
        bank.handle_key("ArrowUp");
    }
    assert_eq!(bank.value(ControlId::CameraDistance), 1.0);
    assert_eq!(bank.set(ControlId::ScaleX, -4.0), 0.1);
}

#[test]
fn backspace_resets_everything() {
    let mut bank = SliderBank::default();
    bank.handle_key("e");
    bank.handle_key("ArrowDown");
    assert!(bank.handle_key("Backspace"));
    assert_eq!(bank.value(ControlId::PosZ), 0.0);
    assert_eq!(bank.value(ControlId::CameraDistance), 5.0);
}

#[test]
fn unbound_keys_change_nothing() {
    let mut bank = SliderBank::default();
    assert!(!bank.handle_key("z"));
    assert!(key_binding("Escape").is_none());
}
