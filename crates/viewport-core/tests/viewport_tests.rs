// Host-side tests for viewport sizing and camera aspect sync.

use viewport_core::*;

struct FakeBox {
    width: i32,
    height: i32,
}

impl LayoutBox for FakeBox {
    fn client_width(&self) -> i32 {
        self.width
    }
    fn client_height(&self) -> i32 {
        self.height
    }
}

#[derive(Default)]
struct FakeSurface {
    sizes: Vec<(u32, u32)>,
}

impl RenderSurface for FakeSurface {
    fn set_size(&mut self, width: u32, height: u32) {
        self.sizes.push((width, height));
    }
}

fn camera() -> PerspectiveCamera {
    PerspectiveCamera::from_config(&ViewportConfig::default())
}

#[test]
fn compute_reads_current_box() {
    let mut container = FakeBox { width: 800, height: 600 };
    assert_eq!(compute_viewport_size(&container), ViewportSize::new(800, 600));
    container.width = 400;
    assert_eq!(compute_viewport_size(&container), ViewportSize::new(400, 600));
}

#[test]
fn compute_before_layout_returns_zero_box() {
    let container = FakeBox { width: 0, height: 0 };
    assert_eq!(compute_viewport_size(&container), ViewportSize::new(0, 0));

    // Negative client sizes never leak through as huge u32 values
    let weird = FakeBox { width: -3, height: 10 };
    assert_eq!(compute_viewport_size(&weird), ViewportSize::new(0, 10));
}

#[test]
fn apply_sets_exact_aspect_and_surface_size() {
    let mut surface = FakeSurface::default();
    let mut cam = camera();
    for (w, h) in [(800u32, 600u32), (1920, 1080), (333, 777), (1, 1)] {
        apply_viewport_size(&mut surface, &mut cam, ViewportSize::new(w, h)).unwrap();
        assert_eq!(cam.aspect(), w as f32 / h as f32);
        assert!(!cam.projection_dirty());
        assert_eq!(surface.sizes.last(), Some(&(w, h)));
    }
}

#[test]
fn resize_800_to_400_halves_aspect() {
    let mut surface = FakeSurface::default();
    let mut cam = camera();
    apply_viewport_size(&mut surface, &mut cam, ViewportSize::new(800, 600)).unwrap();
    assert!((cam.aspect() - 1.333).abs() < 1e-3);
    apply_viewport_size(&mut surface, &mut cam, ViewportSize::new(400, 600)).unwrap();
    assert!((cam.aspect() - 0.667).abs() < 1e-3);
}

#[test]
fn apply_is_idempotent() {
    let mut surface = FakeSurface::default();
    let mut cam = camera();
    let size = ViewportSize::new(1024, 768);
    apply_viewport_size(&mut surface, &mut cam, size).unwrap();
    let once = (cam.aspect(), cam.projection_matrix());
    apply_viewport_size(&mut surface, &mut cam, size).unwrap();
    assert_eq!(once, (cam.aspect(), cam.projection_matrix()));
}

#[test]
fn zero_height_keeps_previous_aspect() {
    let mut surface = FakeSurface::default();
    let mut cam = camera();
    apply_viewport_size(&mut surface, &mut cam, ViewportSize::new(800, 600)).unwrap();
    let before = cam.projection_matrix();

    let err = apply_viewport_size(&mut surface, &mut cam, ViewportSize::new(800, 0)).unwrap_err();
    assert_eq!(
        err,
        ViewportError::DegenerateViewport {
            width: 800,
            height: 0
        }
    );
    assert_eq!(cam.aspect(), 800.0 / 600.0);
    assert_eq!(cam.projection_matrix(), before);
    assert!(cam.aspect().is_finite());
    // The surface still hears about the collapsed box
    assert_eq!(surface.sizes.last(), Some(&(800, 0)));
}

#[test]
fn set_aspect_marks_projection_dirty_until_updated() {
    let mut cam = camera();
    cam.set_aspect(2.0);
    assert!(cam.projection_dirty());
    cam.update_projection_matrix();
    assert!(!cam.projection_dirty());
    let expected = glam::Mat4::perspective_rh(75f32.to_radians(), 2.0, 0.1, 1000.0);
    assert_eq!(cam.projection_matrix(), expected);
}

#[test]
fn size_aspect_is_none_without_area() {
    assert_eq!(ViewportSize::new(10, 0).aspect(), None);
    assert_eq!(ViewportSize::new(0, 10).aspect(), None);
    assert_eq!(ViewportSize::new(0, 0).aspect(), None);
}

#[test]
fn zero_width_keeps_projection_finite() {
    let mut surface = FakeSurface::default();
    let mut cam = camera();
    apply_viewport_size(&mut surface, &mut cam, ViewportSize::new(800, 600)).unwrap();
    let before = cam.projection_matrix();

    // Narrow layout mid-slide: the container collapses horizontally
    let collapsed = compute_viewport_size(&FakeBox { width: 0, height: 600 });
    let err = apply_viewport_size(&mut surface, &mut cam, collapsed).unwrap_err();
    assert_eq!(
        err,
        ViewportError::DegenerateViewport {
            width: 0,
            height: 600
        }
    );
    assert!(cam.projection_matrix().is_finite());
    assert_eq!(cam.projection_matrix(), before);
    assert_eq!(cam.aspect(), 800.0 / 600.0);
    assert_eq!(surface.sizes.last(), Some(&(0, 600)));
}
