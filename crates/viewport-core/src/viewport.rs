use crate::camera::PerspectiveCamera;
use crate::error::ViewportError;

/// Anything with a measurable client box: the canvas container on the web,
/// the window client area natively.
pub trait LayoutBox {
    fn client_width(&self) -> i32;
    fn client_height(&self) -> i32;
}

/// The render engine side of a resize.
pub trait RenderSurface {
    fn set_size(&mut self, width: u32, height: u32);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `None` while the box is collapsed in either direction.
    pub fn aspect(&self) -> Option<f32> {
        (self.width > 0 && self.height > 0).then(|| self.width as f32 / self.height as f32)
    }
}

/// Read the container's current client box. Never cached; a container that
/// has not been laid out yet simply reports zero.
#[inline]
pub fn compute_viewport_size<L: LayoutBox + ?Sized>(container: &L) -> ViewportSize {
    ViewportSize {
        width: container.client_width().max(0) as u32,
        height: container.client_height().max(0) as u32,
    }
}

/// Resize the surface and, when the size has area, sync the camera's aspect
/// and projection to it.
///
/// A zero-width or zero-height size still reaches the surface, but the camera
/// keeps its previous aspect and `DegenerateViewport` is returned.
pub fn apply_viewport_size<S: RenderSurface + ?Sized>(
    surface: &mut S,
    camera: &mut PerspectiveCamera,
    size: ViewportSize,
) -> Result<(), ViewportError> {
    surface.set_size(size.width, size.height);
    let aspect = size.aspect().ok_or(ViewportError::DegenerateViewport {
        width: size.width,
        height: size.height,
    })?;
    camera.set_aspect(aspect);
    camera.update_projection_matrix();
    Ok(())
}
