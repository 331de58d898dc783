use thiserror::Error;

/// Recoverable conditions reported by the viewport core.
///
/// None of these are fatal: callers log them and keep the previous state for
/// the affected field until the next frame or event.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("viewport {width}x{height} has no height; aspect ratio left unchanged")]
    DegenerateViewport { width: u32, height: u32 },

    #[error("control `{key}` holds a non-numeric value {raw:?}")]
    InvalidControlValue { key: &'static str, raw: String },

    #[error("control `{0}` is not present")]
    MissingControl(&'static str),

    #[error("invalid viewport config: {0}")]
    InvalidConfig(&'static str),
}
