pub mod camera;
pub mod config;
pub mod constants;
pub mod context;
pub mod controls;
pub mod error;
pub mod mesh;
pub mod orbit;
pub mod transition;
pub mod viewport;

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use context::*;
pub use controls::*;
pub use error::*;
pub use mesh::*;
pub use orbit::*;
pub use transition::*;
pub use viewport::*;

// Shader bundled as a string constant
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
