pub mod animation;
pub mod camera;
pub mod color;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod modal;
pub mod notify;
pub mod particles;
pub mod picking;
pub mod scene;
pub mod sections;
pub mod state;
pub mod theme;

pub use animation::*;
pub use camera::*;
pub use config::*;
pub use modal::*;
pub use particles::*;
pub use scene::*;
pub use sections::*;
pub use state::*;
pub use theme::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");
