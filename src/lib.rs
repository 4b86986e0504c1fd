pub mod camera;
pub mod color;
pub mod error;
pub mod renderer;
pub mod surface;
pub mod util;

pub use camera::{Camera, CameraView};
pub use error::{Error, Result};
pub use renderer::scene::{Material, Scene, Sphere};
pub use renderer::skybox::Skybox;
pub use renderer::{Renderer, Settings};
pub use surface::{DisplaySurface, MemorySurface};
