mod camera;
pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
mod renderer;
pub mod scene;
mod screen_block;
mod shading;

pub use crate::renderer::{
    Progress, RenderProgress, RenderSettings, render, render_blocking, render_pixel,
};
pub use camera::Camera;
pub use color::Color;
pub use config::Config;
pub use error::{Error, Result};
pub use scene::Scene;
pub use shading::Shading;
