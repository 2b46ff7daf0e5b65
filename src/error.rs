use thiserror::Error;

use crate::geometry::WorldPoint;

/// Inconsistent geometry found during a query.
/// These are recoverable; callers log them and use a fallback.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("point {point:?} is not on any face of the box (tolerance {tolerance})")]
    PointOffSurface { point: WorldPoint, tolerance: f64 },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid camera: {0}")]
    InvalidCamera(&'static str),

    #[error("Invalid shading: {0}")]
    InvalidShading(&'static str),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, Error>;
