mod machinery;
mod worker;

use std::num::{NonZeroU32, NonZeroUsize};

use crate::color::{Color, NamedColor};
use crate::geometry::ScreenPoint;
use crate::shading::Shading;

pub use crate::renderer::machinery::{Progress, RenderProgress, render, render_blocking};
pub use crate::renderer::worker::render_pixel;

const DEFAULT_TILE_SIZE: NonZeroU32 = NonZeroU32::new(64).unwrap();

#[derive(Copy, Clone, Debug)]
pub struct RenderSettings {
    pub tile_size: NonZeroU32,
    /// Number of worker threads, one per CPU core if not set.
    pub threads: Option<NonZeroUsize>,
    /// Color of pixels whose ray doesn't hit anything.
    pub background: Color,
    pub shading: Shading,
    /// Pixel whose ray gets logged in detail.
    pub trace_pixel: Option<ScreenPoint>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            tile_size: DEFAULT_TILE_SIZE,
            threads: None,
            background: NamedColor::Black.color(),
            shading: Shading::default(),
            trace_pixel: None,
        }
    }
}
