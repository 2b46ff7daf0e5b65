use image::RgbaImage;

use crate::{
    camera::Camera,
    color::{Color, color_to_image},
    geometry::{ScreenBlock, ScreenPoint},
    renderer::RenderSettings,
    scene::Scene,
    screen_block::ScreenBlockExt as _,
};

pub struct Worker {
    worker_id: usize,
    tiles_rendered: usize,
    pixels_hit: usize,
}

impl Worker {
    pub fn new(worker_id: usize) -> Self {
        Self {
            worker_id,
            tiles_rendered: 0,
            pixels_hit: 0,
        }
    }

    pub fn render_tile(
        &mut self,
        scene: &Scene,
        camera: &Camera,
        settings: &RenderSettings,
        tile: &ScreenBlock,
        buffer: &mut RgbaImage,
    ) {
        for point in tile.internal_points() {
            let pixel = match trace(scene, camera, settings, &point) {
                Some(color) => {
                    self.pixels_hit += 1;
                    color
                }
                None => settings.background,
            };

            let buffer_position = point - tile.min;
            buffer.put_pixel(buffer_position.x, buffer_position.y, color_to_image(pixel));
        }
        self.tiles_rendered += 1;
    }
}

impl Drop for Worker {
    fn drop(&mut self) {
        log::debug!(
            "worker{} done: {} tiles, {} pixels hit",
            self.worker_id,
            self.tiles_rendered,
            self.pixels_hit
        );
    }
}

/// Color of a single pixel, `settings.background` if its ray hits nothing.
pub fn render_pixel(
    scene: &Scene,
    camera: &Camera,
    settings: &RenderSettings,
    point: &ScreenPoint,
) -> Color {
    trace(scene, camera, settings, point).unwrap_or(settings.background)
}

/// Shaded color seen through the pixel, `None` if the ray misses all surfaces.
fn trace(
    scene: &Scene,
    camera: &Camera,
    settings: &RenderSettings,
    point: &ScreenPoint,
) -> Option<Color> {
    let ray = camera.ray_for_pixel(point);
    let hit = scene.find_nearest(&ray, settings.shading.epsilon);

    if settings.trace_pixel == Some(*point) {
        match &hit {
            Some(hit) => log::info!(
                "pixel ({}, {}): origin {:?}, direction {:?}, hit {:?} at distance {}, end point {:?}",
                point.x,
                point.y,
                ray.origin,
                ray.direction,
                hit.surface,
                hit.distance,
                hit.point
            ),
            None => log::info!(
                "pixel ({}, {}): origin {:?}, direction {:?}, no hit",
                point.x,
                point.y,
                ray.origin,
                ray.direction
            ),
        }
    }

    hit.map(|hit| hit.surface.illuminate(scene, &hit.point, &settings.shading))
}
