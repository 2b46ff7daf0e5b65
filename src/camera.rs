use bon::bon;
use nalgebra::Unit;

use crate::error::{Error, Result};
use crate::geometry::{
    EPSILON, FloatType, Ray, ScreenPoint, ScreenSize, VectorExt as _, WorldPoint, WorldVector,
};

/// Pinhole camera looking through a rectangular screen.
///
/// Rays start on the screen, at the centre of their pixel, and point away from the eye.
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    eye: WorldPoint,

    resolution: ScreenSize,

    up: Unit<WorldVector>,
    right: Unit<WorldVector>,
    /// Centre of the top left pixel
    screen_origin: WorldPoint,

    /// Distance between pixel centres in world units
    pixel_pitch: FloatType,
}

#[bon]
impl Camera {
    #[builder]
    pub fn new(
        eye: WorldPoint,
        forward: WorldVector,
        up: WorldVector,
        resolution: ScreenSize,
        screen_width: FloatType,
        screen_distance: FloatType,
    ) -> Result<Self> {
        let forward = Unit::try_new(forward, EPSILON)
            .ok_or(Error::InvalidCamera("forward vector must be non-zero"))?;
        let up =
            Unit::try_new(up, EPSILON).ok_or(Error::InvalidCamera("up vector must be non-zero"))?;
        let right = Unit::try_new(forward.cross(up.as_ref()), EPSILON).ok_or(Error::InvalidCamera(
            "`up` and `forward` must be linearly independent",
        ))?;
        let up = Unit::new_normalize(right.cross(forward.as_ref()));

        if resolution.x == 0 || resolution.y == 0 {
            return Err(Error::InvalidCamera("resolution must be non-zero"));
        }
        if !(screen_width > 0.0) {
            return Err(Error::InvalidCamera("screen width must be positive"));
        }
        if !(screen_distance > 0.0) {
            return Err(Error::InvalidCamera("screen distance must be positive"));
        }

        let pixel_pitch = screen_width / (resolution.x as FloatType);
        let half_extent_x = (resolution.x - 1) as FloatType * pixel_pitch / 2.0;
        let half_extent_y = (resolution.y - 1) as FloatType * pixel_pitch / 2.0;
        let screen_origin = eye + forward.as_ref() * screen_distance
            - right.as_ref() * half_extent_x
            + up.as_ref() * half_extent_y;

        Ok(Camera {
            eye,

            resolution,

            up,
            right,
            screen_origin,
            pixel_pitch,
        })
    }
}

impl Camera {
    pub fn get_resolution(&self) -> ScreenSize {
        self.resolution
    }

    /// Returns the ray through the centre of the given image pixel.
    pub fn ray_for_pixel(&self, point: &ScreenPoint) -> Ray {
        let screen_point = self.screen_origin
            + self.right.as_ref() * (point.x as FloatType * self.pixel_pitch)
            - self.up.as_ref() * (point.y as FloatType * self.pixel_pitch);

        Ray::new(screen_point, (screen_point - self.eye).direction())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use assert2::assert;

    fn camera() -> Camera {
        // X goes right, Y goes away, Z goes up
        Camera::builder()
            .eye(WorldPoint::new(0.0, -10.0, 0.0))
            .forward(WorldVector::new(0.0, 1.0, 0.0))
            .up(WorldVector::new(0.0, 0.0, 1.0))
            .resolution(ScreenSize::new(801, 601))
            .screen_width(2.0)
            .screen_distance(10.0)
            .build()
            .unwrap()
    }

    #[test]
    fn left_right_up_down() {
        let camera = camera();

        let ray_center = camera.ray_for_pixel(&ScreenPoint::new(400, 300));
        let ray_left = camera.ray_for_pixel(&ScreenPoint::new(0, 300));
        let ray_right = camera.ray_for_pixel(&ScreenPoint::new(800, 300));
        let ray_up = camera.ray_for_pixel(&ScreenPoint::new(400, 0));
        let ray_down = camera.ray_for_pixel(&ScreenPoint::new(400, 600));

        assert!(ray_center.direction.x.abs() < 1e-9);
        assert!(ray_center.direction.z.abs() < 1e-9);
        assert!(ray_left.direction.x < ray_center.direction.x);
        assert!(ray_right.direction.x > ray_center.direction.x);
        assert!(ray_up.direction.z > ray_center.direction.z);
        assert!(ray_down.direction.z < ray_center.direction.z);
    }

    #[test]
    fn rays_start_on_screen() {
        let camera = camera();

        let center = camera.ray_for_pixel(&ScreenPoint::new(400, 300));
        assert!((center.origin - WorldPoint::origin()).norm() < 1e-9);

        let left = camera.ray_for_pixel(&ScreenPoint::new(0, 300));
        assert!((left.origin.x + 1.0).abs() < 1e-2);
        assert!(left.origin.y.abs() < 1e-9);
        assert!((left.direction.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_degenerate_setup() {
        let result = Camera::builder()
            .eye(WorldPoint::origin())
            .forward(WorldVector::new(0.0, 0.0, 1.0))
            .up(WorldVector::new(0.0, 0.0, 2.0))
            .resolution(ScreenSize::new(10, 10))
            .screen_width(1.0)
            .screen_distance(1.0)
            .build();
        assert!(let Err(Error::InvalidCamera(_)) = result);

        let result = Camera::builder()
            .eye(WorldPoint::origin())
            .forward(WorldVector::new(0.0, 1.0, 0.0))
            .up(WorldVector::new(0.0, 0.0, 1.0))
            .resolution(ScreenSize::new(0, 10))
            .screen_width(1.0)
            .screen_distance(1.0)
            .build();
        assert!(let Err(Error::InvalidCamera(_)) = result);
    }
}
