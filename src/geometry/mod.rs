mod aabb;
mod ray_box_intersection;
mod vector;

use nalgebra::{Point2, Point3, Vector2, Vector3};

pub use aabb::AABB;
pub use ray_box_intersection::RayIntersectionExt;
pub use vector::VectorExt;

pub type FloatType = f64;

/// Default tolerance for rejecting intersections at (or behind) the ray origin.
pub const EPSILON: FloatType = 1e-8;

pub type ScreenPoint = Point2<u32>;
pub type ScreenSize = Vector2<u32>;
pub type ScreenBlock = AABB<ScreenPoint>;

pub type WorldPoint = Point3<FloatType>;
pub type WorldVector = Vector3<FloatType>;
pub type WorldBox = AABB<WorldPoint>;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: WorldPoint,
    /// Direction of the ray.
    /// Shading expects this to be normalized, but it is not enforced here.
    pub direction: WorldVector,
}

impl Ray {
    pub fn new(origin: WorldPoint, direction: WorldVector) -> Ray {
        Ray { origin, direction }
    }

    /// Creates a ray pointing from `origin` towards `target`, normalized.
    pub fn towards(origin: WorldPoint, target: WorldPoint) -> Ray {
        Ray {
            origin,
            direction: (target - origin).direction(),
        }
    }

    pub fn point_at(&self, distance: FloatType) -> WorldPoint {
        self.origin + self.direction * distance
    }
}
