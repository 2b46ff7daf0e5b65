use crate::color::Color;
use crate::error::GeometryError;
use crate::geometry::{
    FloatType, Ray, RayIntersectionExt as _, WorldBox, WorldPoint, WorldVector,
};

/// Axis aligned rectangular prism.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisBox {
    pub bounds: WorldBox,
    pub center: WorldPoint,
    pub color: Color,
}

impl AxisBox {
    /// Box spanning the two corners. `min` must be componentwise smaller than `max`.
    pub fn new(min: WorldPoint, max: WorldPoint, color: Color) -> AxisBox {
        let bounds = WorldBox::new(min, max);
        AxisBox {
            center: bounds.center(),
            bounds,
            color,
        }
    }

    /// Box around `center`. X is width, Z (up) is height and Y (away from the viewer) is depth.
    pub fn centered(
        center: WorldPoint,
        width: FloatType,
        height: FloatType,
        depth: FloatType,
        color: Color,
    ) -> AxisBox {
        let half_size = WorldVector::new(width, depth, height) * 0.5;
        AxisBox {
            bounds: WorldBox::new(center - half_size, center + half_size),
            center,
            color,
        }
    }

    pub fn intersect(&self, ray: &Ray, epsilon: FloatType) -> Option<FloatType> {
        self.bounds.intersect(ray, epsilon)
    }

    /// Normal of the face that `point` lies on.
    /// Faces are tested in order -X, +X, -Y, +Y, -Z, +Z, first one within `epsilon` wins.
    pub fn normal_at(
        &self,
        point: &WorldPoint,
        epsilon: FloatType,
    ) -> Result<WorldVector, GeometryError> {
        for axis in 0..3 {
            if (point[axis] - self.bounds.min[axis]).abs() < epsilon {
                return Ok(-axis_vector(axis));
            }
            if (point[axis] - self.bounds.max[axis]).abs() < epsilon {
                return Ok(axis_vector(axis));
            }
        }

        Err(GeometryError::PointOffSurface {
            point: *point,
            tolerance: epsilon,
        })
    }

    /// Normal of the face closest to `point`, relative to the box proportions.
    /// Used when the point is not within tolerance of any face.
    pub fn nearest_face_normal(&self, point: &WorldPoint) -> WorldVector {
        let half_size = self.bounds.size() * 0.5;
        let relative = (point - self.center).component_div(&half_size);
        let axis = relative.iamax();
        axis_vector(axis) * relative[axis].signum()
    }
}

fn axis_vector(axis: usize) -> WorldVector {
    let mut v = WorldVector::zeros();
    v[axis] = 1.0;
    v
}
