use crate::geometry::{FloatType, Ray, WorldBox};

pub trait RayIntersectionExt {
    /// Calculate first and last ray intersection with the box, if the ray line crosses it.
    /// Distances may be negative when the box is (partially) behind the ray origin.
    fn slab_interval(&self, ray: &Ray) -> Option<(FloatType, FloatType)>;

    /// Distance to the nearest intersection that is in front of the ray origin.
    /// Rays starting inside the box report the exit distance.
    fn intersect(&self, ray: &Ray, epsilon: FloatType) -> Option<FloatType>;
}

impl RayIntersectionExt for WorldBox {
    fn slab_interval(&self, ray: &Ray) -> Option<(FloatType, FloatType)> {
        // Zeros in direction get turned into positive infinity regardless of the sign of the zero
        let inv_direction = ray
            .direction
            .map(|x| if x == 0.0 { FloatType::INFINITY } else { 1.0 / x });

        // Componentwise distances along the ray to the box's min and max corners.
        // The multiplication is NAN if the ray is starting on the slab bounding plane
        // and is parallel to it. In this case we blend to +-infinity, so that the range becomes infinite
        let to_box_min = (self.min - ray.origin)
            .component_mul(&inv_direction)
            .map(|x| if x.is_nan() { FloatType::NEG_INFINITY } else { x });
        let to_box_max = (self.max - ray.origin)
            .component_mul(&inv_direction)
            .map(|x| if x.is_nan() { FloatType::INFINITY } else { x });

        // Correctly ordered (near <= far)
        let near = to_box_min.zip_map(&to_box_max, FloatType::min);
        let far = to_box_min.zip_map(&to_box_max, FloatType::max);

        let mut min_t = near.x;
        let mut max_t = far.x;
        for axis in 1..3 {
            if min_t > far[axis] || near[axis] > max_t {
                return None;
            }
            min_t = min_t.max(near[axis]);
            max_t = max_t.min(far[axis]);
        }

        Some((min_t, max_t))
    }

    fn intersect(&self, ray: &Ray, epsilon: FloatType) -> Option<FloatType> {
        let (min_t, max_t) = self.slab_interval(ray)?;

        if min_t < epsilon {
            // Origin is inside the box or the box is behind it.
            (max_t >= epsilon).then_some(max_t)
        } else {
            Some(min_t)
        }
    }
}
