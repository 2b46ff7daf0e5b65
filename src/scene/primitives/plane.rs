use crate::color::Color;
use crate::geometry::{FloatType, Ray, VectorExt as _, WorldPoint, WorldVector};

/// Infinite plane through a quadrilateral.
/// The corners only define the plane; intersections are not bounded by them.
#[derive(Clone, Debug, PartialEq)]
pub struct Plane {
    pub top_left: WorldPoint,
    pub top_right: WorldPoint,
    pub bottom_left: WorldPoint,
    pub bottom_right: WorldPoint,

    /// Not normalized
    pub normal: WorldVector,
    pub color: Color,
}

impl Plane {
    pub fn new(
        top_left: WorldPoint,
        top_right: WorldPoint,
        bottom_left: WorldPoint,
        bottom_right: WorldPoint,
        color: Color,
    ) -> Plane {
        let normal = (top_right - top_left).cross(&(top_right - bottom_right));
        Plane {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
            normal,
            color,
        }
    }

    /// Distance along the ray to the plane, `None` if the ray is parallel to the plane
    /// or the plane is not further than `epsilon` in front of the origin.
    pub fn intersect(&self, ray: &Ray, epsilon: FloatType) -> Option<FloatType> {
        let denominator = ray.direction.dot(&self.normal);
        if denominator == 0.0 {
            return None;
        }

        let d = self.normal.dot(&self.top_right.coords);
        let s = (d - self.normal.dot(&ray.origin.coords)) / denominator;
        (s > epsilon).then_some(s)
    }

    pub fn unit_normal(&self) -> WorldVector {
        self.normal.direction()
    }
}

#[cfg(test)]
mod tests {
    use assert2::assert;
    use test_case::test_case;

    use super::*;
    use crate::color::NamedColor;
    use crate::geometry::EPSILON;

    /// Vertical plane at y = 5, facing the viewer at -y.
    fn wall() -> Plane {
        Plane::new(
            WorldPoint::new(-1.0, 5.0, 1.0),
            WorldPoint::new(1.0, 5.0, 1.0),
            WorldPoint::new(-1.0, 5.0, -1.0),
            WorldPoint::new(1.0, 5.0, -1.0),
            NamedColor::Orange.color(),
        )
    }

    #[test]
    fn normal_from_edges() {
        assert!(wall().normal == WorldVector::new(0.0, -4.0, 0.0));
        assert!(wall().unit_normal() == WorldVector::new(0.0, -1.0, 0.0));
    }

    #[test_case([0.0, 0.0, 0.0], [0.0, 1.0, 0.0], Some(5.0) ; "straight_on")]
    #[test_case([3.0, 2.0, -7.0], [0.0, 1.0, 0.0], Some(3.0) ; "outside_corners_still_hits")]
    #[test_case([0.0, 10.0, 0.0], [0.0, -1.0, 0.0], Some(5.0) ; "from_behind")]
    #[test_case([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], None ; "parallel")]
    #[test_case([0.0, 10.0, 0.0], [0.0, 1.0, 0.0], None ; "plane_behind_origin")]
    #[test_case([0.0, 5.0, 0.0], [0.0, 1.0, 0.0], None ; "origin_on_plane")]
    fn intersections(origin: [f64; 3], direction: [f64; 3], expected: Option<f64>) {
        let ray = Ray::new(origin.into(), direction.into());
        assert!(wall().intersect(&ray, EPSILON) == expected);
    }

    #[test]
    fn oblique_round_trip() {
        let plane = wall();
        let ray = Ray::towards(WorldPoint::new(2.0, -3.0, 4.0), WorldPoint::new(0.5, 5.0, 0.25));
        let t = plane.intersect(&ray, EPSILON).expect("We should have a hit!");
        let point = ray.point_at(t);
        assert!((point.y - 5.0).abs() < 1e-9);
        assert!((point.x - 0.5).abs() < 1e-9);
        assert!((point.z - 0.25).abs() < 1e-9);
    }
}
