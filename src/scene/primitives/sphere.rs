use crate::color::Color;
use crate::geometry::{FloatType, Ray, VectorExt as _, WorldPoint, WorldVector};

#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    pub center: WorldPoint,
    pub radius: FloatType,
    pub color: Color,
}

impl Sphere {
    pub fn new(center: WorldPoint, radius: FloatType, color: Color) -> Sphere {
        Sphere {
            center,
            radius,
            color,
        }
    }

    /// Distance along the ray to the nearest intersection further than `epsilon`.
    ///
    /// Solves `a*s^2 + b*s + c = 0` for `|origin + s*direction - center| = radius`.
    pub fn intersect(&self, ray: &Ray, epsilon: FloatType) -> Option<FloatType> {
        let offset = ray.origin - self.center;
        let a = ray.direction.dot(&ray.direction);
        let b = 2.0 * ray.direction.dot(&offset);
        let c = offset.dot(&offset) - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;

        if discriminant < 0.0 {
            None
        } else if discriminant == 0.0 {
            let s = -b / (2.0 * a);
            (s > epsilon).then_some(s)
        } else {
            let sqrt_disc = discriminant.sqrt();
            let s1 = (-b - sqrt_disc) / (2.0 * a);
            let s2 = (-b + sqrt_disc) / (2.0 * a);
            [s1, s2]
                .into_iter()
                .filter(|s| *s > epsilon)
                .reduce(FloatType::min)
        }
    }

    pub fn normal_at(&self, point: &WorldPoint) -> WorldVector {
        (point - self.center).direction()
    }
}

#[cfg(test)]
mod tests {
    use assert2::assert;
    use test_strategy::proptest;

    use super::*;
    use crate::color::NamedColor;
    use crate::geometry::{
        EPSILON,
        test::{NonzeroWorldVectorWrapper, PositiveDistanceWrapper, WorldPointWrapper},
    };

    fn sphere() -> Sphere {
        Sphere::new([1.0, 2.0, 3.0].into(), 1.0, NamedColor::Purple.color())
    }

    #[test]
    fn direct_hit_through_center() {
        let ray = Ray::new([1.0, 2.0, 0.0].into(), [0.0, 0.0, 1.0].into());
        let t = sphere().intersect(&ray, EPSILON).expect("We should have a hit!");
        assert!((t - 2.0).abs() < 1e-6);
    }

    #[test]
    fn grazing_hit() {
        let ray = Ray::new([2.0, 2.0, 0.0].into(), [0.0, 0.0, 1.0].into());
        let t = sphere().intersect(&ray, EPSILON).expect("We should have a hit!");
        assert!((t - 3.0).abs() < 1e-6);
    }

    #[test]
    fn narrow_miss() {
        let ray = Ray::new([2.0, 2.01, 0.0].into(), [0.0, 0.0, 1.0].into());
        assert!(sphere().intersect(&ray, EPSILON).is_none());
    }

    #[test]
    fn origin_inside_hits_far_side() {
        let ray = Ray::new([1.0, 2.0, 3.0].into(), [0.0, 1.0, 0.0].into());
        let t = sphere().intersect(&ray, EPSILON).expect("We should have a hit!");
        assert!((t - 1.0).abs() < 1e-9);
    }

    #[test]
    fn sphere_behind_origin_misses() {
        let ray = Ray::new([1.0, 2.0, 10.0].into(), [0.0, 0.0, 1.0].into());
        assert!(sphere().intersect(&ray, EPSILON).is_none());
    }

    #[test]
    fn leaving_from_surface_misses() {
        let ray = Ray::new([1.0, 2.0, 4.0].into(), [0.0, 0.0, 1.0].into());
        assert!(sphere().intersect(&ray, EPSILON).is_none());
    }

    #[test]
    fn zero_direction_misses() {
        let ray = Ray::new([1.0, 2.0, 0.0].into(), WorldVector::zeros());
        assert!(sphere().intersect(&ray, EPSILON).is_none());
    }

    #[test]
    fn normal_points_outwards() {
        let n = sphere().normal_at(&[1.0, 2.0, 4.0].into());
        assert!(n == WorldVector::z());
    }

    /// A ray aimed at the center from outside hits at distance minus radius
    /// and the hit point lies on the sphere.
    #[proptest]
    fn aimed_at_center(
        center: WorldPointWrapper,
        direction: NonzeroWorldVectorWrapper,
        radius: PositiveDistanceWrapper,
        gap: PositiveDistanceWrapper,
    ) {
        let sphere = Sphere::new(*center, *radius, NamedColor::White.color());
        let direction = direction.direction();
        let distance = *radius + *gap;
        let ray = Ray::new(*center - direction * distance, direction);

        // Cancellation in the quadratic grows with the magnitudes involved
        let tolerance = 1e-6 * distance.max(1.0);

        let t = sphere.intersect(&ray, EPSILON).expect("We should have a hit!");
        assert!((t - *gap).abs() < tolerance);
        let point = ray.point_at(t);
        assert!(((point - *center).norm() - *radius).abs() < tolerance);
    }
}
