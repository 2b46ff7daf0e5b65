pub mod presets;
pub mod primitives;
mod surface;

use bon::bon;
use ordered_float::OrderedFloat;

use crate::geometry::{FloatType, Ray, WorldPoint, WorldVector};

pub use surface::Surface;

/// Point light without falloff.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light {
    pub position: WorldPoint,
}

/// Nearest intersection of a ray with the scene.
#[derive(Copy, Clone, Debug)]
pub struct Hit<'a> {
    pub distance: FloatType,
    pub point: WorldPoint,
    pub surface: &'a Surface,
}

/// Surfaces and the light illuminating them. Immutable once built.
#[derive(Clone, Debug)]
pub struct Scene {
    surfaces: Vec<Surface>,
    light: Light,
}

#[bon]
impl Scene {
    #[builder]
    pub fn new(#[builder(default)] surfaces: Vec<Surface>, light: Light) -> Self {
        Scene { surfaces, light }
    }
}

impl Scene {
    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    pub fn light(&self) -> &Light {
        &self.light
    }

    /// Finds the closest surface hit by the ray.
    /// Brute force scan, ties go to the surface that comes first.
    pub fn find_nearest(&self, ray: &Ray, epsilon: FloatType) -> Option<Hit<'_>> {
        self.surfaces
            .iter()
            .filter_map(|surface| {
                surface
                    .intersect(ray, epsilon)
                    .map(|distance| (OrderedFloat(distance), surface))
            })
            .min_by_key(|(distance, _)| *distance)
            .map(|(OrderedFloat(distance), surface)| Hit {
                distance,
                point: ray.point_at(distance),
                surface,
            })
    }

    /// Returns true if any surface intersects the ray starting at `point` going in `direction`.
    /// Hits behind the light count as well.
    pub fn is_occluded(&self, point: &WorldPoint, direction: &WorldVector, epsilon: FloatType) -> bool {
        let ray = Ray::new(*point, *direction);
        self.surfaces
            .iter()
            .any(|surface| surface.intersect(&ray, epsilon).is_some())
    }
}

#[cfg(test)]
mod tests {
    use assert2::assert;

    use super::*;
    use crate::color::NamedColor;
    use crate::geometry::EPSILON;
    use crate::scene::primitives::{AxisBox, Sphere};

    fn light() -> Light {
        Light {
            position: WorldPoint::new(0.0, 0.0, 100.0),
        }
    }

    #[test]
    fn nearest_of_three() {
        let a = Sphere::new(WorldPoint::new(0.0, 6.0, 0.0), 1.0, NamedColor::Blue.color());
        let b = Sphere::new(WorldPoint::new(0.0, 4.0, 0.0), 1.0, NamedColor::Pink.color());
        let c = AxisBox::new(
            WorldPoint::new(-1.0, 8.0, -1.0),
            WorldPoint::new(1.0, 9.0, 1.0),
            NamedColor::White.color(),
        );
        let scene = Scene::builder()
            .surfaces(vec![a.into(), b.clone().into(), c.into()])
            .light(light())
            .build();

        let ray = Ray::new(WorldPoint::origin(), WorldVector::y());
        let hit = scene.find_nearest(&ray, EPSILON).expect("We should have a hit!");

        assert!(hit.surface == &Surface::Sphere(b));
        assert!((hit.distance - 3.0).abs() < 1e-9);
        assert!((hit.point - WorldPoint::new(0.0, 3.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn order_does_not_matter() {
        let near: Surface =
            Sphere::new(WorldPoint::new(0.0, 4.0, 0.0), 1.0, NamedColor::Pink.color()).into();
        let far: Surface =
            Sphere::new(WorldPoint::new(0.0, 8.0, 0.0), 1.0, NamedColor::Blue.color()).into();
        let ray = Ray::new(WorldPoint::origin(), WorldVector::y());

        for surfaces in [vec![near.clone(), far.clone()], vec![far.clone(), near.clone()]] {
            let scene = Scene::builder().surfaces(surfaces).light(light()).build();
            let hit = scene.find_nearest(&ray, EPSILON).unwrap();
            assert!(hit.surface == &near);
        }
    }

    #[test]
    fn tie_goes_to_first() {
        let first: Surface =
            Sphere::new(WorldPoint::new(0.0, 4.0, 0.0), 1.0, NamedColor::Pink.color()).into();
        let second: Surface =
            Sphere::new(WorldPoint::new(0.0, 4.0, 0.0), 1.0, NamedColor::Blue.color()).into();
        let scene = Scene::builder()
            .surfaces(vec![first.clone(), second])
            .light(light())
            .build();

        let ray = Ray::new(WorldPoint::origin(), WorldVector::y());
        assert!(scene.find_nearest(&ray, EPSILON).unwrap().surface == &first);
    }

    #[test]
    fn empty_scene_has_no_hits() {
        let scene = Scene::builder().light(light()).build();
        let ray = Ray::new(WorldPoint::origin(), WorldVector::y());
        assert!(scene.find_nearest(&ray, EPSILON).is_none());
        assert!(!scene.is_occluded(&WorldPoint::origin(), &WorldVector::z(), EPSILON));
    }

    #[test]
    fn occlusion() {
        let blocker: Surface =
            Sphere::new(WorldPoint::new(0.0, 0.0, 50.0), 1.0, NamedColor::Pink.color()).into();
        let scene = Scene::builder()
            .surfaces(vec![blocker])
            .light(light())
            .build();

        assert!(scene.is_occluded(&WorldPoint::origin(), &WorldVector::z(), EPSILON));
        assert!(!scene.is_occluded(&WorldPoint::origin(), &WorldVector::x(), EPSILON));
    }
}
