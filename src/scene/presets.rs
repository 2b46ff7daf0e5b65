//! Built-in scenes.

use crate::color::{Color, NamedColor};
use crate::geometry::{WorldPoint, WorldVector};
use crate::scene::primitives::{AxisBox, Sphere};
use crate::scene::{Light, Scene, Surface};

pub fn showcase_light() -> Light {
    Light {
        position: WorldPoint::new(-40.0, 0.0, 10.0),
    }
}

/// Two boxes and three spheres about 100 units in front of the origin (+Y).
pub fn showcase_surfaces() -> Vec<Surface> {
    vec![
        AxisBox::new(
            WorldPoint::new(2.0, 90.0, 2.0),
            WorldPoint::new(6.0, 110.0, 6.0),
            NamedColor::White.color(),
        )
        .into(),
        AxisBox::new(
            WorldPoint::new(-8.0, 100.0, -8.0),
            WorldPoint::new(-2.0, 120.0, -5.0),
            NamedColor::Blue.color(),
        )
        .into(),
        Sphere::new(WorldPoint::new(7.0, 110.0, 3.0), 3.0, NamedColor::Purple.color()).into(),
        Sphere::new(WorldPoint::new(-3.0, 100.0, 3.0), 4.0, NamedColor::Blue.color()).into(),
        Sphere::new(WorldPoint::new(3.0, 130.0, -2.0), 2.0, NamedColor::Pink.color()).into(),
    ]
}

pub fn showcase() -> Scene {
    Scene::builder()
        .surfaces(showcase_surfaces())
        .light(showcase_light())
        .build()
}

/// Letters E, M, M and A built from boxes and spheres, lit like the showcase.
pub fn lettering() -> Scene {
    let mut surfaces = letter_e(WorldPoint::new(-5.5, 100.0, 5.0), NamedColor::Purple.color());
    surfaces.extend(letter_m(WorldPoint::new(5.5, 100.0, 5.0), NamedColor::Orange.color()));
    surfaces.extend(letter_m(WorldPoint::new(-5.5, 100.0, -5.0), NamedColor::Orange.color()));
    surfaces.extend(letter_a(WorldPoint::new(5.5, 100.0, -5.0), NamedColor::Pink.color()));

    Scene::builder()
        .surfaces(surfaces)
        .light(showcase_light())
        .build()
}

fn letter_e(center: WorldPoint, color: Color) -> Vec<Surface> {
    let bar = |z: f64| AxisBox::centered(center + WorldVector::new(0.0, 0.0, z), 2.0, 1.0, 8.0, color);
    vec![
        bar(2.0).into(),
        bar(0.0).into(),
        bar(-2.0).into(),
        AxisBox::centered(center + WorldVector::new(-1.5, 0.0, 0.0), 1.0, 5.0, 8.0, color).into(),
    ]
}

fn letter_m(center: WorldPoint, color: Color) -> Vec<Surface> {
    let leg = |x: f64| AxisBox::centered(center + WorldVector::new(x, 0.0, 0.0), 1.0, 3.0, 8.0, color);
    let dot = |x: f64| Sphere::new(center + WorldVector::new(x, -5.0, 1.5), 0.7, color);
    vec![
        leg(0.0).into(),
        leg(-2.0).into(),
        leg(2.0).into(),
        dot(-1.0).into(),
        dot(1.0).into(),
    ]
}

fn letter_a(center: WorldPoint, color: Color) -> Vec<Surface> {
    let leg = |x: f64| AxisBox::centered(center + WorldVector::new(x, 0.0, 0.0), 0.75, 3.0, 8.0, color);
    vec![
        AxisBox::centered(center + WorldVector::new(0.0, 0.0, 0.3), 1.0, 0.75, 8.0, color).into(),
        leg(-0.75).into(),
        leg(0.75).into(),
        Sphere::new(center + WorldVector::new(0.0, -3.2, 2.0), 1.0, color).into(),
    ]
}

#[cfg(test)]
mod tests {
    use assert2::assert;

    use super::*;
    use crate::geometry::{EPSILON, Ray};

    #[test]
    fn showcase_contents() {
        let scene = showcase();
        assert!(scene.surfaces().len() == 5);
        assert!(scene.light().position == WorldPoint::new(-40.0, 0.0, 10.0));
    }

    #[test]
    fn lettering_contents() {
        let scene = lettering();
        assert!(scene.surfaces().len() == 4 + 5 + 5 + 4);
    }

    #[test]
    fn showcase_blue_sphere_is_visible_from_origin() {
        let scene = showcase();
        let ray = Ray::towards(WorldPoint::origin(), WorldPoint::new(-3.0, 100.0, 3.0));
        let hit = scene.find_nearest(&ray, EPSILON).unwrap();
        assert!((hit.distance - (WorldVector::new(-3.0, 100.0, 3.0).norm() - 4.0)).abs() < 1e-6);
        assert!(hit.surface.color() == NamedColor::Blue.color());
    }
}
