use crate::color::Color;
use crate::error::GeometryError;
use crate::geometry::{FloatType, Ray, VectorExt as _, WorldPoint, WorldVector};
use crate::scene::Scene;
use crate::scene::primitives::{AxisBox, Plane, Sphere};
use crate::shading::Shading;

/// Any solid that can be placed in a scene.
#[derive(Clone, Debug, PartialEq)]
pub enum Surface {
    Sphere(Sphere),
    Box(AxisBox),
    Plane(Plane),
}

impl From<Sphere> for Surface {
    fn from(data: Sphere) -> Self {
        Surface::Sphere(data)
    }
}

impl From<AxisBox> for Surface {
    fn from(data: AxisBox) -> Self {
        Surface::Box(data)
    }
}

impl From<Plane> for Surface {
    fn from(data: Plane) -> Self {
        Surface::Plane(data)
    }
}

impl Surface {
    /// Distance along the ray to the nearest intersection further than `epsilon`.
    /// Only finite distances are reported.
    pub fn intersect(&self, ray: &Ray, epsilon: FloatType) -> Option<FloatType> {
        let distance = match self {
            Surface::Sphere(sphere) => sphere.intersect(ray, epsilon),
            Surface::Box(b) => b.intersect(ray, epsilon),
            Surface::Plane(plane) => plane.intersect(ray, epsilon),
        };
        distance.filter(|distance| distance.is_finite())
    }

    /// Unit normal at a point on the surface.
    pub fn normal_at(
        &self,
        point: &WorldPoint,
        epsilon: FloatType,
    ) -> Result<WorldVector, GeometryError> {
        match self {
            Surface::Sphere(sphere) => Ok(sphere.normal_at(point)),
            Surface::Box(b) => b.normal_at(point, epsilon),
            Surface::Plane(plane) => Ok(plane.unit_normal()),
        }
    }

    /// Best guess at a normal for a point that `normal_at` rejected.
    pub fn fallback_normal(&self, point: &WorldPoint) -> WorldVector {
        match self {
            Surface::Sphere(sphere) => sphere.normal_at(point),
            Surface::Box(b) => b.nearest_face_normal(point),
            Surface::Plane(plane) => plane.normal.direction(),
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Surface::Sphere(sphere) => sphere.color,
            Surface::Box(b) => b.color,
            Surface::Plane(plane) => plane.color,
        }
    }

    /// Color of this surface at `point` as lit by the scene's light.
    pub fn illuminate(&self, scene: &Scene, point: &WorldPoint, shading: &Shading) -> Color {
        shading.illuminate(scene, self, point)
    }
}
