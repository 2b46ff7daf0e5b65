use serde::Deserialize;

use crate::color::{Color, scale_color};
use crate::error::{Error, Result};
use crate::geometry::{EPSILON, FloatType, VectorExt as _, WorldPoint, WorldVector};
use crate::scene::{Scene, Surface};

/// Lambertian shading with an ambient term and hard shadows from a single point light.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Shading {
    /// Fraction of the surface color that is always visible, even in shadow.
    pub ambient: FloatType,
    /// Tolerance for self intersection and face lookups.
    pub epsilon: FloatType,
}

impl Default for Shading {
    fn default() -> Self {
        Shading {
            ambient: 0.2,
            epsilon: EPSILON,
        }
    }
}

impl Shading {
    /// Checks that the parameters describe a physically sensible shading.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.ambient) {
            return Err(Error::InvalidShading("ambient must be within [0, 1]"));
        }
        if !(self.epsilon >= 0.0 && self.epsilon.is_finite()) {
            return Err(Error::InvalidShading("epsilon must be finite and non-negative"));
        }
        Ok(())
    }

    /// Brightness factor for a surface with `normal`, lit from `light_direction`.
    /// Both vectors are expected to be normalized.
    pub fn brightness(&self, light_direction: &WorldVector, normal: &WorldVector) -> FloatType {
        let diffuse = light_direction.dot(normal).max(0.0);
        self.ambient + (1.0 - self.ambient) * diffuse
    }

    /// Color of `surface` at `point` (which must lie on it) lit by the scene's light.
    pub fn illuminate(&self, scene: &Scene, surface: &Surface, point: &WorldPoint) -> Color {
        let light_direction = (scene.light().position - point).direction();

        if scene.is_occluded(point, &light_direction, self.epsilon) {
            return scale_color(surface.color(), self.ambient);
        }

        let normal = surface.normal_at(point, self.epsilon).unwrap_or_else(|error| {
            log::debug!("{error}, shading with the nearest face instead");
            surface.fallback_normal(point)
        });

        scale_color(surface.color(), self.brightness(&light_direction, &normal))
    }
}
