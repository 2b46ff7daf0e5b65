use std::{
    num::{NonZeroU32, NonZeroUsize},
    path::Path,
    str::FromStr,
};

use serde::Deserialize;

use crate::{
    camera::Camera,
    color::{Color, NamedColor},
    error::{Error, Result},
    geometry::{FloatType, ScreenPoint, ScreenSize, WorldPoint, WorldVector},
    renderer::RenderSettings,
    scene::{
        Light, Scene, Surface, presets,
        primitives::{AxisBox, Plane, Sphere},
    },
    shading::Shading,
};

type Triple = [FloatType; 3];

/// Color given either by its palette name or as `[r, g, b]`.
#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ColorSpec {
    Named(NamedColor),
    Rgb([u8; 3]),
}

impl From<ColorSpec> for Color {
    fn from(value: ColorSpec) -> Self {
        match value {
            ColorSpec::Named(named) => named.color(),
            ColorSpec::Rgb([r, g, b]) => Color::new(r, g, b),
        }
    }
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(tag = "type", deny_unknown_fields)]
pub enum SurfaceConfig {
    Sphere {
        center: Triple,
        radius: FloatType,
        color: ColorSpec,
    },
    Box {
        min: Triple,
        max: Triple,
        color: ColorSpec,
    },
    CenteredBox {
        center: Triple,
        width: FloatType,
        height: FloatType,
        depth: FloatType,
        color: ColorSpec,
    },
    Plane {
        top_left: Triple,
        top_right: Triple,
        bottom_left: Triple,
        bottom_right: Triple,
        color: ColorSpec,
    },
}

impl From<SurfaceConfig> for Surface {
    fn from(value: SurfaceConfig) -> Self {
        match value {
            SurfaceConfig::Sphere {
                center,
                radius,
                color,
            } => Sphere::new(point(center), radius, color.into()).into(),
            SurfaceConfig::Box { min, max, color } => {
                AxisBox::new(point(min), point(max), color.into()).into()
            }
            SurfaceConfig::CenteredBox {
                center,
                width,
                height,
                depth,
                color,
            } => AxisBox::centered(point(center), width, height, depth, color.into()).into(),
            SurfaceConfig::Plane {
                top_left,
                top_right,
                bottom_left,
                bottom_right,
                color,
            } => Plane::new(
                point(top_left),
                point(top_right),
                point(bottom_left),
                point(bottom_right),
                color.into(),
            )
            .into(),
        }
    }
}

/// Built-in scene used when the config lists no surfaces.
#[derive(Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Showcase,
    Lettering,
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    pub tile_size: NonZeroU32,
    pub threads: Option<NonZeroUsize>,
    pub background: ColorSpec,
    /// Pixel whose ray gets logged, as `[x, y]`.
    pub trace_pixel: Option<[u32; 2]>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        let settings = RenderSettings::default();
        RenderConfig {
            tile_size: settings.tile_size,
            threads: settings.threads,
            background: ColorSpec::Named(NamedColor::Black),
            trace_pixel: None,
        }
    }
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    pub eye: Triple,
    pub forward: Triple,
    pub up: Triple,
    pub resolution: [u32; 2],
    pub screen_width: FloatType,
    pub screen_distance: FloatType,
}

impl Default for CameraConfig {
    fn default() -> Self {
        CameraConfig {
            eye: [0.0, -10.0, 0.0],
            forward: [0.0, 1.0, 0.0],
            up: [0.0, 0.0, 1.0],
            resolution: [500, 500],
            screen_width: 2.0,
            screen_distance: 10.0,
        }
    }
}

impl CameraConfig {
    pub fn build(&self) -> Result<Camera> {
        Camera::builder()
            .eye(point(self.eye))
            .forward(vector(self.forward))
            .up(vector(self.up))
            .resolution(ScreenSize::new(self.resolution[0], self.resolution[1]))
            .screen_width(self.screen_width)
            .screen_distance(self.screen_distance)
            .build()
    }
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LightConfig {
    pub position: Triple,
}

impl Default for LightConfig {
    fn default() -> Self {
        let position = presets::showcase_light().position;
        LightConfig {
            position: [position.x, position.y, position.z],
        }
    }
}

/// Everything needed for a render, as read from a TOML file.
/// Every section is optional, an empty file renders the showcase scene.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub render: RenderConfig,
    pub shading: Shading,
    pub camera: CameraConfig,
    pub light: LightConfig,
    pub preset: Preset,
    /// Overrides the preset when present.
    pub surfaces: Option<Vec<SurfaceConfig>>,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        log::debug!("loading config from {}", path.display());
        std::fs::read_to_string(path)?.parse()
    }

    pub fn scene(&self) -> Scene {
        let surfaces = match &self.surfaces {
            Some(surfaces) => surfaces.iter().copied().map(Surface::from).collect(),
            None => match self.preset {
                Preset::Showcase => presets::showcase_surfaces(),
                Preset::Lettering => presets::lettering().surfaces().to_vec(),
            },
        };

        Scene::builder()
            .surfaces(surfaces)
            .light(Light {
                position: point(self.light.position),
            })
            .build()
    }

    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            tile_size: self.render.tile_size,
            threads: self.render.threads,
            background: self.render.background.into(),
            shading: self.shading,
            trace_pixel: self.render.trace_pixel.map(|[x, y]| ScreenPoint::new(x, y)),
        }
    }

    pub fn into_parts(self) -> Result<(Scene, Camera, RenderSettings)> {
        let camera = self.camera.build()?;
        self.shading.validate()?;
        Ok((self.scene(), camera, self.render_settings()))
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Config> {
        Ok(toml::from_str(s)?)
    }
}

fn point(coords: Triple) -> WorldPoint {
    WorldPoint::from(coords)
}

fn vector(coords: Triple) -> WorldVector {
    WorldVector::from(coords)
}
