use serde::Deserialize;

use crate::geometry::FloatType;

/// Opaque 8 bit per channel surface color.
pub type Color = rgb::RGB8;

/// Scales all channels of the color by `factor`, clamping each to the 0-255 range.
pub fn scale_color(color: Color, factor: FloatType) -> Color {
    let scale = |channel: u8| (channel as FloatType * factor).clamp(0.0, 255.0) as u8;
    Color::new(scale(color.r), scale(color.g), scale(color.b))
}

/// Maps a color to pixel type compatible with module image.
pub fn color_to_image(color: Color) -> image::Rgba<u8> {
    image::Rgba([color.r, color.g, color.b, 255])
}

/// The fixed palette used by the built-in scenes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedColor {
    Black,
    White,
    Blue,
    Orange,
    Purple,
    Pink,
}

impl NamedColor {
    pub const fn color(self) -> Color {
        match self {
            NamedColor::Black => Color::new(0, 0, 0),
            NamedColor::White => Color::new(255, 255, 255),
            NamedColor::Blue => Color::new(0, 0, 255),
            NamedColor::Orange => Color::new(250, 70, 10),
            NamedColor::Purple => Color::new(175, 90, 210),
            NamedColor::Pink => Color::new(140, 20, 20),
        }
    }
}

impl From<NamedColor> for Color {
    fn from(value: NamedColor) -> Self {
        value.color()
    }
}
