#[cfg(feature = "sdl2")]
pub mod sdl;

use cgmath::Point2;

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Drawing surface the joystick renders itself on.
///
/// Textures are released when dropped.
pub trait Canvas {
    type Texture;

    fn create_filled_circle(&mut self, radius: u32, color: Color) -> Result<Self::Texture>;
    fn set_tint(&mut self, texture: &mut Self::Texture, color: Color);
    /// Draws `texture` stretched over the square of half-side `radius`
    /// around `center`.
    fn draw_at(&mut self, texture: &Self::Texture, center: Point2<f32>, radius: u32)
        -> Result<()>;
}
