use cgmath::Point2;
use sdl2::{
    pixels::{self, PixelFormatEnum},
    rect::{Point, Rect},
    render::{BlendMode, Texture, TextureCreator},
    video::{Window, WindowContext},
};

use super::{Canvas, Color};
use crate::{Error, Result};

impl From<Color> for pixels::Color {
    fn from(c: Color) -> Self {
        pixels::Color::RGBA(c.r, c.g, c.b, c.a)
    }
}

/// SDL2 window canvas, textures borrow its creator.
pub struct SdlCanvas<'r> {
    canvas: sdl2::render::Canvas<Window>,
    creator: &'r TextureCreator<WindowContext>,
}

impl<'r> SdlCanvas<'r> {
    pub fn new(
        canvas: sdl2::render::Canvas<Window>,
        creator: &'r TextureCreator<WindowContext>,
    ) -> Self {
        Self { canvas, creator }
    }

    pub fn inner(&mut self) -> &mut sdl2::render::Canvas<Window> {
        &mut self.canvas
    }
}

impl<'r> Canvas for SdlCanvas<'r> {
    type Texture = Texture<'r>;

    fn create_filled_circle(&mut self, radius: u32, color: Color) -> Result<Texture<'r>> {
        let diameter = radius * 2;
        let creator: &'r TextureCreator<WindowContext> = self.creator;
        let mut texture = creator
            .create_texture_target(PixelFormatEnum::RGBA8888, diameter, diameter)
            .map_err(|e| Error::Allocation {
                what: "circle texture",
                reason: e.to_string(),
            })?;
        texture.set_blend_mode(BlendMode::Blend);

        let r = radius as i32;
        let mut points = Vec::new();
        for y in -r..=r {
            for x in -r..=r {
                if x * x + y * y <= r * r {
                    points.push(Point::new(r + x, r + y));
                }
            }
        }

        let mut drawn = Ok(());
        self.canvas
            .with_texture_canvas(&mut texture, |c| {
                c.set_draw_color(pixels::Color::RGBA(0, 0, 0, 0));
                c.clear();
                c.set_draw_color(color);
                drawn = c.draw_points(&points[..]);
            })
            .map_err(|e| Error::Allocation {
                what: "circle texture",
                reason: e.to_string(),
            })?;
        drawn.map_err(|reason| Error::Allocation {
            what: "circle texture",
            reason,
        })?;
        Ok(texture)
    }

    fn set_tint(&mut self, texture: &mut Texture<'r>, color: Color) {
        texture.set_color_mod(color.r, color.g, color.b);
    }

    fn draw_at(&mut self, texture: &Texture<'r>, center: Point2<f32>, radius: u32) -> Result<()> {
        let dst = Rect::new(
            (center.x - radius as f32) as i32,
            (center.y - radius as f32) as i32,
            radius * 2,
            radius * 2,
        );
        self.canvas.copy(texture, None, dst).map_err(Error::Draw)
    }
}
