use log::debug;

use crate::{
    backend::{Canvas, Color},
    config::settings::Settings,
    geometry::{Rect, WindowSize},
    joystick::{Joystick, PointerEvent, Transition},
    Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub base_color: Color,
    pub tip_color: Color,
    /// Tint applied to the tip while a pointer holds the joystick.
    pub pressed_color: Color,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            base_color: Color::rgba(50, 50, 50, 180),
            tip_color: Color::rgba(200, 200, 200, 180),
            pressed_color: Color::rgba(100, 100, 100, 180),
        }
    }
}

/// A [`Joystick`] together with the textures used to draw it.
///
/// `T` is the texture type of the [`Canvas`] it was created on. Both
/// textures live exactly as long as the widget.
pub struct VirtualJoystick<T> {
    joystick: Joystick,
    style: Style,
    base: T,
    tip: T,
}

impl<T> VirtualJoystick<T> {
    pub fn new<C>(canvas: &mut C, area: Rect, window: WindowSize, style: Style) -> Result<Self>
    where
        C: Canvas<Texture = T>,
    {
        let joystick = Joystick::new(area, window);
        let base = canvas.create_filled_circle(joystick.base_radius(), style.base_color)?;
        let tip = canvas.create_filled_circle(joystick.tip_radius(), style.tip_color)?;
        debug!(
            "created joystick over {:?}, base radius {}, tip radius {}",
            area,
            joystick.base_radius(),
            joystick.tip_radius()
        );
        Ok(Self {
            joystick,
            style,
            base,
            tip,
        })
    }

    pub fn from_settings<C>(canvas: &mut C, window: WindowSize, settings: &Settings) -> Result<Self>
    where
        C: Canvas<Texture = T>,
    {
        let mut widget = Self::new(canvas, settings.area.to_rect(window), window, settings.style)?;
        widget.joystick.set_mode(settings.mode);
        widget
            .joystick
            .set_zones(settings.deadzone, settings.clampzone);
        Ok(widget)
    }

    pub fn joystick(&self) -> &Joystick {
        &self.joystick
    }

    pub fn set_window_size(&mut self, window: WindowSize) {
        self.joystick.set_window_size(window);
    }

    pub fn handle_event<C>(&mut self, canvas: &mut C, event: PointerEvent) -> Transition
    where
        C: Canvas<Texture = T>,
    {
        let transition = self.joystick.handle_event(event);
        match transition {
            Transition::Activated => canvas.set_tint(&mut self.tip, self.style.pressed_color),
            Transition::Released => canvas.set_tint(&mut self.tip, self.style.tip_color),
            Transition::Moved | Transition::Ignored => {}
        }
        transition
    }

    /// Moves the joystick to a new area, dropping any touch in progress.
    pub fn resize<C>(&mut self, canvas: &mut C, area: Rect)
    where
        C: Canvas<Texture = T>,
    {
        self.joystick.resize(area);
        canvas.set_tint(&mut self.tip, self.style.tip_color);
    }

    pub fn draw<C>(&self, canvas: &mut C) -> Result<()>
    where
        C: Canvas<Texture = T>,
    {
        if self.joystick.is_hidden() {
            return Ok(());
        }
        canvas.draw_at(
            &self.base,
            self.joystick.base_center(),
            self.joystick.base_radius(),
        )?;
        canvas.draw_at(
            &self.tip,
            self.joystick.tip_center(),
            self.joystick.tip_radius(),
        )
    }
}
