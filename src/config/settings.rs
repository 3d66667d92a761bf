use log::warn;

use crate::{
    geometry::{Rect, WindowSize},
    joystick::JoystickMode,
    widget::Style,
};

use super::types::*;

/// Part of the window covered by the joystick, as fractions of its size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaFraction {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Default for AreaFraction {
    /// Left third of the window.
    fn default() -> Self {
        Self {
            x: 0.,
            y: 0.,
            w: 1. / 3.,
            h: 1.,
        }
    }
}

impl AreaFraction {
    pub fn to_rect(&self, window: WindowSize) -> Rect {
        let (width, height) = (window.width as f32, window.height as f32);
        Rect::new(
            (width * self.x) as i32,
            (height * self.y) as i32,
            (width * self.w) as i32,
            (height * self.h) as i32,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub mode: JoystickMode,
    pub deadzone: f32,
    pub clampzone: f32,
    pub style: Style,
    pub area: AreaFraction,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: JoystickMode::Dynamic,
            deadzone: 20.,
            clampzone: 100.,
            style: Style::default(),
            area: AreaFraction::default(),
        }
    }
}

impl Settings {
    pub fn apply(&mut self, setting: Setting) {
        match setting {
            Setting::Mode(m) => self.mode = m,
            Setting::Deadzone(d) if is_valid_zone(d) => self.deadzone = d,
            Setting::Clampzone(c) if is_valid_zone(c) => self.clampzone = c,
            Setting::Deadzone(z) | Setting::Clampzone(z) => {
                warn!("ignoring zone size {}, expected a finite value >= 0", z);
            }
            Setting::BaseColor(c) => self.style.base_color = c,
            Setting::TipColor(c) => self.style.tip_color = c,
            Setting::PressedColor(c) => self.style.pressed_color = c,
            Setting::Area(a) => {
                if a.x < 0. || a.y < 0. || a.x + a.w > 1. || a.y + a.h > 1. {
                    warn!("joystick area {:?} extends outside the window", a);
                }
                self.area = a;
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn is_valid_zone(size: f32) -> bool {
    size.is_finite() && size >= 0.
}
