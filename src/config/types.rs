use crate::{backend::Color, joystick::JoystickMode};

use super::settings::AreaFraction;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Setting {
    Mode(JoystickMode),
    Deadzone(f32),
    Clampzone(f32),
    BaseColor(Color),
    TipColor(Color),
    PressedColor(Color),
    Area(AreaFraction),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cmd {
    Setting(Setting),
    Reset,
}
