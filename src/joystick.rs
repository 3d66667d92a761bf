use std::{fmt, str::FromStr};

use cgmath::{Point2, Vector2, Zero};
use log::{debug, trace, warn};

use crate::geometry::{Rect, VectorExt, WindowSize};

pub const DEFAULT_DEADZONE: f32 = 10.;
pub const DEFAULT_CLAMPZONE: f32 = 75.;

const BASE_RADIUS_RATIO: f32 = 0.25;
const TIP_RADIUS_RATIO: f32 = 0.6;

/// How the base reacts to a touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoystickMode {
    /// The base never moves, touches must start inside it.
    Fixed,
    /// The base jumps to the touch-down point.
    Dynamic,
    /// Like `Dynamic`, then the base chases the finger past the clampzone.
    Following,
}

impl Default for JoystickMode {
    fn default() -> Self {
        JoystickMode::Dynamic
    }
}

impl FromStr for JoystickMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FIXED" => Ok(JoystickMode::Fixed),
            "DYNAMIC" => Ok(JoystickMode::Dynamic),
            "FOLLOWING" => Ok(JoystickMode::Following),
            _ => Err(format!("unknown joystick mode: {}", s)),
        }
    }
}

impl fmt::Display for JoystickMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            JoystickMode::Fixed => "FIXED",
            JoystickMode::Dynamic => "DYNAMIC",
            JoystickMode::Following => "FOLLOWING",
        })
    }
}

/// Finger or mouse identifier, as reported by the input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub i64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    /// `[0, 1]` on each axis, relative to the window.
    Normalized(Point2<f32>),
    /// Window pixels.
    Pixel(Point2<f32>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { pointer: PointerId, position: Position },
    Up { pointer: PointerId, position: Position },
    Move { pointer: PointerId, position: Position },
}

/// What an event did to the joystick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Ignored,
    Activated,
    Moved,
    Released,
}

/// Touch state machine of an on-screen analog stick.
///
/// Feed it pointer events with [`Joystick::handle_event`], then read
/// [`Joystick::output`] for the stick value and the base/tip centers for
/// drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct Joystick {
    area: Rect,
    window: WindowSize,

    deadzone: f32,
    clampzone: f32,
    mode: JoystickMode,

    pressed: bool,
    output: Vector2<f32>,
    tracked: Option<PointerId>,

    base_center: Point2<f32>,
    tip_center: Point2<f32>,
    base_default_center: Point2<f32>,
    base_radius: u32,
    tip_radius: u32,

    hidden: bool,
}

impl Joystick {
    pub fn new(area: Rect, window: WindowSize) -> Self {
        let base_radius = (area.min_side().max(0) as f32 * BASE_RADIUS_RATIO) as u32;
        let tip_radius = (base_radius as f32 * TIP_RADIUS_RATIO) as u32;
        let center = area.center();
        Self {
            area,
            window,
            deadzone: DEFAULT_DEADZONE,
            clampzone: DEFAULT_CLAMPZONE,
            mode: JoystickMode::default(),
            pressed: false,
            output: Vector2::zero(),
            tracked: None,
            base_center: center,
            tip_center: center,
            base_default_center: center,
            base_radius,
            tip_radius,
            hidden: true,
        }
    }

    pub fn set_window_size(&mut self, window: WindowSize) {
        self.window = window;
    }

    pub fn set_mode(&mut self, mode: JoystickMode) {
        self.mode = mode;
    }

    pub fn set_deadzone(&mut self, deadzone: f32) {
        self.set_zones(deadzone, self.clampzone);
    }

    pub fn set_clampzone(&mut self, clampzone: f32) {
        self.set_zones(self.deadzone, clampzone);
    }

    pub fn set_zones(&mut self, deadzone: f32, clampzone: f32) {
        self.deadzone = deadzone;
        self.clampzone = clampzone;
        if self.is_degenerate() {
            warn!(
                "deadzone ({}) is not smaller than clampzone ({}), output will stay at zero",
                deadzone, clampzone
            );
        }
    }

    /// The deadzone covers the whole clampzone, so no displacement can
    /// produce output.
    pub fn is_degenerate(&self) -> bool {
        !(self.clampzone - self.deadzone > 0.)
    }

    pub fn handle_event(&mut self, event: PointerEvent) -> Transition {
        match event {
            PointerEvent::Down { pointer, position } => {
                let position = self.to_pixels(position);
                self.pointer_down(pointer, position)
            }
            _ if self.hidden => Transition::Ignored,
            PointerEvent::Up { pointer, .. } if self.tracked == Some(pointer) => {
                debug!("pointer {} released", pointer.0);
                self.reset();
                Transition::Released
            }
            PointerEvent::Move { pointer, position } if self.tracked == Some(pointer) => {
                let position = self.to_pixels(position);
                self.update(position);
                Transition::Moved
            }
            PointerEvent::Up { .. } | PointerEvent::Move { .. } => Transition::Ignored,
        }
    }

    /// Replaces the interaction area and puts the joystick back at rest in
    /// its middle.
    pub fn resize(&mut self, area: Rect) {
        debug!("joystick area resized to {:?}", area);
        self.area = area;
        self.base_default_center = area.center();
        self.reset();
    }

    /// Drops the tracked pointer and hides the joystick.
    pub fn reset(&mut self) {
        self.pressed = false;
        self.output = Vector2::zero();
        self.tracked = None;
        self.base_center = self.base_default_center;
        self.tip_center = self.base_default_center;
        self.hidden = true;
    }

    fn to_pixels(&self, position: Position) -> Point2<f32> {
        match position {
            Position::Normalized(p) => self.window.to_pixels(p),
            Position::Pixel(p) => p,
        }
    }

    fn is_inside_base(&self, point: Point2<f32>) -> bool {
        let d = point - self.base_center;
        let r = self.base_radius as f32;
        d.x * d.x + d.y * d.y <= r * r
    }

    fn pointer_down(&mut self, pointer: PointerId, position: Point2<f32>) -> Transition {
        if self.tracked.is_some() || !self.area.contains(position) {
            return Transition::Ignored;
        }
        let activate = match self.mode {
            JoystickMode::Fixed => self.is_inside_base(position),
            JoystickMode::Dynamic | JoystickMode::Following => true,
        };
        if !activate {
            return Transition::Ignored;
        }

        match self.mode {
            JoystickMode::Fixed => {}
            JoystickMode::Dynamic | JoystickMode::Following => self.base_center = position,
        }
        debug!(
            "pointer {} activated joystick at ({}, {})",
            pointer.0, position.x, position.y
        );
        self.tracked = Some(pointer);
        self.hidden = false;
        self.update(position);
        Transition::Activated
    }

    fn update(&mut self, touch: Point2<f32>) {
        let raw = touch - self.base_center;
        let clamped = raw.limit_length(self.clampzone);

        match self.mode {
            JoystickMode::Following if raw.length() > self.clampzone => {
                self.base_center = touch - clamped;
            }
            JoystickMode::Fixed | JoystickMode::Dynamic | JoystickMode::Following => {}
        }

        // Placed after the base so the tip stays pinned on the clampzone edge.
        self.tip_center = self.base_center + clamped;

        let len = clamped.length();
        if len > self.deadzone {
            self.pressed = true;
            self.output = if self.is_degenerate() {
                Vector2::zero()
            } else {
                let max_effective = self.clampzone - self.deadzone;
                let ratio = ((len - self.deadzone) / max_effective).min(1.);
                (clamped.normalize_or_zero() * ratio).map(|c| c.clamp(-1., 1.))
            };
        } else {
            self.pressed = false;
            self.output = Vector2::zero();
        }
        trace!(
            "joystick output ({:.3}, {:.3}), pressed: {}",
            self.output.x,
            self.output.y,
            self.pressed
        );
    }

    pub fn output(&self) -> Vector2<f32> {
        self.output
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn tracked_pointer(&self) -> Option<PointerId> {
        self.tracked
    }

    pub fn base_center(&self) -> Point2<f32> {
        self.base_center
    }

    pub fn tip_center(&self) -> Point2<f32> {
        self.tip_center
    }

    pub fn base_default_center(&self) -> Point2<f32> {
        self.base_default_center
    }

    pub fn base_radius(&self) -> u32 {
        self.base_radius
    }

    pub fn tip_radius(&self) -> u32 {
        self.tip_radius
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn window_size(&self) -> WindowSize {
        self.window
    }

    pub fn mode(&self) -> JoystickMode {
        self.mode
    }

    pub fn deadzone(&self) -> f32 {
        self.deadzone
    }

    pub fn clampzone(&self) -> f32 {
        self.clampzone
    }
}
