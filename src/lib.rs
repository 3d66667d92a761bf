//! On-screen analog joystick for touch screens.
//!
//! [`Joystick`] turns pointer events into a normalized stick value and is
//! independent of any graphics library. [`VirtualJoystick`] adds the base and
//! tip textures on top of a [`backend::Canvas`].

pub mod backend;
pub mod config;
mod error;
pub mod geometry;
pub mod joystick;
pub mod widget;

pub use crate::{
    error::{Error, Result},
    joystick::{Joystick, JoystickMode, PointerEvent, PointerId, Position, Transition},
    widget::{Style, VirtualJoystick},
};
