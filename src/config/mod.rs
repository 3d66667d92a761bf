use self::{parse::LineError, settings::Settings, types::*};

pub mod parse;
pub mod settings;
pub mod types;

/// Applies every valid line of `source` to `settings` and returns the
/// errors of the others.
pub fn parse_file<'a>(source: &'a str, settings: &mut Settings) -> Vec<LineError<'a>> {
    let (cmds, errors) = parse::settings_parse(source);
    for cmd in cmds {
        match cmd {
            Cmd::Setting(setting) => settings.apply(setting),
            Cmd::Reset => settings.reset(),
        }
    }
    errors
}

#[cfg(test)]
mod test {
    use super::*;
    use cgmath::point2;

    use crate::{
        backend::Color,
        geometry::{Rect, WindowSize},
        joystick::{Joystick, JoystickMode, PointerEvent, PointerId, Position, Transition},
    };

    #[test]
    fn parse_all_settings() {
        let settings_str = include_str!("all-settings-example");
        let mut settings = Settings::default();
        let errors = parse_file(settings_str, &mut settings);
        dbg!(&errors);
        assert!(errors.is_empty());
        assert_eq!(settings.mode, JoystickMode::Fixed);
        assert_eq!(settings.deadzone, 15.);
        assert_eq!(settings.clampzone, 90.);
        assert_eq!(settings.style.base_color, Color::rgba(40, 40, 60, 200));
        assert_eq!(settings.style.tip_color, Color::rgba(220, 220, 220, 255));
        assert_eq!(settings.style.pressed_color, Color::rgba(90, 120, 200, 180));
        assert_eq!(settings.area.w, 0.5);
        assert_eq!(settings.area.y, 0.25);
    }

    #[test]
    fn reset_then_override() {
        let mut settings = Settings::default();
        let errors = parse_file(
            "DEADZONE = 1\nJOYSTICK_MODE = FIXED\nRESET\nCLAMPZONE = 50\nnonsense",
            &mut settings,
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line, 5);
        assert_eq!(
            settings,
            Settings {
                clampzone: 50.,
                ..Settings::default()
            }
        );
    }

    #[test]
    fn nan_clampzone_keeps_previous_value() {
        let mut settings = Settings::default();
        let errors = parse_file("CLAMPZONE = nan\nDEADZONE = -3", &mut settings);
        assert!(errors.is_empty());
        assert_eq!(settings.clampzone, 100.);
        assert_eq!(settings.deadzone, 20.);
    }

    #[test]
    fn oversized_area_accepts_touches() {
        let mut settings = Settings::default();
        assert!(parse_file("AREA = 0.5 0 1e7 1", &mut settings).is_empty());
        let window = WindowSize::new(800, 600);
        let area = settings.area.to_rect(window);
        assert_eq!(area, Rect::new(400, 0, i32::MAX, 600));
        let mut joystick = Joystick::new(area, window);
        let t = joystick.handle_event(PointerEvent::Down {
            pointer: PointerId(1),
            position: Position::Pixel(point2(500., 10.)),
        });
        assert_eq!(t, Transition::Activated);
    }
}
