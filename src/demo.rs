use std::io::Write;

use anyhow::{anyhow, Context, Result};
use cgmath::point2;
use sdl2::{
    event::{Event, WindowEvent},
    keyboard::Keycode,
    mouse::MouseButton,
    pixels::Color,
};
use touchstick::{
    backend::sdl::SdlCanvas, config::settings::Settings, geometry::WindowSize, PointerEvent,
    PointerId, Position, VirtualJoystick,
};

const MOUSE_POINTER: PointerId = PointerId(-1);
/// `which` of the mouse events SDL synthesizes from touches.
const TOUCH_MOUSE_ID: u32 = u32::MAX;

pub fn run(settings: Settings, mouse: bool) -> Result<()> {
    // Touches are handled on their own, don't mirror the mouse into them.
    sdl2::hint::set("SDL_MOUSE_TOUCH_EVENTS", "0");

    let sdl = sdl2::init()
        .map_err(|e| anyhow!(e))
        .context("initializing SDL")?;
    let video = sdl
        .video()
        .map_err(|e| anyhow!(e))
        .context("initializing SDL video subsystem")?;
    let window = video
        .window("Virtual Joystick SDL2 Demo", 800, 600)
        .position_centered()
        .resizable()
        .build()
        .context("creating window")?;
    let canvas = window
        .into_canvas()
        .accelerated()
        .present_vsync()
        .build()
        .context("creating renderer")?;
    let creator = canvas.texture_creator();
    let mut canvas = SdlCanvas::new(canvas, &creator);

    let (width, height) = canvas.inner().window().size();
    let mut window_size = WindowSize::new(width, height);
    let mut joystick = VirtualJoystick::from_settings(&mut canvas, window_size, &settings)
        .context("creating joystick")?;

    let mut event_pump = sdl.event_pump().map_err(|e| anyhow!(e))?;
    let mut stdout = std::io::stdout();

    'running: loop {
        for event in event_pump.poll_iter() {
            let pointer_event = match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::Window {
                    win_event: WindowEvent::SizeChanged(..),
                    ..
                } => {
                    let (width, height) = canvas.inner().window().size();
                    window_size = WindowSize::new(width, height);
                    joystick.set_window_size(window_size);
                    joystick.resize(&mut canvas, settings.area.to_rect(window_size));
                    None
                }
                Event::FingerDown { finger_id, x, y, .. } => Some(PointerEvent::Down {
                    pointer: PointerId(finger_id),
                    position: Position::Normalized(point2(x, y)),
                }),
                Event::FingerUp { finger_id, x, y, .. } => Some(PointerEvent::Up {
                    pointer: PointerId(finger_id),
                    position: Position::Normalized(point2(x, y)),
                }),
                Event::FingerMotion { finger_id, x, y, .. } => Some(PointerEvent::Move {
                    pointer: PointerId(finger_id),
                    position: Position::Normalized(point2(x, y)),
                }),
                Event::MouseButtonDown {
                    which,
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } if mouse && which != TOUCH_MOUSE_ID => Some(PointerEvent::Down {
                    pointer: MOUSE_POINTER,
                    position: Position::Pixel(point2(x as f32, y as f32)),
                }),
                Event::MouseButtonUp {
                    which,
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } if mouse && which != TOUCH_MOUSE_ID => Some(PointerEvent::Up {
                    pointer: MOUSE_POINTER,
                    position: Position::Pixel(point2(x as f32, y as f32)),
                }),
                Event::MouseMotion { which, x, y, .. } if mouse && which != TOUCH_MOUSE_ID => {
                    Some(PointerEvent::Move {
                        pointer: MOUSE_POINTER,
                        position: Position::Pixel(point2(x as f32, y as f32)),
                    })
                }
                _ => None,
            };
            if let Some(pointer_event) = pointer_event {
                joystick.handle_event(&mut canvas, pointer_event);
            }
        }

        let c = canvas.inner();
        c.set_draw_color(Color::RGB(0, 0, 0));
        c.clear();
        joystick.draw(&mut canvas)?;

        let state = joystick.joystick();
        print!(
            "\rOutput: X={:.2}, Y={:.2} (Pressed: {})       ",
            state.output().x,
            state.output().y,
            if state.is_pressed() { "Yes" } else { "No" }
        );
        stdout.flush()?;

        canvas.inner().present();
    }
    println!();

    Ok(())
}
