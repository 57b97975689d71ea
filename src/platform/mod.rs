//! Window system glue
//!
//! Keyboard state is sampled into a plain snapshot each frame; the
//! simulation only ever sees a [`TickInput`], never raw window events.

pub mod window;

use winit::event::{ElementState, KeyboardInput, VirtualKeyCode, WindowEvent};

use crate::sim::TickInput;

/// Currently-held controls plus any pending close request
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    left: bool,
    right: bool,
    up: bool,
    down: bool,
    fire: bool,
    close_requested: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one window event into the snapshot
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.close_requested = true,
            WindowEvent::KeyboardInput {
                input:
                    KeyboardInput {
                        virtual_keycode: Some(key),
                        state,
                        ..
                    },
                ..
            } => {
                let held = *state == ElementState::Pressed;
                match key {
                    VirtualKeyCode::Left | VirtualKeyCode::A => self.left = held,
                    VirtualKeyCode::Right | VirtualKeyCode::D => self.right = held,
                    VirtualKeyCode::Up | VirtualKeyCode::W => self.up = held,
                    VirtualKeyCode::Down | VirtualKeyCode::S => self.down = held,
                    VirtualKeyCode::Space => self.fire = held,
                    _ => {}
                }
            }
            _ => {}
        }
    }

    /// Snapshot for the next simulation tick
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
            up: self.up,
            down: self.down,
            fire: self.fire,
            quit: self.close_requested,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(deprecated)]
    fn key_event(key: VirtualKeyCode, state: ElementState) -> WindowEvent<'static> {
        WindowEvent::KeyboardInput {
            device_id: unsafe { winit::event::DeviceId::dummy() },
            input: KeyboardInput {
                scancode: 0,
                state,
                virtual_keycode: Some(key),
                modifiers: Default::default(),
            },
            is_synthetic: false,
        }
    }

    #[test]
    fn test_press_and_release_track_held_state() {
        let mut input = InputState::new();
        input.handle_window_event(&key_event(VirtualKeyCode::Left, ElementState::Pressed));
        input.handle_window_event(&key_event(VirtualKeyCode::Space, ElementState::Pressed));
        let tick = input.tick_input();
        assert!(tick.left && tick.fire && !tick.right && !tick.quit);

        input.handle_window_event(&key_event(VirtualKeyCode::Left, ElementState::Released));
        assert!(!input.tick_input().left);
        assert!(input.tick_input().fire);
    }

    #[test]
    fn test_wasd_aliases_arrows() {
        let mut input = InputState::new();
        input.handle_window_event(&key_event(VirtualKeyCode::D, ElementState::Pressed));
        input.handle_window_event(&key_event(VirtualKeyCode::W, ElementState::Pressed));
        let tick = input.tick_input();
        assert!(tick.right && tick.up);
    }

    #[test]
    fn test_close_request_is_sticky() {
        let mut input = InputState::new();
        input.handle_window_event(&WindowEvent::CloseRequested);
        assert!(input.tick_input().quit);
        input.handle_window_event(&key_event(VirtualKeyCode::Space, ElementState::Pressed));
        assert!(input.tick_input().quit);
    }
}
