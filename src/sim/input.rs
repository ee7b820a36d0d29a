//! Input events and button state
//!
//! The host translates its window events into [`InputEvent`] and feeds them in
//! between ticks. Held state persists; press counts are per frame.

use glam::{Quat, UVec2, Vec2, Vec3};

use super::random::RandomSource;
use super::scene::Transform;
use super::state::GameState;

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    A,
    D,
    W,
    S,
    Escape,
    Other,
}

/// Window events relevant to gameplay
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    MouseButtonDown,
    /// Relative pointer motion in pixels
    MouseMotion { xrel: f32, yrel: f32 },
}

/// One directional control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Button {
    /// Presses since the last tick
    pub downs: u8,
    /// Currently held
    pub pressed: bool,
}

impl Button {
    fn press(&mut self) {
        self.downs = self.downs.saturating_add(1);
        self.pressed = true;
    }

    fn release(&mut self) {
        self.pressed = false;
    }
}

/// The four directional controls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Controls {
    pub left: Button,
    pub right: Button,
    pub up: Button,
    pub down: Button,
}

impl Controls {
    fn button_mut(&mut self, key: Key) -> Option<&mut Button> {
        match key {
            Key::A => Some(&mut self.left),
            Key::D => Some(&mut self.right),
            Key::W => Some(&mut self.up),
            Key::S => Some(&mut self.down),
            Key::Escape | Key::Other => None,
        }
    }

    /// Record a key press. Returns whether the key maps to a control.
    pub fn key_down(&mut self, key: Key) -> bool {
        self.button_mut(key).map(Button::press).is_some()
    }

    /// Record a key release. Returns whether the key maps to a control.
    pub fn key_up(&mut self, key: Key) -> bool {
        self.button_mut(key).map(Button::release).is_some()
    }

    /// Clear press counts at the end of a tick
    pub fn reset_downs(&mut self) {
        self.left.downs = 0;
        self.right.downs = 0;
        self.up.downs = 0;
        self.down.downs = 0;
    }
}

/// Turn the camera by relative pointer motion, normalized by window height so
/// a full-height drag sweeps one field of view
pub fn pointer_look(camera: &mut Transform, fovy: f32, xrel: f32, yrel: f32, window_size: UVec2) {
    let height = window_size.y.max(1) as f32;
    let motion = Vec2::new(xrel / height, -yrel / height);
    camera.rotation = (camera.rotation
        * Quat::from_axis_angle(Vec3::Y, -motion.x * fovy)
        * Quat::from_axis_angle(Vec3::X, motion.y * fovy))
    .normalize();
}

/// Apply one window event. Returns whether the game consumed it.
pub fn handle_event<R: RandomSource>(
    state: &mut GameState<R>,
    event: &InputEvent,
    window_size: UVec2,
) -> bool {
    let consumed = match *event {
        InputEvent::KeyDown(Key::Escape) => {
            state.pointer_captured = false;
            true
        }
        InputEvent::KeyDown(key) => state.controls.key_down(key),
        InputEvent::KeyUp(key) => state.controls.key_up(key),
        InputEvent::MouseButtonDown => {
            if state.pointer_captured {
                false
            } else {
                state.pointer_captured = true;
                true
            }
        }
        InputEvent::MouseMotion { xrel, yrel } => {
            if state.pointer_captured {
                let (eye, fovy) = (state.camera.transform, state.camera.fovy);
                pointer_look(state.scene.transform_mut(eye), fovy, xrel, yrel, window_size);
                true
            } else {
                false
            }
        }
    };
    if consumed {
        log::trace!("input consumed: {event:?}");
    }
    consumed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::scene::tests::test_scene;
    use crate::tuning::Tuning;

    #[test]
    fn test_key_mapping() {
        let mut controls = Controls::default();
        assert!(controls.key_down(Key::A));
        assert!(controls.key_down(Key::D));
        assert!(controls.key_down(Key::W));
        assert!(controls.key_down(Key::S));
        assert!(!controls.key_down(Key::Other));
        assert!(controls.left.pressed && controls.right.pressed);
        assert!(controls.up.pressed && controls.down.pressed);

        assert!(controls.key_up(Key::A));
        assert!(!controls.left.pressed);
        assert_eq!(controls.left.downs, 1);
    }

    #[test]
    fn test_downs_saturate_and_reset() {
        let mut controls = Controls::default();
        for _ in 0..300 {
            controls.key_down(Key::D);
        }
        assert_eq!(controls.right.downs, u8::MAX);
        controls.reset_downs();
        assert_eq!(controls.right.downs, 0);
        // Held state survives the reset
        assert!(controls.right.pressed);
    }

    #[test]
    fn test_pointer_look_yaw() {
        let mut camera = Transform::new("Camera", Vec3::ZERO);
        // Dragging left by a full window height yaws left by one fovy
        pointer_look(&mut camera, 1.0, -720.0, 0.0, UVec2::new(1280, 720));
        let expected = Quat::from_axis_angle(Vec3::Y, 1.0);
        assert!(camera.rotation.abs_diff_eq(expected, 1e-5));
        assert!((camera.rotation.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_pointer_look_pitch() {
        let mut camera = Transform::new("Camera", Vec3::ZERO);
        // Screen y grows downwards: moving up pitches up
        pointer_look(&mut camera, 0.5, 0.0, -360.0, UVec2::new(1280, 720));
        let expected = Quat::from_axis_angle(Vec3::X, 0.25);
        assert!(camera.rotation.abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn test_handle_event_keys() {
        let mut state = GameState::new(test_scene(14), Tuning::default()).unwrap();
        let size = UVec2::new(1280, 720);
        assert!(handle_event(&mut state, &InputEvent::KeyDown(Key::D), size));
        assert!(state.controls.right.pressed);
        assert_eq!(state.controls.right.downs, 1);
        assert!(handle_event(&mut state, &InputEvent::KeyUp(Key::D), size));
        assert!(!state.controls.right.pressed);
        assert!(!handle_event(&mut state, &InputEvent::KeyDown(Key::Other), size));
        assert!(!handle_event(&mut state, &InputEvent::KeyUp(Key::Escape), size));
    }

    #[test]
    fn test_pointer_capture_cycle() {
        let mut state = GameState::new(test_scene(14), Tuning::default()).unwrap();
        let size = UVec2::new(1280, 720);
        let motion = InputEvent::MouseMotion { xrel: 50.0, yrel: -20.0 };
        let eye = state.camera().transform;
        let before = state.scene.transform(eye).rotation;

        // Motion is ignored until the pointer is captured
        assert!(!handle_event(&mut state, &motion, size));
        assert_eq!(state.scene.transform(eye).rotation, before);

        assert!(handle_event(&mut state, &InputEvent::MouseButtonDown, size));
        assert!(state.pointer_captured());
        assert!(!handle_event(&mut state, &InputEvent::MouseButtonDown, size));

        assert!(handle_event(&mut state, &motion, size));
        assert_ne!(state.scene.transform(eye).rotation, before);

        assert!(handle_event(&mut state, &InputEvent::KeyDown(Key::Escape), size));
        assert!(!state.pointer_captured());
        assert!(!handle_event(&mut state, &motion, size));
    }
}
