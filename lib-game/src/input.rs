use macroquad::prelude::*;

use crate::{InputEvent, Key};

const POINTER_BUTTONS: [MouseButton; 3] =
    [MouseButton::Left, MouseButton::Right, MouseButton::Middle];

/// Input of a single frame, flattened into events.
#[derive(Clone, Debug)]
pub struct InputModel {
    pub events: Vec<InputEvent>,
    pub pointer: IVec2,
}

impl InputModel {
    pub fn capture() -> Self {
        let mut events = Vec::new();

        if is_quit_requested() {
            events.push(InputEvent::Quit);
        }

        events.extend(
            get_keys_pressed()
                .into_iter()
                .map(|key| InputEvent::KeyDown(map_key(key))),
        );

        if POINTER_BUTTONS.into_iter().any(is_mouse_button_pressed) {
            events.push(InputEvent::PointerDown);
        }
        if POINTER_BUTTONS.into_iter().any(is_mouse_button_released) {
            events.push(InputEvent::PointerUp);
        }

        let (mx, my) = mouse_position();

        Self {
            events,
            pointer: ivec2(mx as i32, my as i32),
        }
    }
}

pub fn map_key(key: KeyCode) -> Key {
    match key {
        KeyCode::Escape => Key::Escape,
        KeyCode::Space => Key::Space,
        KeyCode::GraveAccent | KeyCode::Apostrophe => Key::DebugToggle,
        _ => Key::Other,
    }
}
