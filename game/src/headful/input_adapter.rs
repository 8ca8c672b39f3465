use engine::app::InputFrame;
use winit::event::VirtualKeyCode;

use crate::input::{Intent, KeyInput};

pub fn map_key_to_intent(key: VirtualKeyCode) -> Option<Intent> {
    match key {
        VirtualKeyCode::Left | VirtualKeyCode::A => Some(Intent::MoveLeft),
        VirtualKeyCode::Right | VirtualKeyCode::D => Some(Intent::MoveRight),
        VirtualKeyCode::Down | VirtualKeyCode::S => Some(Intent::SoftDrop),
        VirtualKeyCode::Up | VirtualKeyCode::W | VirtualKeyCode::X => Some(Intent::Rotate),
        VirtualKeyCode::R | VirtualKeyCode::Return => Some(Intent::Reset),
        _ => None,
    }
}

/// Key transitions from the platform frame, in arrival order. Unbound keys are dropped.
pub fn key_inputs_from_frame(input: &InputFrame) -> Vec<KeyInput> {
    input
        .key_events
        .iter()
        .filter_map(|event| {
            map_key_to_intent(event.key).map(|intent| KeyInput {
                intent,
                pressed: event.pressed,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use engine::app::KeyEvent;

    use super::*;

    #[test]
    fn arrows_and_letters_share_intents() {
        assert_eq!(map_key_to_intent(VirtualKeyCode::A), Some(Intent::MoveLeft));
        assert_eq!(map_key_to_intent(VirtualKeyCode::Left), Some(Intent::MoveLeft));
        assert_eq!(map_key_to_intent(VirtualKeyCode::X), Some(Intent::Rotate));
        assert_eq!(map_key_to_intent(VirtualKeyCode::Return), Some(Intent::Reset));
        assert_eq!(map_key_to_intent(VirtualKeyCode::Space), None);
    }

    #[test]
    fn frame_keeps_order_and_skips_unbound_keys() {
        let frame = InputFrame {
            key_events: vec![
                KeyEvent {
                    key: VirtualKeyCode::Right,
                    pressed: true,
                },
                KeyEvent {
                    key: VirtualKeyCode::Q,
                    pressed: true,
                },
                KeyEvent {
                    key: VirtualKeyCode::D,
                    pressed: false,
                },
            ],
        };
        assert_eq!(
            key_inputs_from_frame(&frame),
            vec![
                KeyInput::press(Intent::MoveRight),
                KeyInput::release(Intent::MoveRight),
            ]
        );
    }
}
