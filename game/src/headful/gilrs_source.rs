use gilrs::{Button, Event, EventType, Gilrs};

use crate::gamepad::{GamepadEvent, GamepadSnapshot, GamepadSource};

/// Buttons in "standard gamepad" index order, so index 0 is the bottom face button, 5 the right
/// shoulder and so on.
pub const STANDARD_LAYOUT: [Button; 17] = [
    Button::South,
    Button::East,
    Button::West,
    Button::North,
    Button::LeftTrigger,
    Button::RightTrigger,
    Button::LeftTrigger2,
    Button::RightTrigger2,
    Button::Select,
    Button::Start,
    Button::LeftThumb,
    Button::RightThumb,
    Button::DPadUp,
    Button::DPadDown,
    Button::DPadLeft,
    Button::DPadRight,
    Button::Mode,
];

pub fn standard_snapshot(pressed: impl Fn(Button) -> bool) -> GamepadSnapshot {
    GamepadSnapshot::new(STANDARD_LAYOUT.iter().map(|&button| pressed(button)).collect())
}

/// Pads reported by `gilrs`, addressed by their gilrs id.
pub struct GilrsGamepads {
    gilrs: Gilrs,
    pending: Vec<GamepadEvent>,
}

impl GilrsGamepads {
    /// Pads already plugged in at startup are reported as connections on the first drain.
    pub fn new() -> Result<Self, gilrs::Error> {
        let gilrs = Gilrs::new()?;
        let pending = gilrs
            .gamepads()
            .map(|(id, pad)| {
                log::debug!("gamepad present at startup: {} ({})", usize::from(id), pad.name());
                GamepadEvent::Connected(usize::from(id))
            })
            .collect();
        Ok(Self { gilrs, pending })
    }
}

impl GamepadSource for GilrsGamepads {
    fn drain_events(&mut self) -> Vec<GamepadEvent> {
        let mut events = std::mem::take(&mut self.pending);
        // gilrs only updates button state while its queue is drained.
        while let Some(Event { id, event, .. }) = self.gilrs.next_event() {
            match event {
                EventType::Connected => events.push(GamepadEvent::Connected(usize::from(id))),
                EventType::Disconnected => {
                    events.push(GamepadEvent::Disconnected(usize::from(id)))
                }
                _ => {}
            }
        }
        events
    }

    fn snapshot(&self, index: usize) -> Option<GamepadSnapshot> {
        let (_, pad) = self
            .gilrs
            .gamepads()
            .find(|(id, _)| usize::from(*id) == index)?;
        Some(standard_snapshot(|button| pad.is_pressed(button)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gamepad::{BUTTON_MOVE_LEFT, BUTTON_RESET, BUTTON_ROTATE};

    #[test]
    fn game_buttons_sit_at_standard_positions() {
        assert_eq!(STANDARD_LAYOUT[BUTTON_MOVE_LEFT], Button::South);
        assert_eq!(STANDARD_LAYOUT[BUTTON_ROTATE], Button::North);
        assert_eq!(STANDARD_LAYOUT[BUTTON_RESET], Button::RightTrigger);
    }

    #[test]
    fn snapshot_reads_each_standard_button() {
        let pad = standard_snapshot(|b| matches!(b, Button::West | Button::RightTrigger));
        let flags = pad.intents();
        assert!(flags.move_right);
        assert!(flags.reset);
        assert!(!flags.move_left);
        assert!(!flags.rotate);
        assert!(!pad.pressed(16));
    }
}
