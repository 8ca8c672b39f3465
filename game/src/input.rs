use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::gamepad::GamepadSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    Reset,
}

/// Held/not-held for each logical action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntentFlags {
    pub move_left: bool,
    pub move_right: bool,
    pub soft_drop: bool,
    pub rotate: bool,
    pub reset: bool,
}

impl IntentFlags {
    pub fn get(&self, intent: Intent) -> bool {
        match intent {
            Intent::MoveLeft => self.move_left,
            Intent::MoveRight => self.move_right,
            Intent::SoftDrop => self.soft_drop,
            Intent::Rotate => self.rotate,
            Intent::Reset => self.reset,
        }
    }

    pub fn set(&mut self, intent: Intent, held: bool) {
        match intent {
            Intent::MoveLeft => self.move_left = held,
            Intent::MoveRight => self.move_right = held,
            Intent::SoftDrop => self.soft_drop = held,
            Intent::Rotate => self.rotate = held,
            Intent::Reset => self.reset = held,
        }
    }
}

/// A key going down or up, already mapped to the action it controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub intent: Intent,
    pub pressed: bool,
}

impl KeyInput {
    pub fn press(intent: Intent) -> Self {
        Self {
            intent,
            pressed: true,
        }
    }

    pub fn release(intent: Intent) -> Self {
        Self {
            intent,
            pressed: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Cooldowns {
    move_left: Duration,
    move_right: Duration,
    soft_drop: Duration,
}

impl Cooldowns {
    fn slot(&mut self, intent: Intent) -> Option<&mut Duration> {
        match intent {
            Intent::MoveLeft => Some(&mut self.move_left),
            Intent::MoveRight => Some(&mut self.move_right),
            Intent::SoftDrop => Some(&mut self.soft_drop),
            Intent::Rotate | Intent::Reset => None,
        }
    }
}

/// Keyboard and gamepad both write into the same flags; whichever wrote last in a frame wins.
///
/// Movement and soft drop auto-repeat on a fixed cooldown while held. Rotate is edge-triggered
/// and has to be released before it fires again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputState {
    flags: IntentFlags,
    cooldowns: Cooldowns,
    repeat_interval: Duration,
    rotate_released: bool,
}

impl InputState {
    pub fn new(repeat_interval: Duration) -> Self {
        Self {
            flags: IntentFlags::default(),
            cooldowns: Cooldowns::default(),
            repeat_interval,
            rotate_released: true,
        }
    }

    pub fn flags(&self) -> IntentFlags {
        self.flags
    }

    pub fn cooldown(&self, intent: Intent) -> Duration {
        match intent {
            Intent::MoveLeft => self.cooldowns.move_left,
            Intent::MoveRight => self.cooldowns.move_right,
            Intent::SoftDrop => self.cooldowns.soft_drop,
            Intent::Rotate | Intent::Reset => Duration::ZERO,
        }
    }

    pub fn apply_key(&mut self, key: KeyInput) {
        self.flags.set(key.intent, key.pressed);
    }

    /// Overwrites all five flags with the pad's button state.
    pub fn apply_gamepad(&mut self, pad: &GamepadSnapshot) {
        self.flags = pad.intents();
    }

    /// Fires a repeatable action if it is held and its cooldown has run out, restarting the
    /// cooldown when it does.
    pub fn take_repeat(&mut self, intent: Intent) -> bool {
        let held = self.flags.get(intent);
        let interval = self.repeat_interval;
        let Some(cooldown) = self.cooldowns.slot(intent) else {
            return false;
        };
        if !held || !cooldown.is_zero() {
            return false;
        }
        *cooldown = interval;
        true
    }

    /// Counts every cooldown down by `elapsed`, whether or not its action fired.
    pub fn decay(&mut self, elapsed: Duration) {
        for intent in [Intent::MoveLeft, Intent::MoveRight, Intent::SoftDrop] {
            if let Some(cooldown) = self.cooldowns.slot(intent) {
                *cooldown = cooldown.saturating_sub(elapsed);
            }
        }
    }

    /// True once per press of rotate. Releasing re-arms it.
    pub fn take_rotate_edge(&mut self) -> bool {
        if !self.flags.rotate {
            self.rotate_released = true;
            return false;
        }
        if !self.rotate_released {
            return false;
        }
        self.rotate_released = false;
        true
    }

    pub fn reset_requested(&self) -> bool {
        self.flags.reset
    }
}
