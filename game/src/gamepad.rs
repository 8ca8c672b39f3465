use std::collections::HashMap;

use crate::input::IntentFlags;

pub const BUTTON_MOVE_LEFT: usize = 0;
pub const BUTTON_SOFT_DROP: usize = 1;
pub const BUTTON_MOVE_RIGHT: usize = 2;
pub const BUTTON_ROTATE: usize = 3;
pub const BUTTON_RESET: usize = 5;

/// Button state of one pad, read once per frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GamepadSnapshot {
    buttons: Vec<bool>,
}

impl GamepadSnapshot {
    pub fn new(buttons: Vec<bool>) -> Self {
        Self { buttons }
    }

    /// A 16-button pad with only the listed buttons down.
    pub fn from_pressed(pressed: &[usize]) -> Self {
        let mut buttons = vec![false; 16];
        for &i in pressed {
            if let Some(b) = buttons.get_mut(i) {
                *b = true;
            }
        }
        Self { buttons }
    }

    /// Buttons the pad doesn't have read as released.
    pub fn pressed(&self, button: usize) -> bool {
        self.buttons.get(button).copied().unwrap_or(false)
    }

    pub fn intents(&self) -> IntentFlags {
        IntentFlags {
            move_left: self.pressed(BUTTON_MOVE_LEFT),
            move_right: self.pressed(BUTTON_MOVE_RIGHT),
            soft_drop: self.pressed(BUTTON_SOFT_DROP),
            rotate: self.pressed(BUTTON_ROTATE),
            reset: self.pressed(BUTTON_RESET),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamepadEvent {
    Connected(usize),
    Disconnected(usize),
}

/// Whatever can report pad state by device index.
pub trait GamepadSource {
    /// Connection changes since the last call, oldest first. Also where a backend pumps its own
    /// event queue, so call it once per frame before `snapshot`.
    fn drain_events(&mut self) -> Vec<GamepadEvent> {
        Vec::new()
    }

    /// `None` when nothing answers at `index` (unplugged, never existed, ...).
    fn snapshot(&self, index: usize) -> Option<GamepadSnapshot>;
}

/// Source for platforms without pad support.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGamepad;

impl GamepadSource for NoGamepad {
    fn snapshot(&self, _index: usize) -> Option<GamepadSnapshot> {
        None
    }
}

/// In-memory pads, for tests and replays.
#[derive(Debug, Clone, Default)]
pub struct ScriptedGamepads {
    pads: HashMap<usize, GamepadSnapshot>,
    pending: Vec<GamepadEvent>,
}

impl ScriptedGamepads {
    /// Plugs a pad in (queueing a connect event) or updates its buttons if already present.
    pub fn set(&mut self, index: usize, snapshot: GamepadSnapshot) {
        if self.pads.insert(index, snapshot).is_none() {
            self.pending.push(GamepadEvent::Connected(index));
        }
    }

    pub fn unplug(&mut self, index: usize) {
        if self.pads.remove(&index).is_some() {
            self.pending.push(GamepadEvent::Disconnected(index));
        }
    }
}

impl GamepadSource for ScriptedGamepads {
    fn drain_events(&mut self) -> Vec<GamepadEvent> {
        std::mem::take(&mut self.pending)
    }

    fn snapshot(&self, index: usize) -> Option<GamepadSnapshot> {
        self.pads.get(&index).cloned()
    }
}

/// Tracks which pad drives the game. The latest connection wins; any disconnection clears it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GamepadRegistry {
    active: Option<usize>,
}

impl GamepadRegistry {
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn on_connected(&mut self, index: usize) {
        log::info!("gamepad connected: index {index}");
        self.active = Some(index);
    }

    pub fn on_disconnected(&mut self, index: usize) {
        log::info!("gamepad disconnected: index {index}");
        self.active = None;
    }

    pub fn apply(&mut self, event: GamepadEvent) {
        match event {
            GamepadEvent::Connected(index) => self.on_connected(index),
            GamepadEvent::Disconnected(index) => self.on_disconnected(index),
        }
    }

    /// Snapshot of the active pad, or `None` if there is no pad or it stopped answering.
    pub fn poll(&self, source: &dyn GamepadSource) -> Option<GamepadSnapshot> {
        source.snapshot(self.active?)
    }
}
