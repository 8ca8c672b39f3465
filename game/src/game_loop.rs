use std::time::Duration;

use engine::GameLogic;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::gamepad::GamepadSnapshot;
use crate::input::{Intent, KeyInput};
use crate::settings::{BoardSettings, GameSettings, TimingSettings};
use crate::state::{DropOutcome, GameState};

/// Everything one frame feeds into the simulation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub elapsed: Duration,
    /// Key transitions since the previous frame, oldest first.
    pub keys: Vec<KeyInput>,
    /// Active pad state, if a pad is connected and answering.
    pub gamepad: Option<GamepadSnapshot>,
}

impl FrameInput {
    pub fn idle(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Self::default()
        }
    }

    pub fn with_keys(elapsed: Duration, keys: impl IntoIterator<Item = KeyInput>) -> Self {
        Self {
            elapsed,
            keys: keys.into_iter().collect(),
            gamepad: None,
        }
    }

    pub fn with_gamepad(elapsed: Duration, pad: GamepadSnapshot) -> Self {
        Self {
            elapsed,
            keys: Vec::new(),
            gamepad: Some(pad),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub pieces_locked: usize,
    pub lines_cleared: usize,
    pub game_over: bool,
    pub restarted: bool,
}

impl TickReport {
    fn record(&mut self, outcome: DropOutcome) {
        match outcome {
            DropOutcome::Moved | DropOutcome::Halted => {}
            DropOutcome::Locked { cleared } => {
                self.pieces_locked += 1;
                self.lines_cleared += cleared;
            }
            DropOutcome::GameOver { cleared } => {
                self.pieces_locked += 1;
                self.lines_cleared += cleared;
                self.game_over = true;
            }
        }
    }
}

/// Advances the game by one frame.
///
/// Order within a frame: queued keys, then (while running) gravity, repeated moves and cooldown
/// decay, then the pad snapshot, then the rotate edge, then reset-after-game-over. The pad is
/// read even after game over so it can still restart the game.
pub fn tick(state: &mut GameState, frame: &FrameInput) -> TickReport {
    let mut report = TickReport::default();

    for &key in &frame.keys {
        state.input.apply_key(key);
    }

    if state.is_running() {
        state.drop_counter += frame.elapsed;
        if state.drop_counter > state.timing.drop_interval {
            report.record(state.soft_drop_or_lock());
        }

        if state.input.take_repeat(Intent::MoveLeft) && state.is_running() {
            state.move_horizontal(-1);
        }
        if state.input.take_repeat(Intent::MoveRight) && state.is_running() {
            state.move_horizontal(1);
        }
        if state.input.take_repeat(Intent::SoftDrop) {
            report.record(state.soft_drop_or_lock());
        }
        state.input.decay(frame.elapsed);
    }

    if let Some(pad) = &frame.gamepad {
        state.input.apply_gamepad(pad);
    }

    if state.input.take_rotate_edge() && state.is_running() {
        state.rotate();
    }

    if !state.is_running() && state.input.reset_requested() {
        state.restart();
        report.restarted = true;
    }

    if report.lines_cleared > 0 {
        log::debug!("cleared {} line(s) this frame", report.lines_cleared);
    }
    report
}

/// The game as a pure `step(state, frame) -> state` function for headless runs.
#[derive(Debug, Clone, Copy)]
pub struct BlockfallLogic {
    pub board: BoardSettings,
    pub timing: TimingSettings,
    pub seed: u64,
}

impl BlockfallLogic {
    pub fn new(seed: u64) -> Self {
        Self {
            board: BoardSettings::default(),
            timing: TimingSettings::default(),
            seed,
        }
    }

    /// Settings without a seed replay as seed 0.
    pub fn from_settings(settings: &GameSettings) -> Self {
        Self {
            board: settings.board,
            timing: settings.timing,
            seed: settings.seed.unwrap_or(0),
        }
    }
}

impl GameLogic for BlockfallLogic {
    type State = GameState;
    type Input = FrameInput;

    fn initial_state(&self) -> Self::State {
        GameState::new(self.board, self.timing, StdRng::seed_from_u64(self.seed))
    }

    fn step(&self, state: &Self::State, input: Self::Input) -> Self::State {
        let mut next = state.clone();
        tick(&mut next, &input);
        next
    }
}
