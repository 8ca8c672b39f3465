use std::time::Duration;

use engine::app::{GameApp, InputFrame};
use engine::graphics::Renderer2d;

use crate::game_loop::{FrameInput, tick};
use crate::gamepad::{GamepadRegistry, GamepadSource};
use crate::headful::input_adapter::key_inputs_from_frame;
use crate::settings::GameSettings;
use crate::state::GameState;
use crate::view::draw_game;

/// Windowed front end: turns platform frames into `tick` calls and paints while running.
pub struct BlockfallApp {
    settings: GameSettings,
    gamepads: GamepadRegistry,
    pad_source: Box<dyn GamepadSource>,
}

impl BlockfallApp {
    pub fn new(settings: GameSettings, pad_source: Box<dyn GamepadSource>) -> Self {
        Self {
            settings,
            gamepads: GamepadRegistry::default(),
            pad_source,
        }
    }

    pub fn active_gamepad(&self) -> Option<usize> {
        self.gamepads.active()
    }

    /// Feeds connect/disconnect events from the source into the registry.
    pub fn pump_gamepads(&mut self) {
        for event in self.pad_source.drain_events() {
            self.gamepads.apply(event);
        }
    }

    pub fn frame_input(&self, input: &InputFrame, dt: Duration) -> FrameInput {
        FrameInput {
            elapsed: dt,
            keys: key_inputs_from_frame(input),
            gamepad: self.gamepads.poll(self.pad_source.as_ref()),
        }
    }
}

impl GameApp for BlockfallApp {
    type State = GameState;

    fn init_state(&mut self) -> Self::State {
        let state = GameState::from_settings(&self.settings);
        log::info!(
            "new game: {}x{} board, first piece {}",
            state.board.cols,
            state.board.rows,
            state.active.kind().symbol()
        );
        state
    }

    fn update_state(&mut self, state: &mut Self::State, input: &InputFrame, dt: Duration) {
        self.pump_gamepads();
        let frame = self.frame_input(input, dt);
        tick(state, &frame);
    }

    fn should_render(&self, state: &Self::State) -> bool {
        state.is_running()
    }

    fn render(&mut self, state: &Self::State, gfx: &mut dyn Renderer2d) {
        draw_game(gfx, state);
    }
}
