use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::active_piece::ActivePiece;
use crate::grid::Grid;
use crate::input::InputState;
use crate::line_clear::clear_lines;
use crate::pieces::PieceKind;
use crate::settings::{BoardSettings, GameSettings, TimingSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Running,
    Over,
}

/// What one drop-or-lock did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Moved,
    /// The piece settled and a new one spawned cleanly.
    Locked { cleared: usize },
    /// The piece settled and its replacement spawned into blocks.
    GameOver { cleared: usize },
    /// Nothing happens once the game is over.
    Halted,
}

/// One whole game: board, falling piece, held inputs, timers and the piece RNG.
#[derive(Debug, Clone)]
pub struct GameState {
    pub grid: Grid,
    pub active: ActivePiece,
    pub input: InputState,
    pub status: GameStatus,
    /// Time since the last drop, gravity or manual.
    pub drop_counter: Duration,
    pub board: BoardSettings,
    pub timing: TimingSettings,
    rng: StdRng,
}

impl GameState {
    pub fn new(board: BoardSettings, timing: TimingSettings, rng: StdRng) -> Self {
        let grid = Grid::new(board.rows, board.cols);
        // Placeholder until the first draw below replaces it.
        let active = ActivePiece::spawn(PieceKind::O, board.cols);
        let mut state = Self {
            grid,
            active,
            input: InputState::new(timing.repeat_cooldown),
            status: GameStatus::Running,
            drop_counter: Duration::ZERO,
            board,
            timing,
            rng,
        };
        state.spawn_random();
        state
    }

    /// Default board and timings with a fixed piece sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(
            BoardSettings::default(),
            TimingSettings::default(),
            StdRng::seed_from_u64(seed),
        )
    }

    pub fn from_settings(settings: &GameSettings) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(settings.board, settings.timing, rng)
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// Replaces the active piece with a random one at the spawn point. Returns `false` and ends
    /// the game if it lands on settled blocks.
    pub fn spawn_random(&mut self) -> bool {
        let kind = PieceKind::random(&mut self.rng);
        self.active = ActivePiece::spawn(kind, self.grid.cols());
        if self.active.collides(&self.grid) {
            log::info!("game over: {} spawned into settled blocks", kind.symbol());
            self.status = GameStatus::Over;
            return false;
        }
        true
    }

    pub fn move_horizontal(&mut self, dir: i32) -> bool {
        self.active.move_horizontal(&self.grid, dir)
    }

    pub fn rotate(&mut self) -> bool {
        self.active.rotate(&self.grid)
    }

    /// Moves the piece down a row, or settles it if it can't move: merge, clear full rows,
    /// spawn the next one. Either way the drop counter restarts.
    pub fn soft_drop_or_lock(&mut self) -> DropOutcome {
        if !self.is_running() {
            return DropOutcome::Halted;
        }
        self.drop_counter = Duration::ZERO;
        if self.active.step_down(&self.grid) {
            return DropOutcome::Moved;
        }

        self.active.merge_into(&mut self.grid);
        let cleared = clear_lines(&mut self.grid);
        log::debug!(
            "locked {} at row {} col {}, cleared {cleared}",
            self.active.kind().symbol(),
            self.active.row(),
            self.active.col()
        );
        if self.spawn_random() {
            DropOutcome::Locked { cleared }
        } else {
            DropOutcome::GameOver { cleared }
        }
    }

    /// Fresh board, piece, inputs and timers. The RNG carries on where it was.
    pub fn restart(&mut self) {
        log::info!("restarting");
        self.grid = Grid::new(self.board.rows, self.board.cols);
        self.input = InputState::new(self.timing.repeat_cooldown);
        self.drop_counter = Duration::ZERO;
        self.status = GameStatus::Running;
        self.spawn_random();
    }
}
