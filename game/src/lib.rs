pub mod active_piece;
pub mod game_loop;
pub mod gamepad;
pub mod grid;
pub mod headful;
pub mod input;
pub mod line_clear;
pub mod pieces;
pub mod serde_duration;
pub mod settings;
pub mod state;
pub mod view;
