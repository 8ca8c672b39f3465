use engine::graphics::Renderer2d;
use engine::render::draw_block;
use engine::surface::SurfaceSize;

use crate::settings::BoardSettings;
use crate::state::GameState;

/// Canvas that fits the whole board at its block size.
pub fn canvas_size(board: &BoardSettings) -> SurfaceSize {
    SurfaceSize::for_blocks(board.cols, board.rows, board.block_size)
}

/// Clears the canvas, paints every settled cell, then the falling piece on top.
pub fn draw_game(gfx: &mut dyn Renderer2d, state: &GameState) {
    let block = state.board.block_size;
    gfx.clear();

    for (row, col, color) in state.grid.filled_cells() {
        draw_block(gfx, row as i32, col as i32, block, color.rgba());
    }

    let color = state.active.color().rgba();
    for (row, col) in state.active.cells() {
        draw_block(gfx, row, col, block, color);
    }
}

#[cfg(test)]
mod tests {
    use engine::graphics::{DrawCommand, DrawLog, Rect};

    use super::*;
    use crate::active_piece::ActivePiece;
    use crate::pieces::{BlockColor, PieceKind};

    #[test]
    fn default_canvas_is_150_by_360() {
        assert_eq!(
            canvas_size(&BoardSettings::default()),
            SurfaceSize::new(150, 360)
        );
    }

    #[test]
    fn huge_block_size_from_settings_still_yields_a_canvas() {
        let settings = crate::settings::GameSettings {
            board: BoardSettings {
                rows: 12,
                cols: 5,
                block_size: 2_000_000_000,
            },
            ..Default::default()
        }
        .sanitized();
        assert_eq!(canvas_size(&settings.board), SurfaceSize::new(5 * 256, 12 * 256));
    }

    #[test]
    fn draws_clear_then_grid_then_piece() {
        let mut state = GameState::with_seed(1);
        state.grid.set_cell(11, 4, BlockColor::Red);
        state.active = ActivePiece::spawn(PieceKind::O, 5);

        let mut log = DrawLog::new(canvas_size(&state.board));
        draw_game(&mut log, &state);

        let cmds = log.commands();
        assert_eq!(cmds[0], DrawCommand::Clear);
        assert_eq!(
            cmds[1],
            DrawCommand::Fill(Rect::new(120, 330, 30, 30), BlockColor::Red.rgba())
        );
        assert_eq!(cmds.len(), 1 + 1 + 4);
        assert!(
            log.fills()
                .skip(1)
                .all(|(_, color)| color == BlockColor::Yellow.rgba())
        );
    }
}
