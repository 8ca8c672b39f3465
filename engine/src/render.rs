use crate::graphics::{Color, Rect, Renderer2d};

/// Pixel rect covered by grid cell `(row, col)` when every cell is `block_size` pixels square.
///
/// Cells left of / above the origin have no pixels and yield `None`.
pub fn block_rect(row: i32, col: i32, block_size: u32) -> Option<Rect> {
    if row < 0 || col < 0 {
        return None;
    }
    Some(Rect::new(
        (col as u32).saturating_mul(block_size),
        (row as u32).saturating_mul(block_size),
        block_size,
        block_size,
    ))
}

/// Fills one grid cell. Returns whether anything was drawn.
pub fn draw_block(
    gfx: &mut dyn Renderer2d,
    row: i32,
    col: i32,
    block_size: u32,
    color: Color,
) -> bool {
    match block_rect(row, col, block_size) {
        Some(rect) => {
            gfx.fill_rect(rect, color);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::{DrawCommand, DrawLog};
    use crate::surface::SurfaceSize;

    #[test]
    fn block_rect_scales_cell_coordinates() {
        assert_eq!(block_rect(0, 0, 30), Some(Rect::new(0, 0, 30, 30)));
        assert_eq!(block_rect(11, 4, 30), Some(Rect::new(120, 330, 30, 30)));
        assert_eq!(block_rect(-1, 2, 30), None);
    }

    #[test]
    fn draw_block_skips_cells_above_the_top() {
        let mut log = DrawLog::new(SurfaceSize::new(150, 360));
        assert!(!draw_block(&mut log, -1, 0, 30, [1, 2, 3, 255]));
        assert!(draw_block(&mut log, 2, 1, 30, [1, 2, 3, 255]));
        assert_eq!(
            log.commands(),
            &[DrawCommand::Fill(Rect::new(30, 60, 30, 30), [1, 2, 3, 255])]
        );
    }
}
