use crate::grid::Grid;

/// Removes every full row, bottom to top, and returns how many were removed.
///
/// After a removal the same index is checked again, since the row above has just moved into it.
pub fn clear_lines(grid: &mut Grid) -> usize {
    let mut cleared = 0;
    let mut row = grid.rows();
    while row > 0 {
        if grid.is_row_full(row - 1) {
            grid.clear_row(row - 1);
            cleared += 1;
        } else {
            row -= 1;
        }
    }
    cleared
}
