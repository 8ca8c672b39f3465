use crate::pieces::BlockColor;

pub type Cell = Option<BlockColor>;

/// Settled blocks. Row 0 is the top of the playfield.
///
/// Dimensions are fixed at construction; every row always has exactly `cols` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cols: usize,
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cols,
            rows: vec![vec![None; cols]; rows],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        &self.rows[row]
    }

    pub fn cell(&self, row: i32, col: i32) -> Cell {
        if row < 0 || col < 0 {
            return None;
        }
        self.rows
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
            .flatten()
    }

    /// Walls and the floor count as occupied; rows above the top do not, so a piece may hang
    /// partly above the visible field.
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        if col < 0 || col >= self.cols as i32 {
            return true;
        }
        if row >= self.rows() as i32 {
            return true;
        }
        if row < 0 {
            return false;
        }
        self.rows[row as usize][col as usize].is_some()
    }

    /// Out-of-range writes are dropped.
    pub fn set_cell(&mut self, row: usize, col: usize, color: BlockColor) {
        debug_assert!(row < self.rows() && col < self.cols, "set_cell({row}, {col}) out of range");
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = Some(color);
        }
    }

    pub fn is_row_full(&self, row: usize) -> bool {
        self.rows[row].iter().all(Option::is_some)
    }

    pub fn filled_in_row(&self, row: usize) -> usize {
        self.rows[row].iter().filter(|c| c.is_some()).count()
    }

    /// Removes `row` and inserts an empty row at the top; everything above shifts down by one.
    pub fn clear_row(&mut self, row: usize) {
        self.rows.remove(row);
        self.rows.insert(0, vec![None; self.cols]);
    }

    /// `(row, col, color)` for every settled block, top to bottom.
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize, BlockColor)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(c, cell)| cell.map(|color| (r, c, color)))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.filled_cells().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty_with_fixed_dimensions() {
        let grid = Grid::new(12, 5);
        assert_eq!(grid.rows(), 12);
        assert_eq!(grid.cols(), 5);
        assert!(grid.is_empty());
        for r in 0..grid.rows() {
            assert_eq!(grid.row(r).len(), 5);
        }
    }

    #[test]
    fn occupancy_treats_walls_and_floor_as_solid_but_not_the_sky() {
        let grid = Grid::new(12, 5);
        assert!(grid.is_occupied(0, -1));
        assert!(grid.is_occupied(0, 5));
        assert!(grid.is_occupied(12, 2));
        assert!(!grid.is_occupied(-3, 2));
        assert!(grid.is_occupied(-3, -1));
        assert!(!grid.is_occupied(11, 4));
    }

    #[test]
    fn set_cell_marks_occupied() {
        let mut grid = Grid::new(4, 3);
        grid.set_cell(2, 1, BlockColor::Red);
        assert!(grid.is_occupied(2, 1));
        assert_eq!(grid.cell(2, 1), Some(BlockColor::Red));
        assert_eq!(grid.cell(-1, 1), None);
    }

    #[test]
    fn row_full_iff_no_empty_cell() {
        let mut grid = Grid::new(3, 3);
        grid.set_cell(2, 0, BlockColor::Blue);
        grid.set_cell(2, 1, BlockColor::Blue);
        assert!(!grid.is_row_full(2));
        grid.set_cell(2, 2, BlockColor::Green);
        assert!(grid.is_row_full(2));
        assert!(!grid.is_row_full(1));
    }

    #[test]
    fn clear_row_shifts_rows_above_down_and_keeps_count() {
        let mut grid = Grid::new(4, 2);
        grid.set_cell(0, 0, BlockColor::Cyan);
        grid.set_cell(1, 1, BlockColor::Yellow);
        grid.set_cell(2, 0, BlockColor::Red);
        grid.set_cell(2, 1, BlockColor::Red);
        grid.set_cell(3, 0, BlockColor::Blue);

        grid.clear_row(2);

        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.row(0), &[None, None]);
        assert_eq!(grid.row(1), &[Some(BlockColor::Cyan), None]);
        assert_eq!(grid.row(2), &[None, Some(BlockColor::Yellow)]);
        assert_eq!(grid.row(3), &[Some(BlockColor::Blue), None]);
    }
}
