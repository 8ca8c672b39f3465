use crate::grid::Grid;
use crate::pieces::{BlockColor, PieceKind, Shape};

/// The falling piece: its kind, current (possibly rotated) shape and top-left position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    kind: PieceKind,
    shape: Shape,
    row: i32,
    col: i32,
}

impl ActivePiece {
    /// Base orientation, horizontally centred on a `cols`-wide field, top row at 0.
    ///
    /// Does not check for collisions.
    pub fn spawn(kind: PieceKind, cols: usize) -> Self {
        let shape = kind.base_shape();
        let col = (cols / 2) as i32 - (shape.width() / 2) as i32;
        Self {
            kind,
            shape,
            row: 0,
            col,
        }
    }

    pub fn at(kind: PieceKind, shape: Shape, row: i32, col: i32) -> Self {
        Self {
            kind,
            shape,
            row,
            col,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> BlockColor {
        self.kind.color()
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn col(&self) -> i32 {
        self.col
    }

    /// Absolute `(row, col)` of every filled cell.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.cells_at(self.row, self.col)
    }

    fn cells_at(&self, row: i32, col: i32) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .filled_cells()
            .map(move |(r, c)| (row + r as i32, col + c as i32))
    }

    /// Would the current shape overlap anything if its top-left were at `(row, col)`?
    pub fn collides_at(&self, grid: &Grid, row: i32, col: i32) -> bool {
        self.cells_at(row, col).any(|(r, c)| grid.is_occupied(r, c))
    }

    pub fn collides(&self, grid: &Grid) -> bool {
        self.collides_at(grid, self.row, self.col)
    }

    /// Clockwise, in place. No kicks: a colliding rotation is dropped and nothing changes.
    pub fn rotate(&mut self, grid: &Grid) -> bool {
        let rotated = self.shape.rotated_cw();
        let previous = std::mem::replace(&mut self.shape, rotated);
        if self.collides(grid) {
            self.shape = previous;
            return false;
        }
        true
    }

    /// Shifts one column left (`dir < 0`) or right (`dir > 0`) unless blocked.
    pub fn move_horizontal(&mut self, grid: &Grid, dir: i32) -> bool {
        let col = self.col + dir.signum();
        if self.collides_at(grid, self.row, col) {
            return false;
        }
        self.col = col;
        true
    }

    /// One row down unless blocked.
    pub fn step_down(&mut self, grid: &Grid) -> bool {
        if self.collides_at(grid, self.row + 1, self.col) {
            return false;
        }
        self.row += 1;
        true
    }

    /// Writes every filled cell into the grid. Cells outside the grid are skipped.
    pub fn merge_into(&self, grid: &mut Grid) {
        let color = self.color();
        for (r, c) in self.cells() {
            if r >= 0 && c >= 0 && (r as usize) < grid.rows() && (c as usize) < grid.cols() {
                grid.set_cell(r as usize, c as usize, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_centres_by_shape_width() {
        assert_eq!(ActivePiece::spawn(PieceKind::O, 5).col(), 1);
        assert_eq!(ActivePiece::spawn(PieceKind::I, 5).col(), 0);
        assert_eq!(ActivePiece::spawn(PieceKind::T, 5).col(), 1);
        assert_eq!(ActivePiece::spawn(PieceKind::T, 10).col(), 4);
        assert_eq!(ActivePiece::spawn(PieceKind::T, 10).row(), 0);
    }

    #[test]
    fn o_piece_stops_at_left_wall() {
        let grid = Grid::new(12, 5);
        let mut piece = ActivePiece::spawn(PieceKind::O, 5);
        assert!(piece.move_horizontal(&grid, -1));
        assert_eq!(piece.col(), 0);
        assert!(!piece.move_horizontal(&grid, -1));
        assert_eq!(piece.col(), 0);
    }

    #[test]
    fn settled_block_beside_piece_stops_the_move() {
        let mut grid = Grid::new(12, 5);
        grid.set_cell(1, 3, BlockColor::Blue);
        let mut piece = ActivePiece::spawn(PieceKind::O, 5);
        let before = piece.clone();

        assert!(!piece.move_horizontal(&grid, 1));
        assert_eq!(piece, before);
        assert!(piece.move_horizontal(&grid, -1));
        assert_eq!(piece.col(), 0);
    }

    #[test]
    fn rotation_into_wall_is_rejected_unchanged() {
        let grid = Grid::new(12, 5);
        // Vertical I hugging the right wall: rotating back to horizontal would poke through it.
        let mut piece = ActivePiece::spawn(PieceKind::I, 5);
        assert!(piece.rotate(&grid));
        for _ in 0..4 {
            piece.move_horizontal(&grid, 1);
        }
        assert_eq!(piece.col(), 4);

        let before = piece.clone();
        assert!(!piece.rotate(&grid));
        assert_eq!(piece, before);
    }

    #[test]
    fn rotation_into_settled_blocks_is_rejected() {
        let mut grid = Grid::new(12, 5);
        grid.set_cell(2, 2, BlockColor::Red);
        let mut piece = ActivePiece::spawn(PieceKind::T, 5);
        assert!(!piece.collides(&grid));
        let before = piece.clone();
        assert!(!piece.rotate(&grid));
        assert_eq!(piece, before);
    }

    #[test]
    fn step_down_stops_on_floor() {
        let grid = Grid::new(12, 5);
        let mut piece = ActivePiece::spawn(PieceKind::O, 5);
        let mut steps = 0;
        while piece.step_down(&grid) {
            steps += 1;
        }
        assert_eq!(steps, 10);
        assert_eq!(piece.row(), 10);
    }

    #[test]
    fn merge_writes_piece_color() {
        let mut grid = Grid::new(12, 5);
        let piece = ActivePiece::at(PieceKind::S, PieceKind::S.base_shape(), 10, 0);
        piece.merge_into(&mut grid);
        let g = Some(BlockColor::Green);
        assert_eq!(grid.row(10), &[None, g, g, None, None]);
        assert_eq!(grid.row(11), &[g, g, None, None, None]);
    }

    #[test]
    fn piece_above_top_does_not_collide_with_sky() {
        let grid = Grid::new(12, 5);
        let piece = ActivePiece::at(PieceKind::O, PieceKind::O.base_shape(), -1, 1);
        assert!(!piece.collides(&grid));
    }
}
