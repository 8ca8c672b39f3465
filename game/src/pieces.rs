use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockColor {
    Cyan,
    Yellow,
    Purple,
    Green,
    Red,
    Blue,
    Orange,
}

impl BlockColor {
    pub const fn rgba(self) -> [u8; 4] {
        match self {
            BlockColor::Cyan => [0, 255, 255, 255],
            BlockColor::Yellow => [255, 255, 0, 255],
            BlockColor::Purple => [128, 0, 128, 255],
            BlockColor::Green => [0, 128, 0, 255],
            BlockColor::Red => [255, 0, 0, 255],
            BlockColor::Blue => [0, 0, 255, 255],
            BlockColor::Orange => [255, 165, 0, 255],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

#[derive(Debug)]
pub struct PieceDefinition {
    pub kind: PieceKind,
    pub shape: &'static [&'static [u8]],
    pub color: BlockColor,
}

static CATALOG: [PieceDefinition; 7] = [
    PieceDefinition {
        kind: PieceKind::I,
        shape: &[&[1, 1, 1, 1]],
        color: BlockColor::Cyan,
    },
    PieceDefinition {
        kind: PieceKind::O,
        shape: &[&[1, 1], &[1, 1]],
        color: BlockColor::Yellow,
    },
    PieceDefinition {
        kind: PieceKind::T,
        shape: &[&[1, 1, 1], &[0, 1, 0]],
        color: BlockColor::Purple,
    },
    PieceDefinition {
        kind: PieceKind::S,
        shape: &[&[0, 1, 1], &[1, 1, 0]],
        color: BlockColor::Green,
    },
    PieceDefinition {
        kind: PieceKind::Z,
        shape: &[&[1, 1, 0], &[0, 1, 1]],
        color: BlockColor::Red,
    },
    PieceDefinition {
        kind: PieceKind::J,
        shape: &[&[1, 0, 0], &[1, 1, 1]],
        color: BlockColor::Blue,
    },
    PieceDefinition {
        kind: PieceKind::L,
        shape: &[&[0, 0, 1], &[1, 1, 1]],
        color: BlockColor::Orange,
    },
];

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    pub fn definition(self) -> &'static PieceDefinition {
        &CATALOG[self as usize]
    }

    pub fn color(self) -> BlockColor {
        self.definition().color
    }

    pub fn base_shape(self) -> Shape {
        Shape::from_rows(self.definition().shape)
    }

    pub const fn symbol(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.symbol() == symbol)
    }

    /// Uniform draw over all seven kinds.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// A rectangular 0/1 matrix. Dimensions are whatever the piece needs (not padded to a square).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    cells: Vec<Vec<u8>>,
}

impl Shape {
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Self {
        Self {
            cells: rows.iter().map(|row| row.as_ref().to_vec()).collect(),
        }
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.cells
    }

    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .is_some_and(|&v| v != 0)
    }

    /// `(row, col)` of every filled cell, relative to the shape's top-left.
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, v)| **v != 0)
                .map(move |(c, _)| (r, c))
        })
    }

    /// 90 degrees clockwise: `new[i][j] = old[h - 1 - j][i]`.
    pub fn rotated_cw(&self) -> Shape {
        let h = self.height();
        let w = self.width();
        let cells = (0..w)
            .map(|i| (0..h).map(|j| self.cells[h - 1 - j][i]).collect())
            .collect();
        Shape { cells }
    }
}
