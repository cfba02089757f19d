use std::fmt;

use super::player::Player;

/// Number of cells along one edge of the board.
pub const EDGE: usize = 8;

/// Number of cells on the board.
pub const NUM_CELLS: usize = EDGE * EDGE;

/// Flat action index reserved for a pass.
pub const PASS_INDEX: usize = NUM_CELLS;

/// Size of the flat action space: every cell plus the pass.
pub const ACTION_SPACE: usize = NUM_CELLS + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Player1,
    Player2,
}

impl Cell {
    /// The player owning this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Player1 => Some(Player::Player1),
            Cell::Player2 => Some(Player::Player2),
        }
    }
}

/// Disc counts per player. Empty cells count for nobody.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub player1: usize,
    pub player2: usize,
}

impl Score {
    pub fn of(&self, player: Player) -> usize {
        match player {
            Player::Player1 => self.player1,
            Player::Player2 => self.player2,
        }
    }

    pub fn total(&self) -> usize {
        self.player1 + self.player2
    }
}

/// Row-major 8x8 grid. Index `row * EDGE + col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; NUM_CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; NUM_CELLS],
        }
    }

    /// Board with the four-disc centre cross: the main diagonal pair belongs
    /// to Player2, the anti-diagonal pair to Player1.
    pub fn starting() -> Self {
        let half = EDGE / 2;
        let mut board = Board::new();
        board.cells[(half - 1) * EDGE + (half - 1)] = Cell::Player2;
        board.cells[half * EDGE + half] = Cell::Player2;
        board.cells[half * EDGE + (half - 1)] = Cell::Player1;
        board.cells[(half - 1) * EDGE + half] = Cell::Player1;
        board
    }

    /// Build a board from explicit cell contents (mainly for tests and tools).
    pub fn from_cells(cells: [Cell; NUM_CELLS]) -> Self {
        Board { cells }
    }

    /// Get the cell at a flat index
    pub fn get(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Get the cell at a specific position. Row 0 is the first stored row.
    pub fn get_at(&self, row: usize, col: usize) -> Cell {
        self.cells[row * EDGE + col]
    }

    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    /// Count discs per player.
    pub fn score(&self) -> Score {
        let mut score = Score::default();
        for cell in self.cells {
            match cell {
                Cell::Player1 => score.player1 += 1,
                Cell::Player2 => score.player2 += 1,
                Cell::Empty => {}
            }
        }
        score
    }

    /// Number of discs on the board.
    pub fn disc_count(&self) -> usize {
        self.score().total()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a flat cell index to `(row, col)`.
pub fn move_to_location(index: usize) -> (usize, usize) {
    (index / EDGE, index % EDGE)
}

/// Convert `(row, col)` to a flat cell index. `None` when either coordinate
/// falls off the board.
pub fn location_to_move(row: isize, col: isize) -> Option<usize> {
    let edge = EDGE as isize;
    if (0..edge).contains(&row) && (0..edge).contains(&col) {
        Some((row * edge + col) as usize)
    } else {
        None
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(" ")?;
        for col in 0..EDGE {
            write!(f, " {col}")?;
        }
        writeln!(f)?;
        for row in 0..EDGE {
            write!(f, "{row} ")?;
            for col in 0..EDGE {
                let marker = match self.get_at(row, col).owner() {
                    Some(player) => player.marker(),
                    None => '_',
                };
                write!(f, "{marker} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
