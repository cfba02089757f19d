use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Player1 => Cell::Player1,
            Player::Player2 => Cell::Player2,
        }
    }

    /// Player from a zero-based start index (0 = Player1, 1 = Player2).
    pub fn from_index(index: usize) -> Option<Player> {
        match index {
            0 => Some(Player::Player1),
            1 => Some(Player::Player2),
            _ => None,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Player1 => "Player1",
            Player::Player2 => "Player2",
        }
    }

    /// Disc marker used by the textual board dump.
    pub fn marker(self) -> char {
        match self {
            Player::Player1 => 'B',
            Player::Player2 => 'W',
        }
    }
}
