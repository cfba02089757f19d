//! Sandwiching-capture rules: legal-move enumeration and capture scanning.
//!
//! All scans use `(d_row, d_col)` direction vectors over the same row-major
//! `(row, col)` convention as [`move_to_location`].

use super::board::{location_to_move, move_to_location, Board, Cell, NUM_CELLS};
use super::player::Player;

/// The 4 orthogonal and 4 diagonal unit vectors, as `(d_row, d_col)`.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Step one cell from `index` in `direction`, or `None` off the board.
fn step(index: usize, (d_row, d_col): (isize, isize)) -> Option<usize> {
    let (row, col) = move_to_location(index);
    location_to_move(row as isize + d_row, col as isize + d_col)
}

/// Length of the opponent run that `player` would capture from `origin` in
/// `direction`. Zero when the run is empty, hits an empty cell or leaves the
/// board before a `player` disc closes it.
fn capture_run(board: &Board, player: Player, origin: usize, direction: (isize, isize)) -> usize {
    let own = player.to_cell();
    let opponent = player.other().to_cell();
    let mut run = 0;
    let mut cursor = step(origin, direction);

    while let Some(index) = cursor {
        let cell = board.get(index);
        if cell == opponent {
            run += 1;
        } else if cell == own {
            return run;
        } else {
            return 0;
        }
        cursor = step(index, direction);
    }

    0
}

/// Whether `player` may place a disc at `index`.
pub fn is_legal(board: &Board, player: Player, index: usize) -> bool {
    if index >= NUM_CELLS || board.get(index) != Cell::Empty {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&direction| capture_run(board, player, index, direction) > 0)
}

/// Every empty cell where `player` may legally place, in ascending order.
pub fn legal_moves(board: &Board, player: Player) -> Vec<usize> {
    (0..NUM_CELLS)
        .filter(|&index| is_legal(board, player, index))
        .collect()
}

/// Opponent discs flipped if `player` places at `index`, across all
/// directions. Does not check that `index` is empty.
pub fn captured_cells(board: &Board, player: Player, index: usize) -> Vec<usize> {
    let mut captured = Vec::new();
    for &direction in DIRECTIONS.iter() {
        let run = capture_run(board, player, index, direction);
        let mut cursor = index;
        for _ in 0..run {
            // The run was just walked, so every step stays on the board.
            match step(cursor, direction) {
                Some(next) => {
                    captured.push(next);
                    cursor = next;
                }
                None => break,
            }
        }
    }
    captured
}

/// Place a disc for `player` at `index` and flip every captured disc.
/// Returns the flipped cells. Legality is the caller's concern.
pub fn place(board: &mut Board, player: Player, index: usize) -> Vec<usize> {
    let flipped = captured_cells(board, player, index);
    let cell = player.to_cell();
    board.set(index, cell);
    for &f in &flipped {
        board.set(f, cell);
    }
    flipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::{Score, EDGE};

    fn idx(row: usize, col: usize) -> usize {
        row * EDGE + col
    }

    fn board_from(discs: &[(usize, Cell)]) -> Board {
        let mut board = Board::new();
        for &(index, cell) in discs {
            board.set(index, cell);
        }
        board
    }

    #[test]
    fn test_opening_moves_player1() {
        let board = Board::starting();
        assert_eq!(
            legal_moves(&board, Player::Player1),
            vec![idx(2, 3), idx(3, 2), idx(4, 5), idx(5, 4)]
        );
    }

    #[test]
    fn test_opening_moves_player2() {
        let board = Board::starting();
        assert_eq!(
            legal_moves(&board, Player::Player2),
            vec![idx(2, 4), idx(3, 5), idx(4, 2), idx(5, 3)]
        );
    }

    #[test]
    fn test_empty_cell_without_sandwich_is_not_legal() {
        let board = Board::starting();
        assert!(!is_legal(&board, Player::Player1, idx(0, 0)));
        // Adjacent to the cross but nothing sandwiched.
        assert!(!is_legal(&board, Player::Player1, idx(2, 2)));
        // Occupied cell.
        assert!(!is_legal(&board, Player::Player1, idx(3, 3)));
    }

    #[test]
    fn test_ray_leaving_board_gives_no_legality() {
        // The opponent run reaches the edge without a closing disc.
        let board = board_from(&[(idx(0, 6), Cell::Player2), (idx(0, 7), Cell::Player2)]);
        assert!(!is_legal(&board, Player::Player1, idx(0, 5)));
        assert!(captured_cells(&board, Player::Player1, idx(0, 5)).is_empty());
    }

    #[test]
    fn test_gap_breaks_the_run() {
        let board = board_from(&[
            (idx(4, 1), Cell::Player2),
            (idx(4, 3), Cell::Player1),
        ]);
        assert!(!is_legal(&board, Player::Player1, idx(4, 0)));
    }

    #[test]
    fn test_legal_via_multiple_directions_listed_once() {
        let board = board_from(&[
            (idx(1, 1), Cell::Player2),
            (idx(2, 2), Cell::Player1),
            (idx(0, 1), Cell::Player2),
            (idx(0, 2), Cell::Player1),
        ]);
        let moves = legal_moves(&board, Player::Player1);
        assert_eq!(moves.iter().filter(|&&m| m == idx(0, 0)).count(), 1);
    }

    #[test]
    fn test_place_flips_single_direction() {
        let mut board = Board::starting();
        let flipped = place(&mut board, Player::Player1, idx(2, 3));
        assert_eq!(flipped, vec![idx(3, 3)]);
        assert_eq!(board.get_at(3, 3), Cell::Player1);
        assert_eq!(board.score(), Score { player1: 4, player2: 1 });
    }

    #[test]
    fn test_place_flips_multiple_directions() {
        // Player1 at the origin of three rays, each with one opponent disc
        // closed by a Player1 disc.
        let board = board_from(&[
            (idx(3, 4), Cell::Player2),
            (idx(3, 5), Cell::Player1),
            (idx(4, 3), Cell::Player2),
            (idx(5, 3), Cell::Player1),
            (idx(4, 4), Cell::Player2),
            (idx(5, 5), Cell::Player1),
            // Unclosed ray: must not flip.
            (idx(2, 3), Cell::Player2),
        ]);
        let mut after = board;
        let mut flipped = place(&mut after, Player::Player1, idx(3, 3));
        flipped.sort_unstable();
        assert_eq!(flipped, vec![idx(3, 4), idx(4, 3), idx(4, 4)]);
        assert_eq!(after.get_at(2, 3), Cell::Player2);
        assert_eq!(after.score(), Score { player1: 7, player2: 1 });
    }

    #[test]
    fn test_flipped_cells_lie_on_closed_rays() {
        let board = Board::starting();
        for player in [Player::Player1, Player::Player2] {
            for mv in legal_moves(&board, player) {
                for f in captured_cells(&board, player, mv) {
                    assert_eq!(board.get(f), player.other().to_cell());
                }
            }
        }
    }
}
