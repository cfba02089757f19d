use super::board::{Board, Score, NUM_CELLS, PASS_INDEX};
use super::player::Player;
use super::rules;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Tie,
}

/// A turn: place a disc on a cell, or pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Place(usize),
    Pass,
}

impl Action {
    /// Index in the flat action space; a pass maps to [`PASS_INDEX`].
    pub fn index(self) -> usize {
        match self {
            Action::Place(cell) => cell,
            Action::Pass => PASS_INDEX,
        }
    }

    /// Inverse of [`Action::index`]. `None` outside the action space.
    pub fn from_index(index: usize) -> Option<Action> {
        if index < NUM_CELLS {
            Some(Action::Place(index))
        } else if index == PASS_INDEX {
            Some(Action::Pass)
        } else {
            None
        }
    }
}

/// Rejected actions. The state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell {0} is off the board")]
    OutOfRange(usize),

    #[error("cell {0} is already occupied")]
    Occupied(usize),

    #[error("cell {index} captures nothing (legal: {legal:?})")]
    Illegal { index: usize, legal: Vec<usize> },

    #[error("pass submitted while legal moves exist: {legal:?}")]
    PassWithLegalMoves { legal: Vec<usize> },

    #[error("game is already over")]
    GameOver,
}

/// Full position: occupancy, side to move, last placement and the legal
/// moves of the side to move. `legal` is re-derived by every transition.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    last_move: Option<usize>,
    legal: Vec<usize>,
}

impl GameState {
    /// Create initial game state, Player1 to move
    pub fn initial() -> Self {
        Self::new(Player::Player1)
    }

    /// Starting cross with `start_player` to move.
    pub fn new(start_player: Player) -> Self {
        Self::from_board(Board::starting(), start_player)
    }

    /// Arbitrary position with `player` to move and no last move.
    pub fn from_board(board: Board, player: Player) -> Self {
        let legal = rules::legal_moves(&board, player);
        GameState {
            board,
            current_player: player,
            last_move: None,
            legal,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    /// Legal placements for the side to move, ascending.
    pub fn legal_moves(&self) -> &[usize] {
        &self.legal
    }

    /// Legal placements for either side on the current board.
    pub fn legal_moves_for(&self, player: Player) -> Vec<usize> {
        if player == self.current_player {
            self.legal.clone()
        } else {
            rules::legal_moves(&self.board, player)
        }
    }

    /// Actions the driver may submit: every legal placement, or a lone pass
    /// when there is none. Empty once the game is over.
    pub fn legal_actions(&self) -> Vec<Action> {
        if !self.legal.is_empty() {
            self.legal.iter().map(|&cell| Action::Place(cell)).collect()
        } else if self.is_terminal() {
            Vec::new()
        } else {
            vec![Action::Pass]
        }
    }

    /// Check if game is over: neither side has a placement.
    pub fn is_terminal(&self) -> bool {
        self.legal.is_empty()
            && rules::legal_moves(&self.board, self.current_player.other()).is_empty()
    }

    /// The side to move must pass but the opponent can still play.
    pub fn needs_pass(&self) -> bool {
        self.legal.is_empty() && !self.is_terminal()
    }

    pub fn score(&self) -> Score {
        self.board.score()
    }

    /// Get game outcome if game is over
    pub fn winner(&self) -> Option<GameOutcome> {
        if !self.is_terminal() {
            return None;
        }
        let score = self.board.score();
        let (p1, p2) = (score.of(Player::Player1), score.of(Player::Player2));
        let outcome = if p1 > p2 {
            GameOutcome::Winner(Player::Player1)
        } else if p2 > p1 {
            GameOutcome::Winner(Player::Player2)
        } else {
            GameOutcome::Tie
        };
        Some(outcome)
    }

    /// Apply an action and return new state (immutable)
    pub fn apply_move(&self, action: Action) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply_move_mut(action)?;
        Ok(next)
    }

    /// Apply an action in place. Returns the flipped cells (empty for a pass).
    pub fn apply_move_mut(&mut self, action: Action) -> Result<Vec<usize>, MoveError> {
        self.check(action)?;

        let flipped = match action {
            Action::Pass => Vec::new(),
            Action::Place(cell) => {
                let flipped = rules::place(&mut self.board, self.current_player, cell);
                self.last_move = Some(cell);
                flipped
            }
        };

        self.current_player = self.current_player.other();
        self.legal = rules::legal_moves(&self.board, self.current_player);

        Ok(flipped)
    }

    fn check(&self, action: Action) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        match action {
            Action::Pass => {
                if !self.legal.is_empty() {
                    return Err(MoveError::PassWithLegalMoves {
                        legal: self.legal.clone(),
                    });
                }
            }
            Action::Place(cell) => {
                if cell >= NUM_CELLS {
                    return Err(MoveError::OutOfRange(cell));
                }
                if self.board.get(cell).owner().is_some() {
                    return Err(MoveError::Occupied(cell));
                }
                if self.legal.binary_search(&cell).is_err() {
                    return Err(MoveError::Illegal {
                        index: cell,
                        legal: self.legal.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::{Cell, EDGE};

    fn idx(row: usize, col: usize) -> usize {
        row * EDGE + col
    }

    fn board_with(player1: &[usize], player2: &[usize]) -> Board {
        let mut cells = [Cell::Empty; NUM_CELLS];
        for &i in player1 {
            cells[i] = Cell::Player1;
        }
        for &i in player2 {
            cells[i] = Cell::Player2;
        }
        Board::from_cells(cells)
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::Player1);
        assert_eq!(state.last_move(), None);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_moves(), &[19, 26, 37, 44]);
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_start_player_two() {
        let state = GameState::new(Player::Player2);
        assert_eq!(state.current_player(), Player::Player2);
        assert_eq!(state.legal_moves(), &[20, 29, 34, 43]);
    }

    #[test]
    fn test_apply_move() {
        let state = GameState::initial();
        let next = state.apply_move(Action::Place(idx(2, 3))).unwrap();

        assert_eq!(next.current_player(), Player::Player2);
        assert_eq!(next.last_move(), Some(idx(2, 3)));
        assert_eq!(next.board().get_at(3, 3), Cell::Player1);
        assert_eq!(next.score(), Score { player1: 4, player2: 1 });
        assert_eq!(next.legal_moves(), next.legal_moves_for(Player::Player2).as_slice());
        // Original state untouched.
        assert_eq!(state.board().get_at(3, 3), Cell::Player2);
    }

    #[test]
    fn test_placement_adds_exactly_one_disc() {
        let mut state = GameState::initial();
        for _ in 0..10 {
            if state.is_terminal() {
                break;
            }
            let before = state.board().disc_count();
            let action = state.legal_actions()[0];
            state.apply_move_mut(action).unwrap();
            if let Action::Place(_) = action {
                assert_eq!(state.board().disc_count(), before + 1);
            }
        }
    }

    #[test]
    fn test_illegal_placement_rejected() {
        let mut state = GameState::initial();
        let err = state.apply_move_mut(Action::Place(0)).unwrap_err();
        assert_eq!(
            err,
            MoveError::Illegal {
                index: 0,
                legal: vec![19, 26, 37, 44]
            }
        );
        assert_eq!(state, GameState::initial());
    }

    #[test]
    fn test_occupied_and_out_of_range_rejected() {
        let state = GameState::initial();
        assert_eq!(
            state.apply_move(Action::Place(idx(3, 3))).unwrap_err(),
            MoveError::Occupied(idx(3, 3))
        );
        assert_eq!(
            state.apply_move(Action::Place(64)).unwrap_err(),
            MoveError::OutOfRange(64)
        );
    }

    #[test]
    fn test_pass_with_legal_moves_rejected() {
        let state = GameState::initial();
        assert!(matches!(
            state.apply_move(Action::Pass),
            Err(MoveError::PassWithLegalMoves { .. })
        ));
    }

    #[test]
    fn test_pass_switches_turn_only() {
        // Player1 has a single disc at (0,1) hemmed in; only Player2 can
        // move, into the corner.
        let mut player2: Vec<usize> = (0..NUM_CELLS).collect();
        player2.retain(|&i| i != 0 && i != 1);
        let board = board_with(&[1], &player2);
        let mut state = GameState::from_board(board, Player::Player1);

        assert!(state.legal_moves().is_empty());
        assert!(state.needs_pass());
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions(), vec![Action::Pass]);

        let before = *state.board();
        let flipped = state.apply_move_mut(Action::Pass).unwrap();
        assert!(flipped.is_empty());
        assert_eq!(state.current_player(), Player::Player2);
        assert_eq!(*state.board(), before);
        assert_eq!(state.last_move(), None);
        assert_eq!(state.legal_moves(), &[0]);
    }

    #[test]
    fn test_both_sides_stuck_is_terminal() {
        // All Player1 except one empty corner: nobody can capture.
        let player1: Vec<usize> = (1..NUM_CELLS).collect();
        let state = GameState::from_board(board_with(&player1, &[]), Player::Player1);

        assert!(state.is_terminal());
        assert!(!state.needs_pass());
        assert!(state.legal_actions().is_empty());
        assert_eq!(state.winner(), Some(GameOutcome::Winner(Player::Player1)));
        assert_eq!(state.apply_move(Action::Pass).unwrap_err(), MoveError::GameOver);
        assert_eq!(
            state.apply_move(Action::Place(0)).unwrap_err(),
            MoveError::GameOver
        );
    }

    #[test]
    fn test_full_board_is_terminal() {
        let player1: Vec<usize> = (0..32).collect();
        let player2: Vec<usize> = (32..64).collect();
        let state = GameState::from_board(board_with(&player1, &player2), Player::Player2);
        assert!(state.board().is_full());
        assert!(state.is_terminal());
        assert_eq!(state.winner(), Some(GameOutcome::Tie));
    }

    #[test]
    fn test_any_action_on_finished_game_is_game_over() {
        let player1: Vec<usize> = (0..40).collect();
        let player2: Vec<usize> = (40..64).collect();
        let state = GameState::from_board(board_with(&player1, &player2), Player::Player1);
        assert!(state.is_terminal());

        for action in [
            Action::Place(0),
            Action::Place(63),
            Action::Place(PASS_INDEX),
            Action::Place(usize::MAX),
            Action::Pass,
        ] {
            assert_eq!(state.apply_move(action).unwrap_err(), MoveError::GameOver);
        }
        assert_eq!(state.winner(), Some(GameOutcome::Winner(Player::Player1)));
    }

    #[test]
    fn test_final_move_fills_board() {
        // Player2 fills the corner and captures the lone Player1 disc.
        let mut player2: Vec<usize> = (0..NUM_CELLS).collect();
        player2.retain(|&i| i != 0 && i != 1);
        let state = GameState::from_board(board_with(&[1], &player2), Player::Player2);

        let end = state.apply_move(Action::Place(0)).unwrap();
        assert!(end.is_terminal());
        assert_eq!(end.score(), Score { player1: 0, player2: 64 });
        assert_eq!(end.winner(), Some(GameOutcome::Winner(Player::Player2)));
    }

    #[test]
    fn test_action_index_round_trip() {
        assert_eq!(Action::Pass.index(), PASS_INDEX);
        assert_eq!(Action::from_index(PASS_INDEX), Some(Action::Pass));
        assert_eq!(Action::from_index(12), Some(Action::Place(12)));
        assert_eq!(Action::from_index(PASS_INDEX + 1), None);
        for i in 0..=PASS_INDEX {
            assert_eq!(Action::from_index(i).unwrap().index(), i);
        }
    }
}
