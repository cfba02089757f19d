use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{rules, Action, GameState, ACTION_SPACE};

use super::agent::Agent;

/// Plays the placement that flips the most discs. Ties go to the lowest cell
/// index, or to a random tied cell while training.
pub struct GreedyAgent {
    rng: StdRng,
}

impl GreedyAgent {
    pub fn new() -> Self {
        GreedyAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        GreedyAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Legal cells with the largest flip count.
    fn best_cells(state: &GameState) -> Vec<usize> {
        let player = state.current_player();
        let mut best = Vec::new();
        let mut best_flips = 0;
        for &cell in state.legal_moves() {
            let flips = rules::captured_cells(state.board(), player, cell).len();
            if flips > best_flips {
                best_flips = flips;
                best.clear();
                best.push(cell);
            } else if flips == best_flips {
                best.push(cell);
            }
        }
        best
    }
}

impl Default for GreedyAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for GreedyAgent {
    fn select_action(&mut self, state: &GameState, training: bool) -> Action {
        let best = Self::best_cells(state);
        match best.len() {
            0 => Action::Pass,
            1 => Action::Place(best[0]),
            n if training => Action::Place(best[self.rng.random_range(0..n)]),
            _ => Action::Place(best[0]),
        }
    }

    fn name(&self) -> &str {
        "Greedy"
    }

    /// Uniform over the maximal-flip cells.
    fn action_probs(&mut self, state: &GameState) -> Vec<f32> {
        let best = Self::best_cells(state);
        if best.is_empty() {
            return super::agent::uniform_probs(state);
        }
        let mut probs = vec![0.0f32; ACTION_SPACE];
        let p = 1.0 / best.len() as f32;
        for cell in best {
            probs[cell] = p;
        }
        probs
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(GreedyAgent::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, Cell, Player, NUM_CELLS, PASS_INDEX};

    #[test]
    fn test_greedy_opening_takes_lowest_tied_cell() {
        // Every opening move flips exactly one disc.
        let mut agent = GreedyAgent::with_seed(0);
        let state = GameState::initial();
        assert_eq!(agent.select_action(&state, false), Action::Place(19));
    }

    #[test]
    fn test_greedy_prefers_more_flips() {
        // (0,0) flips two discs to the right, (7,0) flips one upward.
        let mut cells = [Cell::Empty; NUM_CELLS];
        cells[1] = Cell::Player2;
        cells[2] = Cell::Player2;
        cells[3] = Cell::Player1;
        cells[6 * 8] = Cell::Player2;
        cells[5 * 8] = Cell::Player1;
        let state = GameState::from_board(Board::from_cells(cells), Player::Player1);
        assert_eq!(state.legal_moves(), &[0, 56]);

        let mut agent = GreedyAgent::with_seed(0);
        assert_eq!(agent.select_action(&state, true), Action::Place(0));
        let probs = agent.action_probs(&state);
        assert_eq!(probs[0], 1.0);
        assert_eq!(probs[56], 0.0);
    }

    #[test]
    fn test_greedy_passes_when_stuck() {
        let mut cells = [Cell::Player2; NUM_CELLS];
        cells[0] = Cell::Empty;
        cells[1] = Cell::Player1;
        let state = GameState::from_board(Board::from_cells(cells), Player::Player1);
        let mut agent = GreedyAgent::with_seed(0);
        assert_eq!(agent.select_action(&state, false), Action::Pass);
        assert_eq!(agent.action_probs(&state)[PASS_INDEX], 1.0);
    }
}
